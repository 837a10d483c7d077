use web_sys::window;
use yew::prelude::*;

use crate::storage::{BrowserStorage, StoragePort};

pub const THEME_KEY: &str = "stash-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Stored preference, else the system colour scheme, else dark.
pub fn initial_theme(store: &dyn StoragePort, system_prefers_light: Option<bool>) -> Theme {
    if let Some(theme) = store.get(THEME_KEY).as_deref().and_then(Theme::parse) {
        return theme;
    }
    match system_prefers_light {
        Some(true) => Theme::Light,
        _ => Theme::Dark,
    }
}

pub fn persist(store: &dyn StoragePort, theme: Theme) {
    if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
        log::warn!("Theme preference not saved: {}", e);
    }
}

fn system_prefers_light() -> Option<bool> {
    let query = window()?
        .match_media("(prefers-color-scheme: light)")
        .ok()
        .flatten()?;
    Some(query.matches())
}

fn apply_to_document(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let _ = classes.remove_1(theme.toggled().as_str());
    let _ = classes.add_1(theme.as_str());
    let _ = root.set_attribute("data-theme", theme.as_str());
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub set: Callback<Theme>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn toggle(&self) {
        self.set.emit(self.theme.toggled());
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| initial_theme(&BrowserStorage, system_prefers_light()));

    use_effect_with(*theme, |theme| {
        log::debug!("Applying {} theme", theme.as_str());
        apply_to_document(*theme);
        persist(&BrowserStorage, *theme);
        || ()
    });

    let set = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| theme.set(next))
    };

    let context = ThemeContext { theme: *theme, set };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_stored_preference_wins() {
        let store = MemoryStore::with(&[(THEME_KEY, "light")]);
        assert_eq!(initial_theme(&store, Some(false)), Theme::Light);
    }

    #[test]
    fn test_falls_back_to_system_then_dark() {
        let store = MemoryStore::new();
        assert_eq!(initial_theme(&store, Some(true)), Theme::Light);
        assert_eq!(initial_theme(&store, Some(false)), Theme::Dark);
        assert_eq!(initial_theme(&store, None), Theme::Dark);
    }

    #[test]
    fn test_garbage_preference_is_ignored() {
        let store = MemoryStore::with(&[(THEME_KEY, "sepia")]);
        assert_eq!(initial_theme(&store, None), Theme::Dark);
    }

    #[test]
    fn test_persist_then_reload() {
        let store = MemoryStore::new();
        persist(&store, Theme::Dark.toggled());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(initial_theme(&store, Some(false)), Theme::Light);
    }
}
