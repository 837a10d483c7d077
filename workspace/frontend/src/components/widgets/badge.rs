use stash_common::progress::Tone;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Danger,
    #[default]
    Neutral,
    Info,
    Accent,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge-primary",
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Warning => "badge-warning",
            BadgeVariant::Danger => "badge-error",
            BadgeVariant::Neutral => "badge-ghost",
            BadgeVariant::Info => "badge-info",
            BadgeVariant::Accent => "badge-accent",
        }
    }

    /// Name-based lookup for server-supplied variants; unknown names are neutral.
    pub fn named(name: &str) -> Self {
        match name {
            "primary" => BadgeVariant::Primary,
            "success" => BadgeVariant::Success,
            "warning" => BadgeVariant::Warning,
            "danger" => BadgeVariant::Danger,
            "info" => BadgeVariant::Info,
            "accent" => BadgeVariant::Accent,
            _ => BadgeVariant::Neutral,
        }
    }
}

impl From<Tone> for BadgeVariant {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Success => BadgeVariant::Success,
            Tone::Warning => BadgeVariant::Warning,
            Tone::Danger => BadgeVariant::Danger,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: BadgeVariant,
    #[prop_or_default]
    pub small: bool,
    #[prop_or_default]
    pub dot: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!(
            "badge",
            "gap-1.5",
            "font-semibold",
            "uppercase",
            "tracking-wide",
            props.variant.class(),
            if props.small { "badge-sm" } else { "badge-md" },
            props.class.clone(),
        )}>
            if props.dot {
                <span class="w-1.5 h-1.5 rounded-full bg-current"></span>
            }
            { for props.children.iter() }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_tone() {
        assert_eq!(BadgeVariant::from(Tone::Danger), BadgeVariant::Danger);
        assert_eq!(BadgeVariant::from(Tone::Success).class(), "badge-success");
    }

    #[test]
    fn test_named_variant() {
        assert_eq!(BadgeVariant::named("danger"), BadgeVariant::Danger);
        assert_eq!(BadgeVariant::named("mystery"), BadgeVariant::Neutral);
    }
}
