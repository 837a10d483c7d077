use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Gradient,
    Outlined,
}

impl CardVariant {
    fn class(&self) -> &'static str {
        match self {
            CardVariant::Default => "bg-base-100 border border-base-300 shadow-sm",
            CardVariant::Elevated => "bg-base-100 border border-base-300 shadow-lg",
            CardVariant::Gradient => "bg-gradient-to-br from-primary/5 via-base-100 to-accent/5 border border-base-300 shadow-sm",
            CardVariant::Outlined => "border border-base-300 bg-transparent",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or(true)]
    pub hover: bool,
    #[prop_or(true)]
    pub padded: bool,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let classes = classes!(
        "card",
        "rounded-2xl",
        "text-left",
        "w-full",
        props.variant.class(),
        props.padded.then_some("p-5"),
        props.onclick.is_some().then_some("cursor-pointer"),
        props.hover.then_some("transition-all duration-300 hover:shadow-lg hover:-translate-y-0.5"),
        props.class.clone(),
    );

    match &props.onclick {
        Some(onclick) => html! {
            <button class={classes} onclick={onclick.clone()}>
                { for props.children.iter() }
            </button>
        },
        None => html! {
            <div class={classes}>
                { for props.children.iter() }
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_differ_in_depth() {
        assert!(CardVariant::Elevated.class().contains("shadow-lg"));
        assert!(CardVariant::default().class().contains("shadow-sm"));
        assert!(!CardVariant::Outlined.class().contains("shadow"));
    }
}
