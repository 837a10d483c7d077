use stylist::yew::styled_component;
use yew::prelude::*;

const ROW_WIDTHS: [[&str; 3]; 3] = [
    ["w-3/5", "w-2/5", "w-4/5"],
    ["w-2/3", "w-1/3", "w-3/5"],
    ["w-1/2", "w-3/4", "w-2/5"],
];

#[derive(Properties, PartialEq)]
pub struct LoadingSkeletonProps {
    #[prop_or(3)]
    pub rows: usize,
}

/// Placeholder cards shown while a page's first fetch is in flight.
#[styled_component]
pub fn LoadingSkeleton(props: &LoadingSkeletonProps) -> Html {
    let shimmer = css!(
        r#"
        background: linear-gradient(90deg, rgba(128,128,128,0.12) 25%, rgba(128,128,128,0.28) 50%, rgba(128,128,128,0.12) 75%);
        background-size: 200% 100%;
        animation: stash-shimmer 1.4s ease-in-out infinite;

        @keyframes stash-shimmer {
            0% { background-position: 200% 0; }
            100% { background-position: -200% 0; }
        }
        "#
    );

    html! {
        <div class="space-y-4 max-w-3xl mx-auto">
            { for (0..props.rows).map(|i| {
                let widths = ROW_WIDTHS[i % ROW_WIDTHS.len()];
                html! {
                    <div key={i} class="card bg-base-100 border border-base-300 p-5">
                        <div class={classes!("h-4", "rounded-lg", "mb-3", widths[0], shimmer.clone())}></div>
                        <div class={classes!("h-3", "rounded-lg", "mb-2", widths[1], shimmer.clone())}></div>
                        <div class={classes!("h-3", "rounded-lg", widths[2], shimmer.clone())}></div>
                    </div>
                }
            }) }
        </div>
    }
}

/// Centered loading spinner without text
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex justify-center items-center py-12">
            <span class="loading loading-spinner loading-lg"></span>
        </div>
    }
}
