use yew::prelude::*;

use super::error::ErrorDisplay;
use super::loading::LoadingSkeleton;
use crate::hooks::FetchState;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or(3)]
    pub skeleton_rows: usize,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.skeleton_rows == other.skeleton_rows
    }
}

/// Component that handles rendering based on FetchState
/// - nothing loaded yet: skeleton
/// - failed with nothing loaded: error display with optional retry
/// - otherwise: render callback with the data, even while a refetch runs
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    render_fetch(&props.state, props.skeleton_rows, props.on_retry.clone(), |data| {
        props.render.emit(data.clone())
    })
}

/// Inline variant of [`FetchRender`] for views that render from a borrowed state.
pub fn render_fetch<T>(
    state: &FetchState<T>,
    skeleton_rows: usize,
    on_retry: Option<Callback<()>>,
    render: impl FnOnce(&T) -> Html,
) -> Html {
    if let Some(data) = state.data() {
        return render(data);
    }
    match state.error() {
        Some(err) if !state.is_loading() => html! {
            <ErrorDisplay message={err.clone()} {on_retry} />
        },
        _ => html! { <LoadingSkeleton rows={skeleton_rows} /> },
    }
}
