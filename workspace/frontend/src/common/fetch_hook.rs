use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::api_client::ApiError;
use crate::hooks::{CancelToken, FetchAction, FetchState};

/// Token cancelled when the calling component unmounts. Mutation tasks check
/// it after their `await` before touching component state.
#[hook]
pub fn use_mount_token() -> Rc<CancelToken> {
    let token = use_memo((), |_| CancelToken::new());
    {
        let token = token.clone();
        use_effect_with((), move |_| move || token.cancel());
    }
    token
}

/// Fetches on mount and exposes a `refetch` callback.
#[hook]
pub fn use_fetch<T, F, Fut>(fetch_fn: F) -> (UseReducerHandle<FetchState<T>>, Callback<()>)
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    use_fetch_with_deps(fetch_fn, ())
}

/// Like [`use_fetch`], but also refetches whenever `deps` changes.
///
/// Results are written back only while the component is mounted, and only
/// for the most recent request.
#[hook]
pub fn use_fetch_with_deps<T, F, Fut, D>(
    fetch_fn: F,
    deps: D,
) -> (UseReducerHandle<FetchState<T>>, Callback<()>)
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    D: PartialEq + 'static,
{
    let state = use_reducer(FetchState::<T>::default);
    let token = use_mount_token();

    // The closure may capture render-time values, so always keep the latest one.
    let latest = use_mut_ref(|| None::<Rc<F>>);
    *latest.borrow_mut() = Some(Rc::new(fetch_fn));

    let refetch = {
        let dispatcher = state.dispatcher();
        let token = token.clone();
        let latest = latest.clone();

        use_callback((), move |_: (), _| {
            let Some(fetch_fn) = latest.borrow().clone() else {
                return;
            };
            let ticket = token.issue();
            dispatcher.dispatch(FetchAction::Begin);

            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = (*fetch_fn)().await;
                if !ticket.is_current() {
                    log::debug!("Discarding stale or unmounted fetch result");
                    return;
                }
                match result {
                    Ok(data) => dispatcher.dispatch(FetchAction::Succeed(data)),
                    Err(err) => dispatcher.dispatch(FetchAction::Fail(err.to_string())),
                }
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
            || ()
        });
    }

    (state, refetch)
}
