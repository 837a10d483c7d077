use yew::prelude::*;

/// Network-level failures read differently from a server that answered badly.
fn headline(message: &str) -> &'static str {
    if message.starts_with("Request failed") {
        "Can't reach Stash right now"
    } else {
        "This page didn't load"
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Usually the fetch hook's `refetch`.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Fetch failed, showing error card: {}", props.message);

    let retry = props.on_retry.clone().map(|on_retry| {
        Callback::from(move |_: MouseEvent| {
            log::debug!("Retrying failed fetch");
            on_retry.emit(());
        })
    });

    html! {
        <div class="flex flex-col items-center text-center py-12 gap-3 max-w-md mx-auto">
            <div class="w-14 h-14 rounded-2xl bg-error/10 flex items-center justify-center">
                <i class="fas fa-plug-circle-xmark text-error text-2xl"></i>
            </div>
            <div class="text-base font-bold">{headline(&props.message)}</div>
            <p class="text-xs opacity-60">{props.message.clone()}</p>
            if let Some(onclick) = retry {
                <button class="btn btn-primary btn-sm rounded-xl mt-1" {onclick}>
                    <i class="fas fa-rotate-right"></i>
                    {" Try Again"}
                </button>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::ApiError;

    #[test]
    fn test_headline_separates_network_from_server_errors() {
        let offline = ApiError::Request("NetworkError".to_string()).to_string();
        assert_eq!(headline(&offline), "Can't reach Stash right now");

        let server = ApiError::from_status(500, None).to_string();
        assert_eq!(headline(&server), "This page didn't load");
        assert_eq!(headline("Failed to parse response: eof"), "This page didn't load");
    }
}
