use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings;

#[derive(Debug, Clone, PartialEq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Info => "alert-info",
            ToastType::Success => "alert-success",
            ToastType::Warning => "alert-warning",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "fas fa-info-circle",
            ToastType::Success => "fas fa-check-circle",
            ToastType::Warning => "fas fa-exclamation-triangle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

#[derive(Debug, Default, PartialEq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

impl ToastStack {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastType, u32)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    fn show(&self, message: String, toast_type: ToastType) {
        let duration = settings::get_settings().toast_duration_ms;
        self.add_toast.emit((message, toast_type, duration));
    }

    pub fn show_info(&self, message: String) {
        self.show(message, ToastType::Info);
    }

    pub fn show_success(&self, message: String) {
        self.show(message, ToastType::Success);
    }

    pub fn show_warning(&self, message: String) {
        self.show(message, ToastType::Warning);
    }

    pub fn show_error(&self, message: String) {
        self.show(message, ToastType::Error);
    }

    /// Toast with its own lifetime instead of the configured default.
    pub fn show_for(&self, message: String, toast_type: ToastType, duration_ms: u32) {
        self.add_toast.emit((message, toast_type, duration_ms));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let stack = use_reducer(ToastStack::default);
    let next_id = use_mut_ref(|| 0usize);

    let add_toast = {
        let dispatcher = stack.dispatcher();

        Callback::from(move |(message, toast_type, duration_ms): (String, ToastType, u32)| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            log::debug!("Showing toast {} for {} ms", id, duration_ms);
            dispatcher.dispatch(ToastAction::Push(Toast {
                id,
                message,
                toast_type,
            }));

            let dispatcher = dispatcher.clone();
            Timeout::new(duration_ms, move || dispatcher.dispatch(ToastAction::Dismiss(id))).forget();
        })
    };

    let remove_toast = {
        let dispatcher = stack.dispatcher();
        Callback::from(move |id: usize| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let context = ToastContext {
        add_toast,
        remove_toast: remove_toast.clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for stack.toasts().iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: usize, message: &str) -> Toast {
        Toast {
            id,
            message: message.to_string(),
            toast_type: ToastType::Info,
        }
    }

    #[test]
    fn test_push_keeps_order() {
        let stack = Rc::new(ToastStack::default())
            .reduce(ToastAction::Push(toast(1, "one")))
            .reduce(ToastAction::Push(toast(2, "two")));
        let ids: Vec<usize> = stack.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let stack = Rc::new(ToastStack::default())
            .reduce(ToastAction::Push(toast(1, "one")))
            .reduce(ToastAction::Push(toast(2, "two")))
            .reduce(ToastAction::Dismiss(1))
            .reduce(ToastAction::Dismiss(7));
        assert_eq!(stack.toasts().len(), 1);
        assert_eq!(stack.toasts()[0].message, "two");
    }
}
