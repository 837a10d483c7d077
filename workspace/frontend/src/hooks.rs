use std::cell::Cell;
use std::rc::Rc;

use yew::Reducible;

/// Result of a fetch as seen by a view: the last good data, whether a request
/// is in flight, and the last failure message.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for FetchState<T> {
    /// Starts as loading: every hook fetches on mount.
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

pub enum FetchAction<T> {
    Begin,
    Succeed(T),
    Fail(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&String> {
        self.error.as_ref()
    }

    /// Loading with nothing to show yet.
    pub fn is_pending(&self) -> bool {
        self.loading && self.data.is_none()
    }

    /// Failed with nothing to show.
    pub fn is_failed(&self) -> bool {
        !self.loading && self.data.is_none() && self.error.is_some()
    }

    /// Previous data survives both a new request and a failure.
    pub fn transition(mut self, action: FetchAction<T>) -> Self {
        match action {
            FetchAction::Begin => {
                self.loading = true;
                self.error = None;
            }
            FetchAction::Succeed(data) => {
                self.data = Some(data);
                self.loading = false;
            }
            FetchAction::Fail(message) => {
                self.error = Some(message);
                self.loading = false;
            }
        }
        self
    }
}

impl<T: Clone + 'static> Reducible for FetchState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Rc::unwrap_or_clone(self).transition(action))
    }
}

#[derive(Debug, Default)]
struct TokenInner {
    cancelled: Cell<bool>,
    generation: Cell<u64>,
}

/// Cancellation token bound to a component's mount lifetime.
/// Each request takes a [`Ticket`]; only the newest ticket of a live token
/// may write its result back.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Rc<TokenInner>,
}

impl PartialEq for CancelToken {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        Ticket {
            inner: self.inner.clone(),
            generation,
        }
    }

    pub fn cancel(&self) {
        self.inner.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }
}

#[derive(Debug)]
pub struct Ticket {
    inner: Rc<TokenInner>,
    generation: u64,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        !self.inner.cancelled.get() && self.inner.generation.get() == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_pending() {
        let state = FetchState::<u32>::default();
        assert!(state.is_loading());
        assert!(state.is_pending());
        assert_eq!(state.data(), None);
    }

    #[test]
    fn test_success_clears_loading() {
        let state = FetchState::default().transition(FetchAction::Succeed(3));
        assert!(!state.is_loading());
        assert_eq!(state.data(), Some(&3));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let state = FetchState::default()
            .transition(FetchAction::Succeed(vec![1, 2]))
            .transition(FetchAction::Begin);
        assert!(state.is_loading());
        assert!(!state.is_pending());
        assert_eq!(state.data(), Some(&vec![1, 2]));

        let state = state.transition(FetchAction::Fail("HTTP error: 500".to_string()));
        assert_eq!(state.data(), Some(&vec![1, 2]));
        assert_eq!(state.error().map(String::as_str), Some("HTTP error: 500"));
        assert!(!state.is_failed());
    }

    #[test]
    fn test_begin_clears_error() {
        let state = FetchState::<u8>::default().transition(FetchAction::Fail("down".to_string()));
        assert!(state.is_failed());
        let state = state.transition(FetchAction::Begin);
        assert_eq!(state.error(), None);
        assert!(state.is_pending());
    }

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let token = CancelToken::new();
        let first = token.issue();
        assert!(first.is_current());
        let second = token.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_task_clone_sees_unmount() {
        let token = CancelToken::new();
        let held_by_task = token.clone();
        assert!(!held_by_task.is_cancelled());
        token.cancel();
        assert!(held_by_task.is_cancelled());
        assert_eq!(held_by_task, token);
    }

    #[test]
    fn test_cancel_invalidates_all_tickets() {
        let token = CancelToken::new();
        let ticket = token.issue();
        token.clone().cancel();
        assert!(token.is_cancelled());
        assert!(!ticket.is_current());
        assert!(!token.issue().is_current());
    }
}
