//! Transcript state shared by the chat page and the floating chat widget.

use crate::ChatReply;

pub const FAILURE_REPLY: &str = "Sorry, I couldn't process that. Try again!";

pub const PAGE_WELCOME: &str = "Hey! I'm **Stash AI** 🤖 — your student finance buddy.\n\n\
I know your budget, spending habits, and Dublin inside out. Ask me anything about:\n\n\
• 💰 Your finances & budget\n• 🏙️ Dublin living tips\n• 🛒 Grocery prices\n\
• 💱 Exchange rates\n• 🎁 Student discounts";

pub const WIDGET_WELCOME: &str = "Hey! I'm **Stash AI** 🤖 — your personal student finance assistant.\n\n\
I know your budget, spending habits, and Dublin inside out. Ask me anything!";

/// `(icon, prompt)` pairs offered before the first question.
pub const PAGE_PROMPTS: [(&str, &str); 8] = [
    ("💰", "How's my budget?"),
    ("🪪", "How do I apply for IRP?"),
    ("🥛", "Where's the cheapest milk?"),
    ("💱", "When should I transfer money?"),
    ("🚌", "Transport tips in Dublin"),
    ("🎁", "Show me student discounts"),
    ("🏠", "How to find accommodation?"),
    ("🔥", "Tell me about my streak"),
];

pub const WIDGET_PROMPTS: [(&str, &str); 6] = [
    ("💰", "How's my budget?"),
    ("🥛", "Cheapest groceries?"),
    ("💱", "When to transfer?"),
    ("🎁", "Student discounts"),
    ("🚌", "Dublin transport tips"),
    ("🔥", "My streak status"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u32,
    pub role: Role,
    pub content: String,
    pub sources: Vec<String>,
}

impl Message {
    /// `"A · B"`, or `None` when the reply cited nothing.
    pub fn sources_line(&self) -> Option<String> {
        if self.sources.is_empty() {
            None
        } else {
            Some(self.sources.join(" · "))
        }
    }
}

/// A transcript that always starts with the assistant's welcome message.
/// At most one question is in flight at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    welcome: &'static str,
    messages: Vec<Message>,
    next_id: u32,
    pending: bool,
}

impl Conversation {
    pub fn new(welcome: &'static str) -> Self {
        let mut conversation = Self {
            welcome,
            messages: Vec::new(),
            next_id: 0,
            pending: false,
        };
        conversation.push(Role::Assistant, welcome.to_string(), Vec::new());
        conversation
    }

    fn push(&mut self, role: Role, content: String, sources: Vec<String>) {
        self.messages.push(Message {
            id: self.next_id,
            role,
            content,
            sources,
        });
        self.next_id += 1;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Records the user's question and returns the text to send, or `None`
    /// for blank input or while a reply is outstanding.
    pub fn ask(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        self.push(Role::User, text.to_string(), Vec::new());
        self.pending = true;
        Some(text.to_string())
    }

    pub fn receive(&mut self, reply: ChatReply) {
        self.push(Role::Assistant, reply.response, reply.sources);
        self.pending = false;
    }

    pub fn fail(&mut self) {
        self.push(Role::Assistant, FAILURE_REPLY.to_string(), Vec::new());
        self.pending = false;
    }

    /// Quick prompts stay visible until the first question.
    pub fn show_quick_prompts(&self) -> bool {
        self.messages.len() <= 1
    }

    pub fn user_message_count(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }

    pub fn clear(&mut self) {
        *self = Self::new(self.welcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_welcome() {
        let chat = Conversation::new(WIDGET_WELCOME);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, Role::Assistant);
        assert!(chat.show_quick_prompts());
    }

    #[test]
    fn test_ask_and_receive() {
        let mut chat = Conversation::new(PAGE_WELCOME);
        assert_eq!(chat.ask("  How's my budget?  "), Some("How's my budget?".to_string()));
        assert!(chat.is_pending());
        assert!(!chat.show_quick_prompts());
        assert_eq!(chat.ask("another"), None);

        chat.receive(ChatReply {
            response: "You have **€143** left.".to_string(),
            sources: vec!["budget".to_string(), "transactions".to_string()],
        });
        assert!(!chat.is_pending());
        let last = chat.messages().last().unwrap();
        assert_eq!(last.sources_line().as_deref(), Some("budget · transactions"));
        assert_eq!(chat.user_message_count(), 1);
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut chat = Conversation::new(PAGE_WELCOME);
        assert_eq!(chat.ask("   "), None);
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_failure_apologises() {
        let mut chat = Conversation::new(PAGE_WELCOME);
        chat.ask("hi");
        chat.fail();
        let last = chat.messages().last().unwrap();
        assert_eq!(last.content, FAILURE_REPLY);
        assert_eq!(last.sources_line(), None);
        assert!(!chat.is_pending());
    }

    #[test]
    fn test_clear_restores_welcome() {
        let mut chat = Conversation::new(WIDGET_WELCOME);
        chat.ask("hi");
        chat.fail();
        chat.clear();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].content, WIDGET_WELCOME);
        assert!(chat.show_quick_prompts());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut chat = Conversation::new(PAGE_WELCOME);
        chat.ask("a");
        chat.fail();
        chat.ask("b");
        chat.fail();
        let mut ids: Vec<u32> = chat.messages().iter().map(|m| m.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
