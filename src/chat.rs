//! AnaemiBot conversation state.

use std::rc::Rc;

use chrono::{DateTime, Local};
use gloo_timers::future::TimeoutFuture;
use log::debug;
use yew::Reducible;

use crate::config;
use crate::content::FaqEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

/// Answer waiting to be posted once the typing delay has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReply {
    answer: String,
}

impl From<&FaqEntry> for PendingReply {
    fn from(entry: &FaqEntry) -> Self {
        Self {
            answer: entry.answer.clone(),
        }
    }
}

impl PendingReply {
    pub async fn wait(self) -> Self {
        TimeoutFuture::new(config::CHAT_REPLY_DELAY_MS).await;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    open: bool,
    awaiting: bool,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatSession {
    pub fn new(greeting: &str) -> Self {
        let mut session = Self {
            open: false,
            awaiting: false,
            messages: Vec::new(),
            next_id: 1,
        };
        session.push(Role::Bot, greeting.to_string());
        session
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while the bot is "typing"; quick questions are disabled.
    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Posts the question as the user. Returns `None` if a reply is already
    /// pending.
    pub fn ask(&mut self, entry: &FaqEntry) -> Option<PendingReply> {
        if self.awaiting {
            return None;
        }
        self.push(Role::User, entry.question.clone());
        self.awaiting = true;
        Some(PendingReply::from(entry))
    }

    /// Posts the bot's answer. Ignored unless a question is waiting for one.
    pub fn deliver(&mut self, reply: PendingReply) {
        if !self.awaiting {
            debug!("dropping reply with no question pending");
            return;
        }
        self.awaiting = false;
        self.push(Role::Bot, reply.answer);
    }

    fn push(&mut self, role: Role, text: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            text,
            timestamp: Local::now(),
        });
        self.next_id += 1;
    }
}

pub enum ChatAction {
    Toggle,
    Close,
    Ask(FaqEntry),
    Deliver(PendingReply),
}

impl Reducible for ChatSession {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Toggle => next.toggle(),
            ChatAction::Close => next.close(),
            ChatAction::Ask(entry) => {
                if next.ask(&entry).is_none() {
                    debug!("question ignored while a reply is pending");
                }
            }
            ChatAction::Deliver(reply) => next.deliver(reply),
        }
        Rc::new(next)
    }
}

pub fn format_time(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use chrono::TimeZone;

    fn session() -> (ChatSession, SiteContent) {
        let content = SiteContent::load().unwrap();
        (ChatSession::new(&content.chat_greeting), content)
    }

    #[test]
    fn starts_closed_with_greeting() {
        let (chat, content) = session();
        assert!(!chat.is_open());
        assert!(!chat.is_awaiting());
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, Role::Bot);
        assert_eq!(chat.messages()[0].text, content.chat_greeting);
    }

    #[test]
    fn quick_question_appends_question_then_answer() {
        let (mut chat, content) = session();
        let entry = content.answer_for("What is anaemia?").unwrap();

        let pending = chat.ask(entry).unwrap();
        assert!(chat.is_awaiting());
        assert_eq!(chat.messages().len(), 2);

        chat.deliver(pending);
        assert!(!chat.is_awaiting());

        let messages = chat.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].text, "What is anaemia?");
        assert_eq!(messages[2].role, Role::Bot);
        assert_eq!(messages[2].text, entry.answer);
    }

    #[test]
    fn second_question_is_ignored_while_awaiting() {
        let (mut chat, content) = session();
        let pending = chat.ask(&content.faq[0]).unwrap();
        assert!(chat.ask(&content.faq[1]).is_none());
        assert_eq!(chat.messages().len(), 2);

        chat.deliver(pending);
        assert!(chat.ask(&content.faq[1]).is_some());
    }

    #[test]
    fn every_question_adds_exactly_two_messages() {
        let (mut chat, content) = session();
        for (i, entry) in content.faq.iter().enumerate() {
            let pending = chat.ask(entry).unwrap();
            chat.deliver(pending);
            assert_eq!(chat.messages().len(), 1 + 2 * (i + 1));
        }
    }

    #[test]
    fn toggle_flips_visibility_and_keeps_history() {
        let (mut chat, content) = session();
        let pending = chat.ask(&content.faq[2]).unwrap();
        chat.deliver(pending);

        chat.toggle();
        assert!(chat.is_open());
        chat.toggle();
        assert!(!chat.is_open());
        chat.toggle();
        assert!(chat.is_open());
        chat.close();
        assert!(!chat.is_open());

        assert_eq!(chat.messages().len(), 3);
    }

    #[test]
    fn reply_lands_even_if_panel_was_closed() {
        let (mut chat, content) = session();
        chat.toggle();
        let pending = chat.ask(&content.faq[0]).unwrap();
        chat.close();
        chat.deliver(pending);
        assert_eq!(chat.messages().len(), 3);
        assert!(!chat.is_open());
    }

    #[test]
    fn ids_strictly_increase() {
        let (mut chat, content) = session();
        for entry in &content.faq {
            let pending = chat.ask(entry).unwrap();
            chat.deliver(pending);
        }
        let ids: Vec<u64> = chat.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn stray_reply_is_not_posted() {
        let (mut chat, content) = session();
        chat.deliver(PendingReply::from(&content.faq[1]));
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.is_awaiting());
    }

    #[test]
    fn reducer_drives_a_full_exchange() {
        let (chat, content) = session();
        let entry = content.faq[3].clone();

        let chat = Rc::new(chat).reduce(ChatAction::Toggle);
        assert!(chat.is_open());

        let chat = chat.reduce(ChatAction::Ask(entry.clone()));
        let chat = chat.reduce(ChatAction::Ask(content.faq[0].clone()));
        assert!(chat.is_awaiting());
        assert_eq!(chat.messages().len(), 2);

        // The same reply arriving twice only lands once.
        let chat = chat.reduce(ChatAction::Deliver(PendingReply::from(&entry)));
        let chat = chat.reduce(ChatAction::Deliver(PendingReply::from(&entry)));
        assert_eq!(chat.messages().len(), 3);
        assert_eq!(chat.messages()[2].text, entry.answer);

        let chat = chat.reduce(ChatAction::Close);
        assert!(!chat.is_open());
    }

    #[test]
    fn time_is_hours_and_minutes() {
        let ts = Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 42).unwrap();
        assert_eq!(format_time(&ts), "09:07");
    }
}
