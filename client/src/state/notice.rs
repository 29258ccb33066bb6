//! Transient user notices (success/info/warning/error).
//!
//! DESIGN
//! ======
//! A root-level queue replaces ad-hoc toast DOM nodes. Pages push messages,
//! `NoticeTray` renders them, and each one expires after the configured TTL.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    /// CSS modifier for the tray item.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Info => "notice--info",
            Self::Warning => "notice--warning",
            Self::Error => "notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Ordered queue of visible notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
