//! # Domain Types
//!
//! Describes where a message came from and who sent it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of conversation a message was posted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextKind {
    /// A shared channel with several members (a guild channel, a room).
    Group,
    /// A one-to-one conversation with the bot.
    Direct,
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextKind::Group => write!(f, "group"),
            ContextKind::Direct => write!(f, "direct"),
        }
    }
}

/// Raw source identity of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub kind: ContextKind,
    pub channel_id: String,
    pub author_id: String,
    pub author_name: String,
}

impl Source {
    pub fn group(channel_id: impl Into<String>, author: impl Into<String>) -> Self {
        let author = author.into();
        Self {
            kind: ContextKind::Group,
            channel_id: channel_id.into(),
            author_id: author.clone(),
            author_name: author,
        }
    }

    pub fn direct(author: impl Into<String>) -> Self {
        let author = author.into();
        Self {
            kind: ContextKind::Direct,
            channel_id: format!("dm:{author}"),
            author_id: author.clone(),
            author_name: author,
        }
    }

    pub fn is_group(&self) -> bool {
        self.kind == ContextKind::Group
    }

    pub fn is_direct(&self) -> bool {
        self.kind == ContextKind::Direct
    }
}
