//! # Console Adapter
//!
//! Implements `EventSource` and `CommandContext` over a line-based reader, so the engine
//! can be driven from a terminal without a chat network.
//!
//! Lines starting with `/` change the simulated conversation:
//! - `/group <channel>`: post into a group channel
//! - `/dm`: talk to the bot directly
//! - `/as <user>`: change the author
//!
//! Every other non-empty line is delivered as a message. Replies are pushed to an outbox
//! channel that the host prints.
//!
//! Stdin is read on its own OS thread. A read pending on tokio's blocking pool cannot be
//! cancelled and would hold up runtime shutdown until the next newline.

use async_trait::async_trait;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_stream::wrappers::{LinesStream, ReceiverStream};
use tokio_stream::{Stream, StreamExt};

use crate::domain::traits::{CommandContext, EventSource, IncomingMessage};
use crate::domain::types::{ContextKind, Source};

pub const DEFAULT_CHANNEL: &str = "general";
pub const DEFAULT_AUTHOR: &str = "console";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Group(String),
    Direct,
    As(String),
    Message(String),
    Empty,
}

pub fn parse_directive(line: &str) -> Directive {
    let line = line.trim();
    if line.is_empty() {
        return Directive::Empty;
    }

    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("/dm"), None, _) => Directive::Direct,
        (Some("/group"), Some(channel), None) => Directive::Group(channel.to_string()),
        (Some("/as"), Some(user), None) => Directive::As(user.to_string()),
        _ => Directive::Message(line.to_string()),
    }
}

/// A conversation on the console. Replies go to the outbox.
#[derive(Clone)]
pub struct ConsoleContext {
    source: Source,
    outbox: UnboundedSender<String>,
}

#[async_trait]
impl CommandContext for ConsoleContext {
    fn source(&self) -> &Source {
        &self.source
    }

    async fn reply(&self, content: &str) -> Result<(), String> {
        tracing::info!("Bot replying in {}: {}", self.source.channel_id, content);
        self.outbox
            .send(format!("[{}] {}", self.source.channel_id, content))
            .map_err(|e| e.to_string())
    }
}

/// Lines read by a background thread.
pub type ThreadLines = ReceiverStream<io::Result<String>>;

pub struct ConsoleSource<S> {
    lines: S,
    current: Source,
    outbox: UnboundedSender<String>,
}

impl<R: AsyncBufRead + Unpin + Send> ConsoleSource<LinesStream<R>> {
    /// Returns the source and the receiving end of its reply outbox.
    pub fn new(reader: R) -> (Self, UnboundedReceiver<String>) {
        ConsoleSource::from_lines(LinesStream::new(reader.lines()))
    }
}

impl<S: Stream<Item = io::Result<String>> + Unpin + Send> ConsoleSource<S> {
    pub fn from_lines(lines: S) -> (Self, UnboundedReceiver<String>) {
        let (outbox, replies) = mpsc::unbounded_channel();
        let source = Self {
            lines,
            current: Source::group(DEFAULT_CHANNEL, DEFAULT_AUTHOR),
            outbox,
        };
        (source, replies)
    }

    /// The conversation new messages are attributed to.
    pub fn current(&self) -> &Source {
        &self.current
    }

    fn apply(&mut self, directive: Directive) -> Option<IncomingMessage> {
        let author = self.current.author_id.clone();
        match directive {
            Directive::Empty => None,
            Directive::Group(channel) => {
                self.current = Source::group(channel, author);
                None
            }
            Directive::Direct => {
                self.current = Source::direct(author);
                None
            }
            Directive::As(user) => {
                self.current = match self.current.kind {
                    ContextKind::Group => Source::group(self.current.channel_id.clone(), user),
                    ContextKind::Direct => Source::direct(user),
                };
                None
            }
            Directive::Message(text) => Some(IncomingMessage {
                text,
                context: Arc::new(ConsoleContext {
                    source: self.current.clone(),
                    outbox: self.outbox.clone(),
                }),
            }),
        }
    }
}

/// Read `reader` line by line on a detached thread. The stream ends at EOF, after the
/// first read error, or once the receiver is dropped.
pub fn spawn_reader<B>(reader: B) -> io::Result<ThreadLines>
where
    B: io::BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(64);
    std::thread::Builder::new()
        .name("console-reader".into())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        })?;
    Ok(ReceiverStream::new(rx))
}

/// A console source reading from the process's standard input.
pub fn stdin() -> io::Result<(ConsoleSource<ThreadLines>, UnboundedReceiver<String>)> {
    let lines = spawn_reader(io::BufReader::new(io::stdin()))?;
    Ok(ConsoleSource::from_lines(lines))
}

#[async_trait]
impl<S: Stream<Item = io::Result<String>> + Unpin + Send> EventSource for ConsoleSource<S> {
    async fn next_event(&mut self) -> Option<IncomingMessage> {
        while let Some(line) = self.lines.next().await {
            match line {
                Ok(line) => {
                    if let Some(message) = self.apply(parse_directive(&line)) {
                        return Some(message);
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read console input: {}", e);
                    return None;
                }
            }
        }
        None
    }
}
