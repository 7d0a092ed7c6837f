//! Test doubles for the engine's collaborators.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::command::HandlerFuture;
use crate::application::scheduler::TaskScheduler;
use crate::domain::traits::CommandContext;
use crate::domain::types::Source;

/// A context that stores every reply.
pub struct RecordingContext {
    source: Source,
    replies: Mutex<Vec<String>>,
}

impl RecordingContext {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            replies: Mutex::new(Vec::new()),
        }
    }

    pub fn group(channel: &str, author: &str) -> Self {
        Self::new(Source::group(channel, author))
    }

    pub fn direct(author: &str) -> Self {
        Self::new(Source::direct(author))
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandContext for RecordingContext {
    fn source(&self) -> &Source {
        &self.source
    }

    async fn reply(&self, content: &str) -> Result<(), String> {
        self.replies.lock().unwrap().push(content.to_string());
        Ok(())
    }
}

/// Holds spawned tasks until the test runs them.
#[derive(Default)]
pub struct ManualScheduler {
    tasks: Mutex<Vec<(String, HandlerFuture)>>,
}

impl ManualScheduler {
    pub fn labels(&self) -> Vec<String> {
        self.tasks.lock().unwrap().iter().map(|(label, _)| label.clone()).collect()
    }

    /// Run every queued task to completion, in submission order.
    pub async fn run_all(&self) -> Vec<anyhow::Result<()>> {
        let tasks: Vec<_> = self.tasks.lock().unwrap().drain(..).collect();
        let mut results = Vec::with_capacity(tasks.len());
        for (_, task) in tasks {
            results.push(task.await);
        }
        results
    }
}

impl TaskScheduler for ManualScheduler {
    fn spawn(&self, label: String, task: HandlerFuture) {
        self.tasks.lock().unwrap().push((label, task));
    }
}
