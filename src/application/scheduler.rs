//! # Task Scheduler
//!
//! Runs command handlers as independent fire-and-forget tasks.
//!
//! The dispatcher never spawns on its own; the host injects a [`TaskScheduler`] and so
//! decides concurrency limits, timeouts and shutdown draining. [`TokioScheduler`] is the
//! default implementation.

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{Notify, Semaphore};

use crate::application::command::HandlerFuture;
use crate::domain::config::DispatchConfig;

pub trait TaskScheduler: Send + Sync {
    /// Start `task` without waiting for it. `label` identifies the task in logs.
    fn spawn(&self, label: String, task: HandlerFuture);
}

/// Spawns onto a tokio runtime, with at most `max_concurrent` tasks running at once.
/// Tasks beyond the limit wait for a free slot. The order in which waiting tasks start
/// is up to the runtime.
///
/// Handler errors, panics and timeouts are logged and never reach the caller or
/// sibling tasks.
pub struct TokioScheduler {
    handle: Handle,
    permits: Arc<Semaphore>,
    max_concurrent: usize,
    timeout: Option<Duration>,
    closed: AtomicBool,
    pending: Arc<AtomicUsize>,
    idle: Arc<Notify>,
}

/// Counts a task as accepted until it is dropped.
struct InFlight {
    pending: Arc<AtomicUsize>,
    idle: Arc<Notify>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.idle.notify_waiters();
        }
    }
}

impl TokioScheduler {
    pub fn new(handle: Handle, max_concurrent: usize, timeout: Option<Duration>) -> Self {
        let max_concurrent = max_concurrent.clamp(1, Semaphore::MAX_PERMITS);
        Self {
            handle,
            permits: Arc::new(Semaphore::new(max_concurrent)),
            max_concurrent,
            timeout,
            closed: AtomicBool::new(false),
            pending: Arc::new(AtomicUsize::new(0)),
            idle: Arc::new(Notify::new()),
        }
    }

    pub fn from_config(handle: Handle, config: &DispatchConfig) -> Self {
        Self::new(
            handle,
            config.max_concurrent_tasks,
            config.handler_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Tasks currently holding a slot.
    pub fn running(&self) -> usize {
        self.max_concurrent - self.permits.available_permits()
    }

    /// Tasks accepted and not yet finished, including those waiting for a slot.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Stop accepting tasks and wait until every accepted task has finished.
    pub async fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
        loop {
            let drained = self.idle.notified();
            if self.pending() == 0 {
                break;
            }
            drained.await;
        }
    }
}

impl TaskScheduler for TokioScheduler {
    fn spawn(&self, label: String, task: HandlerFuture) {
        if self.closed.load(Ordering::SeqCst) {
            tracing::warn!("Scheduler is shutting down, dropping task '{}'", label);
            return;
        }

        self.pending.fetch_add(1, Ordering::SeqCst);
        let in_flight = InFlight {
            pending: self.pending.clone(),
            idle: self.idle.clone(),
        };
        let permits = self.permits.clone();
        let timeout = self.timeout;
        self.handle.spawn(async move {
            let _in_flight = in_flight;
            let Ok(_permit) = permits.acquire_owned().await else {
                tracing::warn!("No task slot available for '{}'", label);
                return;
            };

            let guarded = AssertUnwindSafe(task).catch_unwind();
            let outcome = match timeout {
                Some(limit) => match tokio::time::timeout(limit, guarded).await {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        tracing::warn!("Task '{}' timed out after {:?}", label, limit);
                        return;
                    }
                },
                None => guarded.await,
            };

            match outcome {
                Ok(Ok(())) => tracing::debug!("Task '{}' finished", label),
                Ok(Err(e)) => tracing::error!("Task '{}' failed: {:#}", label, e),
                Err(_) => tracing::error!("Task '{}' panicked", label),
            }
        });
    }
}
