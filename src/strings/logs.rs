pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub const CONFIG_DEFAULTS: &str = "No config file found, using built-in defaults";

pub fn commands_registered(count: usize, categories: usize) -> String {
    format!("Registered {count} commands in {categories} categories")
}

pub const EVENT_LOOP_START: &str = "Listening for messages...";
pub const SOURCE_EXHAUSTED: &str = "Event source closed";
pub const SHUTDOWN: &str = "Shutting down, waiting for running commands...";
pub const SHUTDOWN_COMPLETE: &str = "All commands finished";
pub const SHUTDOWN_FORCED: &str = "Interrupted again, abandoning running commands";

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn reply_failed(channel: &str, err: &str) -> String {
    format!("Failed to reply in {channel}: {err}")
}
