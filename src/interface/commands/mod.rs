//! # Command Handlers
//!
//! The bundled command sets, one module per category.
//! Handlers are plain async closures; the dispatcher binds their arguments.

pub mod help;
pub mod moderation;
pub mod planning;
pub mod private;
pub mod utility;

use std::sync::{Arc, OnceLock};

use crate::application::registry::{CommandRegistry, CommandSet};
use crate::domain::config::BotConfig;
use crate::domain::error::RegistrationError;
use help::{HelpCatalog, SharedCatalog};

pub fn command_sets(catalog: SharedCatalog) -> Vec<CommandSet> {
    vec![
        utility::commands(catalog),
        moderation::commands(),
        planning::commands(),
        private::commands(),
    ]
}

/// Register every bundled set. Fails on the first invalid declaration.
pub fn build_registry(config: &BotConfig) -> Result<Arc<CommandRegistry>, RegistrationError> {
    let catalog: SharedCatalog = Arc::new(OnceLock::new());
    let mut registry = CommandRegistry::new();
    for set in command_sets(catalog.clone()) {
        registry.register_set(set)?;
    }

    let _ = catalog.set(HelpCatalog::from_registry(&registry, &config.name, &config.prefix));
    Ok(Arc::new(registry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dispatcher::{DispatchOutcome, Dispatcher};
    use crate::application::testing::{ManualScheduler, RecordingContext};

    fn setup() -> (Dispatcher, Arc<ManualScheduler>) {
        let config = BotConfig::default();
        let registry = build_registry(&config).unwrap();
        let scheduler = Arc::new(ManualScheduler::default());
        (Dispatcher::new(registry, scheduler.clone(), config.prefix), scheduler)
    }

    async fn run(text: &str, ctx: Arc<RecordingContext>) -> Vec<String> {
        let (dispatcher, scheduler) = setup();
        dispatcher.dispatch(text, ctx.clone());
        for result in scheduler.run_all().await {
            result.unwrap();
        }
        ctx.replies()
    }

    #[test]
    fn test_registry_layout() {
        let registry = build_registry(&BotConfig::default()).unwrap();
        assert_eq!(
            registry.categories(),
            vec!["Utility", "Moderation", "Planning", "Private"]
        );
        assert!(registry.get("SAY").is_some());
        assert!(registry.get("remind").is_some());
        assert_eq!(registry.get("ban").unwrap().usage(), "ban <Mention> <reason...>");
        assert_eq!(registry.get("time").unwrap().usage(), "time [zone]");
    }

    #[tokio::test]
    async fn test_ping_and_repeat() {
        let ctx = Arc::new(RecordingContext::group("general", "alice"));
        assert_eq!(run(".ping", ctx).await, vec!["🏓 Pong!".to_string()]);

        let ctx = Arc::new(RecordingContext::group("general", "alice"));
        assert_eq!(run(".repeat 2 hi there", ctx).await, vec!["hi there\nhi there".to_string()]);

        let ctx = Arc::new(RecordingContext::group("general", "alice"));
        assert_eq!(
            run(".repeat 9 hi", ctx).await,
            vec!["invalid argument #1 (count): `9` must be between 1 and 5".to_string()]
        );
    }

    #[tokio::test]
    async fn test_time_accepts_zone() {
        let ctx = Arc::new(RecordingContext::direct("bob"));
        let replies = run(".time UTC", ctx).await;
        assert_eq!(replies.len(), 1);
        assert!(replies[0].ends_with("UTC"));
    }

    #[tokio::test]
    async fn test_ban_in_group_only() {
        let ctx = Arc::new(RecordingContext::group("general", "alice"));
        assert_eq!(
            run(".ban @spammer posting links", ctx).await,
            vec!["🔨 **spammer** was banned: posting links".to_string()]
        );

        let ctx = Arc::new(RecordingContext::direct("alice"));
        assert_eq!(
            run(".ban @spammer posting links", ctx).await,
            vec!["`ban` can only be used in a group conversation.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_whoami_in_direct_only() {
        let ctx = Arc::new(RecordingContext::direct("carol"));
        assert_eq!(
            run(".whoami", ctx).await,
            vec!["You are **carol** (`carol`).".to_string()]
        );
    }

    #[tokio::test]
    async fn test_help_lists_and_describes() {
        let ctx = Arc::new(RecordingContext::group("general", "alice"));
        let overview = run(".help", ctx).await;
        assert!(overview[0].starts_with("**🤖 Parley Help**"));
        assert!(overview[0].contains("**Moderation**"));
        assert!(overview[0].contains("* .schedule <URL> <minutes>: "));

        let ctx = Arc::new(RecordingContext::group("general", "alice"));
        let detail = run(".h echo", ctx).await;
        assert!(detail[0].starts_with("**.echo <text...>**"));
        assert!(detail[0].contains("Aliases: echo, say"));

        let ctx = Arc::new(RecordingContext::group("general", "alice"));
        assert_eq!(
            run(".help nope", ctx).await,
            vec!["❓ No command named `nope`.".to_string()]
        );
    }
}
