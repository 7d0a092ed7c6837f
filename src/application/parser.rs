//! # Argument Binder
//!
//! Fills a command's argument list from raw tokens.
//!
//! Strict commands consume tokens left to right in declaration order. Flexible commands
//! let each slot, in declaration order, claim the first unclaimed token it accepts. This
//! is first-fit, not a global matching: argument types on a flexible command are expected
//! to have disjoint domains.
//!
//! Binding is a pure function of the command, the tokens and the context.

use crate::application::arguments::{ArgumentResult, BoxedValue, Consumption, DynArgument};
use crate::application::bundle::{ArgumentBundle, ParseResult};
use crate::application::command::Command;
use crate::domain::traits::CommandContext;
use crate::strings::messages;

pub fn parse_input_to_bundle(
    command: &Command,
    tokens: &[&str],
    context: &dyn CommandContext,
) -> ParseResult {
    let result = if command.is_flexible() {
        bind_flexible(command, tokens, context)
    } else {
        bind_strict(command, tokens, context)
    };

    if let ParseResult::Fail(reason) = &result {
        tracing::debug!("Binding '{}' failed: {}", command.name(), reason);
    }
    result
}

fn bind_strict(command: &Command, tokens: &[&str], context: &dyn CommandContext) -> ParseResult {
    let mut bundle = ArgumentBundle::default();
    let mut position = 0;

    for (slot, argument) in command.arguments().iter().enumerate() {
        let remaining = &tokens[position..];

        let Some(&head) = remaining.first() else {
            match argument.default_erased() {
                Some(default) => {
                    bundle.push(default, 0);
                    continue;
                }
                None => return ParseResult::Fail(messages::missing_argument(argument.label())),
            }
        };

        if !argument.validates(head, context) {
            match argument.default_erased() {
                Some(default) => {
                    bundle.push(default, 0);
                    continue;
                }
                None => {
                    return ParseResult::Fail(messages::invalid_token(
                        slot + 1,
                        argument.label(),
                        head,
                    ));
                }
            }
        }

        match convert(argument.as_ref(), head, remaining, context) {
            Ok((value, consumed)) => {
                bundle.push(value, consumed);
                position += consumed;
            }
            Err(reason) => match argument.default_erased() {
                Some(default) => bundle.push(default, 0),
                None => {
                    return ParseResult::Fail(messages::invalid_argument(
                        slot + 1,
                        argument.label(),
                        &reason,
                    ));
                }
            },
        }
    }

    match tokens.get(position) {
        Some(extra) => ParseResult::Fail(messages::too_many_arguments(extra)),
        None => ParseResult::Success(bundle),
    }
}

fn bind_flexible(command: &Command, tokens: &[&str], context: &dyn CommandContext) -> ParseResult {
    let mut bundle = ArgumentBundle::default();
    let mut claimed = vec![false; tokens.len()];

    for argument in command.arguments() {
        let found = tokens.iter().enumerate().find_map(|(i, &token)| {
            if claimed[i] || !argument.validates(token, context) {
                return None;
            }
            convert(argument.as_ref(), token, &tokens[i..=i], context)
                .ok()
                .map(|(value, _)| (i, value))
        });

        match found {
            Some((i, value)) => {
                claimed[i] = true;
                bundle.push(value, 1);
            }
            None => match argument.default_erased() {
                Some(default) => bundle.push(default, 0),
                None => return ParseResult::Fail(messages::missing_argument(argument.label())),
            },
        }
    }

    match claimed.iter().position(|c| !c) {
        Some(i) => ParseResult::Fail(messages::too_many_arguments(tokens[i])),
        None => ParseResult::Success(bundle),
    }
}

/// Convert the head of `remaining`, returning the value and how many tokens it used.
/// A `Single` slot uses exactly one token whatever count the type reports.
fn convert(
    argument: &dyn DynArgument,
    head: &str,
    remaining: &[&str],
    context: &dyn CommandContext,
) -> Result<(BoxedValue, usize), String> {
    match argument.convert_erased(head, remaining, context) {
        ArgumentResult::Single(value) => Ok((value, 1)),
        ArgumentResult::Multiple(value, _) if argument.consumption_policy() == Consumption::Single => {
            Ok((value, 1))
        }
        ArgumentResult::Multiple(value, consumed) => Ok((value, consumed.clamp(1, remaining.len()))),
        ArgumentResult::Error(reason) => Err(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::arguments::{
        ArgumentList, ArgumentType, ArgumentTypeExt, Choice, Everything, Integer, IntegerRange,
        Mention, Optional, Quote, Url, Word,
    };
    use crate::application::command::{Command, CommandEvent};
    use crate::application::testing::RecordingContext;

    async fn noop<A>(_event: CommandEvent<A>) -> anyhow::Result<()> {
        Ok(())
    }

    fn bind<L: ArgumentList>(
        command: &Command,
        tokens: &[&str],
    ) -> Result<L::Output, String> {
        let ctx = RecordingContext::group("general", "alice");
        match parse_input_to_bundle(command, tokens, &ctx) {
            ParseResult::Success(bundle) => Ok(L::from_bundle(bundle).unwrap()),
            ParseResult::Fail(reason) => Err(reason),
        }
    }

    fn consumed(command: &Command, tokens: &[&str]) -> usize {
        let ctx = RecordingContext::group("general", "alice");
        match parse_input_to_bundle(command, tokens, &ctx) {
            ParseResult::Success(bundle) => bundle.consumed(),
            ParseResult::Fail(reason) => panic!("{} failed: {reason}", command.name()),
        }
    }

    /// Declares one token per slot but reports every remaining token as used.
    struct Overreaching;

    impl ArgumentType for Overreaching {
        type Output = String;

        fn name(&self) -> &str {
            "Overreaching"
        }

        fn is_valid(&self, _token: &str, _context: &dyn CommandContext) -> bool {
            true
        }

        fn convert(&self, token: &str, remaining: &[&str], _context: &dyn CommandContext) -> ArgumentResult<String> {
            ArgumentResult::Multiple(token.to_uppercase(), remaining.len())
        }
    }

    #[test]
    fn test_single_slot_uses_one_token() {
        let shout = Command::global(["shout"]).execute((Overreaching, Word), noop);
        assert!(shout.validate().is_ok());

        assert_eq!(
            bind::<(Overreaching, Word)>(&shout, &["a", "b"]).unwrap(),
            ("A".to_string(), "b".to_string())
        );
        assert_eq!(consumed(&shout, &["a", "b"]), 2);
        assert_eq!(
            bind::<(Overreaching, Word)>(&shout, &["a", "b", "c"]).unwrap_err(),
            "too many arguments: unexpected `c`"
        );
    }

    #[test]
    fn test_consumed_counts_every_token() {
        let schedule = Command::global(["schedule"]).flexible().execute((Url, Integer), noop);
        assert_eq!(consumed(&schedule, &["5", "http://x.test"]), 2);

        let roll = Command::global(["roll"]).execute((Integer.or_default(6), Word.optional()), noop);
        assert_eq!(consumed(&roll, &["loud"]), 1);
        assert_eq!(consumed(&roll, &["20", "loud"]), 2);
        assert_eq!(consumed(&roll, &[]), 0);

        let tag = Command::global(["tag"]).flexible().execute((Url, Integer.optional()), noop);
        assert_eq!(consumed(&tag, &["www.x.test"]), 1);
    }

    #[test]
    fn test_zero_arity_with_no_tokens() {
        let ping = Command::global(["ping"]).execute((), noop);
        let ctx = RecordingContext::direct("bob");
        match parse_input_to_bundle(&ping, &[], &ctx) {
            ParseResult::Success(bundle) => {
                assert!(bundle.is_empty());
                assert_eq!(bundle.consumed(), 0);
            }
            ParseResult::Fail(reason) => panic!("ping failed: {reason}"),
        }
    }

    #[test]
    fn test_zero_arity_with_tokens_fails() {
        let ping = Command::global(["ping"]).execute((), noop);
        assert_eq!(
            bind::<()>(&ping, &["extra"]).unwrap_err(),
            "too many arguments: unexpected `extra`"
        );
    }

    #[test]
    fn test_greedy_slot_takes_the_rest() {
        let echo = Command::global(["echo"]).execute((Everything,), noop);
        let (text,) = bind::<(Everything,)>(&echo, &["hello", "world"]).unwrap();
        assert_eq!(text, "hello world");

        let ctx = RecordingContext::group("general", "alice");
        let ParseResult::Success(bundle) = parse_input_to_bundle(&echo, &["a", "b", "c"], &ctx) else {
            panic!("echo should bind");
        };
        assert_eq!(bundle.consumed(), 3);
    }

    #[test]
    fn test_missing_greedy_reason() {
        let ban = Command::group(["ban"]).execute((Mention, Everything.named("reason")), noop);
        assert_eq!(
            bind::<(Mention, Everything)>(&ban, &["@userX"]).unwrap_err(),
            "missing argument: reason"
        );

        let (user, reason) =
            bind::<(Mention, Everything)>(&ban, &["@userX", "spamming", "links"]).unwrap();
        assert_eq!(user, "userX");
        assert_eq!(reason, "spamming links");
    }

    #[test]
    fn test_strict_validation_names_the_slot() {
        let add = Command::global(["add"]).execute((Integer, Integer), noop);
        assert_eq!(
            bind::<(Integer, Integer)>(&add, &["1", "two"]).unwrap_err(),
            "invalid argument #2 (Integer): `two`"
        );
        assert_eq!(
            bind::<(Integer, Integer)>(&add, &["1"]).unwrap_err(),
            "missing argument: Integer"
        );
        assert_eq!(
            bind::<(Integer, Integer)>(&add, &["1", "2", "3"]).unwrap_err(),
            "too many arguments: unexpected `3`"
        );
        assert_eq!(bind::<(Integer, Integer)>(&add, &["1", "2"]).unwrap(), (1, 2));
    }

    #[test]
    fn test_conversion_error_is_reported() {
        let repeat = Command::global(["repeat"]).execute((IntegerRange::new(1, 5), Everything), noop);
        assert_eq!(
            bind::<(IntegerRange, Everything)>(&repeat, &["9", "hi"]).unwrap_err(),
            "invalid argument #1 (Integer): `9` must be between 1 and 5"
        );
    }

    #[test]
    fn test_strict_mode_respects_order() {
        let schedule = Command::global(["schedule"]).execute((Url, Integer), noop);
        assert_eq!(
            bind::<(Url, Integer)>(&schedule, &["5", "http://x.test"]).unwrap_err(),
            "invalid argument #1 (URL): `5`"
        );
    }

    #[test]
    fn test_optional_slots_are_skipped() {
        let roll = Command::global(["roll"]).execute((Integer.or_default(6), Word.optional()), noop);

        assert_eq!(bind::<(Integer, Optional<Word>)>(&roll, &[]).unwrap(), (6, None));
        assert_eq!(
            bind::<(Integer, Optional<Word>)>(&roll, &["loud"]).unwrap(),
            (6, Some("loud".to_string()))
        );
        assert_eq!(
            bind::<(Integer, Optional<Word>)>(&roll, &["20", "loud"]).unwrap(),
            (20, Some("loud".to_string()))
        );
    }

    #[test]
    fn test_optional_greedy_with_no_tokens() {
        let note = Command::global(["note"]).execute((Word, Everything.optional()), noop);
        let (title, body) =
            bind::<(Word, Optional<Everything>)>(&note, &["todo"]).unwrap();
        assert_eq!(title, "todo");
        assert_eq!(body, None);
    }

    #[test]
    fn test_quote_then_nothing_left() {
        let say = Command::global(["say"]).execute((Word, Quote), noop);
        let (who, phrase) = bind::<(Word, Quote)>(&say, &["bob", "\"hello", "there\""]).unwrap();
        assert_eq!(who, "bob");
        assert_eq!(phrase, "hello there");
    }

    #[test]
    fn test_flexible_reordering() {
        let schedule = Command::global(["schedule"]).flexible().execute((Url, Integer), noop);
        assert_eq!(
            bind::<(Url, Integer)>(&schedule, &["5", "http://x.test"]).unwrap(),
            ("http://x.test".to_string(), 5)
        );
        assert_eq!(
            bind::<(Url, Integer)>(&schedule, &["http://x.test", "5"]).unwrap(),
            ("http://x.test".to_string(), 5)
        );
    }

    #[test]
    fn test_flexible_permutations_bind_identically() {
        let plan = Command::global(["plan"])
            .flexible()
            .execute((Url, Integer, Choice::new(["daily", "weekly"])), noop);
        let tokens = ["https://a.test", "3", "weekly"];
        let expected = ("https://a.test".to_string(), 3, "weekly".to_string());

        let permutations: [[usize; 3]; 6] =
            [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in permutations {
            let shuffled: Vec<&str> = order.iter().map(|&i| tokens[i]).collect();
            assert_eq!(
                bind::<(Url, Integer, Choice)>(&plan, &shuffled).unwrap(),
                expected,
                "order {order:?}"
            );
        }
    }

    #[test]
    fn test_flexible_failures() {
        let schedule = Command::global(["schedule"]).flexible().execute((Url, Integer), noop);
        assert_eq!(
            bind::<(Url, Integer)>(&schedule, &["5"]).unwrap_err(),
            "missing argument: URL"
        );
        assert_eq!(
            bind::<(Url, Integer)>(&schedule, &["5", "http://x.test", "6"]).unwrap_err(),
            "too many arguments: unexpected `6`"
        );
    }

    #[test]
    fn test_flexible_first_fit_in_declaration_order() {
        // Word accepts anything, so it claims the first token even though Integer could too.
        let pair = Command::global(["pair"]).flexible().execute((Word, Integer), noop);
        assert_eq!(
            bind::<(Word, Integer)>(&pair, &["1", "2"]).unwrap(),
            ("1".to_string(), 2)
        );
        assert_eq!(
            bind::<(Word, Integer)>(&pair, &["2", "x"]).unwrap_err(),
            "missing argument: Integer"
        );
    }

    #[test]
    fn test_flexible_optional_slot() {
        let tag = Command::global(["tag"])
            .flexible()
            .execute((Url, Integer.optional()), noop);
        assert_eq!(
            bind::<(Url, Optional<Integer>)>(&tag, &["www.x.test"]).unwrap(),
            ("www.x.test".to_string(), None)
        );
    }

    #[test]
    fn test_case_of_arguments_is_left_to_the_type() {
        let pick = Command::global(["PICK"]).execute((Choice::new(["Red", "Blue"]), Word), noop);
        assert_eq!(
            bind::<(Choice, Word)>(&pick, &["rED", "Word"]).unwrap(),
            ("Red".to_string(), "Word".to_string())
        );
    }
}
