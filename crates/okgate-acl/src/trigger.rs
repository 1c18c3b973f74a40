//! # Trigger Phrase Matcher
//!
//! Recognizes the `/ok-to-test` command in a comment thread.
//!
//! The command counts only when it starts a line: at the very beginning of
//! the text or right after a `\n`, with no leading whitespace. The rest of
//! that line must be empty or begin with whitespace. Anything before or after
//! the triggering line is irrelevant.
//!
//! ```text
//! "/ok-to-test"                        match
//! "foo bar\n/ok-to-test\nhello moto"   match
//! "\n /ok-to-test"                     no match (leading space)
//! "please /ok-to-test"                 no match (mid-sentence)
//! "/ok-to-testing"                     no match (different token)
//! "/ok-to-test."                       no match (punctuation after token)
//! "/ok-to-test!"                       no match (punctuation after token)
//! "/ok-to-test please"                 match
//! ```

use crate::pattern::{match_pattern, TriggerPattern};

/// Built-in pattern for the `/ok-to-test` command.
pub const OK_TO_TEST_COMMENT_PATTERN: &str = r"(?m)^/ok-to-test(?:\s|$)";

impl TriggerPattern {
    /// The compiled built-in `/ok-to-test` pattern.
    pub fn ok_to_test() -> Self {
        Self::compile(OK_TO_TEST_COMMENT_PATTERN)
            .expect("BUG: hardcoded OK_TO_TEST_COMMENT_PATTERN rejected by regex compiler")
    }
}

/// Whether `text` contains the `/ok-to-test` command at the start of a line.
pub fn match_trigger(text: &str) -> bool {
    let matched = match_pattern(OK_TO_TEST_COMMENT_PATTERN, text);
    tracing::debug!(matched, "evaluated built-in trigger");
    matched
}

/// Whether `text` matches a caller-supplied trigger `pattern`.
///
/// An invalid pattern never matches.
pub fn match_trigger_with(pattern: &str, text: &str) -> bool {
    let matched = match_pattern(pattern, text);
    tracing::debug!(%pattern, matched, "evaluated custom trigger");
    matched
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Text whose lines never begin with `/` cannot contain a trigger.
        #[test]
        fn no_line_starting_with_slash_never_matches(
            lines in prop::collection::vec("[^/\n][^\n]{0,40}", 0..8)
        ) {
            let text = lines.join("\n");
            prop_assert!(!match_trigger(&text));
        }

        /// Prefixing the command with whitespace always disqualifies it.
        #[test]
        fn leading_whitespace_never_matches(ws in "[ \t]{1,4}", tail in "[a-z ]{0,20}") {
            let text = format!("{ws}/ok-to-test{tail}");
            prop_assert!(!match_trigger(&text));
        }

        /// A genuine trigger line anywhere in the thread is found.
        #[test]
        fn trigger_line_between_noise_matches(
            before in prop::collection::vec("[a-z ]{0,30}", 0..5),
            after in prop::collection::vec("[a-z ]{0,30}", 0..5),
        ) {
            let mut lines = before;
            lines.push("/ok-to-test".to_string());
            lines.extend(after);
            prop_assert!(match_trigger(&lines.join("\n")));
        }

        #[test]
        fn match_trigger_idempotent(text in "(?s).{0,200}") {
            prop_assert_eq!(match_trigger(&text), match_trigger(&text));
        }
    }
}
