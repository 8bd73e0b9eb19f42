use log::trace;

use super::normalizer::PhoneFormat;

/// Which way the user is moving through the input field, judged purely by
/// length. Equal lengths count as forward so a re-submit of the same text
/// is treated like new typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingDirection {
    Forward,
    Backward,
}

/// Decides when enough input exists to attempt a full validation.
///
/// The expected embedding is one `validate` call per keystroke, so this gate
/// avoids running the whole pipeline on every intermediate prefix while
/// still re-validating promptly when the user backspaces through a number
/// that previously validated (or previously errored). This is the only
/// mutable state a validator carries besides the rate limiter.
#[derive(Debug)]
pub struct TypingSession {
    previous_length: usize,
    has_errored: bool,
    last_was_valid: bool,
}

impl TypingSession {
    pub fn new() -> Self {
        Self {
            previous_length: 0,
            has_errored: false,
            last_was_valid: false,
        }
    }

    pub fn direction(&self, current_length: usize) -> TypingDirection {
        if current_length >= self.previous_length {
            TypingDirection::Forward
        } else {
            TypingDirection::Backward
        }
    }

    /// The completeness gate. `format` is the prefix classification of the
    /// current (normalized) input, `None` when the prefix is neither `0`
    /// nor `234`. Empty input resets the session flags.
    pub fn should_attempt(&mut self, current_length: usize, format: Option<PhoneFormat>) -> bool {
        if current_length == 0 {
            self.reset_flags();
            return false;
        }

        let Some(format) = format else {
            // Can't validate an unknown prefix; other checks report the
            // format error once enough digits exist.
            return false;
        };
        let expected = format.expected_length();

        if !self.has_errored && !self.last_was_valid {
            // Fresh session, no prior result: wait for a full-length number.
            return current_length >= expected;
        }

        match self.direction(current_length) {
            TypingDirection::Forward => current_length >= expected,
            // Only the single backspace step that turns a complete number
            // into one digit short (and vice versa) re-triggers validation.
            TypingDirection::Backward => {
                current_length == expected || current_length == expected - 1
            }
        }
    }

    /// Clears the prior-result flags, as when the input field is emptied.
    pub fn reset_flags(&mut self) {
        self.has_errored = false;
        self.last_was_valid = false;
    }

    /// Records a call where the full pipeline ran to a terminal outcome.
    pub fn record_attempt(&mut self, current_length: usize, succeeded: bool) {
        trace!(
            "Typing session: attempt at length {current_length}, succeeded = {succeeded}"
        );
        if succeeded {
            self.last_was_valid = true;
        } else {
            self.has_errored = true;
            self.last_was_valid = false;
        }
        self.previous_length = current_length;
    }

    /// Records a call that stopped before a full validation attempt.
    pub fn record_skip(&mut self, current_length: usize) {
        self.previous_length = current_length;
    }
}

impl Default for TypingSession {
    fn default() -> Self {
        Self::new()
    }
}
