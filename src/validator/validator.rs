use std::panic::{catch_unwind, AssertUnwindSafe};

use log::{trace, warn};

use crate::numberingplan::{plan_data, OperatorTag, CODE_BLOCK_SIZE, NUMBERING_PLAN};

use super::normalizer::{
    classify, contains_only_digits, fast_reject, has_mobile_lead, normalize, PhoneFormat,
};
use super::outcome::{ParsedNumber, ValidationOutcome, ValidationStatus};
use super::rate_limit::RateLimiter;
use super::typing::TypingSession;

/// Optional knobs for a validator instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Maximum `validate` calls per minute; `None` means unlimited.
    pub rate_limit_per_minute: Option<u32>,
}

/// Handle returned by [`NgPhoneValidator::on_result`]; pass it back to
/// [`NgPhoneValidator::unsubscribe`] to drop the observer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

type ObserverCallback = Box<dyn Fn(&ValidationOutcome)>;

/// Validates raw text against the Nigerian mobile numbering plan.
///
/// One instance is meant to sit behind a single input field: it keeps a
/// typing session (deciding when enough digits exist to bother validating)
/// and an optional rate limiter between calls. Multiple instances are fully
/// independent and share only the immutable plan index.
///
/// `validate` never returns an error for malformed input; every expected
/// rejection is a [`ValidationStatus`] on the outcome.
pub struct NgPhoneValidator {
    typing_session: TypingSession,
    rate_limiter: RateLimiter,
    observers: Vec<(u64, ObserverCallback)>,
    next_observer_id: u64,
}

/// Aggregate result of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl NgPhoneValidator {
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            typing_session: TypingSession::new(),
            rate_limiter: RateLimiter::new(config.rate_limit_per_minute),
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    /// Runs the full pipeline on one input and reports the outcome to every
    /// registered observer, in registration order, before returning it.
    pub fn validate(&mut self, raw_input: &str) -> ValidationOutcome {
        let outcome = self.run_pipeline(raw_input);
        self.notify(&outcome);
        outcome
    }

    /// Registers a callback fired synchronously once per `validate` call.
    pub fn on_result<F>(&mut self, callback: F) -> ObserverHandle
    where
        F: Fn(&ValidationOutcome) + 'static,
    {
        let id = self.next_observer_id;
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(callback)));
        ObserverHandle(id)
    }

    pub fn unsubscribe(&mut self, handle: ObserverHandle) {
        self.observers.retain(|(id, _)| *id != handle.0);
    }

    /// Drops every observer registration. The validator keeps working, but
    /// no callbacks fire afterwards.
    pub fn dispose(&mut self) {
        self.observers.clear();
    }

    /// Validates each input independently and aggregates the counts.
    ///
    /// Note the rate limiter and the typing session are shared across the
    /// whole batch, exactly as for interactive calls on the same instance.
    /// Feed a batch to a fresh validator when that is not what you want.
    pub fn validate_all<I, S>(&mut self, inputs: I) -> BatchSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = BatchSummary::default();
        for input in inputs {
            let outcome = self.validate(input.as_ref());
            summary.total += 1;
            if outcome.succeeded() {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }
        }
        summary
    }

    fn run_pipeline(&mut self, raw_input: &str) -> ValidationOutcome {
        // Cheap rejection before any allocation or normalization work.
        if fast_reject(raw_input) {
            trace!("Input fast-rejected before normalization");
            self.typing_session.record_skip(raw_input.chars().count());
            return ValidationOutcome::failure(raw_input, ValidationStatus::ContainsNonNumericChars);
        }

        if !self.rate_limiter.try_acquire() {
            self.typing_session.record_skip(raw_input.chars().count());
            return ValidationOutcome::failure(raw_input, ValidationStatus::RateLimitExceeded);
        }

        let normalized = normalize(raw_input);
        let length = normalized.len();

        if normalized.is_empty() {
            self.typing_session.reset_flags();
            self.typing_session.record_skip(0);
            return ValidationOutcome::failure(raw_input, ValidationStatus::IncorrectNumberOfDigits);
        }

        // Normalization leaves nothing but digits behind; anything else at
        // this point is a defect in the allowed-character set.
        if !contains_only_digits(&normalized) {
            self.typing_session.record_skip(length);
            return ValidationOutcome::failure(raw_input, ValidationStatus::ContainsNonNumericChars);
        }

        let format = match classify(&normalized) {
            Some(format) if has_mobile_lead(&normalized, format) => format,
            _ => {
                trace!("Input '{normalized}' cannot be a Nigerian mobile number");
                self.typing_session.record_attempt(length, false);
                return ValidationOutcome::failure(raw_input, ValidationStatus::NotNigerianNumber);
            }
        };

        if !self.typing_session.should_attempt(length, Some(format)) {
            self.typing_session.record_skip(length);
            return ValidationOutcome::failure(raw_input, ValidationStatus::IncorrectNumberOfDigits);
        }

        if length != format.expected_length() {
            self.typing_session.record_attempt(length, false);
            return ValidationOutcome::failure(raw_input, ValidationStatus::IncorrectNumberOfDigits);
        }

        // From here the number is complete; extract code and subscriber.
        let (code_digits, subscriber_digits) = match format {
            PhoneFormat::Local => (&normalized[1..4], &normalized[4..11]),
            PhoneFormat::International => (&normalized[3..6], &normalized[6..13]),
        };
        let numbering_code: u16 = code_digits
            .parse()
            .expect("classifier guarantees pure digits");
        let subscriber_number: u64 = subscriber_digits
            .parse()
            .expect("classifier guarantees pure digits");
        let local_number = numbering_code as u64 * CODE_BLOCK_SIZE + subscriber_number;

        if !plan_data::is_valid_code(numbering_code) {
            trace!("Numbering code {numbering_code} is not in the plan");
            self.typing_session.record_attempt(length, false);
            return ValidationOutcome::failure(raw_input, ValidationStatus::IncorrectNetworkCode);
        }

        let Some(allocation) = NUMBERING_PLAN.search(local_number) else {
            trace!("Local number {local_number} falls in an unallocated gap");
            self.typing_session.record_attempt(length, false);
            return ValidationOutcome::failure(raw_input, ValidationStatus::InvalidSubscriberNumber);
        };

        let parsed = ParsedNumber::new(numbering_code, subscriber_digits, allocation.operator());
        let status = match allocation.operator() {
            OperatorTag::SharedVas => ValidationStatus::SharedVasNetworkCode,
            OperatorTag::Unassigned => ValidationStatus::UnassignedNetworkCode,
            OperatorTag::Withdrawn => ValidationStatus::WithdrawnNetworkCode,
            OperatorTag::Returned => ValidationStatus::ReturnedNetworkCode,
            OperatorTag::Reserved => ValidationStatus::ReservedNetworkCode,
            // Unknown never occurs in the shipped plan tables; if it ever
            // did, the number is not a dialable subscription.
            OperatorTag::Unknown => ValidationStatus::InvalidSubscriberNumber,
            _ => ValidationStatus::Success,
        };

        let succeeded = status == ValidationStatus::Success;
        self.typing_session.record_attempt(length, succeeded);

        if succeeded {
            trace!(
                "'{}' resolved to {} ({})",
                raw_input,
                parsed.international(),
                parsed.operator().display_name()
            );
            ValidationOutcome::success(raw_input, parsed, allocation)
        } else {
            ValidationOutcome::failure_with_number(raw_input, status, parsed, allocation)
        }
    }

    fn notify(&self, outcome: &ValidationOutcome) {
        for (id, callback) in &self.observers {
            // One panicking observer must not starve the others or corrupt
            // the returned outcome.
            if catch_unwind(AssertUnwindSafe(|| callback(outcome))).is_err() {
                warn!("Result observer {id} panicked; continuing with the remaining observers");
            }
        }
    }
}

impl Default for NgPhoneValidator {
    fn default() -> Self {
        Self::new()
    }
}
