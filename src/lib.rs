//! Validation of Nigerian mobile phone numbers against the national
//! numbering plan.
//!
//! The crate is built around three pieces: the static plan tables and their
//! lazily populated range index ([`numberingplan`]), the input normalizer
//! and typing-direction state machine, and the [`NgPhoneValidator`]
//! orchestrator that composes them into a single `validate` call.

pub mod numberingplan;
pub mod validator;

pub use numberingplan::{
    code_range, Allocation, NumberRange, NumberingPlanIndex, OperatorTag, RangeOrdering,
    NUMBERING_PLAN,
};
pub use validator::{
    BatchSummary, NgPhoneValidator, ObserverHandle, ParsedNumber, PhoneFormat,
    ValidationOutcome, ValidationStatus, ValidatorConfig,
};

#[cfg(test)]
mod tests;
