pub mod normalizer;
pub mod outcome;
mod rate_limit;
pub mod typing;
mod validator;

pub use normalizer::PhoneFormat;
pub use outcome::{ParsedNumber, ValidationOutcome, ValidationStatus, COUNTRY_CODE};
pub use typing::{TypingDirection, TypingSession};
pub use validator::{BatchSummary, NgPhoneValidator, ObserverHandle, ValidatorConfig};
