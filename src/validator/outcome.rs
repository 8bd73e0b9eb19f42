// Copyright (C) 2026 The ngphonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::EnumIter;

use crate::numberingplan::{Allocation, OperatorTag};

/// The Nigerian country calling code.
pub const COUNTRY_CODE: u16 = 234;

/// Terminal status of a validation call. Expected invalid input always ends
/// up here as a status, never as an `Err`.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationStatus {
    /// Input is incomplete or not exactly the expected length.
    IncorrectNumberOfDigits,
    /// The prefix or mobile-lead digit rules out a Nigerian mobile number.
    NotNigerianNumber,
    /// Raw input holds characters a phone number cannot contain.
    ContainsNonNumericChars,
    /// The 3-digit numbering code is not part of the plan.
    IncorrectNetworkCode,
    /// The subscriber number falls in a gap no allocation covers.
    InvalidSubscriberNumber,
    /// The number lands in a sub-range the regulator never handed out.
    UnassignedNetworkCode,
    /// The number lands in the shared value-added-service space.
    SharedVasNetworkCode,
    /// The number lands in a sub-range withdrawn from its operator.
    WithdrawnNetworkCode,
    /// The number lands in a sub-range held back by the regulator.
    ReservedNetworkCode,
    /// The configured per-minute call budget is exhausted.
    RateLimitExceeded,
    /// The number lands in a sub-range handed back by its operator.
    ReturnedNetworkCode,
    /// A real, currently-assigned mobile number.
    Success,
}

impl ValidationStatus {
    /// Short end-user message.
    pub fn summary(&self) -> &'static str {
        match self {
            ValidationStatus::IncorrectNumberOfDigits => "Incorrect number of digits",
            ValidationStatus::NotNigerianNumber => "Not a Nigerian number",
            ValidationStatus::ContainsNonNumericChars => "Contains invalid characters",
            ValidationStatus::IncorrectNetworkCode => "Unknown network code",
            ValidationStatus::InvalidSubscriberNumber => "Invalid subscriber number",
            ValidationStatus::UnassignedNetworkCode => "Unassigned network code",
            ValidationStatus::SharedVasNetworkCode => "Shared VAS number",
            ValidationStatus::WithdrawnNetworkCode => "Withdrawn network code",
            ValidationStatus::ReservedNetworkCode => "Reserved network code",
            ValidationStatus::RateLimitExceeded => "Too many validation attempts",
            ValidationStatus::ReturnedNetworkCode => "Returned network code",
            ValidationStatus::Success => "Valid Nigerian mobile number",
        }
    }

    /// Longer diagnostic message.
    pub fn detail(&self) -> &'static str {
        match self {
            ValidationStatus::IncorrectNumberOfDigits => {
                "A Nigerian mobile number has 11 digits in local format (0xxxxxxxxxx) \
                 or 13 digits in international format (234xxxxxxxxxx)"
            }
            ValidationStatus::NotNigerianNumber => {
                "The number does not start with 0 or 234, or the digit after the \
                 prefix is not 7, 8 or 9, so it cannot be a Nigerian mobile number"
            }
            ValidationStatus::ContainsNonNumericChars => {
                "Only digits, the letter o/O, spaces, parentheses, plus and dashes \
                 are accepted in a phone number"
            }
            ValidationStatus::IncorrectNetworkCode => {
                "The 3-digit network code is not defined in the Nigerian national \
                 numbering plan"
            }
            ValidationStatus::InvalidSubscriberNumber => {
                "The subscriber number falls in a part of the network code's range \
                 that no operator currently holds"
            }
            ValidationStatus::UnassignedNetworkCode => {
                "The number belongs to a range the regulator has not assigned to \
                 any operator"
            }
            ValidationStatus::SharedVasNetworkCode => {
                "The number belongs to the shared value-added-services range and is \
                 not a mobile subscriber"
            }
            ValidationStatus::WithdrawnNetworkCode => {
                "The number belongs to a range that was withdrawn from its operator \
                 by the regulator"
            }
            ValidationStatus::ReservedNetworkCode => {
                "The number belongs to a range reserved by the regulator, for \
                 example for interconnect services"
            }
            ValidationStatus::RateLimitExceeded => {
                "The validator's configured per-minute rate limit was reached; try \
                 again later"
            }
            ValidationStatus::ReturnedNetworkCode => {
                "The number belongs to a range its operator handed back to the \
                 regulator"
            }
            ValidationStatus::Success => {
                "The number is a currently-assigned Nigerian mobile number"
            }
        }
    }
}

/// A fully parsed, plan-resolved number. Built only after the lookup engine
/// found an allocation; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    country_code: u16,
    numbering_code: u16,
    subscriber_digits: String,
    operator: OperatorTag,
    international: String,
    local: String,
}

impl ParsedNumber {
    pub(crate) fn new(numbering_code: u16, subscriber_digits: &str, operator: OperatorTag) -> Self {
        let mut buf = itoa::Buffer::new();
        let code_str = buf.format(numbering_code);
        let international = fast_cat::concat_str!("+234", code_str, subscriber_digits);
        let local = fast_cat::concat_str!("0", code_str, subscriber_digits);
        Self {
            country_code: COUNTRY_CODE,
            numbering_code,
            subscriber_digits: subscriber_digits.to_owned(),
            operator,
            international,
            local,
        }
    }

    pub fn country_code(&self) -> u16 {
        self.country_code
    }

    pub fn numbering_code(&self) -> u16 {
        self.numbering_code
    }

    /// The 7 digits after the numbering code.
    pub fn subscriber_digits(&self) -> &str {
        &self.subscriber_digits
    }

    pub fn operator(&self) -> OperatorTag {
        self.operator
    }

    /// Canonical MSISDN form, `+234` followed by code and subscriber digits.
    pub fn international(&self) -> &str {
        &self.international
    }

    /// Canonical domestic form with the leading `0`.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// The number as one integer in local-number units, as used by the
    /// plan index.
    pub fn local_number(&self) -> u64 {
        self.numbering_code as u64 * crate::numberingplan::CODE_BLOCK_SIZE
            + self
                .subscriber_digits
                .parse::<u64>()
                .expect("subscriber digits are validated before construction")
    }
}

/// What one `validate` call produced. `succeeded` is true only for
/// [`ValidationStatus::Success`], and a successful outcome always carries a
/// parsed number; constructing one without is a programmer error and panics.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    input_as_provided: String,
    status: ValidationStatus,
    parsed_number: Option<ParsedNumber>,
    allocation: Option<Allocation>,
}

impl ValidationOutcome {
    pub(crate) fn success(
        input_as_provided: &str,
        parsed_number: ParsedNumber,
        allocation: Allocation,
    ) -> Self {
        Self::build(
            input_as_provided,
            ValidationStatus::Success,
            Some(parsed_number),
            Some(allocation),
        )
    }

    pub(crate) fn failure(input_as_provided: &str, status: ValidationStatus) -> Self {
        Self::build(input_as_provided, status, None, None)
    }

    /// Failure that still identifies the number and its allocation, used for
    /// the non-operator plan statuses where the lookup itself succeeded.
    pub(crate) fn failure_with_number(
        input_as_provided: &str,
        status: ValidationStatus,
        parsed_number: ParsedNumber,
        allocation: Allocation,
    ) -> Self {
        Self::build(
            input_as_provided,
            status,
            Some(parsed_number),
            Some(allocation),
        )
    }

    fn build(
        input_as_provided: &str,
        status: ValidationStatus,
        parsed_number: Option<ParsedNumber>,
        allocation: Option<Allocation>,
    ) -> Self {
        // Fail fast on an inconsistent result object; this is a defect in
        // the orchestrator, not bad user input.
        assert!(
            status != ValidationStatus::Success || parsed_number.is_some(),
            "A successful outcome must carry a parsed number"
        );
        Self {
            input_as_provided: input_as_provided.to_owned(),
            status,
            parsed_number,
            allocation,
        }
    }

    /// The raw input exactly as handed to `validate`.
    pub fn input_as_provided(&self) -> &str {
        &self.input_as_provided
    }

    pub fn succeeded(&self) -> bool {
        self.status == ValidationStatus::Success
    }

    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    pub fn parsed_number(&self) -> Option<&ParsedNumber> {
        self.parsed_number.as_ref()
    }

    pub fn allocation(&self) -> Option<&Allocation> {
        self.allocation.as_ref()
    }
}
