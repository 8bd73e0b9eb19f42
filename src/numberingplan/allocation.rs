use thiserror::Error;

use super::operators::OperatorTag;
use super::range::{InvalidRangeError, NumberRange};

/// Width of one numbering code's block: the 7-digit subscriber space.
pub const CODE_BLOCK_SIZE: u64 = 10_000_000;

/// Highest subscriber number inside a code block.
pub const MAX_SUBSCRIBER_NUMBER: u32 = 9_999_999;

#[derive(Debug, PartialEq, Error)]
pub enum PlanDataError {
    #[error("{0}")]
    InvalidRange(#[from] InvalidRangeError),

    #[error(
        "Allocation {lower}..={upper} for code {code} falls outside the code's own block"
    )]
    AllocationOutsideCode { code: u16, lower: u64, upper: u64 },
}

/// One sub-range of a numbering code's subscriber space, tagged with the
/// operator (or plan status) it is assigned to.
///
/// The range is stored in absolute local-number units, so the code's base
/// offset is already folded in. Construction re-checks that the resulting
/// range is a subset of the code's full block; a failure here means the
/// static plan tables are wrong, not that user input was bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Allocation {
    code: u16,
    operator: OperatorTag,
    range: NumberRange,
}

/// The full 10,000,000-wide local-number range owned by a numbering code.
pub fn code_range(code: u16) -> NumberRange {
    let base = code as u64 * CODE_BLOCK_SIZE;
    // A block is never empty, so the strict bound invariant always holds.
    NumberRange::new(base, base + MAX_SUBSCRIBER_NUMBER as u64)
        .expect("a code block always spans more than one number")
}

impl Allocation {
    /// Builds an allocation from subscriber-number bounds (0..=9,999,999).
    pub fn new(
        code: u16,
        operator: OperatorTag,
        subscriber_lower: u32,
        subscriber_upper: u32,
    ) -> Result<Self, PlanDataError> {
        let base = code as u64 * CODE_BLOCK_SIZE;
        let range = NumberRange::new(
            base + subscriber_lower as u64,
            base + subscriber_upper as u64,
        )?;
        if !range.is_subset_of(&code_range(code)) {
            return Err(PlanDataError::AllocationOutsideCode {
                code,
                lower: range.lower(),
                upper: range.upper(),
            });
        }
        Ok(Self { code, operator, range })
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn operator(&self) -> OperatorTag {
        self.operator
    }

    pub fn range(&self) -> &NumberRange {
        &self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_range_spans_the_whole_block() {
        let range = code_range(803);
        assert_eq!(range.lower(), 8_030_000_000);
        assert_eq!(range.upper(), 8_039_999_999);
    }

    #[test]
    fn allocation_folds_in_the_code_offset() {
        let allocation = Allocation::new(803, OperatorTag::Mtn, 0, MAX_SUBSCRIBER_NUMBER).unwrap();
        assert_eq!(allocation.range().lower(), 8_030_000_000);
        assert_eq!(allocation.range().upper(), 8_039_999_999);
        assert!(allocation.range().is_subset_of(&code_range(803)));
    }

    #[test]
    fn inverted_subscriber_bounds_are_a_plan_defect() {
        let err = Allocation::new(803, OperatorTag::Mtn, 5_000_000, 1_000_000).unwrap_err();
        assert!(matches!(err, PlanDataError::InvalidRange(_)));
    }
}
