mod allocation;
mod index;
mod operators;
pub mod plan_data;
mod range;

use std::sync::LazyLock;

pub use allocation::{code_range, Allocation, PlanDataError, CODE_BLOCK_SIZE, MAX_SUBSCRIBER_NUMBER};
pub use index::NumberingPlanIndex;
pub use operators::OperatorTag;
pub use range::{InvalidRangeError, NumberRange, RangeOrdering};

/// The process-wide plan index. Validator instances hold no plan data of
/// their own; they all resolve against this shared immutable map.
pub static NUMBERING_PLAN: LazyLock<NumberingPlanIndex> =
    LazyLock::new(NumberingPlanIndex::new);
