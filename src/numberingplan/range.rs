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

use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("Invalid range: lower bound {lower} must be strictly below upper bound {upper}")]
pub struct InvalidRangeError {
    pub lower: u64,
    pub upper: u64,
}

/// A closed interval of local numbers, immutable once constructed.
///
/// Both bounds are inclusive. The constructor requires `lower < upper`
/// strictly, so a range always spans at least two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberRange {
    lower: u64,
    upper: u64,
}

/// How two ranges sit relative to each other on the number line.
///
/// This is a tri-state comparator used for ordering and searching, not a
/// strict total order: two ranges that share any number compare as
/// `Overlapping`, so callers must not assume transitivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeOrdering {
    /// This range ends before the other one starts.
    Before,
    /// This range starts after the other one ends.
    After,
    /// The ranges share at least one number.
    Overlapping,
}

impl NumberRange {
    pub fn new(lower: u64, upper: u64) -> Result<Self, InvalidRangeError> {
        if lower >= upper {
            return Err(InvalidRangeError { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> u64 {
        self.lower
    }

    pub fn upper(&self) -> u64 {
        self.upper
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: u64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn is_subset_of(&self, other: &NumberRange) -> bool {
        self.lower >= other.lower && self.upper <= other.upper
    }

    pub fn relation_to(&self, other: &NumberRange) -> RangeOrdering {
        if self.upper < other.lower {
            RangeOrdering::Before
        } else if other.upper < self.lower {
            RangeOrdering::After
        } else {
            RangeOrdering::Overlapping
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_and_degenerate_bounds() {
        assert_eq!(
            NumberRange::new(10, 10),
            Err(InvalidRangeError { lower: 10, upper: 10 })
        );
        assert_eq!(
            NumberRange::new(11, 10),
            Err(InvalidRangeError { lower: 11, upper: 10 })
        );
        assert!(NumberRange::new(10, 11).is_ok());
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let range = NumberRange::new(100, 200).unwrap();
        assert!(range.contains(100));
        assert!(range.contains(150));
        assert!(range.contains(200));
        assert!(!range.contains(99));
        assert!(!range.contains(201));
    }

    #[test]
    fn subset_includes_equal_ranges() {
        let outer = NumberRange::new(0, 1000).unwrap();
        let inner = NumberRange::new(10, 20).unwrap();
        assert!(inner.is_subset_of(&outer));
        assert!(outer.is_subset_of(&outer));
        assert!(!outer.is_subset_of(&inner));

        let straddling = NumberRange::new(990, 1010).unwrap();
        assert!(!straddling.is_subset_of(&outer));
    }

    #[test]
    fn relation_is_a_tri_state() {
        let a = NumberRange::new(0, 9).unwrap();
        let b = NumberRange::new(10, 19).unwrap();
        assert_eq!(a.relation_to(&b), RangeOrdering::Before);
        assert_eq!(b.relation_to(&a), RangeOrdering::After);

        // Touching at a single number already counts as overlap.
        let c = NumberRange::new(9, 15).unwrap();
        assert_eq!(a.relation_to(&c), RangeOrdering::Overlapping);
        assert_eq!(c.relation_to(&a), RangeOrdering::Overlapping);
        assert_eq!(a.relation_to(&a), RangeOrdering::Overlapping);
    }
}
