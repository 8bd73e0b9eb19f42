use dashmap::DashMap;
use log::{debug, trace};

use super::allocation::{Allocation, CODE_BLOCK_SIZE};
use super::plan_data::{subscriber_bands, SubscriberBand};

/// Lazily populated map from numbering code to its allocation list.
///
/// Allocation lists are materialized per code on first lookup, so cold-start
/// cost is proportional to the distinct codes actually queried, not the full
/// plan. The entry API makes the check-then-build step atomic, so concurrent
/// first lookups of the same code build its list exactly once.
pub struct NumberingPlanIndex {
    allocations_by_code: DashMap<u16, Vec<Allocation>>,
}

impl NumberingPlanIndex {
    pub fn new() -> Self {
        Self {
            allocations_by_code: DashMap::new(),
        }
    }

    /// Resolves a local number (numbering code + 7 subscriber digits as one
    /// integer) to its allocation, or `None` when the code is not part of
    /// the plan or the subscriber number falls in an unallocated gap.
    pub fn search(&self, local_number: u64) -> Option<Allocation> {
        // Numbers too large for any 3-digit code must not alias a valid
        // code through truncation.
        let Ok(code) = u16::try_from(local_number / CODE_BLOCK_SIZE) else {
            return None;
        };
        let bands = match subscriber_bands(code) {
            Some(bands) => bands,
            None => {
                trace!("Local number {local_number}: code {code} is not in the numbering plan");
                return None;
            }
        };

        let allocations = self
            .allocations_by_code
            .entry(code)
            .or_insert_with(|| Self::materialize(code, bands));

        // At most seven bands per code, so a linear scan is the search.
        allocations
            .iter()
            .find(|allocation| allocation.range().contains(local_number))
            .copied()
    }

    fn materialize(code: u16, bands: &[SubscriberBand]) -> Vec<Allocation> {
        debug!("Materializing allocation list for numbering code {code}");
        bands
            .iter()
            .map(|&(lower, upper, operator)| {
                Allocation::new(code, operator, lower, upper).unwrap_or_else(|err| {
                    // Bad compiled-in plan data is a library defect, fail loudly.
                    let message =
                        format!("Invalid compiled-in plan data for code {code}: {err}");
                    log::error!("{message}");
                    panic!("{message}");
                })
            })
            .collect()
    }
}

impl Default for NumberingPlanIndex {
    fn default() -> Self {
        Self::new()
    }
}
