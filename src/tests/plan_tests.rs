use crate::numberingplan::{
    code_range, plan_data, NumberingPlanIndex, OperatorTag, RangeOrdering, CODE_BLOCK_SIZE,
    MAX_SUBSCRIBER_NUMBER, NUMBERING_PLAN,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn every_code_block_spans_exactly_ten_million_numbers() {
    init_logging();
    for &code in plan_data::NUMBERING_CODES {
        let block = code_range(code);
        assert_eq!(block.upper() - block.lower() + 1, CODE_BLOCK_SIZE);
        assert_eq!(block.lower(), code as u64 * CODE_BLOCK_SIZE);
    }
}

#[test]
fn every_code_has_bands_and_every_band_fits_its_block() {
    for &code in plan_data::NUMBERING_CODES {
        let bands = plan_data::subscriber_bands(code)
            .unwrap_or_else(|| panic!("code {code} is valid but has no bands"));
        assert!(!bands.is_empty());
        for &(lower, upper, _) in bands {
            assert!(lower < upper, "degenerate band in code {code}");
            assert!(upper <= MAX_SUBSCRIBER_NUMBER, "band overflows block of code {code}");
        }
    }
}

#[test]
fn bands_are_ascending_and_pairwise_disjoint() {
    for &code in plan_data::NUMBERING_CODES {
        let bands = plan_data::subscriber_bands(code).unwrap();
        for window in bands.windows(2) {
            let (_, previous_upper, _) = window[0];
            let (next_lower, _, _) = window[1];
            assert!(
                previous_upper < next_lower,
                "bands of code {code} overlap or are out of order"
            );
        }
    }
}

#[test]
fn resolved_allocations_are_subsets_of_their_code_block() {
    for &code in plan_data::NUMBERING_CODES {
        let block = code_range(code);
        for &(lower, _, _) in plan_data::subscriber_bands(code).unwrap() {
            let local_number = code as u64 * CODE_BLOCK_SIZE + lower as u64;
            let allocation = NUMBERING_PLAN
                .search(local_number)
                .unwrap_or_else(|| panic!("band start of code {code} did not resolve"));
            assert!(allocation.range().is_subset_of(&block));
            assert_eq!(allocation.code(), code);
            assert_eq!(
                allocation.range().relation_to(&block),
                RangeOrdering::Overlapping
            );
        }
    }
}

#[test]
fn search_round_trips_band_bounds_and_midpoints() {
    for &code in plan_data::NUMBERING_CODES {
        let base = code as u64 * CODE_BLOCK_SIZE;
        for &(lower, upper, operator) in plan_data::subscriber_bands(code).unwrap() {
            let probes = [
                base + lower as u64,
                base + upper as u64,
                base + (lower as u64 + upper as u64) / 2,
            ];
            for probe in probes {
                let allocation = NUMBERING_PLAN.search(probe).unwrap();
                assert_eq!(allocation.operator(), operator);
                assert!(allocation.range().contains(probe));
            }
        }
    }
}

#[test]
fn search_is_total_and_never_panics() {
    let index = NumberingPlanIndex::new();
    for probe in [0, 1, 6_999_999_999, 9_170_000_000, u64::MAX / 2, u64::MAX] {
        // Either a bounding allocation or nothing, never a panic.
        if let Some(allocation) = index.search(probe) {
            assert!(allocation.range().contains(probe));
        }
    }
}

#[test]
fn unknown_codes_do_not_resolve() {
    // 914 is the plan gap; 0 and 999 were never in the plan.
    assert!(NUMBERING_PLAN.search(9_141_234_567).is_none());
    assert!(NUMBERING_PLAN.search(1_234_567).is_none());
    assert!(NUMBERING_PLAN.search(9_991_234_567).is_none());
    assert!(!plan_data::is_valid_code(914));
    assert!(plan_data::is_valid_code(803));
}

#[test]
fn split_code_has_the_documented_shape() {
    let bands = plan_data::subscriber_bands(702).unwrap();
    assert_eq!(bands.len(), 7);

    let smile_positions: Vec<usize> = bands
        .iter()
        .enumerate()
        .filter(|(_, (_, _, tag))| *tag == OperatorTag::Smile)
        .map(|(position, _)| position)
        .collect();
    assert_eq!(smile_positions, vec![0, 6], "Smile holds two non-adjacent bands");

    let mut distinct: Vec<OperatorTag> = bands.iter().map(|&(_, _, tag)| tag).collect();
    distinct.sort_by_key(|tag| format!("{tag:?}"));
    distinct.dedup();
    assert_eq!(distinct.len(), 6);
}

#[test]
fn split_code_boundaries_resolve_to_the_right_parties() {
    let base = 702u64 * CODE_BLOCK_SIZE;
    assert_eq!(
        NUMBERING_PLAN.search(base).unwrap().operator(),
        OperatorTag::Smile
    );
    assert_eq!(
        NUMBERING_PLAN.search(base + 999_999).unwrap().operator(),
        OperatorTag::Smile
    );
    // One past the first band boundary is a different party.
    assert_eq!(
        NUMBERING_PLAN.search(base + 1_000_000).unwrap().operator(),
        OperatorTag::Returned
    );
    assert_eq!(
        NUMBERING_PLAN.search(base + 5_500_000).unwrap().operator(),
        OperatorTag::Visafone
    );
    // The top of the subscriber space is not allocated at all.
    assert!(NUMBERING_PLAN.search(base + 8_000_000).is_none());
    assert!(NUMBERING_PLAN.search(base + 9_999_999).is_none());
}
