//! The static Nigerian numbering-plan tables.
//!
//! One entry per valid 3-digit numbering code, each defining how that code's
//! 7-digit subscriber space (0..=9,999,999) is carved up between operators
//! and regulator statuses. Most codes belong to a single operator outright;
//! code 702 is the split one, carved into seven sub-ranges across six tags
//! with Smile holding two non-contiguous pieces. The tables are closed,
//! build-time data; there is no runtime registration.

use super::operators::OperatorTag;

/// A subscriber-space band: inclusive bounds plus the owning tag.
pub(crate) type SubscriberBand = (u32, u32, OperatorTag);

/// Every numbering code the plan currently defines, ascending. 700-710,
/// 800-818 and 900-916, with 914 left out of the plan entirely.
pub const NUMBERING_CODES: &[u16] = &[
    700, 701, 702, 703, 704, 705, 706, 707, 708, 709, 710, // 07xx
    800, 801, 802, 803, 804, 805, 806, 807, 808, 809, // 08xx
    810, 811, 812, 813, 814, 815, 816, 817, 818, // 08xx continued
    900, 901, 902, 903, 904, 905, 906, 907, 908, 909, // 09xx
    910, 911, 912, 913, 915, 916, // 09xx continued, 914 is a plan gap
];

pub fn is_valid_code(code: u16) -> bool {
    NUMBERING_CODES.binary_search(&code).is_ok()
}

/// The subscriber-space bands for one code, ascending and pairwise disjoint,
/// or `None` when the code is not part of the plan. Bands need not cover the
/// whole subscriber space; uncovered numbers are simply not allocated.
pub(crate) fn subscriber_bands(code: u16) -> Option<&'static [SubscriberBand]> {
    use OperatorTag::*;

    Some(match code {
        700 => &[(0, 9_999_999, SharedVas)],
        701 => &[(0, 9_999_999, Airtel)],
        // The split code. Seven bands, six distinct tags, Smile twice and
        // not adjacent; 8,000,000..=9,999,999 is not allocated at all.
        702 => &[
            (0, 999_999, Smile),
            (1_000_000, 1_999_999, Returned),
            (2_000_000, 2_999_999, Reserved),
            (3_000_000, 3_999_999, Withdrawn),
            (4_000_000, 4_999_999, Unassigned),
            (5_000_000, 6_999_999, Visafone),
            (7_000_000, 7_999_999, Smile),
        ],
        703 => &[(0, 9_999_999, Mtn)],
        704 => &[(0, 9_999_999, Mtn)],
        705 => &[(0, 9_999_999, Glo)],
        706 => &[(0, 9_999_999, Mtn)],
        707 => &[(0, 9_999_999, Mtn)],
        708 => &[(0, 9_999_999, Airtel)],
        709 => &[(0, 9_999_999, Withdrawn)],
        710 => &[(0, 9_999_999, Mtn)],
        800 => &[(0, 9_999_999, SharedVas)],
        801 => &[(0, 9_999_999, Unassigned)],
        802 => &[(0, 9_999_999, Airtel)],
        803 => &[(0, 9_999_999, Mtn)],
        804 => &[(0, 9_999_999, Ntel)],
        805 => &[(0, 9_999_999, Glo)],
        806 => &[(0, 9_999_999, Mtn)],
        807 => &[(0, 9_999_999, Glo)],
        808 => &[(0, 9_999_999, Airtel)],
        809 => &[(0, 9_999_999, NineMobile)],
        810 => &[(0, 9_999_999, Mtn)],
        811 => &[(0, 9_999_999, Glo)],
        812 => &[(0, 9_999_999, Airtel)],
        813 => &[(0, 9_999_999, Mtn)],
        814 => &[(0, 9_999_999, Mtn)],
        815 => &[(0, 9_999_999, Glo)],
        816 => &[(0, 9_999_999, Mtn)],
        817 => &[(0, 9_999_999, NineMobile)],
        818 => &[(0, 9_999_999, NineMobile)],
        900 => &[(0, 9_999_999, SharedVas)],
        901 => &[(0, 9_999_999, Airtel)],
        902 => &[(0, 9_999_999, Airtel)],
        903 => &[(0, 9_999_999, Mtn)],
        904 => &[(0, 9_999_999, Airtel)],
        905 => &[(0, 9_999_999, Glo)],
        906 => &[(0, 9_999_999, Mtn)],
        907 => &[(0, 9_999_999, Airtel)],
        908 => &[(0, 9_999_999, NineMobile)],
        909 => &[(0, 9_999_999, NineMobile)],
        910 => &[(0, 9_999_999, Mtn)],
        911 => &[(0, 9_999_999, Airtel)],
        912 => &[(0, 9_999_999, Airtel)],
        913 => &[(0, 9_999_999, Mtn)],
        915 => &[(0, 9_999_999, Glo)],
        916 => &[(0, 9_999_999, Mtn)],
        _ => return None,
    })
}
