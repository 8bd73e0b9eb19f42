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

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Raw input longer than this is truncated before any other processing.
pub const MAX_INPUT_LENGTH: usize = 50;

/// Prefix an international-format Nigerian number starts with once the
/// leading plus has been stripped.
pub const COUNTRY_CODE_PREFIX: &str = "234";

/// Regular expressions and character mappings shared by every validator
/// instance. Built once on first use.
struct InputPatternsAndMappings {
    /// Full match of every character raw input may legally contain: digits,
    /// the o/O keypad typo, and the formatting characters normalization
    /// knows how to strip. Anything else is rejected before normalization.
    allowed_input_pattern: Regex,

    /// Full match of a string consisting purely of ASCII digits.
    digits_pattern: Regex,

    /// Maps a character to what it becomes in the normalized number. Digits
    /// map to themselves, the letters o/O map to the digit 0 (a very common
    /// typo on numeric keypads). Characters absent from this map are
    /// stripped from the number entirely.
    normalization_mappings: HashMap<char, char>,
}

static PATTERNS: LazyLock<InputPatternsAndMappings> = LazyLock::new(|| {
    let mut normalization_mappings = HashMap::new();
    for digit in '0'..='9' {
        normalization_mappings.insert(digit, digit);
    }
    normalization_mappings.insert('o', '0');
    normalization_mappings.insert('O', '0');

    InputPatternsAndMappings {
        allowed_input_pattern: Regex::new(r"^[0-9oO ()+\-]+$")
            .expect("Invalid constant pattern!"),
        digits_pattern: Regex::new(r"^[0-9]+$").expect("Invalid constant pattern!"),
        normalization_mappings,
    }
});

/// Cheap pre-normalization check. True when the input has no chance of being
/// a phone number at all: empty, oversized, or holding a character outside
/// the allowed set (control characters included, they are not in the set).
pub fn fast_reject(raw_input: &str) -> bool {
    raw_input.is_empty()
        || raw_input.chars().count() > MAX_INPUT_LENGTH
        || !PATTERNS.allowed_input_pattern.is_match(raw_input)
}

/// True when the string consists purely of ASCII digits.
pub fn contains_only_digits(s: &str) -> bool {
    PATTERNS.digits_pattern.is_match(s)
}

/// Sanitizes raw input into a bare digit string.
///
/// Order matters: truncate to [`MAX_INPUT_LENGTH`], then run the replacement
/// map, which keeps digits, turns `o`/`O` into `0` and drops everything else
/// (control characters, `+`, whitespace, parentheses, dashes). Idempotent;
/// borrows when the input is already normalized.
pub fn normalize(raw_input: &str) -> Cow<'_, str> {
    if raw_input.chars().count() <= MAX_INPUT_LENGTH && contains_only_digits(raw_input) {
        return Cow::Borrowed(raw_input);
    }

    let truncated: Cow<'_, str> = match raw_input.char_indices().nth(MAX_INPUT_LENGTH) {
        Some((byte_offset, _)) => Cow::Borrowed(&raw_input[..byte_offset]),
        None => Cow::Borrowed(raw_input),
    };

    let mut normalized = String::with_capacity(truncated.len());
    for input_char in truncated.chars() {
        if let Some(replacement) = PATTERNS.normalization_mappings.get(&input_char) {
            normalized.push(*replacement);
        }
        // Unmapped characters are dropped.
    }
    Cow::Owned(normalized)
}

/// The two ways a complete Nigerian mobile number can be written once
/// normalized. A leading `+` never survives normalization, so `+234...`
/// collapses into the international case before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneFormat {
    /// As dialed domestically: leading `0`, 11 digits in total.
    Local,
    /// With the country code: leading `234`, 13 digits in total.
    International,
}

impl PhoneFormat {
    pub fn expected_length(&self) -> usize {
        match self {
            PhoneFormat::Local => 11,
            PhoneFormat::International => 13,
        }
    }

    /// Index of the digit that must be 7, 8 or 9 for a mobile number.
    fn mobile_lead_position(&self) -> usize {
        match self {
            PhoneFormat::Local => 1,
            PhoneFormat::International => 3,
        }
    }
}

/// Determines the format by prefix. `None` means the number cannot be
/// Nigerian at all.
pub fn classify(normalized: &str) -> Option<PhoneFormat> {
    if normalized.starts_with('0') {
        Some(PhoneFormat::Local)
    } else if normalized.starts_with(COUNTRY_CODE_PREFIX) {
        Some(PhoneFormat::International)
    } else {
        None
    }
}

/// Fast foreign-number check, run before any length check: the digit right
/// after the format prefix must be 7, 8 or 9, since Nigerian mobile codes
/// start only with those. When the input is still too short to hold that
/// digit the check passes; the completeness gate deals with short input.
pub fn has_mobile_lead(normalized: &str, format: PhoneFormat) -> bool {
    match normalized.chars().nth(format.mobile_lead_position()) {
        Some(lead) => matches!(lead, '7' | '8' | '9'),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_reject_catches_empty_oversized_and_foreign_chars() {
        assert!(fast_reject(""));
        assert!(fast_reject(&"0".repeat(MAX_INPUT_LENGTH + 1)));
        assert!(fast_reject("0803123456a"));
        assert!(fast_reject("0803\t1234567"));
        assert!(fast_reject("0803\u{0007}1234567"));

        assert!(!fast_reject("0803 123 4567"));
        assert!(!fast_reject("+234 (803) 123-4567"));
        assert!(!fast_reject("o8o31234567"));
    }

    #[test]
    fn normalize_strips_formatting_and_fixes_keypad_typos() {
        assert_eq!(normalize("+234 (803) 123-4567"), "2348031234567");
        assert_eq!(normalize("o8o31234567"), "08031234567");
        assert_eq!(normalize("0803-123-4567"), "08031234567");
    }

    #[test]
    fn normalize_strips_control_characters() {
        assert_eq!(normalize("0803\u{0000}123\u{009F}4567"), "08031234567");
    }

    #[test]
    fn normalize_truncates_oversized_input() {
        let oversized = "1".repeat(MAX_INPUT_LENGTH + 20);
        assert_eq!(normalize(&oversized).len(), MAX_INPUT_LENGTH);
    }

    #[test]
    fn normalize_is_idempotent_and_borrows_when_already_clean() {
        let once = normalize("+234 803 123 4567").into_owned();
        let twice = normalize(&once);
        assert_eq!(*twice, once);
        assert!(matches!(twice, Cow::Borrowed(_)));
    }

    #[test]
    fn classification_by_prefix() {
        assert_eq!(classify("08031234567"), Some(PhoneFormat::Local));
        assert_eq!(classify("2348031234567"), Some(PhoneFormat::International));
        assert_eq!(classify("44812345678"), None);
        assert_eq!(classify("1"), None);
    }

    #[test]
    fn mobile_lead_check_positions() {
        assert!(has_mobile_lead("08031234567", PhoneFormat::Local));
        assert!(!has_mobile_lead("06031234567", PhoneFormat::Local));
        assert!(has_mobile_lead("2348031234567", PhoneFormat::International));
        assert!(!has_mobile_lead("2346031234567", PhoneFormat::International));
        // Too short to carry the lead digit yet: not a foreign number.
        assert!(has_mobile_lead("0", PhoneFormat::Local));
        assert!(has_mobile_lead("234", PhoneFormat::International));
    }
}
