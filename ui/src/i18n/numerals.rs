//! Digit transliteration for statistics and counters.

use super::Language;

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Replaces ASCII digits with Arabic-Indic digits. Other characters pass through.
pub fn to_arabic_indic(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => ARABIC_INDIC_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Digits as the given language displays them.
pub fn localize_digits(language: Language, input: &str) -> String {
    match language {
        Language::Arabic => to_arabic_indic(input),
        Language::English => input.to_string(),
    }
}
