use crate::formatter::core::{DecimalDigits, DigitOptions};
use crate::locale::LocaleSettings;
use crate::options::CompactDisplay;

/// Format a number in compact notation, e.g. `1.2K` or `1.2 thousand`
///
/// Returns the integer and fraction digits of the scaled value and the
/// magnitude suffix, empty below one thousand.
pub(super) fn format_compact(
    value: &mut DecimalDigits,
    digits: &DigitOptions,
    display: CompactDisplay,
    locale: &LocaleSettings,
) -> (String, String, String) {
    let suffixes = match display {
        CompactDisplay::Short => &locale.compact_short,
        CompactDisplay::Long => &locale.compact_long,
    };
    let max_tier = suffixes.len() as i32;

    let mut tier = (value.exponent() / 3).clamp(0, max_tier);
    value.shift(-3 * tier);
    let (mut integer, mut fraction) = digits.apply(value);

    // 999950 rounds to 1000K, which reads as 1M
    if tier < max_tier && value.exponent() >= 3 {
        value.shift(-3);
        tier += 1;
        (integer, fraction) = digits.apply(value);
    }

    let suffix = match tier {
        0 => String::new(),
        t => suffixes.get(t as usize - 1).cloned().unwrap_or_default(),
    };
    (integer, fraction, suffix)
}
