//! Utility functions for visualization: locale mapping and tick number formatting.

use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Fewest decimals (up to 6) that print every value without visible rounding.
pub fn shared_precision(values: &[f64]) -> usize {
    values
        .iter()
        .map(|v| {
            (0..=6)
                .find(|&d| {
                    let scale = 10f64.powi(d as i32);
                    ((v * scale).round() - v * scale).abs() < 1e-6 * scale.max(1.0)
                })
                .unwrap_or(6)
        })
        .max()
        .unwrap_or(0)
}

/// Format one number with a fixed precision, locale grouping and decimal separator.
pub fn format_number(v: f64, precision: usize, locale_tag: &str) -> String {
    let (locale, dec_sep) = map_locale(locale_tag);
    // Avoid printing "-0".
    let v = if v.abs() < 0.5 * 10f64.powi(-(precision as i32)) { 0.0 } else { v };
    let fixed = format!("{:.*}", precision, v.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let grouped = int_part
        .parse::<u64>()
        .map(|n| n.to_formatted_string(locale))
        .unwrap_or_else(|_| int_part.to_string());
    let sign = if v < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}{dec_sep}{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format a set of tick values with one shared precision, the way axis labels read.
pub fn format_ticks(values: &[f64], locale_tag: &str) -> Vec<String> {
    let precision = shared_precision(values);
    values
        .iter()
        .map(|v| format_number(*v, precision, locale_tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_print_without_decimals() {
        assert_eq!(
            format_ticks(&[-10.0, -5.0, 0.0, 5.0, 10.0], "en"),
            vec!["-10", "-5", "0", "5", "10"]
        );
    }

    #[test]
    fn fractional_ticks_share_precision() {
        assert_eq!(format_ticks(&[0.0, 0.25, 0.5], "en"), vec!["0.00", "0.25", "0.50"]);
        assert_eq!(format_ticks(&[0.0, 0.2, 0.4], "en"), vec!["0.0", "0.2", "0.4"]);
    }

    #[test]
    fn locale_grouping_and_separator() {
        assert_eq!(format_number(30000.0, 0, "en"), "30,000");
        assert_eq!(format_number(30000.0, 0, "de"), "30.000");
        assert_eq!(format_number(-1.5, 1, "de"), "-1,5");
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(format_number(-0.0, 1, "en"), "0.0");
        assert_eq!(format_number(-0.0000001, 2, "en"), "0.00");
    }
}
