//! Text measurement and truncation. Sizes are in points (1/72 in) so layout stays
//! independent of the export DPI.

/// Average advance of a glyph relative to the font size.
const REGULAR_ADVANCE: f64 = 0.60;
const BOLD_ADVANCE: f64 = 0.66;
/// Line box height relative to the font size.
const LINE_HEIGHT: f64 = 1.2;

/// Heuristic: estimate the width of `text` in points (glyph metrics are not
/// available until a font is loaded, and layout must not depend on one).
pub fn estimate_text_width_pt(text: &str, size_pt: f64, bold: bool) -> f64 {
    let advance = if bold { BOLD_ADVANCE } else { REGULAR_ADVANCE };
    text.chars().count() as f64 * size_pt * advance
}

/// Height of one line of text in points.
pub fn text_height_pt(size_pt: f64) -> f64 {
    size_pt * LINE_HEIGHT
}

/// Truncate to fit `max_pt` and add a single ellipsis if needed.
pub fn truncate_to_width(text: &str, size_pt: f64, max_pt: f64) -> String {
    if estimate_text_width_pt(text, size_pt, false) <= max_pt {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        let candidate = format!("{out}{ch}…");
        if estimate_text_width_pt(&candidate, size_pt, false) > max_pt {
            break;
        }
        out.push(ch);
    }
    if out.is_empty() {
        return "…".to_string();
    }
    out.push('…');
    out
}
