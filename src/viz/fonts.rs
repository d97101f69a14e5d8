//! One-time registration of a "sans-serif" font for the `ab_glyph` text path.
//!
//! `ab_glyph` doesn't discover OS fonts. A TrueType file is looked up on disk
//! (env override, user font dir, common system locations) and leaked into a
//! `'static` buffer; the DejaVu Sans faces bundled under `assets/` are used when
//! nothing is found, so text always renders.

use std::path::PathBuf;
use std::sync::OnceLock;

use log::{debug, warn};
use plotters::style::FontStyle;

/// Path to a regular-weight `.ttf` that overrides discovery.
pub const FONT_ENV: &str = "ECON_PLOTS_FONT";
/// Path to a bold `.ttf` that overrides discovery.
pub const BOLD_FONT_ENV: &str = "ECON_PLOTS_FONT_BOLD";

const FAMILY: &str = "sans-serif";

/// Bundled fallback faces.
pub(crate) const BUNDLED_REGULAR: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");
pub(crate) const BUNDLED_BOLD: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");

const REGULAR_FILES: &[&str] = &[
    "DejaVuSans.ttf",
    "LiberationSans-Regular.ttf",
    "Arial.ttf",
    "arial.ttf",
    "FreeSans.ttf",
];

const BOLD_FILES: &[&str] = &[
    "DejaVuSans-Bold.ttf",
    "LiberationSans-Bold.ttf",
    "Arial Bold.ttf",
    "arialbd.ttf",
    "FreeSansBold.ttf",
];

const SYSTEM_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/truetype/freefont",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts/Supplemental",
    "C:\\Windows\\Fonts",
];

static REGISTERED: OnceLock<bool> = OnceLock::new();

/// Register fonts on first use. Returns whether bitmap text can be drawn.
pub fn ensure_fonts_registered() -> bool {
    *REGISTERED.get_or_init(register)
}

fn register() -> bool {
    let regular = register_face(FontStyle::Normal, load(FONT_ENV, REGULAR_FILES), BUNDLED_REGULAR);
    let bold = register_face(FontStyle::Bold, load(BOLD_FONT_ENV, BOLD_FILES), BUNDLED_BOLD);
    if !(regular && bold) {
        warn!("bundled font could not be registered; PNG output will omit text");
    }
    regular && bold
}

/// Register `found`, or `bundled` when nothing was found or it fails to parse.
fn register_face(style: FontStyle, found: Option<&'static [u8]>, bundled: &'static [u8]) -> bool {
    if let Some(bytes) = found {
        if plotters::style::register_font(FAMILY, style, bytes).is_ok() {
            return true;
        }
        warn!("font file could not be parsed, using bundled DejaVu Sans");
    } else {
        debug!("no system font found, using bundled DejaVu Sans");
    }
    plotters::style::register_font(FAMILY, style, bundled).is_ok()
}

fn load(env_var: &str, names: &[&str]) -> Option<&'static [u8]> {
    candidates(env_var, names).into_iter().find_map(|path| {
        let bytes = std::fs::read(&path).ok()?;
        debug!("using font {}", path.display());
        Some(&*Box::leak(bytes.into_boxed_slice()))
    })
}

fn candidates(env_var: &str, names: &[&str]) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Some(p) = std::env::var_os(env_var) {
        out.push(PathBuf::from(p));
    }
    let dirs = dirs::font_dir()
        .into_iter()
        .chain(SYSTEM_DIRS.iter().map(PathBuf::from));
    for dir in dirs {
        for name in names {
            out.push(dir.join(name));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_cover_system_dirs() {
        let list = candidates("ECON_PLOTS_TEST_UNSET_VAR", REGULAR_FILES);
        assert!(!list.is_empty());
        assert!(list.iter().any(|p| p.ends_with("DejaVuSans.ttf")));
    }

    #[test]
    fn bundled_faces_are_truetype() {
        for face in [BUNDLED_REGULAR, BUNDLED_BOLD] {
            assert!(face.len() > 1024);
            assert_eq!(&face[..4], &[0x00, 0x01, 0x00, 0x00]);
        }
    }

    #[test]
    fn registration_succeeds_and_is_idempotent() {
        assert!(ensure_fonts_registered());
        assert!(ensure_fonts_registered());
    }
}
