//! Pre-defined layout profiles for the viewer's presentation contexts.
//!
//! Each presentation context (the visual theme a body of text is read under)
//! maps to one [`LayoutProfile`]: where the text block sits inside the
//! viewport, and how much text fits on a page. Profiles are plain constants,
//! built once and never mutated; [`get_layout`] resolves a context key and
//! falls back to [`DEFAULT`] for keys it does not know, so lookup is total.
//!
//! # Available profiles
//!
//! `DEFAULT` (aka `"classic"`), `FULLSCREEN`, `CAPTION`, `BANNER`, `COMPACT`
//!
//! # Example
//!
//! ```
//! use page_reflow::get_layout;
//!
//! let caption = get_layout("caption");
//! assert_eq!(caption.max_lines_per_page, 4);
//!
//! // unknown contexts fall back to the default profile
//! let fallback = get_layout("no-such-theme");
//! assert_eq!(fallback.max_chars_per_line, 40);
//! ```

use crate::error::ProfileError;
use crate::units::Frac;

/// Geometric placement and capacity constraints for one presentation context.
///
/// The four fractional fields position the text block inside the destination
/// viewport and are consumed by the renderer only; the reflow algorithms use
/// just the two budgets and the empty-line flag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutProfile {
    /// Left edge of the text block, as a fraction of viewport width.
    pub origin_x: Frac,
    /// Top edge of the text block, as a fraction of viewport height.
    pub origin_y: Frac,
    /// Width of the text block, as a fraction of viewport width.
    pub width: Frac,
    /// Height of the text block, as a fraction of viewport height.
    pub height: Frac,
    /// How many display lines fit on one page.
    pub max_lines_per_page: usize,
    /// How many characters fit on one display line.
    pub max_chars_per_line: usize,
    /// Whether blank input lines survive as blank display lines.
    pub preserve_empty_lines: bool,
}

/// The profile used for any context without an entry of its own: a centered
/// block at (0.1, 0.25) sized 0.8 × 0.5 of the viewport, twelve lines of
/// forty characters, blank lines preserved.
pub const DEFAULT: LayoutProfile = LayoutProfile {
    origin_x: Frac(0.1),
    origin_y: Frac(0.25),
    width: Frac(0.8),
    height: Frac(0.5),
    max_lines_per_page: 12,
    max_chars_per_line: 40,
    preserve_empty_lines: true,
};

/// Nearly the whole viewport, for distraction-free reading.
pub const FULLSCREEN: LayoutProfile = LayoutProfile {
    origin_x: Frac(0.05),
    origin_y: Frac(0.1),
    width: Frac(0.9),
    height: Frac(0.8),
    max_lines_per_page: 18,
    max_chars_per_line: 52,
    preserve_empty_lines: true,
};

/// A short strip along the bottom edge, over media backgrounds.
pub const CAPTION: LayoutProfile = LayoutProfile {
    origin_x: Frac(0.1),
    origin_y: Frac(0.75),
    width: Frac(0.8),
    height: Frac(0.2),
    max_lines_per_page: 4,
    max_chars_per_line: 36,
    preserve_empty_lines: false,
};

/// A headline strip along the top edge.
pub const BANNER: LayoutProfile = LayoutProfile {
    origin_x: Frac(0.05),
    origin_y: Frac(0.05),
    width: Frac(0.9),
    height: Frac(0.2),
    max_lines_per_page: 3,
    max_chars_per_line: 48,
    preserve_empty_lines: false,
};

/// A narrow centered column.
pub const COMPACT: LayoutProfile = LayoutProfile {
    origin_x: Frac(0.2),
    origin_y: Frac(0.3),
    width: Frac(0.6),
    height: Frac(0.4),
    max_lines_per_page: 8,
    max_chars_per_line: 28,
    preserve_empty_lines: true,
};

impl LayoutProfile {
    /// Construct a profile, rejecting geometry outside the unit interval and
    /// zero budgets. The registry constants are built literally and covered
    /// by tests; this constructor is for callers assembling their own
    /// profiles at runtime.
    pub fn new(
        origin: (Frac, Frac),
        size: (Frac, Frac),
        max_lines_per_page: usize,
        max_chars_per_line: usize,
        preserve_empty_lines: bool,
    ) -> Result<LayoutProfile, ProfileError> {
        let profile = LayoutProfile {
            origin_x: origin.0,
            origin_y: origin.1,
            width: size.0,
            height: size.1,
            max_lines_per_page,
            max_chars_per_line,
            preserve_empty_lines,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the profile invariants: all fractions within `[0, 1]` and both
    /// budgets at least one.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let fractions = [
            ("origin_x", self.origin_x),
            ("origin_y", self.origin_y),
            ("width", self.width),
            ("height", self.height),
        ];
        for (field, value) in fractions {
            if !value.in_bounds() {
                return Err(ProfileError::FractionOutOfBounds {
                    field,
                    value: value.into(),
                });
            }
        }
        if self.max_lines_per_page == 0 {
            return Err(ProfileError::ZeroLineBudget);
        }
        if self.max_chars_per_line == 0 {
            return Err(ProfileError::ZeroCharBudget);
        }
        Ok(())
    }
}

/// Resolve the layout profile governing a presentation context. Total: a
/// context key without an entry resolves to [`DEFAULT`] rather than failing.
pub fn get_layout(context: &str) -> &'static LayoutProfile {
    match context {
        "classic" => &DEFAULT,
        "fullscreen" => &FULLSCREEN,
        "caption" => &CAPTION,
        "banner" => &BANNER,
        "compact" => &COMPACT,
        _ => {
            log::trace!("no layout profile for context {context:?}, using default");
            &DEFAULT
        }
    }
}
