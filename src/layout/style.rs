use crate::page::{Page, StyledLine};
use crate::units::FontSize;

/// How much of the envelope the top-to-bottom taper actually spans. Later
/// lines shrink toward the minimum but never reach it.
const TAPER_DEPTH: f32 = 0.6;

/// The `(min, max)` font-size range observed across an original styled
/// corpus, resampled onto freshly reflowed lines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SizeEnvelope {
    pub min: FontSize,
    pub max: FontSize,
}

impl Default for SizeEnvelope {
    /// The fixed envelope used when a corpus has no non-empty lines to
    /// measure.
    fn default() -> SizeEnvelope {
        SizeEnvelope {
            min: FontSize(16.0),
            max: FontSize(28.0),
        }
    }
}

impl SizeEnvelope {
    /// Measure the envelope over every non-empty line of an original corpus,
    /// flattened across its pages. Falls back to [`SizeEnvelope::default`]
    /// when the corpus holds no non-empty lines.
    pub fn of(original: &[Vec<StyledLine>]) -> SizeEnvelope {
        let mut sizes = original
            .iter()
            .flatten()
            .filter(|line| !line.is_empty())
            .map(|line| line.size);
        let Some(first) = sizes.next() else {
            return SizeEnvelope::default();
        };
        sizes.fold(
            SizeEnvelope {
                min: first,
                max: first,
            },
            |envelope, size| SizeEnvelope {
                min: envelope.min.min(size),
                max: envelope.max.max(size),
            },
        )
    }

    /// Sample a size for the line at zero-based `index` of `count` lines on
    /// a page. Sizes taper from `max` at the top of the page toward `min`,
    /// damped by [`TAPER_DEPTH`]; blank lines sit at `min`.
    fn sample(&self, index: usize, count: usize, blank: bool) -> FontSize {
        if blank {
            return self.min;
        }
        let progress = if count > 1 {
            index as f32 / (count - 1) as f32
        } else {
            0.5
        };
        self.max - (self.max - self.min) * (progress * TAPER_DEPTH)
    }
}

/// Assign a font size to every line of freshly reflowed `pages`.
///
/// With no `original` corpus every line gets `default_size`. With one, each
/// page tapers from the corpus's largest observed size toward its smallest.
/// Only the corpus's size envelope is consulted; its own page and line
/// boundaries have no bearing on the new layout, so content reflows freely
/// across presentation contexts.
pub fn restyle(
    pages: &[Vec<String>],
    original: Option<&[Vec<StyledLine>]>,
    default_size: FontSize,
) -> Vec<Page> {
    let envelope = original.map(SizeEnvelope::of);

    pages
        .iter()
        .map(|lines| {
            let mut page = Page::default();
            let count = lines.len();
            for (index, text) in lines.iter().enumerate() {
                let size = match envelope {
                    Some(envelope) => envelope.sample(index, count, text.is_empty()),
                    None => default_size,
                };
                page.push_line(StyledLine::new(text, size));
            }
            page
        })
        .collect()
}
