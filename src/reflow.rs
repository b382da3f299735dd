use crate::layout::{paginate, restyle};
use crate::page::{Page, StyledLine};
use crate::profile::{get_layout, LayoutProfile};
use crate::units::FontSize;

/// The size given to every line of flat content, which carries no earlier
/// styling to resample: the midpoint of the fallback envelope.
pub const DEFAULT_FONT_SIZE: FontSize = FontSize(22.0);

/// The text a reflow request starts from.
///
/// Structured content was laid out before and carries per-line sizes from
/// that earlier layout; flat content is bare text blocks. Exactly one shape
/// is present per request and [`process`] dispatches on it.
#[derive(Clone, PartialEq, Debug)]
pub enum ContentSource {
    /// Pages of styled lines from an original authoring layout.
    Structured(Vec<Vec<StyledLine>>),
    /// Plain text blocks with no per-line sizing.
    Flat(Vec<String>),
}

/// The outcome of a reflow: freshly laid-out pages plus the profile that
/// governed them, for the renderer to position.
#[derive(Clone, PartialEq, Debug)]
pub struct Reflowed {
    pub pages: Vec<Page>,
    pub profile: &'static LayoutProfile,
}

/// Reflow content for a presentation context.
///
/// The content's text is flattened into one newline-joined body, paginated
/// under the context's profile, and restyled: structured content contributes
/// its size envelope, flat content falls back to [`DEFAULT_FONT_SIZE`].
/// Total over its whole input domain: an unknown context key resolves to
/// the default profile, and empty content yields a single page holding one
/// empty line.
pub fn process(content: &ContentSource, context: &str) -> Reflowed {
    let profile = get_layout(context);

    let pages = match content {
        ContentSource::Structured(original) => {
            let body = original
                .iter()
                .flatten()
                .map(|line| line.text.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            let pages = paginate(&body, profile);
            restyle(&pages, Some(original.as_slice()), DEFAULT_FONT_SIZE)
        }
        ContentSource::Flat(blocks) => {
            let body = blocks.join("\n");
            let pages = paginate(&body, profile);
            restyle(&pages, None, DEFAULT_FONT_SIZE)
        }
    };

    log::debug!(
        "reflowed content for context {context:?} into {} page(s)",
        pages.len()
    );

    Reflowed { pages, profile }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_text_is_flattened_in_reading_order() {
        let original = vec![
            vec![
                StyledLine::new("one", FontSize(20.0)),
                StyledLine::new("two", FontSize(20.0)),
            ],
            vec![StyledLine::new("three", FontSize(20.0))],
        ];
        let reflowed = process(&ContentSource::Structured(original), "classic");
        assert_eq!(reflowed.pages[0].text(), "one\ntwo\nthree");
    }

    #[test]
    fn empty_flat_content_yields_one_empty_page() {
        let reflowed = process(&ContentSource::Flat(vec![]), "classic");
        assert_eq!(reflowed.pages.len(), 1);
        assert_eq!(reflowed.pages[0].lines.len(), 1);
        assert!(reflowed.pages[0].lines[0].is_empty());
    }

    #[test]
    fn empty_structured_content_yields_one_empty_page() {
        let reflowed = process(&ContentSource::Structured(vec![]), "classic");
        assert_eq!(reflowed.pages.len(), 1);
        assert_eq!(reflowed.pages[0].lines.len(), 1);
    }
}
