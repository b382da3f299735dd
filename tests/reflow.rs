use page_reflow::layout::paginate;
use page_reflow::{get_layout, process, profile, ContentSource, FontSize, StyledLine, DEFAULT_FONT_SIZE};

fn flat(text: &str) -> ContentSource {
    ContentSource::Flat(vec![text.to_string()])
}

#[test]
fn every_reflow_yields_at_least_one_page_of_at_least_one_line() {
    let bulk = lipsum::lipsum(300);
    for body in ["", "\n", "a", bulk.as_str()] {
        let reflowed = process(&flat(body), "classic");
        assert!(!reflowed.pages.is_empty());
        for page in &reflowed.pages {
            assert!(page.line_count() >= 1);
        }
    }
}

#[test]
fn budgets_hold_across_contexts_for_bulk_text() {
    let body = lipsum::lipsum(500);
    for context in ["classic", "fullscreen", "caption", "banner", "compact"] {
        let reflowed = process(&flat(&body), context);
        let profile = reflowed.profile;
        for page in &reflowed.pages {
            assert!(page.line_count() <= profile.max_lines_per_page);
            for line in &page.lines {
                assert!(line.text.chars().count() <= profile.max_chars_per_line);
            }
        }
    }
}

#[test]
fn forced_splits_chunk_at_exactly_the_budget() {
    let body = "x".repeat(100);
    let reflowed = process(&flat(&body), "compact");
    let budget = reflowed.profile.max_chars_per_line;

    let lines: Vec<&StyledLine> = reflowed.pages.iter().flat_map(|p| &p.lines).collect();
    for line in &lines[..lines.len() - 1] {
        assert_eq!(line.text.chars().count(), budget);
    }
    assert!(lines.last().unwrap().text.chars().count() <= budget);
}

#[test]
fn blank_lines_survive_under_a_preserving_profile() {
    let reflowed = process(&flat("a\n\nb"), "classic");
    let texts: Vec<&str> = reflowed.pages[0]
        .lines
        .iter()
        .map(|line| line.text.as_str())
        .collect();
    assert_eq!(texts, ["a", "", "b"]);
}

#[test]
fn pagination_is_idempotent_under_a_stable_profile() {
    let profile = get_layout("classic");
    let first = paginate(&lipsum::lipsum(400), profile);

    let rejoined = first
        .iter()
        .map(|page| page.join("\n"))
        .collect::<Vec<_>>()
        .join("\n");
    let second = paginate(&rejoined, profile);

    assert_eq!(first, second);
}

#[test]
fn reflowing_reflowed_output_preserves_line_texts() {
    let original = process(&flat(&lipsum::lipsum(200)), "compact");
    let blocks: Vec<String> = original.pages.iter().map(|page| page.text()).collect();
    let again = process(&ContentSource::Flat(blocks), "compact");

    let texts = |pages: &[page_reflow::Page]| -> Vec<String> {
        pages
            .iter()
            .flat_map(|page| page.lines.iter().map(|line| line.text.clone()))
            .collect()
    };
    assert_eq!(texts(&original.pages), texts(&again.pages));
}

#[test]
fn structured_content_resamples_its_size_envelope() {
    // four short lines whose sizes span 16..28, reflowed onto a single page
    let original = vec![vec![
        StyledLine::new("alpha", FontSize(16.0)),
        StyledLine::new("beta", FontSize(20.0)),
        StyledLine::new("gamma", FontSize(24.0)),
        StyledLine::new("delta", FontSize(28.0)),
    ]];
    let reflowed = process(&ContentSource::Structured(original), "classic");

    let sizes: Vec<f32> = reflowed.pages[0].lines.iter().map(|l| l.size.0).collect();
    let expected = [28.0, 25.6, 23.2, 20.8];
    assert_eq!(sizes.len(), expected.len());
    for (size, expected) in sizes.iter().zip(expected) {
        assert!((size - expected).abs() < 1e-4, "expected {expected}, got {size}");
    }
}

#[test]
fn structured_content_reflows_free_of_its_old_boundaries() {
    // one line per original page; the new profile packs them onto one page
    let original: Vec<Vec<StyledLine>> = (0..5)
        .map(|i| vec![StyledLine::new(format!("line {i}"), FontSize(20.0))])
        .collect();
    let reflowed = process(&ContentSource::Structured(original), "classic");
    assert_eq!(reflowed.pages.len(), 1);
    assert_eq!(reflowed.pages[0].line_count(), 5);
}

#[test]
fn flat_content_gets_the_default_size_everywhere() {
    let reflowed = process(&flat("one\ntwo"), "classic");
    for line in &reflowed.pages[0].lines {
        assert_eq!(line.size, DEFAULT_FONT_SIZE);
    }
}

#[test]
fn unknown_contexts_reflow_under_the_default_profile() {
    let reflowed = process(&flat("hello"), "no-such-theme");
    assert_eq!(reflowed.profile, &profile::DEFAULT);
    assert_eq!(reflowed.pages[0].lines[0].text, "hello");
}

#[test]
fn flat_blocks_join_on_newlines() {
    let content = ContentSource::Flat(vec!["first block".into(), "second block".into()]);
    let reflowed = process(&content, "classic");
    let texts: Vec<&str> = reflowed.pages[0]
        .lines
        .iter()
        .map(|line| line.text.as_str())
        .collect();
    assert_eq!(texts, ["first block", "second block"]);
}
