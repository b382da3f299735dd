use page_reflow::{process, ContentSource, FontSize, StyledLine};

/// Reflows the same authored story under every known presentation context,
/// showing how the page count and sizing shift with the theme.
fn main() {
    env_logger::init();

    let story: Vec<Vec<StyledLine>> = vec![vec![
        StyledLine::new("The Lighthouse", FontSize(28.0)),
        StyledLine::new("", FontSize(16.0)),
        StyledLine::new(lipsum::lipsum(120), FontSize(18.0)),
    ]];
    let content = ContentSource::Structured(story);

    for context in ["classic", "fullscreen", "caption", "banner", "compact"] {
        let reflowed = process(&content, context);
        let lines: usize = reflowed.pages.iter().map(|p| p.line_count()).sum();
        println!(
            "{context:>10}: {} page(s), {} line(s), {}x{} chars",
            reflowed.pages.len(),
            lines,
            reflowed.profile.max_lines_per_page,
            reflowed.profile.max_chars_per_line,
        );
    }
}
