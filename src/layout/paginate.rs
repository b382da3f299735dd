use crate::layout::wrap_line;
use crate::profile::LayoutProfile;

/// Reflow a text body into pages of display lines under a profile's budgets.
///
/// Newlines are hard line boundaries and empty raw lines are kept (split
/// without omitting). A raw line within the character budget lands on the
/// current page unchanged; a longer one is wrapped via [`wrap_line`]. A page
/// is closed the moment the line budget is reached, before the next raw
/// line lands and between the fragments of one wrapped raw line, so no
/// fragment is ever dropped. Blank raw lines become blank display lines when
/// the profile asks for them and are skipped otherwise.
///
/// The result always holds at least one page with at least one line: an
/// entirely empty body yields one page containing a single empty line.
pub fn paginate(content: &str, profile: &LayoutProfile) -> Vec<Vec<String>> {
    let mut pages: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for raw in content.split('\n') {
        close_if_full(&mut pages, &mut current, profile.max_lines_per_page);

        if raw.is_empty() {
            if profile.preserve_empty_lines {
                current.push(String::new());
            }
        } else if raw.chars().count() <= profile.max_chars_per_line {
            current.push(raw.to_string());
        } else {
            for fragment in wrap_line(raw, profile.max_chars_per_line) {
                close_if_full(&mut pages, &mut current, profile.max_lines_per_page);
                current.push(fragment);
            }
        }
    }

    if !current.is_empty() {
        pages.push(current);
    }
    if pages.is_empty() {
        pages.push(vec![String::new()]);
    }
    pages
}

/// A full page is closed before the next line lands, never after.
fn close_if_full(pages: &mut Vec<Vec<String>>, current: &mut Vec<String>, max_lines: usize) {
    if current.len() >= max_lines {
        pages.push(std::mem::take(current));
    }
}
