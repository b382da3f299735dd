use page_reflow::{process, ContentSource};

fn main() {
    env_logger::init();

    let body = lipsum::lipsum(200);
    let reflowed = process(&ContentSource::Flat(vec![body]), "classic");
    let width = reflowed.profile.max_chars_per_line;

    for (i, page) in reflowed.pages.iter().enumerate() {
        println!("┌─ page {} {}┐", i + 1, "─".repeat(width.saturating_sub(8)));
        for line in &page.lines {
            println!("│ {:<width$} │ {:>5.1}", line.text, line.size.0);
        }
        println!("└{}┘", "─".repeat(width + 2));
    }
}
