//! Coercing free model text into fixed-size artifacts.

use snippetstream_core::{CAROUSEL_LEN, SLIDE_MIN_LINES, THREAD_LEN};

/// Filler block appended when a carousel has too few slides.
pub const CAROUSEL_FILLER: &str = "🚀 KEEP BUILDING\nConsistency is key";

/// Filler line for thread position `n` (1-based).
pub fn thread_filler(n: usize) -> String {
    format!(
        "{}/{} 🚀 Building in public is a journey. Keep shipping. #BuildInPublic",
        n, THREAD_LEN
    )
}

/// Split into non-blank trimmed lines, then pad or truncate to [`THREAD_LEN`].
///
/// # Examples
///
/// ```
/// use snippetstream_generators::shape_thread;
///
/// let thread = shape_thread("1/10 Shipped\n\n2/10 Broke prod\n");
/// assert_eq!(thread.len(), 10);
/// assert_eq!(thread[1], "2/10 Broke prod");
/// assert!(thread[2].starts_with("3/10 "));
/// ```
pub fn shape_thread(raw: &str) -> Vec<String> {
    let mut items: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(THREAD_LEN)
        .map(str::to_string)
        .collect();

    while items.len() < THREAD_LEN {
        items.push(thread_filler(items.len() + 1));
    }
    items
}

/// Split on blank lines, keep blocks with at least [`SLIDE_MIN_LINES`]
/// non-empty lines, then pad or truncate to [`CAROUSEL_LEN`].
///
/// # Examples
///
/// ```
/// use snippetstream_generators::{CAROUSEL_FILLER, shape_carousel};
///
/// let slides = shape_carousel("🔥 DAY 12\nShipped login\n\nlonely line\n\n✅ DONE\nTests green");
/// assert_eq!(slides.len(), 8);
/// assert_eq!(slides[1], "✅ DONE\nTests green");
/// assert_eq!(slides[2], CAROUSEL_FILLER);
/// ```
pub fn shape_carousel(raw: &str) -> Vec<String> {
    let mut slides = Vec::with_capacity(CAROUSEL_LEN);
    let mut block: Vec<&str> = Vec::new();

    for line in raw.lines().map(str::trim).chain(std::iter::once("")) {
        if !line.is_empty() {
            block.push(line);
            continue;
        }
        if block.len() >= SLIDE_MIN_LINES && slides.len() < CAROUSEL_LEN {
            slides.push(block.join("\n"));
        }
        block.clear();
    }

    while slides.len() < CAROUSEL_LEN {
        slides.push(CAROUSEL_FILLER.to_string());
    }
    slides
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_truncates_extra_lines() {
        let raw: String = (1..=14).map(|n| format!("{}/14 post\n", n)).collect();
        let thread = shape_thread(&raw);
        assert_eq!(thread.len(), THREAD_LEN);
        assert_eq!(thread[9], "10/14 post");
    }

    #[test]
    fn thread_filler_counts_from_current_length() {
        let thread = shape_thread("");
        assert_eq!(thread[0], thread_filler(1));
        assert_eq!(thread[9], thread_filler(10));
    }

    #[test]
    fn carousel_handles_crlf_and_extra_blank_lines() {
        let raw = "A TITLE\r\nline two\r\n\r\n\r\n\r\nB TITLE\r\nline two\r\n";
        let slides = shape_carousel(raw);
        assert_eq!(slides[0], "A TITLE\nline two");
        assert_eq!(slides[1], "B TITLE\nline two");
        assert_eq!(slides[2], CAROUSEL_FILLER);
    }

    #[test]
    fn carousel_truncates_extra_slides() {
        let raw: String = (1..=11)
            .map(|n| format!("SLIDE {}\ndescription\n\n", n))
            .collect();
        let slides = shape_carousel(&raw);
        assert_eq!(slides.len(), CAROUSEL_LEN);
        assert_eq!(slides[7], "SLIDE 8\ndescription");
    }

    #[test]
    fn filler_block_is_a_valid_slide() {
        assert!(CAROUSEL_FILLER.lines().count() >= SLIDE_MIN_LINES);
    }
}
