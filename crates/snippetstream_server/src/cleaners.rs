//! Cosmetic cleanup of shaped artifacts.

use regex::Regex;
use snippetstream_core::{PlatformArtifact, SLIDE_MIN_LINES};
use snippetstream_interface::ArtifactCleaner;
use std::sync::LazyLock;

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*|__|\*").expect("Valid emphasis regex"));
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]+").expect("Valid heading regex"));

/// Strips markdown emphasis and heading markers.
///
/// Hashtags survive: a heading marker needs whitespace after the hashes.
/// Item counts never change.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownCleaner;

impl MarkdownCleaner {
    /// Clean one block of text.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippetstream_server::MarkdownCleaner;
    ///
    /// assert_eq!(MarkdownCleaner::clean_text("## **Day 12**  "), "Day 12");
    /// assert_eq!(MarkdownCleaner::clean_text("Ship it #BuildInPublic"), "Ship it #BuildInPublic");
    /// ```
    pub fn clean_text(text: &str) -> String {
        let without_headings = HEADING.replace_all(text, "");
        EMPHASIS.replace_all(&without_headings, "").trim().to_string()
    }

    fn clean_slide(slide: &str) -> String {
        let lines: Vec<String> = slide
            .lines()
            .map(Self::clean_text)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() < SLIDE_MIN_LINES {
            return slide.trim().to_string();
        }
        lines.join("\n")
    }
}

impl ArtifactCleaner for MarkdownCleaner {
    fn clean(&self, artifact: PlatformArtifact) -> PlatformArtifact {
        match artifact {
            PlatformArtifact::Thread(items) => PlatformArtifact::Thread(
                items
                    .iter()
                    .map(|item| {
                        let cleaned = Self::clean_text(item);
                        if cleaned.is_empty() { item.clone() } else { cleaned }
                    })
                    .collect(),
            ),
            PlatformArtifact::Post(body) => PlatformArtifact::Post(
                body.lines()
                    .map(|line| HEADING.replace_all(line, "").into_owned())
                    .map(|line| EMPHASIS.replace_all(&line, "").trim_end().to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
                    .trim()
                    .to_string(),
            ),
            PlatformArtifact::Carousel(slides) => {
                PlatformArtifact::Carousel(slides.iter().map(|s| Self::clean_slide(s)).collect())
            }
        }
    }
}
