//! HTML to plain text.

use regex::Regex;
use std::sync::LazyLock;

/// Elements whose text never counts as content.
pub const NOISE_ELEMENTS: [&str; 6] = ["script", "style", "nav", "footer", "header", "aside"];

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Valid tag regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Valid whitespace regex"));

/// Reduce an HTML page to its readable text, capped at `max_chars` characters.
///
/// With the `html` feature the page is parsed, noise elements are skipped and
/// the first `article`, `main` or `div.content` is preferred over the whole
/// document. Without it, [`strip_tags`] is used.
pub fn reduce_html(html: &str, max_chars: usize) -> String {
    #[cfg(feature = "html")]
    let text = structured::main_text(html);
    #[cfg(not(feature = "html"))]
    let text = strip_tags(html);

    truncate_chars(&text, max_chars)
}

/// Replace every tag with a space and collapse whitespace.
///
/// ```
/// use snippetstream_fetch::strip_tags;
///
/// assert_eq!(strip_tags("<p>Hello <b>world</b></p>\n\n"), "Hello world");
/// ```
pub fn strip_tags(html: &str) -> String {
    let without_tags = TAG.replace_all(html, " ");
    collapse_whitespace(&without_tags)
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// First `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(feature = "html")]
mod structured {
    use super::{NOISE_ELEMENTS, collapse_whitespace};
    use scraper::{ElementRef, Html, Node, Selector};

    const MAIN_SELECTORS: [&str; 3] = ["article", "main", "div.content"];

    pub(super) fn main_text(html: &str) -> String {
        let document = Html::parse_document(html);

        let main = MAIN_SELECTORS
            .iter()
            .filter_map(|css| Selector::parse(css).ok())
            .find_map(|selector| {
                document
                    .select(&selector)
                    .find(|element| !element.ancestors().any(|a| is_noise(a.value())))
            });

        match main {
            Some(element) => visible_text(element),
            None => visible_text(document.root_element()),
        }
    }

    fn is_noise(node: &Node) -> bool {
        node.as_element()
            .is_some_and(|element| NOISE_ELEMENTS.contains(&element.name()))
    }

    fn visible_text(root: ElementRef<'_>) -> String {
        if NOISE_ELEMENTS.contains(&root.value().name()) {
            return String::new();
        }
        let root_id = (*root).id();
        let mut parts = Vec::new();

        for node in root.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != root_id)
                .any(|ancestor| is_noise(ancestor.value()));
            if !hidden {
                parts.push(text.trim());
            }
        }

        collapse_whitespace(&parts.join(" "))
    }
}
