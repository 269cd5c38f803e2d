//! Bounded Markdown-to-HTML conversion for hand-written articles.
//!
//! Only the constructs the catalog actually uses are handled. Ordered lists
//! are emitted as `<ul>`; existing content is rendered that way and must keep
//! rendering that way.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKDOWN_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#{1,3} ").expect("heading pattern must compile"));
static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+(.*)$").expect("ordered item pattern must compile"));
static IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)\s]+)\)").expect("image pattern must compile")
});
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("link pattern must compile"));
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+?)\*\*").expect("bold pattern must compile"));
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\s][^*]*?)\*").expect("italic pattern must compile"));

/// A document is Markdown when any line opens with one to three `#` and a space.
pub(crate) fn looks_like_markdown(text: &str) -> bool {
    MARKDOWN_HEADING.is_match(text)
}

pub(crate) fn to_html(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_list = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(item) = list_item(trimmed) {
            if !in_list {
                out.push("<ul>".to_string());
                in_list = true;
            }
            out.push(format!("<li>{}</li>", inline(item)));
            continue;
        }

        if in_list {
            out.push("</ul>".to_string());
            in_list = false;
        }

        if let Some(text) = trimmed.strip_prefix("### ") {
            out.push(format!("<h3>{}</h3>", inline(text.trim())));
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            out.push(format!("<h2>{}</h2>", inline(text.trim())));
        } else if trimmed.starts_with("# ") {
            // The page renders the title itself.
            continue;
        } else if let Some(quote) = trimmed.strip_prefix('>') {
            out.push(format!("<blockquote>{}</blockquote>", inline(quote.trim())));
        } else if trimmed.starts_with('<') {
            out.push(trimmed.to_string());
        } else {
            out.push(format!("<p>{}</p>", inline(trimmed)));
        }
    }

    if in_list {
        out.push("</ul>".to_string());
    }

    out.join("\n")
}

fn list_item(line: &str) -> Option<&str> {
    if let Some(item) = line.strip_prefix("- ") {
        return Some(item.trim());
    }
    ORDERED_ITEM
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|item| item.as_str().trim())
}

fn inline(text: &str) -> String {
    let text = IMAGE.replace_all(text, r#"<img src="$2" alt="$1" />"#);
    let text = LINK.replace_all(&text, r#"<a href="$2">$1</a>"#);
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    ITALIC.replace_all(&text, "<em>$1</em>").into_owned()
}
