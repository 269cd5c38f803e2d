use once_cell::sync::Lazy;
use regex::Regex;

static EMPTY_PARAGRAPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<p(?:\s[^>]*)?>\s*</p>\n?").expect("empty paragraph pattern must compile")
});
static SPLIT_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*</ul>\s*<ul>\s*").expect("split list pattern must compile"));

/// Drop empty paragraphs and rejoin lists that were split by the passes above.
pub(crate) fn tidy(html: &str) -> String {
    let html = EMPTY_PARAGRAPH.replace_all(html, "");
    SPLIT_LIST.replace_all(&html, "\n").trim().to_string()
}
