//! Heuristic callout boxes and section dividers.
//!
//! A single forward pass over the lines of an HTML document. Checks run in a
//! fixed order (blockquote, example, warning) so a paragraph that reads as both
//! an example and a warning always becomes the example.
//!
//! The only per-section state is the number of `<h2>` headings seen. No rule
//! depends on a paragraph's position within its section, so paragraphs are
//! not counted.

use once_cell::sync::Lazy;
use regex::Regex;

/// Classes that mark a document as already decorated.
const PREFORMATTED_MARKERS: [&str; 3] = ["callout-box", "key-takeaways", "section-divider"];

pub(crate) const SECTION_DIVIDER: &str = r#"<hr class="section-divider" />"#;

const INSIGHT_MIN_CHARS: usize = 30;
const EXAMPLE_MIN_CHARS: usize = 80;
const EXAMPLE_MIN_SECTIONS: usize = 3;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern must compile"));

static CURRENCY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[$€£]\s?\d|\b\d[\d,.]*\s?(?:usd|usdt|usdc|eur|gbp|dollars?)\b")
        .expect("currency pattern must compile")
});
static ASSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:BTC|ETH|SOL|XRP|ADA|DOGE|BNB|SPY|QQQ|Bitcoin|Ethereum|Solana|Tesla|Apple|S&P 500)\b",
    )
    .expect("asset pattern must compile")
});
static MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\b",
    )
    .expect("month pattern must compile")
});
static EXAMPLE_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bfor example\b|\bfor instance\b|\bimagine\b|\bscenario\b|\blet[’']s say\b")
        .expect("example phrase pattern must compile")
});
static CAUTION_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:caution|warning|risk(?:s|y)?|mistakes?|avoid|do not|don[’']t)\b")
        .expect("caution pattern must compile")
});
static LOSS_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:loss(?:es)?|lose|losing|stop-loss|stop loss|wipes? out|wiped out|wipe-out|liquidat\w*|blow up)\b",
    )
    .expect("loss pattern must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CalloutKind {
    Insight,
    Example,
    Warning,
}

impl CalloutKind {
    fn class(self) -> &'static str {
        match self {
            CalloutKind::Insight => "callout-insight",
            CalloutKind::Example => "callout-example",
            CalloutKind::Warning => "callout-warning",
        }
    }

    fn title(self) -> &'static str {
        match self {
            CalloutKind::Insight => "💡 Key Insight",
            CalloutKind::Example => "📊 Real-World Example",
            CalloutKind::Warning => "⚠️ Warning",
        }
    }
}

pub(crate) fn callout(kind: CalloutKind, body_html: &str) -> String {
    format!(
        r#"<div class="callout-box {class}"><div class="callout-title">{title}</div><p>{body}</p></div>"#,
        class = kind.class(),
        title = kind.title(),
        body = body_html.trim(),
    )
}

pub(crate) fn is_preformatted(html: &str) -> bool {
    PREFORMATTED_MARKERS
        .iter()
        .any(|marker| html.contains(marker))
}

#[derive(Default)]
struct PassState {
    sections_seen: usize,
    insight_inserted: bool,
    example_inserted: bool,
}

enum Line<'a> {
    SectionHeading,
    Blockquote(&'a str),
    Paragraph(&'a str),
    Other,
}

pub(crate) fn decorate(html: &str) -> String {
    let mut state = PassState::default();
    let mut out: Vec<String> = Vec::new();

    for line in html.lines() {
        match classify(line.trim()) {
            Line::SectionHeading => {
                state.sections_seen += 1;
                if state.sections_seen > 1 && state.sections_seen % 3 == 0 {
                    out.push(SECTION_DIVIDER.to_string());
                }
            }
            Line::Blockquote(inner) if !state.insight_inserted => {
                let inner = unwrap_paragraph(inner);
                if plain_text(inner).chars().count() > INSIGHT_MIN_CHARS {
                    out.push(callout(CalloutKind::Insight, inner));
                    state.insight_inserted = true;
                    continue;
                }
            }
            Line::Paragraph(inner) => {
                let text = plain_text(inner);
                if !state.example_inserted
                    && state.sections_seen >= EXAMPLE_MIN_SECTIONS
                    && is_concrete_example(&text)
                {
                    out.push(callout(CalloutKind::Example, inner));
                    state.example_inserted = true;
                    continue;
                }
                if is_risk_warning(&text) {
                    out.push(callout(CalloutKind::Warning, inner));
                    continue;
                }
            }
            Line::Blockquote(_) | Line::Other => {}
        }
        out.push(line.to_string());
    }

    out.join("\n")
}

fn classify(line: &str) -> Line<'_> {
    if line.starts_with("<h2>") || line.starts_with("<h2 ") {
        return Line::SectionHeading;
    }
    if let Some(inner) = enclosed(line, "blockquote") {
        return Line::Blockquote(inner);
    }
    if let Some(quote) = line.strip_prefix("&gt;").or_else(|| line.strip_prefix('>')) {
        return Line::Blockquote(quote.trim());
    }
    if let Some(inner) = enclosed(line, "p") {
        return Line::Paragraph(inner);
    }
    Line::Other
}

/// Inner HTML of a line that is exactly one `<tag ...>...</tag>` element.
fn enclosed<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let rest = line.strip_prefix('<')?.strip_prefix(tag)?;
    let rest = match rest.chars().next()? {
        '>' => &rest[1..],
        ' ' => &rest[rest.find('>')? + 1..],
        _ => return None,
    };
    let closing = format!("</{tag}>");
    let inner = rest.strip_suffix(closing.as_str())?;
    // `<p>a</p><p>b</p>` is two elements, not one.
    (!inner.contains(closing.as_str())).then_some(inner)
}

fn unwrap_paragraph(inner: &str) -> &str {
    enclosed(inner.trim(), "p").unwrap_or(inner)
}

pub(crate) fn plain_text(html: &str) -> String {
    TAG.replace_all(html, "").trim().to_string()
}

pub(crate) fn is_concrete_example(text: &str) -> bool {
    text.chars().count() > EXAMPLE_MIN_CHARS
        && (CURRENCY.is_match(text)
            || ASSET.is_match(text)
            || MONTH.is_match(text)
            || EXAMPLE_PHRASE.is_match(text))
}

pub(crate) fn is_risk_warning(text: &str) -> bool {
    CAUTION_TERM.is_match(text) && LOSS_TERM.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preformatted_markers_are_detected() {
        assert!(is_preformatted(r#"<div class="callout-box callout-warning">"#));
        assert!(is_preformatted(r#"<div class="key-takeaways">"#));
        assert!(!is_preformatted("<p>plain</p>"));
    }

    #[test]
    fn enclosed_rejects_sibling_elements() {
        assert_eq!(enclosed("<p>one</p>", "p"), Some("one"));
        assert_eq!(enclosed(r#"<p class="lead">one</p>"#, "p"), Some("one"));
        assert_eq!(enclosed("<p>a</p><p>b</p>", "p"), None);
        assert_eq!(enclosed("<pre>code</pre>", "p"), None);
    }

    #[test]
    fn short_blockquotes_stay_in_flow() {
        let html = "<h2>A</h2>\n<blockquote>Too short to matter.</blockquote>";
        assert_eq!(decorate(html), html);
    }

    #[test]
    fn only_first_long_blockquote_becomes_insight() {
        let html = "<blockquote>This opening quote is long enough to be promoted.</blockquote>\n\
                    <blockquote>This second quote is also long enough but stays put.</blockquote>";
        let out = decorate(html);
        assert_eq!(out.matches("Key Insight").count(), 1);
        assert!(out.contains("<blockquote>This second quote"));
    }

    #[test]
    fn examples_need_three_sections_first() {
        let para = "<p>For example, a trader with a $5,000 account who risks one percent loses at most fifty dollars.</p>";
        let early = format!("<h2>A</h2>\n<h2>B</h2>\n{para}");
        assert!(!decorate(&early).contains("Real-World Example"));

        let late = format!("<h2>A</h2>\n<h2>B</h2>\n<h2>C</h2>\n{para}\n{para}");
        let out = decorate(&late);
        assert_eq!(out.matches("Real-World Example").count(), 1);
    }

    #[test]
    fn example_wins_over_warning_on_the_same_paragraph() {
        let para = "<p>Imagine you avoid a stop-loss on BTC in March and the position slides another twenty percent overnight.</p>";
        let html = format!("<h2>A</h2>\n<h2>B</h2>\n<h2>C</h2>\n{para}");
        let out = decorate(&html);
        assert!(out.contains("Real-World Example"));
        assert!(!out.contains("⚠️ Warning"));
    }

    #[test]
    fn paragraph_position_within_section_does_not_matter() {
        let warning = "<p>Avoid moving your stop loss further away.</p>";
        let first = decorate(&format!("<h2>A</h2>\n{warning}"));
        let later = decorate(&format!(
            "<h2>A</h2>\n<p>one</p>\n<p>two</p>\n<p>three</p>\n{warning}"
        ));
        assert_eq!(first.matches("callout-warning").count(), 1);
        assert_eq!(later.matches("callout-warning").count(), 1);
    }

    #[test]
    fn warning_requires_both_terms() {
        assert!(is_risk_warning("Avoid averaging down into a loss."));
        assert!(!is_risk_warning("Avoid trading on holidays."));
        assert!(!is_risk_warning("A loss is part of trading."));
    }

    #[test]
    fn dividers_land_before_every_third_section() {
        let html = (1..=7)
            .map(|n| format!("<h2>S{n}</h2>"))
            .collect::<Vec<_>>()
            .join("\n");
        let out = decorate(&html);
        assert_eq!(out.matches(SECTION_DIVIDER).count(), 2);
        assert!(out.contains(&format!("{SECTION_DIVIDER}\n<h2>S3</h2>")));
        assert!(out.contains(&format!("{SECTION_DIVIDER}\n<h2>S6</h2>")));
    }
}
