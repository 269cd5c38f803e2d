//! Groups a closing "Key Takeaways" style section into one container.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const KEY_TAKEAWAYS_MARKER: &str = "🎯";

static TAKEAWAY_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)<h([23])((?:\s[^>]*)?)>\s*((?:<[a-z]+[^>]*>\s*)*(?:key\s+takeaways?|summary|conclusions?|final\s+thoughts?)\b[^<]*(?:</[a-z]+>\s*)*)</h[23]>",
    )
    .expect("takeaway heading pattern must compile")
});

/// Wraps the first matching heading that is followed by an optional paragraph
/// and a list. Headings without a list after them are left alone.
pub(crate) fn wrap_key_takeaways(html: &str) -> String {
    for caps in TAKEAWAY_HEADING.captures_iter(html) {
        let (Some(heading), Some(level), Some(text)) = (caps.get(0), caps.get(1), caps.get(3))
        else {
            continue;
        };
        let attrs = caps.get(2).map_or("", |m| m.as_str());

        let Some(len) = cluster_len(&html[heading.end()..]) else {
            continue;
        };
        let end = heading.end() + len;
        let level = level.as_str();

        return format!(
            "{before}<div class=\"key-takeaways\">\n<h{level}{attrs}>{KEY_TAKEAWAYS_MARKER} {text}</h{level}>\n{body}\n</div>{after}",
            before = &html[..heading.start()],
            text = text.as_str().trim(),
            body = html[heading.end()..end].trim(),
            after = &html[end..],
        );
    }

    html.to_string()
}

/// Byte length of `[ws] [<p>..</p> ws] <ul|ol>..</ul|ol>` at the start of `rest`.
fn cluster_len(rest: &str) -> Option<usize> {
    let mut offset = whitespace_len(rest);

    if opens(&rest[offset..], "p") {
        let close = rest[offset..].find("</p>")?;
        offset += close + "</p>".len();
        offset += whitespace_len(&rest[offset..]);
    }

    let list = &rest[offset..];
    let closing = if opens(list, "ul") {
        "</ul>"
    } else if opens(list, "ol") {
        "</ol>"
    } else {
        return None;
    };
    let close = list.find(closing)?;
    Some(offset + close + closing.len())
}

fn opens(text: &str, tag: &str) -> bool {
    text.strip_prefix('<')
        .and_then(|rest| rest.strip_prefix(tag))
        .is_some_and(|rest| rest.starts_with('>') || rest.starts_with(' '))
}

fn whitespace_len(text: &str) -> usize {
    text.len() - text.trim_start().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_heading_paragraph_and_list() {
        let html = "<p>body</p>\n<h2>Key Takeaways</h2>\n<p>Lead.</p>\n<ul>\n<li>a</li>\n</ul>\n<p>tail</p>";
        assert_eq!(
            wrap_key_takeaways(html),
            "<p>body</p>\n<div class=\"key-takeaways\">\n<h2>🎯 Key Takeaways</h2>\n<p>Lead.</p>\n<ul>\n<li>a</li>\n</ul>\n</div>\n<p>tail</p>"
        );
    }

    #[test]
    fn paragraph_is_optional() {
        let html = "<h3 id=\"s\">Final Thoughts</h3>\n<ol><li>x</li></ol>";
        assert_eq!(
            wrap_key_takeaways(html),
            "<div class=\"key-takeaways\">\n<h3 id=\"s\">🎯 Final Thoughts</h3>\n<ol><li>x</li></ol>\n</div>"
        );
    }

    #[test]
    fn keyword_inside_inline_markup_is_recognised() {
        let html = "<h2><strong>Key Takeaways</strong></h2>\n<ul>\n<li>a</li>\n</ul>";
        assert_eq!(
            wrap_key_takeaways(html),
            "<div class=\"key-takeaways\">\n<h2>🎯 <strong>Key Takeaways</strong></h2>\n<ul>\n<li>a</li>\n</ul>\n</div>"
        );
    }

    #[test]
    fn heading_without_list_is_untouched() {
        let html = "<h2>Conclusion</h2>\n<p>Only prose.</p>\n<p>More prose.</p>";
        assert_eq!(wrap_key_takeaways(html), html);
    }

    #[test]
    fn skips_to_first_heading_with_a_list() {
        let html = "<h2>Summary</h2>\n<p>a</p>\n<h2>Conclusion</h2>\n<ul><li>b</li></ul>";
        let out = wrap_key_takeaways(html);
        assert!(out.starts_with("<h2>Summary</h2>"));
        assert!(out.contains("<h2>🎯 Conclusion</h2>"));
    }

    #[test]
    fn unrelated_headings_do_not_match() {
        let html = "<h2>Summer trading</h2>\n<ul><li>x</li></ul>";
        assert_eq!(wrap_key_takeaways(html), html);
    }
}
