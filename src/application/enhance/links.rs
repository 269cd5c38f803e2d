//! Rewrites links that still point at the retired content path.

use std::borrow::Cow;

use regex::Regex;

pub const DEFAULT_LEGACY_PATH_PREFIX: &str = "/blog/";
pub const DEFAULT_CURRENT_PATH_PREFIX: &str = "/learn/";
pub const DEFAULT_LEGACY_DOMAIN: &str = "tradewise.academy";

/// Compiled rewrite rule for one legacy prefix.
///
/// Matches the prefix right after `(`, `"` or `'`, either relative or on the
/// known absolute domain (with or without `www.`). Both forms are rewritten to
/// the relative current prefix.
#[derive(Debug, Clone)]
pub struct LinkRewrite {
    pattern: Regex,
    replacement: String,
}

impl LinkRewrite {
    pub fn new(
        legacy_prefix: &str,
        current_prefix: &str,
        legacy_domain: &str,
    ) -> Result<Self, regex::Error> {
        let pattern = format!(
            r#"(["'(])(?:https?://(?:www\.)?{domain})?{prefix}"#,
            domain = regex::escape(legacy_domain),
            prefix = regex::escape(legacy_prefix),
        );
        let replacement = format!("${{1}}{}", current_prefix.replace('$', "$$"));

        Ok(Self {
            pattern: Regex::new(&pattern)?,
            replacement,
        })
    }

    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

impl Default for LinkRewrite {
    fn default() -> Self {
        Self::new(
            DEFAULT_LEGACY_PATH_PREFIX,
            DEFAULT_CURRENT_PATH_PREFIX,
            DEFAULT_LEGACY_DOMAIN,
        )
        .expect("default link rewrite pattern must compile")
    }
}
