//! Markup escaping seam between the core and the host's rendering layer
//!
//! The core interpolates user-controlled text into highlight labels; whatever
//! rendering environment the host uses, that text must be neutralized before
//! it reaches the page. The host injects its own primitive here.

/// Escapes text for safe interpolation into the host's markup.
pub trait MarkupEscaper: Send + Sync {
    fn escape(&self, text: &str) -> String;
}

/// Default escaper for hosts that render HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl MarkupEscaper for HtmlEscaper {
    fn escape(&self, text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}
