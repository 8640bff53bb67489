//! Whitespace Control
//!
//! Applies `{{~` / `~}}` strip directives to the text nodes next to them.
//! Only runs when [`WhitespaceStripping::Enabled`] is configured.
//!
//! [`WhitespaceStripping::Enabled`]: crate::config::WhitespaceStripping::Enabled

use crate::ast::{Node, StripFlags};
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_WS_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").unwrap());

static TRAILING_WS_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+$").unwrap());

pub fn strip_leading(chars: &str) -> String {
    LEADING_WS_REGEXP.replace(chars, "").into_owned()
}

pub fn strip_trailing(chars: &str) -> String {
    TRAILING_WS_REGEXP.replace(chars, "").into_owned()
}

/// Trim the text node at `index` according to its neighbours' directives.
///
/// The left edge is owned by the previous sibling's `RIGHT` flag, or by the
/// program's own `LEFT` flag for the first entry. The right edge mirrors
/// that. Non-text entries are left alone.
pub(crate) fn apply_strip_directives(body: &mut [Node], index: usize, program_strip: StripFlags) {
    let trim_left = match index.checked_sub(1) {
        Some(prev) => body[prev].outer_strip().contains(StripFlags::RIGHT),
        None => program_strip.contains(StripFlags::LEFT),
    };
    let trim_right = match body.get(index + 1) {
        Some(next) => next.outer_strip().contains(StripFlags::LEFT),
        None => program_strip.contains(StripFlags::RIGHT),
    };

    if let Some(text) = body.get_mut(index).and_then(Node::as_text_mut) {
        if trim_left {
            text.chars = strip_leading(&text.chars);
        }
        if trim_right {
            text.chars = strip_trailing(&text.chars);
        }
    }
}
