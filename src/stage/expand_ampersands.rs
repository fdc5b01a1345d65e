use crate::{
    stage::{Stage, StageError},
    unicode::is_ampersand,
};
use memchr::memchr;
use std::borrow::Cow;

/// Expand every ampersand glyph (`&`, `﹠`, `＆`) to the literal `" and "`.
///
/// Each occurrence expands independently; no merging. The surrounding
/// spaces are intentional: the whitespace stage runs next and collapses any
/// doubling, and the word form keeps later punctuation rules from treating
/// `&` inconsistently.
pub struct ExpandAmpersands;

impl Stage for ExpandAmpersands {
    fn name(&self) -> &'static str {
        "expand_ampersands"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(memchr(b'&', text.as_bytes()).is_some());
        }
        Ok(text.chars().any(is_ampersand))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let mut out = String::with_capacity(text.len() + 8);
        for c in text.chars() {
            if is_ampersand(c) {
                out.push_str(" and ");
            } else {
                out.push(c);
            }
        }
        Ok(Cow::Owned(out))
    }
}
