use crate::stage::{Stage, StageError};
use memchr::memchr2;
use std::borrow::Cow;

/// Rewrite nose-less ASCII emoticons to their canonical hyphenated form.
///
/// `:)` `:|` `:(` `:D` `:p` `:o` `;)` become `:-)` `:-|` `:-(` `:-D` `:-p`
/// `:-o` `;-)`. Matching is case-sensitive and left-to-right over
/// two-character windows; the replacement text never contains another
/// match, so the scan is equivalent to applying the table entries as
/// sequential substring replacements.
pub struct CanonicalizeEmoticons;

#[inline(always)]
fn emoticon_canonical(a: char, b: char) -> Option<&'static str> {
    match (a, b) {
        (':', ')') => Some(":-)"),
        (':', '|') => Some(":-|"),
        (':', '(') => Some(":-("),
        (':', 'D') => Some(":-D"),
        (':', 'p') => Some(":-p"),
        (':', 'o') => Some(":-o"),
        (';', ')') => Some(";-)"),
        _ => None,
    }
}

impl Stage for CanonicalizeEmoticons {
    fn name(&self) -> &'static str {
        "canonicalize_emoticons"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        // No colon or semicolon, no emoticon.
        if memchr2(b':', b';', text.as_bytes()).is_none() {
            return Ok(false);
        }
        let mut prev: Option<char> = None;
        for c in text.chars() {
            if let Some(p) = prev {
                if emoticon_canonical(p, c).is_some() {
                    return Ok(true);
                }
            }
            prev = Some(c);
        }
        Ok(false)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let mut out = String::with_capacity(text.len() + 4);
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if let Some(&next) = chars.peek() {
                if let Some(canonical) = emoticon_canonical(c, next) {
                    out.push_str(canonical);
                    chars.next();
                    continue;
                }
            }
            out.push(c);
        }
        Ok(Cow::Owned(out))
    }
}
