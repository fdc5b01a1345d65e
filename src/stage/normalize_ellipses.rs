use crate::stage::{Stage, StageError};
use memchr::memchr;
use std::borrow::Cow;

/// Normalize ellipses and the fraction slash.
///
/// The horizontal ellipsis becomes the three-character literal `...`, then
/// any run of four-plus periods (including runs the substitution just
/// produced) collapses to exactly `...`. Runs of two or three periods are
/// left alone: collapsing them would change already-canonical text and
/// break idempotence. The fraction slash U+2044 becomes `/`.
pub struct NormalizeEllipses;

const ELLIPSIS: char = '\u{2026}';
const FRACTION_SLASH: char = '\u{2044}';

impl Stage for NormalizeEllipses {
    fn name(&self) -> &'static str {
        "normalize_ellipses"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        if text.is_ascii() {
            // Only a run of four-plus periods can change pure ASCII text.
            let bytes = text.as_bytes();
            let mut rest = match memchr(b'.', bytes) {
                Some(i) => &bytes[i..],
                None => return Ok(false),
            };
            loop {
                let run = rest.iter().take_while(|&&b| b == b'.').count();
                if run >= 4 {
                    return Ok(true);
                }
                rest = &rest[run..];
                match memchr(b'.', rest) {
                    Some(i) => rest = &rest[i..],
                    None => return Ok(false),
                }
            }
        }

        let mut dots = 0usize;
        for c in text.chars() {
            match c {
                ELLIPSIS | FRACTION_SLASH => return Ok(true),
                '.' => {
                    dots += 1;
                    if dots >= 4 {
                        return Ok(true);
                    }
                }
                _ => dots = 0,
            }
        }
        Ok(false)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let mut out = String::with_capacity(text.len() + 2);
        let mut dots = 0usize;

        let flush = |out: &mut String, dots: &mut usize| {
            if *dots >= 4 {
                out.push_str("...");
            } else {
                for _ in 0..*dots {
                    out.push('.');
                }
            }
            *dots = 0;
        };

        for c in text.chars() {
            match c {
                '.' => dots += 1,
                // An ellipsis joins any adjacent period run as three periods.
                ELLIPSIS => dots += 3,
                FRACTION_SLASH => {
                    flush(&mut out, &mut dots);
                    out.push('/');
                }
                _ => {
                    flush(&mut out, &mut dots);
                    out.push(c);
                }
            }
        }
        flush(&mut out, &mut dots);
        Ok(Cow::Owned(out))
    }
}
