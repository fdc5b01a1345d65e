use crate::{
    stage::{Stage, StageError},
    unicode::is_punctuation,
};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Drop whitespace that touches punctuation.
///
/// For every maximal whitespace run, the single character before the run
/// and the single character after it decide the run's fate:
///
/// - the character before exists and is punctuation: drop the run
/// - else the character after exists and is punctuation: drop the run
/// - otherwise: emit exactly one ASCII space
///
/// A run at the start or end of the string is judged by the neighbor that
/// exists. "Punctuation" is the Unicode general category P, so `word , word`
/// becomes `word,word` while `a $ b` keeps its spaces (`$` is a symbol).
///
/// This is an explicit scan over run boundaries rather than a substring
/// substitution: the look-behind and look-ahead cross the run, and the
/// edge-of-string cases need a missing neighbor, not a sentinel character.
pub struct StripPunctuationSpacing;

#[inline]
fn keep_run(before: Option<char>, after: Option<char>) -> bool {
    if before.is_some_and(is_punctuation) {
        return false;
    }
    if after.is_some_and(is_punctuation) {
        return false;
    }
    true
}

impl Stage for StripPunctuationSpacing {
    fn name(&self) -> &'static str {
        "strip_punctuation_spacing"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        let mut before: Option<char> = None;
        let mut run_len = 0usize;
        let mut run_first = ' ';

        for c in text.chars() {
            if c.is_whitespace() {
                if run_len == 0 {
                    run_first = c;
                }
                run_len += 1;
                continue;
            }
            if run_len > 0 {
                if !keep_run(before, Some(c)) || run_len > 1 || run_first != ' ' {
                    return Ok(true);
                }
                run_len = 0;
            }
            before = Some(c);
        }
        if run_len > 0 && (!keep_run(before, None) || run_len > 1 || run_first != ' ') {
            return Ok(true);
        }
        Ok(false)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let s = text.as_ref();
        let mut out = String::with_capacity(s.len());
        let mut before: Option<char> = None;
        let mut pending: SmallVec<[char; 4]> = SmallVec::new();

        for c in s.chars() {
            if c.is_whitespace() {
                pending.push(c);
                continue;
            }
            if !pending.is_empty() {
                if keep_run(before, Some(c)) {
                    out.push(' ');
                }
                pending.clear();
            }
            out.push(c);
            before = Some(c);
        }
        if !pending.is_empty() && keep_run(before, None) {
            out.push(' ');
        }
        Ok(Cow::Owned(out))
    }
}
