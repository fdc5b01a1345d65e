use crate::{
    stage::{Stage, StageError},
    unicode::{is_collapsible_whitespace, is_specialized_whitespace},
};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Collapse and trim whitespace in three ordered steps:
///
/// | Step | Effect                                                                   |
/// |------|--------------------------------------------------------------------------|
/// | A    | Each maximal run of specialized whitespace (CR, LF, TAB, NBSP, ZWSP, BOM, line/paragraph separator, ideographic space) becomes one ASCII space |
/// | B    | Leading and trailing whitespace is trimmed                               |
/// | C    | Each remaining run of two-plus generic whitespace becomes one ASCII space |
///
/// Step A must precede B and C so the specialized characters take part in
/// trimming and collapsing as plain spaces. A single interior generic
/// whitespace character outside the specialized set (e.g. U+1680) is not a
/// run of two and passes through unchanged.
///
/// Implemented as one pass with a pending-run buffer: a leading run is
/// dropped, an interior run is reduced per steps A+C, a trailing run is
/// dropped.
pub struct CollapseWhitespace;

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        if text.is_empty() {
            return Ok(false);
        }

        // Edge runs are always trimmed away.
        if text.chars().next().is_some_and(is_collapsible_whitespace)
            || text.chars().next_back().is_some_and(is_collapsible_whitespace)
        {
            return Ok(true);
        }

        let mut prev_ws = false;
        for c in text.chars() {
            if is_specialized_whitespace(c) {
                return Ok(true);
            }
            let is_ws = is_collapsible_whitespace(c);
            if is_ws && prev_ws {
                return Ok(true);
            }
            prev_ws = is_ws;
        }
        Ok(false)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let s = text.as_ref();
        let mut result = String::with_capacity(s.len());
        let mut started = false;
        // Almost all whitespace runs are short in real text.
        let mut pending: SmallVec<[char; 4]> = SmallVec::new();

        for c in s.chars() {
            if is_collapsible_whitespace(c) {
                pending.push(c);
                continue;
            }
            if !pending.is_empty() {
                if started {
                    result.push(reduce_run(&pending));
                }
                pending.clear();
            }
            result.push(c);
            started = true;
        }
        // Trailing run is trimmed.
        Ok(Cow::Owned(result))
    }
}

/// Reduce one whitespace run to a single character, honoring step A before
/// step C: every maximal specialized sub-run counts as one plain space, and
/// a resulting width of two or more collapses to one space. A width-one run
/// keeps its character (a space if it came from a specialized sub-run).
fn reduce_run(run: &[char]) -> char {
    let mut width = 0usize;
    let mut last = ' ';
    let mut in_specialized = false;
    for &c in run {
        if is_specialized_whitespace(c) {
            if !in_specialized {
                width += 1;
                last = ' ';
                in_specialized = true;
            }
        } else {
            width += 1;
            last = c;
            in_specialized = false;
        }
    }
    if width >= 2 { ' ' } else { last }
}
