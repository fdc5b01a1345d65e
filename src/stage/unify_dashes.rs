use crate::{
    stage::{Stage, StageError},
    unicode::is_dash_mark,
};
use std::borrow::Cow;

/// Unify dash glyphs and collapse hyphen runs.
///
/// Two logical passes: first every maximal run of dash-like characters
/// becomes a single ASCII hyphen-minus, then any run of two-plus hyphens
/// (pre-existing or produced by the first pass) collapses to one. The scan
/// below fuses the passes by treating `-` and the dash table as one run
/// alphabet; a run reduces to exactly one `-`.
pub struct UnifyDashes;

#[inline(always)]
fn is_dash_or_hyphen(c: char) -> bool {
    c == '-' || is_dash_mark(c)
}

impl Stage for UnifyDashes {
    fn name(&self) -> &'static str {
        "unify_dashes"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        let mut prev_hyphen = false;
        for c in text.chars() {
            if is_dash_mark(c) {
                return Ok(true);
            }
            let is_hyphen = c == '-';
            if is_hyphen && prev_hyphen {
                return Ok(true);
            }
            prev_hyphen = is_hyphen;
        }
        Ok(false)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let mut out = String::with_capacity(text.len());
        let mut in_run = false;
        for c in text.chars() {
            if is_dash_or_hyphen(c) {
                if !in_run {
                    out.push('-');
                    in_run = true;
                }
            } else {
                out.push(c);
                in_run = false;
            }
        }
        Ok(Cow::Owned(out))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn single_hyphen_untouched() {
        let stage = UnifyDashes;
        assert!(!stage.needs_apply("well-known").unwrap());
        assert_eq!(stage.apply(Cow::Borrowed("well-known")).unwrap(), "well-known");
    }

    #[test]
    fn distinct_runs_stay_distinct() {
        let stage = UnifyDashes;
        assert_eq!(
            stage.apply(Cow::Borrowed("a\u{2014}b\u{2013}c")).unwrap(),
            "a-b-c"
        );
    }

    #[test]
    fn adjacent_dash_and_hyphen_merge() {
        let stage = UnifyDashes;
        assert_eq!(stage.apply(Cow::Borrowed("a-\u{2014}-b")).unwrap(), "a-b");
    }

    #[test]
    fn matches_regex_reference() {
        let dashes = regex::Regex::new(
            r"[\x{058A}\x{05BE}\x{1400}\x{1806}\x{2010}\x{2011}\x{2012}\x{2013}\x{2014}\x{2015}\x{2E17}\x{2E1A}\x{2E3A}\x{2E3B}\x{2E40}\x{2E5D}\x{301C}\x{3030}\x{30A0}\x{FE31}\x{FE32}\x{FE58}\x{FE63}\x{FF0D}]+",
        )
        .unwrap();
        let multi = regex::Regex::new(r"-{2,}").unwrap();

        let stage = UnifyDashes;
        let inputs = [
            "a\u{2014}\u{2014}b",
            "a--b",
            "a-\u{2014}-b",
            "x\u{058A}y\u{05BE}z",
            "plain-text",
            "----",
            "",
        ];
        for input in inputs {
            let reference = {
                let pass1 = dashes.replace_all(input, "-");
                multi.replace_all(&pass1, "-").into_owned()
            };
            let ours = stage.apply(Cow::Borrowed(input)).unwrap();
            assert_eq!(ours, reference, "mismatch for {input:?}");
        }
    }
}
