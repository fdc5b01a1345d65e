use crate::{
    stage::{Stage, StageError},
    unicode::fold_width_char,
};
use std::borrow::Cow;

/// Fold CJK punctuation and full-width ASCII variants.
///
/// Ideographic comma and full stop become `,` and `.`, then every codepoint
/// in the full-width block [U+FF01, U+FF5E] shifts down by 0xFEE0 onto its
/// ASCII counterpart. NFKC already folds most of the full-width block; this
/// stage guarantees the mapping regardless of what reached it.
pub struct FoldWidth;

impl Stage for FoldWidth {
    fn name(&self) -> &'static str {
        "fold_width"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.chars().any(|c| fold_width_char(c) != c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(Cow::Owned(text.chars().map(fold_width_char).collect()))
    }
}
