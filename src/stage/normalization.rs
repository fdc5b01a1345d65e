use crate::stage::{Stage, StageError};
use std::{borrow::Cow, sync::LazyLock};

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};

// ── ICU4X ──
static ICU4X_NFKC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfkc);

/// Unicode Normalization Form KC (compatibility decomposition followed by
/// canonical composition).
///
/// Runs first: every later stage matches fixed codepoints and assumes the
/// input is already NFKC-normalized. NFKC folds full-width Latin variants,
/// ligatures, superscripts and similar compatibility forms, so several of
/// the downstream tables fire only on codepoints NFKC leaves alone.
#[derive(Default, Clone, Copy)]
pub struct Nfkc;

pub const NFKC: Nfkc = Nfkc;

impl Stage for Nfkc {
    fn name(&self) -> &'static str {
        "nfkc"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(!ICU4X_NFKC.is_normalized(text))
    }

    #[inline(always)]
    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(ICU4X_NFKC.normalize(text.as_ref()).into_owned().into())
    }
}
