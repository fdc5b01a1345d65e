use thiserror::Error;

use crate::{
    pipeline::Pipeline,
    stage::{
        Stage, StageError, canonicalize_emoticons::CanonicalizeEmoticons,
        canonicalize_symbols::CanonicalizeSymbols, collapse_whitespace::CollapseWhitespace,
        expand_ampersands::ExpandAmpersands, fold_quotes::FoldQuotes, fold_width::FoldWidth,
        normalization::Nfkc, normalize_ellipses::NormalizeEllipses,
        strip_punctuation_spacing::StripPunctuationSpacing, unify_dashes::UnifyDashes,
    },
};
use std::{
    borrow::Cow,
    sync::{Arc, LazyLock},
};

#[derive(Debug, Error)]
pub enum CanonicalizeError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("input is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

/// The canonical text transform: an ordered, immutable stage pipeline.
///
/// Stateless and `Send + Sync`; one instance can serve any number of
/// threads. `Canonicalizer::new()` wires the canonical stage order, which
/// is normative: dash unification must see collapsed whitespace, the
/// punctuation-spacing pass must run after quote and dash folding, and the
/// emoticon pass must run after the symbol pass.
pub struct Canonicalizer {
    pipeline: Pipeline,
}

static DEFAULT_CANONICALIZER: LazyLock<Canonicalizer> = LazyLock::new(Canonicalizer::new);

impl Canonicalizer {
    /// The full canonical pipeline in normative order.
    pub fn new() -> Self {
        Self::builder()
            .add_stage(Nfkc)
            .add_stage(ExpandAmpersands)
            .add_stage(CollapseWhitespace)
            .add_stage(UnifyDashes)
            .add_stage(FoldWidth)
            .add_stage(NormalizeEllipses)
            .add_stage(FoldQuotes)
            .add_stage(StripPunctuationSpacing)
            .add_stage(CanonicalizeSymbols)
            .add_stage(CanonicalizeEmoticons)
            .build()
    }

    pub fn builder() -> CanonicalizerBuilder {
        CanonicalizerBuilder::default()
    }

    /// Canonicalize a string. Zero-copy when no stage fires.
    pub fn canonicalize<'a>(
        &self,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<Cow<'a, str>, CanonicalizeError> {
        let result = self.pipeline.process(text.into())?;
        Ok(result)
    }

    /// Canonicalize a string and return the canonical UTF-8 byte sequence.
    pub fn canonical_bytes(&self, text: &str) -> Result<Vec<u8>, CanonicalizeError> {
        Ok(self.canonicalize(text)?.into_owned().into_bytes())
    }

    /// Validate raw bytes as UTF-8, then canonicalize.
    ///
    /// This is the malformed-input boundary: the pipeline itself is total
    /// over valid Unicode text, so rejection happens here and nowhere else.
    pub fn canonicalize_utf8<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, CanonicalizeError> {
        #[cfg(feature = "simd")]
        let text = simdutf8::basic::from_utf8(bytes)
            .map_err(|e| CanonicalizeError::InvalidEncoding(e.to_string()))?;
        #[cfg(not(feature = "simd"))]
        let text = std::str::from_utf8(bytes)
            .map_err(|e| CanonicalizeError::InvalidEncoding(e.to_string()))?;
        self.canonicalize(text)
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CanonicalizerBuilder {
    stages: Vec<Arc<dyn Stage>>,
}

impl Default for CanonicalizerBuilder {
    fn default() -> Self {
        Self {
            stages: Default::default(),
        }
    }
}

impl CanonicalizerBuilder {
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Canonicalizer {
        let pipeline = Pipeline::new(self.stages);
        Canonicalizer { pipeline }
    }
}

/// Canonicalize with the process-wide default pipeline.
pub fn canonicalize<'a>(text: &'a str) -> Result<Cow<'a, str>, CanonicalizeError> {
    DEFAULT_CANONICALIZER.canonicalize(text)
}

/// Canonical UTF-8 bytes with the process-wide default pipeline.
pub fn canonical_bytes(text: &str) -> Result<Vec<u8>, CanonicalizeError> {
    DEFAULT_CANONICALIZER.canonical_bytes(text)
}

/// Validate and canonicalize raw bytes with the process-wide default
/// pipeline.
pub fn canonicalize_utf8<'a>(bytes: &'a [u8]) -> Result<Cow<'a, str>, CanonicalizeError> {
    DEFAULT_CANONICALIZER.canonicalize_utf8(bytes)
}
