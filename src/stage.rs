//! Core canonicalization stage abstraction.
//!
//! A stage is a total function from string to string. The pipeline calls
//! `needs_apply` first and skips `apply` entirely when the stage would not
//! change the text, so an already-canonical input flows through the whole
//! pipeline without allocating.
//!
//! `needs_apply` must be exact: it returns `Ok(true)` iff `apply` would
//! produce a different string. The stage contract tests in
//! `testing::stage_contract` enforce this for every stage.

pub mod canonicalize_emoticons;
pub mod canonicalize_symbols;
pub mod collapse_whitespace;
pub mod expand_ampersands;
pub mod fold_quotes;
pub mod fold_width;
pub mod normalization;
pub mod normalize_ellipses;
pub mod strip_punctuation_spacing;
pub mod unify_dashes;

use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("canonicalization failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single canonicalization step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in error messages and benches.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError>;
}
