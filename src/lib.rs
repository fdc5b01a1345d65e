pub mod canonicalizer;
pub mod pipeline;
pub mod stage;
pub mod unicode;

#[cfg(test)]
pub mod testing;

pub use canonicalizer::Canonicalizer;
pub use canonicalizer::CanonicalizeError;
pub use canonicalizer::CanonicalizerBuilder;
pub use canonicalizer::{canonical_bytes, canonicalize, canonicalize_utf8};
pub use stage::canonicalize_emoticons::CanonicalizeEmoticons;
pub use stage::canonicalize_symbols::CanonicalizeSymbols;
pub use stage::collapse_whitespace::CollapseWhitespace;
pub use stage::expand_ampersands::ExpandAmpersands;
pub use stage::fold_quotes::FoldQuotes;
pub use stage::fold_width::FoldWidth;
pub use stage::normalization::Nfkc;
pub use stage::normalize_ellipses::NormalizeEllipses;
pub use stage::strip_punctuation_spacing::StripPunctuationSpacing;
pub use stage::unify_dashes::UnifyDashes;
pub use stage::{Stage, StageError};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
