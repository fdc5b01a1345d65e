use crate::{
    stage::{Stage, StageError},
    unicode::is_quote_mark,
};
use std::borrow::Cow;

/// Fold every quote glyph to a single ASCII apostrophe.
///
/// ASCII double quote, smart single/double quotes, guillemets, single angle
/// quotation marks and CJK corner/angle brackets all map to `'`. Opening
/// and closing variants are not distinguished.
pub struct FoldQuotes;

impl Stage for FoldQuotes {
    fn name(&self) -> &'static str {
        "fold_quotes"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.chars().any(is_quote_mark))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(Cow::Owned(
            text.chars()
                .map(|c| if is_quote_mark(c) { '\'' } else { c })
                .collect(),
        ))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;
    use crate::testing::stage_contract::StageTestConfig;

    impl StageTestConfig for FoldQuotes {
        fn samples() -> &'static [&'static str] {
            &[
                "\u{201C}hello\u{201D}",
                "\"double\"",
                "«guillemets»",
                "「corner」",
                "it's fine",
                "",
            ]
        }

        fn should_pass_through() -> &'static [&'static str] {
            &["it's fine", "plain text", "back`tick", ""]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("\u{201C}hello\u{201D}", "'hello'"),
                ("\"x\"", "'x'"),
                ("«x»", "'x'"),
                ("\u{2018}x\u{2019}", "'x'"),
                ("\u{300C}x\u{300D}", "'x'"),
                ("\u{3008}\u{3009}\u{300A}\u{300B}", "''''"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(FoldQuotes);
    }
}
