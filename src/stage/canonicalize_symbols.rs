use crate::stage::{Stage, StageError};
use phf::{Map, phf_map};
use std::borrow::Cow;

/// Replace symbol and emoji codepoints with ASCII emoticon or bracketed
/// text equivalents.
///
/// The sources are single distinct codepoints, so replacements cannot
/// overlap. Runs before the ASCII emoticon stage: the replacements here are
/// already in canonical hyphenated form and are never re-matched there.
pub struct CanonicalizeSymbols;

static SYMBOL_REPLACEMENTS: Map<char, &'static str> = phf_map! {
    '\u{263A}' => ":-)",  // WHITE SMILING FACE
    '\u{1F60A}' => ":-)", // SMILING FACE WITH SMILING EYES
    '\u{1F610}' => ":-|", // NEUTRAL FACE
    '\u{2639}' => ":-(",  // WHITE FROWNING FACE
    '\u{1F603}' => ":-D", // SMILING FACE WITH OPEN MOUTH
    '\u{1F61D}' => ":-p", // FACE WITH STUCK-OUT TONGUE AND TIGHTLY-CLOSED EYES
    '\u{1F632}' => ":-o", // ASTONISHED FACE
    '\u{1F609}' => ";-)", // WINKING FACE
    '\u{2764}' => "<3",   // HEAVY BLACK HEART
    '\u{1F494}' => "</3", // BROKEN HEART
    '\u{A9}' => "(c)",    // COPYRIGHT SIGN
    '\u{AE}' => "(R)",    // REGISTERED SIGN
    '\u{2022}' => "*",    // BULLET
};

impl Stage for CanonicalizeSymbols {
    fn name(&self) -> &'static str {
        "canonicalize_symbols"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.chars().any(|c| SYMBOL_REPLACEMENTS.contains_key(&c)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match SYMBOL_REPLACEMENTS.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
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
    fn every_table_entry_maps() {
        let stage = CanonicalizeSymbols;
        let cases = [
            ("\u{263A}", ":-)"),
            ("\u{1F60A}", ":-)"),
            ("\u{1F610}", ":-|"),
            ("\u{2639}", ":-("),
            ("\u{1F603}", ":-D"),
            ("\u{1F61D}", ":-p"),
            ("\u{1F632}", ":-o"),
            ("\u{1F609}", ";-)"),
            ("\u{2764}", "<3"),
            ("\u{1F494}", "</3"),
            ("\u{A9}", "(c)"),
            ("\u{AE}", "(R)"),
            ("\u{2022}", "*"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                stage.apply(Cow::Borrowed(input)).unwrap(),
                expected,
                "mismatch for U+{:04X}",
                input.chars().next().unwrap() as u32
            );
        }
    }

    #[test]
    fn unknown_emoji_pass_through() {
        let stage = CanonicalizeSymbols;
        assert!(!stage.needs_apply("\u{1F680}").unwrap());
        assert_eq!(stage.apply(Cow::Borrowed("\u{1F680}")).unwrap(), "\u{1F680}");
    }

    #[test]
    fn adjacent_symbols_expand_independently() {
        let stage = CanonicalizeSymbols;
        assert_eq!(
            stage.apply(Cow::Borrowed("\u{2764}\u{1F494}")).unwrap(),
            "<3</3"
        );
    }
}
