//! Static pattern tables and character predicates shared by the stages.
//!
//! Everything here is process-wide immutable data: `const fn` range tables
//! plus an ICU4X general-category map initialized on first use.

use icu_properties::props::{GeneralCategory, GeneralCategoryGroup};
use icu_properties::{CodePointMapData, CodePointMapDataBorrowed};
use std::sync::LazyLock;

// ── ICU4X ──
static GENERAL_CATEGORY: LazyLock<CodePointMapDataBorrowed<'static, GeneralCategory>> =
    LazyLock::new(CodePointMapData::<GeneralCategory>::new);

/// True for any character in the Unicode punctuation category (Pc, Pd, Ps,
/// Pe, Pi, Pf, Po). This is the full category, not an ASCII list: `$`, `+`,
/// `<` and friends are symbols, not punctuation.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    GeneralCategoryGroup::Punctuation.contains(GENERAL_CATEGORY.get(c))
}

/// Ampersand glyphs expanded to the word " and ".
#[inline(always)]
pub const fn is_ampersand(c: char) -> bool {
    matches!(c as u32,
        0x0026 | // AMPERSAND
        0xFE60 | // SMALL AMPERSAND
        0xFF06   // FULLWIDTH AMPERSAND
    )
}

/// Whitespace characters rewritten to a plain ASCII space before the
/// generic collapse pass. U+200B and U+FEFF are not `White_Space=Yes` but
/// are treated as whitespace here.
#[inline(always)]
pub const fn is_specialized_whitespace(c: char) -> bool {
    matches!(c as u32,
        0x2028 | // LINE SEPARATOR
        0x2029 | // PARAGRAPH SEPARATOR
        0x200B | // ZERO WIDTH SPACE
        0xFEFF | // ZERO WIDTH NO-BREAK SPACE / BOM
        0x00A0 | // NO-BREAK SPACE
        0x3000 | // IDEOGRAPHIC SPACE
        0x000D | // CARRIAGE RETURN
        0x000A | // LINE FEED
        0x0009   // TAB
    )
}

/// Union of the specialized set and generic Unicode whitespace. This is the
/// run alphabet of the whitespace-collapsing stage.
#[inline(always)]
pub fn is_collapsible_whitespace(c: char) -> bool {
    is_specialized_whitespace(c) || c.is_whitespace()
}

/// Dash-like characters unified to ASCII hyphen-minus.
#[inline(always)]
pub const fn is_dash_mark(c: char) -> bool {
    matches!(c as u32,
        0x058A | // ARMENIAN HYPHEN
        0x05BE | // HEBREW PUNCTUATION MAQAF
        0x1400 | // CANADIAN SYLLABICS HYPHEN
        0x1806 | // MONGOLIAN TODO SOFT HYPHEN
        0x2010..=0x2015 | // HYPHEN through HORIZONTAL BAR
        0x2E17 | // DOUBLE OBLIQUE HYPHEN
        0x2E1A | // HYPHEN WITH DIAERESIS
        0x2E3A | // TWO-EM DASH
        0x2E3B | // THREE-EM DASH
        0x2E40 | // DOUBLE HYPHEN
        0x2E5D | // OBLIQUE HYPHEN
        0x301C | // WAVE DASH
        0x3030 | // WAVY DASH
        0x30A0 | // KATAKANA-HIRAGANA DOUBLE HYPHEN
        0xFE31 | // PRESENTATION FORM FOR VERTICAL EM DASH
        0xFE32 | // PRESENTATION FORM FOR VERTICAL EN DASH
        0xFE58 | // SMALL EM DASH
        0xFE63 | // SMALL HYPHEN-MINUS
        0xFF0D   // FULLWIDTH HYPHEN-MINUS
    )
}

/// Quote glyphs folded to a single ASCII apostrophe. Opening and closing
/// variants fold to the same character.
#[inline(always)]
pub const fn is_quote_mark(c: char) -> bool {
    matches!(c as u32,
        0x0022 | // QUOTATION MARK
        0x2018 | // LEFT SINGLE QUOTATION MARK
        0x2019 | // RIGHT SINGLE QUOTATION MARK
        0x201C | // LEFT DOUBLE QUOTATION MARK
        0x201D | // RIGHT DOUBLE QUOTATION MARK
        0x00AB | // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
        0x00BB | // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
        0x2039 | // SINGLE LEFT-POINTING ANGLE QUOTATION MARK
        0x203A | // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
        0x3008 | // LEFT ANGLE BRACKET
        0x3009 | // RIGHT ANGLE BRACKET
        0x300A | // LEFT DOUBLE ANGLE BRACKET
        0x300B | // RIGHT DOUBLE ANGLE BRACKET
        0x300C | // LEFT CORNER BRACKET
        0x300D   // RIGHT CORNER BRACKET
    )
}

/// CJK ideographic comma/full stop to ASCII, then the full-width ASCII
/// variant block [U+FF01, U+FF5E] shifted down by 0xFEE0. U+3000 is owned
/// by the whitespace stage and is deliberately not mapped here.
#[inline(always)]
pub fn fold_width_char(c: char) -> char {
    match c {
        '\u{3001}' => ',',
        '\u{3002}' => '.',
        _ => {
            let cp = c as u32;
            if (0xFF01..=0xFF5E).contains(&cp) {
                char::from_u32(cp - 0xFEE0).unwrap_or(c)
            } else {
                c
            }
        }
    }
}
