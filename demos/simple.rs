use std::error::Error;

use textcanon::canonical_bytes;

fn main() -> Result<(), Box<dyn Error>> {
    // ────────────────────────────────────────────────────────────────
    // Visually different, semantically identical inputs hash equal
    // once canonicalized.
    // ────────────────────────────────────────────────────────────────
    let variants = [
        "fish & chips \u{2014} the classic",
        "fish\u{00A0}\u{FF06}\u{00A0}chips \u{2013} the classic",
        "fish  &  chips\u{3000}\u{2014}\u{3000}the classic",
    ];

    for input in variants {
        let canonical = canonical_bytes(input)?;
        println!("{:40} -> {}", format!("{input:?}"), String::from_utf8(canonical)?);
    }
    // All three print: fish and chips-the classic

    // ────────────────────────────────────────────────────────────────
    // Smart punctuation, full-width forms, emoticons
    // ────────────────────────────────────────────────────────────────
    for input in [
        "\u{201C}Ｗｅｌｌ\u{2026}\u{201D} she said :)",
        "wait..... \u{2764}",
        "word , word .",
    ] {
        println!("{:40} -> {}", format!("{input:?}"), textcanon::canonicalize(input)?);
    }

    Ok(())
}
