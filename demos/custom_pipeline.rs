use std::error::Error;

use textcanon::{Canonicalizer, CollapseWhitespace, FoldQuotes, Nfkc, UnifyDashes};

fn main() -> Result<(), Box<dyn Error>> {
    // A reduced pipeline: normalization plus whitespace, dash and quote
    // folding, without the symbol/emoticon tables or punctuation-spacing
    // pass. Useful when only layout noise should be removed.
    let canon = Canonicalizer::builder()
        .add_stage(Nfkc)
        .add_stage(CollapseWhitespace)
        .add_stage(UnifyDashes)
        .add_stage(FoldQuotes)
        .build();

    let input = "  \u{201C}Ｑｕｏｔｅｄ\u{201D}\u{3000}\u{2014}\u{2014} text :)  ";
    println!("reduced : {}", canon.canonicalize(input)?);
    // → 'Quoted' - text :)

    // The full pipeline for comparison.
    let full = Canonicalizer::new();
    println!("full    : {}", full.canonicalize(input)?);
    // → 'Quoted'-text:-)

    Ok(())
}
