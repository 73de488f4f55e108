use rabin_fingerprint::initialize;

fn main() {
    let engine = initialize().expect("unsupported host byte order");

    let sentence = "Now is the time for all good men to come to the aid of their country.";
    let whole = engine.from_text(sentence);
    println!("Fingerprint of the whole sentence: {}", whole);

    // Build the same fingerprint one word at a time
    let mut fp = engine.empty();
    for piece in sentence.split_inclusive(' ') {
        fp = engine.extend(fp, piece);
        println!("  after {:?}: {}", piece, fp);
    }
    assert_eq!(fp, whole);
    println!("Verified: incremental == one-shot");

    // Combine fingerprints of parts into a fingerprint of a structure
    let fox = engine.from_text("The quick brown fox jumped over the lazy dog.");
    let pair = engine.combine(whole, fox);
    let swapped = engine.combine(fox, whole);
    println!("\ncombine(sentence, fox) = {}", pair);
    println!("combine(fox, sentence) = {}", swapped);
    assert_ne!(pair, swapped);
}
