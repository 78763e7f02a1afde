//! French wording for summaries and calendar names.

/// Letters that take the elided article `d'`.
const ELIDING_LETTERS: &str = "aeiouy";

/// Prefix `word` with `d'` when it starts with a vowel (`aeiouy`, case
/// insensitive), otherwise with `de `.
///
/// Only unaccented letters elide: `"Éco"` gives `"de Éco"`.
pub fn with_of(word: &str) -> String {
    let elides = word
        .chars()
        .next()
        .and_then(|c| c.to_lowercase().next())
        .is_some_and(|c| ELIDING_LETTERS.contains(c));

    if elides {
        format!("d'{}", word)
    } else {
        format!("de {}", word)
    }
}
