//! Hebrew-to-Latin transliteration for pronunciation hints.
//!
//! A rough letter-by-letter approximation, not a phonetically precise
//! romanization: vowel points are ignored and every letter maps to a fixed
//! Latin string.

/// Approximate Latin rendering of a Hebrew letter, finals included.
fn latin(c: char) -> Option<&'static str> {
    Some(match c {
        'א' => "A",
        'ב' => "V",
        'ג' => "G",
        'ד' => "D",
        'ה' => "H",
        'ו' => "O",
        'ז' => "Z",
        'ח' => "Ch",
        'ט' => "T",
        'י' => "Y",
        'כ' | 'ך' => "K",
        'ל' => "L",
        'מ' | 'ם' => "M",
        'נ' | 'ן' => "N",
        'ס' => "S",
        'ע' => "A",
        'פ' => "P",
        'ף' => "F",
        'צ' | 'ץ' => "Tz",
        'ק' => "K",
        'ר' => "R",
        'ש' => "Sh",
        'ת' => "T",
        _ => return None,
    })
}

/// Convert Hebrew text to an approximate English phonetic representation.
/// Characters outside the Hebrew alphabet pass through unchanged.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match latin(c) {
            Some(s) => out.push_str(s),
            None => out.push(c),
        }
    }
    out
}
