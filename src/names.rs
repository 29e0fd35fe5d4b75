//! Player name capitalization
//!
//! Spreadsheets from the pairing system store names in inconsistent case
//! ("ALİ VELİ", "ayşe cengiz"). Names are rewritten word by word into title
//! case before they land in PGN tags.
//!
//! Turkish keeps the dotted and dotless I as separate letters:
//!
//! | lower | upper |
//! |-------|-------|
//! | `i`   | `İ`   |
//! | `ı`   | `I`   |
//!
//! Ordinary Unicode case mapping pairs `i` with `I` instead, so the Turkish
//! mode swaps those four codepoints by hand and only falls back to the
//! standard mapping for every other character.

/// Capitalization rules applied to player names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameCase {
    /// Ordinary Unicode title case (`--english`)
    Simple,
    /// Dotted/dotless I aware title case (`--turkish`, default)
    #[default]
    Turkish,
}

/// Title-case every whitespace-separated word of `text`.
///
/// Runs of whitespace collapse to a single space and the result is trimmed.
pub fn normalize_name(text: &str, mode: NameCase) -> String {
    text.split_whitespace()
        .map(|word| capitalize_word(word, mode))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str, mode: NameCase) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(word.len());
    match mode {
        NameCase::Simple => {
            out.extend(first.to_uppercase());
            for c in chars {
                out.extend(c.to_lowercase());
            }
        }
        NameCase::Turkish => {
            push_turkish_upper(&mut out, first);
            for c in chars {
                push_turkish_lower(&mut out, c);
            }
        }
    }
    out
}

fn push_turkish_upper(out: &mut String, c: char) {
    match c {
        'i' => out.push('İ'),
        'ı' => out.push('I'),
        _ => out.extend(c.to_uppercase()),
    }
}

fn push_turkish_lower(out: &mut String, c: char) {
    match c {
        'I' => out.push('ı'),
        'İ' => out.push('i'),
        _ => out.extend(c.to_lowercase()),
    }
}
