//! Locale-aware text ordering
//!
//! Approximates root collation as used by browser `localeCompare`. Both
//! strings are brought to canonical decomposition (NFD) first, so composed
//! and decomposed spellings compare equal. Each base character then forms
//! one collation element carrying the combining marks that follow it.
//! - primary strength: character class (whitespace and punctuation, then
//!   symbols, digits, letters) and the case-folded base character;
//! - secondary strength: unaccented before accented, marks in order;
//! - tertiary strength: lowercase sorts before uppercase;
//! - final code point comparison of the NFD forms keeps the order total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Secondary weight for letters whose stroke has no canonical decomposition
const STROKE: char = '\u{0335}';

#[derive(Debug)]
struct Element {
    class: u8,
    base: char,
    marks: Vec<char>,
    upper: bool,
}

/// Compare two strings for display ordering
pub fn compare_text(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let a: String = a.nfd().collect();
    let b: String = b.nfd().collect();
    if a == b {
        return Ordering::Equal;
    }

    let (ea, eb) = (elements(&a), elements(&b));
    ea.iter()
        .map(|e| (e.class, e.base))
        .cmp(eb.iter().map(|e| (e.class, e.base)))
        .then_with(|| {
            ea.iter()
                .map(|e| e.marks.as_slice())
                .cmp(eb.iter().map(|e| e.marks.as_slice()))
        })
        .then_with(|| ea.iter().map(|e| e.upper).cmp(eb.iter().map(|e| e.upper)))
        .then_with(|| a.cmp(&b))
}

/// Split NFD text into collation elements
fn elements(decomposed: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::with_capacity(decomposed.len());
    for c in decomposed.chars() {
        if is_combining_mark(c) {
            if let Some(last) = out.last_mut() {
                last.marks.push(c);
                continue;
            }
        }

        let folded = c.to_lowercase().next().unwrap_or(c);
        let (base, marks) = match unstroked(folded) {
            Some(base) => (base, vec![STROKE]),
            None => (folded, Vec::new()),
        };
        out.push(Element {
            class: char_class(c),
            base,
            marks,
            upper: c.is_uppercase(),
        });
    }
    out
}

/// Base letter of lowercase stroked letters, which NFD leaves whole
fn unstroked(c: char) -> Option<char> {
    match c {
        'ł' => Some('l'),
        'ø' => Some('o'),
        'đ' => Some('d'),
        'ħ' => Some('h'),
        'ŧ' => Some('t'),
        'ƀ' => Some('b'),
        'ɨ' => Some('i'),
        'ƶ' => Some('z'),
        _ => None,
    }
}

fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        3
    } else if c.is_alphabetic() {
        4
    } else if is_symbol(c) {
        2
    } else {
        1
    }
}

fn is_symbol(c: char) -> bool {
    matches!(
        c,
        '`' | '^' | '+' | '<' | '=' | '>' | '|' | '~' | '$' | '¢' | '£' | '¥'
            | '€' | '©' | '®' | '°' | '±' | '×' | '÷'
    )
}
