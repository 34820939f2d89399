//! Parser for accent-marked wordlists.
//!
//! # Format
//! ```text
//! # ударения, блок 1
//! твОрог
//! звонИт
//! шассИ
//! ```
//!
//! One word per line; the stressed letter is written in uppercase. Blank
//! lines and `#` comments are skipped. Words without a mark are accepted
//! (their accent is unknown), but a mark on a non-vowel or more than one
//! mark per word is rejected.

use crate::error::{ParseError, Result};
use crate::types::{is_russian_vowel, RawWord};
use std::collections::HashSet;

/// Parse wordlist content into raw words.
pub fn parse(content: &str) -> Result<Vec<RawWord>> {
    let mut words = Vec::new();
    let mut seen_words = HashSet::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let entry = line.trim();

        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }

        let raw = parse_entry(entry, line_num)?;
        if !seen_words.insert(raw.word.clone()) {
            return Err(ParseError::DuplicateWord {
                word: raw.word,
                line: line_num,
            });
        }
        words.push(raw);
    }

    Ok(words)
}

/// Parse a single entry: lowercase the word, record the accent position.
///
/// The accent index counts characters, not bytes; Cyrillic is multi-byte
/// in UTF-8 and byte offsets would be unusable for letter highlighting.
fn parse_entry(entry: &str, line_number: usize) -> Result<RawWord> {
    let mut letters: Vec<char> = Vec::new();
    let mut accent_idx: Option<usize> = None;

    for ch in entry.chars() {
        if ch.is_uppercase() {
            if accent_idx.is_some() {
                return Err(ParseError::MultipleStressMarks {
                    line: line_number,
                    word: entry.to_string(),
                });
            }
            if !is_russian_vowel(ch) {
                return Err(ParseError::StressOnNonVowel {
                    line: line_number,
                    word: entry.to_string(),
                });
            }
            accent_idx = Some(letters.len());
            letters.extend(ch.to_lowercase());
        } else {
            letters.push(ch);
        }
    }

    Ok(RawWord {
        word: letters.into_iter().collect(),
        accent_idx,
        line_number,
    })
}
