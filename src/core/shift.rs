//! Shift Transform: Caesar rotation over the ASCII alphabet
//!
//! Case is preserved. Anything that is not an ASCII letter (digits,
//! punctuation, whitespace, accented letters) passes through unchanged.

use crate::{ALPHABET_SIZE, MIN_KEY, MAX_KEY};
use crate::types::FrequencyAnalysis;

/// Stateless Caesar cipher
#[derive(Debug, Default, Clone, Copy)]
pub struct ShiftCipher;

impl ShiftCipher {
    /// Create new cipher
    pub fn new() -> Self {
        Self
    }

    /// Normalize any integer shift into 0..26
    pub fn normalize_key(key: i32) -> u8 {
        key.rem_euclid(ALPHABET_SIZE as i32) as u8
    }

    /// Rotate every ASCII letter forward by `key`
    pub fn encrypt(&self, plaintext: &str, key: i32) -> String {
        let shift = Self::normalize_key(key);
        if shift == 0 {
            return plaintext.to_string();
        }
        plaintext.chars().map(|c| rotate(c, shift)).collect()
    }

    /// Undo a forward rotation by `key`
    pub fn decrypt(&self, ciphertext: &str, key: i32) -> String {
        self.encrypt(ciphertext, -key)
    }

    /// Every informative hypothesis: keys 1..=25, none for empty input
    pub fn brute_force(&self, ciphertext: &str) -> Vec<(u8, String)> {
        if ciphertext.is_empty() {
            return Vec::new();
        }
        (MIN_KEY..=MAX_KEY)
            .map(|key| (key, self.decrypt(ciphertext, key as i32)))
            .collect()
    }

    /// Count letters in the ciphertext and guess the key from the top one
    pub fn frequency_analysis(&self, ciphertext: &str) -> FrequencyAnalysis {
        // Letters in order of first appearance, so the stable sort below
        // breaks count ties by first occurrence
        let mut counts: Vec<(char, usize)> = Vec::new();
        let mut total = 0usize;
        for c in ciphertext.chars().filter(|c| c.is_alphabetic()).flat_map(char::to_lowercase) {
            total += 1;
            match counts.iter_mut().find(|(l, _)| *l == c) {
                Some((_, n)) => *n += 1,
                None => counts.push((c, 1)),
            }
        }

        if total == 0 {
            return FrequencyAnalysis::empty();
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let most_common = counts.first().map(|(c, _)| *c);
        let estimated_key = most_common
            .filter(|c| c.is_ascii_lowercase())
            .map(|c| Self::normalize_key(c as i32 - 'e' as i32));

        FrequencyAnalysis {
            total_letters: total,
            most_common_letter: most_common,
            estimated_key,
            top_frequencies: counts.iter().take(5).copied().collect(),
            percentages: counts
                .iter()
                .take(10)
                .map(|(c, n)| (*c, *n as f64 / total as f64 * 100.0))
                .collect(),
        }
    }
}

/// Rotate a single ASCII letter, keep everything else
fn rotate(c: char, shift: u8) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };
    let pos = c as u8 - base;
    ((pos + shift) % ALPHABET_SIZE + base) as char
}

// =============================================================================
// TESTS
// =============================================================================
