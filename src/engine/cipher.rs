use std::num::IntErrorKind;

use log::{info, warn};

use crate::engine::display::{StatusSink, TextSink};
use crate::model::message::{MessageRegion, OutputRegion, StatusMessage};
use crate::model::validation::{FieldError, ValidationError, Validator};

const ALPHABET: i64 = 26;

pub const WELCOME: &str =
    "Welcome to the Caesar Cipher encryption service\nEnter text and cipher key to be used";
pub const ENCRYPTED: &str =
    "Plaintext has been encrypted with the cipher key\nThank you for choosing MidTown IT";
pub const DECRYPTED: &str =
    "Ciphertext has been decrypted with the cipher key\nThank you for choosing MidTown IT";
pub const NO_CHANGE: &str =
    "Using a cipher key divisible by 26 results in no change!\nAlpha characters remain unchanged";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Result of a successful encrypt or decrypt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherOutcome {
    pub text: String,
    pub key: i64,
}

impl CipherOutcome {
    /// True when the key shifts every letter onto itself.
    pub fn leaves_letters_unchanged(&self) -> bool {
        is_identity_key(self.key)
    }
}

/// Turns the raw key text into a shift.
///
/// Integer keys are used as-is. Anything else falls back to the sum of the
/// key's code points, so anagrams such as `"ab"` and `"ba"` share a key. That
/// collision is weak but it is the established behavior and is kept.
///
/// Integer keys beyond 64 bits are reduced modulo 26 with their sign kept,
/// which yields the same shift.
pub fn normalize_key(raw: &str) -> i64 {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(key) => key,
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            reduce_decimal(trimmed)
        }
        Err(_) => raw.chars().map(|c| i64::from(u32::from(c))).sum(),
    }
}

fn reduce_decimal(digits: &str) -> i64 {
    let (negative, digits) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.strip_prefix('+').unwrap_or(digits)),
    };
    let reduced = digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0i64, |acc, d| (acc * 10 + i64::from(d - b'0')) % ALPHABET);

    if negative {
        -reduced
    } else {
        reduced
    }
}

pub fn is_identity_key(key: i64) -> bool {
    key.rem_euclid(ALPHABET) == 0
}

/// Shifts every letter of `text` by `key`.
///
/// Text is uppercased first, `.` becomes `X`, and anything that is not an
/// ASCII letter afterwards is dropped.
pub fn transform(text: &str, key: i64, direction: Direction) -> String {
    let forward = key.rem_euclid(ALPHABET);
    let shift = match direction {
        Direction::Encrypt => forward,
        Direction::Decrypt => (ALPHABET - forward) % ALPHABET,
    };

    text.to_uppercase()
        .chars()
        .map(|c| if c == '.' { 'X' } else { c })
        .filter(char::is_ascii_uppercase)
        .map(|c| {
            let position = i64::from(c as u8 - b'A');
            let shifted = (position + shift).rem_euclid(ALPHABET);
            char::from(b'A' + shifted as u8)
        })
        .collect()
}

/// The form `transform` preserves: uppercase letters only, periods as `X`.
pub fn normalize_text(text: &str) -> String {
    transform(text, 0, Direction::Encrypt)
}

/* =========================
   Requests
   ========================= */

pub fn encrypt(key_text: &str, plaintext: &str) -> Result<CipherOutcome, ValidationError> {
    let plaintext = plaintext.trim().to_uppercase();

    let mut check = Validator::new();
    check
        .check(!key_text.is_empty(), FieldError::CipherKeyEmpty)
        .check(!plaintext.is_empty(), FieldError::PlaintextEmpty);
    check.finish()?;

    let key = normalize_key(key_text);
    Ok(CipherOutcome {
        text: transform(&plaintext, key, Direction::Encrypt),
        key,
    })
}

/// Unlike plaintext, ciphertext must already be letters only. It is
/// uppercased before that check, so lowercase input is accepted.
pub fn decrypt(key_text: &str, ciphertext: &str) -> Result<CipherOutcome, ValidationError> {
    let ciphertext = ciphertext.trim().to_uppercase();

    let mut check = Validator::new();
    // An empty box is also not letters-only, so it fails both checks.
    check
        .check(!key_text.is_empty(), FieldError::CipherKeyEmpty)
        .check(!ciphertext.is_empty(), FieldError::CiphertextEmpty)
        .check(
            !ciphertext.is_empty() && ciphertext.chars().all(|c| c.is_ascii_uppercase()),
            FieldError::CiphertextNonAlpha,
        );
    check.finish()?;

    let key = normalize_key(key_text);
    Ok(CipherOutcome {
        text: transform(&ciphertext, key, Direction::Decrypt),
        key,
    })
}

pub fn present<D>(display: &mut D, direction: Direction, key_text: &str, input: &str)
where
    D: StatusSink + TextSink,
{
    let (result, target, done) = match direction {
        Direction::Encrypt => (encrypt(key_text, input), OutputRegion::Ciphertext, ENCRYPTED),
        Direction::Decrypt => (decrypt(key_text, input), OutputRegion::Plaintext, DECRYPTED),
    };

    match result {
        Ok(outcome) => {
            info!("cipher: {:?} {} chars", direction, outcome.text.len());
            display.write_output(target, &outcome.text);
            let message = if outcome.leaves_letters_unchanged() {
                warn!("cipher: key {} is a multiple of 26", outcome.key);
                NO_CHANGE
            } else {
                done
            };
            display.show_status(MessageRegion::Cipher, StatusMessage::info(message));
        }
        Err(err) => {
            info!("cipher: {:?} rejected ({} invalid fields)", direction, err.fields.len());
            display.write_output(target, "");
            display.show_status(MessageRegion::Cipher, StatusMessage::error(err.to_string()));
        }
    }
}
