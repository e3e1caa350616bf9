use std::fmt;

use thiserror::Error;

/// A single failing input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Player1Empty,
    Player2Empty,
    UsernameEmpty,
    MultiplierEmpty,
    MultiplierNotInteger,
    CipherKeyEmpty,
    PlaintextEmpty,
    CiphertextEmpty,
    CiphertextNonAlpha,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FieldError::Player1Empty => "Player 1 empty",
            FieldError::Player2Empty => "Player 2 empty",
            FieldError::UsernameEmpty => "Username empty",
            FieldError::MultiplierEmpty => "Multiplier empty",
            FieldError::MultiplierNotInteger => "Multiplier not an integer",
            FieldError::CipherKeyEmpty => "Cipher key empty",
            FieldError::PlaintextEmpty => "Plaintext empty",
            FieldError::CiphertextEmpty => "Ciphertext empty",
            FieldError::CiphertextNonAlpha => "Ciphertext contains non-alpha",
        };
        f.write_str(text)
    }
}

/// Every field that failed validation for one request, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Input Error: Please ensure all fields have correct input\nFields: {}", join_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn contains(&self, field: FieldError) -> bool {
        self.fields.contains(&field)
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" & ")
}

/// Collects field failures without stopping at the first one.
#[derive(Debug, Default)]
pub struct Validator {
    fields: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` when `ok` is false.
    pub fn check(&mut self, ok: bool, error: FieldError) -> &mut Self {
        if !ok {
            self.fields.push(error);
        }
        self
    }

    pub fn reject(&mut self, error: FieldError) -> &mut Self {
        self.check(false, error)
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields: self.fields })
        }
    }
}
