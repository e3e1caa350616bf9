#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Informational,
}

/// A status line shown to the user in one of the message regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub severity: Severity,
    pub text: String,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Informational,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Where a status message is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageRegion {
    RpsLogin,
    RpsGame,
    RpsPostgame,
    Table,
    Cipher,
}

/// Where generated text (table, cipher result) is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputRegion {
    Table,
    Plaintext,
    Ciphertext,
}
