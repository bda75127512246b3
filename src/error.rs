#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckCodeError {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },

    #[error("code too short: {code:?}")]
    TooShort { code: String },

    #[error("checksum mismatch in '{code}': expected '{expected}', found '{found}'")]
    ChecksumMismatch {
        code: String,
        expected: char,
        found: char,
    },
}

pub type Result<T> = std::result::Result<T, CheckCodeError>;
