//! # Error Types

/// Coarse classification of [`BytechipperError`]s.
///
/// * [`ErrorKind::Config`] errors abort tokenizer construction.
/// * [`ErrorKind::UnknownToken`] errors abort a single decode call.
/// * [`ErrorKind::Unreachable`] errors indicate a construction bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The vocabulary / merge / added-token configuration is invalid.
    Config,

    /// A decode call was given a token which is not in the vocabulary.
    UnknownToken,

    /// Internal state which construction should have ruled out.
    Unreachable,

    /// A per-call runtime failure (regex engine limits).
    Runtime,

    /// I/O failure while loading a configuration.
    Io,
}

/// Errors from bytechipper operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BytechipperError {
    /// A merge rule without the ``' '`` separator.
    #[error("merge rule {rule:?} has no ' ' separator")]
    MalformedMerge {
        /// The offending rule.
        rule: String,
    },

    /// A merge rule part, or its concatenation, is not in the vocab.
    #[error("merge rule {rule:?} references unknown surface {part:?}")]
    UnknownMergePart {
        /// The offending rule.
        rule: String,

        /// The surface string which failed lookup.
        part: String,
    },

    /// The vocab has no entry for a single byte surface.
    #[error("vocab has no entry for byte {byte:#04x} (surface {surface:?})")]
    MissingByteToken {
        /// The byte value.
        byte: u8,

        /// The surface character of the byte.
        surface: char,
    },

    /// An added token with empty content.
    #[error("added token ({token}) has empty content")]
    EmptyAddedToken {
        /// The added token id.
        token: u64,
    },

    /// An added token collides with a different vocab entry.
    #[error("added token {content:?} ({token}) conflicts with vocab entry {surface:?} ({existing})")]
    AddedTokenConflict {
        /// The added token's literal content.
        content: String,

        /// The added token id.
        token: u64,

        /// The surface of the conflicting entry.
        surface: String,

        /// The id of the conflicting entry.
        existing: u64,
    },

    /// Two surfaces claim the same token id.
    #[error("token ({token}) is assigned to both {first:?} and {second:?}")]
    DuplicateTokenId {
        /// The token id.
        token: u64,

        /// The first surface.
        first: String,

        /// The second surface.
        second: String,
    },

    /// A token id does not fit the target token type.
    #[error("token id ({id}) out of range for the token type")]
    TokenOutOfRange {
        /// The token id.
        id: u64,
    },

    /// A normalizer which is not a unicode normalization form.
    #[error("unsupported normalizer: {0}")]
    UnsupportedNormalizer(String),

    /// A vocab surface with characters outside the byte/surface alphabet.
    #[error("surface {surface:?} contains {ch:?}, which maps to no byte")]
    InvalidSurface {
        /// The surface string.
        surface: String,

        /// The unmapped character.
        ch: char,
    },

    /// A word split or added-token pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(String),

    /// A decode input token which is neither added nor in the vocab.
    #[error("unknown token: {token}")]
    UnknownToken {
        /// The token id.
        token: u64,
    },

    /// The regex engine failed while splitting words.
    #[error("segmentation failed: {0}")]
    Segmentation(String),

    /// Internal state which construction should have ruled out.
    #[error("unreachable state: {0}")]
    UnreachableState(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON parse error.
    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BytechipperError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        use BytechipperError::*;
        match self {
            UnknownToken { .. } => ErrorKind::UnknownToken,
            UnreachableState(_) => ErrorKind::Unreachable,
            Segmentation(_) => ErrorKind::Runtime,
            Io(_) => ErrorKind::Io,
            _ => ErrorKind::Config,
        }
    }

    /// Is this a construction-time configuration error?
    pub fn is_config_error(&self) -> bool {
        self.kind() == ErrorKind::Config
    }
}

/// Result type for bytechipper operations.
pub type BCResult<T> = core::result::Result<T, BytechipperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(
            BytechipperError::MalformedMerge {
                rule: "ab".to_string()
            }
            .kind(),
            ErrorKind::Config
        );
        assert!(BytechipperError::UnsupportedNormalizer("Lowercase".to_string()).is_config_error());

        assert_eq!(
            BytechipperError::UnknownToken { token: 7 }.kind(),
            ErrorKind::UnknownToken
        );
        assert_eq!(
            BytechipperError::UnreachableState("x".to_string()).kind(),
            ErrorKind::Unreachable
        );
        assert_eq!(
            BytechipperError::Segmentation("x".to_string()).kind(),
            ErrorKind::Runtime
        );

        let err: BytechipperError = std::io::Error::other("boom").into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_display() {
        let err = BytechipperError::MissingByteToken {
            byte: 0x20,
            surface: '\u{0120}',
        };
        assert_eq!(
            err.to_string(),
            "vocab has no entry for byte 0x20 (surface 'Ġ')"
        );

        assert_eq!(
            BytechipperError::UnknownToken { token: 51_277 }.to_string(),
            "unknown token: 51277"
        );
    }
}
