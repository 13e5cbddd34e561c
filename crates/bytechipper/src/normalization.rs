//! # Unicode Normalization
//!
//! Text is normalized before added-token splitting and word segmentation.

use std::borrow::Cow;

use unicode_normalization::{
    IsNormalized,
    UnicodeNormalization,
    is_nfc_quick,
    is_nfd_quick,
    is_nfkc_quick,
    is_nfkd_quick,
};

use crate::errors::{BCResult, BytechipperError};

/// A unicode normalization form.
///
/// Parses from the HuggingFace normalizer names (``"NFC"``, ``"NFKC"``, ...),
/// case-insensitively.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr
)]
#[strum(ascii_case_insensitive)]
pub enum NormalizationForm {
    /// No normalization.
    #[default]
    #[strum(serialize = "none")]
    None,

    /// Canonical composition.
    #[strum(serialize = "NFC")]
    Nfc,

    /// Canonical decomposition.
    #[strum(serialize = "NFD")]
    Nfd,

    /// Compatibility composition.
    #[strum(serialize = "NFKC")]
    Nfkc,

    /// Compatibility decomposition.
    #[strum(serialize = "NFKD")]
    Nfkd,
}

impl NormalizationForm {
    /// Parse a normalizer name.
    ///
    /// ## Returns
    /// The form, or [`BytechipperError::UnsupportedNormalizer`].
    pub fn from_name(name: &str) -> BCResult<Self> {
        name.parse()
            .map_err(|_| BytechipperError::UnsupportedNormalizer(name.to_string()))
    }

    /// Normalize `text`.
    ///
    /// Borrows when the quick-check reports `text` is already normalized.
    pub fn normalize<'a>(
        &self,
        text: &'a str,
    ) -> Cow<'a, str> {
        let (quick, full): (IsNormalized, fn(&str) -> String) = match self {
            Self::None => return Cow::Borrowed(text),
            Self::Nfc => (is_nfc_quick(text.chars()), |t| t.nfc().collect()),
            Self::Nfd => (is_nfd_quick(text.chars()), |t| t.nfd().collect()),
            Self::Nfkc => (is_nfkc_quick(text.chars()), |t| t.nfkc().collect()),
            Self::Nfkd => (is_nfkd_quick(text.chars()), |t| t.nfkd().collect()),
        };

        if quick == IsNormalized::Yes {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(full(text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            NormalizationForm::from_name("NFC").unwrap(),
            NormalizationForm::Nfc
        );
        assert_eq!(
            NormalizationForm::from_name("nfkd").unwrap(),
            NormalizationForm::Nfkd
        );
        assert_eq!(
            NormalizationForm::from_name("none").unwrap(),
            NormalizationForm::None
        );
        assert!(matches!(
            NormalizationForm::from_name("Lowercase"),
            Err(BytechipperError::UnsupportedNormalizer(name)) if name == "Lowercase"
        ));

        assert_eq!(NormalizationForm::Nfkc.to_string(), "NFKC");
    }

    #[test]
    fn test_normalize() {
        let composed = "caf\u{00e9}";
        let decomposed = "cafe\u{0301}";

        assert!(matches!(
            NormalizationForm::Nfc.normalize(composed),
            Cow::Borrowed(_)
        ));
        assert_eq!(NormalizationForm::Nfc.normalize(decomposed), composed);
        assert_eq!(NormalizationForm::Nfd.normalize(composed), decomposed);

        assert_eq!(NormalizationForm::Nfkc.normalize("\u{fb01}"), "fi");
        assert_eq!(NormalizationForm::Nfc.normalize("\u{fb01}"), "\u{fb01}");

        assert_eq!(NormalizationForm::None.normalize(decomposed), decomposed);
    }
}
