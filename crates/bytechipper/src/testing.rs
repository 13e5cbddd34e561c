//! # Test Fixtures
//!
//! A small GPT-2 style configuration: every byte surface is its own token
//! (with id equal to the byte value), plus a handful of merges around
//! ``"hello world"``.

use crate::{
    Tokenizer,
    TokenizerOptions,
    UnifiedTokenVocab,
    config::{AddedTokenSpec, TokenizerSpec},
    normalization::NormalizationForm,
    types::{BCHashMap, TokenType},
    vocab::byte_surface::byte_to_surface,
};

/// Merge rules of the fixture, in priority order.
pub const FIXTURE_MERGES: &[&str] = &[
    "h e",
    "l l",
    "he ll",
    "hell o",
    "o r",
    "Ġ w",
    "Ġw or",
    "l d",
    "Ġwor ld",
    "Ġ t",
    "Ġt he",
    "i t",
    "' s",
];

/// Added tokens of the fixture, as ``(id, content)``.
pub const FIXTURE_ADDED_TOKENS: &[(u32, &str)] = &[(300, "<|endoftext|>"), (301, "<|pad|>")];

/// The fixture ``{ surface -> id }`` map.
///
/// Merge results take ids ``256..`` in merge order; ``"Ġhello"`` is ``269``.
pub fn fixture_raw_vocab() -> BCHashMap<String, u32> {
    let mut vocab: BCHashMap<String, u32> = (0..=255u8)
        .map(|b| (byte_to_surface(b).to_string(), b as u32))
        .collect();

    let mut next = 256;
    for rule in FIXTURE_MERGES {
        vocab.insert(rule.replace(' ', ""), next);
        next += 1;
    }
    vocab.insert("Ġhello".to_string(), next);

    vocab
}

/// The fixture merge rules.
pub fn fixture_merges() -> Vec<String> {
    FIXTURE_MERGES.iter().map(|s| s.to_string()).collect()
}

/// The fixture configuration.
pub fn fixture_spec() -> TokenizerSpec {
    TokenizerSpec {
        vocab: fixture_raw_vocab(),
        merges: fixture_merges(),
        added_tokens: FIXTURE_ADDED_TOKENS
            .iter()
            .map(|&(id, content)| AddedTokenSpec::new(id, content))
            .collect(),
        normalizer: NormalizationForm::None,
    }
}

/// The fixture vocab, built with default options.
pub fn fixture_vocab<T: TokenType>() -> UnifiedTokenVocab<T> {
    UnifiedTokenVocab::from_spec(&fixture_spec(), &TokenizerOptions::default())
        .expect("fixture vocab")
}

/// The fixture tokenizer, built with default options.
pub fn fixture_tokenizer<T: TokenType>() -> Tokenizer<T> {
    TokenizerOptions::default()
        .build(&fixture_spec())
        .expect("fixture tokenizer")
}

/// The fixture as a HuggingFace ``tokenizer.json`` document.
#[cfg(feature = "json")]
pub fn fixture_tokenizer_json() -> String {
    let added: Vec<serde_json::Value> = FIXTURE_ADDED_TOKENS
        .iter()
        .map(|&(id, content)| {
            serde_json::json!({
                "id": id,
                "content": content,
                "single_word": false,
                "lstrip": false,
                "rstrip": false,
                "normalized": false,
                "special": true,
            })
        })
        .collect();

    let vocab: std::collections::BTreeMap<String, u32> = fixture_raw_vocab().into_iter().collect();

    serde_json::json!({
        "version": "1.0",
        "added_tokens": added,
        "normalizer": null,
        "pre_tokenizer": {
            "type": "ByteLevel",
            "add_prefix_space": false,
            "trim_offsets": true,
            "use_regex": true,
        },
        "decoder": {
            "type": "ByteLevel",
        },
        "model": {
            "type": "BPE",
            "vocab": vocab,
            "merges": FIXTURE_MERGES,
        },
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_ids() {
        let vocab = fixture_raw_vocab();
        assert_eq!(vocab.len(), 256 + FIXTURE_MERGES.len() + 1);
        assert_eq!(vocab["Ġ"], 32);
        assert_eq!(vocab["hello"], 259);
        assert_eq!(vocab["Ġworld"], 264);
        assert_eq!(vocab["'s"], 268);
        assert_eq!(vocab["Ġhello"], 269);
    }
}
