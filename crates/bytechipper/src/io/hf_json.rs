//! # HuggingFace ``tokenizer.json``

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde::Deserialize;
use serde_json::Value;

use crate::{
    TokenType,
    Tokenizer,
    TokenizerOptions,
    config::{AddedTokenSpec, TokenizerSpec},
    errors::{BCResult, BytechipperError},
    normalization::NormalizationForm,
    types::BCHashMap,
};

#[derive(Debug, Deserialize)]
struct HfTokenizerJson {
    #[serde(default)]
    added_tokens: Vec<HfAddedToken>,

    #[serde(default)]
    normalizer: Value,

    #[serde(default)]
    pre_tokenizer: Value,

    model: HfModel,
}

#[derive(Debug, Deserialize)]
struct HfAddedToken {
    id: u32,
    content: String,
}

#[derive(Debug, Deserialize)]
struct HfModel {
    #[serde(rename = "type", default)]
    kind: Option<String>,

    vocab: BCHashMap<String, u32>,

    #[serde(default)]
    merges: Vec<HfMerge>,
}

/// Merges are either ``"a b"`` or ``["a", "b"]``.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HfMerge {
    Joined(String),
    Pair(String, String),
}

impl HfMerge {
    fn into_rule(self) -> String {
        match self {
            HfMerge::Joined(rule) => rule,
            HfMerge::Pair(left, right) => format!("{left} {right}"),
        }
    }
}

fn node_type(node: &Value) -> Option<&str> {
    node.get("type").and_then(Value::as_str)
}

/// Resolve a ``normalizer`` node to a [`NormalizationForm`].
///
/// Accepts ``null``, a single ``{ "type": "NFC" }`` style node, or a
/// ``Sequence`` with at most one normalization form.
pub fn parse_normalizer(node: &Value) -> BCResult<NormalizationForm> {
    if node.is_null() {
        return Ok(NormalizationForm::None);
    }

    match node_type(node) {
        Some("Sequence") => {
            let children = node
                .get("normalizers")
                .and_then(Value::as_array)
                .ok_or_else(|| BytechipperError::UnsupportedNormalizer(node.to_string()))?;

            match children.as_slice() {
                [] => Ok(NormalizationForm::None),
                [child] => parse_normalizer(child),
                _ => Err(BytechipperError::UnsupportedNormalizer(node.to_string())),
            }
        }
        Some(name) => NormalizationForm::from_name(name),
        None => Err(BytechipperError::UnsupportedNormalizer(node.to_string())),
    }
}

fn check_pre_tokenizer(node: &Value) {
    if node.is_null() {
        return;
    }
    match node_type(node) {
        Some("ByteLevel") => {}
        Some("Sequence") => {
            if let Some(children) = node.get("pretokenizers").and_then(Value::as_array) {
                children.iter().for_each(check_pre_tokenizer);
            }
        }
        other => log::warn!(
            "ignoring pre_tokenizer {:?}; words are split with the GPT-2 pattern",
            other.unwrap_or("<untyped>")
        ),
    }
}

impl HfTokenizerJson {
    fn into_spec(self) -> BCResult<TokenizerSpec> {
        if let Some(kind) = self.model.kind.as_deref()
            && kind != "BPE"
        {
            log::warn!("model type {kind:?} is not \"BPE\"; loading it as BPE");
        }
        check_pre_tokenizer(&self.pre_tokenizer);

        Ok(TokenizerSpec {
            vocab: self.model.vocab,
            merges: self
                .model
                .merges
                .into_iter()
                .map(HfMerge::into_rule)
                .collect(),
            added_tokens: self
                .added_tokens
                .into_iter()
                .map(|t| AddedTokenSpec::new(t.id, t.content))
                .collect(),
            normalizer: parse_normalizer(&self.normalizer)?,
        })
    }
}

/// Parse a ``tokenizer.json`` document.
pub fn parse_tokenizer_json(json: &str) -> BCResult<TokenizerSpec> {
    let json: HfTokenizerJson = serde_json::from_str(json)?;
    json.into_spec()
}

/// Read a ``tokenizer.json`` document.
pub fn read_tokenizer_json<R: Read>(reader: R) -> BCResult<TokenizerSpec> {
    let json: HfTokenizerJson = serde_json::from_reader(reader)?;
    json.into_spec()
}

/// Load a ``tokenizer.json`` file.
///
/// ## Arguments
/// * `path` - The path to the file.
///
/// ## Returns
/// The parsed configuration; nothing is validated until it is built.
pub fn load_tokenizer_json_path(path: impl AsRef<Path>) -> BCResult<TokenizerSpec> {
    let path = path.as_ref();
    log::debug!("loading tokenizer config: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    read_tokenizer_json(reader)
}

/// Load a ``tokenizer.json`` file and build a [`Tokenizer`].
pub fn load_tokenizer_path<T: TokenType>(
    path: impl AsRef<Path>,
    options: &TokenizerOptions,
) -> BCResult<Tokenizer<T>> {
    options.build(&load_tokenizer_json_path(path)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempdir::TempDir;

    use super::*;
    use crate::{
        ErrorKind,
        testing::{fixture_spec, fixture_tokenizer_json},
    };

    #[test]
    fn test_parse_fixture() {
        let spec = parse_tokenizer_json(&fixture_tokenizer_json()).unwrap();
        assert_eq!(spec, fixture_spec());
    }

    #[test]
    fn test_load_path() {
        let dir = TempDir::new("bytechipper_hf_json").unwrap();
        let path = dir.path().join("tokenizer.json");
        {
            let mut file = File::create(&path).unwrap();
            file.write_all(fixture_tokenizer_json().as_bytes()).unwrap();
        }

        assert_eq!(load_tokenizer_json_path(&path).unwrap(), fixture_spec());

        let tokenizer =
            load_tokenizer_path::<u32>(&path, &TokenizerOptions::default()).unwrap();
        assert_eq!(tokenizer.encode("hello world").unwrap(), vec![259, 264]);
    }

    #[test]
    fn test_vocab_entries() {
        let spec = parse_tokenizer_json(&fixture_tokenizer_json()).unwrap();
        let vocab: BCHashMap<String, u32> = spec.vocab;
        assert_eq!(vocab.len(), fixture_spec().vocab.len());
        assert_eq!(vocab["Ġhello"], 269);

        let err = parse_tokenizer_json(r#"{"model": {"vocab": {"a": -1}}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new("bytechipper_hf_json").unwrap();
        let err = load_tokenizer_json_path(dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_pair_merges() {
        let mut doc: Value = serde_json::from_str(&fixture_tokenizer_json()).unwrap();
        let pairs: Vec<Value> = fixture_spec()
            .merges
            .iter()
            .map(|rule| {
                let (a, b) = rule.split_once(' ').unwrap();
                json!([a, b])
            })
            .collect();
        doc["model"]["merges"] = Value::Array(pairs);

        let spec = parse_tokenizer_json(&doc.to_string()).unwrap();
        assert_eq!(spec.merges, fixture_spec().merges);
    }

    #[test]
    fn test_normalizers() {
        assert_eq!(
            parse_normalizer(&Value::Null).unwrap(),
            NormalizationForm::None
        );
        assert_eq!(
            parse_normalizer(&json!({"type": "NFKC"})).unwrap(),
            NormalizationForm::Nfkc
        );
        assert_eq!(
            parse_normalizer(&json!({"type": "Sequence", "normalizers": []})).unwrap(),
            NormalizationForm::None
        );
        assert_eq!(
            parse_normalizer(&json!({"type": "Sequence", "normalizers": [{"type": "NFC"}]}))
                .unwrap(),
            NormalizationForm::Nfc
        );

        for bad in [
            json!({"type": "Lowercase"}),
            json!({"type": "Sequence", "normalizers": [{"type": "NFC"}, {"type": "NFD"}]}),
            json!({"kind": "NFC"}),
            json!("NFC"),
        ] {
            let err = parse_normalizer(&bad).unwrap_err();
            assert!(err.is_config_error(), "{bad}");
        }
    }

    #[test]
    fn test_bad_documents() {
        assert_eq!(parse_tokenizer_json("{").unwrap_err().kind(), ErrorKind::Config);
        assert!(parse_tokenizer_json(r#"{"added_tokens": []}"#).is_err());

        let mut doc: Value = serde_json::from_str(&fixture_tokenizer_json()).unwrap();
        doc["normalizer"] = json!({"type": "Lowercase"});
        assert!(matches!(
            parse_tokenizer_json(&doc.to_string()),
            Err(BytechipperError::UnsupportedNormalizer(_))
        ));
    }

    #[test]
    fn test_foreign_pre_tokenizer_is_ignored() {
        let mut doc: Value = serde_json::from_str(&fixture_tokenizer_json()).unwrap();
        doc["pre_tokenizer"] = json!({"type": "Whitespace"});
        assert_eq!(parse_tokenizer_json(&doc.to_string()).unwrap(), fixture_spec());
    }
}
