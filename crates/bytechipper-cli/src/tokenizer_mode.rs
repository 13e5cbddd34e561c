/// The tokenizer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    /// Encode from text to tokens.
    Encode,

    /// Decode from tokens to text.
    Decode,
}

/// Tokenizer mode argument group.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from text to tokens.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from tokens to text.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    decode: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode; the arg group guarantees exactly one flag.
    pub fn mode(&self) -> TokenizerMode {
        if self.decode {
            TokenizerMode::Decode
        } else {
            TokenizerMode::Encode
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        mode: TokenizerModeArgs,
    }

    #[test]
    fn test_mode() {
        let args = Harness::try_parse_from(["x", "--encode"]).unwrap();
        assert_eq!(args.mode.mode(), TokenizerMode::Encode);

        let args = Harness::try_parse_from(["x", "--decode"]).unwrap();
        assert_eq!(args.mode.mode(), TokenizerMode::Decode);

        assert!(Harness::try_parse_from(["x"]).is_err());
        assert!(Harness::try_parse_from(["x", "--encode", "--decode"]).is_err());
    }
}
