use std::path::PathBuf;

use bytechipper::{Tokenizer, TokenizerOptions, TokenizerSpec, io::load_tokenizer_json_path};

/// Tokenizer selection argument group.
#[derive(clap::Args, Debug)]
pub struct TokenizerArgs {
    /// Path to a HuggingFace "tokenizer.json" file.
    #[clap(long)]
    pub tokenizer: PathBuf,

    /// Disable the leading-space correction.
    #[clap(long)]
    pub no_space_correction: bool,
}

impl TokenizerArgs {
    /// The [`TokenizerOptions`] selected by these args.
    pub fn options(&self) -> TokenizerOptions {
        TokenizerOptions::default().with_leading_space_correction(!self.no_space_correction)
    }

    /// Load the configuration.
    pub fn load_spec(&self) -> Result<TokenizerSpec, Box<dyn std::error::Error>> {
        Ok(load_tokenizer_json_path(&self.tokenizer)?)
    }

    /// Load and build the tokenizer.
    pub fn load_tokenizer(&self) -> Result<Tokenizer<u32>, Box<dyn std::error::Error>> {
        let spec = self.load_spec()?;
        Ok(self.options().build(&spec)?)
    }
}
