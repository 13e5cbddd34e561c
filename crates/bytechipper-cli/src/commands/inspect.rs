use std::io::Write;

use bytechipper::{TokenType, UnifiedTokenVocab};

use crate::{input_output::OutputArgs, tokenizer_args::TokenizerArgs};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.load_tokenizer()?;
        let mut writer = self.output.open_writer()?;

        write_summary(&mut writer, tokenizer.vocab())?;
        writer.flush()?;
        Ok(())
    }
}

fn write_summary<T: TokenType>(
    writer: &mut dyn Write,
    vocab: &UnifiedTokenVocab<T>,
) -> std::io::Result<()> {
    writeln!(writer, "vocab size: {}", vocab.len())?;
    if let Some(max) = vocab.max_token() {
        writeln!(writer, "max token: {max}")?;
    }
    writeln!(writer, "merges: {}", vocab.merges().len())?;
    writeln!(writer, "normalizer: {}", vocab.normalizer())?;

    match vocab.space_correction() {
        Some(correction) => {
            writeln!(writer, "space sentinel: {}", correction.sentinel())?;
            writeln!(writer, "space corrections: {}", correction.len())?;
        }
        None => writeln!(writer, "space correction: disabled")?,
    }

    writeln!(writer, "added tokens: {}", vocab.added_tokens().len())?;
    for added in vocab.added_tokens().entries() {
        writeln!(writer, "  {}: {:?}", added.token(), added.content())?;
    }
    Ok(())
}
