use std::io::{BufRead, Write};

use bytechipper::{TokenDecoder, TokenEncoder, Tokenizer};

use crate::{
    input_output::{InputArgs, OutputArgs},
    tokenizer_args::TokenizerArgs,
    tokenizer_mode::{TokenizerMode, TokenizerModeArgs},
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        match self.tokenizer_mode.mode() {
            TokenizerMode::Encode => run_cat_encode(&mut reader, &mut writer, &tokenizer)?,
            TokenizerMode::Decode => run_cat_decode(&mut reader, &mut writer, &tokenizer)?,
        }

        Ok(())
    }
}

/// Encode each input line (end-of-line included) to one line of ids.
fn run_cat_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut line = String::new();
    let mut tokens: Vec<u32> = Vec::new();
    let mut count = 0usize;

    while reader.read_line(&mut line)? > 0 {
        tokens.clear();
        tokenizer.try_encode_append(&line, &mut tokens)?;
        line.clear();

        for (idx, token) in tokens.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        count += tokens.len();
    }

    log::info!("encoded {count} tokens");
    Ok(())
}

/// Decode each line of whitespace separated ids.
fn run_cat_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let tokens = line?
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()?;

        let bytes = tokenizer.try_decode_to_bytes(&tokens)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
    }
    Ok(())
}
