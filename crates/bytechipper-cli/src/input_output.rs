use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

/// ``None`` for stdio; ``"-"`` is an explicit request for stdio.
fn file_path(arg: &Option<PathBuf>) -> Option<&PathBuf> {
    arg.as_ref().filter(|p| p.as_os_str() != "-")
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.input) {
            Some(path) => {
                log::debug!("reading {}", path.display());
                Box::new(BufReader::new(File::open(path)?))
            }
            None => Box::new(BufReader::new(std::io::stdin().lock())),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.output) {
            Some(path) => {
                log::debug!("writing {}", path.display());
                Box::new(BufWriter::new(File::create(path)?))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
