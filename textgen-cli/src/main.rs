use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::info;
use textgen_core::model::config::{DEFAULT_MAX_LEN, DEFAULT_PREFIX_LEN, GeneratorConfig};
use textgen_core::model::generator::Generator;

#[derive(Parser)]
#[command(name = "textgen", about = "Generate random text from word Markov chains")]
struct Cli {
    /// Max length of generated text in words
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max: usize,

    /// Length of markov chain prefix
    #[arg(long, default_value_t = DEFAULT_PREFIX_LEN)]
    prefix: usize,

    /// Fixed seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Input text files, read in order
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig { prefix_len: self.prefix, max_len: self.max, seed: self.seed }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut generator = Generator::new(&cli.config());

    // Every file feeds the same chain, each starting from an empty prefix
    for path in &cli.files {
        let observations = generator
            .load_file(path)
            .with_context(|| format!("Problem reading files: {}", path.display()))?;
        info!("{}: {} observations", path.display(), observations);
    }
    info!("Chain holds {} prefixes", generator.model().len());

    let written = write_text(&mut generator, BufWriter::new(io::stdout().lock()))?;
    info!("Generated {} words", written);

    Ok(())
}

/// Generates into `sink` and terminates the text with a newline.
///
/// The newline is written even after a failed generation; the generation
/// error is the one reported.
fn write_text<W: Write>(generator: &mut Generator, mut sink: W) -> anyhow::Result<usize> {
    let result = generator.generate(&mut sink);
    let newline = writeln!(sink).and_then(|()| sink.flush());
    let written = result.context("Problem generating text")?;
    newline.context("Problem generating text")?;
    Ok(written)
}
