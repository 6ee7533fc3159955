use anyhow::{Context, Result};
use ppu_ram_asm_config::Config;
use ppu_ram_asm_engine::{ImageSummary, Layout, assemble, io};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

/// Paths given on the command line. Either may be left to the config file.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliPaths {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl CliPaths {
    /// Parses `[input] [output]`. Returns `None` on too many arguments.
    fn parse(args: &[String]) -> Option<Self> {
        match args {
            [_] => Some(Self::default()),
            [_, input] => Some(Self {
                input: Some(PathBuf::from(input)),
                output: None,
            }),
            [_, input, output] => Some(Self {
                input: Some(PathBuf::from(input)),
                output: Some(PathBuf::from(output)),
            }),
            _ => None,
        }
    }

    fn is_complete(&self) -> bool {
        self.input.is_some() && self.output.is_some()
    }

    /// Fills missing paths from the config, then from the built-in defaults.
    fn resolve(self, config: &Config) -> (PathBuf, PathBuf) {
        (
            self.input.unwrap_or_else(|| config.input_or_default()),
            self.output.unwrap_or_else(|| config.output_or_default()),
        )
    }
}

/// Reads, assembles and writes one image. The output file is only created
/// once the whole source has encoded.
fn run(input: &Path, output: &Path) -> Result<ImageSummary> {
    let source = io::read_source(input)
        .with_context(|| format!("Failed to read input '{}'", input.display()))?;

    let image = assemble(&source, &Layout::PPU_RAM)
        .with_context(|| format!("Failed to assemble '{}'", input.display()))?;

    io::write_image(output, &image)
        .with_context(|| format!("Failed to write output '{}'", output.display()))?;

    Ok(image.summary())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "ppu-ram-asm".to_string());

    let Some(cli_paths) = CliPaths::parse(&args) else {
        eprintln!("Usage: {program_name} [input-file] [output-file]");
        process::exit(1);
    };

    // Only consult the config file for paths the command line left out
    let config = if cli_paths.is_complete() {
        Config::default()
    } else {
        match Config::load() {
            Ok(Some(config)) => {
                log::info!("Loaded config from {}", Config::config_path().display());
                config
            }
            Ok(None) => Config::default(),
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {program_name} [input-file] [output-file]");
                process::exit(1);
            }
        }
    };

    let (input, output) = cli_paths.resolve(&config);
    log::info!("Assembling {} -> {}", input.display(), output.display());

    let summary = run(&input, &output)?;
    log::info!(
        "Wrote {}: {} sprites ({} plane 0 words, {} plane 1 words), {} backgrounds ({} words)",
        output.display(),
        summary.sprites,
        summary.plane0_words,
        summary.plane1_words,
        summary.backgrounds,
        summary.nametable_words
    );

    Ok(())
}
