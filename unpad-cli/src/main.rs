use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use unpad_core::{unpack, UnpackError, EXIT_IO};

/// Strip padding in front of an embedded ELF image
#[derive(Parser)]
#[command(
    name = "unpack_padded_elf",
    about = "Copy the ELF image out of a padded file, dropping everything before its magic",
    version,
    after_help = "Paths starting with '-' go after `--`, e.g. `unpack_padded_elf -- -in.so out.so`."
)]
struct Cli {
    /// Padded (or bare) input file
    input: PathBuf,

    /// Where to write the ELF image; parent directories are created
    output: PathBuf,

    /// Print a JSON summary to stdout on success
    #[arg(long)]
    json: bool,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<()> {
    let report = unpack(&cli.input, &cli.output)?;
    log::info!(
        "Wrote {} bytes to {}",
        report.written,
        report.output.display()
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{json}");
    }
    Ok(())
}

fn main() -> ExitCode {
    // Usage errors exit with status 2 from inside clap.
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            let code = err
                .downcast_ref::<UnpackError>()
                .map(UnpackError::exit_code)
                .unwrap_or(EXIT_IO);
            ExitCode::from(code)
        }
    }
}
