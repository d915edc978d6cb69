use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use sha1_digest::{rand_seq, sha1_hex};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the SHA1 digest of each file, or of stdin when none is given
    Sum { paths: Vec<PathBuf> },
    /// Print the SHA1 digest of a string's UTF-8 bytes
    #[command(name = "string")]
    Text {
        #[arg(required = true)]
        text: String,
    },
    /// Hash freshly generated random strings
    Random {
        len: usize,

        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result: anyhow::Result<()> = match args.command {
        Command::Sum { paths } => sum(&paths),
        Command::Text { text } => string(&text).map_err(Into::into),
        Command::Random { len, count } => random(len, count).map_err(Into::into),
    };

    if let Err(err) = result {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn sum(paths: &[PathBuf]) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();

    if paths.is_empty() {
        let digest = sha1_hex(&read_stdin()?);
        writeln!(out, "{digest}  -")?;
        return Ok(());
    }

    for path in paths {
        let data = if path == Path::new("-") {
            read_stdin()?
        } else {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        };
        log::debug!("hashing {} ({} bytes)", path.display(), data.len());

        writeln!(out, "{}  {}", sha1_hex(&data), path.display())?;
    }

    Ok(())
}

fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut data = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut data)
        .context("failed to read stdin")?;
    log::debug!("hashing stdin ({} bytes)", data.len());
    Ok(data)
}

#[derive(Debug, Error)]
enum StringError {
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn string(text: &str) -> Result<(), StringError> {
    log::debug!("hashing {} byte string", text.len());
    writeln!(io::stdout().lock(), "{}", sha1_hex(text.as_bytes()))?;
    Ok(())
}

#[derive(Debug, Error)]
enum RandomError {
    #[error("count must be at least 1")]
    ZeroCount,

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn random(len: usize, count: usize) -> Result<(), RandomError> {
    if count == 0 {
        return Err(RandomError::ZeroCount);
    }

    let mut rng = rand::thread_rng();
    let mut out = io::stdout().lock();
    for _ in 0..count {
        let input = rand_seq(&mut rng, len);
        writeln!(out, "{}  {input}", sha1_hex(input.as_bytes()))?;
    }

    Ok(())
}
