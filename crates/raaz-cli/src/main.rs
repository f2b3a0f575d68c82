// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The `raaz` command-line tool.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use raaz::hash::{digest_of_file, Blake2b, Blake2s, Sha256, Sha512};
use raaz::rand::{ChaChaPrg, PRG_NAME};

#[derive(Parser)]
#[command(name = "raaz")]
#[command(about = "Checksums, random bytes and build info from the raaz library")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the digest of each file, one `<hex>  <path>` line per file
    Checksum {
        /// Hash to use
        #[arg(value_enum)]
        hash: HashAlgo,
        /// Files to digest
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Write random bytes to stdout
    Rand {
        /// Number of bytes; omit to stream until stdout closes
        #[arg(short = 'n', long = "bytes")]
        bytes: Option<u64>,
    },

    /// Print library version, PRG and enabled implementations
    Info,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HashAlgo {
    Sha256,
    Sha512,
    Blake2b,
    Blake2s,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("raaz: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Checksum { hash, files } => {
            let mut stdout = io::stdout().lock();
            let all_ok = run_checksum(hash, &files, &mut stdout)?;
            Ok(if all_ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Rand { bytes } => {
            let mut stdout = io::stdout().lock();
            run_rand(bytes, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Info => {
            let mut stdout = io::stdout().lock();
            run_info(&mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Digests each file in order, returning whether every file succeeded.
/// A file that cannot be read is reported on stderr without aborting the
/// remaining files.
fn run_checksum(algo: HashAlgo, files: &[PathBuf], out: &mut dyn Write) -> Result<bool> {
    tracing::debug!(?algo, files = files.len(), "checksum start");

    let mut failed = false;
    for path in files {
        match checksum_file(algo, path) {
            Ok(hex) => writeln!(out, "{hex}  {}", path.display())
                .context("writing checksum line")?,
            Err(err) => {
                eprintln!("raaz: {}: {err}", path.display());
                failed = true;
            }
        }
    }

    Ok(!failed)
}

fn checksum_file(algo: HashAlgo, path: &Path) -> io::Result<String> {
    match algo {
        HashAlgo::Sha256 => digest_of_file::<Sha256>(path).map(|d| d.to_string()),
        HashAlgo::Sha512 => digest_of_file::<Sha512>(path).map(|d| d.to_string()),
        HashAlgo::Blake2b => digest_of_file::<Blake2b>(path).map(|d| d.to_string()),
        HashAlgo::Blake2s => digest_of_file::<Blake2s>(path).map(|d| d.to_string()),
    }
}

/// Writes `bytes` random bytes to `out`, or streams indefinitely when
/// `bytes` is `None`. A closed pipe ends the stream without error.
fn run_rand(bytes: Option<u64>, out: &mut dyn Write) -> Result<()> {
    let mut prg = ChaChaPrg::new().context("initialising the random generator")?;
    if !prg.is_state_locked() {
        tracing::warn!("PRG state page could not be locked; proceeding unlocked");
    }

    let mut chunk = Zeroizing::new([0u8; 1024]);
    let mut remaining = bytes;

    loop {
        let want = match remaining {
            Some(0) => break,
            Some(n) => (n.min(chunk.len() as u64)) as usize,
            None => chunk.len(),
        };

        prg.fill(&mut chunk[..want])
            .context("drawing random bytes")?;

        match out.write_all(&chunk[..want]) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => break,
            Err(err) => return Err(err).context("writing random bytes"),
        }

        if let Some(n) = remaining.as_mut() {
            *n -= want as u64;
        }
    }

    out.flush().ok();
    Ok(())
}

fn run_info(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "raaz {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "prg: {PRG_NAME}")?;
    writeln!(out, "hashes: sha256 sha512 blake2b blake2s sha1 (legacy, hmac only)")?;
    writeln!(out, "ciphers: chacha20")?;
    Ok(())
}
