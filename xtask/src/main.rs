// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! detfix repository maintenance tasks.
//!
//! A single entrypoint for repo automation via `cargo xtask …`.
//!
//! Invariants:
//! - This is *not* production runtime code; it may invoke external tools (`python3`).
//! - Generated artifacts must be byte-for-byte reproducible; `gen-luts --check`
//!   fails when the committed tables drift from the generator.

mod audit;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::Command;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "detfix repo maintenance tasks (cargo xtask …)",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare every kernel function against libm over a deterministic sweep.
    Audit(audit::AuditArgs),
    /// Regenerate the polynomial lookup tables from `scripts/gen_poly_luts.py`.
    GenLuts(GenLutsArgs),
}

#[derive(Args)]
struct GenLutsArgs {
    /// Generator script (requires `python3` with `mpmath`).
    #[arg(long, default_value = "scripts/gen_poly_luts.py")]
    script: PathBuf,

    /// Table module to write.
    #[arg(long, default_value = "crates/detfix/src/math/lut.rs")]
    out: PathBuf,

    /// Fail instead of writing when the output would change.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Audit(args) => audit::run(&args),
        Commands::GenLuts(args) => run_gen_luts(&args),
    }
}

fn run_gen_luts(args: &GenLutsArgs) -> Result<()> {
    let output = Command::new("python3")
        .arg(&args.script)
        .output()
        .context("failed to spawn `python3` (is Python 3 installed?)")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "lookup table generation failed (exit status: {}): {}",
            output.status,
            stderr.trim()
        );
    }
    let generated =
        String::from_utf8(output.stdout).context("generator emitted non-UTF-8 output")?;
    if !generated.contains("pub(crate) static") {
        bail!("generator output contains no tables; refusing to overwrite");
    }

    if args.check {
        let current = std::fs::read_to_string(&args.out)
            .with_context(|| format!("failed to read {}", args.out.display()))?;
        if current != generated {
            bail!(
                "{} is stale; run `cargo xtask gen-luts` and commit the result",
                args.out.display()
            );
        }
        tracing::info!(path = %args.out.display(), "lookup tables up to date");
        return Ok(());
    }

    std::fs::write(&args.out, &generated)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    tracing::info!(
        path = %args.out.display(),
        bytes = generated.len(),
        "lookup tables regenerated"
    );
    Ok(())
}
