//! Choreo compiler driver.
//!
//! Translates a Choreo source file to Go and, on request, hands the
//! result to the Go toolchain to build or run a native binary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use clap::Parser;

use choreo::Translator;

#[derive(Parser)]
#[command(
    name = "choreo",
    about = "Dance-themed toy language that translates to Go",
    version,
    after_help = "Examples:\n  \
        choreo hello.cho                # generate Go code\n  \
        choreo -c hello.cho             # compile to binary\n  \
        choreo -r hello.cho             # run immediately\n  \
        choreo -c -o myapp hello.cho    # compile with custom output name"
)]
struct Cli {
    /// Source file to translate
    input: PathBuf,

    /// Output name (Go file by default, binary with -c/-r)
    #[arg(short, long)]
    output: Option<String>,

    /// Compile the generated Go to a native binary
    #[arg(short, long)]
    compile: bool,

    /// Compile, run immediately, then remove the binary
    #[arg(short, long)]
    run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: &Cli) -> io::Result<()> {
    let source = fs::read_to_string(&cli.input)
        .map_err(|e| io::Error::other(format!("error reading {}: {e}", cli.input.display())))?;

    let go_code = Translator::translate(&source).map_err(|e| io::Error::other(e.to_string()))?;

    let base = cli
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());

    if !cli.compile && !cli.run {
        let go_file = cli.output.clone().unwrap_or_else(|| format!("{base}.go"));
        fs::write(&go_file, &go_code)
            .map_err(|e| io::Error::other(format!("error writing {go_file}: {e}")))?;
        println!("Generated {go_file}");
        return Ok(());
    }

    // Build from a temporary Go file so -c/-r leave no source behind.
    let tmp_go = std::env::temp_dir().join(format!("{base}_choreo.go"));
    fs::write(&tmp_go, &go_code)
        .map_err(|e| io::Error::other(format!("error writing {}: {e}", tmp_go.display())))?;

    let result = build_and_run(cli, &base, &tmp_go);
    let _ = fs::remove_file(&tmp_go);
    result
}

fn build_and_run(cli: &Cli, base: &str, tmp_go: &Path) -> io::Result<()> {
    let binary = cli.output.clone().unwrap_or_else(|| base.to_string());

    let status = Command::new("go")
        .args(["build", "-o", &binary])
        .arg(tmp_go)
        .status()
        .map_err(|e| io::Error::other(format!("failed to invoke go: {e}")))?;
    if !status.success() {
        return Err(io::Error::other("compilation failed"));
    }

    if cli.compile && !cli.run {
        println!("Compiled to {binary}");
    }

    if cli.run {
        let status = Command::new(format!("./{binary}"))
            .status()
            .map_err(|e| io::Error::other(format!("failed to run {binary}: {e}")));
        // The binary is a throwaway in run mode, even if it failed.
        let _ = fs::remove_file(&binary);
        if !status?.success() {
            return Err(io::Error::other("runtime error"));
        }
    }

    Ok(())
}
