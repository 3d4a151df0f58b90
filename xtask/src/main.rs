use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_PACKAGE: &str = "ad_forge_lambda";
const LAMBDA_BINARY: &str = "create_ad_lambda";
const DIST_DIR: &str = "dist/lambda";
const TESTED_PACKAGES: [&str; 2] = ["ad_forge_core", LAMBDA_PACKAGE];

type TaskResult = Result<(), String>;

#[derive(Parser)]
#[command(name = "xtask", about = "Task runner for the Ad-Forge workspace")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run CI checks
    Ci {
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Build the create-ad Lambda and zip it as a `bootstrap` artifact
    LambdaPackage {
        /// Target triple the Lambda runs on
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build without `--release`
        #[arg(long)]
        debug: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CiJob {
    /// rustfmt and clippy
    Lint,
    /// Tests for every workspace crate
    Test,
    /// Lint, then test
    Check,
}

impl CiJob {
    fn run(self) -> TaskResult {
        match self {
            Self::Lint => {
                cargo("check formatting", &["fmt", "--all", "--", "--check"])?;
                cargo(
                    "clippy",
                    &["clippy", "--all-targets", "--", "-D", "warnings"],
                )
            }
            Self::Test => TESTED_PACKAGES
                .into_iter()
                .try_for_each(|package| cargo(&format!("test {package}"), &["test", "-p", package])),
            Self::Check => Self::Lint.run().and_then(|()| Self::Test.run()),
        }
    }
}

fn main() -> ExitCode {
    let outcome = match Cli::parse().command {
        Commands::Ci { job } => job.run().map(|()| eprintln!("\nCI job passed.")),
        Commands::LambdaPackage { target, debug } => package_lambda(&target, debug)
            .map(|zip_path| eprintln!("\nPackaged {}", zip_path.display())),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("xtask: {message}");
            ExitCode::FAILURE
        }
    }
}

fn cargo(label: &str, args: &[&str]) -> TaskResult {
    eprintln!("\n== {label}: cargo {}", args.join(" "));
    let status = Command::new("cargo")
        .args(args)
        .status()
        .map_err(|error| format!("could not start cargo: {error}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("`cargo {}` failed ({status})", args.join(" ")))
    }
}

fn package_lambda(target: &str, debug: bool) -> Result<PathBuf, String> {
    require_target(target)?;

    let mut args = vec!["build", "-p", LAMBDA_PACKAGE, "--bin", LAMBDA_BINARY, "--target", target];
    if !debug {
        args.push("--release");
    }
    cargo("build lambda", &args)?;

    let profile_dir = if debug { "debug" } else { "release" };
    let binary = Path::new("target")
        .join(target)
        .join(profile_dir)
        .join(LAMBDA_BINARY);
    let zip_path = Path::new(DIST_DIR).join(format!("{LAMBDA_BINARY}.zip"));

    write_bootstrap_zip(&binary, &zip_path)
        .map_err(|error| format!("could not package {}: {error}", binary.display()))?;
    Ok(zip_path)
}

/// Fail early when rustup reports the target as missing. Without rustup the
/// build itself reports the problem.
fn require_target(target: &str) -> TaskResult {
    let Ok(output) = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
    else {
        return Ok(());
    };

    let installed = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() || installed.lines().any(|line| line.trim() == target) {
        return Ok(());
    }
    Err(format!(
        "rust target `{target}` is not installed; run `rustup target add {target}`"
    ))
}

/// Lambda custom runtimes start the executable named `bootstrap` at the zip
/// root.
fn write_bootstrap_zip(binary: &Path, zip_path: &Path) -> io::Result<()> {
    let bytes = fs::read(binary)?;
    if let Some(parent) = zip_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut zip = ZipWriter::new(File::create(zip_path)?);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file("bootstrap", options)?;
    zip.write_all(&bytes)?;
    zip.finish()?;
    Ok(())
}
