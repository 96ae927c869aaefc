//! Custom cargo commands for the snippet-index crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz [S]  - Run every fuzz target for S seconds (default 30)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Minimum number of contract checks expected under src/verify.
const MIN_CONTRACT_MARKERS: usize = 4;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let seconds = match env::args().nth(2) {
                Some(arg) => arg
                    .parse()
                    .with_context(|| format!("Invalid fuzz duration {:?}", arg))?,
                None => 30,
            };
            fuzz(seconds)?;
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify       Run full verification suite (markers, debug + release tests, clippy, fuzz targets)
  test         Run all Rust tests
  check        Quick check (cargo check + test + clippy)
  bench        Run benchmarks
  fuzz [SECS]  Run every fuzz target for SECS seconds (needs cargo-fuzz + nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("snippet-index Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract checks present\n");

    // Debug build: contracts active
    println!("[2/5] Running tests (debug, contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Debug tests passed\n");

    // Release build: contracts compiled out, behavior must not change
    println!("[3/5] Running tests (release, contracts off)...");
    run_cargo(&["test", "--release", "--quiet"])?;
    println!("✓ Release tests passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Checking fuzz targets are registered...");
    let targets = fuzz_targets()?;
    println!("✓ {} fuzz targets registered\n", targets.len());

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run each fuzz target for a fixed time
fn fuzz(seconds: u64) -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", seconds);

    for target in fuzz_targets()? {
        println!("Fuzzing {} for {}s...", target, seconds);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", &target, "--", &max_time])
            .current_dir(&root)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

        if !status.success() {
            bail!("Fuzz target {} failed", target);
        }
    }

    println!("\n✓ All fuzz targets ran clean");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Count `Contract violation` messages in src/verify. Fewer than expected
/// means a check was dropped.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/verify/contracts.rs"))
        .context("Failed to read src/verify/contracts.rs")?;

    let count = contracts
        .lines()
        .filter(|line| line.contains("\"Contract violation:"))
        .count();

    if count < MIN_CONTRACT_MARKERS {
        bail!(
            "Expected at least {} contract checks, found {}. Someone may have removed one!",
            MIN_CONTRACT_MARKERS,
            count
        );
    }

    Ok(())
}

/// Fuzz target names from fuzz/Cargo.toml, each checked to exist on disk.
fn fuzz_targets() -> Result<Vec<String>> {
    let fuzz_dir = project_root()?.join("fuzz");
    let manifest = std::fs::read_to_string(fuzz_dir.join("Cargo.toml"))
        .context("Failed to read fuzz/Cargo.toml")?;

    let mut targets = Vec::new();
    let mut name: Option<String> = None;
    for line in manifest.lines().map(str::trim) {
        if let Some(value) = toml_string_value(line, "name") {
            name = Some(value.to_string());
        } else if let Some(path) = toml_string_value(line, "path") {
            if !path.starts_with("fuzz_targets/") {
                continue;
            }
            if !fuzz_dir.join(path).exists() {
                bail!("Fuzz target file {} is missing", path);
            }
            if let Some(name) = name.take() {
                targets.push(name);
            }
        }
    }

    if targets.is_empty() {
        bail!("No fuzz targets found in fuzz/Cargo.toml");
    }
    Ok(targets)
}

/// `key = "value"` → `value`
fn toml_string_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?.trim_start().strip_prefix('=')?;
    rest.trim().strip_prefix('"')?.strip_suffix('"')
}
