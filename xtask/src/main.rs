//! Custom cargo commands for the giskb crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask features  - Test every feature combination
//!   cargo xtask check     - Quick check
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Feature sets the crate must build and pass tests with.
const FEATURE_SETS: &[&[&str]] = &[
    &[],
    &["--no-default-features"],
    &["--no-default-features", "--features", "parallel"],
    &["--no-default-features", "--features", "unicode-normalization"],
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("features") => features()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (fmt + tests + features + clippy + weights)
  test      Run all Rust tests
  features  Run tests under every feature combination
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("giskb Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking formatting...");
    run_cargo(&["fmt", "--all", "--", "--check"])?;
    println!("✓ Formatting clean\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Testing feature combinations...");
    features()?;
    println!("✓ Every feature set passes\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Checking field weights...");
    verify_weights()?;
    println!("✓ Field weights unchanged\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Tests under each feature set
fn features() -> Result<()> {
    for set in FEATURE_SETS {
        let mut args = vec!["test", "--quiet", "--lib", "--tests"];
        args.extend_from_slice(set);
        println!("  cargo {}", args.join(" "));
        run_cargo(&args)?;
    }
    Ok(())
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

/// The production weight table. Ranking output is compared against these, so a
/// change must be deliberate.
const EXPECTED_WEIGHTS: &[(&str, f64)] = &[
    ("TOPIC_WEIGHT", 10.0),
    ("TOPIC_CODE_WEIGHT", 8.0),
    ("NUMBER_WEIGHT", 7.0),
    ("TAGS_WEIGHT", 6.0),
    ("RESPONSE_TEXT_WEIGHT", 5.0),
    ("APPEAL_TEXT_WEIGHT", 4.0),
    ("ADDRESS_WEIGHT", 3.0),
    ("EXECUTOR_WEIGHT", 3.0),
    ("FUZZY_TOPIC_FACTOR", 0.5),
];

fn verify_weights() -> Result<()> {
    let root = project_root()?;
    let core_rs = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;

    for &(name, expected) in EXPECTED_WEIGHTS {
        let Some(actual) = extract_const(&core_rs, name) else {
            bail!("{} not found in src/scoring/core.rs", name);
        };
        if actual != expected {
            bail!("{} = {} but the ranking contract expects {}", name, actual, expected);
        }
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<f64> {
    // Look for "pub const TOPIC_WEIGHT: f64 = 10.0;"
    content
        .lines()
        .find(|line| line.contains(&format!("const {}:", name)))
        .and_then(|line| line.split('=').nth(1))
        .map(|value| value.trim().trim_end_matches(';').trim())
        .and_then(|value| value.parse::<f64>().ok())
}
