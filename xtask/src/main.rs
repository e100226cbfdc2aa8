// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Custom cargo commands for leetkit.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask coverage  - Check every exercise is registered in the catalogue
//!   cargo xtask check     - Quick check (cargo check + test + clippy)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Library modules holding exercises, relative to `src/`.
const TOPIC_MODULES: &[&str] = &[
    "array",
    "backtracking",
    "binary_search",
    "concurrency",
    "design",
    "dp",
    "graph",
    "greedy.rs",
    "heap",
    "intervals.rs",
    "linked_list",
    "math",
    "segment_tree",
    "sliding_window.rs",
    "stack",
    "string",
    "tree",
    "trie.rs",
    "two_pointers.rs",
    "union_find",
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("coverage") => coverage()?,
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
  verify    Run full verification suite (coverage + tests + clippy + judge)
  test      Run all Rust tests
  coverage  Check that every numbered exercise has a catalogue entry
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("leetkit Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking catalogue coverage...");
    coverage()?;
    println!("✓ Every exercise is registered\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ All Rust tests passed (parallel and sequential judge)\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Judging every registered example...");
    run_cargo(&["run", "--quiet", "--release", "--", "check"])?;
    println!("✓ Judge passed\n");

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

/// Compares `/// NNN. Title` tags in the topic modules with the numbers
/// registered in `src/catalog/entries/`.
fn coverage() -> Result<()> {
    let src = project_root()?.join("src");

    let mut implemented = BTreeSet::new();
    for module in TOPIC_MODULES {
        for file in rust_files(&src.join(module))? {
            let text = fs::read_to_string(&file).with_context(|| format!("Failed to read {}", file.display()))?;
            implemented.extend(text.lines().filter_map(exercise_header));
        }
    }

    let mut registered = BTreeSet::new();
    for file in rust_files(&src.join("catalog/entries"))? {
        let text = fs::read_to_string(&file).with_context(|| format!("Failed to read {}", file.display()))?;
        for id in text.lines().filter_map(registered_id) {
            if !registered.insert(id) {
                bail!("problem {} is registered twice", id);
            }
        }
    }

    let unregistered: Vec<_> = implemented.difference(&registered).collect();
    let orphaned: Vec<_> = registered.difference(&implemented).collect();
    if !unregistered.is_empty() || !orphaned.is_empty() {
        bail!(
            "catalogue out of sync\n  implemented but not registered: {:?}\n  registered but no exercise header: {:?}",
            unregistered,
            orphaned
        );
    }

    println!("  {} exercises, all registered", implemented.len());
    Ok(())
}

/// The number in `/// 146. LRU Cache`. Tags sit on the exercise item, never
/// in module docs.
fn exercise_header(line: &str) -> Option<u32> {
    let rest = line.trim_start().strip_prefix("///")?;
    let (number, title) = rest.trim_start().split_once(". ")?;
    let starts_title = title.chars().next().is_some_and(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if starts_title {
        number.parse().ok()
    } else {
        None
    }
}

/// The number in `problem!(T; 146, "lru-cache", ...`.
fn registered_id(line: &str) -> Option<u32> {
    let (_, rest) = line.split_once("problem!(T;")?;
    rest.split(',').next()?.trim().parse().ok()
}

/// `.rs` files at `path`, recursively when it is a directory.
fn rust_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(path).with_context(|| format!("Failed to list {}", path.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers() {
        assert_eq!(exercise_header("/// 146. LRU Cache"), Some(146));
        assert_eq!(exercise_header("    /// 3. Longest Substring"), Some(3));
        assert_eq!(exercise_header("/// 699. Falling Squares"), Some(699));
        assert_eq!(exercise_header("//! 699. Falling Squares"), None);
        assert_eq!(exercise_header("/// 1. too common to rank"), None);
        assert_eq!(exercise_header("// 146. LRU Cache"), None);
    }

    #[test]
    fn registrations() {
        assert_eq!(registered_id(r#"    problem!(T; 146, "lru-cache", "LRU Cache", Medium, Exact,"#), Some(146));
        assert_eq!(registered_id("    problem!(T; 1, "), Some(1));
        assert_eq!(registered_id("let x = 1;"), None);
    }
}
