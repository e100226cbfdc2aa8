// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the leetkit command-line interface.
//!
//! Four subcommands: `list` and `show` browse the catalogue, `run` feeds one
//! JSON input to an exercise and prints its answer, and `check` grades the
//! registered examples.

pub mod display;

use clap::{Parser, Subcommand};
use leetkit::catalog::{Difficulty, Topic};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "leetkit",
    about = "Classic algorithm exercises with a local judge",
    version
)]
pub struct Cli {
    /// Log judge progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered problems
    List {
        /// Only problems of this topic (e.g. `tree`, `sliding-window`)
        #[arg(short, long)]
        topic: Option<Topic>,

        /// Only problems of this difficulty
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Show a problem's metadata and examples
    Show {
        /// Problem number or slug
        problem: String,
    },

    /// Run a problem on one input and print the JSON answer
    ///
    /// The input is a JSON array with one element per argument, e.g.
    /// `leetkit run two-sum '[[2,7,11,15],9]'`. Without ARGS or --input the
    /// input is read from stdin.
    Run {
        /// Problem number or slug
        problem: String,

        /// JSON argument array
        args: Option<String>,

        /// Read the JSON argument array from a file
        #[arg(short, long, conflicts_with = "args")]
        input: Option<PathBuf>,
    },

    /// Grade the registered examples
    Check {
        /// Problem numbers or slugs (default: every problem)
        problems: Vec<String>,

        /// Only problems of this topic
        #[arg(short, long)]
        topic: Option<Topic>,

        /// Print every example, not just failures
        #[arg(long)]
        all: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definitions_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_filters() {
        let cli = Cli::parse_from(["leetkit", "list", "--topic", "sliding_window", "-d", "hard"]);
        match cli.command {
            Commands::List { topic, difficulty } => {
                assert_eq!(topic, Some(Topic::SlidingWindow));
                assert_eq!(difficulty, Some(Difficulty::Hard));
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["leetkit", "check", "1", "146", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Check { problems, topic, all } => {
                assert_eq!(problems, vec!["1", "146"]);
                assert_eq!(topic, None);
                assert!(!all);
            }
            _ => panic!("expected check"),
        }
    }
}
