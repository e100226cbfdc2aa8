// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use leetkit::catalog::{self, Difficulty, Problem, Topic};
use leetkit::judge::{self, Report, Verdict};
use std::fs;
use std::io::Read;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    leetkit::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::List { topic, difficulty } => list(topic, difficulty),
        Commands::Show { problem } => show(&problem),
        Commands::Run { problem, args, input } => run(&problem, args, input.as_deref()),
        Commands::Check { problems, topic, all } => check(&problems, topic, all),
    };

    if let Err(e) = result {
        eprintln!("{}", failure_line(&e));
        std::process::exit(1);
    }
}

/// The whole context chain, outermost first: `1. Two Sum: argument 1 is ...`.
fn failure_line(e: &anyhow::Error) -> String {
    format!("❌ {:#}", e)
}

fn lookup(key: &str) -> Result<&'static Problem> {
    catalog::find(key).ok_or_else(|| anyhow!("no problem matches `{}`", key))
}

fn list(topic: Option<Topic>, difficulty: Option<Difficulty>) -> Result<()> {
    let problems: Vec<&Problem> = catalog::all()
        .filter(|p| topic.map_or(true, |t| p.topic == t))
        .filter(|p| difficulty.map_or(true, |d| p.difficulty == d))
        .collect();

    if problems.is_empty() {
        println!("No problems match those filters.");
        return Ok(());
    }

    section_top(&format!("PROBLEMS ({})", problems.len()));
    for p in &problems {
        let line = format!(
            " {} {} {} {}",
            pad_left(&themed(BRIGHT_CYAN, &[BOLD], &p.id.to_string()), 5),
            pad_right(&difficulty_badge(p.difficulty), 7),
            pad_right(&dim(p.topic.as_str()), 15),
            truncate(p.title, BOX_WIDTH - 32),
        );
        row(&line);
    }
    section_bot();
    Ok(())
}

fn show(key: &str) -> Result<()> {
    let p = lookup(key)?;

    double_header();
    title(&format!("{}. {}", p.id, p.title));
    double_footer();

    section_top("PROBLEM");
    row(&format!(" slug        {}", p.slug));
    row(&format!(" topic       {}", p.topic));
    row(&format!(" difficulty  {}", difficulty_badge(p.difficulty)));
    row(&format!(" compare     {:?}", p.compare));
    for (i, example) in p.examples.iter().enumerate() {
        section_mid(&format!("EXAMPLE {}", i + 1));
        row(&format!(" input   {}", truncate(example.input, BOX_WIDTH - 10)));
        row(&format!(" output  {}", truncate(example.output, BOX_WIDTH - 10)));
    }
    section_bot();
    Ok(())
}

fn read_input(args: Option<String>, input: Option<&Path>) -> Result<String> {
    if let Some(args) = args {
        return Ok(args);
    }
    if let Some(path) = input {
        return fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read input from stdin")?;
    Ok(buf)
}

fn run(key: &str, args: Option<String>, input: Option<&Path>) -> Result<()> {
    let p = lookup(key)?;
    let text = read_input(args, input)?;
    let answer = p.solve(&text).with_context(|| format!("{}. {}", p.id, p.title))?;
    println!("{}", serde_json::to_string(&answer)?);
    Ok(())
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .map(|style| style.progress_chars("━━╸"))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

fn select(keys: &[String], topic: Option<Topic>) -> Result<Vec<&'static Problem>> {
    if !keys.is_empty() {
        return keys.iter().map(|k| lookup(k)).collect();
    }
    Ok(catalog::all().filter(|p| topic.map_or(true, |t| p.topic == t)).collect())
}

fn check(keys: &[String], topic: Option<Topic>, all: bool) -> Result<()> {
    let problems = select(keys, topic)?;

    #[cfg(feature = "parallel")]
    let bar = {
        let bar = ProgressBar::new(problems.len() as u64);
        bar.set_style(create_progress_style());
        bar.set_prefix("Judging");
        bar.set_message("examples...");
        bar
    };

    #[cfg(feature = "parallel")]
    let reports = judge::check_with(&problems, |_| bar.inc(1));
    #[cfg(not(feature = "parallel"))]
    let reports = judge::check(&problems);

    #[cfg(feature = "parallel")]
    bar.finish_and_clear();

    let shown: Vec<&Report> = reports.iter().filter(|r| all || !r.is_success()).collect();
    if !shown.is_empty() {
        section_top("RESULTS");
        for report in shown {
            print_report(report, all);
        }
        section_bot();
    }

    let examples: usize = reports.iter().map(|r| r.outcomes.len()).sum();
    let failed_examples: usize = reports.iter().map(Report::failed).sum();
    let failed_problems = reports.iter().filter(|r| !r.is_success()).count();

    let summary = format!(
        "{} problems, {} examples, {} failed",
        reports.len(),
        examples,
        failed_examples
    );
    if failed_problems == 0 {
        println!("{} {}", themed(GREEN, &[BOLD], "✓"), summary);
        Ok(())
    } else {
        println!("{} {}", themed(RED, &[BOLD], "✗"), summary);
        bail!("{} of {} problems failed", failed_problems, reports.len())
    }
}

fn print_report(report: &Report, all: bool) {
    let p = report.problem;
    let head = format!(
        " {} {} {}",
        pad_left(&p.id.to_string(), 5),
        p.slug,
        dim(&format!("{}/{}", report.passed(), report.outcomes.len()))
    );
    row(&head);
    for outcome in &report.outcomes {
        if outcome.verdict.is_accepted() && !all {
            continue;
        }
        row(&format!(
            "   {} example {} {}",
            verdict_mark(&outcome.verdict),
            outcome.example + 1,
            timing(outcome.elapsed)
        ));
        match &outcome.verdict {
            Verdict::Accepted => {}
            Verdict::WrongAnswer { expected, actual } => {
                row(&format!("     expected {}", truncate(&expected.to_string(), BOX_WIDTH - 15)));
                row(&format!("     actual   {}", truncate(&actual.to_string(), BOX_WIDTH - 15)));
            }
            Verdict::Error(message) => {
                row(&format!("     {}", truncate(message, BOX_WIDTH - 6)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_line_keeps_solver_cause() {
        let p = lookup("two-sum").unwrap();
        let err = p
            .solve(r#"[[1,2],"x"]"#)
            .with_context(|| format!("{}. {}", p.id, p.title))
            .unwrap_err();
        let line = failure_line(&err);
        assert!(line.starts_with("❌ 1. Two Sum: "), "{line}");
        assert!(line.contains("argument 1"), "{line}");
    }

    #[test]
    fn test_failure_line_keeps_io_cause() {
        let err = read_input(None, Some(Path::new("/nonexistent/leetkit-input.json"))).unwrap_err();
        let line = failure_line(&err);
        assert!(line.contains("Failed to read /nonexistent/leetkit-input.json: "), "{line}");
    }

    #[test]
    fn test_unknown_problem() {
        let err = lookup("no-such-problem").unwrap_err();
        assert_eq!(failure_line(&err), "❌ no problem matches `no-such-problem`");
    }
}
