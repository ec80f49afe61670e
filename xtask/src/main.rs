use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use radix_lookup::RadixTree;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "radix-lookup workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the trie benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Build a tree from the given keys and look up each query
    Lookup {
        /// Key to store; repeat for more keys
        #[arg(short, long = "key", required = true)]
        keys: Vec<String>,

        /// Dump the tree shape as JSON instead of the outline
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Queries to resolve against the tree
        queries: Vec<String>,
    },
}

const BENCH_NAME: &str = "trie_benchmark";

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Subset of criterion's `benchmark.json`.
#[derive(Deserialize)]
struct BenchmarkInfo {
    #[serde(default)]
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
    Bytes(u64),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Lookup { keys, json, queries } => lookup(&keys, json, &queries)?,
    }

    Ok(())
}

fn lookup(keys: &[String], json: bool, queries: &[String]) -> Result<()> {
    let tree = RadixTree::build(keys);

    if json {
        println!("{}", tree.to_json_pretty().context("Failed to serialize tree snapshot")?);
    } else {
        print!("{tree}");
    }
    println!("{} keys, {} nodes", tree.len(), tree.node_count());

    for query in queries {
        let exact = if tree.contains(query) { "stored" } else { "not stored" };
        match tree.lookup_prefix(query) {
            Some(found) => println!(
                "{query:?}: {exact}; longest prefix \"{}\" with tail \"{}\"",
                found.key.escape_ascii(),
                found.tail.escape_ascii()
            ),
            None => println!("{query:?}: {exact}; no stored prefix"),
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!(">>> Running {BENCH_NAME}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH_NAME]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd.status().context(format!("Failed to run bench {BENCH_NAME}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH_NAME} failed");
    }
    println!("Finished {BENCH_NAME} in {:.2?}", start.elapsed());

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // group -> function -> ops/s
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# Trie Benchmark Report")?;
    for (group, functions) in &results {
        writeln!(file, "\n## {group}\n")?;
        writeln!(file, "| Function | Ops/s |")?;
        writeln!(file, "|---|---|")?;
        for (function, ops) in functions {
            writeln!(file, "| {function} | {} |", format_ops(*ops))?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

fn collect_results(
    dir: &Path,
    results: &mut BTreeMap<String, BTreeMap<String, f64>>,
) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        // Layout: target/criterion/<group>/<function>/new/estimates.json
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(function_dir) = run_dir.parent() else { continue };
        let Some(group_dir) = function_dir.parent() else { continue };
        let (Some(function), Some(group)) = (dir_name(function_dir), dir_name(group_dir)) else {
            continue;
        };
        if function == "report" || group == "report" {
            continue;
        }

        let estimates: Estimates = read_json(&path)?;
        let elements = read_json::<BenchmarkInfo>(&run_dir.join("benchmark.json"))
            .ok()
            .and_then(|info| info.throughput)
            .map_or(1.0, |t| match t {
                Throughput::Elements(n) | Throughput::Bytes(n) => n as f64,
            });

        let time_ns = estimates.mean.point_estimate;
        if time_ns > 0.0 {
            results
                .entry(group)
                .or_default()
                .insert(function, elements * 1e9 / time_ns);
        }
    }
    Ok(())
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_string)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
