use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use arborview::{workload, ComparisonReport, StressOptions, Workbench};

#[derive(Parser, Debug)]
#[command(name = "arborview", about = "Side-by-side BST vs AVL workbench")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply a script of operations to both trees, then print the metrics.
    Run {
        /// Script file: one `insert N` / `delete N` / `find N` / `reset`
        /// per line; blank lines and `#` comments are skipped.
        script: PathBuf,
    },
    /// Insert random distinct values into both trees, then print the metrics.
    Stress {
        /// Distinct values to insert.
        #[arg(long, default_value_t = 20)]
        insertions: usize,
        /// Values are drawn from 1..=max-value.
        #[arg(long, default_value_t = 100)]
        max_value: i64,
        /// RNG seed for a reproducible run (default: entropy).
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { script } => script_command(script)?,
        Commands::Stress {
            insertions,
            max_value,
            seed,
        } => stress_command(insertions, max_value, seed)?,
    }

    Ok(())
}

fn script_command(path: PathBuf) -> Result<()> {
    let reader = BufReader::new(
        File::open(&path).with_context(|| format!("failed to open script {}", path.display()))?,
    );

    let mut bench = Workbench::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        apply_line(&mut bench, trimmed)
            .with_context(|| format!("line {}: {trimmed:?}", line_no + 1))?;
    }

    print!("{}", ComparisonReport::from_workbench(&bench));
    Ok(())
}

fn apply_line(bench: &mut Workbench, line: &str) -> Result<()> {
    let mut fields = line.split_whitespace();
    let op = fields.next().context("missing operation")?;

    if op == "reset" {
        bench.reset();
        println!("reset: trees cleared");
        return Ok(());
    }

    let value: i64 = fields
        .next()
        .with_context(|| format!("{op} needs a value"))?
        .parse()
        .context("expected an integer value")?;

    match op {
        "insert" => {
            let outcome = bench.insert(value);
            if outcome.bst && outcome.avl {
                println!("insert {value}: ok");
            } else {
                println!("insert {value}: already present");
            }
        }
        "delete" => {
            let outcome = bench.delete(value);
            if outcome.bst && outcome.avl {
                println!("delete {value}: ok");
            } else {
                println!("delete {value}: not found");
            }
        }
        "find" => {
            let paths = bench.find_path(value);
            match (&paths.bst, &paths.avl) {
                (Some(bst_path), Some(avl_path)) => println!(
                    "find {value}: bst path {} nodes, avl path {} nodes",
                    bst_path.len(),
                    avl_path.len()
                ),
                _ => println!("find {value}: not found"),
            }
        }
        other => bail!("unknown operation {other:?}"),
    }

    Ok(())
}

fn stress_command(insertions: usize, max_value: i64, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut bench = Workbench::new();
    let options = StressOptions {
        insertions,
        max_value,
    };
    let outcome =
        workload::run_stress(&mut bench, &options, &mut rng).context("stress run failed")?;

    println!(
        "inserted {} distinct values: {:?}",
        outcome.inserted.len(),
        outcome.inserted
    );
    print!("{}", ComparisonReport::from_workbench(&bench));
    Ok(())
}
