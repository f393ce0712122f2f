use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use minitree::prelude::*;
use minitree::sample::DEFAULT_DELIMITER;

#[derive(Parser)]
#[command(name = "minitree")]
#[command(about = "Grow a Gini decision tree over a delimited file and classify rows")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(long, global = true)]
    quiet: bool,
}

/// Options shared by every subcommand that reads a data file.
#[derive(Args, Debug, Clone)]
struct DataArgs {
    /// Path to the data file (header row, label in the last column)
    data: PathBuf,

    /// Column separator
    #[arg(long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// Read feature columns that are not fully numeric as categorical
    #[arg(long, default_value_t = false)]
    categorical: bool,

    /// Search the feature columns in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Grow the tree from an explicit stack instead of recursion
    #[arg(long, default_value_t = false)]
    work_stack: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Split the data, grow a tree on the training part and report on the test part
    Evaluate {
        #[command(flatten)]
        data: DataArgs,

        /// Fraction of rows held out for testing
        #[arg(long, default_value_t = 0.2)]
        test_ratio: f64,

        /// RNG seed for the train/test shuffle
        #[arg(long, default_value_t = 1234)]
        seed: u64,

        /// Print the report as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Grow a tree on every row and print it
    Tree {
        #[command(flatten)]
        data: DataArgs,

        /// Also write the tree as a Graphviz dot file
        #[arg(long)]
        dot: Option<PathBuf>,
    },

    /// Grow a tree on every row and predict the label of one input
    Predict {
        #[command(flatten)]
        data: DataArgs,

        /// Comma-separated feature values; prompts on stdin when absent
        #[arg(long, value_delimiter = ',')]
        values: Option<Vec<String>>,
    },
}

fn read_sample(args: &DataArgs) -> Result<Sample> {
    let sample = SampleReader::new()
        .file(&args.data)
        .delimiter(args.delimiter)
        .infer_categorical(args.categorical)
        .read()
        .with_context(|| format!("failed to read {}", args.data.display()))?;
    info!(rows = sample.len(), features = sample.shape().1, "sample loaded");
    Ok(sample)
}

fn tree_for(args: &DataArgs) -> DecisionTree {
    let growth = if args.work_stack { Growth::WorkStack } else { Growth::Recursive };
    DecisionTreeBuilder::new()
        .parallel(args.parallel)
        .growth(growth)
        .build()
}

/// Ask for every form field on stdin, one line each.
fn prompt_values(form: &FeatureForm) -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut values = Vec::with_capacity(form.fields().len());
    for prompt in (0..form.fields().len()).filter_map(|i| form.prompt(i)) {
        print!("{prompt} ");
        io::stdout().flush()?;
        let line = lines.next()
            .context("stdin closed before every value was entered")??;
        values.push(line);
    }
    Ok(values)
}

fn write_dot(f: &DecisionTreeClassifier, path: &Path, header: &[String]) -> Result<()> {
    f.to_dot_file(path, header)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "dot file written");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Evaluate { data, test_ratio, seed, json } => {
            let sample = read_sample(&data)?;
            let (train, test) = TrainTestSplit::new()
                .test_ratio(test_ratio)
                .seed(seed)
                .verbose(!json && !cli.quiet)
                .split(&sample)
                .context("failed to split the sample")?;

            let tree = tree_for(&data);
            info!("{tree}");
            let f = tree.fit(&train).context("failed to grow the tree")?;

            let report = Evaluation::new(&f, &test)
                .context("failed to classify the test rows")?;
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", f.display(sample.header()));
                report.print();
            }
        }

        Command::Tree { data, dot } => {
            let sample = read_sample(&data)?;
            let f = tree_for(&data)
                .fit(&sample)
                .context("failed to grow the tree")?;
            print!("{}", f.display(sample.header()));
            if let Some(path) = dot {
                write_dot(&f, &path, sample.header())?;
            }
        }

        Command::Predict { data, values } => {
            let sample = read_sample(&data)?;
            let f = tree_for(&data)
                .fit(&sample)
                .context("failed to grow the tree")?;

            let form = FeatureForm::new(sample.feature_names());
            let inputs = match values {
                Some(values) => values,
                None => prompt_values(&form)?,
            };

            match form.parse(&inputs) {
                Ok(features) => {
                    let label = f.predict(&features)
                        .context("failed to classify the input")?;
                    println!("{} {}", "Prediction:".bold(), label.bold().green());
                }
                Err(err) => {
                    info!(%err, "input rejected");
                    println!("{}", form.rejection_message().bold().red());
                }
            }
        }
    }

    Ok(())
}
