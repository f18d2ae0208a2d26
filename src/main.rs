use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tombgen::{config, corpus, generate, output, seed};

#[derive(Parser)]
#[command(name = "tombgen")]
#[command(about = "Static site generator for tombstone memorial listings")]
#[command(long_about = "\
Static site generator for tombstone memorial listings

The site root holds the build config, the HTML template, the record
directory, and the static asset directories:

  ./
  ├── config.toml                  # Build settings (required)
  ├── index.html                   # Template with injection markers
  ├── tombstones_raw/              # One <id>.json file per memorial
  │   ├── 1.json
  │   └── 2.json
  ├── js/                          # Copied into the output verbatim
  ├── css/
  └── assets/

Each record carries id, name, avatar, epitaph, and optional links. Records
are validated, sorted numerically by id, and paginated; page 1 becomes
index.html and later pages follow the configured name format.

Run 'tombgen gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file path (default: config.toml under the root)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: validate → paginate → generate → copy assets
    Build,
    /// Validate the record directory without building
    Check,
    /// Write sample records into the input directory
    Seed {
        /// Number of records to generate
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.root.join("config.toml"));

    match cli.command {
        Command::Build => {
            let config = config::load_config(&config_path)?;
            match generate::generate(&cli.root, &config)? {
                generate::Outcome::Complete(summary) => {
                    println!(
                        "==> Build complete: {} pages from {} records ({} skipped)",
                        summary.pages_written, summary.valid_records, summary.rejected_records
                    );
                }
                // Abort conditions end the run with a message but are not
                // process failures.
                generate::Outcome::NoValidRecords | generate::Outcome::NoPages => {}
            }
        }
        Command::Check => {
            let config = config::load_config(&config_path)?;
            let input_dir = cli.root.join(&config.input_dir_name);
            println!("==> Checking {}", input_dir.display());
            let corpus = corpus::load(&input_dir)?;
            output::print_corpus_output(&corpus);
            println!(
                "==> {} valid, {} skipped",
                corpus.records.len(),
                corpus.rejections.len()
            );
        }
        Command::Seed { count } => {
            let config = config::load_config(&config_path)?;
            let input_dir = cli.root.join(&config.input_dir_name);
            let written = seed::write_sample_records(&input_dir, count)?;
            println!(
                "==> Wrote {} sample records to {}",
                written.len(),
                input_dir.display()
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
