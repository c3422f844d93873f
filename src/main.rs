use clap::{Parser, Subcommand};
use dossier::{config, listing, output, preview, submit};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dossier")]
#[command(about = "Package a project folder into a zip dossier and preview its report")]
#[command(long_about = "\
Package a project folder into a zip dossier and preview its report

The tool wraps one workflow: pick a source type (github or local), enter a
text value, let the processing step run, then download the resulting zip and
read the generated markdown report.

Commands:

  list        Show the first-level entries of the projects root
  submit      Validate inputs, archive the project folder, print the result
  preview     Render the report, inlining images and warning on missing ones
  gen-config  Print a documented stock config.toml

Paths come from config.toml (see 'dossier gen-config'); nothing is hardcoded.
The github source is a stub today: both source types archive the same
configured folder and differ only in the result's metadata.")]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the first-level entries of the projects root
    List,
    /// Run the submission workflow: validate, archive, report paths
    Submit {
        /// Source type: github or local
        #[arg(long)]
        source: String,
        /// Free-text input; must not be blank
        #[arg(long)]
        text: String,
        /// Print the full result object as JSON instead of formatted lines
        #[arg(long)]
        json: bool,
    },
    /// Render the markdown report preview
    Preview {
        /// Write an HTML preview page to this path instead of the terminal
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            let config = config::load_config(&cli.config)?;
            let entries = listing::list_entries(&config.projects_root)?;
            output::print_listing(&config.projects_root, &entries);
        }
        Command::Submit { source, text, json } => {
            let config = config::load_config(&cli.config)?;
            let processor = submit::Processor::new(config);
            let result = processor.handle_submission(&source, &text);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                output::print_submission(&result);
            }
            if !result.success {
                std::process::exit(1);
            }
        }
        Command::Preview { html } => {
            let config = config::load_config(&cli.config)?;
            let report_path = config.report_path();
            let base_dir = std::env::current_dir()?;
            let segments = preview::load_preview(&report_path, &base_dir)?;

            match html {
                Some(out) => {
                    let title = config.archive_base_name();
                    let page = preview::render_html(&title, &segments);
                    fs::write(&out, page.into_string())?;
                    println!("Preview written to {}", out.display());
                }
                None => output::print_preview(&segments),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
