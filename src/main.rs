// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{ArgAction, Parser, Subcommand};
use futures::future::join_all;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use travel_recommendation::render::{html, text};
use travel_recommendation::controller::event_for_line;
use travel_recommendation::utils::logging::{
    format_error, format_info, format_success, format_warning,
};
use travel_recommendation::{
    Bindings, Config, Controller, DatasetSource, Handled, Page, Renderer, SearchOutcome,
    SourceKind, Validator,
};

#[derive(Parser)]
#[command(name = "travel_recommendation")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Keyword search over a travel recommendation dataset", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one or more searches, each against a freshly loaded dataset
    Search {
        #[arg(required = true)]
        queries: Vec<String>,

        /// Print the HTML fragment instead of terminal text
        #[arg(long)]
        html: bool,
    },

    /// Write a standalone HTML page with the results of a search
    Page {
        query: String,

        #[arg(short, long, default_value = "recommendations.html")]
        output: PathBuf,
    },

    /// Read queries from stdin; `:clear` resets the output, `:quit` exits
    Interactive,

    /// Load the dataset and report what it contains
    Inspect,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.color {
        colored::control::set_override(false);
    }
    travel_recommendation::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    let source = SourceKind::from_location(&config.source.location);
    let controller = Controller::new(source, Renderer::new(config.display.clone()));

    match cli.command {
        Commands::Search { queries, html } => {
            cmd_search(&controller, &queries, html, cli.color).await;
        }
        Commands::Page { query, output } => {
            cmd_page(&controller, &query, output).await?;
        }
        Commands::Interactive => {
            cmd_interactive(&controller, cli.color).await?;
        }
        Commands::Inspect => {
            cmd_inspect(&controller).await?;
        }
    }

    Ok(())
}

async fn cmd_search(
    controller: &Controller<SourceKind>,
    queries: &[String],
    as_html: bool,
    color: bool,
) {
    // Searches are independent; each one fetches its own copy of the dataset.
    let views = join_all(queries.iter().map(|q| controller.search_view(q))).await;

    for (query, (outcome, view)) in queries.iter().zip(views) {
        info!("{:?} -> {:?}", query, outcome);
        if as_html {
            println!("{}", html::render_fragment(&view));
        } else {
            println!("{}\n", text::render(&view, color));
        }
    }
}

async fn cmd_page(controller: &Controller<SourceKind>, query: &str, output: PathBuf) -> Result<()> {
    let (outcome, view) = controller.search_view(query).await;
    let page = html::render_page(&view, query, Utc::now());

    tokio::fs::write(&output, page)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    match outcome {
        SearchOutcome::Rendered { count } => println!(
            "{}",
            format_success(&format!("Wrote {} result(s) to {}", count, output.display()))
        ),
        SearchOutcome::Failed => eprintln!(
            "{}",
            format_error(&format!(
                "Dataset could not be loaded; wrote error page to {}",
                output.display()
            ))
        ),
        _ => println!(
            "{}",
            format_warning(&format!("Wrote page without results to {}", output.display()))
        ),
    }

    Ok(())
}

async fn cmd_interactive(controller: &Controller<SourceKind>, color: bool) -> Result<()> {
    let mut page = Page::complete();
    let bindings = Bindings::for_page(&page);

    println!(
        "{}",
        format_info("Type a keyword and press Enter. `:clear` resets, `:quit` exits.")
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let Some(event) = event_for_line(&line, &mut page) else {
            break;
        };

        match controller.dispatch(&bindings, &event, &mut page).await {
            Handled::Cleared => println!("{}", format_info("Cleared")),
            Handled::Searched(_) => {
                if let Some(view) = page.current_view() {
                    println!("{}\n", text::render(view, color));
                }
            }
            Handled::Ignored => {}
        }
    }

    Ok(())
}

async fn cmd_inspect(controller: &Controller<SourceKind>) -> Result<()> {
    let source = controller.source();
    info!("Inspecting dataset at {}", source.describe());

    let dataset = source
        .fetch()
        .await
        .with_context(|| format!("Failed to load dataset from {}", source.describe()))?;

    println!("Beaches:   {}", dataset.beaches.len());
    println!("Temples:   {}", dataset.temples.len());
    println!("Countries: {}", dataset.countries.len());
    println!("Cities:    {}", dataset.city_count());
    println!("Total places: {}", dataset.place_count());

    let blank = dataset
        .places()
        .filter(|place| Validator::validate_not_blank("name", &place.name).is_err())
        .count();
    if blank > 0 {
        println!(
            "{}",
            format_warning(&format!("{} place(s) have a blank name", blank))
        );
    }

    if dataset.is_empty() {
        println!("{}", format_warning("Dataset contains no destinations"));
    } else {
        println!("{}", format_success("Dataset loaded"));
    }

    Ok(())
}
