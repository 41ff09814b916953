use anyhow::Result;
use clap::Parser;
use recipe_client::{
    api::HttpRecipeClient,
    config::{self, Config},
    image,
    view::{Phase, ViewController, render},
};
use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "recipe", version, about = "Generate recipes from what is in your kitchen")]
struct Cli {
    /// Config file (defaults to $CONFIG_PATH, then config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Available ingredients, e.g. "chicken, onion, pepper"
    #[arg(short, long, requires = "style")]
    ingredients: Option<String>,

    /// Cuisine style or dietary need, e.g. "low-carb" or "Thai"
    #[arg(short, long, requires = "ingredients")]
    style: Option<String>,

    /// Save inline images of generated recipes into this directory
    #[arg(long)]
    image_dir: Option<PathBuf>,
}

fn init_logging(config: &Config) -> Result<()> {
    // RUST_LOG overrides config and may hold full filter directives;
    // the config level was already validated on load
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.logs.json {
        builder.json().init();
    } else {
        builder.init();
    }

    info!("Logging initialized with level: {}", log_level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration first (before logging setup)
    let config = match config::load(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("{}", e);
        return Ok(ExitCode::FAILURE);
    }

    let client = HttpRecipeClient::new(&config.service)?;
    info!("Using recipe service at {}", client.endpoint());

    let mut controller = ViewController::new(Box::new(client));

    match (cli.ingredients, cli.style) {
        (Some(ingredients), Some(style)) => {
            controller.set_ingredients(ingredients);
            controller.set_style_or_diet(style);
            let succeeded = run_once(&mut controller, cli.image_dir.as_deref()).await;
            Ok(if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        _ => {
            run_interactive(&mut controller, cli.image_dir.as_deref()).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Submits the current inputs, printing the busy screen and then the
/// result. Returns whether recipes came back.
async fn run_once(controller: &mut ViewController, image_dir: Option<&Path>) -> bool {
    let state = controller
        .submit_with(|loading| print_screen(&render(loading)))
        .await;
    print_screen(&render(state));

    if state.phase() != Phase::Success {
        return false;
    }

    if let Some(dir) = image_dir {
        match image::save_inline_images(dir, state.recipes()).await {
            Ok(paths) => {
                for path in paths {
                    println!("Saved image: {}", path.display());
                }
            }
            Err(e) => error!("Failed to save images to {}: {}", dir.display(), e),
        }
    }

    true
}

async fn run_interactive(controller: &mut ViewController, image_dir: Option<&Path>) -> Result<()> {
    println!("Enter your ingredients and a style or diet. Type 'q' or press Ctrl-D to quit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(ingredients) = prompt(&mut lines, "Ingredients> ").await? else {
            break;
        };
        controller.set_ingredients(ingredients);

        let Some(style) = prompt(&mut lines, "Style/diet> ").await? else {
            break;
        };
        controller.set_style_or_diet(style);

        run_once(controller, image_dir).await;
    }

    info!("Leaving interactive session");
    Ok(())
}

/// Reads one line; `None` on EOF or a lone `q`.
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;

    match lines.next_line().await? {
        Some(line) if is_quit(&line) => Ok(None),
        Some(line) => Ok(Some(line)),
        None => Ok(None),
    }
}

fn is_quit(line: &str) -> bool {
    line.trim() == "q"
}

fn print_screen(screen: &str) {
    println!();
    print!("{screen}");
}
