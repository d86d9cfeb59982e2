//! Keep CLI - terminal client for the Keep note service

mod api;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;

use api::KeepClient;
use config::Config;

#[derive(Parser)]
#[command(name = "keep")]
#[command(about = "Keep, a simple note taking app", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all notes
    List,

    /// Show a single note
    Show {
        /// Note ID
        id: String,
    },

    /// Create a note (prompts for missing fields)
    Add {
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Set the server base URL
    Url {
        /// e.g. http://localhost:8000
        base_url: String,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::List => cmd_list().await,
        Commands::Show { id } => cmd_show(id).await,
        Commands::Add { title, content } => cmd_add(title, content).await,
        Commands::Url { base_url } => cmd_url(base_url).await,
        Commands::Config => cmd_config(),
    }
}

fn client() -> Result<KeepClient> {
    let config = Config::load()?;
    Ok(KeepClient::new(&config.effective_base_url()))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_list() -> Result<()> {
    let notes = client()?.list_notes().await?;

    if notes.is_empty() {
        println!("No notes found.");
        return Ok(());
    }

    println!("{}", "Notes:".bold());
    for note in notes {
        println!(
            "  {} {}",
            note.id.to_string().dimmed(),
            note.title.cyan().bold()
        );
    }

    Ok(())
}

async fn cmd_show(id: String) -> Result<()> {
    let note = client()?.get_note(&id).await?;

    println!("{}", note.title.cyan().bold());
    println!("{}", note.id.to_string().dimmed());
    println!();
    println!("{}", note.content);

    Ok(())
}

async fn cmd_add(title: Option<String>, content: Option<String>) -> Result<()> {
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("Title")
            .interact_text()
            .context("Failed to read input")?,
    };
    let content = match content {
        Some(c) => c,
        None => Input::<String>::new()
            .with_prompt("Content")
            .interact_text()
            .context("Failed to read input")?,
    };

    let note = client()?.create_note(&title, &content).await?;

    println!(
        "{} Note created: {} {}",
        "✓".green(),
        note.title.cyan(),
        note.id.to_string().dimmed()
    );

    Ok(())
}

async fn cmd_url(base_url: String) -> Result<()> {
    let mut config = Config::load()?;

    let client = KeepClient::new(&base_url);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => println!("{}", "unreachable (saved anyway)".yellow()),
    }

    config.base_url = base_url.trim_end_matches('/').to_string();
    config.save()?;

    println!("{} Base URL saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!("  Effective URL: {}", config.effective_base_url().cyan());

    Ok(())
}
