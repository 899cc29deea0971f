//! todolist CLI application
//!
//! Command-line interface for the todolist backend.

mod args;
mod cli;
mod handler;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handler::Cli;
use log::info;
use renderer::TerminalRenderer;
use todolist_core::TodoListBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let todo = TodoListBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize todo list")?;

    let cli = Cli::new(todo, TerminalRenderer::new(!no_color), json);

    info!("todolist started");

    match command {
        Some(Project { command }) => cli.handle_project_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        None => cli.list_projects().await,
    }
}
