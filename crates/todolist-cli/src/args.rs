use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ProjectCommands, TaskCommands};

/// Command-line front end for the todolist backend
///
/// Projects hold ordered lists of tasks, and every task can carry its own
/// ordered details. Running `td` without a subcommand lists all projects.
#[derive(Parser)]
#[command(version, about, name = "td")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/todolist/todolist.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage tasks and their details
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["td", "project", "list", "--json", "--no-color"]).unwrap();
        assert!(args.json);
        assert!(args.no_color);
        assert!(matches!(args.command, Some(Commands::Project { .. })));
    }
}
