use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taskboard::TaskColor;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "A single-user kanban board in your terminal")]
#[command(long_about = "
taskboard keeps one kanban board: an ordered list of uniquely named columns,
each holding an ordered list of colored tasks. The whole board is saved as a
single JSON document after every change.

Running without a command shows the board.

Example usage:
  taskboard task add \"write tests\" --color blue
  taskboard task move 01JB3... Doing
  taskboard column add Review
  taskboard export --output backup.json
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Directory holding the board (overrides configuration)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Storage key the board is saved under (overrides configuration)
    #[arg(long, global = true, value_name = "KEY")]
    pub key: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the whole board
    Show,

    /// Manage columns
    Column {
        #[command(subcommand)]
        action: ColumnCommands,
    },

    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Replace the board with the empty To Do / Doing / Done layout
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Write the board to a timestamped JSON file
    Export {
        /// Destination file (defaults to Tasks-<timestamp>.json in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the document instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Replace the board with a previously exported file
    Import {
        /// File to read, `-` for stdin
        file: PathBuf,
    },

    /// Apply JSON intents, e.g. `{"op": "add column", "name": "QA"}`
    #[command(long_about = "
Apply one intent object or an array of them. Intents run in order and the
first failure stops the batch; intents before it stay applied.

Example:
  echo '[{\"op\": \"add column\", \"name\": \"QA\"}, {\"op\": \"move column\", \"from\": 3, \"to\": 0}]' \\
    | taskboard apply
")]
    Apply {
        /// File with the intents (reads stdin when omitted)
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ColumnCommands {
    /// List columns with their task counts
    List,
    /// Append a column
    Add { name: String },
    /// Rename a column, keeping its position and tasks
    Rename { name: String, new_name: String },
    /// Delete a column and every task in it
    Delete { name: String },
    /// Move the column at FROM to index TO (0-based)
    Move { from: usize, to: usize },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Add a task at the bottom of a column
    Add {
        text: String,
        /// Target column (defaults to the first column)
        #[arg(short, long)]
        column: Option<String>,
        /// default, red, green, blue or yellow
        #[arg(long, value_parser = parse_color)]
        color: Option<TaskColor>,
    },
    /// Change the text of a task
    Rename { id: String, text: String },
    /// Change the color of a task
    Recolor {
        id: String,
        #[arg(value_parser = parse_color)]
        color: TaskColor,
    },
    /// Delete a task
    Delete { id: String },
    /// Move a task to the bottom of another column
    Move {
        id: String,
        /// Destination column
        to: String,
    },
    /// Show one task
    Get { id: String },
}

fn parse_color(value: &str) -> Result<TaskColor, String> {
    value.parse().map_err(|e: taskboard::types::UnknownColor| e.to_string())
}
