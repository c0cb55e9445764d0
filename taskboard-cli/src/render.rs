//! Terminal rendering of boards, columns and tasks

use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use is_terminal::IsTerminal;
use serde::Serialize;
use serde_json::Value;
use taskboard::{Board, TaskColor};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::exit_codes::EXIT_ERROR;

/// Turn colored output off when stdout is not a terminal or `NO_COLOR` is set
pub fn init_color() {
    let use_color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    if !use_color {
        colored::control::set_override(false);
    }
}

/// A table pre-configured for the terminal width
pub fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn table_color(color: TaskColor) -> Option<Color> {
    match color {
        TaskColor::Default => None,
        TaskColor::Red => Some(Color::Red),
        TaskColor::Green => Some(Color::Green),
        TaskColor::Blue => Some(Color::Blue),
        TaskColor::Yellow => Some(Color::Yellow),
    }
}

/// Color name painted in its own color
pub fn swatch(color: TaskColor) -> ColoredString {
    let name = color.as_str();
    match color {
        TaskColor::Default => name.normal(),
        TaskColor::Red => name.red(),
        TaskColor::Green => name.green(),
        TaskColor::Blue => name.blue(),
        TaskColor::Yellow => name.yellow(),
    }
}

/// The board side by side: one table column per board column, tasks top to bottom
pub fn board_table(board: &Board) -> Table {
    let mut table = new_table();
    table.set_header(
        board
            .columns()
            .iter()
            .map(|column| format!("{} ({})", column.name, column.tasks.len())),
    );

    let depth = board
        .columns()
        .iter()
        .map(|column| column.tasks.len())
        .max()
        .unwrap_or(0);

    for row in 0..depth {
        table.add_row(board.columns().iter().map(|column| {
            match column.tasks.get(row) {
                Some(task) => {
                    let cell = Cell::new(format!("{}\n{}", task.text, task.id));
                    match table_color(task.color) {
                        Some(color) => cell.fg(color),
                        None => cell,
                    }
                }
                None => Cell::new(""),
            }
        }));
    }
    table
}

/// One row per column with its position and size
pub fn columns_table(board: &Board) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Column", "Tasks"]);
    for (index, column) in board.columns().iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            column.name.clone(),
            column.tasks.len().to_string(),
        ]);
    }
    table
}

/// Field/value table for a task as returned by `get task`
pub fn task_table(task: &Value) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    for field in ["id", "text", "color", "column", "index"] {
        let value = match &task[field] {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        };
        let mut cell = Cell::new(value);
        if field == "color" {
            let color = task[field]
                .as_str()
                .map(TaskColor::from_tag_lenient)
                .unwrap_or_default();
            if let Some(fg) = table_color(color) {
                cell = cell.fg(fg);
            }
        }
        table.add_row(vec![Cell::new(field), cell]);
    }
    table
}

/// Print `value` as JSON or YAML
pub fn print_structured<T: Serialize>(format: OutputFormat, value: &T) -> CliResult<()> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)
            .map_err(|e| CliError::with_source("failed to render YAML", EXIT_ERROR, e))?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(value)
            .map_err(|e| CliError::with_source("failed to render JSON", EXIT_ERROR, e))?,
    };
    println!("{}", text.trim_end());
    Ok(())
}
