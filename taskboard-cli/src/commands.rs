//! Command handlers
//!
//! Every invocation opens the board once, holds the store lock for the whole
//! load, mutate and save cycle, and releases it on exit.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use colored::Colorize;
use is_terminal::IsTerminal;
use serde_json::Value;
use taskboard::board::{ExportBoard, GetBoard, ImportBoard, ResetBoard};
use taskboard::column::{AddColumn, DeleteColumn, ListColumns, MoveColumn, RenameColumn};
use taskboard::drag::{DropOnColumn, StartTaskDrag};
use taskboard::store::StoreLock;
use taskboard::task::{AddTask, DeleteTask, GetTask, RecolorTask, RenameTask};
use taskboard::{
    dispatch_all, parse_batch, BoardContext, BoardError, BoardOperationProcessor, Execute,
    FileBlobStore, OperationProcessor, TaskColor,
};
use taskboard_config::BoardConfig;

use crate::cli::{Cli, ColumnCommands, Commands, OutputFormat, TaskCommands};
use crate::error::{CliError, CliResult};
use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use crate::render;

/// Where the board lives and who is editing it, after flags override config
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub actor: Option<String>,
    pub default_color: TaskColor,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &BoardConfig) -> Self {
        let storage_dir = cli
            .dir
            .clone()
            .unwrap_or_else(|| config.resolved_storage_dir());
        let storage_key = cli
            .key
            .clone()
            .unwrap_or_else(|| config.storage_key.clone());
        let actor = config
            .actor
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .or_else(|| std::env::var("USERNAME").ok());
        let default_color = config.default_color.parse().unwrap_or_else(|e| {
            tracing::warn!(%e, "ignoring configured default_color");
            TaskColor::Default
        });

        Self {
            storage_dir,
            storage_key,
            actor,
            default_color,
        }
    }
}

/// An open board plus the lock that keeps other processes out
pub struct Session {
    ctx: BoardContext,
    processor: BoardOperationProcessor,
    _lock: StoreLock,
}

impl Session {
    pub fn open(settings: &Settings) -> CliResult<Self> {
        let store = FileBlobStore::new(&settings.storage_dir);
        let lock = store.lock()?;
        tracing::debug!(
            dir = %settings.storage_dir.display(),
            key = %settings.storage_key,
            "opening board"
        );
        let ctx = BoardContext::open_with_key(store, settings.storage_key.clone());

        let processor = match &settings.actor {
            Some(actor) => BoardOperationProcessor::new().with_actor(actor.clone()),
            None => BoardOperationProcessor::new(),
        };

        Ok(Self {
            ctx,
            processor,
            _lock: lock,
        })
    }

    fn apply<O>(&mut self, op: &O) -> CliResult<Value>
    where
        O: Execute<BoardContext, BoardError>,
    {
        Ok(self.processor.process(op, &mut self.ctx)?)
    }

    /// Print a pending save failure; true when there was one
    fn report_storage_warning(&mut self) -> bool {
        match self.ctx.take_storage_warning() {
            Some(warning) => {
                eprintln!(
                    "{} the change was applied but not saved: {}",
                    "Warning:".yellow().bold(),
                    warning
                );
                true
            }
            None => false,
        }
    }
}

/// Run the parsed command line; returns the process exit code
pub fn run(cli: &Cli, config: &BoardConfig) -> CliResult<i32> {
    let settings = Settings::resolve(cli, config);
    let format = cli.format.unwrap_or_default();
    let show = Commands::Show;
    let command = cli.command.as_ref().unwrap_or(&show);

    // Confirm before taking the lock so a pending prompt never blocks others
    if let Commands::Reset { yes } = command {
        if !confirm_reset(*yes)? {
            println!("Cancelled.");
            return Ok(EXIT_SUCCESS);
        }
    }

    let mut session = Session::open(&settings)?;
    let outcome = execute(&mut session, command, format, &settings);
    let warned = session.report_storage_warning();

    outcome.map(|()| if warned { EXIT_WARNING } else { EXIT_SUCCESS })
}

fn execute(
    session: &mut Session,
    command: &Commands,
    format: OutputFormat,
    settings: &Settings,
) -> CliResult<()> {
    match command {
        Commands::Show => show_board(session, format),
        Commands::Column { action } => column_command(session, action, format),
        Commands::Task { action } => task_command(session, action, format, settings),
        Commands::Reset { .. } => {
            let value = session.apply(&ResetBoard::new())?;
            report(format, &value, || "Board reset to To Do / Doing / Done".to_string())
        }
        Commands::Export { output, stdout } => {
            export_board(session, output.as_deref(), *stdout, format)
        }
        Commands::Import { file } => {
            let payload = read_input(Some(file))?;
            let value = session.apply(&ImportBoard::new(payload))?;
            report(format, &value, || {
                format!(
                    "Imported {} columns and {} tasks",
                    value["columns"].as_array().map_or(0, Vec::len),
                    value["task_count"]
                )
            })
        }
        Commands::Apply { file } => apply_intents(session, file.as_deref(), format),
    }
}

fn show_board(session: &mut Session, format: OutputFormat) -> CliResult<()> {
    let value = session.apply(&GetBoard::new())?;
    match format {
        OutputFormat::Table if session.ctx.board().is_empty() => {
            println!("The board has no columns. Add one with `taskboard column add <NAME>`.");
        }
        OutputFormat::Table => println!("{}", render::board_table(session.ctx.board())),
        _ => render::print_structured(format, &value)?,
    }
    Ok(())
}

fn column_command(
    session: &mut Session,
    action: &ColumnCommands,
    format: OutputFormat,
) -> CliResult<()> {
    match action {
        ColumnCommands::List => {
            let value = session.apply(&ListColumns::new())?;
            match format {
                OutputFormat::Table => println!("{}", render::columns_table(session.ctx.board())),
                _ => render::print_structured(format, &value)?,
            }
            Ok(())
        }
        ColumnCommands::Add { name } => {
            let value = session.apply(&AddColumn::new(name.as_str()))?;
            report(format, &value, || format!("Added column '{}'", name.trim()))
        }
        ColumnCommands::Rename { name, new_name } => {
            let value = session.apply(&RenameColumn::new(name.as_str(), new_name.as_str()))?;
            report(format, &value, || {
                format!("Renamed column '{}' to '{}'", name, new_name.trim())
            })
        }
        ColumnCommands::Delete { name } => {
            let value = session.apply(&DeleteColumn::new(name.as_str()))?;
            report(format, &value, || {
                format!(
                    "Deleted column '{}' and {} task(s)",
                    name, value["tasks_deleted"]
                )
            })
        }
        ColumnCommands::Move { from, to } => {
            let value = session.apply(&MoveColumn::new(*from, *to))?;
            report(format, &value, || {
                format!(
                    "Columns: {}",
                    session_column_names(&session.ctx).join(" | ")
                )
            })
        }
    }
}

fn session_column_names(ctx: &BoardContext) -> Vec<String> {
    ctx.board()
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn task_command(
    session: &mut Session,
    action: &TaskCommands,
    format: OutputFormat,
    settings: &Settings,
) -> CliResult<()> {
    match action {
        TaskCommands::Add {
            text,
            column,
            color,
        } => {
            let op = match column {
                Some(column) => AddTask::new(column.as_str(), text.as_str()),
                None => AddTask::in_first_column(text.as_str()),
            }
            .with_color(color.unwrap_or(settings.default_color));
            let value = session.apply(&op)?;
            report(format, &value, || {
                let color = value["color"]
                    .as_str()
                    .map(TaskColor::from_tag_lenient)
                    .unwrap_or_default();
                format!(
                    "Added task {} to '{}' ({})",
                    plain(&value["id"]),
                    plain(&value["column"]),
                    render::swatch(color)
                )
            })
        }
        TaskCommands::Rename { id, text } => {
            let value = session.apply(&RenameTask::new(id.as_str(), text.as_str()))?;
            report(format, &value, || format!("Renamed task {id}"))
        }
        TaskCommands::Recolor { id, color } => {
            let value = session.apply(&RecolorTask::new(id.as_str(), *color))?;
            report(format, &value, || {
                format!("Task {id} is now {}", render::swatch(*color))
            })
        }
        TaskCommands::Delete { id } => {
            let value = session.apply(&DeleteTask::new(id.as_str()))?;
            report(format, &value, || format!("Deleted task {id}"))
        }
        TaskCommands::Move { id, to } => move_task(session, id, to, format),
        TaskCommands::Get { id } => {
            let value = session.apply(&GetTask::new(id.as_str()))?;
            match format {
                OutputFormat::Table => println!("{}", render::task_table(&value)),
                _ => render::print_structured(format, &value)?,
            }
            Ok(())
        }
    }
}

/// Move a task the way a pointer would: pick it up, release it over `to`
fn move_task(session: &mut Session, id: &str, to: &str, format: OutputFormat) -> CliResult<()> {
    // A drop outside every column is a silent cancel; on the command line
    // that is a typo worth reporting
    if !session.ctx.board().contains_column(to) {
        return Err(BoardError::ColumnNotFound {
            name: to.to_string(),
        }
        .into());
    }

    session.apply(&StartTaskDrag::new(id))?;
    let value = session.apply(&DropOnColumn::new(to))?;
    report(format, &value, || {
        if value["moved"].as_bool().unwrap_or(false) {
            format!("Moved task {id} from '{}' to '{to}'", plain(&value["from"]))
        } else {
            format!("Task {id} is already in '{to}'")
        }
    })
}

fn export_board(
    session: &mut Session,
    output: Option<&Path>,
    stdout: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let value = session.apply(&ExportBoard::new())?;
    let content = value["content"].as_str().unwrap_or_default();

    if stdout {
        println!("{content}");
        return Ok(());
    }

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(value["file_name"].as_str().unwrap_or("Tasks.json")),
    };
    fs::write(&path, content).map_err(|e| {
        CliError::with_source(
            format!("failed to write {}", path.display()),
            EXIT_ERROR,
            e,
        )
    })?;

    let summary = serde_json::json!({ "path": path.display().to_string() });
    report(format, &summary, || format!("Exported board to {}", path.display()))
}

fn apply_intents(session: &mut Session, file: Option<&Path>, format: OutputFormat) -> CliResult<()> {
    let input = read_input(file)?;
    let intents = parse_batch(&input)?;
    let total = intents.len();

    let values = dispatch_all(&session.processor, &mut session.ctx, &intents).map_err(
        |(index, error)| {
            CliError::with_source(
                format!(
                    "intent {} of {total} ({}) failed; earlier intents were applied",
                    index + 1,
                    intents[index].op_string()
                ),
                EXIT_ERROR,
                error,
            )
        },
    )?;

    match format {
        OutputFormat::Table => println!("Applied {total} intent(s)"),
        _ => render::print_structured(format, &values)?,
    }
    Ok(())
}

/// Print the confirmation line, or the raw value for machine formats
fn report(format: OutputFormat, value: &Value, summary: impl FnOnce() -> String) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", summary());
            Ok(())
        }
        _ => render::print_structured(format, value),
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read a file, or stdin for `None` and `-`
fn read_input(file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path).map_err(|e| {
            CliError::with_source(format!("failed to read {}", path.display()), EXIT_ERROR, e)
        }),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn confirm_reset(yes: bool) -> CliResult<bool> {
    if yes {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::new(
            "refusing to reset the board without confirmation; pass --yes",
            EXIT_ERROR,
        ));
    }

    println!("Warning: this deletes every column and task on the board");
    dialoguer::Confirm::new()
        .with_prompt("Reset to the empty To Do / Doing / Done board?")
        .default(false)
        .interact()
        .map_err(|e| CliError::with_source("confirmation failed", EXIT_ERROR, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("taskboard").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let config = BoardConfig::default().with_storage_dir("/from/config");
        let settings = Settings::resolve(&cli(&["--dir", "/from/flag", "--key", "Other"]), &config);
        assert_eq!(settings.storage_dir, PathBuf::from("/from/flag"));
        assert_eq!(settings.storage_key, "Other");

        let settings = Settings::resolve(&cli(&[]), &config);
        assert_eq!(settings.storage_dir, PathBuf::from("/from/config"));
        assert_eq!(settings.storage_key, taskboard::DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_bad_default_color_falls_back() {
        let config = BoardConfig {
            default_color: "purple".into(),
            actor: Some("sam".into()),
            ..BoardConfig::default()
        };
        let settings = Settings::resolve(&cli(&[]), &config);
        assert_eq!(settings.default_color, TaskColor::Default);
        assert_eq!(settings.actor.as_deref(), Some("sam"));
    }

    #[test]
    fn test_session_holds_lock() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::resolve(
            &cli(&["--dir", temp.path().to_str().unwrap()]),
            &BoardConfig::default(),
        );

        let session = Session::open(&settings).unwrap();
        let err = Session::open(&settings).err().unwrap();
        assert!(err.message.contains("another taskboard process"));

        drop(session);
        assert!(Session::open(&settings).is_ok());
    }

    #[test]
    fn test_move_task_goes_through_drag() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::resolve(
            &cli(&["--dir", temp.path().to_str().unwrap()]),
            &BoardConfig::default(),
        );
        let mut session = Session::open(&settings).unwrap();
        let added = session.apply(&AddTask::in_first_column("walk")).unwrap();
        let id = added["id"].as_str().unwrap().to_string();

        move_task(&mut session, &id, "Done", OutputFormat::Json).unwrap();
        assert_eq!(
            session.ctx.board().task_column(&id.as_str().into()),
            Some("Done")
        );
        assert!(session.ctx.drag().is_idle());

        let err = move_task(&mut session, &id, "Nowhere", OutputFormat::Json).unwrap_err();
        assert!(err.message.contains("Nowhere"));
    }
}
