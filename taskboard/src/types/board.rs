//! Board-level types: Board and Column

use super::ids::TaskId;
use super::task::Task;
use crate::error::{BoardError, Result};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Column names of a freshly reset board, left to right
pub const DEFAULT_COLUMNS: [&str; 3] = ["To Do", "Doing", "Done"];

/// A named, ordered container of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create an empty column
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Position of a task within this column
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }
}

/// Where a task currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLocation {
    /// Index of the owning column
    pub column: usize,
    /// Index within that column's task list
    pub index: usize,
}

/// The board: an ordered sequence of uniquely named columns.
///
/// Serialized as a JSON object whose key order is the display order:
/// `{"To Do": [{"id": .., "text": .., "color": ..}], "Doing": [], ..}`.
/// Deserialization is the import schema check: it rejects anything that is
/// not such a mapping, blank or duplicate column names, blank task text and
/// task ids repeated anywhere on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
}

impl Default for Board {
    fn default() -> Self {
        Self::skeleton()
    }
}

impl Board {
    /// The canonical three empty columns
    pub fn skeleton() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(|name| Column::new(*name)).collect(),
        }
    }

    /// A board without columns
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Build a board from columns, checking every invariant
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let board = Self { columns };
        board.validate()?;
        Ok(board)
    }

    /// Check column-name and task-id uniqueness plus non-blank text
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for column in &self.columns {
            if column.name.trim().is_empty() {
                return Err(BoardError::invalid_format("column names must not be empty"));
            }
            if !names.insert(column.name.as_str()) {
                return Err(BoardError::invalid_format(format!(
                    "duplicate column name '{}'",
                    column.name
                )));
            }
            for task in &column.tasks {
                if task.text.trim().is_empty() {
                    return Err(BoardError::invalid_format(format!(
                        "task {} in column '{}' has empty text",
                        task.id, column.name
                    )));
                }
                if !ids.insert(&task.id) {
                    return Err(BoardError::invalid_format(format!(
                        "duplicate task id {}",
                        task.id
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut Vec<Column> {
        &mut self.columns
    }

    /// Column names in display order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Find a column by exact (case-sensitive) name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub(crate) fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Locate a task anywhere on the board
    pub fn locate_task(&self, id: &TaskId) -> Option<TaskLocation> {
        self.columns.iter().enumerate().find_map(|(column, c)| {
            c.position_of(id)
                .map(|index| TaskLocation { column, index })
        })
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        let loc = self.locate_task(id)?;
        Some(&self.columns[loc.column].tasks[loc.index])
    }

    pub(crate) fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        let loc = self.locate_task(id)?;
        Some(&mut self.columns[loc.column].tasks[loc.index])
    }

    /// Name of the column that owns a task
    pub fn task_column(&self, id: &TaskId) -> Option<&str> {
        let loc = self.locate_task(id)?;
        Some(self.columns[loc.column].name.as_str())
    }

    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.locate_task(id).is_some()
    }

    /// Every task id, column by column
    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> + '_ {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter().map(|t| &t.id))
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// A task id not yet used on this board
    pub(crate) fn fresh_task_id(&self) -> TaskId {
        loop {
            let id = TaskId::new();
            if !self.contains_task(&id) {
                return id;
            }
        }
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.name, &column.tasks)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(BoardVisitor)
    }
}

struct BoardVisitor;

impl<'de> Visitor<'de> for BoardVisitor {
    type Value = Board;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from column name to a list of tasks")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Board, A::Error> {
        let mut columns: Vec<Column> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        let mut ids: HashSet<TaskId> = HashSet::new();

        while let Some(name) = map.next_key::<String>()? {
            let tasks: Vec<Task> = map.next_value()?;

            if name.trim().is_empty() {
                return Err(de::Error::custom("column names must not be empty"));
            }
            if columns.iter().any(|c| c.name == name) {
                return Err(de::Error::custom(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
            for task in &tasks {
                if task.text.trim().is_empty() {
                    return Err(de::Error::custom(format!(
                        "task {} in column '{}' has empty text",
                        task.id, name
                    )));
                }
                if !ids.insert(task.id.clone()) {
                    return Err(de::Error::custom(format!("duplicate task id {}", task.id)));
                }
            }

            columns.push(Column { name, tasks });
        }

        Ok(Board { columns })
    }
}
