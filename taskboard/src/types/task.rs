//! Task types: Task and TaskColor

use super::ids::TaskId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A colored text card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Generated when absent from an imported blob
    #[serde(default)]
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub color: TaskColor,
}

impl Task {
    /// Create a new task with a fresh id and the default color
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            color: TaskColor::Default,
        }
    }

    /// Set the color
    pub fn with_color(mut self, color: TaskColor) -> Self {
        self.color = color;
        self
    }

    /// Set an explicit id
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }
}

/// Color tag of a task.
///
/// Stored as the class-style names `c-red`, `c-green`, `c-blue`, `c-yellow`
/// or `default`. Any other stored string reads back as `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskColor {
    #[default]
    Default,
    Red,
    Green,
    Blue,
    Yellow,
}

impl TaskColor {
    /// All colors in palette order
    pub const ALL: [TaskColor; 5] = [
        TaskColor::Default,
        TaskColor::Red,
        TaskColor::Green,
        TaskColor::Blue,
        TaskColor::Yellow,
    ];

    /// Stored tag name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Red => "c-red",
            Self::Green => "c-green",
            Self::Blue => "c-blue",
            Self::Yellow => "c-yellow",
        }
    }

    /// Primary accent as `#rrggbb`, `None` for the neutral default
    pub fn accent(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Red => Some("#ef4444"),
            Self::Green => Some("#22c55e"),
            Self::Blue => Some("#3b82f6"),
            Self::Yellow => Some("#f59e0b"),
        }
    }

    /// Read a stored tag, falling back to `Default` for unknown names
    pub fn from_tag_lenient(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl fmt::Display for TaskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised color name on strict parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown color '{}' (expected one of default, red, green, blue, yellow)",
            self.0
        )
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for TaskColor {
    type Err = UnknownColor;

    /// Accepts both the stored tag (`c-red`) and the bare name (`red`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let bare = name.strip_prefix("c-").unwrap_or(&name);
        match bare {
            "" | "default" => Ok(Self::Default),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "yellow" => Ok(Self::Yellow),
            _ => Err(UnknownColor(s.to_string())),
        }
    }
}

impl Serialize for TaskColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag_lenient(&tag))
    }
}
