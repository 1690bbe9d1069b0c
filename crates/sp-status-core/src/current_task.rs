use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

pub const IDLE_TITLE: &str = "Idle";
pub const UNKNOWN_TASK_TITLE: &str = "Unknown Task";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Shape(String),
}

/// The task the app was tracking when the backup was written.
///
/// `id` is only set when `currentTaskId` resolved to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTask {
    pub title: String,
    pub id: Option<String>,
}

impl CurrentTask {
    pub fn idle() -> Self {
        Self {
            title: IDLE_TITLE.to_string(),
            id: None,
        }
    }

    pub fn from_error(err: &ExtractError) -> Self {
        Self {
            title: format!("Error: {err}"),
            id: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }
}

/// Read the backup at `path`, folding every failure into the returned title.
pub fn read_current_task(path: Option<&Path>) -> CurrentTask {
    let Some(path) = path else {
        return CurrentTask::idle();
    };
    let result = fs::read_to_string(path)
        .map_err(ExtractError::from)
        .and_then(|raw| parse_current_task(&raw));
    match result {
        Ok(task) => task,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "failed to extract current task");
            CurrentTask::from_error(&err)
        }
    }
}

pub fn parse_current_task(raw: &str) -> Result<CurrentTask, ExtractError> {
    let doc: Value = serde_json::from_str(raw)?;
    extract_current_task(&doc)
}

pub fn extract_current_task(doc: &Value) -> Result<CurrentTask, ExtractError> {
    let root = expect_object(doc, "backup document")?;
    let payload = match root.get("data") {
        Some(data) => expect_object(data, "data")?,
        None => root,
    };

    let empty = Map::new();
    let task = match payload.get("task") {
        Some(task) => expect_object(task, "task")?,
        None => &empty,
    };
    let current_id = match task.get("currentTaskId").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id,
        _ => return Ok(CurrentTask::idle()),
    };

    // Entities only matter once there is an id to resolve.
    let entities = match task.get("entities") {
        Some(entities) => expect_object(entities, "task.entities")?,
        None => &empty,
    };
    let Some(entity) = entities.get(current_id) else {
        return Ok(CurrentTask::idle());
    };
    let entity = expect_object(entity, "task entity")?;
    let title = match entity.get("title") {
        Some(Value::String(title)) => title.clone(),
        None | Some(Value::Null) => UNKNOWN_TASK_TITLE.to_string(),
        Some(other) => other.to_string(),
    };

    Ok(CurrentTask {
        title,
        id: Some(current_id.to_string()),
    })
}

fn expect_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, ExtractError> {
    value
        .as_object()
        .ok_or_else(|| ExtractError::Shape(format!("{what} is not an object")))
}
