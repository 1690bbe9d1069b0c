use serde::Serialize;

use crate::current_task::CurrentTask;

pub const TEXT_PREFIX: &str = "SP: ";
pub const TOOLTIP_SOURCE: &str = "(Source: Last Backup)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Text,
    Waybar,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Active,
    Idle,
}

/// One line of a Waybar `return-type: json` custom module.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WaybarStatus {
    pub text: String,
    pub tooltip: String,
    pub class: StatusClass,
}

impl WaybarStatus {
    pub fn from_task(task: &CurrentTask) -> Self {
        Self {
            text: status_text(task),
            tooltip: format!("Current Task: {}\n{}", task.title, TOOLTIP_SOURCE),
            class: if task.is_active() {
                StatusClass::Active
            } else {
                StatusClass::Idle
            },
        }
    }
}

pub fn status_text(task: &CurrentTask) -> String {
    format!("{TEXT_PREFIX}{}", task.title)
}

pub fn render(task: &CurrentTask, mode: OutputMode) -> Result<String, serde_json::Error> {
    match mode {
        OutputMode::Text => Ok(status_text(task)),
        OutputMode::Waybar => serde_json::to_string(&WaybarStatus::from_task(task)),
    }
}
