use serde::Serialize;

use crate::model::config::DisplayConfig;
use crate::model::priority::Priority;
use crate::model::task::Task;
use crate::model::todo_item::TodoItem;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub priority: &'static str,
    pub flag: bool,
    pub completed: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub due_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub due_time: String,
}

#[derive(Serialize)]
pub struct TodoJson {
    pub id: String,
    pub title: String,
    pub priority: &'static str,
    pub completed: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub owner: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task, display: &DisplayConfig) -> TaskJson {
    TaskJson {
        id: task.id.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        url: task.url.clone(),
        priority: task.priority.name(),
        flag: task.flag,
        completed: task.completed,
        due_date: task.due.format_date(&display.date_format),
        due_time: task.due.format_time(&display.time_format),
    }
}

pub fn todo_to_json(item: &TodoItem) -> TodoJson {
    TodoJson {
        id: item.id.clone(),
        title: item.title.clone(),
        priority: item.priority().name(),
        completed: item.completed,
        owner: item.owner.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn check_char(done: bool) -> char {
    if done { 'x' } else { ' ' }
}

/// One-line task summary: `[ ] id Title (High, flagged) due ...`
pub fn format_task_line(task: &Task, display: &DisplayConfig) -> String {
    let mut marks = Vec::new();
    if task.priority != Priority::None {
        marks.push(task.priority.label().to_string());
    }
    if task.flag {
        marks.push("flagged".to_string());
    }
    let marks = if marks.is_empty() {
        String::new()
    } else {
        format!(" ({})", marks.join(", "))
    };
    let due = format_due(task, display)
        .map(|d| format!(" due {}", d))
        .unwrap_or_default();
    format!(
        "[{}] {} {}{}{}",
        check_char(task.completed),
        task.id,
        task.title,
        marks,
        due
    )
}

fn format_due(task: &Task, display: &DisplayConfig) -> Option<String> {
    let date = task.due.format_date(&display.date_format);
    let time = task.due.format_time(&display.time_format);
    match (date.is_empty(), time.is_empty()) {
        (true, true) => None,
        (false, true) => Some(date),
        (true, false) => Some(time),
        (false, false) => Some(format!("{} {}", date, time)),
    }
}

/// Detailed task view
pub fn format_task_detail(task: &Task, display: &DisplayConfig) -> Vec<String> {
    let mut lines = vec![format!("[{}] {} {}", check_char(task.completed), task.id, task.title)];
    if !task.description.is_empty() {
        lines.push(format!("  description: {}", task.description));
    }
    if !task.url.is_empty() {
        lines.push(format!("  url: {}", task.url));
    }
    lines.push(format!("  priority: {}", task.priority.label()));
    lines.push(format!("  flag: {}", task.flag_option()));
    let date = task.due.format_date(&display.date_format);
    if !date.is_empty() {
        lines.push(format!("  date: {}", date));
    }
    let time = task.due.format_time(&display.time_format);
    if !time.is_empty() {
        lines.push(format!("  time: {}", time));
    }
    lines
}

pub fn format_todo_line(item: &TodoItem) -> String {
    format!(
        "[{}] {} {} ({})",
        check_char(item.completed),
        item.id,
        item.title,
        item.priority().label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn sample() -> Task {
        let mut task = Task::new("Ship release");
        task.id = "abc".into();
        task.priority = Priority::High;
        task.flag = true;
        task.due.date = NaiveDate::from_ymd_opt(2024, 3, 15);
        task.due.time = NaiveTime::from_hms_opt(17, 0, 0);
        task
    }

    #[test]
    fn task_line_with_marks_and_due() {
        let line = format_task_line(&sample(), &DisplayConfig::default());
        assert_eq!(line, "[ ] abc Ship release (High, flagged) due Fri, 15 Mar 2024 17:00");
    }

    #[test]
    fn task_line_plain() {
        let mut task = Task::new("Plain");
        task.id = "p".into();
        task.completed = true;
        assert_eq!(format_task_line(&task, &DisplayConfig::default()), "[x] p Plain");
    }

    #[test]
    fn task_line_time_only() {
        let mut task = sample();
        task.due.date = None;
        task.priority = Priority::None;
        task.flag = false;
        assert_eq!(
            format_task_line(&task, &DisplayConfig::default()),
            "[ ] abc Ship release due 17:00"
        );
    }

    #[test]
    fn detail_lists_set_fields() {
        let mut task = sample();
        task.url = "https://example.com".into();
        let lines = format_task_detail(&task, &DisplayConfig::default());
        assert_eq!(
            lines,
            vec![
                "[ ] abc Ship release",
                "  url: https://example.com",
                "  priority: High",
                "  flag: On",
                "  date: Fri, 15 Mar 2024",
                "  time: 17:00",
            ]
        );
    }

    #[test]
    fn json_uses_configured_formats() {
        let display = DisplayConfig {
            date_format: "%Y-%m-%d".into(),
            time_format: "%H:%M".into(),
        };
        let v = serde_json::to_value(task_to_json(&sample(), &display)).unwrap();
        assert_eq!(v["due_date"], "2024-03-15");
        assert_eq!(v["due_time"], "17:00");
        assert_eq!(v["priority"], "HIGH");
        assert!(v.get("description").is_none());
    }

    #[test]
    fn todo_line() {
        let mut item = TodoItem::new("Milk", Priority::Low, "me");
        item.id = "t9".into();
        assert_eq!(format_todo_line(&item), "[ ] t9 Milk (Low)");
    }
}
