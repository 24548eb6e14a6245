//! Display implementation for tudu application messages.
//!
//! All user-facing text lives here, so wording changes never touch
//! command logic and every message is rendered the same way everywhere.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // Task messages
            Message::TaskCreated(text) => format!("Task '{}' created", text),
            Message::TaskUpdated(text) => format!("Task '{}' updated", text),
            Message::TaskCompleted(text) => format!("Task '{}' completed", text),
            Message::TaskReopened(text) => format!("Task '{}' reopened", text),
            Message::TaskStarred(text) => format!("Task '{}' marked important", text),
            Message::TaskUnstarred(text) => format!("Task '{}' no longer important", text),
            Message::TaskAddedToMyDay(text) => format!("Task '{}' added to My Day", text),
            Message::TaskRemovedFromMyDay(text) => format!("Task '{}' removed from My Day", text),
            Message::TaskArchived(text) => format!("Task '{}' archived", text),
            Message::TaskUnarchived(text) => format!("Task '{}' restored from archive", text),
            Message::TaskMoved(text) => format!("Task '{}' moved", text),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::PrioritySuggested(priority, keyword) => {
                format!("Priority set to {} (matched '{}')", priority, keyword)
            }
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),

            // Due date messages
            Message::DueDateSet(text, date) => format!("Task '{}' is now due {}", text, date),
            Message::DueDateCleared(text) => format!("Due date cleared for '{}'", text),
            Message::InvalidDate(raw) => format!("'{}' is not a valid date (expected YYYY-MM-DD)", raw),

            // Subtask messages
            Message::SubtaskAdded(text) => format!("Subtask '{}' added", text),
            Message::SubtaskToggled(text) => format!("Subtask '{}' toggled", text),
            Message::SubtaskRemoved => "Subtask removed".to_string(),

            // Delete and undo messages
            Message::TaskDeletePending(text, secs) => {
                format!("Task '{}' deleted (undo available for {} seconds)", text, secs)
            }
            Message::PressEnterToUndo(secs) => format!("Press Enter within {} seconds to undo", secs),
            Message::DeleteUndone(text) => format!("Task '{}' restored", text),
            Message::DeleteCommitted(text) => format!("Task '{}' permanently deleted", text),
            Message::NothingToUndo => "No deletion pending undo".to_string(),

            // Reminder messages
            Message::ReminderSet(text, due) => format!("Reminder for '{}' set for {}", text, due),
            Message::ReminderFired(text) => format!("⏰ Reminder: {}", text),

            // Progress messages
            Message::AllTasksDone => "🎉 All tasks completed, nice work!".to_string(),
            Message::ProgressHeader => "Progress".to_string(),

            // Configuration messages
            Message::ConfigSaved => "Configuration saved".to_string(),

            // Store messages
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
        };
        write!(f, "{}", text)
    }
}
