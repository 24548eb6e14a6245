#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskStarred(String),
    TaskUnstarred(String),
    TaskAddedToMyDay(String),
    TaskRemovedFromMyDay(String),
    TaskArchived(String),
    TaskUnarchived(String),
    TaskMoved(String),
    TaskNotFound(i64),
    PrioritySuggested(String, String), // priority, matched keyword
    NoTasksFound,
    NoChangesDetected,

    // === DUE DATE MESSAGES ===
    DueDateSet(String, String),  // task text, date
    DueDateCleared(String),      // task text
    InvalidDate(String),         // raw input

    // === SUBTASK MESSAGES ===
    SubtaskAdded(String),   // subtask text
    SubtaskToggled(String), // subtask text
    SubtaskRemoved,

    // === DELETE / UNDO MESSAGES ===
    TaskDeletePending(String, u64), // task text, grace seconds
    PressEnterToUndo(u64),          // grace seconds
    DeleteUndone(String),           // task text
    DeleteCommitted(String),        // task text
    NothingToUndo,

    // === REMINDER MESSAGES ===
    ReminderSet(String, String), // task text, due timestamp
    ReminderFired(String),       // task text

    // === PROGRESS MESSAGES ===
    AllTasksDone,
    ProgressHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,

    // === STORE MESSAGES ===
    RunningMigration(u32, String), // version, name
}
