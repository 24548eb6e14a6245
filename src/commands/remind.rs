//! Due-date reminder command.
//!
//! Schedules a reminder for the task's due date and stays in the
//! foreground until it fires. Tasks without a due date or with one
//! already in the past are rejected before any timer is armed.

use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct RemindArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
}

pub async fn cmd(remind_args: RemindArgs) -> Result<()> {
    let (mut session, mut fired) = super::open_session().await?;

    let due = session.schedule_reminder(remind_args.id, Local::now().naive_local())?;
    let text = session.task(remind_args.id).map(|t| t.text.clone()).unwrap_or_default();
    msg_success!(Message::ReminderSet(text, due.to_string()));

    if let Some(reminder) = fired.recv().await {
        msg_print!(Message::ReminderFired(reminder.text));
    }
    Ok(())
}
