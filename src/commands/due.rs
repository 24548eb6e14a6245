use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct DueArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
    /// Due date (YYYY-MM-DD)
    date: Option<String>,
    /// Clear the due date
    #[arg(long, conflicts_with = "date")]
    clear: bool,
}

pub async fn cmd(due_args: DueArgs) -> Result<()> {
    let due = match (&due_args.date, due_args.clear) {
        (Some(raw), _) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => msg_bail_anyhow!(Message::InvalidDate(raw.clone())),
        },
        (None, true) => None,
        (None, false) => msg_bail_anyhow!(Message::InvalidDate("<missing>".to_string())),
    };

    let (mut session, _fired) = super::open_session().await?;
    let task = session.set_due_date(due_args.id, due).await?;

    match due {
        Some(date) => msg_success!(Message::DueDateSet(task.text, date.to_string())),
        None => msg_success!(Message::DueDateCleared(task.text)),
    }
    Ok(())
}
