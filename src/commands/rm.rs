//! Task deletion command with a grace window.
//!
//! Deletion is staged, not immediate: the task disappears from views
//! right away but the store is only touched once the grace window runs
//! out. Pressing Enter inside the window restores the task without any
//! gateway traffic. `--now` skips the window entirely.

use crate::libs::messages::Message;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Duration, Local};
use clap::Args;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tokio::time::sleep;

#[derive(Debug, Args)]
pub struct RmArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
    /// Delete immediately without an undo window
    #[arg(long)]
    now: bool,
}

pub async fn cmd(rm_args: RmArgs) -> Result<()> {
    let (mut session, _fired) = super::open_session().await?;
    let grace = session.grace_seconds();

    let text = match session.task(rm_args.id) {
        Some(task) => task.text.clone(),
        None => {
            msg_info!(Message::TaskNotFound(rm_args.id));
            return Ok(());
        }
    };
    let staged_at = Local::now().naive_local();
    session.delete(rm_args.id, staged_at)?;

    if rm_args.now {
        session.reap_expired(staged_at + Duration::seconds(grace as i64)).await?;
        msg_success!(Message::DeleteCommitted(text));
        return Ok(());
    }

    msg_print!(Message::TaskDeletePending(text.clone(), grace));
    msg_info!(Message::PressEnterToUndo(grace));

    let mut line = String::new();
    let mut reader = BufReader::new(stdin());
    tokio::select! {
        _ = sleep(std::time::Duration::from_secs(grace)) => {
            session.reap_expired(Local::now().naive_local()).await?;
            msg_success!(Message::DeleteCommitted(text));
        }
        _ = reader.read_line(&mut line) => {
            match session.undo_last(Local::now().naive_local()) {
                Some(task) => msg_success!(Message::DeleteUndone(task.text)),
                None => msg_info!(Message::NothingToUndo),
            }
        }
    }
    Ok(())
}
