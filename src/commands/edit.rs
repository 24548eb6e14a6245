use crate::api::TaskPatch;
use crate::libs::messages::Message;
use crate::libs::task::{Category, Priority};
use crate::{msg_info, msg_success};
use anyhow::{anyhow, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
    /// New task text
    #[arg(short, long)]
    text: Option<String>,
    /// New notes
    #[arg(short, long)]
    notes: Option<String>,
    /// New category
    #[arg(short, long)]
    category: Option<String>,
    /// New priority
    #[arg(short, long)]
    priority: Option<String>,
}

pub async fn cmd(edit_args: EditArgs) -> Result<()> {
    let patch = TaskPatch {
        text: edit_args.text,
        notes: edit_args.notes,
        category: edit_args.category.map(|c| c.parse::<Category>()).transpose().map_err(|e| anyhow!(e))?,
        priority: edit_args.priority.map(|p| p.parse::<Priority>()).transpose().map_err(|e| anyhow!(e))?,
    };
    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let (mut session, _fired) = super::open_session().await?;
    let task = session.update(edit_args.id, patch).await?;

    msg_success!(Message::TaskUpdated(task.text));
    Ok(())
}
