use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ArchiveArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
}

pub async fn cmd(archive_args: ArchiveArgs) -> Result<()> {
    let (mut session, _fired) = super::open_session().await?;
    let task = session.toggle_archived(archive_args.id).await?;

    if task.archived {
        msg_success!(Message::TaskArchived(task.text));
    } else {
        msg_success!(Message::TaskUnarchived(task.text));
    }
    Ok(())
}
