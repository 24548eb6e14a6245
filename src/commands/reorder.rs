use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
    /// Place the task directly before this one (end of list when omitted)
    #[arg(short, long)]
    before: Option<i64>,
}

pub async fn cmd(move_args: MoveArgs) -> Result<()> {
    let (mut session, _fired) = super::open_session().await?;
    session.reorder(move_args.id, move_args.before)?;

    let text = session.task(move_args.id).map(|t| t.text.clone()).unwrap_or_default();
    msg_success!(Message::TaskMoved(text));
    Ok(())
}
