use crate::libs::messages::Message;
use crate::{msg_success, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
}

pub async fn cmd(done_args: DoneArgs) -> Result<()> {
    let (mut session, _fired) = super::open_session().await?;
    let task = session.toggle_completed(done_args.id).await?;

    if task.completed {
        msg_success!(Message::TaskCompleted(task.text));
    } else {
        msg_success!(Message::TaskReopened(task.text));
    }
    if session.celebrate(Local::now().date_naive()) {
        msg_print!(Message::AllTasksDone);
    }
    Ok(())
}
