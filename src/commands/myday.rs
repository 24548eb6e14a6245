use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MydayArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
}

pub async fn cmd(myday_args: MydayArgs) -> Result<()> {
    let (mut session, _fired) = super::open_session().await?;
    let task = session.toggle_my_day(myday_args.id).await?;

    if task.my_day {
        msg_success!(Message::TaskAddedToMyDay(task.text));
    } else {
        msg_success!(Message::TaskRemovedFromMyDay(task.text));
    }
    Ok(())
}
