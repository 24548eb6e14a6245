use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StarArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
}

pub async fn cmd(star_args: StarArgs) -> Result<()> {
    let (mut session, _fired) = super::open_session().await?;
    let task = session.toggle_important(star_args.id).await?;

    if task.important {
        msg_success!(Message::TaskStarred(task.text));
    } else {
        msg_success!(Message::TaskUnstarred(task.text));
    }
    Ok(())
}
