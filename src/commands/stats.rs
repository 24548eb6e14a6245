use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {}

pub async fn cmd(_stats_args: StatsArgs) -> Result<()> {
    let (mut session, _fired) = super::open_session().await?;

    msg_print!(Message::ProgressHeader);
    View::progress(&session.progress(), session.streak())?;

    if session.celebrate(Local::now().date_naive()) {
        msg_success!(Message::AllTasksDone);
    }
    Ok(())
}
