use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SubArgs {
    #[command(subcommand)]
    command: SubCommands,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    #[command(about = "Add a subtask")]
    Add {
        /// Parent task ID
        task_id: i64,
        /// Subtask text
        text: String,
    },
    #[command(about = "Toggle subtask completion")]
    Done {
        /// Parent task ID
        task_id: i64,
        /// Subtask ID
        subtask_id: i64,
    },
    #[command(about = "Remove a subtask")]
    Rm {
        /// Parent task ID
        task_id: i64,
        /// Subtask ID
        subtask_id: i64,
    },
}

pub async fn cmd(sub_args: SubArgs) -> Result<()> {
    let (mut session, _fired) = super::open_session().await?;

    match sub_args.command {
        SubCommands::Add { task_id, text } => {
            session.add_subtask(task_id, &text).await?;
            msg_success!(Message::SubtaskAdded(text));
        }
        SubCommands::Done { task_id, subtask_id } => {
            let task = session.toggle_subtask(task_id, subtask_id).await?;
            let text = task
                .subtasks
                .iter()
                .find(|s| s.id == subtask_id)
                .map(|s| s.text.clone())
                .unwrap_or_default();
            msg_success!(Message::SubtaskToggled(text));
        }
        SubCommands::Rm { task_id, subtask_id } => {
            session.delete_subtask(task_id, subtask_id).await?;
            msg_success!(Message::SubtaskRemoved);
        }
    }
    Ok(())
}
