pub mod add;
pub mod archive;
pub mod done;
pub mod due;
pub mod edit;
pub mod init;
pub mod list;
pub mod myday;
pub mod remind;
pub mod reorder;
pub mod rm;
pub mod stats;
pub mod star;
pub mod sub;

use crate::api::AnyGateway;
use crate::libs::config::Config;
use crate::libs::reminder::Reminder;
use crate::libs::session::Session;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Show a task view")]
    List(list::ListArgs),
    #[command(about = "Toggle task completion")]
    Done(done::DoneArgs),
    #[command(about = "Toggle task importance")]
    Star(star::StarArgs),
    #[command(about = "Toggle My Day membership")]
    Myday(myday::MydayArgs),
    #[command(about = "Toggle archive state")]
    Archive(archive::ArchiveArgs),
    #[command(about = "Set or clear a due date")]
    Due(due::DueArgs),
    #[command(about = "Edit task fields")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task with an undo window")]
    Rm(rm::RmArgs),
    #[command(name = "move", about = "Move a task within the list")]
    Move(reorder::MoveArgs),
    #[command(about = "Manage subtasks")]
    Sub(sub::SubArgs),
    #[command(about = "Show progress and streak")]
    Stats(stats::StatsArgs),
    #[command(about = "Set a reminder for a task's due date")]
    Remind(remind::RemindArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Done(args) => done::cmd(args).await,
            Commands::Star(args) => star::cmd(args).await,
            Commands::Myday(args) => myday::cmd(args).await,
            Commands::Archive(args) => archive::cmd(args).await,
            Commands::Due(args) => due::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Rm(args) => rm::cmd(args).await,
            Commands::Move(args) => reorder::cmd(args).await,
            Commands::Sub(args) => sub::cmd(args).await,
            Commands::Stats(args) => stats::cmd(args).await,
            Commands::Remind(args) => remind::cmd(args).await,
        }
    }
}

/// Builds a session against the configured gateway and loads the
/// current task collection.
pub(crate) async fn open_session() -> Result<(Session<AnyGateway>, UnboundedReceiver<Reminder>)> {
    let config = Config::read()?;
    let gateway = AnyGateway::from_config(&config)?;
    let (mut session, fired) = Session::new(gateway, config.undo_grace_seconds());
    session.load().await?;
    Ok((session, fired))
}
