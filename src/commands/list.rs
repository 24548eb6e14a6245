//! View rendering command.
//!
//! Builds a selection from the flags, derives the view through the
//! session and prints it as tables, one per section.

use crate::libs::messages::Message;
use crate::libs::selection::{CategoryFilter, GroupMode, Selection, SortMode, View as TaskView};
use crate::libs::view::View;
use crate::msg_info;
use anyhow::{anyhow, Result};
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// View: myday, important, planned, tasks or archive
    #[arg(short, long, default_value = "tasks")]
    view: String,
    /// Substring filter on task text (case-insensitive)
    #[arg(short, long)]
    search: Option<String>,
    /// Only show one category
    #[arg(short, long)]
    category: Option<String>,
    /// Sort: created, alpha, due, important or priority
    #[arg(long, default_value = "created")]
    sort: String,
    /// Group: none, completed, important or planned
    #[arg(short, long, default_value = "none")]
    group: String,
}

pub async fn cmd(list_args: ListArgs) -> Result<()> {
    let selection = Selection {
        view: list_args.view.parse::<TaskView>().map_err(|e| anyhow!(e))?,
        search: list_args.search.unwrap_or_default(),
        category: match list_args.category {
            Some(raw) => CategoryFilter::Only(raw.parse().map_err(|e: String| anyhow!(e))?),
            None => CategoryFilter::All,
        },
        sort: list_args.sort.parse::<SortMode>().map_err(|e| anyhow!(e))?,
        group: list_args.group.parse::<GroupMode>().map_err(|e| anyhow!(e))?,
    };

    let (mut session, _fired) = super::open_session().await?;
    let today = Local::now().date_naive();
    let output = session.view(&selection, today);

    if output.is_empty() && selection.view != TaskView::Planned {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }
    View::tasks(output)?;
    Ok(())
}
