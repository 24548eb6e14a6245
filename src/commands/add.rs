//! Task creation command.
//!
//! Creates the task through the session so the optimistic add and the
//! gateway round trip behave exactly as they do for every other intent.
//! When no priority is given, the task text is scanned for urgency
//! keywords and the matching tier is applied automatically.

use crate::api::TaskPatch;
use crate::libs::messages::Message;
use crate::libs::task::{Category, Priority};
use crate::libs::urgency::{KeywordScorer, UrgencyScorer};
use crate::{msg_info, msg_success};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text
    #[arg(required = true)]
    text: String,
    /// Category: work, personal, urgent, shopping or health
    #[arg(short, long)]
    category: Option<String>,
    /// Priority: high, medium or low
    #[arg(short, long)]
    priority: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    due: Option<String>,
    /// Free-form notes
    #[arg(short, long)]
    notes: Option<String>,
    /// Add the task to My Day
    #[arg(long)]
    myday: bool,
    /// Mark the task important
    #[arg(long)]
    important: bool,
}

pub async fn cmd(add_args: AddArgs) -> Result<()> {
    let category = add_args.category.map(|c| c.parse::<Category>()).transpose().map_err(|e| anyhow!(e))?;
    let mut priority = add_args.priority.map(|p| p.parse::<Priority>()).transpose().map_err(|e| anyhow!(e))?;
    let due = match &add_args.due {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| anyhow!(Message::InvalidDate(raw.clone()).to_string()))?),
        None => None,
    };

    if priority.is_none() {
        let score = KeywordScorer.score(&add_args.text);
        if let Some(tier) = score.tier {
            msg_info!(Message::PrioritySuggested(tier.to_string(), score.signal.to_string()));
            priority = Some(tier);
        }
    }

    let (mut session, _fired) = super::open_session().await?;
    let task = session.add(&add_args.text).await?;

    let patch = TaskPatch {
        notes: add_args.notes,
        category,
        priority,
        ..Default::default()
    };
    if !patch.is_empty() {
        session.update(task.id, patch).await?;
    }
    if due.is_some() {
        session.set_due_date(task.id, due).await?;
    }
    if add_args.myday {
        session.toggle_my_day(task.id).await?;
    }
    if add_args.important {
        session.toggle_important(task.id).await?;
    }

    msg_success!(Message::TaskCreated(task.text));
    Ok(())
}
