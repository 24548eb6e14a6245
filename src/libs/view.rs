use super::progress::{ProgressSnapshot, Streak};
use super::task::Task;
use super::viewmodel::ViewOutput;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints a derived view, one table per section.
    pub fn tasks(output: &ViewOutput) -> Result<()> {
        for section in &output.sections {
            if output.sections.len() > 1 {
                println!("\n{}", section.label);
            }
            if section.tasks.is_empty() {
                println!("  (no tasks)");
                continue;
            }
            let mut table = Table::new();
            table.add_row(row!["ID", "", "TASK", "DUE", "PRIORITY", "CATEGORY", "SUBTASKS"]);
            for task in &section.tasks {
                table.add_row(row![
                    task.id,
                    Self::status(task),
                    task.text,
                    task.due_date.map(|d| d.to_string()).unwrap_or_default(),
                    task.priority.map(|p| p.to_string()).unwrap_or_default(),
                    task.category.map(|c| c.to_string()).unwrap_or_default(),
                    Self::subtask_summary(task),
                ]);
            }
            table.printstd();
        }
        Ok(())
    }

    pub fn progress(snapshot: &ProgressSnapshot, streak: &Streak) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["TOTAL", "DONE", "PENDING", "HIGH PRIORITY", "PROGRESS"]);
        table.add_row(row![
            snapshot.total,
            snapshot.completed,
            snapshot.pending,
            snapshot.high_priority,
            format!("{}%", snapshot.percent)
        ]);
        table.printstd();

        let marks: String = streak.days.iter().map(|&done| if done { '●' } else { '○' }).collect();
        println!("Mon-Sun: {}", marks);
        Ok(())
    }

    fn status(task: &Task) -> String {
        let mut flags = String::new();
        flags.push(if task.completed { '✔' } else { ' ' });
        if task.important {
            flags.push('★');
        }
        if task.my_day {
            flags.push('☀');
        }
        flags
    }

    fn subtask_summary(task: &Task) -> String {
        if task.subtasks.is_empty() {
            return String::new();
        }
        let done = task.subtasks.iter().filter(|s| s.completed).count();
        format!("{}/{}", done, task.subtasks.len())
    }
}
