//! Walkthrough of routine and urgent tasks sharing one manager.

use std::io::Write;

use anyhow::Result;
use chrono::{Duration, Utc};
use serde::Serialize;
use smarttask_core::{ActionReport, Actionable, TaskEntry};
use smarttask_work::{process_actionable, rank_by_importance, TaskManager, TaskStats};

#[derive(Serialize)]
struct DemoOutput<'a> {
    stats: TaskStats,
    tasks: Vec<&'a TaskEntry>,
}

/// Populate a manager with sample routine and urgent tasks.
fn sample_manager() -> Result<TaskManager> {
    let now = Utc::now();
    let mut manager = TaskManager::new();

    manager.add_routine_task("Review documentation", 1, "Study", 45)?;
    manager.add_routine_task("Buy groceries", 2, "Personal", 60)?;
    manager.add_urgent_task("Deliver final project", 3, now + Duration::hours(5), 9, "Juan Perez")?;
    manager.add_urgent_task(
        "Resolve critical incident",
        3,
        now + Duration::hours(2),
        10,
        "Maria Gonzalez",
    )?;
    manager.add_urgent_task("Renew certificate", 2, now - Duration::hours(3), 6, "Ops")?;
    manager.add_task("Tidy desk", 1)?;

    Ok(manager)
}

/// Run the demo, writing to `out`.
pub fn run(out: &mut impl Write, json: bool) -> Result<()> {
    let mut manager = sample_manager()?;

    if json {
        let output = DemoOutput {
            stats: manager.stats(),
            tasks: manager.list(),
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "== Tasks ==")?;
    for entry in manager.list() {
        writeln!(out, "{entry}")?;
    }

    writeln!(out, "\n== Execution ==")?;
    for entry in manager.list() {
        if let Some(report) = entry.as_actionable().and_then(process_actionable) {
            write_report(out, &report)?;
        }
    }

    writeln!(out, "\n== Kind details ==")?;
    for entry in manager.list() {
        match entry {
            TaskEntry::Urgent(urgent) if urgent.is_overdue() => writeln!(
                out,
                "{} is overdue by {} hours",
                urgent.task().name(),
                (Utc::now() - urgent.deadline()).num_hours()
            )?,
            TaskEntry::Urgent(urgent) => {
                writeln!(out, "{} has {} hours left", urgent.task().name(), urgent.hours_remaining())?;
                if let Some(message) = urgent.notification() {
                    writeln!(out, "  {message}")?;
                }
            }
            TaskEntry::Routine(routine) => writeln!(
                out,
                "{} [{}] takes {} min",
                routine.task().name(),
                routine.category(),
                routine.estimated_minutes()
            )?,
            TaskEntry::Plain(task) => writeln!(out, "{} has no action attached", task.name())?,
        }
    }

    writeln!(out, "\n== Ranked by importance ==")?;
    let entries = manager.list();
    let actionables: Vec<&dyn Actionable> =
        entries.iter().filter_map(|entry| entry.as_actionable()).collect();
    for index in rank_by_importance(&actionables) {
        let task = actionables[index];
        writeln!(out, "[{}] {}", task.importance_level(), task.describe_action())?;
    }

    writeln!(out, "\n== Cancelling overdue urgent tasks ==")?;
    let overdue: Vec<_> = manager
        .list()
        .into_iter()
        .filter(|entry| matches!(entry, TaskEntry::Urgent(urgent) if urgent.is_overdue()))
        .map(TaskEntry::id)
        .collect();
    for id in overdue {
        if let Some(actionable) = manager.find_by_id_mut(id).and_then(TaskEntry::as_actionable_mut) {
            actionable.cancel();
        }
        if let Some(entry) = manager.find_by_id(id) {
            writeln!(out, "{entry}")?;
        }
    }

    let stats = manager.stats();
    writeln!(
        out,
        "\n{} tasks, {} completed ({:.1}%)",
        stats.total, stats.completed, stats.percent_completed
    )?;
    Ok(())
}

fn write_report(out: &mut impl Write, report: &ActionReport) -> Result<()> {
    writeln!(out, "{}", report.headline)?;
    for detail in &report.details {
        writeln!(out, "   {detail}")?;
    }
    if let Some(alert) = &report.alert {
        writeln!(out, "   ALERT: {alert}")?;
    }
    Ok(())
}
