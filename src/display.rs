//! Terminal rendering for dashboard, lists, and detail views

use chrono::{DateTime, Utc};

use crate::metrics;
use crate::models::{AppliedOutcome, DashboardMetrics, LearningItem, LearningStatus};

const BAR_WIDTH: usize = 30;

/// Short "Aug 12" style date
fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d").to_string()
}

/// Fixed-width progress bar for a 0..=100 percentage
fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Split items into (pending, applied), preserving order
fn partition_by_status(items: &[LearningItem]) -> (Vec<&LearningItem>, Vec<&LearningItem>) {
    items.iter().partition(|i| i.status == LearningStatus::Pending)
}

fn item_line(item: &LearningItem) -> String {
    let category = item
        .category
        .map(|c| format!(" ({})", c.label()))
        .unwrap_or_default();
    format!(
        "  [{}] {}{} [{}]  {}",
        item.id,
        item.title,
        category,
        item.status.label(),
        format_date(&item.created_at)
    )
}

pub fn render_dashboard(items: &[LearningItem], metrics_data: &DashboardMetrics) {
    println!("SkillBridge Dashboard");
    println!("=====================");
    println!();

    if items.is_empty() {
        println!("Welcome to SkillBridge!");
        println!();
        println!("Track what you learn and how you apply it in the real world:");
        println!("  1. Log something you learned    skillbridge learning add --title ... --category ...");
        println!("  2. Apply it in the real world   skillbridge apply add <learning-id> --description ... --type ...");
        println!("  3. Watch your confidence grow   skillbridge dashboard");
        println!();
        println!("It only takes a few seconds to add your first learning.");
        return;
    }

    let summary = metrics::summarize(metrics_data);
    println!("Confidence, today: {}/100  ({})", summary.percent, summary.label);
    println!(
        "Learning -> Applied: {} {}/{} applied",
        progress_bar(summary.percent, BAR_WIDTH),
        metrics_data.applied_count,
        metrics_data.total_learning
    );
    println!();

    println!("At a glance:");
    println!("  Learning items: {}", metrics_data.total_learning);
    println!("  Applied:        {}", metrics_data.applied_count);
    println!("  Pending:        {}", metrics_data.pending_count);
    println!("  Progress:       {}%", summary.percent);
    println!();

    let (pending, _) = partition_by_status(items);
    if pending.is_empty() {
        println!("All caught up! No pending learning items right now.");
    } else {
        println!("Needs an application ({} pending):", pending.len());
        for item in &pending {
            println!("{}", item_line(item));
        }
    }
}

pub fn render_learning_list(items: &[LearningItem]) {
    println!("Your Learning");
    println!("=============");
    println!("{} item{} tracked", items.len(), if items.len() == 1 { "" } else { "s" });
    println!();

    if items.is_empty() {
        println!("No learning items yet. Start by adding something you learned today:");
        println!("  skillbridge learning add --title \"...\" --category technical");
        return;
    }

    let (pending, applied) = partition_by_status(items);

    if !pending.is_empty() {
        println!("Needs application ({}):", pending.len());
        for item in &pending {
            println!("{}", item_line(item));
        }
        println!();
    }

    if !applied.is_empty() {
        println!("Applied ({}):", applied.len());
        for item in &applied {
            println!("{}", item_line(item));
        }
    }
}

pub fn render_outcomes(learning_id: i64, outcomes: &[AppliedOutcome]) {
    println!("Applied skills for learning {} ({}):", learning_id, outcomes.len());
    if outcomes.is_empty() {
        println!("  None yet.");
        return;
    }
    for outcome in outcomes {
        println!(
            "  [{}] {} ({})  {}",
            outcome.id,
            outcome.description,
            outcome.outcome_type.label(),
            format_date(&outcome.created_at)
        );
    }
}

pub fn render_learning_detail(item: &LearningItem, outcomes: &[AppliedOutcome]) {
    println!("[{}] {}", item.id, item.title);
    if let Some(category) = item.category {
        println!("Category: {}", category.label());
    }
    println!("Status:   {}", item.status.label());
    println!("Started:  {}", item.created_at.format("%b %-d, %Y"));
    println!();

    println!("Applied skills ({}):", outcomes.len());
    if outcomes.is_empty() {
        println!("  No applied skills yet. Show how you put this learning into practice:");
        println!("  skillbridge apply add {} --description \"...\" --type project", item.id);
    } else {
        for outcome in outcomes {
            println!(
                "  [{}] {} ({})  {}",
                outcome.id,
                outcome.description,
                outcome.outcome_type.label(),
                format_date(&outcome.created_at)
            );
        }
    }
}
