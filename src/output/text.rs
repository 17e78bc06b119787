use chrono::NaiveDateTime;

use crate::applicants::ApplicantBoard;
use crate::dashboard::Role;
use crate::form::Field;
use crate::models::{format_price, Applicant, DashboardTask, Task};
use crate::time_label;

pub fn print_task(t: &Task, now: NaiveDateTime) {
    println!("Task: {} ({})", t.title, t.id);
    println!("  Category: {}", t.category.display_name());
    println!("  Price: ¥{}", format_price(t.price_value()));
    println!("  Location: {}", t.location_name);
    println!("  Deadline: {}", t.deadline);
    println!("  Posted: {}", time_label::relative(t.posted_at, now));
    println!("  Status: {}", t.status);
    if !t.tags.is_empty() {
        println!("  Tags: {}", t.tags.join(", "));
    }
    println!("  Description: {}", t.description);
}

pub fn print_task_list(tasks: &[&Task], now: NaiveDateTime) {
    if tasks.is_empty() {
        println!("No tasks match the current filters.");
        return;
    }
    for t in tasks {
        println!(
            "  {:>3} [{}] {} ¥{} {} ({})",
            t.id,
            t.category.as_str(),
            t.title,
            format_price(t.price_value()),
            t.location_name,
            time_label::relative(t.posted_at, now)
        );
    }
}

pub fn print_field_errors(errors: &[(Field, &str)]) {
    for (field, message) in errors {
        eprintln!("  {}: {message}", field.as_str());
    }
}

pub fn print_dashboard_tasks(role: Role, tasks: &[&DashboardTask]) {
    if tasks.is_empty() {
        println!("No tasks in this view.");
        return;
    }
    for t in tasks {
        let mut extra = String::new();
        if let Some(n) = t.applicants {
            extra.push_str(&format!(" applicants={n}"));
        }
        if let Some(r) = t.rating {
            extra.push_str(&format!(" rating={r:.1}"));
        }
        if let Some(e) = t.earnings {
            extra.push_str(&format!(" earned=¥{}", format_price(e)));
        }
        println!(
            "  {:>3} [{}] {} ¥{}{}",
            t.id,
            role.status_label(&t.status),
            t.title,
            format_price(t.price),
            extra
        );
    }
}

pub fn print_applicant(a: &Applicant, selected: bool) {
    let marker = if selected { "*" } else { " " };
    let verified = if a.is_verified { " verified" } else { "" };
    let online = if a.is_online { " online" } else { "" };
    println!(
        " {marker}{:>3} {} {:.1} ({} reviews) {} tasks {} {}%{verified}{online}",
        a.id, a.name, a.rating, a.review_count, a.completed_tasks, a.distance, a.completion_rate
    );
}

pub fn print_applicant_board(board: &ApplicantBoard) {
    let task = board.task();
    println!("Applicants for: {} ({})", task.title, task.id);
    println!("  {} {} · ¥{}", task.date, task.time_slot, format_price(task.price));
    let selected = board.selected().map(|a| a.id);
    for a in board.sorted() {
        print_applicant(a, selected == Some(a.id));
    }
    println!(
        "\nAverage rating {:.1} · average completion {}% · sorted by {}",
        board.average_rating(),
        board.average_completion_rate(),
        board.sort().as_str()
    );
}
