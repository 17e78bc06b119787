use serde_json::json;

use crate::cli::{fail, Context};
use crate::dashboard::{Dashboard, Role};
use crate::error::TaskhelperError;
use crate::models::format_price;
use crate::output;

pub fn run(role: &str, view: Option<&str>, status_key: &str, ctx: &Context) -> i32 {
    match run_inner(role, view, status_key, ctx) {
        Ok(code) => code,
        Err(e) => fail(&e, ctx.json),
    }
}

fn parse_role(raw: &str) -> Result<Role, TaskhelperError> {
    Role::from_str(raw)
        .ok_or_else(|| TaskhelperError::invalid_filter("role", raw, &["requester", "helper"]))
}

fn run_inner(
    role: &str,
    view: Option<&str>,
    status_key: &str,
    ctx: &Context,
) -> Result<i32, TaskhelperError> {
    let role = parse_role(role)?;
    let mut dashboard = Dashboard::sample(role)?.with_notifications(ctx.notifications.clone());
    if let Some(view) = view {
        dashboard.switch_view(view)?;
    }
    // Keys outside the role's table match records with that literal status.
    dashboard.filter_by_status(status_key);
    let tasks = dashboard.filtered_tasks();

    if ctx.json {
        let tasks_json: Vec<_> = tasks
            .iter()
            .map(|t| output::json::dashboard_task_json(t, role.status_label(&t.status)))
            .collect();
        output::json::print(&output::json::success(json!({
            "role": role.as_str(),
            "view": dashboard.active_view(),
            "status": dashboard.status_filter(),
            "status_keys": dashboard.status_keys(),
            "tasks": tasks_json,
            "count": tasks.len(),
            "total_earnings": dashboard.total_earnings(),
            "average_rating": dashboard.average_rating(),
        })));
    } else {
        println!(
            "{} dashboard · {} · status={}",
            role.as_str(),
            dashboard.active_view(),
            dashboard.status_filter()
        );
        output::text::print_dashboard_tasks(role, &tasks);
        match role {
            Role::Helper => {
                println!("\nTotal earnings: ¥{}", format_price(dashboard.total_earnings()))
            }
            Role::Requester => {
                println!("\nAverage rating given: {:.1}", dashboard.average_rating())
            }
        }
    }
    Ok(0)
}
