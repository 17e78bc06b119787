use chrono::Local;
use serde_json::json;

use crate::cli::{fail, Context, ListArgs};
use crate::error::TaskhelperError;
use crate::filter::{self, FilterState, TaskList};
use crate::models::Category;
use crate::output;

pub fn run_list(args: ListArgs, ctx: &Context) -> i32 {
    match list_inner(args, ctx) {
        Ok(code) => code,
        Err(e) => fail(&e, ctx.json),
    }
}

pub fn run_show(id: u32, ctx: &Context) -> i32 {
    match show_inner(id, ctx) {
        Ok(code) => code,
        Err(e) => fail(&e, ctx.json),
    }
}

pub fn run_categories(ctx: &Context) -> i32 {
    if ctx.json {
        let categories: Vec<_> = Category::ALL
            .iter()
            .map(|c| json!({ "id": c.as_str(), "name": c.display_name() }))
            .collect();
        output::json::print(&output::json::success(json!({ "categories": categories })));
    } else {
        for c in Category::ALL {
            println!("  {:<10} {}", c.as_str(), c.display_name());
        }
    }
    0
}

fn filter_state(args: &ListArgs) -> Result<FilterState, TaskhelperError> {
    Ok(FilterState {
        search_term: args.search.trim().to_string(),
        search_scope: filter::parse_search_scope(&args.scope)?,
        quick_filter: filter::parse_quick_filter(&args.quick)?,
        category: filter::parse_category(&args.category)?,
        location: args.location.clone().filter(|l| !l.is_empty()),
        price_bucket: filter::parse_price_bucket(&args.price)?,
        time_bucket: filter::parse_time_bucket(&args.time)?,
        sort_order: filter::parse_sort_order(&args.sort)?,
    })
}

fn list_inner(args: ListArgs, ctx: &Context) -> Result<i32, TaskhelperError> {
    let state = filter_state(&args)?;
    let list = TaskList::with_state(ctx.load_catalog()?, state);
    let tasks = list.filtered_tasks();
    let now = Local::now().naive_local();

    if ctx.json {
        let tasks_json: Vec<_> = tasks
            .iter()
            .map(|t| output::json::task_summary(t, now))
            .collect();
        output::json::print(&output::json::success(json!({
            "tasks": tasks_json,
            "count": tasks.len(),
            "total": list.catalog().len(),
            "has_active_filters": list.has_active_filters(),
            "filters": list.state(),
        })));
    } else {
        output::text::print_task_list(&tasks, now);
        println!("\n{} of {} tasks", tasks.len(), list.catalog().len());
        if list.has_active_filters() {
            println!("Filters active (clear them to see every task).");
        }
    }
    Ok(0)
}

fn show_inner(id: u32, ctx: &Context) -> Result<i32, TaskhelperError> {
    let catalog = ctx.load_catalog()?;
    let task = catalog.get(id)?;
    let now = Local::now().naive_local();
    if ctx.json {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_detail(task, now)
        })));
    } else {
        output::text::print_task(task, now);
    }
    Ok(0)
}
