use serde_json::json;

use crate::applicants::{ApplicantBoard, ApplicantSort};
use crate::cli::{fail, Context};
use crate::error::TaskhelperError;
use crate::output;

pub fn run(sort: &str, select: Option<u32>, ctx: &Context) -> i32 {
    match run_inner(sort, select, ctx) {
        Ok(code) => code,
        Err(e) => fail(&e, ctx.json),
    }
}

fn run_inner(sort: &str, select: Option<u32>, ctx: &Context) -> Result<i32, TaskhelperError> {
    let sort = ApplicantSort::from_str(sort)
        .ok_or_else(|| TaskhelperError::invalid_filter("sort", sort, &ApplicantSort::NAMES))?;
    let mut board = ApplicantBoard::sample()?.with_notifications(ctx.notifications.clone());
    board.set_sort(sort);
    if let Some(id) = select {
        board.select_helper(id)?;
    }

    if ctx.json {
        let selected = board.selected().map(|a| a.id);
        let applicants: Vec<_> = board
            .sorted()
            .into_iter()
            .map(|a| output::json::applicant_json(a, selected == Some(a.id)))
            .collect();
        output::json::print(&output::json::success(json!({
            "task": board.task(),
            "sort": board.sort().as_str(),
            "applicants": applicants,
            "selected": selected,
            "stats": output::json::applicant_stats(&board),
        })));
    } else {
        output::text::print_applicant_board(&board);
        if let Some(a) = board.selected() {
            println!("Selected helper: {}", a.name);
        }
    }
    Ok(0)
}
