use chrono::NaiveDateTime;
use serde_json::{json, Map, Value};

use crate::applicants::ApplicantBoard;
use crate::error::{ErrorCode, TaskhelperError};
use crate::form::Field;
use crate::models::{Applicant, DashboardTask, Task};
use crate::time_label;

pub fn print(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(_) => println!("{value}"),
    }
}

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TaskhelperError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

/// Form rejection with the per-field messages attached.
pub fn validation_error(errors: &[(Field, &str)], image_error: &str) -> Value {
    let mut fields = Map::new();
    for (field, message) in errors {
        fields.insert(field.as_str().to_string(), json!(message));
    }
    let mut v = json!({
        "success": false,
        "error": {
            "code": ErrorCode::ValidationError.as_str(),
            "message": "Please check the highlighted fields.",
            "fields": fields
        }
    });
    if !image_error.is_empty() {
        v["error"]["image_error"] = json!(image_error);
    }
    v
}

pub fn task_summary(t: &Task, now: NaiveDateTime) -> Value {
    json!({
        "id": t.id,
        "title": t.title,
        "category": t.category.as_str(),
        "location": t.location,
        "location_name": t.location_name,
        "price": t.price_value(),
        "deadline": t.deadline,
        "posted": time_label::relative(t.posted_at, now),
        "status": t.status
    })
}

pub fn task_detail(t: &Task, now: NaiveDateTime) -> Value {
    json!({
        "id": t.id,
        "title": t.title,
        "category": t.category.as_str(),
        "category_name": t.category.display_name(),
        "location": t.location,
        "location_name": t.location_name,
        "price": t.price_value(),
        "price_label": t.price,
        "posted_at": t.posted_at,
        "posted": time_label::relative(t.posted_at, now),
        "deadline": t.deadline,
        "description": t.description,
        "tags": t.tags,
        "status": t.status
    })
}

pub fn dashboard_task_json(t: &DashboardTask, status_label: &str) -> Value {
    let mut v = json!({
        "id": t.id,
        "title": t.title,
        "status": t.status,
        "status_label": status_label,
        "category": t.category,
        "price": t.price,
        "location": t.location
    });
    if let Some(applicants) = t.applicants {
        v["applicants"] = json!(applicants);
    }
    if let Some(rating) = t.rating {
        v["rating"] = json!(rating);
    }
    if let Some(earnings) = t.earnings {
        v["earnings"] = json!(earnings);
    }
    if let Some(ref when) = t.when {
        v["when"] = json!(when);
    }
    v
}

pub fn applicant_json(a: &Applicant, selected: bool) -> Value {
    json!({
        "id": a.id,
        "name": a.name,
        "rating": a.rating,
        "review_count": a.review_count,
        "completed_tasks": a.completed_tasks,
        "distance": a.distance,
        "applied_at": a.applied_at,
        "is_online": a.is_online,
        "is_verified": a.is_verified,
        "completion_rate": a.completion_rate,
        "specialties": a.specialties,
        "message": a.message,
        "selected": selected
    })
}

pub fn applicant_stats(board: &ApplicantBoard) -> Value {
    json!({
        "count": board.sorted().len(),
        "average_rating": (board.average_rating() * 10.0).round() / 10.0,
        "average_completion_rate": board.average_completion_rate()
    })
}
