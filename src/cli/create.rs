use std::fs;
use std::path::Path;

use serde_json::json;

use crate::cli::{fail, Context, CreateArgs};
use crate::error::TaskhelperError;
use crate::form::{Field, SubmitOutcome, TaskForm};
use crate::models::ImageBlob;
use crate::output;

pub fn run(args: CreateArgs, ctx: &Context) -> i32 {
    match run_inner(args, ctx) {
        Ok(code) => code,
        Err(e) => fail(&e, ctx.json),
    }
}

fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

fn read_image(path: &Path) -> Result<ImageBlob, TaskhelperError> {
    let content = fs::read(path)
        .map_err(|e| TaskhelperError::io(format!("Cannot read image {}: {e}", path.display())))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(ImageBlob::new(name, guess_mime(path), content))
}

fn fill_form(args: &CreateArgs, form: &mut TaskForm) {
    form.set(Field::Category, args.category.as_str());
    form.set(Field::Title, args.title.as_str());
    form.set(Field::Description, args.description.as_str());
    form.set(Field::Location, args.location.as_str());
    form.set(Field::Budget, args.budget.as_str());
    form.set(Field::PreferredDate, args.date.as_str());
    form.set(Field::PreferredTime, args.time.as_str());
    form.set_urgent(args.urgent);
}

fn attach(args: &CreateArgs, form: &mut TaskForm) -> Result<(), TaskhelperError> {
    if args.images.is_empty() {
        return Ok(());
    }
    let batch = args
        .images
        .iter()
        .map(|p| read_image(p))
        .collect::<Result<Vec<_>, _>>()?;
    let previews: Vec<String> = batch.iter().map(ImageBlob::data_url).collect();
    let report = form.attach_images(batch);
    for (outcome, preview) in report.outcomes.into_iter().zip(previews) {
        if let Ok(id) = outcome {
            form.complete_preview(id, preview);
        }
    }
    Ok(())
}

fn print_invalid(form: &TaskForm, json_output: bool) -> i32 {
    let errors = form.errors();
    if json_output {
        output::json::print(&output::json::validation_error(&errors, form.image_error()));
    } else {
        eprintln!("Error: please check the highlighted fields.");
        output::text::print_field_errors(&errors);
    }
    1
}

fn run_inner(args: CreateArgs, ctx: &Context) -> Result<i32, TaskhelperError> {
    let mut form = TaskForm::today()
        .with_limits(ctx.config.limits)
        .with_notifications(ctx.notifications.clone());
    fill_form(&args, &mut form);
    attach(&args, &mut form)?;

    if args.dry_run {
        let Some(preview) = form.preview() else {
            return Ok(print_invalid(&form, ctx.json));
        };
        if ctx.json {
            output::json::print(&output::json::success(json!({
                "preview": preview,
                "images": form.images(),
                "image_error": form.image_error(),
            })));
        } else {
            println!("{preview}");
            if !form.image_error().is_empty() {
                println!("\nImages: {}", form.image_error());
            }
        }
        return Ok(0);
    }

    let mut catalog = ctx.load_catalog()?;
    match form.submit(&mut catalog) {
        SubmitOutcome::Created(task) => {
            if ctx.json {
                output::json::print(&output::json::success(json!({
                    "task": output::json::task_detail(&task, task.posted_at),
                    "images": form.images(),
                    "image_error": form.image_error(),
                    "state": form.state(),
                    "catalog_size": catalog.len(),
                })));
            } else {
                println!("Posted task: {} ({})", task.title, task.id);
                if !form.image_error().is_empty() {
                    println!("Images: {}", form.image_error());
                }
                if !form.images().is_empty() {
                    println!("Attached images: {}", form.images().len());
                }
            }
            Ok(0)
        }
        SubmitOutcome::Invalid => Ok(print_invalid(&form, ctx.json)),
        SubmitOutcome::Failed(e) => Err(e),
        SubmitOutcome::Ignored | SubmitOutcome::Started => Err(TaskhelperError::submission(
            "Submission did not complete",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime(Path::new("a.PNG")), "image/png");
        assert_eq!(guess_mime(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("notes.txt")), "text/plain");
        assert_eq!(guess_mime(Path::new("noext")), "application/octet-stream");
    }
}
