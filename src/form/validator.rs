use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use ulid::Ulid;

use crate::error::TaskhelperError;
use crate::models::{format_price, AttachedImage, Category, DraftTask, ImageBlob, PreferredTime, Task};
use crate::notify::Notifications;

use super::images::{self, AttachReport};
use super::rules::{self, Field, FormLimits};
use super::submission::{SubmissionState, SubmitOutcome, TaskCreator};

/// The task-creation form: one draft, its validation state and the
/// submission state machine.
#[derive(Debug, Clone)]
pub struct TaskForm {
    draft: DraftTask,
    errors: BTreeMap<Field, String>,
    valid: BTreeMap<Field, bool>,
    image_error: String,
    state: SubmissionState,
    submit_error: Option<String>,
    limits: FormLimits,
    today: NaiveDate,
    notifications: Notifications,
}

impl TaskForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: DraftTask::default(),
            errors: Field::ALL.iter().map(|f| (*f, String::new())).collect(),
            valid: Field::ALL.iter().map(|f| (*f, false)).collect(),
            image_error: String::new(),
            state: SubmissionState::Idle,
            submit_error: None,
            limits: FormLimits::default(),
            today,
            notifications: Notifications::none(),
        }
    }

    /// A form dated by the local clock.
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn with_limits(mut self, limits: FormLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_notifications(mut self, notifications: Notifications) -> Self {
        self.notifications = notifications;
        self
    }

    pub fn draft(&self) -> &DraftTask {
        &self.draft
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Store raw input for a field and validate it.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value = value.into();
        match field {
            Field::Category => self.draft.category = value,
            Field::Title => self.draft.title = value,
            Field::Description => self.draft.description = value,
            Field::Location => self.draft.location = value,
            Field::Budget => self.draft.budget = value,
            Field::PreferredDate => self.draft.preferred_date = value,
            Field::PreferredTime => self.draft.preferred_time = value,
        }
        self.validate_field(field)
    }

    pub fn set_urgent(&mut self, urgent: bool) {
        self.draft.urgent = urgent;
    }

    pub fn validate_field(&mut self, field: Field) -> bool {
        let result = rules::check_field(field, &self.draft, &self.limits, self.today);
        let ok = result.is_ok();
        let message = result.err().unwrap_or_default();
        debug!(field = field.as_str(), ok, "field validated");
        self.errors.insert(field, message);
        self.valid.insert(field, ok);
        ok
    }

    /// Runs every rule, without short-circuiting, so all messages show.
    pub fn validate_form(&mut self) -> bool {
        Field::ALL
            .iter()
            .fold(true, |all, field| self.validate_field(*field) && all)
    }

    /// Aggregate of the per-field flags. Images never count.
    pub fn is_form_valid(&self) -> bool {
        Field::ALL
            .iter()
            .all(|f| self.valid.get(f).copied().unwrap_or(false))
    }

    pub fn is_valid(&self, field: Field) -> bool {
        self.valid.get(&field).copied().unwrap_or(false)
    }

    pub fn error(&self, field: Field) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Non-empty messages only, in field order.
    pub fn errors(&self) -> Vec<(Field, &str)> {
        self.errors
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(f, m)| (*f, m.as_str()))
            .collect()
    }

    pub fn image_error(&self) -> &str {
        &self.image_error
    }

    pub fn images(&self) -> &[AttachedImage] {
        &self.draft.images
    }

    pub fn attach_images(&mut self, batch: Vec<ImageBlob>) -> AttachReport {
        let report = images::attach(&mut self.draft.images, batch, &self.limits);
        self.image_error = report.error_message().unwrap_or_default();
        report
    }

    pub fn remove_image(&mut self, index: usize) -> Option<AttachedImage> {
        if index >= self.draft.images.len() {
            return None;
        }
        let removed = self.draft.images.remove(index);
        if self.draft.images.len() < self.limits.max_images {
            self.image_error.clear();
        }
        Some(removed)
    }

    pub fn complete_preview(&mut self, id: Ulid, preview: String) -> bool {
        images::complete_preview(&mut self.draft.images, id, preview)
    }

    /// Validate and, if everything passes, move to `Submitting`.
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.state != SubmissionState::Idle {
            debug!(state = self.state.as_str(), "submit ignored");
            return SubmitOutcome::Ignored;
        }
        if !self.validate_form() {
            self.notifications
                .error(Some("Input error"), "Please check the highlighted fields.");
            return SubmitOutcome::Invalid;
        }
        self.submit_error = None;
        self.state = SubmissionState::Submitting;
        info!(title = %self.draft.title, "task submission started");
        SubmitOutcome::Started
    }

    /// Deliver the create result for the running submission.
    pub fn finish_submit(&mut self, result: Result<Task, TaskhelperError>) -> SubmitOutcome {
        if self.state != SubmissionState::Submitting {
            return SubmitOutcome::Ignored;
        }
        match result {
            Ok(task) => {
                self.state = SubmissionState::Succeeded;
                info!(id = task.id, "task submission succeeded");
                self.notifications.success(
                    Some("Posted!"),
                    "Your request was posted. Please wait for helpers to apply.",
                );
                SubmitOutcome::Created(task)
            }
            Err(e) => {
                self.state = SubmissionState::Idle;
                warn!(error = %e, "task submission failed");
                self.submit_error = Some(e.message.clone());
                self.notifications
                    .error(Some("Error"), "Posting failed. Please try again.");
                SubmitOutcome::Failed(e)
            }
        }
    }

    pub fn submit(&mut self, creator: &mut dyn TaskCreator) -> SubmitOutcome {
        match self.begin_submit() {
            SubmitOutcome::Started => {
                let result = creator.create_task(&self.draft);
                self.finish_submit(result)
            }
            other => other,
        }
    }

    /// Discard the draft if idle and the user confirms. `confirm` is only
    /// asked when the form is idle.
    pub fn cancel(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if self.state != SubmissionState::Idle || !confirm() {
            return false;
        }
        self.reset();
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.today)
            .with_limits(self.limits)
            .with_notifications(self.notifications.clone());
    }

    /// Human-readable summary of a valid draft.
    pub fn preview(&mut self) -> Option<String> {
        if !self.validate_form() {
            self.notifications
                .error(Some("Input error"), "Please check the highlighted fields.");
            return None;
        }
        let d = &self.draft;
        let category = Category::from_str(d.category.trim())
            .map(|c| c.display_name())
            .unwrap_or("");
        let time = PreferredTime::from_str(d.preferred_time.trim())
            .map(|t| t.display_name())
            .unwrap_or("");
        let budget = d
            .budget
            .trim()
            .parse::<u32>()
            .map(format_price)
            .unwrap_or_default();

        let mut text = format!("[{category}] {}\n\n{}\n\n", d.title.trim(), d.description.trim());
        text.push_str(&format!("Location: {}\n", d.location.trim()));
        text.push_str(&format!("Budget: ¥{budget}\n"));
        text.push_str(&format!("Date: {}\n", d.preferred_date.trim()));
        text.push_str(&format!("Time: {time}"));
        if d.urgent {
            text.push_str("\nUrgent request");
        }
        if !d.images.is_empty() {
            text.push_str(&format!("\nAttached images: {}", d.images.len()));
        }
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::notify::testing::RecordingNotifier;
    use crate::notify::Level;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn filled() -> TaskForm {
        let mut form = TaskForm::new(today());
        form.set(Field::Category, "shopping");
        form.set(Field::Title, "Grocery run");
        form.set(Field::Description, "Pick up vegetables and rice from the market");
        form.set(Field::Location, "Shibuya");
        form.set(Field::Budget, "3000");
        form.set(Field::PreferredDate, "2026-10-20");
        form.set(Field::PreferredTime, "morning");
        form
    }

    #[derive(Default)]
    struct CountingCreator {
        calls: usize,
        fail: bool,
    }

    impl TaskCreator for CountingCreator {
        fn create_task(&mut self, draft: &DraftTask) -> Result<Task, TaskhelperError> {
            self.calls += 1;
            if self.fail {
                return Err(TaskhelperError::submission("backend unavailable"));
            }
            let mut catalog = crate::catalog::Catalog::new(Vec::new())?;
            catalog.create_task(draft)
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let mut form = TaskForm::new(today());
        assert!(!form.validate_form());
        assert_eq!(form.errors().len(), Field::ALL.len());
        for field in Field::ALL {
            assert!(!form.is_valid(field));
            assert!(!form.error(field).is_empty(), "{field:?}");
        }
        assert!(!form.is_form_valid());
    }

    #[test]
    fn test_field_validation_updates_message_and_flag() {
        let mut form = TaskForm::new(today());
        assert!(!form.set(Field::Title, "ab"));
        assert_eq!(form.error(Field::Title), "Title must be at least 5 characters.");
        assert!(form.set(Field::Title, "abcde"));
        assert_eq!(form.error(Field::Title), "");
        assert!(form.is_valid(Field::Title));
    }

    #[test]
    fn test_date_yesterday_and_today() {
        let mut form = TaskForm::new(today());
        assert!(!form.set(Field::PreferredDate, "2026-10-17"));
        assert!(form.set(Field::PreferredDate, "2026-10-18"));
    }

    #[test]
    fn test_image_error_never_blocks_validity() {
        let mut form = filled();
        assert!(form.is_form_valid());
        let batch = (0..5)
            .map(|i| ImageBlob::new(format!("{i}.png"), "image/png", vec![0]))
            .collect();
        form.attach_images(batch);
        assert_eq!(form.image_error(), "You can attach up to 4 images.");
        assert!(form.images().is_empty());
        assert!(form.is_form_valid());
        assert!(form.validate_form());
    }

    #[test]
    fn test_remove_by_index_keeps_identity() {
        let mut form = filled();
        let report = form.attach_images(vec![
            ImageBlob::new("first.png", "image/png", vec![1]),
            ImageBlob::new("second.png", "image/png", vec![2]),
        ]);
        let removed = form.remove_image(0).unwrap();
        assert_eq!(removed.name, "first.png");
        assert_eq!(form.images().len(), 1);
        assert_eq!(form.images()[0].name, "second.png");
        assert_eq!(form.images()[0].id, report.attached[1]);
        assert!(!form.complete_preview(report.attached[0], "data:first".into()));
        assert!(form.complete_preview(report.attached[1], "data:second".into()));
        assert!(form.remove_image(5).is_none());
    }

    #[test]
    fn test_remove_clears_count_error() {
        let mut form = filled();
        form.attach_images((0..3).map(|i| ImageBlob::new(format!("{i}.png"), "image/png", vec![0])).collect());
        form.attach_images((0..2).map(|i| ImageBlob::new(format!("x{i}.png"), "image/png", vec![0])).collect());
        assert!(!form.image_error().is_empty());
        assert_eq!(form.images().len(), 3);
        form.remove_image(2);
        assert_eq!(form.image_error(), "");
    }

    #[test]
    fn test_double_submit_is_noop() {
        let mut form = filled();
        let mut creator = CountingCreator::default();
        assert!(matches!(form.begin_submit(), SubmitOutcome::Started));
        assert_eq!(form.state(), SubmissionState::Submitting);
        assert!(matches!(form.submit(&mut creator), SubmitOutcome::Ignored));
        assert_eq!(creator.calls, 0);

        let result = creator.create_task(form.draft());
        assert!(form.finish_submit(result).is_created());
        assert_eq!(creator.calls, 1);
        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert!(matches!(form.submit(&mut creator), SubmitOutcome::Ignored));
        assert_eq!(creator.calls, 1);
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let rec = Arc::new(RecordingNotifier::default());
        let mut form = TaskForm::new(today()).with_notifications(Notifications::new(rec.clone()));
        let mut creator = CountingCreator::default();
        assert!(matches!(form.submit(&mut creator), SubmitOutcome::Invalid));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(creator.calls, 0);
        assert_eq!(rec.levels(), vec![Level::Error]);
    }

    #[test]
    fn test_failed_submit_returns_to_idle() {
        let rec = Arc::new(RecordingNotifier::default());
        let mut form = filled().with_notifications(Notifications::new(rec.clone()));
        let mut creator = CountingCreator {
            fail: true,
            ..Default::default()
        };
        assert!(matches!(form.submit(&mut creator), SubmitOutcome::Failed(_)));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.submit_error(), Some("backend unavailable"));
        assert_eq!(form.draft().title, "Grocery run");

        creator.fail = false;
        assert!(form.submit(&mut creator).is_created());
        assert_eq!(creator.calls, 2);
        assert_eq!(rec.levels(), vec![Level::Error, Level::Success]);
    }

    #[test]
    fn test_cancel_requires_idle_and_confirmation() {
        let mut form = filled();
        assert!(!form.cancel(|| false));
        assert_eq!(form.draft().title, "Grocery run");

        form.begin_submit();
        let mut asked = false;
        assert!(!form.cancel(|| {
            asked = true;
            true
        }));
        assert!(!asked);

        let mut form = filled();
        assert!(form.cancel(|| true));
        assert_eq!(form.draft().title, "");
        assert!(!form.is_form_valid());
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_preview_text() {
        let mut form = filled();
        form.set_urgent(true);
        form.attach_images(vec![ImageBlob::new("a.png", "image/png", vec![0])]);
        let text = form.preview().unwrap();
        assert!(text.starts_with("[Shopping] Grocery run"));
        assert!(text.contains("Budget: ¥3,000"));
        assert!(text.contains("Time: Morning (9:00-12:00)"));
        assert!(text.contains("Urgent request"));
        assert!(text.ends_with("Attached images: 1"));

        let mut empty = TaskForm::new(today());
        assert!(empty.preview().is_none());
    }
}
