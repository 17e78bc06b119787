use tracing::warn;
use ulid::Ulid;

use crate::models::{AttachedImage, ImageBlob};

use super::rules::FormLimits;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRejection {
    /// The whole batch would push the draft over the limit.
    TooMany { limit: usize },
    NotAnImage { name: String },
    TooLarge { name: String, limit_bytes: u64 },
}

impl ImageRejection {
    pub fn message(&self) -> String {
        match self {
            Self::TooMany { limit } => format!("You can attach up to {limit} images."),
            Self::NotAnImage { name } => format!("{name}: only image files can be attached."),
            Self::TooLarge { name, limit_bytes } => {
                format!("{name}: files must be {} or smaller.", size_label(*limit_bytes))
            }
        }
    }
}

const MIB: u64 = 1024 * 1024;

fn size_label(bytes: u64) -> String {
    if bytes < MIB {
        format!("{bytes} bytes")
    } else {
        format!("{}MB", bytes / MIB)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AttachReport {
    pub attached: Vec<Ulid>,
    pub rejected: Vec<ImageRejection>,
    /// One entry per input file, in input order.
    pub outcomes: Vec<Result<Ulid, ImageRejection>>,
}

impl AttachReport {
    /// One message for the whole batch, or `None` when nothing was rejected.
    pub fn error_message(&self) -> Option<String> {
        match self.rejected.as_slice() {
            [] => None,
            [only] => Some(only.message()),
            many => Some(format!(
                "{} files were not attached: {}",
                many.len(),
                many.iter()
                    .map(ImageRejection::message)
                    .collect::<Vec<_>>()
                    .join(" ")
            )),
        }
    }
}

/// Attach a batch of picked files. A batch that would exceed the count
/// limit is rejected as a whole; otherwise each file is checked on its own.
pub fn attach(images: &mut Vec<AttachedImage>, batch: Vec<ImageBlob>, limits: &FormLimits) -> AttachReport {
    let mut report = AttachReport::default();
    if batch.is_empty() {
        return report;
    }
    if images.len() + batch.len() > limits.max_images {
        warn!(
            current = images.len(),
            incoming = batch.len(),
            limit = limits.max_images,
            "image batch rejected"
        );
        let rejection = ImageRejection::TooMany {
            limit: limits.max_images,
        };
        report.outcomes = vec![Err(rejection.clone()); batch.len()];
        report.rejected.push(rejection);
        return report;
    }

    for blob in batch {
        if !blob.mime_type.starts_with("image/") {
            warn!(name = %blob.name, mime = %blob.mime_type, "skipping non-image file");
            let rejection = ImageRejection::NotAnImage { name: blob.name };
            report.outcomes.push(Err(rejection.clone()));
            report.rejected.push(rejection);
            continue;
        }
        if blob.size > limits.max_image_bytes {
            warn!(name = %blob.name, size = blob.size, "skipping oversized image");
            let rejection = ImageRejection::TooLarge {
                name: blob.name,
                limit_bytes: limits.max_image_bytes,
            };
            report.outcomes.push(Err(rejection.clone()));
            report.rejected.push(rejection);
            continue;
        }
        let id = Ulid::new();
        images.push(AttachedImage {
            id,
            name: blob.name,
            mime_type: blob.mime_type,
            size: blob.size,
            preview: None,
        });
        report.attached.push(id);
        report.outcomes.push(Ok(id));
    }
    report
}

/// Store a finished preview. Returns false when the image was removed in
/// the meantime.
pub fn complete_preview(images: &mut [AttachedImage], id: Ulid, preview: String) -> bool {
    match images.iter_mut().find(|img| img.id == id) {
        Some(img) => {
            img.preview = Some(preview);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str) -> ImageBlob {
        ImageBlob::new(name, "image/png", vec![0u8; 16])
    }

    #[test]
    fn test_over_limit_batch_rejected_whole() {
        let mut images = Vec::new();
        let batch = (0..5).map(|i| png(&format!("{i}.png"))).collect();
        let report = attach(&mut images, batch, &FormLimits::default());
        assert!(images.is_empty());
        assert!(report.attached.is_empty());
        assert_eq!(report.rejected, vec![ImageRejection::TooMany { limit: 4 }]);
        assert_eq!(report.outcomes.len(), 5);
        assert!(report.outcomes.iter().all(Result::is_err));
        assert_eq!(
            report.error_message().as_deref(),
            Some("You can attach up to 4 images.")
        );
    }

    #[test]
    fn test_mixed_batch_keeps_valid_files() {
        let mut images = Vec::new();
        let limits = FormLimits {
            max_image_bytes: 8,
            ..FormLimits::default()
        };
        let batch = vec![
            ImageBlob::new("ok.jpg", "image/jpeg", vec![1, 2, 3]),
            ImageBlob::new("notes.txt", "text/plain", vec![1]),
            ImageBlob::new("huge.png", "image/png", vec![0u8; 9]),
        ];
        let report = attach(&mut images, batch, &limits);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].name, "ok.jpg");
        assert_eq!(report.attached, vec![images[0].id]);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.outcomes[0], Ok(images[0].id));
        assert!(matches!(
            report.outcomes[1],
            Err(ImageRejection::NotAnImage { .. })
        ));
        assert!(matches!(
            report.outcomes[2],
            Err(ImageRejection::TooLarge { .. })
        ));
        let msg = report.error_message().unwrap();
        assert!(msg.starts_with("2 files were not attached"), "{msg}");
        assert!(msg.contains("notes.txt"));
        assert!(msg.contains("huge.png: files must be 8 bytes or smaller."));
    }

    #[test]
    fn test_size_limit_message() {
        let large = ImageRejection::TooLarge {
            name: "a.png".into(),
            limit_bytes: 10 * MIB,
        };
        assert_eq!(large.message(), "a.png: files must be 10MB or smaller.");
        let small = ImageRejection::TooLarge {
            name: "a.png".into(),
            limit_bytes: 512 * 1024,
        };
        assert_eq!(small.message(), "a.png: files must be 524288 bytes or smaller.");
    }

    #[test]
    fn test_preview_by_identity() {
        let mut images = Vec::new();
        let report = attach(&mut images, vec![png("a.png"), png("b.png")], &FormLimits::default());
        let (first, second) = (report.attached[0], report.attached[1]);
        images.remove(0);
        assert!(!complete_preview(&mut images, first, "data:a".into()));
        assert!(complete_preview(&mut images, second, "data:b".into()));
        assert_eq!(images[0].name, "b.png");
        assert_eq!(images[0].preview.as_deref(), Some("data:b"));
    }
}
