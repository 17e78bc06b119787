use base64::Engine;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTime {
    Morning,
    Afternoon,
    Evening,
    Anytime,
}

impl PreferredTime {
    pub const ALL: [PreferredTime; 4] = [
        Self::Morning,
        Self::Afternoon,
        Self::Evening,
        Self::Anytime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Anytime => "anytime",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "morning" => Some(Self::Morning),
            "afternoon" => Some(Self::Afternoon),
            "evening" => Some(Self::Evening),
            "anytime" => Some(Self::Anytime),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Morning => "Morning (9:00-12:00)",
            Self::Afternoon => "Afternoon (13:00-17:00)",
            Self::Evening => "Evening (17:00-20:00)",
            Self::Anytime => "Anytime",
        }
    }
}

/// Raw file handed over by the file picker.
#[derive(Debug, Clone)]
pub struct ImageBlob {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub content: Vec<u8>,
}

impl ImageBlob {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size: content.len() as u64,
            content,
        }
    }

    /// `data:` URL of the file content, used as the attachment preview.
    pub fn data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.content);
        format!("data:{};base64,{encoded}", self.mime_type)
    }
}

/// An accepted image. `id` is stable for the lifetime of the draft.
#[derive(Debug, Clone, Serialize)]
pub struct AttachedImage {
    pub id: Ulid,
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    /// Filled in once the preview read completes.
    pub preview: Option<String>,
}

/// The in-progress task-creation record. Fields hold raw user input.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DraftTask {
    pub category: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub budget: String,
    /// `YYYY-MM-DD`
    pub preferred_date: String,
    pub preferred_time: String,
    pub urgent: bool,
    pub images: Vec<AttachedImage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_preview() {
        let blob = ImageBlob::new("dot.png", "image/png", b"hello".to_vec());
        assert_eq!(blob.size, 5);
        assert_eq!(blob.data_url(), "data:image/png;base64,aGVsbG8=");
    }
}
