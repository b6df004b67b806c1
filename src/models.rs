use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dates::{form_to_wire, wire_to_form};

/// A seminar as the remote API stores it. `date` is in wire format (`DD.MM.YYYY`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Seminar {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[schema(example = "15.06.2025")]
    pub date: String,
    #[schema(example = "10:00")]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Editable fields of a seminar as the edit form posts them. `date` is in form format (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct SeminarForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[schema(example = "2025-06-15")]
    pub date: String,
    #[serde(default)]
    #[schema(example = "10:00")]
    pub time: String,
}

impl SeminarForm {
    pub fn from_seminar(seminar: &Seminar) -> Self {
        Self {
            title: seminar.title.clone(),
            description: seminar.description.clone(),
            date: wire_to_form(&seminar.date),
            time: seminar.time.clone(),
        }
    }

    /// Builds the record to send back to the API. `id` and `photo` come from the original.
    pub fn into_seminar(self, original: &Seminar) -> Seminar {
        Seminar {
            id: original.id,
            title: self.title,
            description: self.description,
            date: form_to_wire(&self.date),
            time: self.time,
            photo: original.photo.clone(),
        }
    }
}
