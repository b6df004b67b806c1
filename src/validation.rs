use serde::Serialize;

use crate::models::SeminarForm;

pub const TITLE_REQUIRED: &str = "Enter a title";
pub const DESCRIPTION_REQUIRED: &str = "Enter a description";
pub const DATE_REQUIRED: &str = "Choose a date";
pub const TIME_REQUIRED: &str = "Choose a time";

/// Per-field messages shown under the offending input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    pub date: Option<&'static str>,
    pub time: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.time.is_none()
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.is_empty().then_some(message)
}

pub fn validate_form(form: &SeminarForm) -> Result<(), FieldErrors> {
    let errors = FieldErrors {
        title: required(&form.title, TITLE_REQUIRED),
        description: required(&form.description, DESCRIPTION_REQUIRED),
        date: required(&form.date, DATE_REQUIRED),
        time: required(&form.time, TIME_REQUIRED),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
