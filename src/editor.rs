use thiserror::Error;
use tracing::{error, info};

use crate::client::ClientError;
use crate::models::{Seminar, SeminarForm};
use crate::validation::{FieldErrors, validate_form};

/// Callbacks the editor reports to its owner.
pub trait EditorEvents {
    fn on_update(&mut self, seminar: Seminar);
    fn on_close(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorStatus {
    Idle,
    /// `payload` is the record sent to the API, date already in wire format.
    Submitting { payload: Seminar },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Form has invalid fields")]
    Invalid(FieldErrors),
    #[error("A submission is already pending")]
    Busy,
    #[error("No seminar is being edited")]
    NotOpen,
}

#[derive(Debug, Clone)]
pub struct SeminarEditor {
    seminar: Seminar,
    form: SeminarForm,
    errors: FieldErrors,
    status: EditorStatus,
}

impl SeminarEditor {
    pub fn open(seminar: Seminar) -> Self {
        let form = SeminarForm::from_seminar(&seminar);
        Self {
            seminar,
            form,
            errors: FieldErrors::default(),
            status: EditorStatus::Idle,
        }
    }

    pub fn seminar(&self) -> &Seminar {
        &self.seminar
    }

    pub fn form(&self) -> &SeminarForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &EditorStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, EditorStatus::Submitting { .. })
    }

    /// Stores the posted values and validates them. On success the editor moves to
    /// `Submitting` and returns the record to PUT.
    pub fn begin_submit(&mut self, form: SeminarForm) -> Result<Seminar, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::Busy);
        }
        self.form = form;
        if let Err(errors) = validate_form(&self.form) {
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }
        self.errors = FieldErrors::default();

        let payload = self.form.clone().into_seminar(&self.seminar);
        self.status = EditorStatus::Submitting {
            payload: payload.clone(),
        };
        Ok(payload)
    }

    /// Settles a pending submission. Success reports `on_update` then `on_close`;
    /// failure is only logged and the editor stays open.
    pub fn submit_finished(
        &mut self,
        result: Result<(), ClientError>,
        events: &mut impl EditorEvents,
    ) {
        let status = std::mem::replace(&mut self.status, EditorStatus::Idle);
        let EditorStatus::Submitting { payload } = status else {
            return;
        };

        match result {
            Ok(()) => {
                info!(seminar_id = payload.id, "seminar updated");
                events.on_update(payload);
                events.on_close();
            }
            Err(err) => {
                error!(seminar_id = payload.id, error = %err, "Error updating seminar");
            }
        }
    }

    pub fn cancel(&self, events: &mut impl EditorEvents) {
        events.on_close();
    }
}
