use tracing::{info, warn};

use crate::client::ClientError;
use crate::editor::EditorEvents;
use crate::models::Seminar;

pub const LOAD_ERROR: &str = "Error loading data";
pub const DELETE_ERROR: &str = "Error deleting seminar";

/// Owner of the in-memory seminar collection. All mutations are reducers applied
/// after a network call settles or an editor callback fires.
#[derive(Debug, Clone)]
pub struct SeminarList {
    seminars: Vec<Seminar>,
    loading: bool,
    load_error: Option<String>,
    action_error: Option<String>,
    selected: Option<Seminar>,
}

impl Default for SeminarList {
    fn default() -> Self {
        Self::new()
    }
}

impl SeminarList {
    pub fn new() -> Self {
        Self {
            seminars: Vec::new(),
            loading: true,
            load_error: None,
            action_error: None,
            selected: None,
        }
    }

    pub fn seminars(&self) -> &[Seminar] {
        &self.seminars
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn selected(&self) -> Option<&Seminar> {
        self.selected.as_ref()
    }

    pub fn find(&self, id: i64) -> Option<&Seminar> {
        self.seminars.iter().find(|seminar| seminar.id == id)
    }

    pub fn load_finished(&mut self, result: Result<Vec<Seminar>, ClientError>) {
        match result {
            Ok(seminars) => {
                info!(count = seminars.len(), "seminars loaded");
                self.seminars = seminars;
            }
            Err(err) => {
                warn!(error = %err, "failed to load seminars");
                self.load_error = Some(err.user_message(LOAD_ERROR));
            }
        }
        self.loading = false;
    }

    pub fn delete_finished(&mut self, id: i64, result: Result<(), ClientError>) {
        match result {
            Ok(()) => {
                info!(seminar_id = id, "seminar deleted");
                self.seminars.retain(|seminar| seminar.id != id);
                self.action_error = None;
            }
            Err(err) => {
                warn!(seminar_id = id, error = %err, "failed to delete seminar");
                self.action_error = Some(err.user_message(DELETE_ERROR));
            }
        }
    }

    pub fn open_edit_modal(&mut self, seminar: Seminar) {
        self.selected = Some(seminar);
    }

    pub fn close_edit_modal(&mut self) {
        self.selected = None;
    }

    pub fn update_seminar(&mut self, updated: Seminar) {
        if let Some(slot) = self.seminars.iter_mut().find(|s| s.id == updated.id) {
            *slot = updated;
        }
    }
}

impl EditorEvents for SeminarList {
    fn on_update(&mut self, seminar: Seminar) {
        self.update_seminar(seminar);
    }

    fn on_close(&mut self) {
        self.close_edit_modal();
    }
}
