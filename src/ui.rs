use chrono::NaiveDate;
use tracing::debug;

use crate::client::ClientError;
use crate::dates::DateRange;
use crate::editor::{SeminarEditor, SubmitError};
use crate::list::SeminarList;
use crate::models::{Seminar, SeminarForm};
use crate::view::{EditorView, PageView};

/// The whole client-side state: the seminar list and, while a seminar is
/// selected, exactly one editor bound to it.
#[derive(Debug, Default)]
pub struct Ui {
    list: SeminarList,
    editor: Option<SeminarEditor>,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &SeminarList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SeminarList {
        &mut self.list
    }

    pub fn editor(&self) -> Option<&SeminarEditor> {
        self.editor.as_ref()
    }

    /// Returns `false` when `id` is not part of the collection.
    pub fn open_editor(&mut self, id: i64) -> bool {
        let Some(seminar) = self.list.find(id).cloned() else {
            return false;
        };
        self.list.open_edit_modal(seminar);
        self.sync_editor();
        true
    }

    pub fn close_editor(&mut self) {
        if let Some(editor) = &self.editor {
            editor.cancel(&mut self.list);
        } else {
            self.list.close_edit_modal();
        }
        self.sync_editor();
    }

    pub fn begin_submit(&mut self, form: SeminarForm) -> Result<Seminar, SubmitError> {
        let editor = self.editor.as_mut().ok_or(SubmitError::NotOpen)?;
        editor.begin_submit(form)
    }

    /// Applies the outcome of a PUT for seminar `id`. If that editor is gone or was
    /// replaced in the meantime, a successful update still reaches the collection.
    pub fn submit_finished(&mut self, payload: Seminar, result: Result<(), ClientError>) {
        match self.editor.as_mut() {
            Some(editor) if editor.seminar().id == payload.id && editor.is_submitting() => {
                editor.submit_finished(result, &mut self.list);
            }
            _ => {
                debug!(seminar_id = payload.id, "update settled after its editor closed");
                if result.is_ok() {
                    self.list.update_seminar(payload);
                }
            }
        }
        self.sync_editor();
    }

    /// Mounts an editor for the selected seminar and drops it once nothing is selected.
    fn sync_editor(&mut self) {
        let wanted = self.list.selected().map(|seminar| seminar.id);
        let mounted = self.editor.as_ref().map(|editor| editor.seminar().id);
        if wanted != mounted {
            self.editor = self.list.selected().cloned().map(SeminarEditor::open);
        }
    }

    pub fn view(&self, today: NaiveDate) -> PageView {
        if self.list.is_loading() {
            return PageView::Loading;
        }
        if let Some(message) = self.list.load_error() {
            return PageView::Failed {
                message: message.to_string(),
            };
        }
        PageView::Ready {
            seminars: self.list.seminars().to_vec(),
            action_error: self.list.action_error().map(str::to_string),
            editor: self
                .editor
                .as_ref()
                .map(|editor| EditorView::new(editor, DateRange::starting(today))),
        }
    }
}
