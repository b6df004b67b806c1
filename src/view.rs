use minijinja::Environment;
use serde::Serialize;

use crate::dates::DateRange;
use crate::editor::SeminarEditor;
use crate::models::Seminar;
use crate::validation::FieldErrors;

const PAGE_TEMPLATE: &str = "page.html";
const EDITOR_TEMPLATE: &str = "editor.html";

/// Render snapshot of the UI state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageView {
    Loading,
    Failed {
        message: String,
    },
    Ready {
        seminars: Vec<Seminar>,
        action_error: Option<String>,
        editor: Option<EditorView>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub date_range: DateRange,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl EditorView {
    pub fn new(editor: &SeminarEditor, date_range: DateRange) -> Self {
        let form = editor.form();
        Self {
            id: editor.seminar().id,
            title: form.title.clone(),
            description: form.description.clone(),
            date: form.date.clone(),
            time: form.time.clone(),
            date_range,
            errors: editor.errors().clone(),
            submitting: editor.is_submitting(),
        }
    }
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE, include_str!("../templates/page.html"))?;
        env.add_template(EDITOR_TEMPLATE, include_str!("../templates/editor.html"))?;
        Ok(Self { env })
    }

    pub fn render(&self, view: &PageView) -> Result<String, minijinja::Error> {
        self.env.get_template(PAGE_TEMPLATE)?.render(view)
    }
}
