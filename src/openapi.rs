use utoipa::OpenApi;

use crate::models::{Seminar, SeminarForm};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::list_page,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::delete_seminar,
        crate::handlers::open_editor,
        crate::handlers::close_editor,
        crate::handlers::submit_editor
    ),
    components(schemas(Seminar, SeminarForm)),
    tags(
        (name = "seminars", description = "Seminar list and editor"),
        (name = "health", description = "Liveness and readiness probes")
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_editor_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/editor"));
        assert!(doc.paths.paths.contains_key("/seminars/{id}/delete"));
    }
}
