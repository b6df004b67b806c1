use std::future::Future;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::client::SeminarsClient;
use crate::editor::SubmitError;
use crate::models::{Seminar, SeminarForm};
use crate::ui::Ui;
use crate::view::PageView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Failed,
    Loaded,
}

/// Runs the network side of every UI action. Requests run in tasks of their own, so a
/// dropped browser request never leaves the store half-updated; results are applied
/// through the `Ui` reducers. Results that arrive after `unmount` are dropped.
pub struct Session {
    client: SeminarsClient,
    ui: RwLock<Ui>,
    scope: CancellationToken,
}

impl Session {
    pub fn new(client: SeminarsClient) -> Self {
        Self {
            client,
            ui: RwLock::new(Ui::new()),
            scope: CancellationToken::new(),
        }
    }

    /// Runs `task` to completion on its own, even if the caller stops waiting for it.
    async fn settle<F>(&self, name: &'static str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Err(err) = tokio::spawn(task).await {
            error!(task = name, error = %err, "session task failed");
        }
    }

    /// Initial load of the collection.
    pub async fn mount(self: &Arc<Self>) {
        let session = Arc::clone(self);
        self.settle("mount", async move {
            let result = tokio::select! {
                biased;
                _ = session.scope.cancelled() => {
                    debug!("session unmounted before the initial load settled");
                    return;
                }
                result = session.client.fetch_seminars() => result,
            };
            session.ui.write().await.list_mut().load_finished(result);
        })
        .await;
    }

    /// A page load after a failed initial load starts over with a fresh store.
    pub async fn remount_if_failed(self: &Arc<Self>) {
        {
            let mut ui = self.ui.write().await;
            if !self.is_mounted() || ui.list().load_error().is_none() {
                return;
            }
            info!("initial load failed earlier, loading seminars again");
            *ui = Ui::new();
        }
        self.mount().await;
    }

    pub fn unmount(&self) {
        info!("unmounting session");
        self.scope.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        !self.scope.is_cancelled()
    }

    pub async fn load_status(&self) -> LoadStatus {
        let ui = self.ui.read().await;
        if ui.list().is_loading() {
            LoadStatus::Loading
        } else if ui.list().load_error().is_some() {
            LoadStatus::Failed
        } else {
            LoadStatus::Loaded
        }
    }

    pub async fn is_loading(&self) -> bool {
        self.load_status().await == LoadStatus::Loading
    }

    pub async fn seminars(&self) -> Vec<Seminar> {
        self.ui.read().await.list().seminars().to_vec()
    }

    pub async fn view(&self, today: NaiveDate) -> PageView {
        self.ui.read().await.view(today)
    }

    pub async fn delete(self: &Arc<Self>, id: i64) {
        let session = Arc::clone(self);
        self.settle("delete", async move {
            let result = session.client.delete_seminar(id).await;
            if !session.is_mounted() {
                debug!(seminar_id = id, "dropping delete result after unmount");
                return;
            }
            session.ui.write().await.list_mut().delete_finished(id, result);
        })
        .await;
    }

    pub async fn open_editor(&self, id: i64) -> bool {
        self.ui.write().await.open_editor(id)
    }

    pub async fn close_editor(&self) {
        self.ui.write().await.close_editor();
    }

    pub async fn submit(self: &Arc<Self>, form: SeminarForm) -> Result<(), SubmitError> {
        let payload = self.ui.write().await.begin_submit(form)?;
        info!(seminar_id = payload.id, "submitting seminar update");

        let session = Arc::clone(self);
        self.settle("update", async move {
            let result = session.client.update_seminar(&payload).await;
            if !session.is_mounted() {
                debug!(seminar_id = payload.id, "dropping update result after unmount");
                return;
            }
            session.ui.write().await.submit_finished(payload, result);
        })
        .await;
        Ok(())
    }
}
