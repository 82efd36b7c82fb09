//! Runs the loader in the background and reports back to the UI loop.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use super::app::View;
use crate::loader::Loader;

/// Messages sent from the loader task to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsyncMessage {
    /// The loading bar reached a new percentage.
    LoaderProgress(u8),
    /// The loader settled; switch to the target view.
    TransitionComplete(View),
}

/// Spawns the loader for a switch to `to`.
///
/// Progress updates are best effort and dropped when the channel is full.
/// Completion is always delivered unless the receiver is gone.
pub fn spawn(loader: Loader, to: View, tx: mpsc::Sender<AsyncMessage>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loader
            .run(|percent| {
                let _ = tx.try_send(AsyncMessage::LoaderProgress(percent));
            })
            .await;

        if tx.send(AsyncMessage::TransitionComplete(to)).await.is_err() {
            warn!(?to, "UI loop gone before transition completed");
        }
    })
}
