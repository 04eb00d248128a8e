use std::thread;

use anyhow::Context;
use arboard::Clipboard;

struct CopyRequest {
    text: String,
    reply: kanal::Sender<Result<(), String>>,
}

/// Owns the system clipboard on a dedicated thread.
///
/// The clipboard handle stays alive between copies, which keeps the copied
/// text available on X11 where the owner has to serve it.
pub struct ClipboardWriter {
    tx: kanal::Sender<CopyRequest>,
}

impl ClipboardWriter {
    pub fn spawn() -> Self {
        let (tx, rx) = kanal::unbounded::<CopyRequest>();

        thread::spawn(move || {
            let mut clipboard = match Clipboard::new() {
                Ok(clipboard) => Some(clipboard),
                Err(e) => {
                    tracing::error!("Clipboard unavailable: {}", e);
                    None
                }
            };

            while let Ok(request) = rx.recv() {
                let result = match clipboard.as_mut() {
                    Some(clipboard) => clipboard.set_text(request.text).map_err(|e| e.to_string()),
                    None => Err("no clipboard".to_string()),
                };
                let _ = request.reply.send(result);
            }

            tracing::debug!("Clipboard thread exiting");
        });

        Self { tx }
    }

    pub async fn copy(&self, text: String) -> anyhow::Result<()> {
        let (reply, reply_rx) = kanal::bounded(1);
        self.tx
            .send(CopyRequest { text, reply })
            .context("clipboard thread is gone")?;

        reply_rx
            .to_async()
            .recv()
            .await
            .context("clipboard thread dropped the request")?
            .map_err(|e| anyhow::anyhow!("copy failed: {e}"))
    }
}
