//! Clipboard seam and the copy routine.
//!
//! The clipboard write is the only fallible and the only asynchronous
//! operation in the toolkit. Failure is logged and swallowed: the caller
//! observes no error state, the user simply gets no success toast.

use crate::notify::{Notifier, Toast};
use crate::output::OutputFormat;
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;

/// Platform clipboard service; implemented by the embedding shell, never by
/// this crate.
pub trait Clipboard: Send + Sync {
    /// Write `text` to the system clipboard.
    ///
    /// # Errors
    /// Fails when the platform clipboard is unavailable or access is denied.
    fn write_text(&self, text: String) -> impl Future<Output = Result<()>> + Send;
}

/// Copy a rendered code block to the clipboard, raising a success toast
/// naming the copied format. A failed write is logged and not surfaced.
pub async fn copy_output<ClipboardImpl, NotifierImpl>(
    code: String,
    format: OutputFormat,
    clipboard: &ClipboardImpl,
    notifier: &NotifierImpl,
) where
    ClipboardImpl: Clipboard,
    NotifierImpl: Notifier,
{
    match clipboard.write_text(code).await {
        Ok(()) => notifier.notify(Toast {
            title: "Copied!".to_owned(),
            description: Some(format!(
                "The {} code was copied to the clipboard",
                format.label()
            )),
        }),
        Err(error) => log::error!("clipboard write failed: {error:#}"),
    }
}

/// Fire-and-forget variant of [`copy_output`]: spawn the write and return
/// immediately without joining it.
pub fn copy_output_detached<ClipboardImpl, NotifierImpl>(
    code: String,
    format: OutputFormat,
    clipboard: Arc<ClipboardImpl>,
    notifier: Arc<NotifierImpl>,
) where
    ClipboardImpl: Clipboard + 'static,
    NotifierImpl: Notifier + 'static,
{
    drop(tokio::spawn(async move {
        copy_output(code, format, clipboard.as_ref(), notifier.as_ref()).await;
    }));
}
