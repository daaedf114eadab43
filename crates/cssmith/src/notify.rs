//! Transient notification seam.
//!
//! The core only raises toasts; display and auto-dismiss belong to the
//! embedding shell.

/// A transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
}

/// Toast sink implemented by the embedding shell.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Default implementor that forwards toasts to the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        match toast.description {
            Some(description) => log::info!("{}: {description}", toast.title),
            None => log::info!("{}", toast.title),
        }
    }
}
