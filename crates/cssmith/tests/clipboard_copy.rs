//! Clipboard copy flow: success raises a toast, failure logs and stays
//! silent.

#![allow(clippy::unwrap_used, reason = "tests unwrap shared test state")]

use anyhow::{Result, bail};
use cssmith::{
    Clipboard, GradientEditor, LogNotifier, Notifier, OutputFormat, Toast, copy_output,
    copy_output_detached,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Clipboard that records every successful write.
#[derive(Default)]
struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
}

impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: String) -> Result<()> {
        self.writes.lock().unwrap().push(text);
        Ok(())
    }
}

/// Clipboard that always reports denial.
struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
    async fn write_text(&self, _text: String) -> Result<()> {
        bail!("clipboard access denied")
    }
}

/// Notifier that collects raised toasts.
#[derive(Default)]
struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}

fn init_test_logger() {
    drop(env_logger::builder().is_test(true).try_init());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn successful_copy_raises_one_toast() {
        init_test_logger();
        let clipboard = MemoryClipboard::default();
        let notifier = RecordingNotifier::default();

        copy_output(
            "background: red;".to_owned(),
            OutputFormat::Css,
            &clipboard,
            &notifier,
        )
        .await;

        let writes = clipboard.writes.lock().unwrap();
        assert_eq!(writes.as_slice(), ["background: red;"]);

        let toasts = notifier.toasts.lock().unwrap();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Copied!");
        assert_eq!(
            toasts[0].description.as_deref(),
            Some("The CSS code was copied to the clipboard")
        );
    }

    #[tokio::test]
    async fn denied_copy_stays_silent() {
        init_test_logger();
        let notifier = RecordingNotifier::default();

        copy_output(
            "box-shadow: none;".to_owned(),
            OutputFormat::Tailwind,
            &DeniedClipboard,
            &notifier,
        )
        .await;

        // Failure is logged, never toasted; there is no error state to
        // observe.
        assert!(notifier.toasts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn editor_copy_writes_the_rendered_code() {
        init_test_logger();
        let clipboard = MemoryClipboard::default();
        let notifier = RecordingNotifier::default();

        let editor = GradientEditor::new();
        editor.copy(&clipboard, &notifier).await;

        let writes = clipboard.writes.lock().unwrap();
        assert_eq!(writes.as_slice(), [editor.output_code()]);
        assert_eq!(notifier.toasts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn detached_copy_completes_without_a_join() {
        init_test_logger();
        let clipboard = Arc::new(MemoryClipboard::default());
        let notifier = Arc::new(RecordingNotifier::default());

        copy_output_detached(
            "transform: rotateY(180deg);".to_owned(),
            OutputFormat::Css,
            Arc::clone(&clipboard),
            Arc::clone(&notifier),
        );

        for _attempt in 0..100 {
            if !clipboard.writes.lock().unwrap().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        assert_eq!(
            clipboard.writes.lock().unwrap().as_slice(),
            ["transform: rotateY(180deg);"]
        );
        assert_eq!(notifier.toasts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn log_notifier_accepts_toasts() {
        init_test_logger();
        LogNotifier.notify(Toast {
            title: "Copied!".to_owned(),
            description: None,
        });
    }
}
