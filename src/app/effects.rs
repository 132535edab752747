use std::io::{Write, stdout};

use crate::app::event_loop::ReplyTimer;
use crate::app::{App, Message, Model, ToastLevel, is_sendable};
use base64::Engine;

impl App {
    pub(super) fn handle_message_side_effects(
        &self,
        model: &mut Model,
        reply_timer: &mut ReplyTimer,
        msg: &Message,
        now_ms: u64,
    ) {
        match msg {
            Message::Send(text) if is_sendable(text) => {
                tracing::debug!(question = %text, delay_ms = self.reply_delay_ms, "queued reply");
                reply_timer.queue(text.clone(), now_ms);
            }
            Message::CopyCitation => {
                let Some(citation) = model.active_citation_ref() else {
                    return;
                };
                let excerpt = citation.excerpt.clone();
                match copy_to_clipboard(&excerpt) {
                    Ok(()) => model.show_toast(ToastLevel::Info, "Copied excerpt"),
                    Err(err) => {
                        model.show_toast(ToastLevel::Error, format!("Copy failed: {err}"));
                        crate::perf::log_event("clipboard.error", format!("err={err}"));
                    }
                }
            }
            Message::OpenDocument(id) if model.document_view != Some(*id) => {
                tracing::debug!(document_id = id, "ignored request for unknown document");
                crate::perf::log_event("document.unknown", format!("id={id}"));
            }
            _ => {}
        }
    }
}

fn copy_to_clipboard(text: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        if copy_to_pbcopy(text).is_ok() {
            return Ok(());
        }
    }
    copy_to_clipboard_osc52(text)
}

#[cfg(target_os = "macos")]
fn copy_to_pbcopy(text: &str) -> std::io::Result<()> {
    use std::process::{Command, Stdio};

    let mut child = Command::new("pbcopy").stdin(Stdio::piped()).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other("pbcopy failed"))
    }
}

fn copy_to_clipboard_osc52(text: &str) -> std::io::Result<()> {
    let osc = osc52_sequence(text);
    let mut out = stdout();
    out.write_all(osc.as_bytes())?;
    out.flush()
}

fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}
