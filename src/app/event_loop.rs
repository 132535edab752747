use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};

/// One-shot timers for simulated assistant replies.
///
/// Each sent question gets its own timer; timers are never cancelled and
/// fire in the order they were queued.
pub(super) struct ReplyTimer {
    delay_ms: u64,
    pending: VecDeque<(String, u64)>,
}

impl ReplyTimer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: VecDeque::new(),
        }
    }

    pub(super) fn queue(&mut self, question: String, now_ms: u64) {
        self.pending.push_back((question, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<String> {
        let (_, queued_at) = self.pending.front()?;
        if now_ms.saturating_sub(*queued_at) >= self.delay_ms {
            self.pending.pop_front().map(|(question, _)| question)
        } else {
            None
        }
    }

    /// Milliseconds until the oldest timer fires, if any is pending.
    pub(super) fn next_due_in(&self, now_ms: u64) -> Option<u64> {
        self.pending
            .front()
            .map(|(_, queued_at)| (queued_at + self.delay_ms).saturating_sub(now_ms))
    }

    pub(super) fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - covenant-hub requires an interactive terminal")?;
        let size = terminal.size()?;
        drop(init_scope);
        crate::perf::log_event(
            "init.layout",
            format!("terminal={}x{}", size.width, size.height),
        );

        let mut model = self.initial_model();
        let result = self.event_loop(&mut terminal, &mut model);

        ratatui::restore();
        result
    }

    fn event_loop(&self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut reply_timer = ReplyTimer::new(self.reply_delay_ms);
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            while let Some(question) = reply_timer.take_ready(now_ms) {
                crate::perf::log_event(
                    "chat.reply.deliver",
                    format!("frame={frame_idx} question={question:?}"),
                );
                *model = update(std::mem::take(model), Message::DeliverReply(question));
                needs_render = true;
            }

            // Handle events
            let poll_ms = if needs_render {
                0
            } else {
                reply_timer.next_due_in(now_ms).map_or(250, |due| due.clamp(1, 250))
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Refresh timestamp after poll wait so reply timers use accurate times.
                let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    self.dispatch(model, &mut reply_timer, msg, event_ms, frame_idx);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                let mut drained = 0_u32;
                while event::poll(Duration::from_millis(0))? {
                    let drain_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        drained += 1;
                        self.dispatch(model, &mut reply_timer, msg, drain_ms, frame_idx);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    crate::perf::log_event(
                        "event.drain",
                        format!("frame={frame_idx} drained={drained}"),
                    );
                }
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| Self::view(model, frame))?;
                crate::perf::log_event(
                    "frame.draw",
                    format!(
                        "frame={} draw_ms={:.3} pending_replies={}",
                        frame_idx,
                        draw_start.elapsed().as_secs_f64() * 1000.0,
                        reply_timer.is_pending()
                    ),
                );
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(
        &self,
        model: &mut Model,
        reply_timer: &mut ReplyTimer,
        msg: Message,
        now_ms: u64,
        frame_idx: u64,
    ) {
        crate::perf::log_event("event.message", format!("frame={frame_idx} msg={msg:?}"));
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        self.handle_message_side_effects(model, reply_timer, &side_msg, now_ms);
    }
}
