//! Scroll state for a vertically scrolling pane.
//!
//! The [`Viewport`] tracks which slice of a pane's lines is visible. The
//! document viewer and the chat transcript each own one.

use std::ops::Range;

/// Visible window over a list of lines.
///
/// When `follow_tail` is set, growing the content keeps the window pinned to
/// the last line (chat transcripts); otherwise the offset stays put.
///
/// # Example
///
/// ```
/// use covenant_hub::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(10, 40);
/// assert_eq!(vp.visible_range(), 0..10);
///
/// vp.scroll_down(5);
/// assert_eq!(vp.visible_range(), 5..15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    height: u16,
    offset: usize,
    total_lines: usize,
    follow_tail: bool,
}

impl Viewport {
    pub const fn new(height: u16, total_lines: usize) -> Self {
        Self {
            height,
            offset: 0,
            total_lines,
            follow_tail: false,
        }
    }

    /// A viewport that stays pinned to the newest line until scrolled up.
    pub const fn tailing(height: u16, total_lines: usize) -> Self {
        let mut vp = Self::new(height, total_lines);
        vp.follow_tail = true;
        vp.offset = vp.max_offset();
        vp
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub const fn is_following_tail(&self) -> bool {
        self.follow_tail
    }

    /// Range of visible line indices, clamped to the content.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.total_lines);
        let end = (self.offset + self.height as usize).min(self.total_lines);
        start..end
    }

    /// Scroll position as a percentage (0-100).
    pub fn scroll_percent(&self) -> u8 {
        let max_offset = self.max_offset();
        if max_offset == 0 {
            return 100;
        }
        // Percentage value always 0-100
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        {
            ((self.offset as f64 / max_offset as f64) * 100.0).round() as u8
        }
    }

    pub const fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    pub const fn can_scroll_down(&self) -> bool {
        self.offset < self.max_offset()
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
        self.follow_tail = self.follow_tail && !self.can_scroll_down();
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    pub const fn go_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Re-enable tail following and jump to the newest line.
    pub const fn follow(&mut self) {
        self.follow_tail = true;
        self.go_to_bottom();
    }

    pub fn set_height(&mut self, height: u16) {
        self.height = height;
        self.clamp();
    }

    /// Update the content length, e.g. after a relayout or new message.
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.clamp();
    }

    fn clamp(&mut self) {
        if self.follow_tail {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(20, 0)
    }
}
