//! Scroll-derived geometry: anchor jump targets, the scroll-spy active
//! section, and the pull-to-refresh hint offset.

use crate::config::NavConfig;
use crate::consts::{PULL_HINT_MAX_PX, PULL_HINT_THRESHOLD_PX};

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Layout box of a `section[id]`, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section the nav should highlight at `scroll_y`.
///
/// A section counts once the viewport is within `offset` of its top. When
/// sections overlap the last one in document order wins. `None` means the
/// highlight should be left as it is.
#[must_use]
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let top = section.top - offset;
            scroll_y > top && scroll_y <= top + section.height
        })
        .map(|section| section.id.as_str())
}

/// `href` of the nav link pointing at `section_id`.
#[must_use]
pub fn anchor_href(section_id: &str) -> String {
    format!("#{section_id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Instant,
    Smooth,
}

/// Where to scroll for an in-page anchor whose element sits at `offset_top`.
///
/// Touch devices use a smaller header clearance and jump instantly.
#[must_use]
pub fn anchor_scroll(offset_top: f64, is_touch: bool, config: &NavConfig) -> (f64, ScrollMode) {
    if is_touch {
        (offset_top - config.touch_anchor_offset_px, ScrollMode::Instant)
    } else {
        (offset_top - config.anchor_offset_px, ScrollMode::Smooth)
    }
}

/// Body translation for a pull of `distance` px at the top of the page.
#[must_use]
pub fn pull_hint_offset(distance: f64) -> Option<f64> {
    (distance > PULL_HINT_THRESHOLD_PX).then(|| (distance - PULL_HINT_THRESHOLD_PX).min(PULL_HINT_MAX_PX))
}

/// Tracks a pull gesture that started while the page was at the top.
#[derive(Debug, Clone, Copy, Default)]
pub struct PullGesture {
    start_y: Option<f64>,
}

impl PullGesture {
    /// Begin tracking if the page is scrolled to the very top.
    pub fn start(&mut self, page_y: f64, scroll_y: f64) {
        if at_top(scroll_y) {
            self.start_y = Some(page_y);
        }
    }

    /// Hint offset for the current finger position, if any.
    #[must_use]
    pub fn moved(&self, page_y: f64, scroll_y: f64) -> Option<f64> {
        let start = self.start_y?;
        if !at_top(scroll_y) {
            return None;
        }
        pull_hint_offset(page_y - start)
    }

    /// Stop tracking. Returns whether a gesture was in progress.
    pub fn end(&mut self) -> bool {
        self.start_y.take().is_some()
    }
}

fn at_top(scroll_y: f64) -> bool {
    scroll_y.abs() < f64::EPSILON
}
