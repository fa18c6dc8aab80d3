//! Navigation Controller
//!
//! Carousel arrows scroll the card list by one card. The list runs
//! horizontally on narrow viewports and vertically on desktop, so the axis
//! is chosen from the viewport width at the moment of each trigger.

/// Width of one card along the scroll axis
pub const CARD_EXTENT: f64 = 200.0;

/// Gap between consecutive cards
pub const CARD_MARGIN: f64 = 20.0;

/// Distance moved by one trigger
pub const SCROLL_STEP: f64 = CARD_EXTENT + CARD_MARGIN;

/// Viewports at least this wide use the desktop (vertical) layout
pub const DESKTOP_BREAKPOINT: f64 = 1024.0;

/// Which arrow was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Previous => -1.0,
            Direction::Next => 1.0,
        }
    }
}

/// Scroll axis of the card list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

impl ScrollAxis {
    pub fn for_viewport(width: f64) -> Self {
        if width < DESKTOP_BREAKPOINT {
            ScrollAxis::Horizontal
        } else {
            ScrollAxis::Vertical
        }
    }
}

/// Relative scroll to apply to the card list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

impl ScrollOffset {
    /// Offset for one trigger of `direction` at the given viewport width
    pub fn for_trigger(direction: Direction, viewport_width: f64) -> Self {
        let delta = direction.sign() * SCROLL_STEP;
        match ScrollAxis::for_viewport(viewport_width) {
            ScrollAxis::Horizontal => Self {
                left: delta,
                top: 0.0,
            },
            ScrollAxis::Vertical => Self {
                left: 0.0,
                top: delta,
            },
        }
    }

    /// Script that smoothly scrolls the element `element_id` by this offset.
    ///
    /// Clamping at the content edges is left to the browser.
    pub fn scroll_script(&self, element_id: &str) -> String {
        format!(
            "document.getElementById('{}')?.scrollBy({{ left: {}, top: {}, behavior: 'smooth' }});",
            element_id, self.left, self.top
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_threshold() {
        assert_eq!(ScrollAxis::for_viewport(375.0), ScrollAxis::Horizontal);
        assert_eq!(ScrollAxis::for_viewport(1023.9), ScrollAxis::Horizontal);
        assert_eq!(ScrollAxis::for_viewport(1024.0), ScrollAxis::Vertical);
        assert_eq!(ScrollAxis::for_viewport(1920.0), ScrollAxis::Vertical);
    }

    #[test]
    fn test_next_on_mobile() {
        let offset = ScrollOffset::for_trigger(Direction::Next, 600.0);
        assert_eq!(offset, ScrollOffset { left: 220.0, top: 0.0 });
    }

    #[test]
    fn test_previous_on_desktop() {
        let offset = ScrollOffset::for_trigger(Direction::Previous, 1440.0);
        assert_eq!(offset, ScrollOffset { left: 0.0, top: -220.0 });
    }

    #[test]
    fn test_scroll_script() {
        let script = ScrollOffset::for_trigger(Direction::Next, 600.0).scroll_script("projectList");
        assert_eq!(
            script,
            "document.getElementById('projectList')?.scrollBy({ left: 220, top: 0, behavior: 'smooth' });"
        );
    }
}
