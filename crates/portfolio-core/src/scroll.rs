//! Scroll direction tracking and nav-bar mode detection.

/// Direction of the most recent strict change in scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub last_offset: f64,
    pub is_scrolling_down: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            last_offset: 0.0,
            is_scrolling_down: true,
        }
    }
}

impl ScrollState {
    /// Record a new offset sample. Returns the direction when the offset
    /// strictly changed; an equal sample leaves the direction as it was.
    pub fn observe(&mut self, offset: f64) -> Option<ScrollDirection> {
        let direction = if offset > self.last_offset {
            ScrollDirection::Down
        } else if offset < self.last_offset {
            ScrollDirection::Up
        } else {
            return None;
        };
        self.is_scrolling_down = direction == ScrollDirection::Down;
        self.last_offset = offset;
        Some(direction)
    }

    pub fn direction(&self) -> ScrollDirection {
        if self.is_scrolling_down {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        }
    }
}

/// Vertical extent of an element in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// True when the extent reaches into the band `[0, height]`.
    #[inline]
    pub fn overlaps_band(&self, height: f64) -> bool {
        self.top <= height && self.bottom >= 0.0
    }
}

/// Nav is dark iff any tracked section overlaps the nav band. Recomputed from
/// scratch on every call since layout can move without a scroll event.
pub fn nav_is_dark<I>(tracked: I, nav_height: f64) -> bool
where
    I: IntoIterator<Item = Bounds>,
{
    tracked.into_iter().any(|b| b.overlaps_band(nav_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_offset_keeps_direction() {
        let mut s = ScrollState::default();
        assert_eq!(s.observe(100.0), Some(ScrollDirection::Down));
        assert_eq!(s.observe(40.0), Some(ScrollDirection::Up));
        assert_eq!(s.observe(40.0), None);
        assert!(!s.is_scrolling_down);
    }

    #[test]
    fn band_edges_are_inclusive() {
        assert!(Bounds::new(80.0, 500.0).overlaps_band(80.0));
        assert!(!Bounds::new(81.0, 500.0).overlaps_band(80.0));
        assert!(Bounds::new(-400.0, 0.0).overlaps_band(80.0));
        assert!(!Bounds::new(-400.0, -0.5).overlaps_band(80.0));
    }
}
