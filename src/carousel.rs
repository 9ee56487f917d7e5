//! Index bookkeeping for the read-more modal and the landing page carousels.

use crate::config;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub text: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nav {
    Next,
    Prev,
    Jump(usize),
}

pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

/// Maps a horizontal touch movement to a navigation request.
/// Swiping left (finger moving towards smaller x) advances.
pub fn swipe_direction(start_x: i32, end_x: i32) -> Option<Nav> {
    let delta = end_x - start_x;
    if delta <= -config::SWIPE_THRESHOLD_PX {
        Some(Nav::Next)
    } else if delta >= config::SWIPE_THRESHOLD_PX {
        Some(Nav::Prev)
    } else {
        None
    }
}

pub fn key_direction(key: &str) -> Option<Nav> {
    match key {
        "ArrowLeft" => Some(Nav::Prev),
        "ArrowRight" => Some(Nav::Next),
        _ => None,
    }
}

/// Carousel position with a transition lock. While a transition is running
/// every navigation request is refused, so animations never overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    transitioning: bool,
}

impl Carousel {
    pub fn new(len: usize, start: usize) -> Self {
        Self {
            index: if len == 0 { 0 } else { start.min(len - 1) },
            len,
            transitioning: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Applies a navigation request. Returns `None` when nothing changes:
    /// a transition is in flight, the list is empty, or the target is the
    /// current slide.
    pub fn navigate(&self, nav: Nav) -> Option<Self> {
        if self.transitioning || self.len == 0 {
            return None;
        }
        let target = match nav {
            Nav::Next => wrap_next(self.index, self.len),
            Nav::Prev => wrap_prev(self.index, self.len),
            Nav::Jump(i) if i < self.len => i,
            Nav::Jump(_) => return None,
        };
        if target == self.index {
            return None;
        }
        Some(Self {
            index: target,
            len: self.len,
            transitioning: true,
        })
    }

    pub fn settle(&self) -> Self {
        Self {
            transitioning: false,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap_around() {
        assert_eq!(wrap_next(3, 4), 0);
        assert_eq!(wrap_prev(0, 4), 3);
        assert_eq!(wrap_next(1, 4), 2);
        assert_eq!(wrap_prev(2, 4), 1);
    }

    #[test]
    fn index_stays_in_range_over_long_walks() {
        let mut c = Carousel::new(4, 0);
        let moves = [Nav::Prev, Nav::Prev, Nav::Next, Nav::Jump(3), Nav::Next, Nav::Prev, Nav::Jump(9)];
        for _ in 0..10 {
            for nav in moves {
                if let Some(next) = c.navigate(nav) {
                    c = next.settle();
                }
                assert!(c.index() < c.len());
            }
        }
    }

    #[test]
    fn navigation_locked_during_transition() {
        let c = Carousel::new(4, 3);
        let moved = c.navigate(Nav::Next).unwrap();
        assert_eq!(moved.index(), 0);
        assert!(moved.is_transitioning());
        assert_eq!(moved.navigate(Nav::Next), None);
        assert_eq!(moved.settle().navigate(Nav::Prev).unwrap().index(), 3);
    }

    #[test]
    fn start_index_is_clamped() {
        assert_eq!(Carousel::new(4, 10).index(), 3);
        assert_eq!(Carousel::new(0, 2).navigate(Nav::Next), None);
    }

    #[test]
    fn jumping_to_current_slide_is_a_no_op() {
        let c = Carousel::new(3, 1);
        assert_eq!(c.navigate(Nav::Jump(1)), None);
    }

    #[test]
    fn swipes_need_a_minimum_distance() {
        assert_eq!(swipe_direction(200, 100), Some(Nav::Next));
        assert_eq!(swipe_direction(100, 200), Some(Nav::Prev));
        assert_eq!(swipe_direction(100, 130), None);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(key_direction("ArrowLeft"), Some(Nav::Prev));
        assert_eq!(key_direction("ArrowRight"), Some(Nav::Next));
        assert_eq!(key_direction("Enter"), None);
    }
}
