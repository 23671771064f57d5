pub const COMMIT_THRESHOLD: f64 = 100.0;
pub const HINT_THRESHOLD: f64 = 50.0;
pub const ROTATION_FACTOR: f64 = 0.1;
pub const FADE_DISTANCE: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Smash,
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Commit(SwipeDirection),
    SnapBack,
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
struct Drag {
    pointer_id: i32,
    origin_x: f64,
    origin_y: f64,
    offset_x: f64,
    offset_y: f64,
}

/// Tracks a single pointer drag and decides, on release, whether it
/// committed a swipe. Holds no rendering state; the view derives the card
/// transform from `offset`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwipeTracker {
    drag: Option<Drag>,
}

impl SwipeTracker {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn offset(&self) -> (f64, f64) {
        self.drag
            .as_ref()
            .map(|drag| (drag.offset_x, drag.offset_y))
            .unwrap_or((0.0, 0.0))
    }

    pub fn pointer_down(&mut self, pointer_id: i32, x: f64, y: f64) -> bool {
        if self.drag.is_some() {
            return false;
        }
        self.drag = Some(Drag {
            pointer_id,
            origin_x: x,
            origin_y: y,
            offset_x: 0.0,
            offset_y: 0.0,
        });
        true
    }

    pub fn pointer_move(&mut self, pointer_id: i32, x: f64, y: f64) -> bool {
        match self.drag.as_mut() {
            Some(drag) if drag.pointer_id == pointer_id => {
                drag.offset_x = x - drag.origin_x;
                drag.offset_y = y - drag.origin_y;
                true
            }
            _ => false,
        }
    }

    /// Release decision for pointer-up, pointer-cancel, and the pointer
    /// leaving the card mid-drag; all three use the last known offset.
    pub fn pointer_up(&mut self, pointer_id: i32) -> Release {
        match self.drag.as_ref() {
            Some(drag) if drag.pointer_id == pointer_id => {
                let offset_x = drag.offset_x;
                self.drag = None;
                if offset_x.abs() > COMMIT_THRESHOLD {
                    if offset_x > 0.0 {
                        Release::Commit(SwipeDirection::Smash)
                    } else {
                        Release::Commit(SwipeDirection::Pass)
                    }
                } else {
                    Release::SnapBack
                }
            }
            _ => Release::Ignored,
        }
    }
}

pub fn rotation_degrees(offset_x: f64) -> f64 {
    offset_x * ROTATION_FACTOR
}

pub fn card_opacity(offset_x: f64) -> f64 {
    1.0 - offset_x.abs() / FADE_DISTANCE
}

pub fn swipe_hint(offset_x: f64) -> Option<SwipeDirection> {
    if offset_x > HINT_THRESHOLD {
        Some(SwipeDirection::Smash)
    } else if offset_x < -HINT_THRESHOLD {
        Some(SwipeDirection::Pass)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragged_to(offset_x: f64) -> SwipeTracker {
        let mut tracker = SwipeTracker::default();
        assert!(tracker.pointer_down(1, 200.0, 300.0));
        assert!(tracker.pointer_move(1, 200.0 + offset_x, 300.0));
        tracker
    }

    #[test]
    fn wide_right_drag_commits_smash() {
        let mut tracker = dragged_to(150.0);
        assert_eq!(tracker.pointer_up(1), Release::Commit(SwipeDirection::Smash));
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.offset(), (0.0, 0.0));
    }

    #[test]
    fn wide_left_drag_commits_pass() {
        let mut tracker = dragged_to(-150.0);
        assert_eq!(tracker.pointer_up(1), Release::Commit(SwipeDirection::Pass));
    }

    #[test]
    fn short_drag_snaps_back_either_sign() {
        for offset in [99.0, -99.0] {
            let mut tracker = dragged_to(offset);
            assert_eq!(tracker.pointer_up(1), Release::SnapBack);
            assert_eq!(tracker.offset(), (0.0, 0.0));
        }
    }

    #[test]
    fn threshold_itself_snaps_back() {
        let mut tracker = dragged_to(COMMIT_THRESHOLD);
        assert_eq!(tracker.pointer_up(1), Release::SnapBack);
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert!(!tracker.pointer_move(1, 250.0, 300.0));
        assert_eq!(tracker.offset(), (0.0, 0.0));
    }

    #[test]
    fn foreign_pointer_is_ignored() {
        let mut tracker = dragged_to(150.0);
        assert!(!tracker.pointer_move(2, 900.0, 300.0));
        assert_eq!(tracker.pointer_up(2), Release::Ignored);
        assert!(tracker.is_dragging());
        assert_eq!(tracker.pointer_up(1), Release::Commit(SwipeDirection::Smash));
    }

    #[test]
    fn second_pointer_down_does_not_restart_drag() {
        let mut tracker = dragged_to(80.0);
        assert!(!tracker.pointer_down(2, 0.0, 0.0));
        assert_eq!(tracker.offset(), (80.0, 0.0));
    }

    #[test]
    fn tracks_both_axes() {
        let mut tracker = SwipeTracker::default();
        tracker.pointer_down(1, 100.0, 100.0);
        tracker.pointer_move(1, 130.0, 60.0);
        assert_eq!(tracker.offset(), (30.0, -40.0));
    }

    #[test]
    fn forced_release_uses_last_offset() {
        // Pointer leaving the surface routes through pointer_up unchanged.
        let mut tracker = dragged_to(120.0);
        assert_eq!(tracker.pointer_up(1), Release::Commit(SwipeDirection::Smash));
    }

    #[test]
    fn presentation_values_follow_offset() {
        assert_eq!(rotation_degrees(100.0), 10.0);
        assert_eq!(rotation_degrees(-50.0), -5.0);
        assert_eq!(card_opacity(0.0), 1.0);
        assert_eq!(card_opacity(150.0), 0.5);
        assert_eq!(card_opacity(-150.0), 0.5);
    }

    #[test]
    fn hint_thresholds_are_strict() {
        assert_eq!(swipe_hint(50.0), None);
        assert_eq!(swipe_hint(51.0), Some(SwipeDirection::Smash));
        assert_eq!(swipe_hint(-50.0), None);
        assert_eq!(swipe_hint(-51.0), Some(SwipeDirection::Pass));
    }
}
