//! The touch gesture state machine.
//!
//! ```text
//!            press                 release (commit)
//!   Idle ───────────► Active ─────────────────────► Idle
//!                      │  ▲
//!                      └──┘ move (ignored below the jitter tolerance)
//! ```
//!
//! Only one gesture is ever in progress. Nothing here touches the drawing
//! surface: releasing returns the finished [`Stroke`] and the caller decides
//! where it goes.
use egui::Pos2;

use crate::stroke::Stroke;
use crate::tools::{Paint, ShapeKind};

/// Data of a gesture between press and release
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveGesture {
    pub kind: ShapeKind,
    pub start: Pos2,
    /// Live end point of bounded shapes
    pub end: Pos2,
    /// Last sample that passed the jitter filter
    pub last_sample: Pos2,
    /// Accumulated brush path, starting at `start`
    pub path: Vec<Pos2>,
    pub paint: Paint,
    pub corner_radius: f32,
    /// Set once a move sample has been accepted
    pub moved: bool,
}

impl ActiveGesture {
    /// The stroke this gesture would commit right now
    pub fn to_stroke(&self) -> Stroke {
        Stroke::from_gesture(
            self.kind,
            self.start,
            self.end,
            &self.path,
            self.corner_radius,
            self.paint,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Active(ActiveGesture),
}

impl GestureState {
    /// Start a gesture at `pos`. A gesture already in progress is dropped
    /// without being committed.
    pub fn press(&mut self, pos: Pos2, kind: ShapeKind, paint: Paint, corner_radius: f32) {
        if self.is_active() {
            log::debug!("Press while a gesture is active, discarding the previous one");
        }
        *self = Self::Active(ActiveGesture {
            kind,
            start: pos,
            end: pos,
            last_sample: pos,
            path: vec![pos],
            paint,
            corner_radius,
            moved: false,
        });
    }

    /// Feed a move sample. Returns true if the sample was accepted, i.e. it
    /// moved at least `tolerance` pixels along either axis since the last
    /// accepted one.
    pub fn drag(&mut self, pos: Pos2, tolerance: f32) -> bool {
        let Self::Active(gesture) = self else {
            return false;
        };
        let dx = (pos.x - gesture.last_sample.x).abs();
        let dy = (pos.y - gesture.last_sample.y).abs();
        if dx < tolerance && dy < tolerance {
            return false;
        }

        if gesture.kind.is_bounded() {
            gesture.end = pos;
        } else {
            gesture.path.push(pos);
        }
        gesture.last_sample = pos;
        gesture.moved = true;
        true
    }

    /// Finish the gesture. The release position goes through the same jitter
    /// filter as a move. Returns the stroke to commit, or `None` when idle.
    pub fn release(&mut self, pos: Pos2, tolerance: f32) -> Option<Stroke> {
        self.drag(pos, tolerance);
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Active(gesture) => Some(gesture.to_stroke()),
        }
    }

    /// Drop the gesture without committing anything
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn active(&self) -> Option<&ActiveGesture> {
        match self {
            Self::Active(gesture) => Some(gesture),
            Self::Idle => None,
        }
    }

    /// The in-progress stroke for live preview
    pub fn preview(&self) -> Option<Stroke> {
        self.active().map(ActiveGesture::to_stroke)
    }

    /// Where the touch cursor ring is drawn: the last accepted sample, once
    /// the gesture has moved
    pub fn cursor(&self) -> Option<Pos2> {
        self.active()
            .filter(|gesture| gesture.moved)
            .map(|gesture| gesture.last_sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::StrokeGeometry;
    use egui::{Color32, pos2};

    const TOLERANCE: f32 = 4.0;

    fn paint() -> Paint {
        Paint {
            width: 5.0,
            color: Color32::BLACK,
            erase: false,
        }
    }

    fn pressed(kind: ShapeKind) -> GestureState {
        let mut state = GestureState::default();
        state.press(pos2(10.0, 10.0), kind, paint(), 20.0);
        state
    }

    #[test]
    fn test_idle_ignores_move_and_release() {
        let mut state = GestureState::Idle;
        assert!(!state.drag(pos2(50.0, 50.0), TOLERANCE));
        assert!(state.release(pos2(50.0, 50.0), TOLERANCE).is_none());
        assert_eq!(state, GestureState::Idle);
    }

    #[test]
    fn test_jitter_below_tolerance_is_ignored() {
        let mut state = pressed(ShapeKind::Brush);
        assert!(!state.drag(pos2(13.0, 12.0), TOLERANCE));
        assert!(!state.drag(pos2(7.0, 13.9), TOLERANCE));
        assert_eq!(state.active().unwrap().path, vec![pos2(10.0, 10.0)]);
        assert!(state.cursor().is_none());
    }

    #[test]
    fn test_tolerance_is_per_axis_and_inclusive() {
        let mut state = pressed(ShapeKind::Brush);
        assert!(state.drag(pos2(14.0, 10.0), TOLERANCE));
        assert!(state.drag(pos2(14.0, 6.0), TOLERANCE));
        assert_eq!(
            state.active().unwrap().path,
            vec![pos2(10.0, 10.0), pos2(14.0, 10.0), pos2(14.0, 6.0)]
        );
        assert_eq!(state.cursor(), Some(pos2(14.0, 6.0)));
    }

    #[test]
    fn test_tolerance_measured_from_last_accepted_sample() {
        let mut state = pressed(ShapeKind::Brush);
        // Creeping a pixel at a time never accumulates into an accepted sample
        for step in 1..=3 {
            let x = 10.0 + step as f32;
            assert!(!state.drag(pos2(x, 10.0), TOLERANCE));
        }
        assert!(state.drag(pos2(14.5, 10.0), TOLERANCE));
    }

    #[test]
    fn test_bounded_shape_tracks_end_point_only() {
        let mut state = pressed(ShapeKind::Rectangle);
        state.drag(pos2(40.0, 40.0), TOLERANCE);
        state.drag(pos2(80.0, 60.0), TOLERANCE);
        let gesture = state.active().unwrap();
        assert_eq!(gesture.end, pos2(80.0, 60.0));
        assert_eq!(gesture.path, vec![pos2(10.0, 10.0)]);
    }

    #[test]
    fn test_release_returns_to_idle_with_stroke() {
        let mut state = pressed(ShapeKind::Line);
        state.drag(pos2(50.0, 20.0), TOLERANCE);
        let stroke = state.release(pos2(51.0, 21.0), TOLERANCE).unwrap();
        assert_eq!(
            stroke.geometry(),
            &StrokeGeometry::Line {
                start: pos2(10.0, 10.0),
                end: pos2(50.0, 20.0)
            }
        );
        assert!(!state.is_active());
    }

    #[test]
    fn test_release_position_is_filtered_like_a_move() {
        let mut state = pressed(ShapeKind::Brush);
        let stroke = state.release(pos2(30.0, 10.0), TOLERANCE).unwrap();
        assert_eq!(
            stroke.geometry(),
            &StrokeGeometry::Path(vec![pos2(10.0, 10.0), pos2(30.0, 10.0)])
        );
    }

    #[test]
    fn test_second_press_discards_first_gesture() {
        let mut state = pressed(ShapeKind::Brush);
        state.drag(pos2(40.0, 40.0), TOLERANCE);
        state.press(pos2(70.0, 70.0), ShapeKind::Brush, paint(), 20.0);
        assert_eq!(state.active().unwrap().path, vec![pos2(70.0, 70.0)]);
    }

    #[test]
    fn test_cancel_commits_nothing() {
        let mut state = pressed(ShapeKind::Ellipse);
        state.drag(pos2(40.0, 40.0), TOLERANCE);
        state.cancel();
        assert!(state.release(pos2(40.0, 40.0), TOLERANCE).is_none());
    }
}
