//! Pointer drag state machine for the track.
//!
//! `Idle -> Dragging -> Settling -> Idle`. While dragging, the track follows
//! the pointer with no transition. On release the offset snaps to the
//! nearest item boundary and the track animates there; the settle ends when
//! the transition does.

use crate::TrackMetrics;

/// How the live offset behaves while the pointer is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// Follow the pointer past either end; bounds apply on release.
    #[default]
    RubberBand,
    /// Keep the live offset inside the track bounds.
    Clamped,
}

/// Current phase of the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging {
        /// Pointer X at pointer-down.
        start_x: f64,
        /// Track offset at pointer-down.
        origin: f64,
        /// Offset currently applied.
        offset: f64,
    },
    Settling {
        target: f64,
    },
}

/// Whether a pointer-down starts a drag: only the main button (`0`) of the
/// primary pointer does.
pub fn starts_drag(is_primary: bool, button: i16) -> bool {
    is_primary && button == 0
}

/// Drag state for one carousel instance.
#[derive(Debug, Clone)]
pub struct DragTracker {
    phase: DragPhase,
    mode: DragMode,
    click_slop: f64,
    bounds: Option<TrackMetrics>,
    travel: f64,
    suppress_click: bool,
}

impl DragTracker {
    pub fn new(mode: DragMode, click_slop: f64) -> Self {
        Self {
            phase: DragPhase::Idle,
            mode,
            click_slop,
            bounds: None,
            travel: 0.0,
            suppress_click: false,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Pointer went down on the track at `pointer_x` while the track sat at
    /// `current_offset`. Interrupts a running settle.
    pub fn begin(&mut self, pointer_x: f64, current_offset: f64, metrics: TrackMetrics) {
        self.phase = DragPhase::Dragging {
            start_x: pointer_x,
            origin: current_offset,
            offset: current_offset,
        };
        self.bounds = Some(metrics);
        self.travel = 0.0;
        self.suppress_click = false;
    }

    /// Pointer moved to `pointer_x`. Returns the offset to apply, or `None`
    /// when no drag is in progress.
    pub fn move_to(&mut self, pointer_x: f64) -> Option<f64> {
        let DragPhase::Dragging {
            start_x,
            origin,
            offset,
        } = &mut self.phase
        else {
            return None;
        };

        let delta = pointer_x - *start_x;
        self.travel = self.travel.max(delta.abs());

        let raw = *origin + delta;
        *offset = match (self.mode, self.bounds) {
            (DragMode::Clamped, Some(bounds)) => bounds.clamp(raw),
            _ => raw,
        };
        Some(*offset)
    }

    /// Pointer released or cancelled. Returns the snapped offset the track
    /// should animate to, or `None` when no drag is in progress.
    pub fn release(&mut self, metrics: TrackMetrics) -> Option<f64> {
        let DragPhase::Dragging { offset, .. } = self.phase else {
            return None;
        };

        let target = metrics.snap(offset);
        self.phase = DragPhase::Settling { target };
        self.bounds = None;
        self.suppress_click = self.travel > self.click_slop;
        Some(target)
    }

    /// The settle transition ended.
    pub fn finish_settle(&mut self) {
        if matches!(self.phase, DragPhase::Settling { .. }) {
            self.phase = DragPhase::Idle;
        }
    }

    /// Whether the click that follows a release should be ignored because
    /// the gesture was a drag. Clears the flag.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DragMode::default(), 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> TrackMetrics {
        TrackMetrics::new(100.0, 650.0, 1100.0)
    }

    #[test]
    fn test_full_cycle() {
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.phase(), DragPhase::Idle);

        tracker.begin(500.0, 0.0, metrics());
        assert!(tracker.is_dragging());

        assert_eq!(tracker.move_to(300.0), Some(-200.0));
        assert_eq!(tracker.move_to(70.0), Some(-430.0));

        assert_eq!(tracker.release(metrics()), Some(-400.0));
        assert_eq!(tracker.phase(), DragPhase::Settling { target: -400.0 });

        tracker.finish_settle();
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_drag_starts_from_current_offset() {
        let mut tracker = DragTracker::default();
        tracker.begin(200.0, -300.0, metrics());

        assert_eq!(tracker.move_to(260.0), Some(-240.0));
        assert_eq!(tracker.release(metrics()), Some(-200.0));
    }

    #[test]
    fn test_rubber_band_overshoots_until_release() {
        let mut tracker = DragTracker::new(DragMode::RubberBand, 5.0);
        tracker.begin(100.0, 0.0, metrics());

        assert_eq!(tracker.move_to(250.0), Some(150.0));
        assert_eq!(tracker.release(metrics()), Some(0.0));
    }

    #[test]
    fn test_clamped_mode_keeps_bounds() {
        let mut tracker = DragTracker::new(DragMode::Clamped, 5.0);
        tracker.begin(100.0, 0.0, metrics());

        assert_eq!(tracker.move_to(250.0), Some(0.0));
        assert_eq!(tracker.move_to(-900.0), Some(-450.0));
        assert_eq!(tracker.release(metrics()), Some(-450.0));
    }

    #[test]
    fn test_events_ignored_when_idle() {
        let mut tracker = DragTracker::default();

        assert_eq!(tracker.move_to(10.0), None);
        assert_eq!(tracker.release(metrics()), None);
        tracker.finish_settle();
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_pointer_down_interrupts_settle() {
        let mut tracker = DragTracker::default();
        tracker.begin(0.0, 0.0, metrics());
        tracker.move_to(-120.0);
        tracker.release(metrics());

        tracker.begin(50.0, -80.0, metrics());
        assert!(tracker.is_dragging());

        // A late transitionend from the interrupted settle must not end the drag.
        tracker.finish_settle();
        assert!(tracker.is_dragging());
    }

    #[test]
    fn test_click_suppressed_after_drag() {
        let mut tracker = DragTracker::new(DragMode::RubberBand, 5.0);
        tracker.begin(100.0, 0.0, metrics());
        tracker.move_to(40.0);
        tracker.move_to(98.0);
        tracker.release(metrics());

        assert!(tracker.take_click_suppression());
        assert!(!tracker.take_click_suppression());
    }

    #[test]
    fn test_click_allowed_after_tap() {
        let mut tracker = DragTracker::new(DragMode::RubberBand, 5.0);
        tracker.begin(100.0, 0.0, metrics());
        tracker.move_to(103.0);
        tracker.release(metrics());

        assert!(!tracker.take_click_suppression());
    }

    #[test]
    fn test_only_main_primary_button_drags() {
        assert!(starts_drag(true, 0));
        assert!(!starts_drag(true, 2));
        assert!(!starts_drag(true, 1));
        assert!(!starts_drag(false, 0));
    }

    #[test]
    fn test_stale_suppression_cleared_by_next_press() {
        // A drag released away from any clickable element leaves the flag set.
        let mut tracker = DragTracker::new(DragMode::RubberBand, 5.0);
        tracker.begin(100.0, 0.0, metrics());
        tracker.move_to(20.0);
        tracker.release(metrics());

        // The next tap, e.g. on a heart, must go through.
        tracker.begin(30.0, -100.0, metrics());
        tracker.release(metrics());
        assert!(!tracker.take_click_suppression());
    }
}
