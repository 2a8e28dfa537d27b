#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// Visible only once the offset is strictly past the threshold.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Two state machine driven by scroll signals.
///
/// Starts `Hidden` and only changes on `on_scroll`.
#[derive(Clone, Debug)]
pub struct VisibilityTracker {
    threshold: f64,
    state: Visibility,
}

impl VisibilityTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: Visibility::Hidden,
        }
    }

    /// Starts from a known state, used when the threshold changes while mounted.
    pub fn with_state(threshold: f64, state: Visibility) -> Self {
        Self { threshold, state }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    /// Returns the new state if the signal caused a transition.
    pub fn on_scroll(&mut self, offset: f64) -> Option<Visibility> {
        let next = Visibility::for_offset(offset, self.threshold);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_offset_boundary() {
        assert_eq!(Visibility::for_offset(300.0, 300.0), Visibility::Hidden);
        assert_eq!(Visibility::for_offset(300.5, 300.0), Visibility::Visible);
        assert_eq!(Visibility::for_offset(0.0, 300.0), Visibility::Hidden);
    }

    #[test]
    fn test_for_offset_negative_threshold_is_always_visible() {
        assert_eq!(Visibility::for_offset(0.0, -1.0), Visibility::Visible);
    }

    #[test]
    fn test_for_offset_matches_comparison() {
        let thresholds = [-50.0, 0.0, 1.0, 300.0, 1e6];
        let offsets = [0.0, 0.5, 1.0, 299.0, 300.0, 301.0, 2e6];
        for t in thresholds {
            for o in offsets {
                assert_eq!(
                    Visibility::for_offset(o, t).is_visible(),
                    o > t,
                    "offset {o} threshold {t}"
                );
            }
        }
    }

    #[test]
    fn test_tracker_starts_hidden() {
        let tracker = VisibilityTracker::new(300.0);
        assert_eq!(tracker.state(), Visibility::Hidden);
        assert_eq!(tracker.threshold(), 300.0);
    }

    #[test]
    fn test_tracker_scenario() {
        let mut tracker = VisibilityTracker::new(300.0);
        let states: Vec<Visibility> = [0.0, 150.0, 301.0, 300.0, 0.0]
            .into_iter()
            .map(|offset| {
                tracker.on_scroll(offset);
                tracker.state()
            })
            .collect();

        assert_eq!(
            states,
            vec![
                Visibility::Hidden,
                Visibility::Hidden,
                Visibility::Visible,
                Visibility::Hidden,
                Visibility::Hidden,
            ]
        );
    }

    #[test]
    fn test_tracker_reports_only_transitions() {
        let mut tracker = VisibilityTracker::new(100.0);

        assert_eq!(tracker.on_scroll(50.0), None);
        assert_eq!(tracker.on_scroll(150.0), Some(Visibility::Visible));
        assert_eq!(tracker.on_scroll(200.0), None);
        assert_eq!(tracker.on_scroll(100.0), Some(Visibility::Hidden));
    }

    #[test]
    fn test_tracker_with_state() {
        let mut tracker = VisibilityTracker::with_state(500.0, Visibility::Visible);
        assert_eq!(tracker.on_scroll(400.0), Some(Visibility::Hidden));
    }
}
