//! Easing cursor trail.
//!
//! A decorative marker that chases the pointer: each frame it closes a
//! fixed fraction of the distance to the last reported position. The
//! follower owns its coordinates; it is hidden until the first pointer
//! event and inert when mouse support is unavailable or disabled.

/// Fraction of the remaining distance covered per frame
const FOLLOW_FACTOR: f64 = 0.35;

#[derive(Debug, Clone)]
pub struct CursorFollower {
    enabled: bool,
    pos: Option<(f64, f64)>,
    target: (f64, f64),
}

impl CursorFollower {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            pos: None,
            target: (0.0, 0.0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a pointer position. The first event snaps the follower to
    /// the pointer so it does not fly in from the origin.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        if !self.enabled {
            return;
        }
        self.target = (column as f64, row as f64);
        if self.pos.is_none() {
            self.pos = Some(self.target);
        }
    }

    /// Ease toward the target; call once per frame
    pub fn tick(&mut self) {
        let Some((x, y)) = self.pos else {
            return;
        };
        self.pos = Some((
            x + (self.target.0 - x) * FOLLOW_FACTOR,
            y + (self.target.1 - y) * FOLLOW_FACTOR,
        ));
    }

    /// Cell the trail marker occupies, if visible
    pub fn cell(&self) -> Option<(u16, u16)> {
        self.pos
            .map(|(x, y)| (x.round().max(0.0) as u16, y.round().max(0.0) as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_first_pointer_event() {
        let mut follower = CursorFollower::new(true);
        assert_eq!(follower.cell(), None);
        follower.tick();
        assert_eq!(follower.cell(), None);
    }

    #[test]
    fn test_first_event_snaps_to_pointer() {
        let mut follower = CursorFollower::new(true);
        follower.pointer_moved(40, 12);
        assert_eq!(follower.cell(), Some((40, 12)));
    }

    #[test]
    fn test_converges_toward_target() {
        let mut follower = CursorFollower::new(true);
        follower.pointer_moved(0, 0);
        follower.pointer_moved(100, 20);

        let mut last_distance = f64::MAX;
        for _ in 0..50 {
            follower.tick();
            let (x, y) = follower.cell().map(|(x, y)| (x as f64, y as f64)).unwrap();
            let distance = ((100.0 - x).powi(2) + (20.0 - y).powi(2)).sqrt();
            assert!(distance <= last_distance);
            last_distance = distance;
        }
        assert_eq!(follower.cell(), Some((100, 20)));
    }

    #[test]
    fn test_disabled_follower_is_inert() {
        let mut follower = CursorFollower::new(false);
        follower.pointer_moved(10, 10);
        follower.tick();
        assert_eq!(follower.cell(), None);
    }
}
