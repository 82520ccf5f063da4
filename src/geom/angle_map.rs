use serde::{Deserialize, Serialize};

use crate::geom::{Angle, AngleSegment};

/// Tracks which directions inside a fixed window are still unobstructed.
///
/// The viable segments are pairwise disjoint, contained in the window and
/// ordered by `top`, highest first.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AngleMap {
    window_min: Angle,
    window_max: Angle,
    viable: Vec<AngleSegment>,
}

impl AngleMap {
    /// Creates a map over `[window_min, window_max]` where only the initial
    /// range, clipped to the window, starts out viable.
    pub fn new(window_min: Angle, window_max: Angle, initial_min: Angle, initial_max: Angle) -> Self {
        let window = AngleSegment::new(window_max, window_min);
        let initial = AngleSegment::new(initial_max, initial_min);

        let top = initial.top().min(window.top());
        let bottom = initial.bottom().max(window.bottom());

        let mut viable = Vec::with_capacity(8);
        if top > bottom {
            viable.push(AngleSegment::new(top, bottom));
        }

        Self {
            window_min: window.bottom(),
            window_max: window.top(),
            viable,
        }
    }

    pub fn from_window(window_min: Angle, window_max: Angle) -> Self {
        Self::new(window_min, window_max, window_min, window_max)
    }

    pub fn window_min(&self) -> Angle {
        self.window_min
    }

    pub fn window_max(&self) -> Angle {
        self.window_max
    }

    pub fn viable_angle_segments(&self) -> &[AngleSegment] {
        &self.viable
    }

    /// Removes the range of `non_viable` from every viable segment it overlaps
    pub fn add_non_viable_angle_segment(&mut self, non_viable: AngleSegment) {
        if non_viable.is_degenerate() {
            return;
        }

        let blocked_top = non_viable.top();
        let blocked_bottom = non_viable.bottom();

        let mut remaining = Vec::with_capacity(self.viable.len() + 1);
        for segment in self.viable.iter() {
            if !segment.overlaps(&non_viable) {
                remaining.push(*segment);
                continue;
            }

            let covers_top = blocked_top >= segment.top();
            let covers_bottom = blocked_bottom <= segment.bottom();
            match (covers_top, covers_bottom) {
                // Fully blocked
                (true, true) => {}
                (true, false) => {
                    let mut shrunk = *segment;
                    shrunk.set_top(blocked_bottom);
                    remaining.push(shrunk);
                }
                (false, true) => {
                    let mut shrunk = *segment;
                    shrunk.set_bottom(blocked_top);
                    remaining.push(shrunk);
                }
                // Blocked range is strictly inside, keep both sides
                (false, false) => {
                    remaining.push(AngleSegment::new(segment.top(), blocked_top));
                    remaining.push(AngleSegment::new(blocked_bottom, segment.bottom()));
                }
            }
        }

        self.viable = remaining;
    }

    /// Returns the widest viable segment, or an empty segment if everything
    /// is blocked. On ties the highest segment wins.
    pub fn biggest_viable_angle_segment(&self) -> AngleSegment {
        let mut biggest = AngleSegment::empty();
        for segment in self.viable.iter() {
            if segment.delta() > biggest.delta() {
                biggest = *segment;
            }
        }
        biggest
    }
}
