//! Vertical lanes for multi-day activities.
//!
//! Lanes are handed out with a plain counter in the order multi-day
//! activities are first placed. A lane is never given back, even after the
//! activity holding it has ended, so two activities that never overlap can
//! still end up on different rows. Packing the bars tighter would need
//! interval colouring over the whole month before placement.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct LaneAllocator {
    lanes: HashMap<i64, usize>,
    next: usize,
    lane_height: f32,
}

impl LaneAllocator {
    pub fn new(lane_height: f32) -> Self {
        Self {
            lanes: HashMap::new(),
            next: 0,
            lane_height,
        }
    }

    /// Lane of `activity_id`, assigning the next free index on first sight.
    pub fn lane_for(&mut self, activity_id: i64) -> usize {
        if let Some(&lane) = self.lanes.get(&activity_id) {
            return lane;
        }

        let lane = self.next;
        self.next += 1;
        self.lanes.insert(activity_id, lane);
        log::debug!("Activity {} assigned to lane {}", activity_id, lane);
        lane
    }

    pub fn get(&self, activity_id: i64) -> Option<usize> {
        self.lanes.get(&activity_id).copied()
    }

    /// Vertical offset of a lane.
    pub fn offset(&self, lane: usize) -> f32 {
        lane as f32 * self.lane_height
    }

    /// Number of lanes handed out so far.
    pub fn count(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lanes_follow_first_sight_order() {
        let mut lanes = LaneAllocator::new(20.0);
        assert_eq!(lanes.lane_for(42), 0);
        assert_eq!(lanes.lane_for(7), 1);
        assert_eq!(lanes.lane_for(42), 0);
        assert_eq!(lanes.lane_for(99), 2);
        assert_eq!(lanes.count(), 3);
    }

    #[test]
    fn test_offset() {
        let lanes = LaneAllocator::new(24.0);
        assert_eq!(lanes.offset(0), 0.0);
        assert_eq!(lanes.offset(3), 72.0);
    }

    #[test]
    fn test_unknown_activity_has_no_lane() {
        let lanes = LaneAllocator::new(24.0);
        assert_eq!(lanes.get(1), None);
        assert_eq!(lanes.count(), 0);
    }
}
