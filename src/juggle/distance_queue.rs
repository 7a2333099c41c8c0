use std::cmp::Ordering;

// Candidate pairing of a tracked ball with an observed circle, ordered for a min-heap:
// the closest pair pops first, ties go to the lower ball index and then the lower circle index.
#[derive(Debug, Clone, Copy)]
pub struct DistanceCandidate {
    pub distance: f32,
    pub ball_idx: usize,
    pub circle_idx: usize,
}

impl PartialEq for DistanceCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DistanceCandidate {}

impl PartialOrd for DistanceCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DistanceCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // self.distance < other.distance
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.ball_idx.cmp(&self.ball_idx))
            .then_with(|| other.circle_idx.cmp(&self.circle_idx))
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceCandidate;
    use std::collections::BinaryHeap;

    fn candidate(distance: f32, ball_idx: usize, circle_idx: usize) -> DistanceCandidate {
        DistanceCandidate {
            distance,
            ball_idx,
            circle_idx,
        }
    }

    #[test]
    fn test_min_heap() {
        let mut priority_queue: BinaryHeap<DistanceCandidate> = BinaryHeap::new();
        priority_queue.push(candidate(4.0, 0, 0));
        priority_queue.push(candidate(2.0, 1, 0));
        priority_queue.push(candidate(3.0, 2, 0));
        priority_queue.push(candidate(1.0, 3, 0));

        assert_eq!(priority_queue.pop().unwrap().distance, 1.0);
        assert_eq!(priority_queue.pop().unwrap().distance, 2.0);
        assert_eq!(priority_queue.pop().unwrap().distance, 3.0);
        assert_eq!(priority_queue.pop().unwrap().distance, 4.0);
    }

    #[test]
    fn test_tie_break() {
        let mut priority_queue: BinaryHeap<DistanceCandidate> = BinaryHeap::new();
        priority_queue.push(candidate(2.0, 1, 1));
        priority_queue.push(candidate(2.0, 0, 1));
        priority_queue.push(candidate(2.0, 1, 0));
        priority_queue.push(candidate(2.0, 0, 0));

        let order: Vec<(usize, usize)> = std::iter::from_fn(|| priority_queue.pop())
            .map(|c| (c.ball_idx, c.circle_idx))
            .collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
