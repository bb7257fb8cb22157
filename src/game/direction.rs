/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Holds the next committed direction change.
///
/// Input mappers write proposals here between ticks; the engine commits
/// exactly one per tick. A proposal that is the exact reverse of the last
/// *applied* direction is dropped, so rapid inputs between two ticks only
/// ever retain the last valid one. This guard is the single source of truth
/// for rejecting reversals; the mappers carry no validity logic of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionQueue {
    applied: Direction,
    pending: Direction,
}

impl DirectionQueue {
    pub fn new(initial: Direction) -> Self {
        Self {
            applied: initial,
            pending: initial,
        }
    }

    /// Store a proposal unless it reverses the applied direction.
    pub fn propose(&mut self, direction: Direction) {
        if !self.applied.is_opposite(direction) {
            self.pending = direction;
        }
    }

    /// Promote the pending direction to applied and return it.
    ///
    /// Called exactly once per tick, before movement is computed.
    pub fn commit(&mut self) -> Direction {
        self.applied = self.pending;
        self.applied
    }

    /// The direction used to compute the most recent head movement.
    pub fn applied(&self) -> Direction {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut queue = DirectionQueue::new(Direction::Right);

        queue.propose(Direction::Left);
        assert_eq!(queue.commit(), Direction::Right);
    }

    #[test]
    fn test_valid_proposal_is_committed() {
        let mut queue = DirectionQueue::new(Direction::Right);

        queue.propose(Direction::Up);
        assert_eq!(queue.commit(), Direction::Up);
        assert_eq!(queue.applied(), Direction::Up);
    }

    #[test]
    fn test_check_is_against_applied_not_pending() {
        let mut queue = DirectionQueue::new(Direction::Right);

        // Two rapid inputs between ticks: Up is valid, then Down is also
        // accepted because the applied direction is still Right.
        queue.propose(Direction::Up);
        queue.propose(Direction::Down);
        assert_eq!(queue.commit(), Direction::Down);
    }

    #[test]
    fn test_rejected_proposal_keeps_last_valid() {
        let mut queue = DirectionQueue::new(Direction::Right);

        queue.propose(Direction::Up);
        queue.propose(Direction::Left); // reverses applied Right, dropped
        assert_eq!(queue.commit(), Direction::Up);
    }

    #[test]
    fn test_reversal_guard_follows_commits() {
        let mut queue = DirectionQueue::new(Direction::Right);

        queue.propose(Direction::Up);
        queue.commit();

        // Down now reverses the applied direction and must be dropped.
        queue.propose(Direction::Down);
        assert_eq!(queue.commit(), Direction::Up);

        // Left no longer reverses anything.
        queue.propose(Direction::Left);
        assert_eq!(queue.commit(), Direction::Left);
    }
}
