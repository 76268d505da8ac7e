//! Match score

use super::Side;
use crate::consts::WINNING_MARGIN;

/// Points for each side of the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award one point to `side`
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// True once either side has more than ten points
    pub fn has_won(&self) -> bool {
        self.left > WINNING_MARGIN || self.right > WINNING_MARGIN
    }

    /// Side that has won, if any
    pub fn winner(&self) -> Option<Side> {
        if self.left > WINNING_MARGIN {
            Some(Side::Left)
        } else if self.right > WINNING_MARGIN {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_one_side() {
        let mut score = Score::new();
        score.increment(Side::Right);
        assert_eq!(score, Score { left: 0, right: 1 });
        score.increment(Side::Left);
        assert_eq!(score.get(Side::Left), 1);
    }

    #[test]
    fn test_win_after_eleven() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment(Side::Left);
            score.increment(Side::Right);
        }
        assert!(!score.has_won());
        assert_eq!(score.winner(), None);

        score.increment(Side::Right);
        assert!(score.has_won());
        assert_eq!(score.winner(), Some(Side::Right));
    }

    #[test]
    fn test_reset() {
        let mut score = Score { left: 11, right: 3 };
        score.reset();
        assert_eq!(score, Score::default());
        assert!(!score.has_won());
    }
}
