//! Session statistics, owned by the caller driving rounds

use serde::{Deserialize, Serialize};

use crate::engine::RoundResult;

/// Running totals over a sequence of rounds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds: u64,
    pub total_bet: f64,
    pub total_win: f64,
    pub wins: u64,
    pub losses: u64,
    /// Rounds that returned an error (not counted in `rounds`)
    pub failures: u64,
    pub max_win_ratio: f64,
}

impl SessionStats {
    /// Record a completed round
    pub fn record(&mut self, result: &RoundResult) {
        self.rounds += 1;
        self.total_bet += result.bet;
        self.total_win += result.win_amount;

        if result.is_win() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }

        self.max_win_ratio = self.max_win_ratio.max(result.win_ratio);
    }

    /// Record a failed round
    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Calculate RTP
    pub fn rtp(&self) -> f64 {
        if self.total_bet > 0.0 {
            (self.total_win / self.total_bet) * 100.0
        } else {
            0.0
        }
    }

    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        if self.rounds > 0 {
            (self.wins as f64 / self.rounds as f64) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridShape, ResultGrid};

    fn round(bet: f64, win_amount: f64) -> RoundResult {
        RoundResult {
            grid: ResultGrid::blank(GridShape::new(3, 4)),
            bet,
            win_amount,
            win_ratio: win_amount / bet,
        }
    }

    #[test]
    fn test_empty_session() {
        let stats = SessionStats::default();
        assert_eq!(stats.rtp(), 0.0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_session_totals() {
        let mut stats = SessionStats::default();
        stats.record(&round(5.0, 100.0));
        stats.record(&round(5.0, 0.0));
        stats.record(&round(10.0, 0.0));
        stats.record(&round(5.0, 25.0));
        stats.record_failure();

        assert_eq!(stats.rounds, 4);
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 2);
        assert_eq!(stats.total_bet, 25.0);
        assert_eq!(stats.total_win, 125.0);
        assert_eq!(stats.rtp(), 500.0);
        assert_eq!(stats.hit_rate(), 50.0);
        assert_eq!(stats.max_win_ratio, 20.0);
    }
}
