//! Process-wide tournament win counters.
//!
//! The tally outlives individual games: starting a new game never touches
//! it, only an explicit reset does.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallySide {
    Player,
    Computer,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TournamentTally {
    pub player_wins: u32,
    pub computer_wins: u32,
}

impl TournamentTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&mut self, side: TallySide) {
        match side {
            TallySide::Player => self.player_wins += 1,
            TallySide::Computer => self.computer_wins += 1,
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
    fn wins_accumulate_until_explicit_reset() {
        let mut tally = TournamentTally::new();
        tally.record_win(TallySide::Player);
        tally.record_win(TallySide::Computer);
        tally.record_win(TallySide::Computer);
        assert_eq!(tally.player_wins, 1);
        assert_eq!(tally.computer_wins, 2);

        tally.reset();
        assert_eq!(tally, TournamentTally::default());
    }
}
