use super::loc::Loc;

/// Number of beads each player starts with
pub const BEADS_COUNT: u32 = 10;

/// Captured enemy statues needed to win
pub const CAPTURE_LIMIT: u32 = 3;

/// Per-player counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// Beads left in the reserve
    pub beads: u32,
    /// Enemy statues captured so far
    pub captured: u32,
    pub active: bool,
    /// Moves made this game
    pub moves: u32,
    /// Statue that may not move this round (hard difficulty only)
    pub locked_statue: Option<Loc>,
    /// Moves left before running out of time, unlimited if `None`
    pub budget: Option<u32>,
}

impl Player {
    pub fn new(active: bool) -> Self {
        Self {
            beads: BEADS_COUNT,
            captured: 0,
            active,
            moves: 0,
            locked_statue: None,
            budget: None,
        }
    }

    pub fn beads_placed(&self) -> u32 {
        BEADS_COUNT.saturating_sub(self.beads)
    }

    pub fn out_of_moves(&self) -> bool {
        self.budget == Some(0)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(false)
    }
}
