use super::board::ROWS;

/// The two sides of a match: the human at the bottom of the board and the
/// CPU at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Cpu,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Player, Side::Cpu];

    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }

    /// Row delta of one step forward. The player advances towards row 0.
    pub fn forward(self) -> i8 {
        match self {
            Side::Player => -1,
            Side::Cpu => 1,
        }
    }

    /// The opponent's back rank, where chicks promote.
    pub fn back_rank(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Cpu => ROWS - 1,
        }
    }

    /// Index into per-side arrays
    pub(crate) fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Cpu => 1,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::Player => "You",
            Side::Cpu => "CPU",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::Player.other(), Side::Cpu);
        assert_eq!(Side::Cpu.other(), Side::Player);
    }

    #[test]
    fn test_forward_and_back_rank_are_opposed() {
        assert_eq!(Side::Player.forward(), -1);
        assert_eq!(Side::Cpu.forward(), 1);
        assert_eq!(Side::Player.back_rank(), 0);
        assert_eq!(Side::Cpu.back_rank(), 3);
    }

    #[test]
    fn test_side_name() {
        assert_eq!(Side::Player.name(), "You");
        assert_eq!(Side::Cpu.name(), "CPU");
    }
}
