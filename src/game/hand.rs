use super::piece::PieceKind;

/// Pieces a side has captured and may drop back onto the board.
///
/// Order is capture order; it only exists so a front-end can list entries
/// stably.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    pieces: Vec<PieceKind>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { pieces: Vec::new() }
    }

    /// Add a captured piece. Hens are stored as chicks.
    pub fn push(&mut self, kind: PieceKind) {
        self.pieces.push(kind.demoted());
    }

    pub fn get(&self, index: usize) -> Option<PieceKind> {
        self.pieces.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn contains(&self, kind: PieceKind) -> bool {
        self.pieces.contains(&kind)
    }

    pub fn count(&self, kind: PieceKind) -> usize {
        self.pieces.iter().filter(|&&k| k == kind).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.pieces.iter().copied()
    }

    /// Distinct kinds in first-captured order.
    pub fn kinds(&self) -> Vec<PieceKind> {
        let mut kinds = Vec::new();
        for kind in self.iter() {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Find the entry to spend for a drop of `kind`. `hint` is the index a
    /// front-end remembered; it is only trusted if it still holds `kind`.
    pub fn resolve(&self, kind: PieceKind, hint: Option<usize>) -> Option<usize> {
        match hint {
            Some(index) if self.get(index) == Some(kind) => Some(index),
            _ => self.pieces.iter().position(|&k| k == kind),
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<PieceKind> {
        if index < self.pieces.len() {
            Some(self.pieces.remove(index))
        } else {
            None
        }
    }
}
