/// A milestone notification from game logic to the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A corner triangle was fully traced for the first time this session.
    TriangleTraced { index: usize },
    /// All four triangles are traced; the inner diamond was revealed.
    DiamondRevealed,
}
