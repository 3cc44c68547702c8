//! Open block tracking.

/// Kind of an open block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// `if` or `elif` branch.
    Branch,
    /// Final `else` branch.
    ElseBranch,
    /// `while`/`until` loop.
    WhileLoop,
    /// `for`/`select` loop.
    ForLoop,
}

impl FrameKind {
    /// True for any arm of an `if` chain.
    pub fn is_branch(self) -> bool {
        matches!(self, Self::Branch | Self::ElseBranch)
    }
}

/// Stack of open blocks; its length is the current indentation depth.
#[derive(Debug, Default)]
pub struct ScopeTracker {
    frames: Vec<FrameKind>,
}

impl ScopeTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a block.
    pub fn push(&mut self, kind: FrameKind) {
        self.frames.push(kind);
    }

    /// Closes the innermost block and returns its kind.
    pub fn pop(&mut self) -> Option<FrameKind> {
        self.frames.pop()
    }

    /// Innermost open block.
    pub fn current(&self) -> Option<FrameKind> {
        self.frames.last().copied()
    }

    /// Number of open blocks.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// True when no block is open.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
