//! One-step-at-a-time instruction cursor.

/// Position within a recipe's instruction steps.
///
/// The index always stays in `[0, len - 1]` (or 0 for a recipe without
/// steps).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCursor {
    index: usize,
    len: usize,
}

impl StepCursor {
    /// Cursor on the first of `len` steps.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Cursor on step `index`, clamped to the last step.
    #[must_use]
    pub const fn at(index: usize, len: usize) -> Self {
        let last = len.saturating_sub(1);
        Self {
            index: if index > last { last } else { index },
            len,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.index + 1 >= self.len
    }

    /// Step back, staying on the first step.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::at(self.index.saturating_sub(1), self.len)
    }

    /// Step forward, staying on the last step.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::at(self.index.saturating_add(1), self.len)
    }

    /// "Step i of n" label, 1-based.
    #[must_use]
    pub fn label(self) -> String {
        format!("Step {} of {}", self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_clamps_to_bounds() {
        let cursor = StepCursor::new(3);
        assert!(cursor.is_first());
        assert_eq!(cursor.previous().index(), 0);

        let last = cursor.next().next();
        assert_eq!(last.index(), 2);
        assert!(last.is_last());
        assert_eq!(last.next().index(), 2);
        assert_eq!(last.label(), "Step 3 of 3");
    }

    #[test]
    fn test_at_clamps_out_of_range_index() {
        assert_eq!(StepCursor::at(99, 4).index(), 3);
        assert_eq!(StepCursor::at(1, 4).index(), 1);
    }

    #[test]
    fn test_recipe_without_steps() {
        let cursor = StepCursor::at(5, 0);
        assert!(cursor.is_empty());
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.next().index(), 0);
        assert!(cursor.is_first() && cursor.is_last());
    }

    #[test]
    fn test_index_never_leaves_range() {
        for len in 0..5 {
            let mut cursor = StepCursor::new(len);
            for _ in 0..10 {
                cursor = cursor.next();
                assert!(cursor.index() <= len.saturating_sub(1));
            }
            for _ in 0..10 {
                cursor = cursor.previous();
            }
            assert_eq!(cursor.index(), 0);
        }
    }
}
