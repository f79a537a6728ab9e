//! Wrapping keyboard navigation over a list of focusable entries.

/// Direction for keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Next,
    Previous,
}

/// Index to focus after moving one step from `current` among `count`
/// entries. Wraps at both ends. Without a current entry, `Next` lands on the
/// first entry and `Previous` on the last.
pub fn step(current: Option<usize>, count: usize, direction: FocusDirection) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let index = match (direction, current) {
        (FocusDirection::Next, None) => 0,
        (FocusDirection::Next, Some(index)) => (index + 1) % count,
        (FocusDirection::Previous, None) | (FocusDirection::Previous, Some(0)) => count - 1,
        (FocusDirection::Previous, Some(index)) => (index - 1).min(count - 1),
    };
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        assert_eq!(step(None, 3, FocusDirection::Next), Some(0));
        assert_eq!(step(Some(0), 3, FocusDirection::Next), Some(1));
        assert_eq!(step(Some(2), 3, FocusDirection::Next), Some(0));
    }

    #[test]
    fn test_previous_wraps() {
        assert_eq!(step(None, 3, FocusDirection::Previous), Some(2));
        assert_eq!(step(Some(0), 3, FocusDirection::Previous), Some(2));
        assert_eq!(step(Some(2), 3, FocusDirection::Previous), Some(1));
    }

    #[test]
    fn test_empty() {
        assert_eq!(step(None, 0, FocusDirection::Next), None);
        assert_eq!(step(Some(1), 0, FocusDirection::Previous), None);
    }
}
