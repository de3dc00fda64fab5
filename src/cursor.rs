//! Cursor calculus: pure vertical-movement directives.
//!
//! Line indices count from the top of the maintained block, starting at
//! zero. Movement is strictly vertical; column positioning is handled by
//! carriage returns at the emission layer.

/// A vertical cursor movement, measured in whole lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// The cursor is already on the target line.
    Stay,
    /// Move up by the given number of lines.
    Up(usize),
    /// Move down by the given number of lines.
    Down(usize),
}

impl Movement {
    /// Compute the movement that takes the cursor from `current` to
    /// `target`.
    ///
    /// `target == current` yields [`Movement::Stay`], which emits no
    /// escape bytes downstream — repeated overwrites of the same line
    /// stay cheap.
    #[inline]
    pub const fn between(current: usize, target: usize) -> Self {
        if target == current {
            Self::Stay
        } else if target < current {
            Self::Up(current - target)
        } else {
            Self::Down(target - current)
        }
    }

    /// Number of lines this movement covers.
    #[inline]
    pub const fn distance(self) -> usize {
        match self {
            Self::Stay => 0,
            Self::Up(n) | Self::Down(n) => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_line_stays() {
        assert_eq!(Movement::between(0, 0), Movement::Stay);
        assert_eq!(Movement::between(7, 7), Movement::Stay);
    }

    #[test]
    fn test_up_and_down() {
        assert_eq!(Movement::between(2, 0), Movement::Up(2));
        assert_eq!(Movement::between(0, 2), Movement::Down(2));
        assert_eq!(Movement::between(5, 4), Movement::Up(1));
        assert_eq!(Movement::between(4, 5), Movement::Down(1));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Movement::Stay.distance(), 0);
        assert_eq!(Movement::Up(4).distance(), 4);
        assert_eq!(Movement::Down(1).distance(), 1);
    }
}
