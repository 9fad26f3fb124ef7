//! Bounded cursors for carousels and wizards
//!
//! # Variants
//!
//! - [`Carousel`]: 0-indexed, wraps at both ends, supports direct jumps.
//! - [`StepCursor`]: 1-indexed, clamps at both ends. Gating on validation is
//!   the caller's job (see [`crate::wizard::SignupWizard`]).
//!
//! # Invariants
//!
//! - The bound `N` is fixed at construction and is at least 1.
//! - A carousel position always satisfies `0 <= position < N`.
//! - A step position always satisfies `1 <= position <= N`.

use crate::error::{Result, ShowcaseError};
use std::num::NonZeroUsize;

/// Cyclic cursor over `len` slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    position: usize,
    len: usize,
}

impl Carousel {
    /// Cursor at slide 0. Fails with [`ShowcaseError::EmptyCursor`] when `len` is 0.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(ShowcaseError::EmptyCursor);
        }
        Ok(Self { position: 0, len })
    }

    /// Cursor at slide 0 for a length known to be non-zero.
    pub fn nonzero(len: NonZeroUsize) -> Self {
        Self {
            position: 0,
            len: len.get(),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    /// Next slide, wrapping from the last back to the first.
    pub fn advance(&mut self) {
        self.position = (self.position + 1) % self.len;
    }

    /// Previous slide, wrapping from the first to the last.
    pub fn retreat(&mut self) {
        self.position = (self.position + self.len - 1) % self.len;
    }

    /// Show slide `index`. Out-of-range input is rejected, never clamped, and
    /// leaves the position unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(ShowcaseError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.position = index;
        Ok(())
    }
}

/// Clamped, 1-indexed cursor over `steps` wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    position: usize,
    steps: usize,
}

impl StepCursor {
    /// Cursor on step 1. Fails with [`ShowcaseError::EmptyCursor`] when `steps` is 0.
    pub fn new(steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(ShowcaseError::EmptyCursor);
        }
        Ok(Self { position: 1, steps })
    }

    /// Cursor on step 1 for a step count known to be non-zero.
    pub fn nonzero(steps: NonZeroUsize) -> Self {
        Self {
            position: 1,
            steps: steps.get(),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_first(&self) -> bool {
        self.position == 1
    }

    pub fn is_last(&self) -> bool {
        self.position == self.steps
    }

    /// `position = min(position + 1, N)`; returns whether it moved.
    pub fn advance(&mut self) -> bool {
        let next = (self.position + 1).min(self.steps);
        let moved = next != self.position;
        self.position = next;
        moved
    }

    /// `position = max(position - 1, 1)`; returns whether it moved.
    pub fn retreat(&mut self) -> bool {
        let previous = self.position.saturating_sub(1).max(1);
        let moved = previous != self.position;
        self.position = previous;
        moved
    }

    /// Completed fraction for progress bars, in percent
    pub fn percent(&self) -> u16 {
        ((self.position * 100) / self.steps) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_is_rejected() {
        assert!(matches!(Carousel::new(0), Err(ShowcaseError::EmptyCursor)));
        assert!(matches!(StepCursor::new(0), Err(ShowcaseError::EmptyCursor)));
    }

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.retreat();
        assert_eq!(carousel.position(), 2);
        carousel.advance();
        assert_eq!(carousel.position(), 0);
    }

    #[test]
    fn test_single_slide_carousel_stays_put() {
        let mut carousel = Carousel::new(1).unwrap();
        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.position(), 0);
    }

    #[test]
    fn test_jump_rejects_out_of_range() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.jump_to(2).unwrap();
        let err = carousel.jump_to(4).unwrap_err();
        assert!(matches!(err, ShowcaseError::OutOfRange { index: 4, len: 4 }));
        assert_eq!(carousel.position(), 2);
    }

    #[test]
    fn test_step_cursor_clamps() {
        let mut steps = StepCursor::new(3).unwrap();
        assert!(!steps.retreat());
        assert_eq!(steps.position(), 1);
        assert!(steps.advance());
        assert!(steps.advance());
        assert!(steps.is_last());
        assert!(!steps.advance());
        assert_eq!(steps.position(), 3);
        assert_eq!(steps.percent(), 100);
    }
}
