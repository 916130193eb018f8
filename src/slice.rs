//! Slice descriptors for index assignment on [`Nada`](crate::Nada).

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::Error;

/// A `start:stop:step` slice with optional bounds.
///
/// A slice is *extended* when it carries a step other than 1. Only extended slices
/// constrain how many items may be assigned to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl Slice {
    /// `start:stop`
    pub const fn new(start: isize, stop: isize) -> Self {
        Slice {
            start: Some(start),
            stop: Some(stop),
            step: None,
        }
    }

    /// `:` with no bounds and no step.
    pub const fn full() -> Self {
        Slice {
            start: None,
            stop: None,
            step: None,
        }
    }

    /// Same bounds with an explicit step.
    pub const fn with_step(self, step: isize) -> Self {
        Slice {
            step: Some(step),
            ..self
        }
    }

    /// True when the step is set to anything other than 1.
    pub fn is_extended(&self) -> bool {
        matches!(self.step, Some(step) if step != 1)
    }

    /// Number of positions selected by the slice when read as `range(start, stop, step)`.
    ///
    /// An open start counts from 0 and an open stop selects nothing, since the only
    /// sequence these slices are applied to is empty.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroStep`] if the step is 0
    pub fn extended_len(&self) -> Result<usize, Error> {
        let step = self.step.unwrap_or(1) as i128;
        if step == 0 {
            return Err(Error::ZeroStep);
        }

        let start = self.start.unwrap_or(0) as i128;
        let stop = self.stop.map_or(start, |stop| stop as i128);
        let (span, stride) = if step > 0 {
            (stop - start, step)
        } else {
            (start - stop, -step)
        };

        if span <= 0 {
            return Ok(0);
        }
        Ok(usize::try_from((span + stride - 1) / stride).unwrap_or(usize::MAX))
    }

    /// Validate assigning `actual` items to this slice.
    ///
    /// Plain slices accept any number of items.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroStep`] if the step is 0
    /// - [`Error::SizeMismatch`] if the slice is extended and `actual` differs from its length
    pub fn check_assign(&self, actual: usize) -> Result<(), Error> {
        if !self.is_extended() {
            return Ok(());
        }
        let expected = self.extended_len()?;
        if expected != actual {
            return Err(Error::SizeMismatch { expected, actual });
        }
        Ok(())
    }
}

impl From<Range<isize>> for Slice {
    fn from(range: Range<isize>) -> Self {
        Slice::new(range.start, range.end)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(range: RangeFrom<isize>) -> Self {
        Slice {
            start: Some(range.start),
            ..Slice::full()
        }
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(range: RangeTo<isize>) -> Self {
        Slice {
            stop: Some(range.end),
            ..Slice::full()
        }
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Slice::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_slice_is_not_extended() {
        assert!(!Slice::new(2, 7).is_extended());
        assert!(!Slice::new(2, 7).with_step(1).is_extended());
        assert!(Slice::new(2, 7).with_step(2).is_extended());
        assert!(Slice::full().with_step(-1).is_extended());
    }

    #[test]
    fn test_extended_len_positive_step() {
        assert_eq!(Slice::new(11, 20).with_step(2).extended_len(), Ok(5));
        assert_eq!(Slice::new(0, 6).with_step(2).extended_len(), Ok(3));
        assert_eq!(Slice::new(0, 7).with_step(3).extended_len(), Ok(3));
        assert_eq!(Slice::new(5, 5).with_step(2).extended_len(), Ok(0));
        assert_eq!(Slice::new(9, 1).with_step(2).extended_len(), Ok(0));
    }

    #[test]
    fn test_extended_len_negative_step() {
        assert_eq!(Slice::new(10, 0).with_step(-3).extended_len(), Ok(4));
        assert_eq!(Slice::new(0, 10).with_step(-1).extended_len(), Ok(0));
    }

    #[test]
    fn test_extended_len_open_bounds() {
        assert_eq!(Slice::full().with_step(2).extended_len(), Ok(0));

        let from_three: Slice = (3..).into();
        assert_eq!(from_three.with_step(2).extended_len(), Ok(0));

        let to_six: Slice = (..6).into();
        assert_eq!(to_six.with_step(2).extended_len(), Ok(3));
    }

    #[test]
    fn test_extended_len_extreme_bounds() {
        let wide = Slice::new(isize::MIN, isize::MAX).with_step(isize::MIN);
        assert_eq!(wide.extended_len(), Ok(0));

        let huge = Slice::new(isize::MIN, isize::MAX).with_step(2);
        assert!(huge.extended_len().unwrap() > 0);
    }

    #[test]
    fn test_zero_step() {
        assert_eq!(
            Slice::new(0, 4).with_step(0).extended_len(),
            Err(Error::ZeroStep)
        );
        assert_eq!(
            Slice::new(0, 4).with_step(0).check_assign(4),
            Err(Error::ZeroStep)
        );
    }

    #[test]
    fn test_check_assign() {
        let extended = Slice::new(11, 20).with_step(2);
        assert_eq!(extended.check_assign(5), Ok(()));
        assert_eq!(
            extended.check_assign(6),
            Err(Error::SizeMismatch {
                expected: 5,
                actual: 6
            })
        );

        assert_eq!(Slice::new(11, 20).check_assign(9), Ok(()));
        assert_eq!(Slice::new(11, 20).check_assign(100), Ok(()));
    }

    #[test]
    fn test_from_ranges() {
        assert_eq!(Slice::from(2..7), Slice::new(2, 7));
        assert_eq!(Slice::from(..), Slice::full());
        assert_eq!(
            Slice::from(4..),
            Slice {
                start: Some(4),
                stop: None,
                step: None
            }
        );
    }
}
