//! Checks performed once at scan setup so the per-base readers can run
//! without any.

use std::ops::Range;

use crate::sequence::is_valid_digit;
use crate::types::OrfeusError;

/// Positions where a window of `window` symbols fits in a sequence of
/// `length` symbols.
///
/// Reverse-strand position `i` covers forward positions
/// `length - window - i..length - i`, so the same range is valid on both
/// strands.
///
/// ```rust
/// use orfeus_core::sequence::window_positions;
///
/// assert_eq!(window_positions(10, 3)?, 0..8);
/// assert!(window_positions(2, 3).is_err());
/// # Ok::<(), orfeus_core::types::OrfeusError>(())
/// ```
pub fn window_positions(length: usize, window: usize) -> Result<Range<usize>, OrfeusError> {
    if window == 0 || length < window {
        return Err(OrfeusError::SequenceTooShort { length, window });
    }
    Ok(0..length - window + 1)
}

/// Check that the window starting at `position` lies inside the sequence
pub fn check_window(length: usize, position: usize, window: usize) -> Result<(), OrfeusError> {
    if position
        .checked_add(window)
        .is_some_and(|window_end| window_end <= length)
    {
        Ok(())
    } else {
        Err(OrfeusError::PositionOutOfRange {
            position,
            window,
            length,
        })
    }
}

/// Check that every digit belongs to the alphabet
pub fn validate_digits(digits: &[u8]) -> Result<(), OrfeusError> {
    match digits.iter().position(|&code| !is_valid_digit(code)) {
        Some(position) => Err(OrfeusError::InvalidDigit {
            position,
            code: digits[position],
        }),
        None => Ok(()),
    }
}
