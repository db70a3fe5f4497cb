//! Stepped numeric ranges.
//!
//! [`range`] yields `start, start + step, ...` up to but excluding `end`, in
//! either direction. It works for any numeric type with a zero and a one,
//! including fractional steps on `f64`.

use thiserror::Error;

/// Rejected step/direction combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid step: cannot generate a range with a zero step")]
    ZeroStep,
    #[error("invalid step: cannot generate an ascending range with a non-positive step")]
    AscendingNonPositive,
    #[error("invalid step: cannot generate a descending range with a non-negative step")]
    DescendingNonNegative,
}

/// Numbers usable with [`range`].
pub trait Step: Copy + PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
    /// `self + rhs`, or `None` when the sum leaves the type's range.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_step_int {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_step_float {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

impl_step_int!(i32, i64, u32, u64, usize);
impl_step_float!(f32, f64);

/// Iterator over a validated range. Cloning restarts from the current position.
#[derive(Debug, Clone)]
pub struct StepRange<T> {
    next: T,
    end: T,
    step: T,
    ascending: bool,
    done: bool,
}

impl<T: Step> StepRange<T> {
    fn moves_forward(&self, current: T, next: T) -> bool {
        if self.ascending {
            next > current
        } else {
            next < current
        }
    }
}

impl<T: Step> Iterator for StepRange<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }

        let in_bounds = if self.ascending {
            self.next < self.end
        } else {
            self.next > self.end
        };
        if !in_bounds {
            self.done = true;
            return None;
        }

        let current = self.next;
        // Stop once the next value overflows or no longer moves (float precision).
        match current.checked_add(self.step) {
            Some(next) if self.moves_forward(current, next) => self.next = next,
            _ => self.done = true,
        }
        Some(current)
    }
}

/// Build a range from `start` (inclusive) to `end` (exclusive).
///
/// An ascending range needs a positive step and a descending one a negative
/// step. A zero step is always rejected. `start == end` yields nothing.
///
/// # Examples
/// ```
/// use rust_week_calendar::utils::range::range;
///
/// let marks: Vec<i64> = range(0, 90, 30).unwrap().collect();
/// assert_eq!(marks, vec![0, 30, 60]);
///
/// let down: Vec<f64> = range(1.0, 0.0, -0.5).unwrap().collect();
/// assert_eq!(down, vec![1.0, 0.5]);
/// ```
pub fn range<T: Step>(start: T, end: T, step: T) -> Result<StepRange<T>, RangeError> {
    let zero = T::zero();
    let positive = step > zero;
    let negative = step < zero;

    if !positive && !negative {
        return Err(RangeError::ZeroStep);
    }

    let ascending = if end > start {
        if !positive {
            return Err(RangeError::AscendingNonPositive);
        }
        true
    } else if end < start {
        if !negative {
            return Err(RangeError::DescendingNonNegative);
        }
        false
    } else {
        return Ok(StepRange {
            next: start,
            end,
            step,
            ascending: positive,
            done: true,
        });
    };

    Ok(StepRange {
        next: start,
        end,
        step,
        ascending,
        done: false,
    })
}

/// `range(0, end, 1)`.
pub fn range_to<T: Step>(end: T) -> Result<StepRange<T>, RangeError> {
    range(T::zero(), end, T::one())
}

/// `range(start, end, 1)`.
pub fn range_between<T: Step>(start: T, end: T) -> Result<StepRange<T>, RangeError> {
    range(start, end, T::one())
}
