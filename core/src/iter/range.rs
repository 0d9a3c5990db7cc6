use super::Kernel;

/// Numbers a range generator can count through.
pub trait Countable: Copy + PartialOrd {
    const ZERO: Self;

    /// The value one step above `self`.
    fn successor(self) -> Self;
}

macro_rules! impl_countable {
    ($zero:literal, $one:literal => $($ty:ty),+) => {
        $(
            impl Countable for $ty {
                const ZERO: Self = $zero;

                #[inline]
                fn successor(self) -> Self {
                    self + $one
                }
            }
        )+
    };
}

impl_countable!(0, 1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_countable!(0.0, 1.0 => f32, f64);

/// Counts upward by one from `start`, stopping before `end`.
#[derive(Debug, Clone)]
pub struct RangeKernel<T> {
    next: T,
    end: T,
}

impl<T: Countable> RangeKernel<T> {
    pub fn new(start: T, end: T) -> Self {
        RangeKernel { next: start, end }
    }
}

impl<T: Countable> Kernel for RangeKernel<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next < self.end {
            let current = self.next;
            let successor = current.successor();
            // Integers below `end` always have a larger successor. Large floats
            // stop gaining from `+ 1.0`, and the range ends there.
            self.next = if successor > current { successor } else { self.end };
            Some(current)
        } else {
            None
        }
    }
}
