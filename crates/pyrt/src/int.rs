/// Python's integer introspection methods.
///
/// Both operate on the absolute value, so `(-5).bit_length()` is `3` like
/// it is in Python.
pub trait PythonIntOps {
    /// The number of bits needed to represent the absolute value, zero for
    /// zero.
    fn bit_length(&self) -> u32;

    /// The number of ones in the binary representation of the absolute
    /// value.
    fn bit_count(&self) -> u32;
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl PythonIntOps for $ty {
                #[inline]
                fn bit_length(&self) -> u32 {
                    let n = self.unsigned_abs();
                    n.checked_ilog2().map_or(0, |log| log + 1)
                }

                #[inline]
                fn bit_count(&self) -> u32 {
                    self.unsigned_abs().count_ones()
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl PythonIntOps for $ty {
                #[inline]
                fn bit_length(&self) -> u32 {
                    <$ty>::BITS - self.leading_zeros()
                }

                #[inline]
                fn bit_count(&self) -> u32 {
                    self.count_ones()
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::PythonIntOps;

    #[test]
    fn test_bit_length() {
        assert_eq!(0i32.bit_length(), 0);
        assert_eq!(1i64.bit_length(), 1);
        assert_eq!(255u8.bit_length(), 8);
        assert_eq!((-5i32).bit_length(), 3);
        assert_eq!(i64::MIN.bit_length(), 64);
        assert_eq!(u64::MAX.bit_length(), 64);
        assert_eq!(1024usize.bit_length(), 11);
    }

    #[test]
    fn test_bit_count() {
        assert_eq!(0u32.bit_count(), 0);
        assert_eq!(7i32.bit_count(), 3);
        assert_eq!((-7i64).bit_count(), 3);
        assert_eq!(i32::MIN.bit_count(), 1);
        assert_eq!(u64::MAX.bit_count(), 64);
    }
}
