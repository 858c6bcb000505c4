//! Truthiness of filter predicate results.

/// A predicate result that is either "keep" (truthy) or "drop" (falsy).
///
/// | Type | Falsy when |
/// |------|------------|
/// | `bool` | `false` |
/// | integers | `0` |
/// | floats | `0.0`, `-0.0` or NaN |
/// | `str`, `String` | empty |
/// | `Option<T>` | `None` |
/// | `()` | always |
///
/// The predicate's return type cannot borrow from the element it is given, so
/// return an owned value (`x.is_some()`, `s.clone()`) rather than `x.as_ref()`.
/// References that outlive the call, such as `&'static str`, are fine.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    // NaN compares unequal to everything, so check it explicitly.
                    !self.is_nan() && *self != 0.0
                }
            }
        )*
    };
}

impl_truthy_float!(f32, f64);

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T> Truthy for &T
where
    T: Truthy + ?Sized,
{
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
