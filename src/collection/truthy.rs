//! Truthiness of plain values.
//!
//! [`every_truthy`](super::every_truthy) and [`some_truthy`](super::some_truthy)
//! test the elements themselves instead of a predicate's result. `Truthy`
//! decides what "holds" means for an element in that case.

/// A value that can be interpreted as a boolean.
///
/// - `bool`: itself
/// - integers: non-zero
/// - floats: non-zero and not NaN
/// - `char`: not `'\0'`
/// - strings: non-empty
/// - `Option<T>`: `Some` with a truthy payload
/// - references and boxes: delegate to the pointee
///
/// # Examples
///
/// ```rust
/// use combinars::collection::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0.0_f64.is_truthy());
/// assert!(!f64::NAN.is_truthy());
/// assert!("text".is_truthy());
/// assert!(!Some(false).is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

macro_rules! impl_truthy_for_floats {
    ($($float:ty),* $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_for_floats!(f32, f64);

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != '\0'
    }
}

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

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
