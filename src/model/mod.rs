//! The equality capability every pipeline element can expose.
//!
//! Identity inside a pipeline is structural: two elements are "the same" when
//! [`Model::equals`] says so, never by address. `distinct`, `contains` and the
//! [`is_equal`](crate::function::is_equal) predicate are built on it.
//!
//! `Option<T>` plays the role of the nilable element: `None` equals `None`,
//! `None` never equals a present value, and two present values defer to the
//! inner type.

mod containers;

/// Semantic equality between two elements of the same type.
///
/// Implementations must be reflexive, symmetric and transitive. A type that
/// breaks this (for example by comparing NaN floats with `==`) leaves
/// `distinct` with undefined membership.
pub trait Model {
    /// Whether `self` and `other` are semantically equal.
    fn equals(&self, other: &Self) -> bool;
}

/// Compare two possibly-absent elements.
///
/// Absent equals absent, absent never equals present, and two present
/// elements defer to [`Model::equals`].
#[inline]
pub fn models_equal<T: Model + ?Sized>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.equals(b),
        _ => false,
    }
}

/// Whether any member of `items` equals `item`.
///
/// Linear in `items`; equality is a black box so no hashing is possible.
#[inline]
pub fn contains<T: Model>(items: &[T], item: &T) -> bool {
    items.iter().any(|seen| seen.equals(item))
}

crate::model_eq!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, (), str, String,
);

macro_rules! model_float {
    ($($t:ty),+) => {
        $(
            // NaN is treated as equal to itself so equality stays reflexive.
            impl Model for $t {
                #[inline]
                fn equals(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }
            }
        )+
    };
}

model_float!(f32, f64);

impl<T: Model> Model for Option<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        models_equal(self.as_ref(), other.as_ref())
    }
}

impl<T: Model + ?Sized> Model for &T {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(*other)
    }
}

impl<T: Model + ?Sized> Model for Box<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(&**other)
    }
}

impl<T: Model + ?Sized> Model for std::sync::Arc<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(&**other)
    }
}
