// -----------------------------------------------------------------------------
// src/optional.rs
// -----------------------------------------------------------------------------

use crate::error::{Result, StreamError};
use crate::model::Model;

/// A value that may or may not be present, returned by
/// [`Stream::find_first`](crate::Stream::find_first).
///
/// Presence is tracked by the variant, never by inspecting the payload: a
/// present `Optional<Option<T>>` holding `None` is still present. Absent-like
/// input is only folded into emptiness by [`Optional::of_nullable`].
///
/// ### Examples
/// ```rust
/// use sugars_stream::{Optional, StreamError};
///
/// let found = Optional::of(3);
/// assert_eq!(found.get(), Ok(&3));
///
/// let missing: Optional<i32> = Optional::empty();
/// assert_eq!(missing.get(), Err(StreamError::NoSuchElement));
/// assert_eq!(missing.get_or_else(7), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// An optional holding `value`.
    #[inline]
    pub fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// An optional holding the value when there is one, empty otherwise.
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        Self { value }
    }

    /// An empty optional.
    #[inline]
    pub fn empty() -> Self {
        Self { value: None }
    }

    /// Whether no value is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Whether a value is held.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the held value, failing with [`StreamError::NoSuchElement`] when
    /// empty.
    pub fn get(&self) -> Result<&T> {
        self.value.as_ref().ok_or(StreamError::NoSuchElement)
    }

    /// Take the held value, failing with [`StreamError::NoSuchElement`] when
    /// empty.
    pub fn into_value(self) -> Result<T> {
        self.value.ok_or(StreamError::NoSuchElement)
    }

    /// The held value, or `other` when empty.
    pub fn get_or_else(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    /// The held value, or the result of `f` when empty.
    pub fn get_or_else_with(self, f: impl FnOnce() -> T) -> T {
        self.value.unwrap_or_else(f)
    }

    /// Run `f` on the held value, if any.
    pub fn if_present(&self, f: impl FnOnce(&T)) {
        if let Some(value) = &self.value {
            f(value);
        }
    }

    /// Run `f` when empty.
    pub fn if_absent(&self, f: impl FnOnce()) {
        if self.value.is_none() {
            f();
        }
    }

    /// View as a standard `Option`.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

impl<T: Model> Model for Optional<T> {
    fn equals(&self, other: &Self) -> bool {
        self.value.equals(&other.value)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.value {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::of_nullable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_of_nullable_folds_none() {
        assert!(Optional::<i32>::of_nullable(None).is_empty());
        assert!(Optional::of_nullable(Some(1)).is_present());
    }

    #[test]
    fn test_present_none_payload_is_still_present() {
        let nested = Optional::of(None::<i32>);
        assert!(nested.is_present());
        assert_eq!(nested.get(), Ok(&None));
    }

    #[test]
    fn test_callbacks_fire_once() {
        let mut hits = 0;
        Optional::of(5).if_present(|v| hits += *v);
        Optional::<i32>::empty().if_present(|_| hits += 100);
        assert_eq!(hits, 5);

        let mut absent = false;
        Optional::<i32>::empty().if_absent(|| absent = true);
        assert!(absent);
        let mut fired = false;
        Optional::of(1).if_absent(|| fired = true);
        assert!(!fired);
    }

    #[test]
    fn test_into_value_and_defaults() {
        assert_eq!(Optional::of("x").into_value(), Ok("x"));
        let missing = Optional::<&str>::empty();
        assert_eq!(missing.into_value(), Err(StreamError::NoSuchElement));
        assert_eq!(Optional::<i32>::empty().get_or_else_with(|| 9), 9);
        assert_eq!(Option::from(Optional::of(2)), Some(2));
    }

    #[test]
    fn test_model_equality() {
        assert!(Optional::<i32>::empty().equals(&Optional::empty()));
        assert!(!Optional::of(1).equals(&Optional::empty()));
        assert!(Optional::of(1).equals(&Optional::of(1)));
    }
}
