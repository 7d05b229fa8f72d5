//! Macros for wiring user types into the pipeline.

/// Implement [`Model`](crate::Model) for one or more types by delegating to
/// their `PartialEq` implementation.
///
/// The delegated `PartialEq` must be reflexive for `distinct` to behave, so
/// prefer this for types that are also `Eq`.
///
/// ```rust
/// use sugars_stream::{model_eq, Model};
///
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Employee {
///     name: String,
///     salary: u32,
/// }
///
/// model_eq!(Employee);
///
/// let a = Employee { name: "Alex".into(), salary: 72_000 };
/// assert!(a.equals(&a.clone()));
/// ```
#[macro_export]
macro_rules! model_eq {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::Model for $t {
                #[inline]
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}
