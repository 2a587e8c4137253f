use crate::RawValue;

/// A type convertible to and from a primitive raw value, such as an enum backed by integers or
/// strings.
///
/// Fieldless enums can derive this with `#[derive(RawRepresentable)]`. Types with a non-trivial
/// mapping, like option sets, implement it by hand.
///
/// ```rust
/// use prefwrap::RawRepresentable;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Permissions(i64);
///
/// impl RawRepresentable for Permissions {
///     type Raw = i64;
///
///     fn raw_value(&self) -> i64 {
///         self.0
///     }
///
///     fn from_raw_value(raw: i64) -> Option<Self> {
///         ((raw & !0b111) == 0).then_some(Permissions(raw))
///     }
/// }
///
/// assert_eq!(Permissions::from_raw_value(0b101), Some(Permissions(0b101)));
/// assert_eq!(Permissions::from_raw_value(0b1000), None);
/// ```
pub trait RawRepresentable: Sized {
    /// The primitive the type is stored as.
    type Raw: RawValue;

    /// Returns the raw value representing `self`.
    fn raw_value(&self) -> Self::Raw;

    /// Reconstructs a value from its raw value, or `None` if `raw` matches no value.
    fn from_raw_value(raw: Self::Raw) -> Option<Self>;
}
