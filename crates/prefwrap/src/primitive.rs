use prefwrap_store::StoredValue;
use url::Url;

/// A type the store holds natively.
///
/// `from_stored` returns `None` when the stored value has a different shape, which preferences
/// treat like a missing value.
pub trait Primitive: Sized {
    /// Converts the value into its stored form.
    fn to_stored(&self) -> StoredValue;

    /// Extracts a value of this type, or `None` if `value` has another shape.
    fn from_stored(value: StoredValue) -> Option<Self>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                #[allow(clippy::clone_on_copy)]
                fn to_stored(&self) -> StoredValue {
                    StoredValue::$variant(self.clone())
                }

                fn from_stored(value: StoredValue) -> Option<Self> {
                    match value {
                        StoredValue::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_primitive! {
    i64 => Integer,
    f64 => Float,
    String => String,
    bool => Bool,
    Vec<u8> => Data,
    Url => Url,
}

// Narrower integers are stored as `Integer`. Out of range values read as the wrong shape.
macro_rules! impl_narrow_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                fn to_stored(&self) -> StoredValue {
                    StoredValue::Integer(i64::from(*self))
                }

                fn from_stored(value: StoredValue) -> Option<Self> {
                    match value {
                        StoredValue::Integer(value) => <$ty>::try_from(value).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_narrow_integer!(i8, i16, i32, u8, u16, u32);

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for String {}
}

/// A primitive usable as the raw value of a [`RawRepresentable`](crate::RawRepresentable) type.
///
/// Only `i64` and `String` qualify.
pub trait RawValue: Primitive + sealed::Sealed {}

impl RawValue for i64 {}
impl RawValue for String {}
