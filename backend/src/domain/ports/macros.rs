//! `define_port_error!`: declares the error enum a driven port returns.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor.
//! Constructor parameters take `impl Into<T>`, so adapters can pass `&str`
//! for `String` fields:
//!
//! ```ignore
//! define_port_error! {
//!     /// Failures raised by a car store.
//!     pub enum CarStoreError {
//!         /// The backing store could not be reached.
//!         Connection { message: String } => "car store connection failed: {message}",
//!         /// The record was changed concurrently.
//!         Stale => "car record is stale",
//!     }
//! }
//!
//! let err = CarStoreError::connection("refused");
//! assert_eq!(err.to_string(), "car store connection failed: refused");
//! assert_eq!(CarStoreError::stale(), CarStoreError::Stale);
//! ```

macro_rules! define_port_error {
    // Unit variant: `Expired` becomes `fn expired() -> Self`.
    (@constructor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    // Struct variant: accumulate one `impl Into<T>` parameter per field.
    (@constructor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@fields $variant () () $( $field : $ty, )*);
    };

    (@fields $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@fields $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @fields
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$enum_meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@constructor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;
