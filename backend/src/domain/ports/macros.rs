//! `define_port_error!`: declares a port error enum plus snake_case
//! constructors for each variant.
//!
//! ```ignore
//! define_port_error! {
//!     pub enum ShelfError {
//!         Connection { message: String } => "shelf unreachable: {message}",
//!     }
//! }
//! let err = ShelfError::connection("refused");
//! ```
//!
//! Constructor parameters take `impl Into<FieldType>`, so string fields
//! accept `&str` directly.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ShelfError {
            Connection { message: String } => "shelf unreachable: {message}",
            Capacity { used: u32, limit: u32 } => "shelf full: {used}/{limit}",
            Misfiled { title: String, slot: u32 } => "{title} misfiled at slot {slot}",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        let err = ShelfError::connection("refused");
        assert_eq!(err, ShelfError::Connection { message: "refused".to_owned() });
        assert_eq!(err.to_string(), "shelf unreachable: refused");
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        assert_eq!(ShelfError::capacity(5_u32, 5_u32).to_string(), "shelf full: 5/5");
    }

    #[test]
    fn mixed_fields_are_positional() {
        let err = ShelfError::misfiled("Dune", 3_u32);
        assert_eq!(err.to_string(), "Dune misfiled at slot 3");
    }
}
