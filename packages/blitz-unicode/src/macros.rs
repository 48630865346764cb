//! Declarative helpers shared by the property value enums.

/// Declares a `#[repr(u8)]` property value enum together with its UCD aliases.
///
/// The declaration order defines the packed byte of each value, so new values
/// must only ever be appended.
macro_rules! property_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => [$($alias:literal),+] ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value in declaration order; the index is the packed byte.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The primary alias, as written in the UCD data files.
            pub fn short_name(self) -> &'static str {
                match self {
                    $($name::$variant => property_enum!(@first $($alias),+)),+
                }
            }

            /// Every alias of this value, primary first.
            pub fn aliases(self) -> &'static [&'static str] {
                match self {
                    $($name::$variant => &[$($alias),+]),+
                }
            }

            /// Parse any alias of this value using UAX44-LM3 loose matching.
            pub fn from_name(name: &str) -> Option<Self> {
                $(
                    if [$($alias),+]
                        .iter()
                        .any(|alias| $crate::provider::types::loose_eq(alias, name))
                    {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl $crate::provider::types::PropertyValue for $name {
            fn to_byte(self) -> u8 {
                self as u8
            }

            fn from_byte(byte: u8) -> Option<Self> {
                Self::ALL.get(byte as usize).copied()
            }
        }
    };
    (@first $first:literal $(, $rest:literal)*) => {
        $first
    };
}
