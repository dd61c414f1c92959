//! Macros for defining labeled kind enums.

/// Macro for defining a kind enum whose variants are identified by their
/// human-readable labels, as the REST API and the filter panel exchange them.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Heating kind."]
///     enum Heating {
///         #[doc = "Individual boiler."]
///         #[label = "individual"]
///         Individual = 1,
///
///         #[doc = "District heating."]
///         #[label = "district"]
///         District = 2,
///     }
/// }
///
/// assert_eq!(Heating::from_label("district"), Some(Heating::District));
/// assert_eq!(Heating::Individual.label(), "individual");
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                #[label = $label:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumIter,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
        )]
        #[doc = $doc]
        #[repr(u8)]
        pub enum $name {
            $(
                #[doc = $variant_doc]
                #[strum(serialize = $label)]
                $variant = $value,
            )*
        }

        impl $name {
            /// Converts this into its [`u8`] representation.
            #[must_use]
            pub const fn u8(self) -> u8 {
                self as u8
            }

            /// Returns the human-readable label of this kind.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $label,
                    )*
                }
            }

            /// Parses a kind out of its (possibly padded) label.
            ///
            /// [`None`] is returned for blank or unknown labels.
            #[must_use]
            pub fn from_label(label: &str) -> Option<Self> {
                match label.trim() {
                    $(
                        $label => Some(Self::$variant),
                    )*
                    _ => None,
                }
            }
        }
    };
}
