//! Clinical categorical fields.
//!
//! Every categorical field of the patient record is a closed set of known
//! labels plus an `Unrecognized` catch-all. Values arrive as the clinical
//! strings used on pathology reports ("Wild-type", "≥50%", "Pelvic+") and
//! are serialized back to the same strings. A label outside the table is
//! kept verbatim rather than rejected, so downstream encoding can map it to
//! the "not tested" sentinel.

/// Label shared by every molecular marker for an assay that was not run.
pub const NOT_TESTED: &str = "Not Tested";

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A label outside the known table, kept as received.
            Unrecognized(String),
        }

        impl $name {
            /// Known labels in encoding order.
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }

            /// Index of this value in [`Self::LABELS`].
            ///
            /// `None` for unrecognized labels and for "Not Tested", which
            /// never occupies a real category slot.
            pub fn code(&self) -> Option<usize> {
                let label = self.as_str();
                if label == $crate::models::categorical::NOT_TESTED {
                    return None;
                }
                Self::LABELS.iter().position(|known| *known == label)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw.trim() {
                    $($label => Self::$variant,)+
                    other => Self::Unrecognized(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::from(raw.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unrecognized(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
