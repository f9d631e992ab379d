//! Fixed-choice enumerations backed by display labels
//!
//! Categories and payment methods are closed sets whose wire and display
//! form is a human label ("Credit Card"). Forms offer a placeholder entry
//! ("Select a category") that means "nothing chosen yet"; it is never a
//! member of the set.

use std::fmt;

/// Macro to generate label-backed choice enums
macro_rules! define_choice {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, placeholder = $placeholder:literal,
        { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Form label meaning "nothing selected"
            pub const PLACEHOLDER: &'static str = $placeholder;

            /// Display and wire label
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Parse a form selection; the placeholder or an empty string is `None`
            pub fn parse_selection(
                s: &str,
            ) -> Result<Option<Self>, $crate::models::choice::ChoiceParseError> {
                let s = s.trim();
                if s.is_empty() || s.eq_ignore_ascii_case(Self::PLACEHOLDER) {
                    return Ok(None);
                }
                s.parse().map(Some)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::choice::ChoiceParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = $crate::models::choice::normalize(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| $crate::models::choice::normalize(c.as_str()) == wanted)
                    .ok_or_else(|| $crate::models::choice::ChoiceParseError {
                        kind: $kind,
                        value: s.trim().to_string(),
                        expected: Self::ALL.iter().map(|c| c.as_str()).collect(),
                    })
            }
        }
    };
}

pub(crate) use define_choice;

/// Case-insensitive comparison key; "credit-card" and "credit_card" match "Credit Card"
pub(crate) fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Error returned when a label is not a member of its choice set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: Vec<&'static str>,
}

impl fmt::Display for ChoiceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown {}: '{}'. Expected one of: {}",
            self.kind,
            self.value,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for ChoiceParseError {}
