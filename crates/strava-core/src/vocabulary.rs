// ABOUTME: Declarative macro for fixed string vocabularies sent to the Strava API
// ABOUTME: Generates the enum, wire token mapping, Display, FromStr, and list joining
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Declare an enum whose variants map 1:1 onto remote wire tokens.
///
/// The caller must have `fmt`, `FromStr`, `Serialize`, `Deserialize` and
/// `ParseVocabularyError` in scope.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($vocabulary:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every token of the vocabulary, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Token sent over the wire
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Render a list of tokens as one comma-separated value, preserving order
            #[must_use]
            pub fn join(items: &[Self]) -> String {
                items
                    .iter()
                    .map(|item| item.as_str())
                    .collect::<Vec<_>>()
                    .join(",")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseVocabularyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(ParseVocabularyError::new($vocabulary, other)),
                }
            }
        }
    };
}

pub(crate) use wire_enum;
