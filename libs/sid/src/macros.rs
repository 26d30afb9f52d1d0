//! Macros for defining typed Sid types.

/// Macro to define a Sid newtype bound to one prefix.
///
/// This generates a wrapper around [`Sid`](crate::Sid) with:
/// - A `PREFIX` constant
/// - `new()` to generate a fresh ID from the process-wide generator
/// - `at()` to generate one for an explicit timestamp
/// - `parse()` that rejects any other prefix
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations
/// - `Ord` matching the byte order of the encoded strings
///
/// # Example
///
/// ```ignore
/// define_sid!(OrderId, "ord.");
///
/// let id = OrderId::new();
/// let parsed: OrderId = id.to_string().parse()?;
/// ```
#[macro_export]
macro_rules! define_sid {
    ($name:ident, $prefix:literal) => {
        /// A Sid carrying this type's prefix.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name($crate::Sid);

        impl $name {
            /// The prefix for this ID type.
            pub const PREFIX: &'static str = $prefix;

            /// Creates a new ID for the current time.
            #[must_use]
            pub fn new() -> Self {
                Self::from_encoded(&$crate::create_with_prefix(Self::PREFIX))
            }

            /// Creates a new ID for `timestamp` (milliseconds since the Unix epoch).
            #[must_use]
            pub fn at(timestamp: i64) -> Self {
                Self::from_encoded(&$crate::create_at(timestamp, Self::PREFIX))
            }

            fn from_encoded(encoded: &str) -> Self {
                match Self::parse(encoded) {
                    Ok(id) => id,
                    Err(e) => unreachable!("generated Sid failed to parse: {e}"),
                }
            }

            /// Returns the decoded Sid.
            #[must_use]
            pub const fn sid(&self) -> &$crate::Sid {
                &self.0
            }

            /// Returns the timestamp in milliseconds.
            #[must_use]
            pub const fn timestamp_ms(&self) -> i64 {
                self.0.timestamp()
            }

            /// Parses an ID from a string.
            ///
            /// The string must be a valid Sid whose prefix is exactly `PREFIX`.
            pub fn parse(s: &str) -> Result<Self, $crate::SidError> {
                let sid = $crate::Sid::parse(s)?;

                if sid.prefix() != Self::PREFIX {
                    return Err($crate::SidError::InvalidPrefix {
                        expected: Self::PREFIX,
                        actual: sid.prefix().to_string(),
                    });
                }

                Ok(Self(sid))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::SidError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                (self.0.timestamp(), self.0.counter(), self.0.random()).cmp(&(
                    other.0.timestamp(),
                    other.0.counter(),
                    other.0.random(),
                ))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s =
                    <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err($crate::__private::serde::de::Error::custom)
            }
        }

        impl AsRef<$crate::Sid> for $name {
            fn as_ref(&self) -> &$crate::Sid {
                &self.0
            }
        }
    };
}
