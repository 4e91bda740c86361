//! Macros for defining typed resource IDs.

/// Macro to define a typed resource ID from its path shape.
///
/// Each entry lists one or more literal segments followed by the field that
/// captures the next segment. This generates a struct of `String` fields with:
/// - A `FORMAT` constant describing the shape
/// - `new()` to build an ID from its parts, and `try_new()` to build one
///   that is checked to format and parse back unchanged
/// - `parse()` to parse from string
/// - `fields()` to list the parts in path order
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations (as the canonical string)
/// - The [`ResourceId`](crate::ResourceId) trait
///
/// # Example
///
/// ```ignore
/// define_resource_id! {
///     SqlServerId, "sql_server" {
///         "subscriptions" => subscription_id,
///         "resourceGroups" => resource_group,
///         "providers" "Microsoft.Sql" "servers" => name,
///     }
/// }
///
/// let id: SqlServerId = "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Sql/servers/db1".parse()?;
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $( $literal:literal )+ => $field:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            $( pub $field: String, )+
        }

        impl $name {
            /// The path shape for this resource kind.
            pub const FORMAT: $crate::IdFormat = $crate::IdFormat::new(
                $kind,
                &[
                    $(
                        $( $crate::Segment::Literal($literal), )+
                        $crate::Segment::Variable(stringify!($field)),
                    )+
                ],
            );

            /// Creates an ID from its parts.
            ///
            /// Values are stored unchecked. Empty values or values containing
            /// `/` produce a string that `parse` rejects; use `try_new` for
            /// untrusted input.
            #[must_use]
            pub fn new($( $field: impl Into<String> ),+) -> Self {
                Self {
                    $( $field: $field.into(), )+
                }
            }

            /// Creates an ID from its parts, rejecting empty values and values
            /// containing `/`.
            pub fn try_new(
                $( $field: impl Into<String> ),+
            ) -> Result<Self, $crate::IdError> {
                let id = Self::new($( $field ),+);
                $( Self::FORMAT.check_value(stringify!($field), &id.$field)?; )+
                Ok(id)
            }

            /// Parses an ID from its canonical string form.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                let mut captures = Self::FORMAT.parse(s)?;
                Ok(Self {
                    $( $field: captures.take(stringify!($field))?, )+
                })
            }

            /// The field values in path order.
            #[must_use]
            pub fn fields(&self) -> Vec<(&'static str, &str)> {
                vec![ $( (stringify!($field), self.$field.as_str()), )+ ]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&Self::FORMAT.format(&[ $( self.$field.as_str() ),+ ]))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::ResourceId for $name {
            const FORMAT: $crate::IdFormat = $name::FORMAT;

            fn parse(s: &str) -> Result<Self, $crate::IdError> {
                $name::parse(s)
            }

            fn fields(&self) -> Vec<(&'static str, &str)> {
                $name::fields(self)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let s = <String as $crate::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err($crate::serde::de::Error::custom)
            }
        }
    };
}
