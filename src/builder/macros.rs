//! Macros for declaring closed field domains.

/// Declare a closed field domain enum.
///
/// Generates the enum with `Copy`, equality, hashing and serde derives,
/// plus `name()`, an `ALL` list of every variant in declaration order, and
/// a `Display` impl that prints the variant name.
///
/// # Example
///
/// ```
/// use heist_coordinator::field_enum;
///
/// field_enum! {
///     pub enum Door {
///         Shut,
///         Ajar,
///         Open,
///     }
/// }
///
/// assert_eq!(Door::Ajar.name(), "Ajar");
/// assert_eq!(Door::ALL.len(), 3);
/// assert_eq!(Door::Open.to_string(), "Open");
/// ```
#[macro_export]
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    field_enum! {
        enum Lever {
            Up,
            Down,
        }
    }

    #[test]
    fn field_enum_generates_names() {
        assert_eq!(Lever::Up.name(), "Up");
        assert_eq!(Lever::Down.to_string(), "Down");
    }

    #[test]
    fn field_enum_lists_all_variants_in_order() {
        assert_eq!(Lever::ALL, &[Lever::Up, Lever::Down]);
    }

    #[test]
    fn field_enum_supports_visibility_and_attributes() {
        field_enum! {
            /// A documented domain
            pub enum Valve {
                /// Fully open
                Open,
                Closed,
            }
        }

        let valve = Valve::Closed;
        let copy = valve;
        assert_eq!(valve, copy);
        assert_eq!(Valve::ALL, &[Valve::Open, Valve::Closed]);
    }

    #[test]
    fn field_enum_serializes_as_variant_name() {
        let json = serde_json::to_string(&Lever::Down).unwrap();
        assert_eq!(json, "\"Down\"");
        let back: Lever = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Lever::Down);
    }
}
