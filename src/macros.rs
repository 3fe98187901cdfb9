//! Scaffolding shared by the value types.

/// Generates accessors, persistent-style updates, case-insensitive
/// equality and hashing for a struct whose fields are all `Option<String>`.
///
/// For each field `name` this produces:
///
/// - `name(&self) -> Option<&str>`
/// - `with_name(self, value) -> Self`
/// - `without_name(self) -> Self`
macro_rules! value_fields {
    ($type:ident { $($(#[$meta:meta])* $field:ident),+ $(,)? }) => {
        ::paste::paste! {
            impl $type {
                $(
                    $(#[$meta])*
                    #[must_use]
                    pub fn $field(&self) -> Option<&str> {
                        self.$field.as_deref()
                    }

                    #[doc = "Returns a copy with `" $field "` set to `value`."]
                    #[must_use]
                    pub fn [<with_ $field>](self, value: impl Into<String>) -> Self {
                        Self {
                            $field: Some(value.into()),
                            ..self
                        }
                    }

                    #[doc = "Returns a copy with `" $field "` absent."]
                    #[must_use]
                    pub fn [<without_ $field>](self) -> Self {
                        Self {
                            $field: None,
                            ..self
                        }
                    }
                )+

                /// Returns `true` if every field is absent.
                #[must_use]
                pub const fn is_empty(&self) -> bool {
                    $(self.$field.is_none())&&+
                }

                /// Returns a case-insensitive hash of all fields.
                ///
                /// Values that compare equal always produce the same hash code.
                #[must_use]
                pub fn hash_code(&self) -> u64 {
                    use std::hash::{Hash, Hasher};

                    let mut hasher = std::hash::DefaultHasher::new();
                    self.hash(&mut hasher);
                    hasher.finish()
                }
            }

            impl PartialEq for $type {
                fn eq(&self, other: &Self) -> bool {
                    $(crate::text::eq_ignore_case(
                        self.$field.as_deref(),
                        other.$field.as_deref(),
                    ))&&+
                }
            }

            impl Eq for $type {}

            impl std::hash::Hash for $type {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    $(crate::text::hash_ignore_case(self.$field.as_deref(), state);)+
                }
            }

            static_assertions::assert_impl_all!($type: Send, Sync, Clone, Default);
        }
    };
}
