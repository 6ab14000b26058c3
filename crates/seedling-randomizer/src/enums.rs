//! Uniform selection over closed sets of named values.

use std::collections::HashSet;

use seedling_core::error::RandomizerError;

use crate::randomizer::Randomizer;

/// A closed set of symbolic values that can be listed by name.
///
/// Implement it with [`enum_set!`](crate::enum_set) for plain enums.
pub trait EnumSet: Copy + 'static {
    /// Every value, in declaration order.
    const VARIANTS: &'static [Self];

    /// The symbolic name of this value.
    fn name(self) -> &'static str;
}

/// Implement [`EnumSet`] for a field-less enum by listing its variants.
///
/// ```
/// use seedling_randomizer::enum_set;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Suit {
///     Clubs,
///     Hearts,
/// }
///
/// enum_set!(Suit { Clubs, Hearts });
/// ```
#[macro_export]
macro_rules! enum_set {
    ($ty:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::EnumSet for $ty {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

impl Randomizer {
    /// Uniformly chosen value of `T` whose name matches none of `exclude`.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::NotEnumerable` if `T` declares no values, or
    /// `RandomizerError::AllVariantsExcluded` if `exclude` covers them all.
    pub fn enum_value<T: EnumSet>(&self, exclude: &[T]) -> Result<T, RandomizerError> {
        let type_name = std::any::type_name::<T>();
        if T::VARIANTS.is_empty() {
            return Err(RandomizerError::NotEnumerable { type_name });
        }

        let excluded: HashSet<&str> = exclude.iter().map(|value| value.name()).collect();
        let names: Vec<&'static str> = T::VARIANTS
            .iter()
            .map(|value| value.name())
            .filter(|name| !excluded.contains(name))
            .collect();
        if names.is_empty() {
            return Err(RandomizerError::AllVariantsExcluded { type_name });
        }

        let picked = *self.element(&names)?;
        T::VARIANTS
            .iter()
            .copied()
            .find(|value| value.name() == picked)
            .ok_or(RandomizerError::NotEnumerable { type_name })
    }
}
