//! Affine conversion maps and the per-family N×N conversion table.

use crate::Unit;
use core::marker::PhantomData;

/// An affine map `y = factor · x + offset` between two units of one family.
///
/// Ratio families always have `offset == 0.0`; only absolute temperature uses a non-zero offset.
///
/// ```rust
/// use mensura_core::Conversion;
///
/// let celsius_to_kelvin = Conversion::affine(1.0, 273.15);
/// assert_eq!(celsius_to_kelvin.apply(0.0), 273.15);
/// assert_eq!(celsius_to_kelvin.inverse().apply(273.15), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion {
    factor: f64,
    offset: f64,
}

impl Conversion {
    /// The exact identity.
    pub const IDENTITY: Conversion = Conversion::scale(1.0);

    /// A pure ratio conversion.
    #[inline]
    pub const fn scale(factor: f64) -> Self {
        Self {
            factor,
            offset: 0.0,
        }
    }

    /// A ratio followed by an additive offset.
    #[inline]
    pub const fn affine(factor: f64, offset: f64) -> Self {
        Self { factor, offset }
    }

    /// Multiplicative part.
    #[inline]
    pub const fn factor(self) -> f64 {
        self.factor
    }

    /// Additive part.
    #[inline]
    pub const fn offset(self) -> f64 {
        self.offset
    }

    /// `true` for the exact identity.
    #[inline]
    pub fn is_identity(self) -> bool {
        self.factor == 1.0 && self.offset == 0.0
    }

    /// Maps one value.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        value * self.factor + self.offset
    }

    /// Maps every value of a buffer in place. The identity leaves the buffer untouched.
    pub fn apply_in_place(self, values: &mut [f64]) {
        if self.is_identity() {
            return;
        }
        for value in values.iter_mut() {
            *value = *value * self.factor + self.offset;
        }
    }

    /// The map undoing `self`.
    pub fn inverse(self) -> Self {
        if self.is_identity() {
            return self;
        }
        Self {
            factor: 1.0 / self.factor,
            offset: -self.offset / self.factor,
        }
    }

    /// The map applying `self` first, then `next`.
    pub fn then(self, next: Conversion) -> Self {
        if self.is_identity() {
            return next;
        }
        if next.is_identity() {
            return self;
        }
        Self {
            factor: self.factor * next.factor,
            offset: self.offset * next.factor + next.offset,
        }
    }
}

impl Default for Conversion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Every pairwise conversion of a unit family, stored row-major by `(from, to)`.
///
/// Entry `(A, B)` is composed as `inverse(B → standard) ∘ (A → standard)`. The diagonal is stored as the exact
/// identity, so converting a unit to itself never perturbs a value.
#[derive(Clone, Debug)]
pub struct ConversionTable<U: Unit> {
    entries: Vec<Conversion>,
    _unit: PhantomData<U>,
}

impl<U: Unit> ConversionTable<U> {
    /// Builds the full table from each unit's `to_standard` map.
    pub fn build() -> Self {
        let units = U::ALL;
        let mut entries = Vec::with_capacity(units.len() * units.len());
        for &from in units {
            for &to in units {
                let entry = if from == to {
                    Conversion::IDENTITY
                } else {
                    from.to_standard().then(to.to_standard().inverse())
                };
                entries.push(entry);
            }
        }
        Self {
            entries,
            _unit: PhantomData,
        }
    }

    /// The conversion from `from` to `to`.
    #[inline]
    pub fn get(&self, from: U, to: U) -> Conversion {
        self.entries[from.index() * U::ALL.len() + to.index()]
    }

    /// Number of units on each side of the table.
    pub fn size(&self) -> usize {
        U::ALL.len()
    }
}
