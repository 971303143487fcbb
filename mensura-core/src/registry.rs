//! Per-family registry: conversion table plus spelling lookup.

use crate::conversion::{Conversion, ConversionTable};
use crate::error::{Error, Result};
use crate::Unit;
use log::{debug, trace, warn};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Read-only lookup tables for one unit family.
///
/// Every family owns exactly one registry, built on first use and shared for the rest of the process (see
/// [`Unit::registry`]).
#[derive(Debug)]
pub struct Registry<U: Unit> {
    table: ConversionTable<U>,
    spellings: HashMap<&'static str, U>,
}

impl<U: Unit> Registry<U> {
    /// Builds the conversion table and the spelling map of `U`.
    ///
    /// When an alias is claimed by two units the first claim wins and a warning is logged.
    pub fn build() -> Self {
        let table = ConversionTable::<U>::build();

        let mut spellings = HashMap::new();
        for &unit in U::ALL {
            let names = core::iter::once(unit.abbreviation()).chain(unit.aliases().iter().copied());
            for name in names {
                match spellings.entry(name) {
                    Entry::Vacant(slot) => {
                        slot.insert(unit);
                    }
                    Entry::Occupied(slot) if *slot.get() != unit => {
                        warn!(
                            "{} spelling \"{}\" claimed by both {:?} and {:?}; keeping {:?}",
                            U::FAMILY,
                            name,
                            slot.get(),
                            unit,
                            slot.get()
                        );
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }

        debug!(
            "built {} unit registry: {} units, {} spellings",
            U::FAMILY,
            U::ALL.len(),
            spellings.len()
        );

        Self { table, spellings }
    }

    /// Table entry for `from → to`.
    #[inline]
    pub fn conversion(&self, from: U, to: U) -> Conversion {
        self.table.get(from, to)
    }

    /// The whole conversion table.
    pub fn table(&self) -> &ConversionTable<U> {
        &self.table
    }

    /// Resolves a spelling. Surrounding whitespace is ignored; matching is otherwise exact.
    pub fn lookup(&self, spelling: &str) -> Result<U> {
        let key = spelling.trim();
        match self.spellings.get(key) {
            Some(&unit) => Ok(unit),
            None => {
                trace!("rejected {} spelling \"{}\"", U::FAMILY, key);
                Err(Error::UnrecognizedUnit {
                    family: U::FAMILY,
                    spelling: key.to_string(),
                })
            }
        }
    }

    /// Every accepted spelling with the unit it resolves to, in no particular order.
    pub fn spellings(&self) -> impl Iterator<Item = (&'static str, U)> + '_ {
        self.spellings.iter().map(|(&name, &unit)| (name, unit))
    }
}
