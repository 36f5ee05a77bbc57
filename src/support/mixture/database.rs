//! Fixed table of component properties.
//!
//! Used to pre-populate mixture rows from a substance name. The exchanger
//! models never read this table; they only see the resolved
//! [`Component`] values.

use crate::support::constraint::ConstraintResult;

use super::{Component, ComponentProperties};

/// A named row of the property table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    /// Substance name.
    pub name: &'static str,
    /// Phase-change properties.
    pub properties: ComponentProperties,
}

impl Entry {
    /// Builds a mixture component for this substance with the given share.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the share lies outside `[0, 1]`.
    pub fn component(&self, share: f64) -> ConstraintResult<Component> {
        Component::new(self.name, share, self.properties)
    }
}

// name, threshold K, liquid kJ/(kg·K), vapor kJ/(kg·K), latent kJ/kg
//
// Graphite is left out: it has no liquid specific heat, and a component
// needs both specific heats to be non-negative numbers.
const TABLE: &[(&str, f64, f64, f64, f64)] = &[
    ("water", 373.0, 4.2, 2.0, 2260.0),
    ("mercury", 629.9, 0.14, 0.146, 294.0),
    ("ethanol", 351.5, 2.44, 1.42, 846.0),
    ("nitrogen", 77.4, 2.04, 1.04, 200.0),
    ("propane", 231.0, 2.38, 1.67, 356.0),
    ("butane", 272.7, 2.22, 1.67, 360.0),
    ("gasoline", 388.0, 2.20, 1.70, 375.0),
    ("glycerol", 563.0, 2.43, 1.95, 924.0),
    ("phenol", 454.9, 2.10, 1.7, 654.0),
    ("hydrogen", 20.2, 9.7, 14.3, 445.0),
    ("lead", 2022.0, 0.15, 0.13, 871.0),
    ("ammonia", 239.8, 4.70, 2.09, 1370.0),
    ("copper", 2835.0, 0.62, 0.20, 4730.0),
    ("iron", 3135.0, 0.82, 0.45, 6770.0),
    ("aluminium", 2792.0, 1.18, 0.90, 10500.0),
    ("lithium", 1615.0, 3.58, 3.58, 20200.0),
    ("diethyl ether", 307.8, 2.19, 1.84, 412.0),
    ("beryllium", 2742.0, 1.82, 1.82, 12700.0),
    ("boron", 4200.0, 2.60, 1.02, 47000.0),
    ("sulfur", 718.0, 1.75, 0.71, 325.0),
    ("sulfuric acid", 610.0, 1.38, 1.40, 787.0),
    ("sodium", 1156.0, 1.25, 0.81, 8000.0),
    ("potassium", 1032.0, 0.76, 0.75, 9560.0),
    ("chlorine", 239.0, 0.48, 0.50, 287.0),
    ("iodine", 457.0, 0.37, 0.17, 199.0),
    ("magnesium", 1363.0, 1.44, 1.02, 8571.0),
    ("calcium", 1757.0, 1.10, 0.65, 6970.0),
    ("zinc", 1180.0, 0.57, 0.52, 1700.0),
    ("tin", 2543.0, 0.30, 0.24, 2960.0),
    ("platinum", 4100.0, 0.51, 0.13, 6000.0),
    ("nickel", 3003.0, 0.75, 0.46, 6000.0),
    ("benzene", 353.25, 1.74, 1.13, 393.0),
    ("toluene", 383.75, 1.70, 1.13, 351.0),
    ("ethyl alcohol", 351.5, 2.44, 1.42, 854.0),
    ("alcohol", 351.52, 2.44, 1.43, 841.0),
];

/// Iterates over every entry in table order.
pub fn entries() -> impl Iterator<Item = Entry> {
    TABLE
        .iter()
        .map(|&(name, threshold, liquid, vapor, latent)| Entry {
            name,
            properties: ComponentProperties::in_working_units(threshold, liquid, vapor, latent),
        })
}

/// Looks up a substance by name, ignoring ASCII case and surrounding
/// whitespace.
#[must_use]
pub fn lookup(name: &str) -> Option<Entry> {
    let name = name.trim();
    entries().find(|entry| entry.name.eq_ignore_ascii_case(name))
}
