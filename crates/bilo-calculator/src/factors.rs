//! Static emission factor table (kg CO2 per unit of activity).
//!
//! Fixed at compile time and never mutated. Lookups are case-insensitive;
//! serialization keeps table order.

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct EmissionFactor {
    /// kg CO2 per unit.
    pub value: f64,
    pub unit: &'static str,
    pub description: &'static str,
}

static TABLE: [(&str, EmissionFactor); 5] = [
    (
        "electricity",
        EmissionFactor { value: 0.5, unit: "kg CO2/kWh", description: "Grid electricity" },
    ),
    (
        "flight",
        EmissionFactor { value: 0.255, unit: "kg CO2/km", description: "Commercial flight" },
    ),
    (
        "car",
        EmissionFactor { value: 0.171, unit: "kg CO2/km", description: "Average car" },
    ),
    (
        "train",
        EmissionFactor { value: 0.041, unit: "kg CO2/km", description: "Train travel" },
    ),
    (
        "gas",
        EmissionFactor { value: 2.0, unit: "kg CO2/m³", description: "Natural gas" },
    ),
];

/// Borrowed view over the table; serializes as `{type: factor, ...}`.
#[derive(Debug, Clone, Copy)]
pub struct FactorTable {
    entries: &'static [(&'static str, EmissionFactor)],
}

impl FactorTable {
    pub fn builtin() -> Self {
        Self { entries: &TABLE }
    }

    pub fn lookup(&self, activity_type: &str) -> Option<&'static EmissionFactor> {
        let key = activity_type.to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, f)| f)
    }

    pub fn activity_types(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }
}

impl Serialize for FactorTable {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(self.entries.len()))?;
        for (name, factor) in self.entries {
            map.serialize_entry(name, factor)?;
        }
        map.end()
    }
}
