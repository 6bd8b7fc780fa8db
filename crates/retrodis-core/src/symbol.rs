//! Address labels.

use std::collections::BTreeMap;

use crate::Error;

/// A label bound to an address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    /// Address the label names.
    pub address: u64,
    /// Label text.
    pub name: String,
}

/// Address → label bindings, one label per address.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    labels: BTreeMap<u64, String>,
}

impl SymbolTable {
    /// Creates a new empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `address`.
    ///
    /// Rebinding the same text is a no-op. Binding a different label to an
    /// address that already has one fails with [`Error::LabelConflict`].
    pub fn add_label(&mut self, address: u64, name: impl Into<String>) -> Result<(), Error> {
        let name = name.into();
        match self.labels.get(&address) {
            Some(existing) if *existing == name => {
                log::debug!("label {} already bound at {:#06x}", name, address);
                Ok(())
            }
            Some(existing) => Err(Error::label_conflict(address, existing.clone(), name)),
            None => {
                self.labels.insert(address, name);
                Ok(())
            }
        }
    }

    /// Looks up the label bound to `address`.
    pub fn find_label(&self, address: u64) -> Option<&str> {
        self.labels.get(&address).map(|s| s.as_str())
    }

    /// Iterates over all labels in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.labels.iter().map(|(&address, name)| Symbol {
            address,
            name: name.clone(),
        })
    }

    /// Number of bound labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if no label is bound.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Formats `address` as a `$`-prefixed, zero-padded uppercase hex literal.
pub fn hex_address(address: u64, digits: usize) -> String {
    format!("${:0width$X}", address, width = digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_find() {
        let mut table = SymbolTable::new();
        table.add_label(0x1234, "START").unwrap();

        assert_eq!(table.find_label(0x1234), Some("START"));
        assert_eq!(table.find_label(0x1235), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_identical_rebind_is_noop() {
        let mut table = SymbolTable::new();
        table.add_label(0x10, "PTR").unwrap();
        table.add_label(0x10, "PTR").unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.find_label(0x10), Some("PTR"));
    }

    #[test]
    fn test_conflicting_label_is_rejected() {
        let mut table = SymbolTable::new();
        table.add_label(0x10, "PTR").unwrap();

        let err = table.add_label(0x10, "OTHER").unwrap_err();
        assert_eq!(err, Error::label_conflict(0x10, "PTR", "OTHER"));
        // The original binding survives.
        assert_eq!(table.find_label(0x10), Some("PTR"));
    }

    #[test]
    fn test_iter_is_address_ordered() {
        let mut table = SymbolTable::new();
        table.add_label(0xFFFE, "VECTOR").unwrap();
        table.add_label(0x0000, "ZERO").unwrap();
        table.add_label(0x8000, "MAIN").unwrap();

        let names: Vec<_> = table.iter().map(|s| s.name).collect();
        assert_eq!(names, ["ZERO", "MAIN", "VECTOR"]);
    }

    #[test]
    fn test_hex_address_widths() {
        assert_eq!(hex_address(0x1234, 4), "$1234");
        assert_eq!(hex_address(0x12, 2), "$12");
        assert_eq!(hex_address(0x0a, 4), "$000A");
    }
}
