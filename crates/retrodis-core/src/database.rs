//! Combined label and cross-reference state for one disassembly run.

use crate::output::{ReportEntry, ReportGroup, XrefReport};
use crate::symbol::hex_address;
use crate::{Error, SymbolTable, XrefDatabase, XrefKind};

/// Labels plus the reference log, created once per run.
///
/// Decoders hold a `&mut SymbolDatabase` for the duration of one instruction
/// so renderers can substitute labels and record references; callers may add
/// labels between instructions.
#[derive(Debug, Default)]
pub struct SymbolDatabase {
    symbols: SymbolTable,
    xrefs: XrefDatabase,
}

impl SymbolDatabase {
    /// Creates an empty database with an unrestricted reference window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a label to an address. See [`SymbolTable::add_label`].
    pub fn add_label(&mut self, address: u64, name: impl Into<String>) -> Result<(), Error> {
        self.symbols.add_label(address, name)
    }

    /// Looks up the label bound to `address`.
    pub fn find_label(&self, address: u64) -> Option<&str> {
        self.symbols.find_label(address)
    }

    pub fn set_min_bound(&mut self, address: u64) {
        self.xrefs.set_min_bound(address);
    }

    pub fn set_max_bound(&mut self, address: u64) {
        self.xrefs.set_max_bound(address);
    }

    /// Returns true if references to `address` would be recorded.
    pub fn in_range(&self, address: u64) -> bool {
        self.xrefs.in_range(address)
    }

    /// Appends a reference if `target` is inside the window.
    pub fn record_reference(&mut self, kind: XrefKind, source: u64, target: u64) -> bool {
        self.xrefs.record(kind, source, target)
    }

    /// Formats an address for display: its label if bound, otherwise a
    /// `digits`-wide hex literal.
    pub fn format_address(&self, address: u64, digits: usize) -> String {
        match self.symbols.find_label(address) {
            Some(label) => label.to_string(),
            None => hex_address(address, digits),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn xrefs(&self) -> &XrefDatabase {
        &self.xrefs
    }

    /// Builds the cross-reference report, grouped by target address.
    pub fn dump(&self) -> XrefReport {
        let groups = self
            .xrefs
            .groups()
            .into_iter()
            .map(|group| ReportGroup {
                target: group.target,
                label: self.symbols.find_label(group.target).map(str::to_string),
                refs: group
                    .refs
                    .iter()
                    .map(|xref| ReportEntry {
                        kind: xref.kind,
                        source: xref.from,
                        source_label: self.symbols.find_label(xref.from).map(str::to_string),
                    })
                    .collect(),
            })
            .collect();
        XrefReport { groups }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_substitution() {
        let mut db = SymbolDatabase::new();
        assert_eq!(db.format_address(0x1234, 4), "$1234");

        db.add_label(0x1234, "START").unwrap();
        assert_eq!(db.format_address(0x1234, 4), "START");
    }

    #[test]
    fn test_short_address_uses_two_digits() {
        let db = SymbolDatabase::new();
        assert_eq!(db.format_address(0x42, 2), "$42");
    }

    #[test]
    fn test_range_filtering() {
        let mut db = SymbolDatabase::new();
        db.set_min_bound(0x8000);

        db.record_reference(XrefKind::Jump, 0x10, 0x4000);
        assert!(db.dump().groups.is_empty());

        db.record_reference(XrefKind::Jump, 0x10, 0x9000);
        let report = db.dump();
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].target, 0x9000);
        assert_eq!(report.groups[0].refs.len(), 1);
    }

    #[test]
    fn test_dump_groups_in_recording_order() {
        let mut db = SymbolDatabase::new();
        db.record_reference(XrefKind::Call, 0x10, 0x2000);
        db.record_reference(XrefKind::Jump, 0x20, 0x2000);

        let report = db.dump();
        assert_eq!(report.groups.len(), 1);
        let refs = &report.groups[0].refs;
        assert_eq!(refs[0].kind, XrefKind::Call);
        assert_eq!(refs[0].source, 0x10);
        assert_eq!(refs[1].kind, XrefKind::Jump);
        assert_eq!(refs[1].source, 0x20);
    }

    #[test]
    fn test_dump_attaches_labels() {
        let mut db = SymbolDatabase::new();
        db.add_label(0x2000, "PRINT").unwrap();
        db.add_label(0x0010, "MAIN").unwrap();
        db.record_reference(XrefKind::Call, 0x10, 0x2000);

        let report = db.dump();
        assert_eq!(report.groups[0].label.as_deref(), Some("PRINT"));
        assert_eq!(report.groups[0].refs[0].source_label.as_deref(), Some("MAIN"));
    }

    #[test]
    fn test_labels_added_after_recording_show_in_dump() {
        let mut db = SymbolDatabase::new();
        db.record_reference(XrefKind::Data, 0x10, 0x0300);
        db.add_label(0x0300, "BUFFER").unwrap();

        assert_eq!(db.dump().groups[0].label.as_deref(), Some("BUFFER"));
    }
}
