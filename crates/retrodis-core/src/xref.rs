//! Cross-reference (xref) recording.
//!
//! References are appended while instructions are decoded. Each one records
//! where an operand was found, what address it resolved to, and how the
//! instruction uses that address. An optional address window limits the log
//! to a region of interest (RAM, I/O, ...).

use std::collections::BTreeMap;

/// How an instruction refers to an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum XrefKind {
    /// Unclassified; never recorded.
    None,
    /// Conditional or unconditional jump/branch.
    Jump,
    /// Subroutine call.
    Call,
    /// Address loaded as an immediate value.
    Immediate,
    /// Base of an indexed table access.
    Table,
    /// Short (zero-page/direct-page) access.
    Direct,
    /// Absolute data access.
    Data,
    /// Indirect access through a stored pointer.
    Pointer,
    /// Access to a hardware register.
    Register,
}

impl XrefKind {
    /// Returns the lowercase name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Jump => "jump",
            Self::Call => "call",
            Self::Immediate => "immediate",
            Self::Table => "table",
            Self::Direct => "direct",
            Self::Data => "data",
            Self::Pointer => "pointer",
            Self::Register => "register",
        }
    }
}

impl std::fmt::Display for XrefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single cross-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xref {
    /// Address of the referring instruction.
    pub from: u64,
    /// Referenced address.
    pub to: u64,
    /// Type of reference.
    pub kind: XrefKind,
}

/// All references to one target address, in recording order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrefGroup {
    pub target: u64,
    pub refs: Vec<Xref>,
}

/// Append-only reference log with an inclusive target window.
#[derive(Debug, Default)]
pub struct XrefDatabase {
    refs: Vec<Xref>,
    min: Option<u64>,
    max: Option<u64>,
}

impl XrefDatabase {
    /// Create a new empty, unrestricted cross-reference database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lowest target address that will be recorded.
    pub fn set_min_bound(&mut self, address: u64) {
        self.min = Some(address);
    }

    /// Sets the highest target address that will be recorded.
    pub fn set_max_bound(&mut self, address: u64) {
        self.max = Some(address);
    }

    /// Returns true if `address` lies inside the window.
    pub fn in_range(&self, address: u64) -> bool {
        self.min.map_or(true, |min| address >= min) && self.max.map_or(true, |max| address <= max)
    }

    /// Records a reference if its target is inside the window.
    ///
    /// Returns whether the reference was kept. Duplicates are kept.
    pub fn record(&mut self, kind: XrefKind, from: u64, to: u64) -> bool {
        if !self.in_range(to) {
            log::trace!("dropping {} xref {:#06x} -> {:#06x}: outside window", kind, from, to);
            return false;
        }
        self.refs.push(Xref { from, to, kind });
        true
    }

    /// All references in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &Xref> {
        self.refs.iter()
    }

    /// References to `target`, in recording order.
    pub fn refs_to(&self, target: u64) -> Vec<&Xref> {
        self.refs.iter().filter(|x| x.to == target).collect()
    }

    /// Number of recorded references.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Groups references by target, ascending; groups keep recording order.
    pub fn groups(&self) -> Vec<XrefGroup> {
        let mut by_target: BTreeMap<u64, Vec<Xref>> = BTreeMap::new();
        for xref in &self.refs {
            by_target.entry(xref.to).or_default().push(*xref);
        }
        by_target
            .into_iter()
            .map(|(target, refs)| XrefGroup { target, refs })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_by_default() {
        let db = XrefDatabase::new();
        assert!(db.in_range(0));
        assert!(db.in_range(u64::MAX));
    }

    #[test]
    fn test_min_bound_only() {
        let mut db = XrefDatabase::new();
        db.set_min_bound(0x8000);

        assert!(!db.record(XrefKind::Jump, 0x10, 0x4000));
        assert!(db.record(XrefKind::Jump, 0x10, 0x9000));

        assert_eq!(db.len(), 1);
        assert_eq!(db.refs_to(0x9000).len(), 1);
        assert!(db.refs_to(0x4000).is_empty());
    }

    #[test]
    fn test_window_is_inclusive() {
        let mut db = XrefDatabase::new();
        db.set_min_bound(0x0200);
        db.set_max_bound(0x02FF);

        assert!(db.in_range(0x0200));
        assert!(db.in_range(0x02FF));
        assert!(!db.in_range(0x01FF));
        assert!(!db.in_range(0x0300));

        assert!(db.record(XrefKind::Data, 0x1000, 0x02FF));
        assert!(!db.record(XrefKind::Data, 0x1000, 0x0300));
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut db = XrefDatabase::new();
        db.record(XrefKind::Data, 0x1000, 0x20);
        db.record(XrefKind::Data, 0x1000, 0x20);

        assert_eq!(db.len(), 2);
    }

    #[test]
    fn test_groups_sorted_by_target_and_stable() {
        let mut db = XrefDatabase::new();
        db.record(XrefKind::Call, 0x10, 0x2000);
        db.record(XrefKind::Data, 0x18, 0x0040);
        db.record(XrefKind::Jump, 0x20, 0x2000);

        let groups = db.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].target, 0x0040);
        assert_eq!(groups[1].target, 0x2000);

        let kinds: Vec<_> = groups[1].refs.iter().map(|x| (x.kind, x.from)).collect();
        assert_eq!(kinds, [(XrefKind::Call, 0x10), (XrefKind::Jump, 0x20)]);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(XrefKind::Immediate.to_string(), "immediate");
        assert_eq!(XrefKind::Register.name(), "register");
    }
}
