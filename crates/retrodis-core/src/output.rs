//! Cross-reference report.
//!
//! The text layout lists each referenced address followed by one indented
//! line per reference:
//!
//! ```text
//! $2000 PRINT
//!     call      $0010 MAIN
//!     jump      $0020
//! ```

use std::fmt;

use crate::symbol::hex_address;
use crate::XrefKind;

/// One reference inside a report group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportEntry {
    pub kind: XrefKind,
    pub source: u64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub source_label: Option<String>,
}

/// All references to one target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportGroup {
    pub target: u64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
    pub refs: Vec<ReportEntry>,
}

/// Cross-references grouped by ascending target address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct XrefReport {
    pub groups: Vec<ReportGroup>,
}

impl XrefReport {
    /// Total number of references across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.refs.len()).sum()
    }
}

impl fmt::Display for XrefReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            write!(f, "{}", hex_address(group.target, 4))?;
            if let Some(label) = &group.label {
                write!(f, " {}", label)?;
            }
            writeln!(f)?;
            for entry in &group.refs {
                write!(f, "    {:<9} {}", entry.kind.name(), hex_address(entry.source, 4))?;
                if let Some(label) = &entry.source_label {
                    write!(f, " {}", label)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SymbolDatabase;

    fn sample() -> XrefReport {
        let mut db = SymbolDatabase::new();
        db.add_label(0x2000, "PRINT").unwrap();
        db.add_label(0x0010, "MAIN").unwrap();
        db.record_reference(XrefKind::Call, 0x10, 0x2000);
        db.record_reference(XrefKind::Jump, 0x20, 0x2000);
        db.record_reference(XrefKind::Direct, 0x22, 0x0080);
        db.dump()
    }

    #[test]
    fn test_text_layout() {
        let text = sample().to_string();
        let expected = "\
$0080
    direct    $0022
$2000 PRINT
    call      $0010 MAIN
    jump      $0020
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_total() {
        assert_eq!(sample().total(), 3);
        assert_eq!(XrefReport::default().total(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        let group = &json["groups"][1];
        assert_eq!(group["target"], 0x2000);
        assert_eq!(group["label"], "PRINT");
        assert_eq!(group["refs"][0]["kind"], "call");
        assert_eq!(group["refs"][1]["kind"], "jump");
        assert!(group["refs"][1].get("source_label").is_none());
    }
}
