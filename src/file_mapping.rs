use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// One relocation entry: where a file lives in the old source tree and where
/// it lands in the new one. Both paths are relative to their tree roots and
/// use forward slashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub old_path: String,
    pub new_path: String,
}

impl MappingEntry {
    pub fn new(old_path: impl Into<String>, new_path: impl Into<String>) -> Self {
        Self {
            old_path: old_path.into(),
            new_path: new_path.into(),
        }
    }
}

/// Ordered table of relocation entries.
///
/// Old paths are unique. Destinations may repeat: the table intentionally
/// carries duplicate logical entries pointing at alternate historical
/// locations for the same eventual destination, and at most one of those old
/// paths exists on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Duplicate old path in mapping table: {0}")]
    DuplicateOldPath(String),
}

impl MappingTable {
    pub fn new(entries: Vec<MappingEntry>) -> Result<Self, MappingError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.old_path.as_str()) {
                return Err(MappingError::DuplicateOldPath(entry.old_path.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_table_preserves_order() {
        let table = MappingTable::new(vec![
            MappingEntry::new("model/User.java", "entity/User.java"),
            MappingEntry::new("model/Car.java", "entity/Car.java"),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].old_path, "model/User.java");
        assert_eq!(table.entries()[1].new_path, "entity/Car.java");
    }

    #[test]
    fn test_mapping_table_rejects_duplicate_old_path() {
        let result = MappingTable::new(vec![
            MappingEntry::new("model/User.java", "entity/User.java"),
            MappingEntry::new("model/User.java", "entity/chat/User.java"),
        ]);

        assert!(matches!(result, Err(MappingError::DuplicateOldPath(p)) if p == "model/User.java"));
    }

    #[test]
    fn test_mapping_table_allows_duplicate_destinations() {
        // Alternate historical locations for the same destination
        let table = MappingTable::new(vec![
            MappingEntry::new("model/Chat.java", "entity/chat/Chat.java"),
            MappingEntry::new("model/chat/Chat.java", "entity/chat/Chat.java"),
        ]);

        assert!(table.is_ok());
    }
}
