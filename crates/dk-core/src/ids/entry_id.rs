use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of a clipboard history entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl_id!(EntryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        let a = EntryId::new();
        let b = EntryId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_created_later_sort_later() {
        let first = EntryId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = EntryId::new();
        assert!(first < second);
    }

    #[test]
    fn legacy_numeric_ids_round_trip() {
        let id = EntryId::from("1718000000000");
        assert_eq!(id.as_str(), "1718000000000");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1718000000000\"");
    }
}
