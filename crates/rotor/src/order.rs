use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    #[default]
    #[strum(serialize = "storage", serialize = "oldest-first")]
    Storage,
    /// Newest entries (end of storage) are shown at the first position.
    #[strum(serialize = "reversed", serialize = "newest-first")]
    Reversed,
}

impl DisplayOrder {
    pub fn to_storage(self, display_index: usize, count: usize) -> Option<usize> {
        self.map(display_index, count)
    }

    pub fn to_display(self, storage_index: usize, count: usize) -> Option<usize> {
        self.map(storage_index, count)
    }

    // Both directions are the same involution.
    fn map(self, index: usize, count: usize) -> Option<usize> {
        (index < count).then(|| match self {
            Self::Storage => index,
            Self::Reversed => count - 1 - index,
        })
    }

    /// Change in the display index of an existing item when `added` items are appended.
    pub fn append_shift(self, added: usize) -> usize {
        match self {
            Self::Storage => 0,
            Self::Reversed => added,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_order_deserialization() {
        let cases = vec![
            ("\"storage\"", DisplayOrder::Storage),
            ("\"Storage\"", DisplayOrder::Storage),
            ("\"oldest-first\"", DisplayOrder::Storage),
            ("\"REVERSED\"", DisplayOrder::Reversed),
            ("\"newest-first\"", DisplayOrder::Reversed),
        ];

        for (json, expected) in cases {
            let deserialized: DisplayOrder = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert!(serde_json::from_str::<DisplayOrder>("\"sideways\"").is_err());
    }

    #[test]
    fn test_mapping_is_a_bijection() {
        for order in DisplayOrder::iter() {
            for count in 1..6 {
                let mut seen = vec![false; count];
                for display in 0..count {
                    let storage = order.to_storage(display, count).unwrap();
                    assert!(!seen[storage]);
                    seen[storage] = true;
                    assert_eq!(order.to_display(storage, count), Some(display));
                }
            }
        }
    }

    #[test]
    fn test_reversed_mapping() {
        assert_eq!(DisplayOrder::Reversed.to_storage(0, 3), Some(2));
        assert_eq!(DisplayOrder::Reversed.to_storage(2, 3), Some(0));
        assert_eq!(DisplayOrder::Storage.to_storage(2, 3), Some(2));
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(DisplayOrder::Storage.to_storage(3, 3), None);
        assert_eq!(DisplayOrder::Reversed.to_display(0, 0), None);
    }
}
