use crate::error::ItemError;
use chrono::{DateTime, Utc};
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemName(String);

crate::impl_string_newtype!(ItemName);

impl ItemName {
    /// Trims `raw` and rejects blank names.
    pub fn parse(raw: &str) -> Result<Self, ItemError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ItemError::EmptyName);
        }
        Ok(Self::new(trimmed))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    #[serde(rename = "isChecked", default)]
    pub checked: bool,
    #[serde(rename = "orderIndex", default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(
        rename = "lastClickedDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_interaction: Option<DateTime<Utc>>,
}

impl Item {
    pub fn new(name: ItemName) -> Self {
        Self {
            id: ItemId::random(),
            name,
            checked: false,
            order_index: None,
            last_interaction: None,
        }
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

/// Appends a new unchecked item. The caller is responsible for resyncing the wheel.
pub fn add_item<'a>(items: &'a mut Vec<Item>, name: &str) -> Result<&'a Item, ItemError> {
    let item = Item::new(ItemName::parse(name)?);
    log::info!("Adding item '{}'", item.name);
    items.push(item);
    Ok(&items[items.len() - 1])
}

pub fn sample_items() -> Vec<Item> {
    [
        "Banana", "Spinach", "Milk", "Carrots", "Oats", "Chicken", "Apples", "Bread", "Eggs",
        "Tomatoes",
    ]
    .into_iter()
    .map(|name| Item::new(ItemName::new(name)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parsing() {
        assert_eq!(ItemName::parse("  Milk ").unwrap().as_str(), "Milk");
        assert!(matches!(ItemName::parse(""), Err(ItemError::EmptyName)));
        assert!(matches!(ItemName::parse(" \t"), Err(ItemError::EmptyName)));
    }

    #[test]
    fn test_add_item_appends_unchecked() {
        let mut items = sample_items();
        let added = add_item(&mut items, "Cheese").unwrap().clone();
        assert_eq!(items.len(), 11);
        assert_eq!(items.last(), Some(&added));
        assert!(!added.checked);
        assert!(add_item(&mut items, "   ").is_err());
        assert_eq!(items.len(), 11);
    }

    #[test]
    fn test_item_json_shape() {
        let json = r#"{
            "id": "6F9619FF-8B86-D011-B42D-00CF4FC964FF",
            "name": "Milk",
            "isChecked": true,
            "orderIndex": 2
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.name.as_str(), "Milk");
        assert!(item.checked);
        assert_eq!(item.order_index, Some(2));
        assert_eq!(item.last_interaction, None);

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["isChecked"], true);
        assert_eq!(value["id"], "6f9619ff-8b86-d011-b42d-00cf4fc964ff");
        assert!(value.get("lastClickedDate").is_none());
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let items = sample_items();
        let mut ids: Vec<_> = items.iter().map(|i| i.id).collect();
        ids.sort_by_key(|id| id.to_string());
        ids.dedup();
        assert_eq!(ids.len(), items.len());
        assert_eq!(items[1].name.as_str(), "Spinach");
    }
}
