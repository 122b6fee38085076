use fridgesavvy_shared::{NotFound, Result, add_days, parse_date};
use indexmap::IndexMap;
use time::Date;

use crate::PantryItem;

/// Width of the "expiring soon" window, counted from today inclusive.
pub const EXPIRING_SOON_DAYS: u32 = 3;

/// Pantry items keyed by name, kept in insertion order.
///
/// Adding a name that is already stocked replaces the record in place
/// (last write wins), so a name is never held twice.
#[derive(Debug, Default, Clone)]
pub struct PantryStore {
    items: IndexMap<String, PantryItem>,
}

impl PantryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        expiry_date_text: &str,
    ) -> Result<PantryItem> {
        let expiry_date = parse_date(expiry_date_text)?;
        let item = PantryItem {
            name: name.into(),
            category: category.into(),
            expiry_date,
        };

        let previous = self.items.insert(item.name.clone(), item.clone());
        tracing::debug!(
            item = %item.name,
            category = %item.category,
            expiry_date = %item.expiry_date,
            replaced = previous.is_some(),
            "pantry item stored"
        );

        Ok(item)
    }

    pub fn remove_item(&mut self, name: &str) -> Result<PantryItem> {
        let item = self
            .items
            .shift_remove(name)
            .ok_or_else(|| NotFound::PantryItem(name.to_owned()))?;

        tracing::debug!(item = %name, "pantry item removed");

        Ok(item)
    }

    pub fn get(&self, name: &str) -> Option<&PantryItem> {
        self.items.get(name)
    }

    pub fn list_all(&self) -> Vec<&PantryItem> {
        self.items.values().collect()
    }

    /// Items with `today <= expiry_date <= today + 3 days`.
    pub fn list_expiring(&self, today: Date) -> Vec<&PantryItem> {
        self.list_expiring_within(today, EXPIRING_SOON_DAYS)
    }

    pub fn list_expiring_within(&self, today: Date, days: u32) -> Vec<&PantryItem> {
        let cutoff = add_days(today, days);

        self.items
            .values()
            .filter(|item| (today..=cutoff).contains(&item.expiry_date))
            .collect()
    }

    /// True when the item is stocked and not expired at `today`.
    pub fn is_available(&self, name: &str, today: Date) -> bool {
        self.items
            .get(name)
            .is_some_and(|item| !item.is_expired(today))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
