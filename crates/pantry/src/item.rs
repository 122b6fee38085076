use time::Date;

/// A stocked product and the day it goes off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryItem {
    pub name: String,
    pub category: String,
    pub expiry_date: Date,
}

impl PantryItem {
    /// An item expiring today is still good.
    pub fn is_expired(&self, today: Date) -> bool {
        self.expiry_date < today
    }

    /// Negative once the item has expired.
    pub fn days_until_expiry(&self, today: Date) -> i64 {
        (self.expiry_date - today).whole_days()
    }
}
