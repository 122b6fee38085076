use fridgesavvy_mealplan::MealPlanCalendar;
use fridgesavvy_pantry::PantryStore;
use fridgesavvy_recipe::RecipeCatalog;
use indexmap::IndexSet;
use time::Date;

/// Result of a shopping list run.
///
/// `NoPlans` and an empty `Items` are both "nothing to buy", but the first
/// means no meal is planned while the second means everything planned is
/// already in stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingList {
    NoPlans,
    Items(IndexSet<String>),
}

impl ShoppingList {
    /// Missing ingredient names in order of first occurrence.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        let items = match self {
            ShoppingList::NoPlans => None,
            ShoppingList::Items(items) => Some(items.iter().map(String::as_str)),
        };

        items.into_iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ShoppingList::NoPlans => true,
            ShoppingList::Items(items) => items.is_empty(),
        }
    }
}

/// Shopping List Generator
///
/// Stateless domain service that walks every planned meal and collects the
/// ingredients the pantry cannot cover at `today`.
///
/// - Presence only: quantities and units are ignored.
/// - An ingredient needed by several plans is listed once.
/// - Plans whose recipe has been removed are skipped.
pub struct ShoppingListGenerator;

impl ShoppingListGenerator {
    pub fn generate(
        calendar: &MealPlanCalendar,
        catalog: &RecipeCatalog,
        pantry: &PantryStore,
        today: Date,
    ) -> ShoppingList {
        let mut missing = IndexSet::new();
        let mut planned = 0usize;

        for plan in calendar.list_all() {
            let Ok(recipe) = catalog.get(&plan.recipe_name) else {
                tracing::warn!(
                    recipe = %plan.recipe_name,
                    date = %plan.date,
                    "skipping plan for removed recipe"
                );
                continue;
            };

            planned += 1;

            for name in recipe.ingredient_names() {
                if !pantry.is_available(name, today) && !missing.contains(name) {
                    missing.insert(name.to_owned());
                }
            }
        }

        if planned == 0 {
            tracing::debug!("shopping list requested with no planned meals");
            return ShoppingList::NoPlans;
        }

        tracing::debug!(planned, missing = missing.len(), %today, "shopping list generated");

        ShoppingList::Items(missing)
    }
}
