use fridgesavvy_mealplan::{MealPlan, MealPlanCalendar};
use fridgesavvy_pantry::PantryStore;
use fridgesavvy_recipe::RecipeCatalog;
use fridgesavvy_shared::Result;
use fridgesavvy_shopping::{ShoppingList, ShoppingListGenerator};
use fridgesavvy_suggestion::SuggestionEngine;
use time::Date;

/// Everything one user keeps in memory: the pantry, the recipe catalog and
/// the meal plan calendar. Independent instances share nothing.
#[derive(Debug, Default, Clone)]
pub struct Kitchen {
    pub pantry: PantryStore,
    pub recipes: RecipeCatalog,
    pub calendar: MealPlanCalendar,
}

impl Kitchen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plan(&mut self, recipe_name: &str, date_text: &str) -> Result<MealPlan> {
        self.calendar.plan(&self.recipes, recipe_name, date_text)
    }

    /// Remove a recipe together with its plans. Returns the number of
    /// plans dropped.
    pub fn remove_recipe(&mut self, name: &str) -> Result<usize> {
        self.recipes.remove_recipe(name)?;
        Ok(self.calendar.prune_recipe(name))
    }

    pub fn planned_meals(&self) -> Vec<&MealPlan> {
        self.calendar.list_planned(&self.recipes)
    }

    pub fn suggest(&self, today: Date) -> Vec<&str> {
        SuggestionEngine::suggest(&self.recipes, &self.pantry, today)
    }

    pub fn shopping_list(&self, today: Date) -> ShoppingList {
        ShoppingListGenerator::generate(&self.calendar, &self.recipes, &self.pantry, today)
    }
}
