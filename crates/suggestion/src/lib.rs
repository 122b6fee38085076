use fridgesavvy_pantry::PantryStore;
use fridgesavvy_recipe::{Recipe, RecipeCatalog};
use time::Date;

/// Suggestion Engine
///
/// Stateless domain service that lists the recipes the pantry can fully
/// cover at `today`. Matching is by ingredient name only; quantities are
/// ignored.
///
/// A recipe without ingredients is always suggested, since every one of
/// its (zero) ingredients is available.
pub struct SuggestionEngine;

impl SuggestionEngine {
    /// Makeable recipe names, in catalog order.
    pub fn suggest<'a>(
        catalog: &'a RecipeCatalog,
        pantry: &PantryStore,
        today: Date,
    ) -> Vec<&'a str> {
        let suggestions: Vec<&str> = catalog
            .recipes()
            .filter(|recipe| Self::is_makeable(recipe, pantry, today))
            .map(|recipe| recipe.name.as_str())
            .collect();

        tracing::debug!(
            recipes = catalog.len(),
            suggested = suggestions.len(),
            %today,
            "recipe suggestions computed"
        );

        suggestions
    }

    pub fn is_makeable(recipe: &Recipe, pantry: &PantryStore, today: Date) -> bool {
        recipe
            .ingredient_names()
            .all(|name| pantry.is_available(name, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_no_recipes() {
        let catalog = RecipeCatalog::new();
        let mut pantry = PantryStore::new();
        pantry.add_item("Milk", "Dairy", "2025-10-12").unwrap();

        let suggestions = SuggestionEngine::suggest(&catalog, &pantry, date!(2025 - 10 - 10));

        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_empty_recipe_is_always_makeable() {
        let mut catalog = RecipeCatalog::new();
        catalog.create_recipe("Water").unwrap();

        let suggestions =
            SuggestionEngine::suggest(&catalog, &PantryStore::new(), date!(2025 - 10 - 10));

        assert_eq!(suggestions, vec!["Water"]);
    }
}
