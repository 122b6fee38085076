use fridgesavvy_shared::{Duplicate, NotFound, Result};
use indexmap::IndexMap;

use crate::{Ingredient, Recipe};

/// Recipes keyed by name, kept in creation order.
///
/// Recipe names are unique and a second `create_recipe` is rejected,
/// while re-adding an ingredient to a recipe replaces its quantity and
/// unit.
#[derive(Debug, Default, Clone)]
pub struct RecipeCatalog {
    recipes: IndexMap<String, Recipe>,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_recipe(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.recipes.contains_key(&name) {
            return Err(Duplicate::Recipe(name).into());
        }

        tracing::debug!(recipe = %name, "recipe created");
        self.recipes.insert(name.clone(), Recipe::new(name));

        Ok(())
    }

    pub fn remove_recipe(&mut self, name: &str) -> Result<Recipe> {
        let recipe = self
            .recipes
            .shift_remove(name)
            .ok_or_else(|| NotFound::Recipe(name.to_owned()))?;

        tracing::debug!(recipe = %name, "recipe removed");

        Ok(recipe)
    }

    pub fn add_ingredient(
        &mut self,
        recipe_name: &str,
        ingredient_name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Result<Ingredient> {
        let recipe = self.get_mut(recipe_name)?;
        let ingredient = Ingredient {
            name: ingredient_name.into(),
            quantity,
            unit: unit.into(),
        };

        let previous = recipe.upsert(ingredient.clone());
        tracing::debug!(
            recipe = %recipe_name,
            ingredient = %ingredient.name,
            quantity = ingredient.quantity,
            unit = %ingredient.unit,
            replaced = previous.is_some(),
            "ingredient stored"
        );

        Ok(ingredient)
    }

    /// Fails with `NotFound::Recipe` or `NotFound::Ingredient` depending on
    /// which of the two is missing.
    pub fn remove_ingredient(
        &mut self,
        recipe_name: &str,
        ingredient_name: &str,
    ) -> Result<Ingredient> {
        let recipe = self.get_mut(recipe_name)?;
        let ingredient = recipe
            .remove(ingredient_name)
            .ok_or_else(|| NotFound::Ingredient {
                recipe: recipe_name.to_owned(),
                ingredient: ingredient_name.to_owned(),
            })?;

        tracing::debug!(recipe = %recipe_name, ingredient = %ingredient_name, "ingredient removed");

        Ok(ingredient)
    }

    pub fn get_ingredients(&self, recipe_name: &str) -> Result<Vec<&Ingredient>> {
        Ok(self.get(recipe_name)?.ingredients().collect())
    }

    pub fn list_recipe_names(&self) -> Vec<&str> {
        self.recipes.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> Result<&Recipe> {
        self.recipes
            .get(name)
            .ok_or_else(|| NotFound::Recipe(name.to_owned()).into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Recipe> {
        self.recipes
            .get_mut(name)
            .ok_or_else(|| NotFound::Recipe(name.to_owned()).into())
    }
}
