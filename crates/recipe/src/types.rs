use indexmap::IndexMap;

/// A required ingredient. Quantity and unit are kept for display only.
#[derive(Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Recipe {
    pub name: String,
    ingredients: IndexMap<String, Ingredient>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: IndexMap::new(),
        }
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }

    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.keys().map(String::as_str)
    }

    pub fn has_ingredients(&self) -> bool {
        !self.ingredients.is_empty()
    }

    /// Returns the ingredient it replaced, if any.
    pub(crate) fn upsert(&mut self, ingredient: Ingredient) -> Option<Ingredient> {
        self.ingredients.insert(ingredient.name.clone(), ingredient)
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Ingredient> {
        self.ingredients.shift_remove(name)
    }
}
