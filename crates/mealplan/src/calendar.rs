use fridgesavvy_recipe::RecipeCatalog;
use fridgesavvy_shared::{Duplicate, NotFound, Result, parse_date};
use indexmap::IndexSet;
use time::Date;

/// A recipe scheduled on a day. The recipe is referenced by name only
/// and is looked up in the catalog whenever the plan is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MealPlan {
    pub recipe_name: String,
    pub date: Date,
}

/// Planned meals in the order they were scheduled. A (recipe, date) pair
/// appears at most once.
#[derive(Debug, Default, Clone)]
pub struct MealPlanCalendar {
    plans: IndexSet<MealPlan>,
}

impl MealPlanCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plan(
        &mut self,
        catalog: &RecipeCatalog,
        recipe_name: &str,
        date_text: &str,
    ) -> Result<MealPlan> {
        if !catalog.contains(recipe_name) {
            return Err(NotFound::Recipe(recipe_name.to_owned()).into());
        }

        let plan = MealPlan {
            recipe_name: recipe_name.to_owned(),
            date: parse_date(date_text)?,
        };

        if self.plans.contains(&plan) {
            return Err(Duplicate::Plan {
                recipe: plan.recipe_name,
                date: plan.date,
            }
            .into());
        }

        tracing::debug!(recipe = %plan.recipe_name, date = %plan.date, "meal planned");
        self.plans.insert(plan.clone());

        Ok(plan)
    }

    pub fn unplan(&mut self, recipe_name: &str, date_text: &str) -> Result<MealPlan> {
        let plan = MealPlan {
            recipe_name: recipe_name.to_owned(),
            date: parse_date(date_text)?,
        };

        if !self.plans.shift_remove(&plan) {
            return Err(NotFound::Plan {
                recipe: plan.recipe_name,
                date: plan.date,
            }
            .into());
        }

        tracing::debug!(recipe = %plan.recipe_name, date = %plan.date, "meal unplanned");

        Ok(plan)
    }

    pub fn list_all(&self) -> Vec<&MealPlan> {
        self.plans.iter().collect()
    }

    /// Plans whose recipe still exists in `catalog`.
    pub fn list_planned<'a>(&'a self, catalog: &RecipeCatalog) -> Vec<&'a MealPlan> {
        self.plans
            .iter()
            .filter(|plan| catalog.contains(&plan.recipe_name))
            .collect()
    }

    /// Drop every plan for `recipe_name`, returning how many were dropped.
    pub fn prune_recipe(&mut self, recipe_name: &str) -> usize {
        let before = self.plans.len();
        self.plans.retain(|plan| plan.recipe_name != recipe_name);
        let pruned = before - self.plans.len();

        if pruned > 0 {
            tracing::debug!(recipe = %recipe_name, pruned, "plans pruned");
        }

        pruned
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
