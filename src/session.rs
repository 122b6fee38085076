use fridgesavvy_pantry::EXPIRING_SOON_DAYS;
use fridgesavvy_shared::{Clock, add_days};
use fridgesavvy_shopping::ShoppingList;

use crate::command::Command;
use crate::error::{CommandError, CommandResult};
use crate::help::help_text;
use crate::kitchen::Kitchen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Text produced by one command line and whether the session goes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub flow: Flow,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flow: Flow::Continue,
        }
    }
}

/// Command dispatcher over one [`Kitchen`].
///
/// Each line is parsed, run against the kitchen with today's date from the
/// session clock, and rendered to text. Errors are rendered as
/// `Error: <message>` and never end the session.
#[derive(Debug, Clone)]
pub struct Session {
    kitchen: Kitchen,
    clock: Clock,
    expiring_window_days: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Clock::System)
    }
}

impl Session {
    pub fn new(clock: Clock) -> Self {
        Self {
            kitchen: Kitchen::new(),
            clock,
            expiring_window_days: EXPIRING_SOON_DAYS,
        }
    }

    pub fn with_expiring_window(mut self, days: u32) -> Self {
        self.expiring_window_days = days;
        self
    }

    pub fn kitchen(&self) -> &Kitchen {
        &self.kitchen
    }

    pub fn kitchen_mut(&mut self) -> &mut Kitchen {
        &mut self.kitchen
    }

    pub fn execute(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::text("Enter a command"),
            Err(err) => return rejected("parse", &err),
        };

        let name: &str = command.as_ref();
        let name = name.to_owned();
        match self.run(command) {
            Ok(reply) => reply,
            Err(err) => rejected(&name, &err),
        }
    }

    fn run(&mut self, command: Command) -> CommandResult<Reply> {
        let today = self.clock.today();
        let kitchen = &mut self.kitchen;

        let text = match command {
            Command::AddItem {
                name,
                category,
                expiry_date,
            } => {
                let item = kitchen.pantry.add_item(name, category, &expiry_date)?;
                format!(
                    "Added item '{}' in category '{}' with expiry {}.",
                    item.name, item.category, item.expiry_date
                )
            }
            Command::RemoveItem { name } => {
                kitchen.pantry.remove_item(&name)?;
                format!("Removed item '{name}' from pantry.")
            }
            Command::CreateRecipe { name } => {
                kitchen.recipes.create_recipe(name.as_str())?;
                format!("Created empty recipe '{name}'.")
            }
            Command::RemoveRecipe { name } => match kitchen.remove_recipe(&name)? {
                0 => format!("Removed recipe '{name}'."),
                pruned => {
                    format!("Removed recipe '{name}'. Also removed {pruned} planned occurrence(s).")
                }
            },
            Command::AddIngredient {
                recipe,
                ingredient,
                quantity,
                unit,
            } => {
                let ingredient = kitchen
                    .recipes
                    .add_ingredient(&recipe, ingredient, quantity, unit)?;
                format!(
                    "Added ingredient '{}' to recipe '{recipe}': {} {}.",
                    ingredient.name, ingredient.quantity, ingredient.unit
                )
            }
            Command::RemoveIngredient { recipe, ingredient } => {
                kitchen.recipes.remove_ingredient(&recipe, &ingredient)?;
                format!("Removed ingredient '{ingredient}' from recipe '{recipe}'.")
            }
            Command::Plan { recipe, date } => {
                let plan = kitchen.plan(&recipe, &date)?;
                format!("Planned recipe '{}' on {}.", plan.recipe_name, plan.date)
            }
            Command::Unplan { recipe, date } => {
                let plan = kitchen.calendar.unplan(&recipe, &date)?;
                format!(
                    "Removed planned recipe '{}' on {}.",
                    plan.recipe_name, plan.date
                )
            }
            Command::ListPantry => {
                let mut items = kitchen.pantry.list_all();
                if items.is_empty() {
                    "Pantry is empty.".to_owned()
                } else {
                    items.sort_by_key(|item| item.expiry_date);
                    listing(
                        "Pantry items:",
                        items.into_iter().map(|item| {
                            format!(
                                "- {} ({}) – Expires {}",
                                item.name, item.category, item.expiry_date
                            )
                        }),
                    )
                }
            }
            Command::ListRecipe { name } => {
                let ingredients = kitchen.recipes.get_ingredients(&name)?;
                if ingredients.is_empty() {
                    format!("Recipe '{name}' has no ingredients.")
                } else {
                    listing(
                        format!("Ingredients for recipe '{name}':"),
                        ingredients.into_iter().map(|ingredient| {
                            format!(
                                "{} – {} {}",
                                ingredient.name, ingredient.quantity, ingredient.unit
                            )
                        }),
                    )
                }
            }
            Command::ListRecipes => {
                let names = kitchen.recipes.list_recipe_names();
                if names.is_empty() {
                    "No recipes available.".to_owned()
                } else {
                    listing("Recipes:", names.into_iter().map(|name| format!("- {name}")))
                }
            }
            Command::ListPlans => {
                let plans = kitchen.planned_meals();
                if plans.is_empty() {
                    "No meals planned.".to_owned()
                } else {
                    listing(
                        "Planned meals:",
                        plans
                            .into_iter()
                            .map(|plan| format!("- {}: {}", plan.date, plan.recipe_name)),
                    )
                }
            }
            Command::ListExpiring => {
                let days = self.expiring_window_days;
                let mut items = kitchen.pantry.list_expiring_within(today, days);
                if items.is_empty() {
                    format!("No items expiring within the next {days} days.")
                } else {
                    items.sort_by_key(|item| item.expiry_date);
                    listing(
                        format!(
                            "Items expiring between {today} and {}:",
                            add_days(today, days)
                        ),
                        items.into_iter().map(|item| {
                            format!(
                                "- {} ({}) – Expires {} (in {} day(s))",
                                item.name,
                                item.category,
                                item.expiry_date,
                                item.days_until_expiry(today)
                            )
                        }),
                    )
                }
            }
            Command::SuggestRecipes => {
                let suggestions = kitchen.suggest(today);
                if kitchen.recipes.is_empty() {
                    "No recipes available.".to_owned()
                } else if suggestions.is_empty() {
                    "No recipes can be fully prepared with current pantry items.".to_owned()
                } else {
                    listing(
                        "You can prepare the following recipes with your current pantry:",
                        suggestions.into_iter().map(|name| format!("- {name}")),
                    )
                }
            }
            Command::GenerateList => match kitchen.shopping_list(today) {
                ShoppingList::NoPlans => "No meals planned. Shopping list is empty.".to_owned(),
                list if list.is_empty() => {
                    "All planned ingredients are already available in your pantry. No shopping needed!"
                        .to_owned()
                }
                list => listing(
                    "Shopping list (missing ingredients for planned meals):",
                    list.items().map(|name| format!("- {name}")),
                ),
            },
            Command::Help => help_text(),
            Command::Exit => {
                return Ok(Reply {
                    text: "Goodbye!".to_owned(),
                    flow: Flow::Exit,
                });
            }
        };

        Ok(Reply::text(text))
    }
}

/// Header line followed by one line per entry.
fn listing(header: impl Into<String>, lines: impl Iterator<Item = String>) -> String {
    std::iter::once(header.into())
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

fn rejected(command: &str, err: &CommandError) -> Reply {
    match err.kind() {
        Some(kind) => tracing::debug!(command, %kind, error = %err, "command failed"),
        None => tracing::debug!(command, error = %err, "command rejected"),
    }

    Reply::text(format!("Error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn session() -> Session {
        Session::new(Clock::Fixed(date!(2025 - 10 - 10)))
    }

    #[test]
    fn test_blank_line_prompts_for_command() {
        let reply = session().execute("");
        assert_eq!(reply, Reply::text("Enter a command"));
    }

    #[test]
    fn test_exit_and_quit_stop_the_session() {
        let mut session = session();
        assert_eq!(session.execute("exit").flow, Flow::Exit);
        assert_eq!(session.execute("quit").text, "Goodbye!");
    }

    #[test]
    fn test_errors_do_not_stop_the_session() {
        let mut session = session();
        let reply = session.execute("remove Ghost");
        assert_eq!(reply.text, "Error: No pantry item named 'Ghost' found.");
        assert_eq!(reply.flow, Flow::Continue);
    }

    #[test]
    fn test_remove_recipe_mentions_dropped_plans_only_when_any() {
        let mut session = session();
        session.execute("create recipe Soup");
        assert_eq!(
            session.execute("remove recipe Soup").text,
            "Removed recipe 'Soup'."
        );

        session.execute("create recipe Soup");
        session.execute("plan Soup 2025-10-11");
        assert_eq!(
            session.execute("remove recipe Soup").text,
            "Removed recipe 'Soup'. Also removed 1 planned occurrence(s)."
        );
    }

    #[test]
    fn test_listing_joins_lines() {
        assert_eq!(listing("Recipes:", std::iter::empty()), "Recipes:");
        assert_eq!(
            listing("Recipes:", ["- Soup", "- Stew"].into_iter().map(String::from)),
            "Recipes:\n- Soup\n- Stew"
        );
    }

    #[test]
    fn test_ingredient_quantity_display() {
        let mut session = session();
        session.execute("create recipe Pasta");
        assert_eq!(
            session.execute("add ingredient Pasta TomatoSauce 200 ml").text,
            "Added ingredient 'TomatoSauce' to recipe 'Pasta': 200 ml."
        );
        assert_eq!(
            session.execute("add ingredient Pasta Oil 1.5 tbsp").text,
            "Added ingredient 'Oil' to recipe 'Pasta': 1.5 tbsp."
        );
    }

    #[test]
    fn test_expiring_window_is_configurable() {
        let mut session = session().with_expiring_window(7);
        session.execute("add Milk Dairy 2025-10-16");
        assert_eq!(
            session.execute("list expiring").text,
            "Items expiring between 2025-10-10 and 2025-10-17:\n- Milk (Dairy) – Expires 2025-10-16 (in 6 day(s))"
        );
    }
}
