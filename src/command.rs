use strum::AsRefStr;

use crate::error::{CommandError, CommandResult};

pub const USAGE_ADD_ITEM: &str = "Usage: add <ItemName> <Category> <ExpiryDate>";
pub const USAGE_ADD_INGREDIENT: &str =
    "Usage: add ingredient <RecipeName> <IngredientName> <Quantity> <Unit>";
pub const USAGE_REMOVE_ITEM: &str = "Usage: remove <ItemName>";
pub const USAGE_REMOVE_RECIPE: &str = "Usage: remove recipe <RecipeName>";
pub const USAGE_REMOVE_INGREDIENT: &str =
    "Usage: remove ingredient <RecipeName> <IngredientName>";
pub const USAGE_CREATE_RECIPE: &str = "Usage: create recipe <RecipeName>";
pub const USAGE_PLAN: &str = "Usage: plan <RecipeName> <Date>";
pub const USAGE_UNPLAN: &str = "Usage: unplan <RecipeName> <Date>";
pub const USAGE_LIST: &str =
    "Usage: list pantry | list recipe <RecipeName> | list recipes | list plans | list expiring";
pub const USAGE_LIST_PANTRY: &str = "Usage: list pantry";
pub const USAGE_LIST_RECIPE: &str = "Usage: list recipe <RecipeName>";
pub const USAGE_LIST_RECIPES: &str = "Usage: list recipes";
pub const USAGE_LIST_PLANS: &str = "Usage: list plans";
pub const USAGE_LIST_EXPIRING: &str = "Usage: list expiring";
pub const USAGE_SUGGEST: &str = "Usage: suggest recipes";
pub const USAGE_GENERATE: &str = "Usage: generate list";

const INCOMPLETE_ADD: &str = "Incomplete 'add' command.";
const INCOMPLETE_REMOVE: &str = "Incomplete 'remove' command.";
const UNKNOWN_LIST: &str =
    "Unknown 'list' command. Use 'pantry', 'recipe', 'recipes', 'plans', or 'expiring'.";

/// One parsed command line. Arguments stay as text except quantities;
/// dates are parsed by the stores so a bad date never mutates anything.
#[derive(Debug, Clone, PartialEq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    AddItem {
        name: String,
        category: String,
        expiry_date: String,
    },
    RemoveItem {
        name: String,
    },
    CreateRecipe {
        name: String,
    },
    RemoveRecipe {
        name: String,
    },
    AddIngredient {
        recipe: String,
        ingredient: String,
        quantity: f64,
        unit: String,
    },
    RemoveIngredient {
        recipe: String,
        ingredient: String,
    },
    Plan {
        recipe: String,
        date: String,
    },
    Unplan {
        recipe: String,
        date: String,
    },
    ListPantry,
    ListRecipe {
        name: String,
    },
    ListRecipes,
    ListPlans,
    ListExpiring,
    SuggestRecipes,
    GenerateList,
    Help,
    Exit,
}

impl Command {
    /// Parse a raw line. Words are separated by single spaces and are
    /// case-sensitive. A blank line yields `Ok(None)`.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let tokens: Vec<&str> = line.split(' ').collect();
        let owned = |i: usize| tokens[i].to_owned();

        let command = match tokens[0] {
            "exit" | "quit" => Command::Exit,
            "help" => Command::Help,
            "add" => match tokens.get(1) {
                None => return Err(CommandError::Usage(INCOMPLETE_ADD)),
                Some(&"ingredient") => {
                    expect_len(&tokens, 6, USAGE_ADD_INGREDIENT)?;
                    Command::AddIngredient {
                        recipe: owned(2),
                        ingredient: owned(3),
                        quantity: parse_quantity(tokens[4])?,
                        unit: owned(5),
                    }
                }
                Some(_) => {
                    expect_len(&tokens, 4, USAGE_ADD_ITEM)?;
                    Command::AddItem {
                        name: owned(1),
                        category: owned(2),
                        expiry_date: owned(3),
                    }
                }
            },
            "remove" => match tokens.get(1) {
                None => return Err(CommandError::Usage(INCOMPLETE_REMOVE)),
                Some(&"ingredient") => {
                    expect_len(&tokens, 4, USAGE_REMOVE_INGREDIENT)?;
                    Command::RemoveIngredient {
                        recipe: owned(2),
                        ingredient: owned(3),
                    }
                }
                Some(&"recipe") => {
                    expect_len(&tokens, 3, USAGE_REMOVE_RECIPE)?;
                    Command::RemoveRecipe { name: owned(2) }
                }
                Some(_) => {
                    expect_len(&tokens, 2, USAGE_REMOVE_ITEM)?;
                    Command::RemoveItem { name: owned(1) }
                }
            },
            "create" => {
                if tokens.get(1) != Some(&"recipe") {
                    return Err(CommandError::Usage(USAGE_CREATE_RECIPE));
                }
                expect_len(&tokens, 3, USAGE_CREATE_RECIPE)?;
                Command::CreateRecipe { name: owned(2) }
            }
            "plan" => {
                expect_len(&tokens, 3, USAGE_PLAN)?;
                Command::Plan {
                    recipe: owned(1),
                    date: owned(2),
                }
            }
            "unplan" => {
                expect_len(&tokens, 3, USAGE_UNPLAN)?;
                Command::Unplan {
                    recipe: owned(1),
                    date: owned(2),
                }
            }
            "list" => match tokens.get(1) {
                None => return Err(CommandError::Usage(USAGE_LIST)),
                Some(&"pantry") => {
                    expect_len(&tokens, 2, USAGE_LIST_PANTRY)?;
                    Command::ListPantry
                }
                Some(&"recipe") => {
                    expect_len(&tokens, 3, USAGE_LIST_RECIPE)?;
                    Command::ListRecipe { name: owned(2) }
                }
                Some(&"recipes") => {
                    expect_len(&tokens, 2, USAGE_LIST_RECIPES)?;
                    Command::ListRecipes
                }
                Some(&"plans") => {
                    expect_len(&tokens, 2, USAGE_LIST_PLANS)?;
                    Command::ListPlans
                }
                Some(&"expiring") => {
                    expect_len(&tokens, 2, USAGE_LIST_EXPIRING)?;
                    Command::ListExpiring
                }
                Some(_) => return Err(CommandError::Usage(UNKNOWN_LIST)),
            },
            "suggest" => {
                if tokens[1..] != ["recipes"] {
                    return Err(CommandError::Usage(USAGE_SUGGEST));
                }
                Command::SuggestRecipes
            }
            "generate" => {
                if tokens[1..] != ["list"] {
                    return Err(CommandError::Usage(USAGE_GENERATE));
                }
                Command::GenerateList
            }
            other => return Err(CommandError::UnknownCommand(other.to_owned())),
        };

        Ok(Some(command))
    }
}

fn expect_len(tokens: &[&str], len: usize, usage: &'static str) -> CommandResult<()> {
    if tokens.len() != len {
        return Err(CommandError::Usage(usage));
    }
    Ok(())
}

fn parse_quantity(text: &str) -> CommandResult<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|quantity| quantity.is_finite())
        .ok_or_else(|| CommandError::InvalidQuantity(text.to_owned()))
}
