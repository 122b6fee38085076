use fridgesavvy_recipe::{Ingredient, RecipeCatalog};
use fridgesavvy_shared::{Error, NotFound};

fn ingredient(name: &str, quantity: f64, unit: &str) -> Ingredient {
    Ingredient {
        name: name.to_owned(),
        quantity,
        unit: unit.to_owned(),
    }
}

#[test]
fn test_readding_an_ingredient_overwrites_quantity_and_unit() -> anyhow::Result<()> {
    let mut catalog = RecipeCatalog::new();
    catalog.create_recipe("Pasta")?;
    catalog.add_ingredient("Pasta", "Spaghetti", 150.0, "g")?;
    catalog.add_ingredient("Pasta", "TomatoSauce", 200.0, "ml")?;
    catalog.add_ingredient("Pasta", "Spaghetti", 0.5, "kg")?;

    let ingredients = catalog.get_ingredients("Pasta")?;
    assert_eq!(
        ingredients,
        vec![
            &ingredient("Spaghetti", 0.5, "kg"),
            &ingredient("TomatoSauce", 200.0, "ml"),
        ]
    );

    Ok(())
}

#[test]
fn test_add_then_remove_ingredient_round_trips() -> anyhow::Result<()> {
    let mut catalog = RecipeCatalog::new();
    catalog.create_recipe("Salad")?;
    catalog.add_ingredient("Salad", "Lettuce", 1.0, "head")?;
    catalog.add_ingredient("Salad", "Cucumber", 1.0, "whole")?;
    let before: Vec<Ingredient> = catalog
        .get_ingredients("Salad")?
        .into_iter()
        .cloned()
        .collect();

    catalog.add_ingredient("Salad", "Tomato", 100.0, "g")?;
    catalog.remove_ingredient("Salad", "Tomato")?;

    let after: Vec<Ingredient> = catalog
        .get_ingredients("Salad")?
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(before, after);

    Ok(())
}

#[test]
fn test_list_recipe_names_in_creation_order() -> anyhow::Result<()> {
    let mut catalog = RecipeCatalog::new();
    assert!(catalog.list_recipe_names().is_empty());

    catalog.create_recipe("Soup")?;
    catalog.create_recipe("Pasta")?;
    catalog.create_recipe("Curry")?;
    catalog.remove_recipe("Pasta")?;

    assert_eq!(catalog.list_recipe_names(), vec!["Soup", "Curry"]);

    Ok(())
}

#[test]
fn test_lookups_on_missing_recipe() {
    let mut catalog = RecipeCatalog::new();
    let missing = Error::from(NotFound::Recipe("Ghost".to_owned()));

    assert_eq!(catalog.get_ingredients("Ghost").unwrap_err(), missing);
    assert_eq!(catalog.remove_recipe("Ghost").unwrap_err(), missing);
}

#[test]
fn test_new_recipe_has_no_ingredients() -> anyhow::Result<()> {
    let mut catalog = RecipeCatalog::new();
    catalog.create_recipe("Toast")?;

    assert!(catalog.get_ingredients("Toast")?.is_empty());
    assert!(!catalog.get("Toast")?.has_ingredients());

    Ok(())
}
