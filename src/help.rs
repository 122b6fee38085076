const COMMANDS: &[&str] = &[
    "add <ItemName> <Category> <ExpiryDate>",
    "remove <ItemName>",
    "create recipe <RecipeName>",
    "remove recipe <RecipeName>",
    "add ingredient <RecipeName> <IngredientName> <Quantity> <Unit>",
    "remove ingredient <RecipeName> <IngredientName>",
    "plan <RecipeName> <Date>",
    "unplan <RecipeName> <Date>",
    "list pantry",
    "list recipe <RecipeName>",
    "list recipes",
    "list plans",
    "list expiring",
    "suggest recipes",
    "generate list",
    "help",
    "exit | quit",
];

pub fn help_text() -> String {
    let mut text = String::from("Available commands:");
    for command in COMMANDS {
        text.push_str("\n  ");
        text.push_str(command);
    }
    text
}
