//! Tests for the line-by-line command runner

use std::fs;
use std::io::Cursor;

use fridgesavvy::Session;
use fridgesavvy::cli::batch;
use fridgesavvy_shared::Clock;
use temp_dir::TempDir;
use time::macros::date;

fn session() -> Session {
    Session::new(Clock::Fixed(date!(2025 - 10 - 10)))
}

#[test]
fn test_batch_skips_blank_lines() -> anyhow::Result<()> {
    let input = "add Milk Dairy 2025-10-12\n\n   \nlist pantry\n";
    let mut output = Vec::new();

    let executed = batch::run(&mut session(), Cursor::new(input), &mut output)?;

    assert_eq!(executed, 2);
    assert_eq!(
        String::from_utf8(output)?,
        "Added item 'Milk' in category 'Dairy' with expiry 2025-10-12.\n\
         Pantry items:\n- Milk (Dairy) – Expires 2025-10-12\n"
    );

    Ok(())
}

#[test]
fn test_batch_stops_on_exit() -> anyhow::Result<()> {
    let input = "create recipe Soup\nquit\ncreate recipe Stew\n";
    let mut output = Vec::new();
    let mut session = session();

    let executed = batch::run(&mut session, Cursor::new(input), &mut output)?;

    assert_eq!(executed, 2);
    assert_eq!(session.kitchen().recipes.list_recipe_names(), vec!["Soup"]);

    Ok(())
}

#[test]
fn test_batch_continues_after_errors() -> anyhow::Result<()> {
    let input = "remove Ghost\nadd Milk Dairy tomorrow\nadd Milk Dairy 2025-10-12\n";
    let mut output = Vec::new();
    let mut session = session();

    let executed = batch::run(&mut session, Cursor::new(input), &mut output)?;

    assert_eq!(executed, 3);
    assert_eq!(session.kitchen().pantry.len(), 1);
    assert_eq!(
        String::from_utf8(output)?.lines().take(2).collect::<Vec<_>>(),
        vec![
            "Error: No pantry item named 'Ghost' found.",
            "Error: Invalid date 'tomorrow'. Expected format: YYYY-MM-DD.",
        ]
    );

    Ok(())
}

#[test]
fn test_run_file_reports_missing_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("missing.txt");

    let err = batch::run_file(&mut session(), &path).unwrap_err();
    assert!(err.to_string().contains("missing.txt"), "{err}");

    fs::write(&path, "help\n")?;
    batch::run_file(&mut session(), &path)?;

    Ok(())
}
