//! Then steps for board aggregation BDD scenarios.

use super::world::{BoardWorld, names};
use rstest_bdd_macros::then;

#[then(r#"the board is named "{name}""#)]
fn board_is_named(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let board = world.board()?;
    eyre::ensure!(
        board.name == name,
        "expected board name {name}, found {}",
        board.name
    );
    Ok(())
}

#[then(r#"the board columns are "{columns}""#)]
fn board_columns_are(world: &BoardWorld, columns: String) -> Result<(), eyre::Report> {
    let board = world.board()?;
    let actual: Vec<String> = board
        .columns
        .iter()
        .map(|column| column.name.clone())
        .collect();
    let expected = names(&columns);
    eyre::ensure!(
        actual == expected,
        "expected columns {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"column "{column}" holds tasks "{tasks}""#)]
fn column_holds_tasks(world: &BoardWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let board = world.board()?;
    let found = board
        .columns
        .iter()
        .find(|candidate| candidate.name == column)
        .ok_or_else(|| eyre::eyre!("missing column {column}"))?;
    let actual: Vec<String> = found.tasks.iter().map(|task| task.title.clone()).collect();
    let expected = names(&tasks);
    eyre::ensure!(
        actual == expected,
        "expected tasks {expected:?} in {column}, found {actual:?}"
    );
    Ok(())
}

#[then("the board is empty")]
fn board_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    let board = world.board()?;
    eyre::ensure!(board.name.is_empty(), "expected no board name");
    eyre::ensure!(board.columns.is_empty(), "expected no columns");
    Ok(())
}
