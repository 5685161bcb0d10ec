//! Then steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use todolist::todo::{domain::Todo, services::GetTodoInput};

fn stored_todo(world: &TodoWorld) -> Result<Todo, eyre::Report> {
    let id = world.first_created()?.id();
    run_async(world.service.get(GetTodoInput { id }))
        .wrap_err("fetch stored todo")?
        .ok_or_else(|| eyre::eyre!("todo {id} is missing from the store"))
}

#[then("the created todo is pending with matching timestamps")]
fn created_todo_is_pending(world: &TodoWorld) -> Result<(), eyre::Report> {
    let created = world.first_created()?;
    if created.completed() {
        return Err(eyre::eyre!("expected a pending todo"));
    }
    if created.created_at() != created.updated_at() {
        return Err(eyre::eyre!(
            "expected created_at and updated_at to match at creation"
        ));
    }
    Ok(())
}

#[then("fetching the created todo returns the same record")]
fn fetch_returns_same_record(world: &TodoWorld) -> Result<(), eyre::Report> {
    let fetched = stored_todo(world)?;
    if &fetched != world.first_created()? {
        return Err(eyre::eyre!("fetched todo differs from the created todo"));
    }
    Ok(())
}

#[then("the stored todo is completed")]
fn stored_todo_is_completed(world: &TodoWorld) -> Result<(), eyre::Report> {
    if !stored_todo(world)?.completed() {
        return Err(eyre::eyre!("expected the stored todo to be completed"));
    }
    Ok(())
}

#[then("the stored todo is pending")]
fn stored_todo_is_pending(world: &TodoWorld) -> Result<(), eyre::Report> {
    if stored_todo(world)?.completed() {
        return Err(eyre::eyre!("expected the stored todo to be pending"));
    }
    Ok(())
}

#[then(r#"the stored todo is titled "{title}""#)]
fn stored_todo_has_title(world: &TodoWorld, title: String) -> Result<(), eyre::Report> {
    let stored = stored_todo(world)?;
    if stored.title().as_str() != title {
        return Err(eyre::eyre!(
            "expected title {title:?}, found {:?}",
            stored.title().as_str()
        ));
    }
    Ok(())
}

#[then("the stored todo was modified after it was created")]
fn stored_todo_was_modified(world: &TodoWorld) -> Result<(), eyre::Report> {
    let stored = stored_todo(world)?;
    if stored.updated_at() <= stored.created_at() {
        return Err(eyre::eyre!("expected updated_at to move past created_at"));
    }
    Ok(())
}

#[then(r#"the listed titles are "{titles}""#)]
fn listed_titles(world: &TodoWorld, titles: String) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing in scenario world"))?;
    let actual: Vec<&str> = listing.iter().map(|todo| todo.title().as_str()).collect();
    let expected: Vec<&str> = titles.split(", ").collect();
    if actual != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the first delete succeeds and the second reports nothing deleted")]
fn delete_outcomes(world: &TodoWorld) -> Result<(), eyre::Report> {
    let successes: Vec<bool> = world
        .delete_outcomes
        .iter()
        .map(|outcome| outcome.success)
        .collect();
    if successes != [true, false] {
        return Err(eyre::eyre!("unexpected delete outcomes {successes:?}"));
    }
    Ok(())
}

#[then("no todo is returned")]
fn no_todo_returned(world: &TodoWorld) -> Result<(), eyre::Report> {
    match world.last_lookup.as_ref() {
        Some(Ok(None)) => Ok(()),
        Some(Ok(Some(todo))) => Err(eyre::eyre!("expected no todo, found {todo:?}")),
        Some(Err(err)) => Err(eyre::eyre!("lookup failed: {err}")),
        None => Err(eyre::eyre!("missing lookup result in scenario world")),
    }
}
