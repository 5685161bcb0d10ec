//! When steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use todolist::todo::{
    domain::{TodoId, TodoTitle},
    services::{CreateTodoInput, DeleteTodoInput, GetTodoInput, UpdateTodoInput},
};

#[when(r#"a todo titled "{title}" is created"#)]
fn create_todo(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    let input = CreateTodoInput {
        title: TodoTitle::new(title).wrap_err("build title")?,
    };
    let created = run_async(world.service.create(input)).wrap_err("create todo")?;
    world.created.push(created);
    Ok(())
}

#[when("the todo is marked completed")]
fn mark_completed(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let id = world.first_created()?.id();
    let input = UpdateTodoInput::new(id).with_completed(true);
    world.last_lookup = Some(run_async(world.service.update(input)));
    Ok(())
}

#[when(r#"the todo is renamed to "{title}""#)]
fn rename(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.first_created()?.id();
    let input = UpdateTodoInput::new(id).with_title(TodoTitle::new(title).wrap_err("build title")?);
    world.last_lookup = Some(run_async(world.service.update(input)));
    Ok(())
}

#[when("all todos are listed")]
fn list_todos(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    world.last_listing = Some(run_async(world.service.list()).wrap_err("list todos")?);
    Ok(())
}

#[when("the first todo is deleted twice")]
fn delete_twice(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let input = DeleteTodoInput {
        id: world.first_created()?.id(),
    };
    for _ in 0..2 {
        let outcome = run_async(world.service.delete(input)).wrap_err("delete todo")?;
        world.delete_outcomes.push(outcome);
    }
    Ok(())
}

#[when("todo {id:i32} is requested")]
fn request_todo(world: &mut TodoWorld, id: i32) {
    let input = GetTodoInput { id: TodoId::new(id) };
    world.last_lookup = Some(run_async(world.service.get(input)));
}

#[when("todo {id:i32} is marked completed")]
fn complete_by_id(world: &mut TodoWorld, id: i32) {
    let input = UpdateTodoInput::new(TodoId::new(id)).with_completed(true);
    world.last_lookup = Some(run_async(world.service.update(input)));
}
