//! Given steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todolist::todo::{domain::TodoTitle, services::CreateTodoInput};

#[given("an empty todo list")]
fn empty_todo_list(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let todos = run_async(world.service.list()).wrap_err("list todos")?;
    if !todos.is_empty() {
        return Err(eyre::eyre!("expected an empty store, found {}", todos.len()));
    }
    Ok(())
}

#[given(r#"a todo titled "{title}" exists"#)]
fn todo_exists(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    let input = CreateTodoInput {
        title: TodoTitle::new(title).wrap_err("build title")?,
    };
    let created = run_async(world.service.create(input)).wrap_err("create todo")?;
    world.created.push(created);
    Ok(())
}
