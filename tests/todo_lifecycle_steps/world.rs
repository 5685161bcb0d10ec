//! Shared world state for todo lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todolist::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::Todo,
    services::{DeleteTodoOutput, TodoService, TodoServiceError},
};

/// Service type used by the BDD world.
pub type TestTodoService = TodoService<InMemoryTodoRepository, DefaultClock>;

/// Scenario world for todo lifecycle behaviour tests.
pub struct TodoWorld {
    pub service: TestTodoService,
    pub created: Vec<Todo>,
    pub last_lookup: Option<Result<Option<Todo>, TodoServiceError>>,
    pub last_listing: Option<Vec<Todo>>,
    pub delete_outcomes: Vec<DeleteTodoOutput>,
}

impl TodoWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let service = TodoService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            created: Vec::new(),
            last_lookup: None,
            last_listing: None,
            delete_outcomes: Vec::new(),
        }
    }

    /// Returns the first todo created in the scenario.
    pub fn first_created(&self) -> Result<&Todo, eyre::Report> {
        self.created
            .first()
            .ok_or_else(|| eyre::eyre!("no todo was created in this scenario"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
