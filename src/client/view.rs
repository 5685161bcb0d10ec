//! Plain-text rendering of the todo list.

use crate::todo::domain::Todo;

/// Shown instead of the list when there are no todos.
pub const EMPTY_MESSAGE: &str =
    "No todos yet! Create your first todo with `todo add <title>` to get started.";

const CELEBRATION: &str = " 🎉";
const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders one todo as `[x] #id title (created …)`.
#[must_use]
pub fn render_todo(todo: &Todo) -> String {
    let mark = if todo.completed() { "[x]" } else { "[ ]" };
    format!(
        "{mark} #{id} {title} (created {created})",
        id = todo.id(),
        title = todo.title(),
        created = todo.created_at().format(CREATED_FORMAT),
    )
}

/// Renders the `"{completed} of {total} completed"` summary.
///
/// A celebration suffix is added once every todo of a non-empty list is
/// complete.
#[must_use]
pub fn progress_line(list: &[Todo]) -> String {
    let total = list.len();
    let completed = list.iter().filter(|todo| todo.completed()).count();
    let mut line = format!("{completed} of {total} completed");
    if total > 0 && completed == total {
        line.push_str(CELEBRATION);
    }
    line
}

/// Renders the whole list, or [`EMPTY_MESSAGE`] when it is empty.
#[must_use]
pub fn render_list(list: &[Todo]) -> String {
    if list.is_empty() {
        return EMPTY_MESSAGE.to_owned();
    }
    std::iter::once(progress_line(list))
        .chain(list.iter().map(render_todo))
        .collect::<Vec<_>>()
        .join("\n")
}
