//! Some utility functions

use crate::state::ClientState;
use crate::Task;

/// A debug utility that pretty-prints the displayed tasks
pub fn print_state(state: &ClientState) {
    let status = if state.is_loading() { " (loading...)" } else { "" };
    println!("TASKS OF {}{}", state.selected_day().as_str().to_uppercase(), status);
    if state.tasks().is_empty() {
        println!("    (no tasks yet)");
    }
    for (index, task) in state.tasks().iter().enumerate() {
        print_task(index + 1, task);
    }
}

pub fn print_task(position: usize, task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    println!("  {:>2}. [{}] {}\t{}", position, completion, task.text(), task.id());
}
