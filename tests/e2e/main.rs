//! End-to-end tests driving the interactive menu through the binary.

mod fixture;
mod shell_workflow;
