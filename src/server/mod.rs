//! Accept loop that hands each connection to its own task.

pub mod listener;
