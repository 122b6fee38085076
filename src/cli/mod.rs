pub mod batch;
pub mod repl;
