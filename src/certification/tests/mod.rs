mod checks;
mod common;
mod recommendation;
