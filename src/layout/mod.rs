pub(crate) mod engine;
pub(crate) mod grid;
pub(crate) mod shape;
