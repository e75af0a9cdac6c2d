pub(crate) mod verify;
pub(crate) mod writer;
