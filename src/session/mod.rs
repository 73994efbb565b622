pub(crate) mod config;
pub(crate) mod player;
pub(crate) mod sink;
