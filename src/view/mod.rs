pub(crate) mod animator;
#[allow(clippy::module_inception)]
pub(crate) mod view;
