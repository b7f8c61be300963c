//! Filesystem and process helpers shared by the platform modules.

pub mod fs;
pub mod process;

#[cfg(test)]
pub(crate) mod testing;
