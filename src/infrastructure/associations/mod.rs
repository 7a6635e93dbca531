//! Association table loading adapters

pub mod loader;

pub use loader::JsonAssociationLoader;
