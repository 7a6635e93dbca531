//! iconforge — turns declarative icon association tables into generated
//! Kotlin association-map artifacts and synchronizes them into a
//! version-controlled GitHub wiki.
//!
//! The crate is organized in three layers: `generation` holds the domain
//! types, the generator kinds and the batch sync reducer; `infrastructure`
//! holds the concrete adapters (template sources, filesystem writer,
//! association loader, git collaborator); `application` wires them together
//! behind a single use case.
#![deny(unsafe_code)]

pub mod application;
pub mod generation;
pub mod infrastructure;
