//! Domains module containing business logic organized by bounded contexts.
//!
//! The request pipeline runs `tasks` → `prompts` → `upstream` → `normalize`.

pub mod normalize;
pub mod prompts;
pub mod tasks;
#[cfg(feature = "stdio")]
pub mod tools;
pub mod upstream;
