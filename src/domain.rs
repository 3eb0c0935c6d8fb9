//! Domain models for university records.
//!
//! This module contains the record tree (departments, professors and
//! students), identifiers, name validation and configuration.

/// The record tree and its lookup helpers.
pub mod university;
pub use university::{Department, Professor, Student, University};

/// Professor and student identifiers.
pub mod id;
pub use id::{Id, IdGenerator, IdsExhausted};

mod name;
pub use name::{is_valid_name, is_valid_name_str};

mod config;
pub use config::{CONFIG_FILE, Config};
