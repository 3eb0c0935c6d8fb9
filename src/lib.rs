//! University Records
//!
//! Departments, professors and students kept in a single JSON document, with
//! a single-slot backup taken before every write.

pub mod domain;
pub use domain::{
    CONFIG_FILE, Config, Department, Id, IdsExhausted, Professor, Student, University,
    is_valid_name, is_valid_name_str,
};

/// JSON persistence and the record store.
pub mod storage;
pub use storage::{BackupError, EntryError, ReadError, Store, StorePaths, WriteError};
