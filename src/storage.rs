pub mod document;
mod store;

pub use document::{
    BackupError, ReadError, WriteError, backup_document, load_document, save_document,
};
pub use store::{BACKUP_FILE, DOCUMENT_FILE, EntryError, Store, StorePaths};
