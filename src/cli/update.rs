use std::path::Path;

use tracing::instrument;
use university::Id;

use crate::cli::{open_store, parse_name, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The department of the professor
    department: String,

    /// The professor the student belongs to
    professor: String,

    /// The id of the student to rename
    id: Id,

    /// The student's new name
    #[clap(value_parser = parse_name)]
    name: String,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut store = open_store(root);

        store.update_entry(&self.department, &self.professor, self.id, &self.name)?;

        println!(
            "{}",
            format!("✅ Renamed student {} to {}", self.id, self.name).success()
        );
        Ok(())
    }
}
