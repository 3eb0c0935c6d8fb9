use std::path::Path;

use tracing::instrument;
use university::Id;

use crate::cli::{open_store, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The department of the professor
    department: String,

    /// The professor the student belongs to
    professor: String,

    /// The id of the student to remove
    id: Id,

    /// Skip confirmation prompts
    #[arg(long, short)]
    yes: bool,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut store = open_store(root);

        if !self.yes {
            let Some(student) = store
                .search_entry(&self.department, &self.professor)
                .and_then(|students| students.iter().find(|s| s.id == self.id))
            else {
                // Let the store report which lookup failed.
                store.delete_entry(&self.department, &self.professor, self.id)?;
                return Ok(());
            };

            let proceed = dialoguer::Confirm::new()
                .with_prompt(format!(
                    "Delete {} ({}) from {}?",
                    student.name, student.id, self.professor
                ))
                .default(false)
                .interact()?;
            if !proceed {
                println!("{}", "Cancelled".dim());
                return Ok(());
            }
        }

        let removed = store.delete_entry(&self.department, &self.professor, self.id)?;

        println!(
            "{}",
            format!("✅ Deleted {} ({})", removed.name, removed.id).success()
        );
        Ok(())
    }
}
