use std::path::Path;

use tracing::instrument;

use crate::cli::{open_store, parse_name, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The department, created if it does not exist
    #[clap(value_parser = parse_name)]
    department: String,

    /// The professor, created in the department if they do not exist
    #[clap(value_parser = parse_name)]
    professor: String,

    /// The name of the new student
    #[clap(value_parser = parse_name)]
    student: String,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut store = open_store(root);

        let id = store.add_entry(&self.department, &self.professor, &self.student)?;

        println!(
            "{}",
            format!(
                "✅ Added {} ({id}) under {} in {}",
                self.student, self.professor, self.department
            )
            .success()
        );
        Ok(())
    }
}
