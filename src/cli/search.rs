use std::path::Path;

use tracing::instrument;

use crate::cli::{OutputFormat, open_store, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The department to look in
    department: String,

    /// The professor whose students are listed
    professor: String,

    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let store = open_store(root);

        let Some(students) = store.search_entry(&self.department, &self.professor) else {
            anyhow::bail!(
                "No data found for {} in {}",
                self.professor,
                self.department
            );
        };

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(students)?),
            OutputFormat::Table => {
                println!(
                    "{}",
                    format!("{} / {}", self.department, self.professor).info()
                );
                if students.is_empty() {
                    println!("  {}", "(no students)".dim());
                }
                for student in students {
                    println!("  {:>14}  {}", student.id, student.name);
                }
            }
        }
        Ok(())
    }
}
