use std::path::Path;

use tracing::instrument;
use university::University;

use crate::cli::{OutputFormat, open_store, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let store = open_store(root);
        let university = store.university();

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(university)?),
            OutputFormat::Table => print_tree(university),
        }
        Ok(())
    }
}

fn print_tree(university: &University) {
    if university.departments.is_empty() {
        println!("{}", "No departments yet. Add one with 'uni add'.".dim());
        return;
    }

    for department in &university.departments {
        println!("{}", department.name.info());
        for professor in &department.professors {
            println!("  {} {}", professor.name, format!("({})", professor.id).dim());
            for student in &professor.students {
                println!("    • {} {}", student.name, format!("({})", student.id).dim());
            }
        }
    }
}
