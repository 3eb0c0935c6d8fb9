use std::path::Path;

use clap::Parser;
use tracing::instrument;

use super::{OutputFormat, open_store, terminal::Colorize};

#[derive(Debug, Parser, Default)]
#[command(about = "Show department, professor and student counts")]
pub struct Status {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

impl Status {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let store = open_store(root);
        let university = store.university();

        let departments = university.departments.len();
        let professors = university.professors().count();
        let students = university.students().count();
        let saved = store.paths().document().exists();
        let backed_up = store.paths().backup().exists();

        match self.output {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "departments": departments,
                    "professors": professors,
                    "students": students,
                    "saved": saved,
                    "backup": backed_up,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                if !saved {
                    println!(
                        "{}",
                        "⚠️  No records saved yet. Run 'uni init' to write the example records."
                            .warning()
                    );
                }
                println!("Departments: {departments}");
                println!("Professors:  {professors}");
                println!("Students:    {students}");
                if backed_up {
                    println!(
                        "{}",
                        format!("Backup: {}", store.paths().backup().display()).dim()
                    );
                }
            }
        }
        Ok(())
    }
}
