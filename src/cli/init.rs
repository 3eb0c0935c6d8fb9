use std::path::Path;

use tracing::instrument;
use university::{CONFIG_FILE, Config, Store, StorePaths, University};

use crate::cli::terminal::Colorize;

#[derive(Debug, Default, clap::Parser)]
pub struct Command {
    /// Start from an empty document instead of the example records
    #[arg(long)]
    empty: bool,

    /// Overwrite an existing document
    #[arg(long)]
    force: bool,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let paths = StorePaths::in_dir(root);
        if paths.document().exists() && !self.force {
            anyhow::bail!(
                "Records already initialized (found {}). Use --force to overwrite",
                paths.document().display()
            );
        }

        let university = if self.empty {
            University::default()
        } else {
            University::seed()
        };
        let store = Store::with_document(paths, university);
        store.save()?;
        self.write_config(root)?;

        println!(
            "{}",
            format!(
                "✅ Initialized records in {}",
                store.paths().document().display()
            )
            .success()
        );
        println!();
        println!("Next steps:");
        println!("  uni add \"Computer Science\" \"Dr. Smith\" \"Carol\"");

        Ok(())
    }

    /// Writes `uni.toml` so that a lost document is replaced the same way it
    /// was first created. An existing file is left alone.
    fn write_config(&self, root: &Path) -> anyhow::Result<()> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!("Keeping existing {}", path.display());
            return Ok(());
        }

        let config = Config {
            seed_when_missing: !self.empty,
        };
        config.save(&path).map_err(anyhow::Error::msg)?;
        tracing::info!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn init_writes_seed_document_and_config() {
        let tmp = TempDir::new().unwrap();

        Command::default().run(tmp.path()).unwrap();

        let store = Store::open(StorePaths::in_dir(tmp.path()), &Config::default());
        assert_eq!(store.university(), &University::seed());
        assert_eq!(
            Config::load(&tmp.path().join(CONFIG_FILE)).unwrap(),
            Config::default()
        );
    }

    #[test]
    fn empty_init_keeps_a_lost_document_empty() {
        let tmp = TempDir::new().unwrap();
        let command = Command {
            empty: true,
            force: false,
        };

        command.run(tmp.path()).unwrap();
        std::fs::remove_file(tmp.path().join("university.json")).unwrap();

        let config = Config::load_or_default(tmp.path());
        assert!(!config.seed_when_missing);
        let store = Store::open(StorePaths::in_dir(tmp.path()), &config);
        assert_eq!(store.university(), &University::default());
    }

    #[test]
    fn init_leaves_existing_config_alone() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "_version = \"1\"\nseed_when_missing = false\n").unwrap();

        Command::default().run(tmp.path()).unwrap();

        assert!(!Config::load(&path).unwrap().seed_when_missing);
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        Command::default().run(tmp.path()).unwrap();

        assert!(Command::default().run(tmp.path()).is_err());

        let forced = Command {
            empty: true,
            force: true,
        };
        forced.run(tmp.path()).unwrap();
        let store = Store::open(StorePaths::in_dir(tmp.path()), &Config::default());
        assert!(store.university().departments.is_empty());
    }
}
