use std::path::{Path, PathBuf};

mod add;
mod delete;
mod init;
mod search;
mod show;
mod status;
mod terminal;
mod update;

use clap::ArgAction;
use status::Status;
use university::{Config, Store, StorePaths, is_valid_name_str};

/// Parse a department, professor or student name.
///
/// Names are checked but stored exactly as given.
fn parse_name(s: &str) -> Result<String, String> {
    if is_valid_name_str(s) {
        Ok(s.to_string())
    } else {
        Err("name must not be empty or whitespace".to_string())
    }
}

/// Open the store in `root`, loading its document if there is one.
fn open_store(root: &Path) -> Store {
    let config = Config::load_or_default(root);
    Store::open(StorePaths::in_dir(root), &config)
}

/// Output format shared by the read-only commands.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Command-line arguments.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The directory holding university.json and its backup
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// Run the selected command, defaulting to `status`.
    ///
    /// # Errors
    ///
    /// Returns the error of the command that ran.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Status(Status::default()))
            .run(&self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
enum Command {
    /// Show record counts (default)
    Status(Status),

    /// Write the example document to start a new record set
    Init(init::Command),

    /// Add a student, creating the department and professor if needed
    Add(add::Command),

    /// Rename a student
    Update(update::Command),

    /// Remove a student
    Delete(delete::Command),

    /// List the students of a professor
    Search(search::Command),

    /// Print the whole record tree
    Show(show::Command),
}

impl Command {
    fn run(self, root: &Path) -> anyhow::Result<()> {
        match self {
            Self::Status(command) => command.run(root),
            Self::Init(command) => command.run(root),
            Self::Add(command) => command.run(root),
            Self::Update(command) => command.run(root),
            Self::Delete(command) => command.run(root),
            Self::Search(command) => command.run(root),
            Self::Show(command) => command.run(root),
        }
    }
}
