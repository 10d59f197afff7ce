//! CLI interface for Codetrail.
//!
//! Each subcommand is non-interactive: arguments in, text out. Progress
//! commands act on one learner, resolved from `--as`, `CODETRAIL_LEARNER`,
//! or the config file.
//!
//! - `codetrail lessons|show`: browse the curriculum.
//! - `codetrail check|complete`: run a unit's validator, and commit on a pass.
//! - `codetrail enroll|status|certificate`: learner progress.
//! - `codetrail render`: playground rendering, no lesson involved.

mod format;
mod learner;
mod lesson;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::identity::{self, Identity, Role};
use crate::model::{Buffers, Field};
use crate::render::{self, PreviewFile, RenderHost};
use crate::storage::Storage;

/// Codetrail: learn web development one validated unit at a time.
#[derive(Debug, Parser)]
#[command(name = "codetrail", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Learner to act as. Overrides `CODETRAIL_LEARNER` and the config file.
    #[arg(long = "as", global = true)]
    learner: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: completing a unit
  1. codetrail --as kim enroll
  2. codetrail --as kim show html-intro
  3. codetrail --as kim check html-intro --markup index.html --preview out.html
  4. codetrail --as kim complete html-intro --markup index.html
  5. codetrail --as kim status"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a progress record positioned on the first unit.
    ///
    /// Does nothing if the learner is already enrolled.
    Enroll,

    /// List every unit by track with its status for this learner.
    Lessons,

    /// Show a unit: description, content, and starting code.
    Show {
        /// Unit key (e.g. `html-intro`).
        key: String,
    },

    /// Run a unit's validator against your code.
    ///
    /// Buffers not given fall back to the unit's starting code.
    Check {
        /// Unit key.
        key: String,

        #[command(flatten)]
        buffers: BufferArgs,

        /// Write a sandboxed preview page of the combined document here.
        #[arg(long)]
        preview: Option<PathBuf>,
    },

    /// Run a unit's validator and, on a pass, record the completion.
    Complete {
        /// Unit key.
        key: String,

        #[command(flatten)]
        buffers: BufferArgs,
    },

    /// Show progress: completion, XP, streak, badges, and where to resume.
    Status {
        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Issue a completion certificate once every unit is done.
    Certificate {
        /// Print the certificate as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List every enrolled learner with their progress. Admins only.
    Roster,

    /// Combine markup, style, and script into one document.
    Render {
        #[command(flatten)]
        buffers: BufferArgs,

        /// Write a sandboxed preview page here instead of printing the document.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Files to load into the three code buffers.
#[derive(Debug, Args)]
pub struct BufferArgs {
    /// File with the markup (HTML) buffer.
    #[arg(long)]
    markup: Option<PathBuf>,

    /// File with the style (CSS) buffer.
    #[arg(long)]
    style: Option<PathBuf>,

    /// File with the script (JavaScript) buffer.
    #[arg(long)]
    script: Option<PathBuf>,
}

impl BufferArgs {
    /// Reads each given file, paired with the buffer it fills.
    fn read(&self) -> Result<Vec<(Field, String)>, String> {
        [
            (Field::Markup, &self.markup),
            (Field::Style, &self.style),
            (Field::Script, &self.script),
        ]
        .into_iter()
        .filter_map(|(field, path)| path.as_deref().map(|p| (field, p)))
        .map(|(field, path)| read_file(path).map(|text| (field, text)))
        .collect()
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config, storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();
    let catalog = Catalog::curriculum().map_err(|e| format!("invalid curriculum: {e}"))?;

    match cli.command {
        Command::Lessons => {
            let identity = identity::resolve(cli.learner.as_deref(), config)?;
            lesson::cmd_lessons(&catalog, storage, &identity)
        }
        Command::Show { key } => lesson::cmd_show(&catalog, &key),
        Command::Check {
            key,
            buffers,
            preview,
        } => lesson::cmd_check(&catalog, &key, &buffers, preview),
        Command::Complete { key, buffers } => {
            let identity = identity::resolve(cli.learner.as_deref(), config)?;
            lesson::cmd_complete(&catalog, config, storage, &identity, &key, &buffers)
        }
        Command::Enroll => {
            let identity = identity::resolve(cli.learner.as_deref(), config)?;
            learner::cmd_enroll(&catalog, storage, &identity)
        }
        Command::Status { json } => {
            let identity = identity::resolve(cli.learner.as_deref(), config)?;
            learner::cmd_status(&catalog, config, storage, &identity, json)
        }
        Command::Certificate { json } => {
            let identity = identity::resolve(cli.learner.as_deref(), config)?;
            learner::cmd_certificate(&catalog, storage, &identity, json)
        }
        Command::Roster => {
            let identity = identity::resolve(cli.learner.as_deref(), config)?;
            learner::cmd_roster(&catalog, storage, &identity)
        }
        Command::Render { buffers, out } => cmd_render(&buffers, out.as_deref()),
    }
}

fn cmd_render(args: &BufferArgs, out: Option<&Path>) -> Result<(), String> {
    let mut buffers = Buffers::default();
    for (field, text) in args.read()? {
        buffers.set(field, text);
    }
    let document = render::render(&buffers);

    match out {
        Some(path) => {
            // Surface write errors here; the host only logs them.
            fs::write(path, render::sandbox_page(&document))
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!("Preview written to {}", path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}

/// Discards mounted documents when no preview was asked for.
struct NoPreview;

impl RenderHost for NoPreview {
    fn mount(&self, _document: &str) {}
}

/// The host a run should mount its document in.
fn preview_host(preview: Option<PathBuf>) -> Box<dyn RenderHost> {
    match preview {
        Some(path) => Box::new(PreviewFile::new(path)),
        None => Box::new(NoPreview),
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

/// Fail unless the learner has the admin role.
fn require_admin(identity: &Identity) -> Result<(), String> {
    match identity.role {
        Role::Admin => Ok(()),
        Role::Learner => Err(format!(
            "{} is not an admin: add them to `admins` in ~/.codetrail/config.toml",
            identity.learner
        )),
    }
}
