//! Command-line arguments using clap's derive API.
//!
//! Argument structs carry the clap attributes and convert into the plain
//! parameter types of `tripist_core::params`, so the core crate stays free
//! of CLI framework derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Syncer
//! ```
//!
//! Values that fall back to the configuration file (checklist path, cutoff
//! days) are left as `Option`s here and resolved by the handlers.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::{Timestamp, Zoned};
use tripist_core::params::{Cutoff, ExpandChecklist, ProjectName};

/// Turn upcoming trips into dated checklist projects
///
/// Tripist expands a travel checklist against each trip's travel window and
/// keeps one tracker project per trip in step with it. Running a sync again
/// only writes what changed.
#[derive(Parser)]
#[command(version, about, name = "tripist")]
pub struct Args {
    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/tripist/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite tracker database. Defaults to
    /// $XDG_DATA_HOME/tripist/tripist.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the travel checklist
    #[command(alias = "c")]
    Checklist {
        #[command(subcommand)]
        command: ChecklistCommands,
    },
    /// Print the tasks a checklist expands to for a travel window
    #[command(alias = "e")]
    Expand(ExpandArgs),
    /// Reconcile upcoming trips into the tracker
    #[command(alias = "s")]
    Sync(SyncArgs),
    /// Browse tracker projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Check that the tracker behaves the way syncing expects
    Verify,
}

#[derive(Subcommand)]
pub enum ChecklistCommands {
    /// Load the checklist and report malformed lines
    Check(CheckArgs),
}

#[derive(ClapArgs)]
pub struct CheckArgs {
    /// Checklist file, overriding the configured one
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Expand the checklist for an ad-hoc window
///
/// Times are RFC 9557 datetimes such as `2016-07-15T09:00:00+01:00[Europe/Dublin]`.
#[derive(ClapArgs)]
pub struct ExpandArgs {
    /// Start of the travel window
    #[arg(long)]
    pub start: Zoned,
    /// End of the travel window
    #[arg(long)]
    pub end: Zoned,
    /// Treat this instant as the current time
    #[arg(long)]
    pub now: Option<Timestamp>,
    /// Only include tasks due before this instant
    #[arg(long, conflicts_with = "cutoff_days")]
    pub cutoff: Option<Timestamp>,
    /// Only include tasks due within this many days
    #[arg(long)]
    pub cutoff_days: Option<i64>,
    /// Checklist file, overriding the configured one
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl ExpandArgs {
    /// Converts into core parameters, filling the current time and the
    /// configured cutoff where no flag was given.
    pub fn into_params(self, now: Timestamp, default_cutoff_days: i64) -> ExpandChecklist {
        let cutoff = match (self.cutoff, self.cutoff_days) {
            (Some(at), _) => Cutoff::At(at),
            (None, Some(days)) => Cutoff::Days(days),
            (None, None) => Cutoff::Days(default_cutoff_days),
        };
        ExpandChecklist {
            start: self.start,
            end: self.end,
            now: self.now.unwrap_or(now),
            cutoff,
        }
    }
}

#[derive(ClapArgs)]
pub struct SyncArgs {
    /// Itinerary export listing upcoming trips
    #[arg(short, long)]
    pub trips: Option<PathBuf>,
    /// Checklist file, overriding the configured one
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Only create tasks due within this many days
    #[arg(long)]
    pub cutoff_days: Option<i64>,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List tracker projects
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a project and its tasks
    #[command(alias = "s")]
    Show(ShowProjectArgs),
}

#[derive(ClapArgs)]
pub struct ShowProjectArgs {
    /// Project name, e.g. "Trip: Dublin"
    pub name: String,
}

impl From<ShowProjectArgs> for ProjectName {
    fn from(val: ShowProjectArgs) -> Self {
        ProjectName { name: val.name }
    }
}
