//! Command handlers.
//!
//! Each handler resolves its inputs (flags first, then the configuration
//! file), calls into `tripist_core` and renders the markdown `Display`
//! output of the result.

use std::{fmt::Write as _, path::PathBuf};

use anyhow::{bail, Context, Result};
use jiff::Timestamp;
use log::info;
use tripist_core::{
    expand_checklist,
    itinerary::{ItineraryClient, ItineraryFile},
    load_checklist,
    params::{ProjectName, SyncTrips},
    Config, Syncer, Tasks,
};

use crate::{
    args::{ChecklistCommands, CheckArgs, ExpandArgs, ProjectCommands, SyncArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    syncer: Syncer,
    renderer: TerminalRenderer,
    config: Config,
}

impl Cli {
    pub fn new(syncer: Syncer, renderer: TerminalRenderer, config: Config) -> Self {
        Self {
            syncer,
            renderer,
            config,
        }
    }

    fn checklist_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.unwrap_or_else(|| self.config.checklist_file.clone())
    }

    pub fn handle_checklist_command(&self, command: ChecklistCommands) -> Result<()> {
        match command {
            ChecklistCommands::Check(args) => self.check_checklist(args),
        }
    }

    /// Prints every valid item and fails when any line was malformed.
    fn check_checklist(&self, args: CheckArgs) -> Result<()> {
        let path = self.checklist_path(args.file);
        let loaded = load_checklist(&path)
            .with_context(|| format!("Failed to read checklist {}", path.display()))?;

        let mut output = format!("# Checklist {}\n\n", path.display());
        if loaded.items.is_empty() {
            output.push_str("No checklist items.\n");
        }
        for item in &loaded.items {
            write!(output, "{item}")?;
        }

        if let Some(error) = &loaded.error {
            writeln!(output, "\n## Malformed lines\n")?;
            for line in &error.lines {
                writeln!(output, "- {line}")?;
            }
        }
        self.renderer.render(&output)?;

        match loaded.error {
            Some(error) => bail!("{} malformed checklist lines: {error}", error.lines.len()),
            None => Ok(()),
        }
    }

    pub fn expand(&self, args: ExpandArgs) -> Result<()> {
        let path = self.checklist_path(args.file.clone());
        let checklist = load_checklist(&path)
            .with_context(|| format!("Failed to read checklist {}", path.display()))?
            .into_result()
            .context("Checklist has malformed lines")?;

        let params = args.into_params(Timestamp::now(), self.config.task_cutoff_days);
        let tasks = expand_checklist(&checklist, &params).context("Failed to expand checklist")?;

        self.renderer.render(&Tasks(tasks).to_string())
    }

    pub async fn sync(&self, args: SyncArgs) -> Result<()> {
        let Some(trips_path) = args.trips.or_else(|| self.config.trips_file.clone()) else {
            bail!("No itinerary given; pass --trips or set trips_file in the configuration");
        };
        let checklist_path = self.checklist_path(args.file);

        let trips = ItineraryFile::new(&trips_path)
            .list_trips()
            .with_context(|| format!("Failed to load trips from {}", trips_path.display()))?;
        let checklist = load_checklist(&checklist_path)
            .with_context(|| format!("Failed to read checklist {}", checklist_path.display()))?
            .into_result()
            .context("Checklist has malformed lines")?;

        let now = Timestamp::now();
        let cutoff = self
            .config
            .cutoff(now, args.cutoff_days)
            .context("Invalid task cutoff")?;

        let report = self
            .syncer
            .sync_trips(&SyncTrips {
                trips,
                checklist,
                now,
                cutoff,
            })
            .await
            .context("Failed to sync trips")?;

        self.renderer.render(&report.to_string())?;

        let failures = report.failures();
        if failures > 0 {
            bail!("{failures} of {} trips failed to sync", report.trips.len());
        }
        Ok(())
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::List => self.list_projects().await,
            ProjectCommands::Show(args) => self.show_project(&args.into()).await,
        }
    }

    pub async fn list_projects(&self) -> Result<()> {
        let projects = self
            .syncer
            .list_projects()
            .await
            .context("Failed to list projects")?;
        self.renderer
            .render(&format!("# Projects\n\n{projects}"))
    }

    async fn show_project(&self, params: &ProjectName) -> Result<()> {
        let project = self
            .syncer
            .show_project(params)
            .await
            .context("Failed to show project")?;
        self.renderer.render(&project.to_string())
    }

    pub async fn verify(&self) -> Result<()> {
        info!(
            "Verifying tracker at {}",
            self.syncer.database_path().display()
        );
        self.syncer
            .verify()
            .await
            .context("Tracker verification failed")?;
        self.renderer.render("Verification passed.\n")
    }
}
