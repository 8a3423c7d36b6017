//! Display implementations for sync outcomes.

use std::fmt;

use super::Diffs;
use crate::sync::{SyncReport, TripOutcome, TripSync};

impl fmt::Display for TripOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripOutcome::Skipped => write!(f, "skipped, nothing due before the cutoff"),
            TripOutcome::Created { tasks } => {
                let noun = if *tasks == 1 { "task" } else { "tasks" };
                write!(f, "created with {tasks} {noun}")
            }
            TripOutcome::Updated { diffs, commands } => {
                write!(f, "updated ({} diffs, {commands} commands)", diffs.len())
            }
            TripOutcome::Unchanged => write!(f, "unchanged"),
            TripOutcome::Failed { message } => write!(f, "failed: {message}"),
        }
    }
}

impl fmt::Display for TripSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.project)?;
        writeln!(f)?;
        writeln!(f, "- Trip: {}", self.trip_id)?;
        writeln!(f, "- Result: {}", self.outcome)?;

        if let TripOutcome::Updated { diffs, .. } = &self.outcome {
            writeln!(f)?;
            write!(f, "{}", Diffs(diffs.clone()))?;
        }
        Ok(())
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Sync report")?;
        writeln!(f)?;

        if self.trips.is_empty() {
            return writeln!(f, "No trips to sync.");
        }

        for (i, trip) in self.trips.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{trip}")?;
        }

        let failures = self.failures();
        if failures > 0 {
            writeln!(f)?;
            writeln!(f, "**{failures} of {} trips failed.**", self.trips.len())?;
        }
        Ok(())
    }
}
