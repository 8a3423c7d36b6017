//! Display implementations for domain models.
//!
//! Output is markdown: tasks render as list items nested by indent, so a
//! project reads the way it does in a tracker.

use std::fmt;

use super::datetime::UtcDateTime;
use crate::models::{ChecklistItem, Diff, DiffKind, Project, ProjectSummary, Task, Trip};

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = usize::from(self.indent.saturating_sub(1));
        writeln!(
            f,
            "{}- {} (due {})",
            "  ".repeat(depth),
            self.content,
            UtcDateTime(&self.due_date_utc)
        )
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = usize::from(self.indent.saturating_sub(1));
        writeln!(
            f,
            "{}- {} ({})",
            "  ".repeat(depth),
            self.template,
            self.due_expression
        )
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind {
            DiffKind::Added => '+',
            DiffKind::Changed => '~',
            DiffKind::Removed => '-',
        };
        writeln!(
            f,
            "- `{sign}` {} (indent {}, position {}, due {})",
            self.task.content,
            self.task.indent,
            self.task.position,
            UtcDateTime(&self.task.due_date_utc)
        )
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        if let Some(external) = &self.external {
            writeln!(f, "- ID: {}", external.project_id)?;
            writeln!(f, "- Tasks: {}", self.tasks.len())?;
            writeln!(f)?;
        }

        if self.tasks.is_empty() {
            writeln!(f, "No tasks in this project.")?;
        } else {
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.task_count == 1 { "task" } else { "tasks" };
        writeln!(
            f,
            "- **{}** (ID {}, {} {noun})",
            self.name, self.id, self.task_count
        )
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** ({}): {} to {}",
            self.display_name,
            self.id,
            self.start.strftime("%Y-%m-%d %H:%M %Z"),
            self.end.strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}
