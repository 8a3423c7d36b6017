//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{Diff, ProjectSummary, Task};

/// Implements the shared accessors every collection wrapper exposes.
macro_rules! collection_wrapper {
    ($wrapper:ident, $item:ty) => {
        impl $wrapper {
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $wrapper {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $wrapper {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $wrapper {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

/// Newtype wrapper for displaying expanded tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tasks(pub Vec<Task>);

/// Newtype wrapper for displaying reconciliation diffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diffs(pub Vec<Diff>);

/// Newtype wrapper for displaying tracker project listings.
///
/// ```rust
/// use tripist_core::{display::ProjectSummaries, models::ProjectSummary};
///
/// let summaries = ProjectSummaries(vec![ProjectSummary {
///     id: 1,
///     name: "Trip: Dublin".to_string(),
///     task_count: 3,
/// }]);
/// assert!(summaries.to_string().contains("**Trip: Dublin** (ID 1, 3 tasks)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummaries(pub Vec<ProjectSummary>);

collection_wrapper!(Tasks, Task);
collection_wrapper!(Diffs, Diff);
collection_wrapper!(ProjectSummaries, ProjectSummary);

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks.");
        }
        for task in &self.0 {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Diffs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No changes.");
        }
        for diff in &self.0 {
            write!(f, "{diff}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ProjectSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No projects found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}
