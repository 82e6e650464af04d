//! Placeholder replacement for template content.
//!
//! Templates contain literal tokens of the form `[key]`. The recognized keys
//! are fixed: `project_name`, `date`, `year`, `fullname`. Token namespaces do
//! not overlap, so the order in which keys are applied never changes the
//! result.

use chrono::Local;

use crate::domain::ProjectName;

/// The fixed set of placeholder keys, built once per run and read-only
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementMap {
    project_name: String,
    date: String,
    year: String,
    fullname: String,
}

impl ReplacementMap {
    /// Build the map from the validated project name and the current local
    /// date. `fullname` defaults to the empty string when not configured.
    pub fn for_today(name: &ProjectName, fullname: &str) -> Self {
        let now = Local::now();
        Self::from_parts(
            name.as_str(),
            &now.format("%B %d, %Y").to_string(),
            &now.format("%Y").to_string(),
            fullname,
        )
    }

    /// Build the map from explicit values. Used by [`Self::for_today`] and by
    /// tests that need a fixed date.
    pub fn from_parts(project_name: &str, date: &str, year: &str, fullname: &str) -> Self {
        Self {
            project_name: project_name.into(),
            date: date.into(),
            year: year.into(),
            fullname: fullname.into(),
        }
    }

    /// Key/value pairs in declaration order.
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("project_name", &self.project_name),
            ("date", &self.date),
            ("year", &self.year),
            ("fullname", &self.fullname),
        ]
    }

    /// Replace every occurrence of every `[key]` token in `input`.
    pub fn apply(&self, input: &str) -> String {
        let mut out = input.to_string();
        for (key, value) in self.pairs() {
            out = out.replace(&format!("[{key}]"), value);
        }
        out
    }
}
