//! Status filter plus free-text search for clients and projects.

use crate::model::client::{Client, ClientStatus};
use crate::model::project::{Project, ProjectStatus};

/// Status constraint for a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    /// Every status passes.
    All,
    /// Only this status passes.
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        Self::All
    }
}

impl<S: PartialEq + Copy> StatusFilter<S> {
    pub fn matches(&self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => *expected == status,
        }
    }
}

/// Lowercased search needle, kept as typed. Only an empty needle matches
/// everything; whitespace is part of the match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring match against any of `fields`.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        self.is_empty()
            || fields
                .iter()
                .any(|field| field.to_lowercase().contains(self.needle.as_str()))
    }
}

/// Client list filter: pipeline status plus name/company search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub status: StatusFilter<ClientStatus>,
    pub query: TextQuery,
}

impl ClientFilter {
    pub fn new(status: StatusFilter<ClientStatus>, query: &str) -> Self {
        Self {
            status,
            query: TextQuery::new(query),
        }
    }

    pub fn matches(&self, client: &Client) -> bool {
        self.status.matches(client.status)
            && self
                .query
                .matches_any(&[client.name.as_str(), client.company.as_str()])
    }

    /// Matching clients in input order.
    pub fn apply<'a>(&self, clients: &'a [Client]) -> Vec<&'a Client> {
        clients.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Project list filter: board status plus name/client-name search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub status: StatusFilter<ProjectStatus>,
    pub query: TextQuery,
}

impl ProjectFilter {
    pub fn new(status: StatusFilter<ProjectStatus>, query: &str) -> Self {
        Self {
            status,
            query: TextQuery::new(query),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.status.matches(project.status)
            && self
                .query
                .matches_any(&[project.name.as_str(), project.client_name.as_str()])
    }

    /// Matching projects in input order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{StatusFilter, TextQuery};

    #[test]
    fn empty_query_matches_everything() {
        let query = TextQuery::new("");
        assert!(query.is_empty());
        assert!(query.matches_any(&[]));
    }

    #[test]
    fn whitespace_query_is_not_empty() {
        let query = TextQuery::new(" ");
        assert!(!query.is_empty());
        assert!(!query.matches_any(&["Johannes", "Aktimed"]));
        assert!(query.matches_any(&["Sarah Klein"]));
    }

    #[test]
    fn query_is_case_insensitive_and_keeps_spaces() {
        let query = TextQuery::new("AKTI");
        assert!(query.matches_any(&["Johannes", "Aktimed GmbH"]));
        assert!(!query.matches_any(&["Sarah Klein", "DesignStudio Berlin"]));

        let trailing = TextQuery::new("Klein ");
        assert!(!trailing.matches_any(&["Sarah Klein", "DesignStudio Berlin"]));
    }

    #[test]
    fn umlauts_match_case_insensitively() {
        let query = TextQuery::new("MÜLLER");
        assert!(query.matches_any(&["Max Müller"]));
    }

    #[test]
    fn status_filter_all_accepts_any_value() {
        assert!(StatusFilter::<u8>::All.matches(3));
        assert!(StatusFilter::Only(3_u8).matches(3));
        assert!(!StatusFilter::Only(3_u8).matches(4));
    }
}
