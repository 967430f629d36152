use std::collections::HashSet;

use crate::content::Project;

/// Wildcard category. Never a real project category.
pub const ALL_CATEGORIES: &str = "All";

/// Projects matching both the category and the free-text query, in their
/// original order. The query is matched case-insensitively against the title,
/// the description and each technology.
pub fn filter_projects(projects: &[Project], category: &str, query: &str) -> Vec<Project> {
    let query = query.to_lowercase();
    projects
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .filter(|p| matches_query(p, &query))
        .cloned()
        .collect()
}

fn matches_query(project: &Project, query: &str) -> bool {
    project.title.to_lowercase().contains(query)
        || project.description.to_lowercase().contains(query)
        || project
            .technologies
            .iter()
            .any(|t| t.to_lowercase().contains(query))
}

/// `"All"` followed by each distinct category in order of first appearance.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(
            projects
                .iter()
                .filter(|p| p.category != ALL_CATEGORIES && seen.insert(p.category.as_str()))
                .map(|p| p.category.clone()),
        )
        .collect()
}
