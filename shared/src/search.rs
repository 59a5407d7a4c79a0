//! Command palette search over the static section and project lists.

use crate::content::{Project, Section};

/// Hard cap on rendered results; anything past it is silently dropped.
pub const MAX_RESULTS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchTarget {
    Section(&'static str),
    Project(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub target: SearchTarget,
    pub label: &'static str,
}

fn matches(candidate: &str, needle: &str) -> bool {
    needle.is_empty() || candidate.to_lowercase().contains(needle)
}

/// Case-insensitive substring search.
///
/// The query is trimmed and lowercased; an empty query matches everything.
/// All section hits precede all project hits, input order is preserved
/// within each group, and the merged list is capped at [`MAX_RESULTS`].
pub fn search(
    query: &str,
    sections: &'static [Section],
    projects: &'static [Project],
) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();

    let section_hits = sections
        .iter()
        .filter(|section| matches(section.label, &needle))
        .map(|section| SearchHit {
            target: SearchTarget::Section(section.id),
            label: section.label,
        });

    let project_hits = projects
        .iter()
        .filter(|project| matches(project.name, &needle))
        .map(|project| SearchHit {
            target: SearchTarget::Project(project.id),
            label: project.name,
        });

    section_hits.chain(project_hits).take(MAX_RESULTS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_SECTIONS: &[Section] = &[
        Section { id: "home", label: "Home" },
        Section { id: "projects", label: "Projects" },
    ];

    static TEST_PROJECTS: &[Project] = &[Project {
        id: "portfolio",
        name: "Interactive Portfolio Website",
        summary: "",
        tech: &[],
        repo_url: "",
        live_url: None,
    }];

    // Twelve sections + three projects for the truncation test.
    static MANY_SECTIONS: &[Section] = &[
        Section { id: "s0", label: "Match 0" },
        Section { id: "s1", label: "Match 1" },
        Section { id: "s2", label: "Match 2" },
        Section { id: "s3", label: "Match 3" },
        Section { id: "s4", label: "Match 4" },
        Section { id: "s5", label: "Match 5" },
        Section { id: "s6", label: "Match 6" },
        Section { id: "s7", label: "Match 7" },
        Section { id: "s8", label: "Match 8" },
        Section { id: "s9", label: "Match 9" },
        Section { id: "s10", label: "Match 10" },
        Section { id: "s11", label: "Match 11" },
    ];

    static MANY_PROJECTS: &[Project] = &[
        Project {
            id: "p0",
            name: "Match p0",
            summary: "",
            tech: &[],
            repo_url: "",
            live_url: None,
        },
        Project {
            id: "p1",
            name: "Match p1",
            summary: "",
            tech: &[],
            repo_url: "",
            live_url: None,
        },
        Project {
            id: "p2",
            name: "Match p2",
            summary: "",
            tech: &[],
            repo_url: "",
            live_url: None,
        },
    ];

    #[test]
    fn empty_query_returns_everything_sections_first() {
        let hits = search("", TEST_SECTIONS, TEST_PROJECTS);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].target, SearchTarget::Section("home"));
        assert_eq!(hits[1].target, SearchTarget::Section("projects"));
        assert_eq!(hits[2].target, SearchTarget::Project("portfolio"));
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let hits = search("PORT", TEST_SECTIONS, TEST_PROJECTS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].target, SearchTarget::Project("portfolio"));
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let hits = search("  port  ", TEST_SECTIONS, TEST_PROJECTS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "Interactive Portfolio Website");
    }

    #[test]
    fn zero_matches_is_an_empty_list() {
        assert!(search("zzz", TEST_SECTIONS, TEST_PROJECTS).is_empty());
    }

    #[test]
    fn results_are_capped_at_ten_preserving_order() {
        let hits = search("match", MANY_SECTIONS, MANY_PROJECTS);
        assert_eq!(hits.len(), MAX_RESULTS);
        // All ten survivors are sections, in input order; projects fell
        // past the cap.
        for (index, hit) in hits.iter().enumerate() {
            assert_eq!(hit.target, SearchTarget::Section(MANY_SECTIONS[index].id));
        }
    }

    #[test]
    fn sections_precede_projects_under_the_cap() {
        let hits = search("1", MANY_SECTIONS, MANY_PROJECTS);
        // "Match 1", "Match 10", "Match 11" then project "Match p1".
        assert_eq!(
            hits.iter().map(|hit| hit.label).collect::<Vec<_>>(),
            vec!["Match 1", "Match 10", "Match 11", "Match p1"],
        );
    }
}
