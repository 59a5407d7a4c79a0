//! Static portfolio content.
//!
//! All records are `'static` configuration loaded once at startup; nothing
//! here is mutated after load. Rendering, scroll-spy, and the command
//! palette all read from the same statics.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub tech: &'static [&'static str],
    pub repo_url: &'static str,
    pub live_url: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub resume_url: &'static str,
    pub socials: &'static [SocialLink],
}

/// Section id the project-card navigation scrolls to first.
pub const PROJECTS_SECTION_ID: &str = "projects";

/// DOM id carried by each project card so palette selection can centre it.
pub fn project_card_dom_id(project_id: &str) -> String {
    format!("project-card-{project_id}")
}

pub static SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "skills", label: "Skills" },
    Section { id: PROJECTS_SECTION_ID, label: "Projects" },
    Section { id: "experience", label: "Experience" },
    Section { id: "timeline", label: "Timeline" },
    Section { id: "contact", label: "Contact" },
];

/// Scroll-spy fallback when no section has crossed the activation line yet.
pub fn first_section() -> Section {
    SECTIONS[0]
}

pub static PROFILE: Profile = Profile {
    name: "Jordan Reyes",
    headline: "Software engineer building fast, friendly tools for the web",
    bio: "I design and ship end-to-end products: typed APIs, real-time \
          frontends, and the build tooling in between. Lately I spend most \
          of my time in Rust and TypeScript, with a soft spot for developer \
          experience and performance work.",
    email: "hello@jordanreyes.dev",
    location: "Lisbon, Portugal",
    resume_url: "https://jordanreyes.dev/resume.pdf",
    socials: &[
        SocialLink { label: "GitHub", url: "https://github.com/jordanreyes" },
        SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/in/jordan-reyes" },
        SocialLink { label: "Mastodon", url: "https://hachyderm.io/@jordanreyes" },
    ],
};

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Languages",
        skills: &["Rust", "TypeScript", "Python", "SQL", "Go"],
    },
    SkillGroup {
        name: "Frontend",
        skills: &["WebAssembly", "React", "MoonZoon", "CSS", "Accessibility"],
    },
    SkillGroup {
        name: "Backend & Infra",
        skills: &["PostgreSQL", "Redis", "Docker", "AWS", "CI/CD"],
    },
    SkillGroup {
        name: "Practices",
        skills: &["Property testing", "Observability", "Code review", "Mentoring"],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: "portfolio",
        name: "Interactive Portfolio Website",
        summary: "This site: a WASM single-page app with scroll-spy \
                  navigation, a command palette, and persisted dark mode.",
        tech: &["Rust", "MoonZoon", "WebAssembly"],
        repo_url: "https://github.com/jordanreyes/portfolio",
        live_url: Some("https://jordanreyes.dev"),
    },
    Project {
        id: "chartly",
        name: "Chartly",
        summary: "Collaborative dashboard builder with live cursors and \
                  CRDT-backed widget layouts.",
        tech: &["TypeScript", "React", "Yjs", "WebSockets"],
        repo_url: "https://github.com/jordanreyes/chartly",
        live_url: Some("https://chartly.app"),
    },
    Project {
        id: "queuelite",
        name: "Queuelite",
        summary: "Embeddable job queue on SQLite: exactly-once workers, \
                  cron schedules, zero external services.",
        tech: &["Rust", "SQLite", "Tokio"],
        repo_url: "https://github.com/jordanreyes/queuelite",
        live_url: None,
    },
    Project {
        id: "lingo-lens",
        name: "Lingo Lens",
        summary: "Browser extension that inline-translates code comments \
                  and commit messages between six languages.",
        tech: &["TypeScript", "WebExtensions"],
        repo_url: "https://github.com/jordanreyes/lingo-lens",
        live_url: None,
    },
    Project {
        id: "trailkit",
        name: "Trailkit",
        summary: "Offline-first hiking planner with vector tiles and GPX \
                  route sharing.",
        tech: &["Rust", "WASM", "MapLibre"],
        repo_url: "https://github.com/jordanreyes/trailkit",
        live_url: Some("https://trailkit.dev"),
    },
    Project {
        id: "pressgauge",
        name: "Pressgauge",
        summary: "CLI that benchmarks static-site builds across generators \
                  and posts trend reports to CI.",
        tech: &["Go", "GitHub Actions"],
        repo_url: "https://github.com/jordanreyes/pressgauge",
        live_url: None,
    },
];

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Senior Software Engineer",
        company: "Brightline Systems",
        period: "2022 — present",
        highlights: &[
            "Lead engineer on a Rust/WASM analytics frontend serving 40k daily users.",
            "Cut p95 dashboard load time from 3.1s to 800ms by moving aggregation into a shared worker.",
            "Mentor two engineers; run the guild for frontend performance.",
        ],
    },
    ExperienceEntry {
        role: "Full-stack Engineer",
        company: "Mapa Labs",
        period: "2019 — 2022",
        highlights: &[
            "Built the tile-rendering pipeline behind three consumer map products.",
            "Introduced contract tests between the TypeScript client and the Rust API, ending a class of deploy breakages.",
        ],
    },
    ExperienceEntry {
        role: "Software Developer",
        company: "Porto Digital Agency",
        period: "2017 — 2019",
        highlights: &[
            "Delivered a dozen client sites and two internal CMS tools.",
            "First production Rust service: an image-resizing proxy still running today.",
        ],
    },
];

pub static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2024",
        title: "Spoke at RustLab",
        detail: "Talk on incremental WASM adoption in legacy frontends.",
    },
    TimelineEntry {
        year: "2022",
        title: "Joined Brightline Systems",
        detail: "Moved from product work to the platform team.",
    },
    TimelineEntry {
        year: "2020",
        title: "First open-source release",
        detail: "Queuelite hit 1.0 and its first hundred stars.",
    },
    TimelineEntry {
        year: "2017",
        title: "Shipped first production code",
        detail: "Graduated and joined Porto Digital Agency.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<_> = SECTIONS.iter().map(|section| section.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn projects_section_is_configured() {
        assert!(SECTIONS.iter().any(|section| section.id == PROJECTS_SECTION_ID));
    }

    #[test]
    fn first_section_is_display_order_head() {
        assert_eq!(first_section().id, SECTIONS[0].id);
    }

    #[test]
    fn project_card_dom_ids_follow_card_markup() {
        assert_eq!(project_card_dom_id("chartly"), "project-card-chartly");
    }
}
