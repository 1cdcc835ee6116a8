//! Static projects directory shown on `/projects`.
//!
//! The directory is a hand-curated dataset, not an API view; only the
//! filter and sort controls carry logic.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

/// Lifecycle badge on a directory card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Beta,
    Archived,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Beta => "beta",
            Self::Archived => "archived",
        }
    }
}

/// Filter buttons above the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Beta,
    Archived,
}

impl StatusFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Active, Self::Beta, Self::Archived];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Beta => "beta",
            Self::Archived => "archived",
        }
    }

    pub fn matches(self, status: ProjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == ProjectStatus::Active,
            Self::Beta => status == ProjectStatus::Beta,
            Self::Archived => status == ProjectStatus::Archived,
        }
    }
}

/// Sort order for the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Stars,
    Recent,
    Views,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::Stars, Self::Recent, Self::Views];

    pub fn label(self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Recent => "recent",
            Self::Views => "views",
        }
    }

    /// Parse the `<select>` value; unknown values keep the default.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "recent" => Self::Recent,
            "views" => Self::Views,
            _ => Self::Stars,
        }
    }
}

/// A hand-curated directory entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryProject {
    pub name: &'static str,
    pub description: &'static str,
    pub stars: u64,
    pub forks: u64,
    pub views: u64,
    pub language: &'static str,
    pub language_color: &'static str,
    pub status: ProjectStatus,
    pub last_update: &'static str,
    pub tags: &'static [&'static str],
}

/// Directory dataset.
pub const PROJECTS: &[DirectoryProject] = &[
    DirectoryProject {
        name: "neural-engine",
        description: "High-performance ML inference engine with ONNX runtime support",
        stars: 3427,
        forks: 892,
        views: 12_847,
        language: "Rust",
        language_color: "#dea584",
        status: ProjectStatus::Active,
        last_update: "2 hours ago",
        tags: &["ai", "performance", "rust"],
    },
    DirectoryProject {
        name: "quantum-sdk",
        description: "Quantum computing SDK for hybrid classical-quantum algorithms",
        stars: 2891,
        forks: 643,
        views: 9821,
        language: "Python",
        language_color: "#3572A5",
        status: ProjectStatus::Beta,
        last_update: "5 hours ago",
        tags: &["quantum", "sdk", "research"],
    },
    DirectoryProject {
        name: "cipher-vault",
        description: "Zero-knowledge encryption vault with distributed key management",
        stars: 4102,
        forks: 1203,
        views: 15_234,
        language: "Go",
        language_color: "#00ADD8",
        status: ProjectStatus::Active,
        last_update: "1 day ago",
        tags: &["security", "encryption", "privacy"],
    },
    DirectoryProject {
        name: "edge-compute",
        description: "Serverless edge computing platform with global CDN integration",
        stars: 5234,
        forks: 1456,
        views: 18_976,
        language: "TypeScript",
        language_color: "#2b7489",
        status: ProjectStatus::Active,
        last_update: "3 hours ago",
        tags: &["cloud", "serverless", "edge"],
    },
    DirectoryProject {
        name: "data-mesh",
        description: "Distributed data mesh architecture for real-time analytics",
        stars: 2167,
        forks: 532,
        views: 7234,
        language: "Scala",
        language_color: "#c22d40",
        status: ProjectStatus::Active,
        last_update: "12 hours ago",
        tags: &["data", "analytics", "distributed"],
    },
    DirectoryProject {
        name: "micro-core",
        description: "Lightweight microservices framework with built-in observability",
        stars: 3892,
        forks: 923,
        views: 11_234,
        language: "Java",
        language_color: "#b07219",
        status: ProjectStatus::Active,
        last_update: "6 hours ago",
        tags: &["microservices", "framework", "java"],
    },
];

/// Apply the status filter, then sort. `Recent` keeps the curated order.
pub fn filter_and_sort(
    projects: &[DirectoryProject],
    filter: StatusFilter,
    sort: SortKey,
) -> Vec<DirectoryProject> {
    let mut rows: Vec<_> = projects
        .iter()
        .filter(|p| filter.matches(p.status))
        .cloned()
        .collect();
    match sort {
        SortKey::Stars => rows.sort_by(|a, b| b.stars.cmp(&a.stars)),
        SortKey::Views => rows.sort_by(|a, b| b.views.cmp(&a.views)),
        SortKey::Recent => {}
    }
    rows
}
