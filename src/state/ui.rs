//! Navigation shell state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top navigation tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavTab {
    #[default]
    Mindshare,
    Projects,
    Creators,
}

impl NavTab {
    pub const ALL: [Self; 3] = [Self::Mindshare, Self::Projects, Self::Creators];

    /// Tab owning a route path; unknown paths belong to the home tab.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/projects" => Self::Projects,
            "/creators" => Self::Creators,
            _ => Self::Mindshare,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Mindshare => "/",
            Self::Projects => "/projects",
            Self::Creators => "/creators",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mindshare => "Mindshare",
            Self::Projects => "Projects",
            Self::Creators => "Creators",
        }
    }

    /// Lowercase label used in the mobile menu.
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Mindshare => "mindshare",
            Self::Projects => "projects",
            Self::Creators => "creators",
        }
    }
}
