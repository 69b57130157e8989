#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Expenses,
    Budget,
    Reports,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Expenses, Page::Budget, Page::Reports];

    /// Picks the page by substring of the location path, checked in nav
    /// order. Anything unrecognised opens the dashboard.
    pub fn from_path(path: &str) -> Self {
        let path = path.to_ascii_lowercase();
        Page::ALL
            .into_iter()
            .find(|page| path.contains(page.path_fragment()))
            .unwrap_or(Page::Dashboard)
    }

    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default();
        Self::from_path(&path)
    }

    pub fn path_fragment(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Expenses => "expenses",
            Page::Budget => "budget",
            Page::Reports => "reports",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Expenses => "Expenses",
            Page::Budget => "Monthly Budget",
            Page::Reports => "Reports",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_path_substring() {
        assert_eq!(Page::from_path("/dashboard"), Page::Dashboard);
        assert_eq!(Page::from_path("/frontend/expenses.html"), Page::Expenses);
        assert_eq!(Page::from_path("/budget"), Page::Budget);
        assert_eq!(Page::from_path("/Reports"), Page::Reports);
    }

    #[test]
    fn unknown_paths_open_the_dashboard() {
        assert_eq!(Page::from_path("/"), Page::Dashboard);
        assert_eq!(Page::from_path("/index.html"), Page::Dashboard);
    }
}
