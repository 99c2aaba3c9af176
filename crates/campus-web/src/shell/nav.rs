//! Navigation destinations and active-route derivation.

/// Symbolic icon reference; the view layer maps it to an SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Students,
    Courses,
    Enrollments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavDestination {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

impl NavDestination {
    /// Exact match only: `/courses/42` does not activate `/courses`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

pub const DESTINATIONS: &[NavDestination] = &[
    NavDestination {
        path: "/dashboard",
        label: "Dashboard",
        icon: NavIcon::Dashboard,
    },
    NavDestination {
        path: "/students",
        label: "Students",
        icon: NavIcon::Students,
    },
    NavDestination {
        path: "/courses",
        label: "Courses",
        icon: NavIcon::Courses,
    },
    NavDestination {
        path: "/enrollments",
        label: "Enrollments",
        icon: NavIcon::Enrollments,
    },
];

/// One rendered row of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub destination: NavDestination,
    pub active: bool,
}

/// Sidebar rows in table order, each flagged active or not.
pub fn destination_entries(destinations: &[NavDestination], current_path: &str) -> Vec<NavEntry> {
    destinations
        .iter()
        .map(|destination| NavEntry {
            destination: *destination,
            active: destination.is_active(current_path),
        })
        .collect()
}

pub fn active_destination<'a>(
    destinations: &'a [NavDestination],
    current_path: &str,
) -> Option<&'a NavDestination> {
    destinations.iter().find(|destination| destination.is_active(current_path))
}

pub fn nav_item_class(active: bool) -> &'static str {
    if active {
        "sidebar-nav-item sidebar-nav-item-active"
    } else {
        "sidebar-nav-item sidebar-nav-item-inactive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn active_labels(current_path: &str) -> Vec<&'static str> {
        destination_entries(DESTINATIONS, current_path)
            .into_iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.destination.label)
            .collect()
    }

    #[test]
    fn test_destination_table() {
        let paths: Vec<_> = DESTINATIONS.iter().map(|d| d.path).collect();
        assert_eq!(paths, ["/dashboard", "/students", "/courses", "/enrollments"]);

        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn test_courses_is_only_active_entry() {
        assert_eq!(active_labels("/courses"), ["Courses"]);
        assert_eq!(
            active_destination(DESTINATIONS, "/courses").map(|d| d.label),
            Some("Courses")
        );
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(active_labels("/courses/42").is_empty());
        assert!(active_labels("/course").is_empty());
        assert!(active_labels("/courses/").is_empty());
        assert!(active_labels("/").is_empty());
    }

    #[test]
    fn test_unknown_path_has_no_active_entry() {
        assert!(active_labels("/reports").is_empty());
        assert!(active_destination(DESTINATIONS, "/reports").is_none());
    }

    #[test]
    fn test_at_most_one_active() {
        let candidates = [
            "", "/", "/dashboard", "/students", "/courses", "/enrollments", "/auth",
            "/Dashboard", "/students?page=2", "/enrollments/new",
        ];
        for path in candidates {
            let active = active_labels(path);
            assert!(active.len() <= 1, "{path} activated {active:?}");
            for entry in destination_entries(DESTINATIONS, path) {
                assert_eq!(entry.active, entry.destination.path == path);
            }
        }
    }

    #[test]
    fn test_entries_preserve_order() {
        let labels: Vec<_> = destination_entries(DESTINATIONS, "/students")
            .into_iter()
            .map(|e| e.destination.label)
            .collect();
        assert_eq!(labels, ["Dashboard", "Students", "Courses", "Enrollments"]);
    }

    #[test]
    fn test_empty_table() {
        assert!(destination_entries(&[], "/dashboard").is_empty());
        assert!(active_destination(&[], "/dashboard").is_none());
    }

    #[test]
    fn test_item_class() {
        assert!(nav_item_class(true).contains("sidebar-nav-item-active"));
        assert!(nav_item_class(false).contains("sidebar-nav-item-inactive"));
    }
}
