/// Static configuration for the web shell
///
/// Branding, route and endpoint constants compiled into the application. Server
/// runtime settings (address, site root) come from cargo-leptos via
/// `[package.metadata.leptos]` and the `LEPTOS_*` environment variables.

/// Display-only branding shown in the sidebar and mobile top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branding {
    pub institution_name: &'static str,
    pub short_name: &'static str,
    pub subtitle: &'static str,
    pub logo_src: &'static str,
    pub logo_alt: &'static str,
}

pub const BRANDING: Branding = Branding {
    institution_name: "Jagannath Barooah College",
    short_name: "JB College",
    subtitle: "Management System",
    logo_src: "/college-logo.png",
    logo_alt: "College Logo",
};

/// Authentication entry point; sign-out always lands here.
pub const AUTH_PATH: &str = "/auth";

/// Where a successful sign-in lands.
pub const HOME_PATH: &str = "/dashboard";

/// Shown when the session carries no role (or an empty one).
pub const DEFAULT_ROLE_LABEL: &str = "Admin";

/// Media query matching Tailwind's `lg` breakpoint, where the sidebar is pinned open.
pub const WIDE_VIEWPORT_QUERY: &str = "(min-width: 1024px)";

/// localStorage key holding the persisted session.
pub const SESSION_STORAGE_KEY: &str = "campus_session";

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Filter used when `RUST_LOG` is unset.
#[cfg(feature = "ssr")]
pub const DEFAULT_LOG_FILTER: &str = "campus_web=info,tower_http=info";
