use serde::{Deserialize, Serialize};

/// Top-level navigation targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Home,
    Dashboard,
    NotFound(String),
}

impl Route {
    /// Accepts `/`, `/dashboard` (with or without slashes, `#` or query suffix).
    pub fn from_path(path: &str) -> Self {
        let path = path.trim().trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_matches('/') {
            "" => Route::Home,
            "dashboard" => Route::Dashboard,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::NotFound(path) => path,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("#/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/dashboard?tab=metrics"), Route::Dashboard);
    }

    #[test]
    fn everything_else_is_not_found() {
        assert_eq!(
            Route::from_path("/predictions"),
            Route::NotFound("/predictions".to_string())
        );
        assert_eq!(Route::from_path("/predictions").path(), "/predictions");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
    }
}
