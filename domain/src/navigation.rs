//! View routes. Paths are the part after `#` in the page URL.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Gigs,
    ShadowWallet,
    Modes,
    Predictions,
    Savings,
    Expenses,
    Chat,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Dashboard,
        Route::Gigs,
        Route::ShadowWallet,
        Route::Modes,
        Route::Predictions,
        Route::Savings,
        Route::Expenses,
        Route::Chat,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Gigs => "/gigs",
            Route::ShadowWallet => "/shadow-wallet",
            Route::Modes => "/modes",
            Route::Predictions => "/predictions",
            Route::Savings => "/savings",
            Route::Expenses => "/expenses",
            Route::Chat => "/chat",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Gigs => "Unified Gigs",
            Route::ShadowWallet => "Shadow Wallet",
            Route::Modes => "Smart Modes",
            Route::Predictions => "Future Predict",
            Route::Savings => "Savings Goals",
            Route::Expenses => "Expenses",
            Route::Chat => "AI Coach",
        }
    }

    /// Shorter label for the mobile bottom bar
    pub fn short_label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Home",
            Route::Gigs => "Gigs",
            Route::ShadowWallet => "Wallet",
            Route::Predictions => "Predictions",
            other => other.label(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => "🏠",
            Route::Gigs | Route::Predictions | Route::Expenses => "📊",
            Route::ShadowWallet | Route::Savings => "🔒",
            Route::Modes => "⚙️",
            Route::Chat => "💬",
        }
    }

    /// Route for a path. Unknown paths fall back to the dashboard.
    pub fn from_path(path: &str) -> Route {
        let path = path.trim().trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        Route::ALL
            .iter()
            .copied()
            .find(|route| route.path() == normalized)
            .unwrap_or_else(|| {
                debug!("Unknown route '{}', redirecting to dashboard", path);
                Route::Dashboard
            })
    }

    /// Routes in the mobile "More" drawer
    pub fn drawer_routes() -> [Route; 4] {
        [Route::Modes, Route::Predictions, Route::Savings, Route::Expenses]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_paths_fall_back_to_dashboard() {
        assert_eq!(Route::from_path("/nope"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
        assert_eq!(Route::from_path("/gigs/extra"), Route::Dashboard);
    }

    #[test]
    fn test_hash_fragments_are_normalized() {
        assert_eq!(Route::from_path("#/chat"), Route::Chat);
        assert_eq!(Route::from_path("#/savings/"), Route::Savings);
        assert_eq!(Route::from_path("/modes?from=nav"), Route::Modes);
        assert_eq!(Route::from_path("#"), Route::Dashboard);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Route::Gigs.label(), "Unified Gigs");
        assert_eq!(Route::Gigs.short_label(), "Gigs");
        assert_eq!(Route::Modes.short_label(), "Smart Modes");
        assert_eq!(Route::Predictions.label(), "Future Predict");
        assert_eq!(Route::Predictions.short_label(), "Predictions");
    }
}
