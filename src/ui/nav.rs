//! Path-string routing. The rest of the crate talks to the router in paths
//! (`/trade/7`), the router owns turning those into screens - including the
//! not-found fallback for anything it doesn't recognize.

#[cfg(debug_assertions)]
use crate::config::DF;

/// Screen targets the router understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Marketplace,
    Trade(u32),
    NotFound,
}

impl Route {
    /// Parse a path of the form `/`, `/market-place` or `/trade/{id}`.
    /// Anything else - including a malformed trade id - resolves to
    /// `NotFound`. Bad paths are a caller error, but they get a 404 screen,
    /// never a crash.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/market-place" => Route::Marketplace,
            other => match other.strip_prefix("/trade/") {
                Some(id) => id.parse::<u32>().map(Route::Trade).unwrap_or(Route::NotFound),
                None => Route::NotFound,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Marketplace => "/market-place".to_string(),
            Route::Trade(id) => trade_path(*id),
            Route::NotFound => "/404".to_string(),
        }
    }
}

/// The trade view path for a listing. Integer id, decimal-free.
pub fn trade_path(listing_id: u32) -> String {
    format!("/trade/{listing_id}")
}

/// Thin routing collaborator: owns the current route and nothing else.
/// Each `navigate` is a single atomic dispatch - parse, count, swap.
pub struct NavController {
    current: Route,
    dispatches: usize,
}

impl NavController {
    pub fn new() -> Self {
        Self::starting_at(Route::Home)
    }

    /// Mount directly on a route without counting a dispatch (used when
    /// restoring the previous session's screen).
    pub fn starting_at(route: Route) -> Self {
        Self {
            current: route,
            dispatches: 0,
        }
    }

    pub fn navigate(&mut self, path: &str) {
        let route = Route::parse(path);
        self.dispatches += 1;

        #[cfg(debug_assertions)]
        if DF.log_navigation {
            log::info!("nav: dispatch #{} '{}' -> {:?}", self.dispatches, path, route);
        }

        self.current = route;
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Total dispatches this session (status bar / logging).
    pub fn dispatch_count(&self) -> usize {
        self.dispatches
    }
}

impl Default for NavController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_parse() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/market-place"), Route::Marketplace);
        assert_eq!(Route::parse("/market-place/"), Route::Marketplace);
        assert_eq!(Route::parse("/trade/7"), Route::Trade(7));
        assert_eq!(Route::parse("/trade/16/"), Route::Trade(16));
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        assert_eq!(Route::parse("/nope"), Route::NotFound);
        assert_eq!(Route::parse("/trade/"), Route::NotFound);
        assert_eq!(Route::parse("/trade/abc"), Route::NotFound);
        assert_eq!(Route::parse("/trade/1.5"), Route::NotFound);
        assert_eq!(Route::parse("/trade/-3"), Route::NotFound);
    }

    #[test]
    fn trade_paths_round_trip() {
        for id in [1u32, 7, 16, 4242] {
            assert_eq!(Route::parse(&trade_path(id)), Route::Trade(id));
        }
        assert_eq!(Route::Trade(7).path(), "/trade/7");
    }

    #[test]
    fn navigate_swaps_route_and_counts_one_dispatch() {
        let mut nav = NavController::new();
        assert_eq!(nav.current(), Route::Home);
        assert_eq!(nav.dispatch_count(), 0);

        nav.navigate("/trade/7");
        assert_eq!(nav.current(), Route::Trade(7));
        assert_eq!(nav.dispatch_count(), 1);

        nav.navigate("/garbage");
        assert_eq!(nav.current(), Route::NotFound);
        assert_eq!(nav.dispatch_count(), 2);
    }
}
