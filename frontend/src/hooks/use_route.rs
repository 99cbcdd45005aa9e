use gloo::events::EventListener;
use steady_domain::Route;
use yew::prelude::*;

fn current_hash() -> String {
    gloo::utils::window().location().hash().unwrap_or_default()
}

fn set_hash(route: Route) {
    if let Err(e) = gloo::utils::window().location().set_hash(route.path()) {
        log::error!("Failed to navigate to {}: {:?}", route.path(), e);
    }
}

/// Redirect to the dashboard when the hash names no known view
fn resolve_current() -> Route {
    let hash = current_hash();
    let route = Route::from_path(&hash);
    let normalized = hash.trim_start_matches('#');
    if !normalized.is_empty() && normalized.trim_end_matches('/') != route.path().trim_end_matches('/') {
        set_hash(route);
    }
    route
}

pub struct UseRouteResult {
    pub route: Route,
    pub navigate: Callback<Route>,
}

/// Hash-based routing: tracks `location.hash` and navigates by setting it
#[hook]
pub fn use_route() -> UseRouteResult {
    let route = use_state(resolve_current);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "hashchange", move |_| {
                route.set(resolve_current());
            });
            move || drop(listener)
        });
    }

    let navigate = Callback::from(|target: Route| set_hash(target));

    UseRouteResult {
        route: *route,
        navigate,
    }
}
