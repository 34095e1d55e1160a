use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{self, SecurityConfig};
use crate::handlers;
use crate::middleware::{authenticate, authorize};
use crate::policy::{self, names, RouteRegistry};

/// Full application router using the standard route registry
pub fn app() -> Router {
    app_with(policy::registry())
}

/// Build the router against an explicit registry
pub fn app_with(registry: &RouteRegistry) -> Router {
    let config = config::config();

    Router::new()
        // Public
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health))
        // Guarded API
        .merge(api_routes(registry))
        .fallback(handlers::system::not_found)
        // Global middleware; authentication runs before every route guard
        .layer(middleware::from_fn(authenticate))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer(&config.security))
        .layer(TraceLayer::new_for_http())
}

fn api_routes(registry: &RouteRegistry) -> Router {
    use handlers::{appointments, monitorings, session, system, treatments, users};

    Router::new()
        .route("/api/roles", guarded(registry, names::ROLES_LIST, get(system::roles)))
        .route("/api/auth/whoami", guarded(registry, names::AUTH_WHOAMI, get(session::whoami)))
        .route(
            "/api/appointments/confirm",
            guarded(registry, names::APPOINTMENTS_CONFIRM, post(appointments::confirm)),
        )
        .route(
            "/api/appointments/cancel",
            guarded(registry, names::APPOINTMENTS_CANCEL, post(appointments::cancel)),
        )
        .route(
            "/api/treatments",
            guarded(registry, names::TREATMENTS_CREATE, post(treatments::create)),
        )
        .route(
            "/api/monitorings",
            guarded(registry, names::MONITORINGS_CREATE, post(monitorings::create)),
        )
        .route("/api/users", guarded(registry, names::USERS_CREATE, post(users::create)))
}

/// Attach the authorization guard for `name` to a method router
fn guarded(registry: &RouteRegistry, name: &'static str, route: MethodRouter) -> MethodRouter {
    let policy = registry.require(name);
    route.route_layer(middleware::from_fn_with_state(policy, authorize))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    if security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
