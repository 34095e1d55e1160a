//! Static route configuration.
//!
//! Every guarded route has a [`RoutePolicy`]: the roles allowed to call it and
//! the message its success envelope carries. Policies are declared once in
//! [`RouteRegistry::standard`] and shared read-only for the process lifetime.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::middleware::response::ApiResponse;
use crate::types::RoleCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePolicy {
    pub name: &'static str,
    /// `None` leaves the route unrestricted. An empty list admits nobody.
    pub allowed_roles: Option<Vec<RoleCode>>,
    pub success_message: Option<&'static str>,
}

impl RoutePolicy {
    pub fn route(name: &'static str) -> Self {
        Self {
            name,
            allowed_roles: None,
            success_message: None,
        }
    }

    pub fn require_roles(mut self, roles: &[RoleCode]) -> Self {
        self.allowed_roles = Some(roles.to_vec());
        self
    }

    pub fn message(mut self, message: &'static str) -> Self {
        self.success_message = Some(message);
        self
    }

    /// Policy used when a route name has no registry entry
    pub fn deny_all(name: &'static str) -> Self {
        Self::route(name).require_roles(&[])
    }

    pub fn is_restricted(&self) -> bool {
        self.allowed_roles.is_some()
    }

    /// Wrap handler output in this route's success envelope
    pub fn respond<T: Serialize>(&self, data: T) -> ApiResponse<T> {
        ApiResponse::success(data).with_message(self.success_message)
    }

    pub fn respond_created<T: Serialize>(&self, data: T) -> ApiResponse<T> {
        ApiResponse::created(data).with_message(self.success_message)
    }
}

pub mod names {
    pub const ROLES_LIST: &str = "roles.list";
    pub const AUTH_WHOAMI: &str = "auth.whoami";
    pub const APPOINTMENTS_CONFIRM: &str = "appointments.confirm";
    pub const APPOINTMENTS_CANCEL: &str = "appointments.cancel";
    pub const TREATMENTS_CREATE: &str = "treatments.create";
    pub const MONITORINGS_CREATE: &str = "monitorings.create";
    pub const USERS_CREATE: &str = "users.create";
}

#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    policies: HashMap<&'static str, Arc<RoutePolicy>>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, policy: RoutePolicy) -> Self {
        self.policies.insert(policy.name, Arc::new(policy));
        self
    }

    pub fn standard() -> Self {
        use names::*;
        use RoleCode::*;

        Self::new()
            .with(RoutePolicy::route(ROLES_LIST))
            .with(RoutePolicy::route(AUTH_WHOAMI).message("Session information"))
            .with(
                RoutePolicy::route(APPOINTMENTS_CONFIRM)
                    .require_roles(&[Patient, Admin])
                    .message("Appointment confirmed"),
            )
            .with(
                RoutePolicy::route(APPOINTMENTS_CANCEL)
                    .require_roles(&[Patient, Doctor, Admin])
                    .message("Appointment cancelled"),
            )
            .with(
                RoutePolicy::route(TREATMENTS_CREATE)
                    .require_roles(&[Doctor])
                    .message("Treatment created"),
            )
            .with(
                RoutePolicy::route(MONITORINGS_CREATE)
                    .require_roles(&[Doctor, LabOperator])
                    .message("Monitoring entry created"),
            )
            .with(
                RoutePolicy::route(USERS_CREATE)
                    .require_roles(&[Admin])
                    .message("User created"),
            )
    }

    pub fn get(&self, name: &str) -> Option<Arc<RoutePolicy>> {
        self.policies.get(name).cloned()
    }

    /// Look up a policy, falling back to [`RoutePolicy::deny_all`]
    pub fn require(&self, name: &'static str) -> Arc<RoutePolicy> {
        self.get(name).unwrap_or_else(|| {
            tracing::error!("No route policy registered for '{}'; denying all callers", name);
            Arc::new(RoutePolicy::deny_all(name))
        })
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Policies sorted by route name
    pub fn policies(&self) -> Vec<Arc<RoutePolicy>> {
        let mut all: Vec<_> = self.policies.values().cloned().collect();
        all.sort_by_key(|p| p.name);
        all
    }
}

pub static ROUTE_POLICIES: Lazy<RouteRegistry> = Lazy::new(RouteRegistry::standard);

pub fn registry() -> &'static RouteRegistry {
    &ROUTE_POLICIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_contents() {
        let registry = RouteRegistry::standard();
        assert_eq!(registry.len(), 7);

        let confirm = registry.get(names::APPOINTMENTS_CONFIRM).unwrap();
        assert_eq!(confirm.allowed_roles, Some(vec![RoleCode::Patient, RoleCode::Admin]));
        assert_eq!(confirm.success_message, Some("Appointment confirmed"));

        let roles = registry.get(names::ROLES_LIST).unwrap();
        assert!(!roles.is_restricted());
    }

    #[test]
    fn test_unknown_route_fails_closed() {
        let policy = RouteRegistry::new().require("nope.missing");
        assert_eq!(policy.allowed_roles, Some(vec![]));
        assert!(policy.is_restricted());
    }

    #[test]
    fn test_policies_sorted_by_name() {
        let names: Vec<_> = RouteRegistry::standard()
            .policies()
            .iter()
            .map(|p| p.name)
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
