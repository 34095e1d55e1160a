// handlers/mod.rs - Route handlers
//
// Guarded handlers receive their `RoutePolicy` from the authorization guard
// and build the success envelope from it. Request bodies arrive already
// validated through `ValidatedJson`.

pub mod appointments;
pub mod monitorings;
pub mod session;
pub mod system;
pub mod treatments;
pub mod users;
