pub mod auth;
pub mod guard;
pub mod response;
pub mod validated;

pub use auth::{authenticate, CallerIdentity};
pub use guard::{authorize, check_roles, AuthorizationError};
pub use response::{ApiResponse, ApiResult};
pub use validated::ValidatedJson;
