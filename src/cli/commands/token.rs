use anyhow::Context;
use serde_json::json;

use crate::auth::{self, Claims};
use crate::cli::OutputFormat;
use crate::types::RoleCode;

pub fn handle(
    user_id: i64,
    role: &str,
    email: String,
    hours: Option<u64>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    if crate::is_production!() {
        anyhow::bail!("refusing to issue development tokens in production");
    }

    let role: RoleCode = role.parse()?;
    let claims = Claims::issue(user_id, email, role, hours).context("invalid token lifetime")?;
    let token = auth::generate_jwt(&claims).context("failed to sign token")?;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            json!({ "token": token, "role": role, "user_id": user_id, "expires_at": claims.exp })
        ),
        OutputFormat::Text => println!("{}", token),
    }

    Ok(())
}
