use crate::cli::OutputFormat;
use crate::policy;

pub fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let policies = policy::registry().policies();

    match output_format {
        OutputFormat::Json => {
            let listed: Vec<&policy::RoutePolicy> = policies.iter().map(|p| p.as_ref()).collect();
            println!("{}", serde_json::to_string_pretty(&listed)?);
        }
        OutputFormat::Text => {
            for policy in policies {
                let roles = match &policy.allowed_roles {
                    None => "open".to_string(),
                    Some(roles) if roles.is_empty() => "nobody".to_string(),
                    Some(roles) => roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", "),
                };
                println!(
                    "{:<24} {:<32} {}",
                    policy.name,
                    roles,
                    policy.success_message.unwrap_or("-")
                );
            }
        }
    }

    Ok(())
}
