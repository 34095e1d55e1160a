use std::process::{Command, Output};

use anyhow::Result;

fn clinic_api(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_clinic-api"))
        .args(args)
        .env("APP_ENV", "development")
        .output()?;
    Ok(output)
}

#[test]
fn token_prints_signed_jwt() -> Result<()> {
    let output = clinic_api(&["token", "--user-id", "9", "--role", "doctor", "--hours", "2"])?;

    assert!(output.status.success());
    let token = String::from_utf8(output.stdout)?;
    assert_eq!(token.trim().split('.').count(), 3);
    Ok(())
}

#[test]
fn token_with_huge_lifetime_fails_without_panicking() -> Result<()> {
    for hours in ["9000000000000000", "18446744073709551615", "0"] {
        let output = clinic_api(&["token", "--user-id", "9", "--role", "DOCTOR", "--hours", hours])?;

        assert_eq!(output.status.code(), Some(1), "hours = {}", hours);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("panicked"), "hours = {}: {}", hours, stderr);
        assert!(output.stdout.is_empty());
    }
    Ok(())
}
