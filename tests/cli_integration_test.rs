use anyhow::Result;
use serde_json::{json, Value};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_vendor-growth"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn write_json(dir: &Path, name: &str, value: &Value) -> Result<String> {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_vec(value)?)?;
    Ok(path.to_str().unwrap().to_string())
}

fn listings() -> Value {
    json!([
        {
            "id": 1,
            "business_name": "Mama's Bakery",
            "category": "food",
            "target_audience": "local",
            "budget_tier": "low",
            "time_availability": "> 10 hrs",
            "goal": "sales"
        },
        {
            "id": 2,
            "business_name": "Urban Threads",
            "category": "clothing",
            "target_audience": "young",
            "budget_tier": "medium",
            "time_availability": "5-10 hrs",
            "goal": "visibility"
        },
        {
            "id": 3,
            "business_name": "Tech Fix",
            "category": "services",
            "target_audience": "local",
            "budget_tier": "zero",
            "time_availability": "< 5 hrs",
            "goal": "sales"
        }
    ])
}

#[test]
fn test_plan_command_prints_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let profile = write_json(
        temp_dir.path(),
        "vendor.json",
        &json!({"budget": 0, "time_per_week": 2, "goal": "sales"}),
    )?;

    let output = run_cli(&["plan", "--profile", &profile])?;
    assert!(output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(response["platform"], json!(["WhatsApp"]));
    assert_eq!(response["avoid"], json!(["Paid advertisements"]));
    Ok(())
}

#[test]
fn test_expansion_command_with_collaborations() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let profile = write_json(
        temp_dir.path(),
        "vendor.json",
        &json!({"budget": 100, "time_per_week": 5}),
    )?;

    let output = run_cli(&["expansion", "--profile", &profile, "--collaborations", "2"])?;
    assert!(output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(response["eligible"], json!(true));
    assert_eq!(
        response["recommended_support"],
        json!(["Paid advertising", "Cross-vendor campaigns"])
    );
    Ok(())
}

#[test]
fn test_match_command() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let a = write_json(temp_dir.path(), "a.json", &json!({"category": "food"}))?;
    let b = write_json(temp_dir.path(), "b.json", &json!({"category": "clothing", "budget": 4}))?;

    let output = run_cli(&["match", "--profile", &a, "--other", &b])?;
    assert!(output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(response, json!(3));
    Ok(())
}

#[test]
fn test_matches_command_respects_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let all = listings();
    let target = write_json(temp_dir.path(), "target.json", &all[0])?;
    let candidates = write_json(temp_dir.path(), "all.json", &all)?;

    let config_path = temp_dir.path().join("engine.toml");
    std::fs::write(&config_path, "[matching]\nmin_score = 2\nlimit = 1\n")?;

    let output = run_cli(&[
        "matches",
        "--listing",
        &target,
        "--candidates",
        &candidates,
        "--config",
        config_path.to_str().unwrap(),
    ])?;
    assert!(output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout)?;
    let matches = response.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["vendor_id"], json!(3));
    assert_eq!(matches[0]["match_score"], json!(3));
    Ok(())
}

#[test]
fn test_dashboard_command() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let listing = write_json(temp_dir.path(), "listing.json", &listings()[1])?;

    let output = run_cli(&["dashboard", "--listing", &listing, "--pretty"])?;
    assert!(output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(response["resource_score"]["growth_capacity"], json!(3));
    assert_eq!(
        response["growth_strategy"]["strategy_name"],
        json!("Consistent Organic Growth")
    );
    assert_eq!(
        response["platform_recommendations"][0]["platform"],
        json!("Instagram")
    );
    Ok(())
}

#[test]
fn test_invalid_profile_exits_with_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let profile = write_json(temp_dir.path(), "bad.json", &json!({"budget": "lots"}))?;

    let output = run_cli(&["content", "--profile", &profile])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("budget"));
    Ok(())
}

#[test]
fn test_missing_file_is_system_error() -> Result<()> {
    let output = run_cli(&["plan", "--profile", "/no/such/vendor.json"])?;
    assert_eq!(output.status.code(), Some(3));
    Ok(())
}

#[test]
fn test_invalid_config_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let profile = write_json(temp_dir.path(), "vendor.json", &json!({}))?;
    let config_path = temp_dir.path().join("engine.toml");
    std::fs::write(&config_path, "[matching]\nlimit = 0\n")?;

    let output = run_cli(&[
        "plan",
        "--profile",
        &profile,
        "--config",
        config_path.to_str().unwrap(),
    ])?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}
