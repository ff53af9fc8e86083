//! `strength` subcommand.

use anyhow::Result;
use keysmith_core::calculate_strength;

pub fn run(password: &str, json: bool) -> Result<()> {
    let report = calculate_strength(password);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Password: {password}");
    println!("Strength: {} (Score: {}/4)", report.label, report.score);
    println!("Entropy:  {} bits", report.entropy);
    for warning in &report.warnings {
        println!("Warning:  {warning}");
    }
    Ok(())
}
