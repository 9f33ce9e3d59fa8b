use std::path::Path;
use std::{env, fs, process};

use anyhow::{Context, Result};
use rolemap::analysis::detect_gaps_with;
use rolemap::models::Severity;
use rolemap::workspace::{load_or_default, OrgManager, OrgState};

fn main() -> Result<()> {
    let arg = env::args()
        .nth(1)
        .context("Usage: cargo run --bin org_report -- <org-slug | path-to-state.json>")?;

    let (label, state) = resolve_state(&arg)?;
    let config = load_or_default()?;
    let gaps = detect_gaps_with(
        &state.people,
        &state.assignments,
        &state.activities,
        &config.analysis,
    );

    println!(
        "Organizational health report for {label}: {} finding(s)",
        gaps.len()
    );
    for gap in &gaps {
        println!(
            "[{}] {}: {} ({})",
            gap.severity.as_str(),
            gap.kind.as_str(),
            gap.message,
            gap.id
        );
        if let Some(context) = &gap.context {
            println!("    {context}");
        }
    }

    if gaps.iter().any(|g| g.severity == Severity::High) {
        process::exit(1);
    }
    Ok(())
}

fn resolve_state(arg: &str) -> Result<(String, OrgState)> {
    let path = Path::new(arg);
    if path.extension().is_some_and(|ext| ext == "json") {
        let state: OrgState = serde_json::from_slice(
            &fs::read(path).with_context(|| format!("Failed to read org state {arg}"))?,
        )
        .with_context(|| format!("Failed to parse org state {arg}"))?;
        return Ok((arg.to_string(), state));
    }

    let manager = OrgManager::new()?;
    let org = manager
        .list_orgs()?
        .into_iter()
        .find(|o| o.slug == arg)
        .with_context(|| format!("No organization with slug \"{arg}\""))?;
    let state = manager.load_state(&org)?;
    Ok((org.name.clone(), state))
}
