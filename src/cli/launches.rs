//! Launch data commands: `launches`, `launch` and `rockets`

use anyhow::{anyhow, Result};

use super::output::Output;
use crate::graphql::{ApiError, GraphqlClient, Launch};

/// Turns an API failure into the message shown to the user
fn api_failure(output: &Output, error: ApiError) -> anyhow::Error {
    output.log_api_error(&error);

    if error.requires_login() {
        anyhow!(
            "{}. The stored token was removed; run `launchpad login --token <TOKEN>`",
            error
        )
    } else {
        anyhow!("Failed to Load Data: {}", error)
    }
}

/// Lists recent launches
pub fn list(output: &Output, client: &GraphqlClient, limit: u32) -> Result<()> {
    output.verbose_ctx("launches", &format!("Fetching {} launches from {}", limit, client.endpoint()));

    let launches = client
        .launches(Some(limit))
        .map_err(|e| api_failure(output, e))?;

    output.verbose_ctx("launches", &format!("Received {} launches", launches.len()));

    if output.is_json() {
        output.data(&launches);
        return Ok(());
    }

    println!("Recent SpaceX Launches ({} launches loaded)", launches.len());
    if launches.is_empty() {
        return Ok(());
    }

    println!("{:<12} {:<28} {:<20} OUTCOME", "DATE", "MISSION", "ROCKET");
    println!("{}", "-".repeat(70));
    for launch in &launches {
        println!(
            "{:<12} {:<28} {:<20} {}",
            launch.launch_date(),
            launch.mission_name,
            format!("{} ({})", launch.rocket.rocket_name, launch.rocket.rocket_type),
            launch.outcome().label()
        );
    }

    Ok(())
}

/// Shows one launch with its details and links
pub fn show(output: &Output, client: &GraphqlClient, id: &str) -> Result<()> {
    output.verbose_ctx("launch", &format!("Fetching launch {}", id));

    let launch = client
        .launch(id)
        .map_err(|e| api_failure(output, e))?
        .ok_or_else(|| anyhow!("Launch not found: {}", id))?;

    if output.is_json() {
        output.data(&launch);
    } else {
        print_launch(&launch);
    }

    Ok(())
}

fn print_launch(launch: &Launch) {
    println!("Launch: {}", launch.id);
    println!("Mission: {}", launch.mission_name);
    println!("Date: {}", launch.launch_date());
    println!(
        "Rocket: {} ({})",
        launch.rocket.rocket_name, launch.rocket.rocket_type
    );
    println!("Outcome: {}", launch.outcome().label());

    let links = [
        ("Wikipedia", &launch.links.wikipedia),
        ("Video", &launch.links.video_link),
        ("Patch", &launch.links.mission_patch),
    ];
    for (label, link) in links {
        if let Some(url) = link {
            println!("{}: {}", label, url);
        }
    }

    if let Some(ref details) = launch.details {
        println!();
        println!("{}", details);
    }
}

/// Lists rockets
pub fn rockets(output: &Output, client: &GraphqlClient) -> Result<()> {
    output.verbose_ctx("rockets", &format!("Fetching rockets from {}", client.endpoint()));

    let rockets = client.rockets().map_err(|e| api_failure(output, e))?;

    if output.is_json() {
        output.data(&rockets);
        return Ok(());
    }

    println!("{:<16} {:<8} {:<8} {:<10} COST/LAUNCH", "NAME", "TYPE", "ACTIVE", "SUCCESS");
    println!("{}", "-".repeat(60));
    for rocket in &rockets {
        let success = rocket
            .success_rate_pct
            .map(|pct| format!("{}%", pct))
            .unwrap_or_else(|| "-".to_string());
        let cost = rocket
            .cost_per_launch
            .map(|c| format!("${}", c))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<16} {:<8} {:<8} {:<10} {}",
            rocket.name,
            rocket.rocket_type,
            if rocket.active { "yes" } else { "no" },
            success,
            cost
        );
    }

    Ok(())
}
