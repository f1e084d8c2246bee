//! Configuration management commands.

use console::style;

use crate::config::Settings;

/// Print the effective configuration after file and environment resolution.
pub async fn cmd_config_show(settings: &Settings) -> anyhow::Result<()> {
    println!("\n{}", style("Effective configuration").bold());
    println!("{}", "-".repeat(40));
    match &settings.config_file {
        Some(path) => println!("{:<20} {}", "Config file:", path.display()),
        None => println!("{:<20} {}", "Config file:", "(none, defaults)"),
    }
    println!("{:<20} {}", "Host:", settings.host);
    println!("{:<20} {}", "Port:", settings.port);
    println!("{:<20} {}", "Max upload bytes:", settings.max_upload_bytes);
    if settings.allowed_origins.is_empty() {
        println!("{:<20} {}", "CORS origins:", "(permissive)");
    } else {
        println!(
            "{:<20} {}",
            "CORS origins:",
            settings.allowed_origins.join(", ")
        );
    }
    Ok(())
}
