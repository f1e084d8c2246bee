//! Web server command.

use console::style;

use crate::config::Settings;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: Option<&str>) -> anyhow::Result<()> {
    let (host, port) = match bind {
        Some(bind) => parse_bind_address(bind, settings)?,
        None => (settings.host.clone(), settings.port),
    };

    println!(
        "{} Starting bond checker at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8080" -> configured host, port 8080
/// - Just a host: "0.0.0.0" -> 0.0.0.0 with the configured port
/// - Host and port: "0.0.0.0:8080" -> 0.0.0.0:8080
fn parse_bind_address(bind: &str, settings: &Settings) -> anyhow::Result<(String, u16)> {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok((settings.host.clone(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use the configured port
    Ok((bind.to_string(), settings.port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_only() {
        let settings = Settings::default();
        let (host, port) = parse_bind_address("8080", &settings).unwrap();
        assert_eq!(host, "127.0.0.1");
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_host_only() {
        let settings = Settings::default();
        let (host, port) = parse_bind_address("0.0.0.0", &settings).unwrap();
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, settings.port);
    }

    #[test]
    fn test_parse_host_and_port() {
        let settings = Settings::default();
        let (host, port) = parse_bind_address("0.0.0.0:9000", &settings).unwrap();
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, 9000);
    }
}
