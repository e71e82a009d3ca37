use anyhow::Result;

/// Loads everything `serve` needs without binding a socket.
pub fn check(config: &crate::config::Config, profile_override: Option<String>) -> Result<()> {
    let profile = crate::load_profile(config, profile_override)?;
    let relay = crate::relay::from_config(config)?;

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        relay = relay.name(),
        to_name = %config.contact.to_name,
        fallback_address = %config.contact.fallback_address,
        skills = profile.skills.len(),
        projects = profile.projects.len(),
        experiences = profile.experiences.len(),
        "Configuration and profile are valid"
    );

    Ok(())
}
