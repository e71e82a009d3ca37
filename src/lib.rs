pub mod assets;
pub mod cli;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod relay;
pub mod routes;
pub mod session;
pub mod template;

pub use config::Config;
pub use routes::AppState;

use portfolio_profile::Profile;

/// Resolves the page content: CLI override, then `profile.path`, then the
/// built-in profile.
pub fn load_profile(config: &Config, path_override: Option<String>) -> anyhow::Result<Profile> {
    match path_override.or_else(|| config.profile.path.clone()) {
        Some(path) => {
            let profile = Profile::load(&path)?;
            tracing::info!(path = %path, "Profile loaded");
            Ok(profile)
        }
        None => {
            tracing::info!("Using built-in profile");
            Ok(Profile::default())
        }
    }
}
