use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::fetch::is_remote;

/// Print the configured sources with a cheap health probe: a local path
/// must exist, a remote location must be a well-formed URL. No fetch is
/// performed.
pub fn list_sources(config: &Config) -> Result<()> {
    println!("{:<12} {:<6} {:<8} LOCATION", "SOURCE", "KIND", "HEALTHY");

    for (name, location) in [
        ("projects", &config.sources.projects),
        ("skills", &config.sources.skills),
        ("experience", &config.sources.experience),
        ("videos", &config.sources.videos),
    ] {
        let (kind, healthy) = if is_remote(location) {
            ("url", reqwest::Url::parse(location).is_ok())
        } else {
            ("file", Path::new(location).exists())
        };
        println!("{:<12} {:<6} {:<8} {}", name, kind, healthy, location);
    }

    Ok(())
}
