//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;

use fitbuddy::config::DEFAULT_CONFIG;

pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_then_refuses_without_force() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");

        init_command(&path, false).expect("first init");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), DEFAULT_CONFIG);

        assert!(init_command(&path, false).is_err());
        init_command(&path, true).expect("forced init");
    }
}
