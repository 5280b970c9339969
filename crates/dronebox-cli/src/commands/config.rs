//! Config command: write the default config file.

use std::path::Path;

use anyhow::{Result, bail};
use dronebox_core::Config;

/// Write `Config::default()` to `path`; refuses to overwrite unless `force`
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dronebox.toml");

        init(&path, false).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dronebox.toml");
        std::fs::write(&path, "[flight]\nframe_rate = 30\n").unwrap();

        assert!(init(&path, false).is_err());
        assert_eq!(Config::load(&path).unwrap().flight.frame_rate, 30);

        init(&path, true).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
