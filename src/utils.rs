/*
    Copyright 2025 TII (SSRC) and the contributors
    SPDX-License-Identifier: Apache-2.0
*/
use std::fs;
use std::path::Path;

use anyhow::Context;
use log::*;

use crate::config::{NetworkConfig, parse_config};

/// Loads every `*.conf` network definition below `dir`. Unreadable or
/// malformed files are logged and skipped; networks without a `# Name`
/// fall back to the file stem.
pub fn load_existing_networks(dir: &Path) -> anyhow::Result<Vec<NetworkConfig>> {
    let mut networks = vec![];

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Could not read configuration directory {}", dir.display()))?;

    for entry in entries {
        let file = entry?;
        if file.file_type()?.is_file() && file.path().extension().is_some_and(|e| e == "conf") {
            let file_path = file.path();
            let Ok(file_content) = fs::read_to_string(&file_path) else {
                error!("Could not read file: {}", file_path.display());
                continue;
            };

            let cfgs = match parse_config(&file_content) {
                Ok(cfgs) => cfgs,
                Err(err) => {
                    error!("Could not parse file {}: {}", file_path.display(), err);
                    continue;
                }
            };

            for mut cfg in cfgs {
                if cfg.name.is_none() {
                    if let Some(file_name) = file_path.file_stem().and_then(|n| n.to_str()) {
                        cfg.name = Some(file_name.to_string());
                    }
                }
                networks.push(cfg);
            }
        }
    }

    Ok(networks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::write_config;

    #[test]
    fn loads_conf_files_and_skips_the_rest() {
        let dir = tempfile::tempdir().unwrap();

        let libera = NetworkConfig {
            name: Some("Libera Chat".into()),
            server: Some("irc.libera.chat".into()),
            port: Some("6697".into()),
            ..Default::default()
        };
        fs::write(dir.path().join("libera.conf"), write_config(&[libera])).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a network file").unwrap();
        fs::write(dir.path().join("broken.conf"), "[Nonsense]\n").unwrap();

        let networks = load_existing_networks(dir.path()).unwrap();
        assert_eq!(networks.len(), 1);
        assert_eq!(networks[0].name.as_deref(), Some("Libera Chat"));
    }

    #[test]
    fn name_falls_back_to_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("oftc.conf"),
            "[Network]\nServer = irc.oftc.net\n",
        )
        .unwrap();

        let networks = load_existing_networks(dir.path()).unwrap();
        assert_eq!(networks.len(), 1);
        assert_eq!(networks[0].name.as_deref(), Some("oftc"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(load_existing_networks(&missing).is_err());
    }

    #[test]
    fn one_file_may_define_several_networks() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("all.conf"),
            "[Network]\n# Name = Alpha\n\n[Network]\n# Name = Beta\n",
        )
        .unwrap();

        let networks = load_existing_networks(dir.path()).unwrap();
        let mut names: Vec<_> = networks.iter().filter_map(|n| n.name.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["Alpha", "Beta"]);
    }
}
