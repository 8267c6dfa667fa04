use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::mock_context;

/// Fallback data bundled with the binary, keyed by file stem
const BUNDLED: &[(&str, &str)] = &[
    ("MS", include_str!("../../data/mock/MS.json")),
    ("WS", include_str!("../../data/mock/WS.json")),
    ("MD", include_str!("../../data/mock/MD.json")),
    ("WD", include_str!("../../data/mock/WD.json")),
    ("XD", include_str!("../../data/mock/XD.json")),
    ("all-players", include_str!("../../data/mock/all-players.json")),
    ("sub-events", include_str!("../../data/mock/sub-events.json")),
    ("player-headshots", include_str!("../../data/mock/player-headshots.json")),
];

/// Static fallback data used when a live API cannot be reached.
///
/// Files in the override directory shadow the bundled copies.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    override_dir: Option<PathBuf>,
}

impl MockStore {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }

    /// Load and deserialize the fallback file for `key`, `None` when there is none
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(json) = self.read_json(key)? else {
            return Ok(None);
        };

        let data = serde_json::from_str(&json)
            .with_context(|| format!("{}. First 200 chars: {}", mock_context(key), preview(&json)))?;
        Ok(Some(data))
    }

    /// Like [`MockStore::load`] but a missing file is an error
    pub fn require<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        self.load(key)?
            .ok_or_else(|| anyhow::anyhow!("No fallback data for {}", key))
    }

    // --- Helper Methods ---

    fn read_json(&self, key: &str) -> Result<Option<String>> {
        if let Some(path) = self.override_path(key).filter(|path| path.exists()) {
            let json = fs::read_to_string(&path).with_context(|| mock_context(key))?;
            info!("Loaded fallback data from {}", path.display());
            return Ok(Some(json));
        }

        Ok(Self::bundled_json(key).map(|json| {
            info!("Loaded bundled fallback data for {}", key);
            json.to_string()
        }))
    }

    fn override_path(&self, key: &str) -> Option<PathBuf> {
        self.override_dir.as_deref().map(|dir| build_path(dir, key))
    }

    fn bundled_json(key: &str) -> Option<&'static str> {
        BUNDLED
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, json)| *json)
    }
}

fn build_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", key))
}

fn preview(json: &str) -> String {
    json.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Participant, PlayerHeadshot, SubEvent};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wtt_players_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_bundled_files_parse() {
        let store = MockStore::default();

        for code in ["MS", "WS", "MD", "WD", "XD"] {
            let participants: Vec<Participant> = store.require(code).unwrap();
            assert!(!participants.is_empty(), "{} should have entries", code);
            assert!(participants.iter().all(|p| p.sub_event_code == code));
        }

        let sub_events: Vec<SubEvent> = store.require("sub-events").unwrap();
        assert!(!sub_events.is_empty());

        let headshots: Vec<PlayerHeadshot> = store.require("player-headshots").unwrap();
        assert!(!headshots.is_empty());
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = MockStore::default();

        let loaded: Option<Vec<Participant>> = store.load("QD").unwrap();
        assert!(loaded.is_none());
        assert!(store.require::<Vec<Participant>>("QD").is_err());
    }

    #[test]
    fn test_override_dir_shadows_bundled() {
        let dir = temp_dir("override");
        fs::write(
            dir.join("MS.json"),
            r#"[{"ittfid": "1", "SubEventCode": "MS", "EntryDrawName": "Main Draw"}]"#,
        )
        .unwrap();
        let store = MockStore::new(Some(dir.clone()));

        let participants: Vec<Participant> = store.require("MS").unwrap();
        assert_eq!(participants.len(), 1);
        assert_eq!(participants[0].ittf_id, "1");

        // Files absent from the override dir still come from the bundle
        let doubles: Vec<Participant> = store.require("MD").unwrap();
        assert!(!doubles.is_empty());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = temp_dir("invalid");
        fs::write(dir.join("WS.json"), "{not json").unwrap();
        let store = MockStore::new(Some(dir.clone()));

        assert!(store.load::<Vec<Participant>>("WS").is_err());

        fs::remove_dir_all(dir).unwrap();
    }
}
