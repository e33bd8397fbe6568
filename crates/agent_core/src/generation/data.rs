//! Embedded world data
//!
//! Club lists and name pools are compiled into the binary with `include_str!`
//! and parsed once on first use.

use crate::models::Nationality;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const WORLD_DATA_JSON: &str = include_str!("../../data/world_data.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamePool {
    pub first: Vec<String>,
    pub last: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldData {
    /// Club names per country, most prestigious first
    pub clubs: BTreeMap<Nationality, Vec<String>>,
    pub names: BTreeMap<Nationality, NamePool>,
    #[serde(default)]
    pub description: Option<String>,
}

static WORLD_DATA: OnceLock<WorldData> = OnceLock::new();

/// Parsed world data, cached after the first call
pub fn world_data() -> &'static WorldData {
    WORLD_DATA.get_or_init(|| {
        serde_json::from_str(WORLD_DATA_JSON).expect("Embedded world data JSON is corrupted")
    })
}

/// Name pool of a nationality; falls back to the Brazilian pool
pub fn name_pool(nationality: Nationality) -> Option<&'static NamePool> {
    let data = world_data();
    data.names.get(&nationality).or_else(|| data.names.get(&Nationality::Brazil))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_data_loaded() {
        let data = world_data();
        assert_eq!(data.clubs.len(), 3);
        for clubs in data.clubs.values() {
            assert_eq!(clubs.len(), 26, "ten per top division, ten second, six third");
        }
        assert_eq!(data.clubs[&Nationality::England][0], "Manchester United");
    }

    #[test]
    fn test_every_nationality_has_names() {
        for nationality in Nationality::ALL {
            let pool = name_pool(nationality).unwrap();
            assert!(!pool.first.is_empty());
            assert!(!pool.last.is_empty());
        }
    }

    #[test]
    fn test_club_names_are_unique() {
        let mut names: Vec<&String> = world_data().clubs.values().flatten().collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
