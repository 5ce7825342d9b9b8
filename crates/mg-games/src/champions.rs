//! Champion roster for tug-of-war.
//!
//! The catalog is read once and never changes. Files use the Data Dragon
//! `champion.json` layout so a downloaded roster can be used directly.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mg_core::{GameError, GameResult};

use crate::text::fold;

const COLLABORATOR: &str = "champion catalog";
const CDN: &str = "https://ddragon.leagueoflegends.com/cdn";

/// One champion and its combat attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    /// Catalog key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Attack rating.
    pub attack: u32,
    /// Defense rating.
    pub defense: u32,
    /// Magic rating.
    pub magic: u32,
    /// Image file name, relative to the CDN image folder.
    pub image: String,
}

impl Champion {
    /// Create a champion whose image is `<id>.png`.
    pub fn new(id: &str, name: &str, attack: u32, defense: u32, magic: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            attack,
            defense,
            magic,
            image: format!("{id}.png"),
        }
    }

    /// This champion's contribution to a team's force.
    ///
    /// Summed as `u64` so any attributes a catalog file can hold add up
    /// exactly.
    pub fn force(&self) -> u64 {
        u64::from(self.attack) + u64::from(self.defense) + u64::from(self.magic)
    }

    /// Full image URL for a Data Dragon release.
    pub fn image_url(&self, version: &str) -> String {
        format!("{CDN}/{version}/img/champion/{}", self.image)
    }
}

/// Read-only roster keyed by champion id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChampionCatalog {
    champions: BTreeMap<String, Champion>,
}

impl ChampionCatalog {
    /// Build a catalog from champions. A repeated id keeps the last entry.
    pub fn new(champions: impl IntoIterator<Item = Champion>) -> Self {
        Self {
            champions: champions.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    /// The offline roster bundled with the game.
    pub fn builtin() -> Self {
        Self::new([
            Champion::new("Aatrox", "Aatrox", 8, 4, 3),
            Champion::new("Ahri", "Ahri", 3, 4, 8),
            Champion::new("Akali", "Akali", 5, 3, 8),
            Champion::new("Alistar", "Alistar", 6, 9, 5),
            Champion::new("Amumu", "Amumu", 2, 6, 8),
            Champion::new("Annie", "Annie", 2, 3, 10),
            Champion::new("Ashe", "Ashe", 7, 3, 2),
            Champion::new("Brand", "Brand", 2, 2, 9),
            Champion::new("Braum", "Braum", 3, 9, 4),
            Champion::new("Caitlyn", "Caitlyn", 8, 2, 2),
            Champion::new("Darius", "Darius", 9, 5, 1),
            Champion::new("Garen", "Garen", 7, 7, 1),
        ])
    }

    /// Parse a Data Dragon `champion.json` document.
    pub fn from_data_dragon(json: &str) -> GameResult<Self> {
        let doc: DataDragon = serde_json::from_str(json).map_err(|e| unavailable(e.to_string()))?;
        Ok(Self::new(doc.data.into_values().map(Champion::from)))
    }

    /// Look up a champion by id.
    pub fn get(&self, id: &str) -> Option<&Champion> {
        self.champions.get(id)
    }

    /// Returns true if `id` is in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.champions.contains_key(id)
    }

    /// Find an id by exact id or case-insensitive name.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        let query = query.trim();
        if let Some((id, _)) = self.champions.get_key_value(query) {
            return Some(id.as_str());
        }
        let wanted = query.to_lowercase();
        self.champions
            .values()
            .find(|c| c.id.to_lowercase() == wanted || c.name.to_lowercase() == wanted)
            .map(|c| c.id.as_str())
    }

    /// All ids in order.
    pub fn ids(&self) -> Vec<&str> {
        self.champions.keys().map(String::as_str).collect()
    }

    /// All champions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Champion> {
        self.champions.values()
    }

    /// Champions whose name contains `term`, ignoring case and accents.
    pub fn search(&self, term: &str) -> Vec<&Champion> {
        let term = fold(term.trim());
        self.champions
            .values()
            .filter(|c| fold(&c.name).contains(&term))
            .collect()
    }

    /// Number of champions.
    pub fn len(&self) -> usize {
        self.champions.len()
    }

    /// Returns true if the catalog has no champions.
    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

/// Where the champion catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChampionSource {
    /// The roster compiled into the binary.
    #[default]
    Builtin,
    /// A Data Dragon `champion.json` file.
    File(PathBuf),
}

impl ChampionSource {
    /// Load the catalog. File and parse failures surface as
    /// [`GameError::CollaboratorUnavailable`].
    pub fn load(&self) -> GameResult<ChampionCatalog> {
        match self {
            Self::Builtin => Ok(ChampionCatalog::builtin()),
            Self::File(path) => load_file(path),
        }
    }
}

fn load_file(path: &Path) -> GameResult<ChampionCatalog> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| unavailable(format!("{}: {e}", path.display())))?;
    ChampionCatalog::from_data_dragon(&json)
}

fn unavailable(reason: String) -> GameError {
    GameError::CollaboratorUnavailable {
        collaborator: COLLABORATOR,
        reason,
    }
}

#[derive(Deserialize)]
struct DataDragon {
    data: BTreeMap<String, DataDragonEntry>,
}

#[derive(Deserialize)]
struct DataDragonEntry {
    id: String,
    name: String,
    info: DataDragonInfo,
    image: Option<DataDragonImage>,
}

#[derive(Deserialize)]
struct DataDragonInfo {
    attack: u32,
    defense: u32,
    magic: u32,
}

#[derive(Deserialize)]
struct DataDragonImage {
    full: String,
}

impl From<DataDragonEntry> for Champion {
    fn from(entry: DataDragonEntry) -> Self {
        let image = entry
            .image
            .map(|i| i.full)
            .unwrap_or_else(|| format!("{}.png", entry.id));
        Self {
            id: entry.id,
            name: entry.name,
            attack: entry.info.attack,
            defense: entry.info.defense,
            magic: entry.info.magic,
            image,
        }
    }
}
