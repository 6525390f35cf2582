//! Local persistence for favorite tours.
//!
//! Wasm builds keep the list in `localStorage`; native builds keep a JSON
//! file in the platform data directory. Failures never take a view down:
//! loads degrade to an empty list and saves are best-effort, with the error
//! surfaced to the caller for logging.

use std::fmt;

use serde::{Deserialize, Serialize};

const STORE_KEY: &str = "omtour.favorites";

/// Favorite tour ids, kept in the order they were added. Serializes as a
/// bare JSON array so payloads written by earlier versions of the site
/// parse unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: Vec<u32>,
}

impl Favorites {
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Add or remove `id`. Returns true when the id is a favorite afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|fav| *fav == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[derive(Debug)]
pub enum StorageError {
    /// The backing store cannot be reached (no window/localStorage, or no
    /// resolvable data directory).
    Unavailable,
    Parse(serde_json::Error),
    #[cfg(not(target_arch = "wasm32"))]
    Io(std::io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "favorites store is unavailable"),
            StorageError::Parse(err) => write!(f, "favorites payload is malformed: {err}"),
            #[cfg(not(target_arch = "wasm32"))]
            StorageError::Io(err) => write!(f, "favorites file error: {err}"),
        }
    }
}

pub fn load_favorites() -> Result<Favorites, StorageError> {
    match read_raw()? {
        Some(raw) => serde_json::from_str(&raw).map_err(StorageError::Parse),
        None => Ok(Favorites::default()),
    }
}

pub fn save_favorites(favorites: &Favorites) -> Result<(), StorageError> {
    let raw = serde_json::to_string(favorites).map_err(StorageError::Parse)?;
    write_raw(&raw)
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn read_raw() -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(STORE_KEY)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn write_raw(raw: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(STORE_KEY, raw)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(not(target_arch = "wasm32"))]
fn store_path() -> Result<std::path::PathBuf, StorageError> {
    let dirs = directories::ProjectDirs::from("com", "omtour", "omtour")
        .ok_or(StorageError::Unavailable)?;
    Ok(dirs.data_dir().join("favorites.json"))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw() -> Result<Option<String>, StorageError> {
    let path = store_path()?;
    match std::fs::read_to_string(&path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(StorageError::Io(err)),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(raw: &str) -> Result<(), StorageError> {
    let path = store_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
    }
    std::fs::write(&path, raw).map_err(StorageError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut favorites = Favorites::default();
        assert!(favorites.toggle(3));
        assert!(favorites.contains(3));
        assert!(!favorites.toggle(3));
        assert!(favorites.is_empty());
    }

    #[test]
    fn toggle_preserves_insertion_order_of_others() {
        let mut favorites = Favorites::default();
        favorites.toggle(1);
        favorites.toggle(2);
        favorites.toggle(3);
        favorites.toggle(2);
        assert_eq!(serde_json::to_string(&favorites).unwrap(), "[1,3]");
    }

    #[test]
    fn payload_round_trips_as_bare_array() {
        let favorites: Favorites = serde_json::from_str("[1,5,2]").unwrap();
        assert!(favorites.contains(5));
        assert_eq!(favorites.len(), 3);
        assert_eq!(serde_json::to_string(&favorites).unwrap(), "[1,5,2]");
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let err = serde_json::from_str::<Favorites>("{\"nope\":true}").unwrap_err();
        let wrapped = StorageError::Parse(err);
        assert!(wrapped.to_string().contains("malformed"));
    }
}
