//! Player directory: photo and bio lookups merged into roster/career payloads.
//!
//! The directory is fetched once when the client is built and is read-only
//! afterwards. A failed fetch leaves it empty; enrichment then becomes a no-op.

use std::collections::HashMap;

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cpl::http::HttpFetcher;
use crate::cpl::types::Person;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCacheEntry {
    pub id: String,
    pub photo_url: String,
    pub bio: String,
    pub name: String,
}

/// Records that can receive directory fields.
pub trait Enrichable {
    fn apply_profile(&mut self, profile: &PlayerCacheEntry);
}

impl Enrichable for Person {
    fn apply_profile(&mut self, profile: &PlayerCacheEntry) {
        self.photo_url = Some(profile.photo_url.clone());
        self.bio = Some(profile.bio.clone());
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    entries: HashMap<String, PlayerCacheEntry>,
}

impl PlayerDirectory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fetch the bulk listing once. Never fails: errors are logged and an
    /// empty directory is returned.
    pub async fn initialize(http: &HttpFetcher, url: &str) -> Self {
        let payload: Value = match http.get_json(url, &[]).await {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to initialize player cache: {e}");
                return Self::empty();
            }
        };

        match Self::from_listing(&payload) {
            Some(directory) => {
                info!("Player cache initialized with {} players", directory.len());
                directory
            }
            None => {
                warn!("Failed to initialize player cache: No players data found");
                Self::empty()
            }
        }
    }

    /// Build from a `{"players": [...]}` payload. `None` when the list is missing.
    ///
    /// Entries without an id are skipped; the photo is `thumbnail`, then
    /// `default`, then empty.
    pub fn from_listing(payload: &Value) -> Option<Self> {
        let players = payload.get("players")?.as_array()?;

        let entries = players
            .iter()
            .filter_map(|p| {
                let id = id_string(p.get("id")?)?;
                let photo_url = non_empty_str(p, "thumbnail")
                    .or_else(|| non_empty_str(p, "default"))
                    .unwrap_or_default();
                let entry = PlayerCacheEntry {
                    id: id.clone(),
                    photo_url: photo_url.to_string(),
                    bio: non_empty_str(p, "bio").unwrap_or_default().to_string(),
                    name: non_empty_str(p, "name").unwrap_or_default().to_string(),
                };
                Some((id, entry))
            })
            .collect();

        Some(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&PlayerCacheEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy photo URL and bio for `id` onto `record`. Unknown ids leave it untouched.
    pub fn enrich<R: Enrichable>(&self, record: &mut R, id: &str) {
        if let Some(profile) = self.entries.get(id) {
            record.apply_profile(profile);
        }
    }

    /// Enrich a list of people keyed by their own id.
    pub fn enrich_people(&self, people: &mut [Person]) {
        for person in people.iter_mut().filter(|p| !p.id.is_empty()) {
            let id = person.id.clone();
            self.enrich(person, &id);
        }
    }
}

fn id_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty_str<'a>(v: &'a Value, key: &str) -> Option<&'a str> {
    v.get(key)?.as_str().filter(|s| !s.is_empty())
}
