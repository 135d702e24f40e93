use crate::modules::activities::core::activity::Activity;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Copy of every activity, in registry order. Each record is read on its own,
/// so records may reflect different moments under concurrent writes.
///
/// Serializes as a JSON object keyed by activity name. A plain `serde_json`
/// map would sort the keys, so the order is kept here instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}
