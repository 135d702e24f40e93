// In memory activity registry.
//
// Each activity sits behind its own lock. The map of names never changes after
// construction, so lookups need no lock and sign-ups to different activities
// never contend.

use crate::modules::activities::adapters::outbound::registry::{ActivityRegistry, RegistryError};
use crate::modules::activities::core::activity::{Activity, SignUpOutcome};
use crate::modules::activities::core::catalog::ActivityCatalog;
use crate::modules::activities::core::seed::seed_activities;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct InMemoryActivityRegistry {
    activities: Vec<RwLock<Activity>>,
    index: HashMap<String, usize>,
    seed: Vec<Activity>,
    is_offline: bool,
}

impl Default for InMemoryActivityRegistry {
    fn default() -> Self {
        Self::new(seed_activities())
    }
}

impl InMemoryActivityRegistry {
    /// Later entries with an already-used name are dropped.
    pub fn new(activities: Vec<Activity>) -> Self {
        let mut index = HashMap::with_capacity(activities.len());
        let mut seed = Vec::with_capacity(activities.len());
        for activity in activities {
            if index.contains_key(&activity.name) {
                continue;
            }
            index.insert(activity.name.clone(), seed.len());
            seed.push(activity);
        }
        let activities = seed.iter().cloned().map(RwLock::new).collect();
        Self {
            activities,
            index,
            seed,
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RegistryError> {
        if self.is_offline {
            return Err(RegistryError::Backend("Activity registry offline".into()));
        }
        Ok(())
    }

    fn find(&self, name: &str) -> Result<&RwLock<Activity>, RegistryError> {
        self.index
            .get(name)
            .map(|&i| &self.activities[i])
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }
}

#[async_trait::async_trait]
impl ActivityRegistry for InMemoryActivityRegistry {
    async fn list(&self) -> Result<ActivityCatalog, RegistryError> {
        self.ensure_online()?;
        let mut snapshot = Vec::with_capacity(self.activities.len());
        for activity in &self.activities {
            snapshot.push(activity.read().await.clone());
        }
        Ok(ActivityCatalog::new(snapshot))
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignUpOutcome, RegistryError> {
        self.ensure_online()?;
        let mut guard = self.find(activity)?.write().await;
        Ok(guard.sign_up(email)?)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<(), RegistryError> {
        self.ensure_online()?;
        let mut guard = self.find(activity)?.write().await;
        Ok(guard.unregister(email)?)
    }

    async fn reset(&self) -> Result<(), RegistryError> {
        self.ensure_online()?;
        for (activity, initial) in self.activities.iter().zip(&self.seed) {
            activity.write().await.participants = initial.participants.clone();
        }
        Ok(())
    }
}
