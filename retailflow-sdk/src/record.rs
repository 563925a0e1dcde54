//! Workflow record and its persisted JSON shape

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The event from a source app that starts a workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub app: String,
    pub event: String,
}

impl Trigger {
    pub fn new(app: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            event: event.into(),
        }
    }
}

/// A saved pairing of one trigger with app-scoped action lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    pub trigger: Trigger,
    #[serde(default)]
    pub actions: ActionMap,
}

/// Ordered mapping of app name to the action names chosen for it.
///
/// Apps keep the order in which they first received an action, and that
/// order survives a JSON round trip. Serialized as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionMap {
    entries: Vec<(String, Vec<String>)>,
}

impl ActionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Actions for `app`, if it has any entry.
    pub fn get(&self, app: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == app)
            .map(|(_, actions)| actions.as_slice())
    }

    /// Replace the actions for `app`, keeping its position if already present.
    pub fn insert(&mut self, app: impl Into<String>, actions: Vec<String>) {
        let app = app.into();
        match self.entries.iter_mut().find(|(name, _)| *name == app) {
            Some((_, existing)) => *existing = actions,
            None => self.entries.push((app, actions)),
        }
    }

    pub fn remove(&mut self, app: &str) -> Option<Vec<String>> {
        let pos = self.entries.iter().position(|(name, _)| name == app)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn apps(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, actions)| (name.as_str(), actions.as_slice()))
    }

    pub(crate) fn get_mut(&mut self, app: &str) -> Option<&mut Vec<String>> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == app)
            .map(|(_, actions)| actions)
    }
}

impl<A, I, S> FromIterator<(A, I)> for ActionMap
where
    A: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (A, I)>>(iter: T) -> Self {
        let mut map = ActionMap::new();
        for (app, actions) in iter {
            map.insert(app, actions.into_iter().map(Into::into).collect());
        }
        map
    }
}

impl Serialize for ActionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (app, actions) in &self.entries {
            map.serialize_entry(app, actions)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ActionMapVisitor;

        impl<'de> Visitor<'de> for ActionMapVisitor {
            type Value = ActionMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of app names to action lists")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<ActionMap, M::Error> {
                let mut map = ActionMap::new();
                while let Some((app, actions)) = access.next_entry::<String, Vec<String>>()? {
                    map.insert(app, actions);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ActionMapVisitor)
    }
}
