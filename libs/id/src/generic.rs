//! Untyped resource IDs for when the kind is not known up front.

use std::fmt;

use crate::IdError;

const KIND: &str = "resource";

/// A resource ID split into its well-known scopes and remaining key/value pairs.
///
/// `/subscriptions/s/resourceGroups/rg/providers/Microsoft.Sql/servers/a/databases/b`
/// parses to subscription `s`, resource group `rg`, provider `Microsoft.Sql` and
/// path `[("servers", "a"), ("databases", "b")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericResourceId {
    pub subscription_id: String,
    pub resource_group: Option<String>,
    pub provider: Option<String>,
    pub path: Vec<(String, String)>,
}

impl GenericResourceId {
    /// Parses any ARM resource ID made of key/value pairs.
    pub fn parse(input: &str) -> Result<Self, IdError> {
        let trimmed = input.trim_matches('/');
        if trimmed.is_empty() {
            return Err(IdError::Empty { kind: KIND });
        }

        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() % 2 != 0 {
            return Err(IdError::OddSegmentCount { count: parts.len() });
        }

        let mut pairs: Vec<(String, String)> = Vec::with_capacity(parts.len() / 2);
        for (index, pair) in parts.chunks_exact(2).enumerate() {
            let &[key, value] = pair else {
                continue;
            };
            if key.is_empty() || value.is_empty() {
                let offset = if key.is_empty() { 1 } else { 2 };
                return Err(IdError::EmptyValue {
                    position: index * 2 + offset,
                });
            }
            if pairs.iter().any(|(existing, _)| existing == key) {
                return Err(IdError::DuplicateKey {
                    key: key.to_string(),
                });
            }
            pairs.push((key.to_string(), value.to_string()));
        }

        let mut pairs = pairs.into_iter();
        let subscription_id = match pairs.next() {
            Some((key, value)) if key == "subscriptions" => value,
            Some((key, _)) => {
                return Err(IdError::UnexpectedSegment {
                    kind: KIND,
                    position: 1,
                    expected: "subscriptions",
                    actual: key,
                })
            }
            None => return Err(IdError::Empty { kind: KIND }),
        };

        let mut id = Self {
            subscription_id,
            resource_group: None,
            provider: None,
            path: pairs.collect(),
        };
        id.resource_group = id.take_leading("resourceGroups");
        id.provider = id.take_leading("providers");
        Ok(id)
    }

    /// Removes the value for `key` from the remaining path.
    pub fn pop(&mut self, key: &str) -> Result<String, IdError> {
        let index = self
            .path
            .iter()
            .position(|(existing, _)| existing == key)
            .ok_or_else(|| IdError::MissingKey {
                key: key.to_string(),
            })?;
        Ok(self.path.remove(index).1)
    }

    /// Returns the value for `key` in the remaining path.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.path
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    fn take_leading(&mut self, key: &str) -> Option<String> {
        match self.path.first() {
            Some((first, _)) if first == key => Some(self.path.remove(0).1),
            _ => None,
        }
    }
}

impl fmt::Display for GenericResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/subscriptions/{}", self.subscription_id)?;
        if let Some(resource_group) = &self.resource_group {
            write!(f, "/resourceGroups/{resource_group}")?;
        }
        if let Some(provider) = &self.provider {
            write!(f, "/providers/{provider}")?;
        }
        for (key, value) in &self.path {
            write!(f, "/{key}/{value}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for GenericResourceId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
