//! Command registry: case-insensitive key → [`CommandDefinition`], in registration order.
//!
//! Duplicate policy is reject: a second registration whose key matches an existing one ignoring case fails
//! with `DispatchError::Registration` and the first registration stays authoritative.

use crate::command::CommandDefinition;
use chatr_core::DispatchError;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct CommandRegistry {
    definitions: Vec<CommandDefinition>,
    index: HashMap<String, usize>,
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition. Rejects empty keys, keys containing whitespace and case-insensitive duplicates.
    pub fn register(&mut self, definition: CommandDefinition) -> Result<(), DispatchError> {
        let key = definition.key();
        if key.is_empty() {
            return Err(DispatchError::Registration {
                key: key.to_string(),
                reason: "key must not be empty".to_string(),
            });
        }
        if key.contains(char::is_whitespace) {
            return Err(DispatchError::Registration {
                key: key.to_string(),
                reason: "key must not contain whitespace".to_string(),
            });
        }

        let normalized = normalize(key);
        if let Some(&existing) = self.index.get(&normalized) {
            return Err(DispatchError::Registration {
                key: key.to_string(),
                reason: format!(
                    "duplicate of already registered command '{}'",
                    self.definitions[existing].key()
                ),
            });
        }

        self.index.insert(normalized, self.definitions.len());
        self.definitions.push(definition);
        Ok(())
    }

    /// Case-insensitive lookup; `None` is a normal outcome.
    pub fn lookup(&self, key: &str) -> Option<&CommandDefinition> {
        self.index
            .get(&normalize(key))
            .map(|&position| &self.definitions[position])
    }

    /// Registered keys, as given at registration, in registration order.
    pub fn list_keys(&self) -> Vec<&str> {
        self.definitions.iter().map(CommandDefinition::key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
