//! Address book of servers the user can send commands to.
//!
//! The client itself only needs an [Endpoint], a secret and a command; this
//! module keeps the `(endpoint, secret, name)` records that feed it. How the
//! records are stored is up to the [ServerRegistry] implementation.
use std::collections::BTreeMap;

use crate::{address::Endpoint, error::RconError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEntry {
    endpoint: Endpoint,
    secret: String,
    name: String,
}

impl ServerEntry {
    /// Validates and builds an entry. All three inputs are trimmed first; the
    /// address must parse and neither the secret nor the name may be empty.
    pub fn new(address: &str, secret: &str, name: &str) -> Result<Self, RconError> {
        let endpoint = Endpoint::parse(address.trim())?;

        let secret = secret.trim();
        if secret.is_empty() {
            return Err(RconError::InvalidServer("rcon password is empty"));
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(RconError::InvalidServer("server name is empty"));
        }

        Ok(ServerEntry {
            endpoint,
            secret: secret.to_string(),
            name: name.to_string(),
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn secret(&self) -> &str {
        self.secret.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// `name (host:port)`, how servers are shown in pick lists.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.endpoint)
    }
}

/// Keyed by endpoint: at most one entry per address.
pub trait ServerRegistry {
    fn lookup(&self, endpoint: &Endpoint) -> Option<&ServerEntry>;

    fn list(&self) -> Vec<&ServerEntry>;

    /// Inserts or replaces, returning the entry that was replaced.
    fn upsert(&mut self, entry: ServerEntry) -> Option<ServerEntry>;

    fn remove(&mut self, endpoint: &Endpoint) -> Result<ServerEntry, RconError>;

    /// Adds an entry for an address that is not registered yet.
    fn insert_new(&mut self, entry: ServerEntry) -> Result<(), RconError> {
        if self.lookup(entry.endpoint()).is_some() {
            return Err(RconError::DuplicateServer(*entry.endpoint()));
        }
        self.upsert(entry);
        Ok(())
    }

    /// Reverse of [ServerEntry::label].
    fn find_by_label(&self, label: &str) -> Option<&ServerEntry> {
        self.list().into_iter().find(|entry| entry.label() == label)
    }
}

/// Registry held in memory, listed in address order.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    servers: BTreeMap<Endpoint, ServerEntry>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

impl ServerRegistry for MemoryRegistry {
    fn lookup(&self, endpoint: &Endpoint) -> Option<&ServerEntry> {
        self.servers.get(endpoint)
    }

    fn list(&self) -> Vec<&ServerEntry> {
        self.servers.values().collect()
    }

    fn upsert(&mut self, entry: ServerEntry) -> Option<ServerEntry> {
        self.servers.insert(*entry.endpoint(), entry)
    }

    fn remove(&mut self, endpoint: &Endpoint) -> Result<ServerEntry, RconError> {
        self.servers
            .remove(endpoint)
            .ok_or(RconError::UnknownServer(*endpoint))
    }
}
