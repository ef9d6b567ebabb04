use std::collections::{HashMap, HashSet};

use super::client::Client;

/// Topic-keyed registry of subscribed clients.
///
/// Each topic keeps its subscribers in subscription order. Registrations are
/// not deduplicated: adding the same client twice to a topic yields two
/// entries. Every client that appears under a topic is also recorded in the
/// known set.
///
/// The pool itself is not synchronized; the broker shares it behind a
/// `Mutex` so concurrent registrations are serialized.
#[derive(Debug, Default)]
pub struct ClientPool {
    pool: HashMap<String, Vec<Client>>,
    known: HashSet<Client>,
}

impl ClientPool {
    pub fn new() -> Self {
        Self {
            pool: HashMap::new(),
            known: HashSet::new(),
        }
    }

    /// Appends `client` to the subscribers of `topic`, creating the topic if
    /// needed.
    pub fn add_client(&mut self, topic: &str, client: Client) {
        self.pool.entry(topic.to_string()).or_default().push(client);
        self.known.insert(client);
    }

    /// Snapshot of the subscribers of `topic`; empty when nobody subscribed.
    pub fn get_clients(&self, topic: &str) -> Vec<Client> {
        self.pool.get(topic).cloned().unwrap_or_default()
    }

    pub fn is_known(&self, client: &Client) -> bool {
        self.known.contains(client)
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    /// Topic names with at least one subscriber, sorted.
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<_> = self.pool.keys().cloned().collect();
        topics.sort();
        topics
    }
}
