//! Symbols: unique, identity-compared property keys and literals.
//!
//! `Symbol::new` always mints a fresh symbol. `Symbol::for_key` goes through a
//! process-wide registry so the same key yields the same symbol everywhere.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

static REGISTRY: Lazy<Mutex<HashMap<String, Symbol>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// A unique symbol. Two symbols are equal only if they share an identity.
#[derive(Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Mint a fresh symbol, distinct from every other symbol.
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(Arc::from),
        }
    }

    /// Get or create the registered symbol for `key`.
    pub fn for_key(key: &str) -> Self {
        let mut registry = REGISTRY.lock();
        registry
            .entry(key.to_string())
            .or_insert_with(|| Symbol::new(Some(key)))
            .clone()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})#{}", self.description().unwrap_or(""), self.id)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}
