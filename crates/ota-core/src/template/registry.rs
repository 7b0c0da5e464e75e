//! Caller-owned cache of parsed templates.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{Template, TemplateSource};
use crate::error::Result;

/// Parsed templates keyed by identifier (builtin name or file path).
///
/// Owned by whoever serves requests and passed down by reference. A template
/// is loaded the first time it is asked for and shared afterwards; a failed
/// load is not cached, so a template file created later is picked up.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    cache: Mutex<HashMap<String, Arc<Template>>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identifier: &str) -> Result<Arc<Template>> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(t) = cache.get(identifier) {
            return Ok(Arc::clone(t));
        }
        let template = Arc::new(TemplateSource::from_identifier(identifier).load()?);
        cache.insert(identifier.to_string(), Arc::clone(&template));
        tracing::debug!(identifier, "cached template");
        Ok(template)
    }

    /// Drops every cached template, e.g. after a template file was edited.
    pub fn clear(&self) {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    pub fn len(&self) -> usize {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{HTML_TEMPLATE, PLIST_TEMPLATE};

    #[test]
    fn caches_by_identifier() {
        let registry = TemplateRegistry::new();
        let a = registry.get(PLIST_TEMPLATE).unwrap();
        let b = registry.get(PLIST_TEMPLATE).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        registry.get(HTML_TEMPLATE).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let registry = TemplateRegistry::new();
        assert!(registry.get("doesnotexist.htm").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn clear_forgets_templates() {
        let registry = TemplateRegistry::new();
        let a = registry.get(PLIST_TEMPLATE).unwrap();
        registry.clear();
        let b = registry.get(PLIST_TEMPLATE).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn shared_across_threads() {
        let registry = Arc::new(TemplateRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.get(HTML_TEMPLATE).unwrap())
            })
            .collect();
        let templates: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(templates.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }
}
