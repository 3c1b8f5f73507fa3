//! Site code registry: a bijection between synthetic UI codes and
//! real launch site names.
//!
//! The UI wants stable, short option values (`site1`, `site2`, ...)
//! independent of the human-readable site names. Codes are assigned
//! in first-encounter order over the dataset and the count is driven
//! by the data, not a fixed cap. Both directions are direct map
//! lookups.

use std::collections::HashMap;

use crate::utils::config::SITE_CODE_PREFIX;

/// Bijective mapping between site codes and site names.
///
/// Invariant: every code maps to exactly one name and vice versa.
/// Built once at startup, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct SiteRegistry {
    code_to_name: HashMap<String, String>,
    name_to_code: HashMap<String, String>,
    /// Codes in assignment (first-encounter) order, for stable UI listing
    codes: Vec<String>,
}

impl SiteRegistry {
    /// Build a registry from site names in dataset order.
    ///
    /// **Public** - duplicate names are ignored after their first
    /// encounter, so feeding every record's site name is fine.
    pub fn from_site_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut registry = Self::default();
        for name in names {
            registry.assign(name);
        }
        registry
    }

    fn assign(&mut self, name: &str) {
        if self.name_to_code.contains_key(name) {
            return;
        }
        let code = format!("{}{}", SITE_CODE_PREFIX, self.codes.len() + 1);
        self.code_to_name.insert(code.clone(), name.to_string());
        self.name_to_code.insert(name.to_string(), code.clone());
        self.codes.push(code);
    }

    /// Resolve a site code to its real site name
    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.code_to_name.get(code).map(String::as_str)
    }

    /// Resolve a real site name to its code
    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.name_to_code.get(name).map(String::as_str)
    }

    /// Codes in assignment order
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Iterate `(code, name)` pairs in assignment order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes.iter().filter_map(move |code| {
            self.code_to_name
                .get(code)
                .map(|name| (code.as_str(), name.as_str()))
        })
    }

    /// Number of distinct sites
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
