//! # Links
//!
//! A resource records the URLs of related resources in a [`Links`] map keyed by
//! relation name. Relation names come from per-resource enums implementing
//! [`LinkType`], so callers never pass free-form strings around.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A relation name that can appear in a [`Links`] map.
pub trait LinkType {
    fn link(&self) -> &'static str;
}

/// The relation every resource carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicLinkType {
    SelfLink,
}

impl LinkType for BasicLinkType {
    fn link(&self) -> &'static str {
        match self {
            BasicLinkType::SelfLink => "self",
        }
    }
}

/// Relation name → URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, String>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links with only `self` set.
    pub fn with_self(url: impl Into<String>) -> Self {
        let mut links = Self::new();
        links.insert(BasicLinkType::SelfLink.link(), url);
        links
    }

    /// Insert or replace a relation, returning the previous URL.
    pub fn insert(&mut self, relation: impl Into<String>, url: impl Into<String>) -> Option<String> {
        self.0.insert(relation.into(), url.into())
    }

    pub fn remove(&mut self, relation: &str) -> Option<String> {
        self.0.remove(relation)
    }

    pub fn get(&self, relation: &str) -> Option<&str> {
        self.0.get(relation).map(String::as_str)
    }

    pub fn self_link(&self) -> Option<&str> {
        self.get(BasicLinkType::SelfLink.link())
    }

    pub fn contains(&self, relation: &str) -> bool {
        self.0.contains_key(relation)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every relation of `other` except `self` into this map.
    pub fn merge_related(&mut self, other: &Links) {
        for (relation, url) in other.iter() {
            if relation != BasicLinkType::SelfLink.link() {
                self.0.insert(relation.to_string(), url.to_string());
            }
        }
    }
}
