//! Lookup of categories and payees by ID

use crate::actual::{Category, Payee};
use std::collections::HashMap;

/// Categories and payees of a budget, keyed by ID.
///
/// Built once per export from the full listings. Later duplicates of an ID replace
/// earlier ones.
#[derive(Default, Debug, Clone)]
pub struct NameResolver {
    categories: HashMap<String, Category>,
    payees: HashMap<String, Payee>,
}

impl NameResolver {
    pub fn new(categories: Vec<Category>, payees: Vec<Payee>) -> Self {
        Self {
            categories: categories.into_iter().map(|c| (c.id.clone(), c)).collect(),
            payees: payees.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    pub fn category(&self, id: Option<&str>) -> Option<&Category> {
        lookup(&self.categories, id)
    }

    pub fn payee(&self, id: Option<&str>) -> Option<&Payee> {
        lookup(&self.payees, id)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn payee_count(&self) -> usize {
        self.payees.len()
    }
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, id: Option<&str>) -> Option<&'a T> {
    match id {
        Some(id) if !id.is_empty() => map.get(id),
        _ => None,
    }
}
