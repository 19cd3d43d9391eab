//! Literal, case-insensitive substring search driven by field schemas.

use crate::error::{SearchError, SearchResult};
use crate::models::Contact;
use crate::schema::SchemaRegistry;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

/// Searches a collection through the search projection of each contact.
#[derive(Debug, Clone, Copy)]
pub struct ContactSearcher<'a> {
    schemas: &'a SchemaRegistry,
}

impl<'a> ContactSearcher<'a> {
    pub fn new(schemas: &'a SchemaRegistry) -> Self {
        Self { schemas }
    }

    /// Concatenated text of the contact's schema fields.
    ///
    /// Identity and timestamps never contribute. Returns `None` when the
    /// contact's variant has no registered schema.
    pub fn projection(&self, contact: &Contact) -> Option<String> {
        let projection = self
            .schemas
            .get(contact.variant())
            .map(|schema| schema.projection(contact));
        if projection.is_none() {
            warn!(variant = %contact.variant(), "No schema for contact, skipping in search");
        }
        projection
    }

    /// Build a matcher that treats every character of `query` literally.
    fn matcher(query: &str) -> SearchResult<Regex> {
        RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .map_err(|e| SearchError::InvalidQuery(e.to_string()))
    }

    /// Positions, in collection order, of the contacts matching `query`.
    pub fn search_positions(&self, contacts: &[Contact], query: &str) -> SearchResult<Vec<usize>> {
        let matcher = Self::matcher(query)?;
        let positions: Vec<usize> = contacts
            .iter()
            .enumerate()
            .filter(|(_, contact)| {
                self.projection(contact)
                    .is_some_and(|text| matcher.is_match(&text))
            })
            .map(|(position, _)| position)
            .collect();

        debug!(query = %query, matches = positions.len(), "Search completed");
        Ok(positions)
    }

    /// Contacts matching `query`, in collection order.
    pub fn search<'c>(&self, contacts: &'c [Contact], query: &str) -> SearchResult<Vec<&'c Contact>> {
        Ok(self
            .search_positions(contacts, query)?
            .into_iter()
            .map(|position| &contacts[position])
            .collect())
    }
}
