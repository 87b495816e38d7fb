use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Field, StoreError};

/// A username/password pair stored under a website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// One flattened line of the credential viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub website: String,
    pub username: String,
    pub password: String,
}

/// Checks that none of the three save fields is empty.
pub fn validate_fields(website: &str, username: &str, password: &str) -> Result<(), StoreError> {
    if website.is_empty() {
        return Err(StoreError::EmptyField(Field::Website));
    }
    if username.is_empty() {
        return Err(StoreError::EmptyField(Field::Username));
    }
    if password.is_empty() {
        return Err(StoreError::EmptyField(Field::Password));
    }
    Ok(())
}

/// The credential store document: website name to the credentials saved for it.
///
/// Serializes as a plain JSON object. Every list held here is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials {
    entries: BTreeMap<String, Vec<Credential>>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a decoded map, dropping websites with no credentials.
    pub fn from_map(mut entries: BTreeMap<String, Vec<Credential>>) -> Self {
        entries.retain(|website, list| {
            if list.is_empty() {
                log::debug!("Dropping empty entry for '{}'", website);
            }
            !list.is_empty()
        });
        Self { entries }
    }

    pub fn to_map(&self) -> &BTreeMap<String, Vec<Credential>> {
        &self.entries
    }

    /// Appends a credential under `website`, creating the entry if needed.
    ///
    /// Existing credentials are never replaced or merged.
    pub fn add(&mut self, website: &str, username: &str, password: &str) -> Result<(), StoreError> {
        validate_fields(website, username, password)?;
        self.entries
            .entry(website.to_string())
            .or_default()
            .push(Credential::new(username, password));
        Ok(())
    }

    pub fn get(&self, website: &str) -> Option<&[Credential]> {
        self.entries.get(website).map(Vec::as_slice)
    }

    pub fn websites(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Flattens the store into viewer rows, websites in key order.
    pub fn rows(&self) -> Vec<Row> {
        self.entries
            .iter()
            .flat_map(|(website, list)| {
                list.iter().map(move |cred| Row {
                    website: website.clone(),
                    username: cred.username.clone(),
                    password: cred.password.clone(),
                })
            })
            .collect()
    }

    /// Total number of stored credentials across all websites.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_creates_entry() {
        let mut creds = Credentials::new();
        creds.add("example.com", "a@b.com", "xyz").unwrap();

        assert_eq!(
            creds.get("example.com"),
            Some(&[Credential::new("a@b.com", "xyz")][..])
        );
        assert_eq!(creds.len(), 1);
    }

    #[test]
    fn test_add_appends_to_existing_website() {
        let mut creds = Credentials::new();
        creds.add("example.com", "a@b.com", "one").unwrap();
        creds.add("example.com", "a@b.com", "one").unwrap();

        // Identical credentials are kept as separate records
        assert_eq!(creds.get("example.com").map(<[_]>::len), Some(2));
        assert_eq!(creds.websites().count(), 1);
    }

    #[test]
    fn test_add_rejects_empty_fields() {
        let mut creds = Credentials::new();

        assert!(matches!(
            creds.add("", "u", "p"),
            Err(StoreError::EmptyField(Field::Website))
        ));
        assert!(matches!(
            creds.add("w", "", "p"),
            Err(StoreError::EmptyField(Field::Username))
        ));
        assert!(matches!(
            creds.add("w", "u", ""),
            Err(StoreError::EmptyField(Field::Password))
        ));
        assert!(creds.is_empty());
    }

    #[test]
    fn test_rows_flatten_in_order() {
        let mut creds = Credentials::new();
        creds.add("zeta.io", "z", "1").unwrap();
        creds.add("alpha.io", "a1", "2").unwrap();
        creds.add("alpha.io", "a2", "3").unwrap();

        let rows = creds.rows();
        let summary: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.website.as_str(), r.username.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![("alpha.io", "a1"), ("alpha.io", "a2"), ("zeta.io", "z")]
        );
    }

    #[test]
    fn test_from_map_drops_empty_lists() {
        let mut map = BTreeMap::new();
        map.insert("empty.com".to_string(), vec![]);
        map.insert("full.com".to_string(), vec![Credential::new("u", "p")]);

        let creds = Credentials::from_map(map);
        assert!(creds.get("empty.com").is_none());
        assert!(creds.get("full.com").is_some());
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut creds = Credentials::new();
        creds.add("example.com", "a@b.com", "xyz").unwrap();

        let value = serde_json::to_value(&creds).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "example.com": [{"username": "a@b.com", "password": "xyz"}]
            })
        );
    }
}
