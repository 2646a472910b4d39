//! Registry trust injection for buildkitd.toml
//!
//! Marks one registry host as reachable over plain HTTP without TLS
//! verification. Existing settings, comments and formatting survive.

use crate::error::{SetupError, SetupResult};
use toml_edit::{value, DocumentMut, Item, Table};

/// Parse buildkitd config text. `origin` names the source in errors.
pub fn parse_config(text: &str, origin: &str) -> SetupResult<DocumentMut> {
    text.parse::<DocumentMut>()
        .map_err(|source| SetupError::ConfigParse {
            origin: origin.to_string(),
            source,
        })
}

/// Ensure a `[registry]` table and add `{ http = true, insecure = true }`
/// for `registry_host` unless an entry for it already exists.
///
/// An empty host adds nothing. A `registry` key that is not a table is left
/// alone.
pub fn merge_registry_config<'d>(
    doc: &'d mut DocumentMut,
    registry_host: Option<&str>,
) -> &'d mut DocumentMut {
    let created = !doc.contains_key("registry");
    let registry = doc
        .entry("registry")
        .or_insert_with(|| Item::Table(Table::new()));

    let Some(host) = registry_host.filter(|h| !h.is_empty()) else {
        return doc;
    };

    let inserted = match registry.as_table_like_mut() {
        Some(hosts) if !hosts.contains_key(host) => {
            let mut entry = Table::new();
            entry.insert("http", value(true));
            entry.insert("insecure", value(true));
            hosts.insert(host, Item::Table(entry));
            true
        }
        _ => false,
    };

    // A fresh table holding only the host entry needs no header of its own
    if created && inserted {
        if let Some(table) = registry.as_table_mut() {
            table.set_implicit(true);
        }
    }

    doc
}

/// Serialize a config document back to TOML text
pub fn render_config(doc: &DocumentMut) -> String {
    doc.to_string()
}
