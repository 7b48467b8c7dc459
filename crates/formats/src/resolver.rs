//! Name reference resolution
//!
//! Group style files may point at an item by name instead of vnum. Those
//! rows are parsed with a [`Reference::Name`](protoforge_core::Reference)
//! and resolved here in a single pass once the whole file is parsed.

use async_trait::async_trait;
use protoforge_core::{Result, Vnum};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Bulk "find by name" lookup provided by the persistence layer
#[async_trait]
pub trait NameLookup: Send + Sync {
    /// Return `(name, vnum)` pairs for the names that exist
    ///
    /// Names may match more than once; the first pair for a name wins.
    async fn find_by_names(&self, names: &[String]) -> Result<Vec<(String, Vnum)>>;
}

#[async_trait]
impl NameLookup for HashMap<String, Vnum> {
    async fn find_by_names(&self, names: &[String]) -> Result<Vec<(String, Vnum)>> {
        Ok(names
            .iter()
            .filter_map(|name| self.get(name).map(|vnum| (name.clone(), *vnum)))
            .collect())
    }
}

/// A parsed row that may still point at its target by name
pub trait Resolvable {
    /// Name waiting for resolution, `None` when the row already has a vnum
    fn pending_name(&self) -> Option<&str>;

    /// Replace the pending name with the resolved vnum
    fn resolve(&mut self, vnum: Vnum);
}

/// Resolve every pending name in `rows` with one lookup
///
/// Rows without a pending name pass through untouched. Rows whose name is
/// not found are logged and left out of the result. No lookup is made when
/// nothing is pending.
pub async fn resolve_references<T, L>(rows: Vec<T>, lookup: &L) -> Result<Vec<T>>
where
    T: Resolvable,
    L: NameLookup + ?Sized,
{
    let mut seen = HashSet::new();
    let names: Vec<String> = rows
        .iter()
        .filter_map(|row| row.pending_name())
        .filter(|name| seen.insert(name.to_string()))
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Ok(rows);
    }

    debug!("Resolving {} distinct names", names.len());
    let mut resolved: HashMap<String, Vnum> = HashMap::with_capacity(names.len());
    for (name, vnum) in lookup.find_by_names(&names).await? {
        resolved.entry(name).or_insert(vnum);
    }

    let mut output = Vec::with_capacity(rows.len());
    for mut row in rows {
        if let Some(name) = row.pending_name() {
            match resolved.get(name) {
                Some(vnum) => {
                    let vnum = *vnum;
                    row.resolve(vnum);
                }
                None => {
                    warn!("No entity named '{}', dropping row", name);
                    continue;
                }
            }
        }
        output.push(row);
    }

    Ok(output)
}
