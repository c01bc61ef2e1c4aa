use super::{ListedEntry, Selector};
use crate::id::Id;
use crate::model::Record;
use crate::store::{DocumentStore, StorageBackend};

pub fn listed_entries<R: Record, B: StorageBackend>(store: &DocumentStore<B>) -> Vec<ListedEntry> {
    store
        .entries::<R>()
        .iter()
        .enumerate()
        .map(|(i, entry)| ListedEntry {
            position: i + 1,
            id: entry.id.clone(),
            summary: entry.data.summary(),
        })
        .collect()
}

/// Resolves a selector against the current listing. `None` when nothing matches.
pub fn resolve<R: Record, B: StorageBackend>(
    store: &DocumentStore<B>,
    selector: &Selector,
) -> Option<Id> {
    let entries = store.entries::<R>();
    match selector {
        Selector::Position(n) => entries.get(n.checked_sub(1)?).map(|e| e.id.clone()),
        Selector::Id(id) => entries.iter().find(|e| &e.id == id).map(|e| e.id.clone()),
    }
}
