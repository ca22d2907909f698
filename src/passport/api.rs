//! # API Facade
//!
//! [`CollectionStore`] is the single source of truth for the coffee
//! collection. Every read and write from a UI goes through it.
//!
//! ## Role and Responsibilities
//!
//! The store:
//! - **Loads** the collection once, on [`CollectionStore::open`], falling back
//!   to the sample coffees when nothing usable is stored
//! - **Dispatches** mutations to the command layer (`commands/*.rs`)
//! - **Persists** the whole collection after every successful mutation
//! - **Notifies** observers synchronously after persisting
//!
//! Business logic stays in the commands. This layer only sequences
//! mutate → persist → notify.
//!
//! ## Failure Policy
//!
//! - Stored bytes that fail to decode are logged and treated as absent.
//! - A stored document that cannot be read at all is left untouched; the
//!   samples are used in memory and the cause is kept in
//!   [`CollectionStore::load_error`].
//! - A rejected write is logged and remembered in
//!   [`CollectionStore::last_persist_error`]; the in-memory collection stays
//!   authoritative and the mutation still succeeds.
//! - Unknown ids return [`PassportError::NotFound`](crate::error::PassportError::NotFound)
//!   and positions past the end return
//!   [`PassportError::OutOfRange`](crate::error::PassportError::OutOfRange).
//!   Either way nothing is persisted and no observer runs.
//!
//! ## Exclusivity
//!
//! Mutations take `&mut self`, so a single owner already has exclusive
//! access. Hosts that hand the collection to several threads wrap it in
//! [`SharedCollection`], which serializes every call through one mutex.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `CollectionStore<FileStore>`
//! - Testing: `CollectionStore<InMemoryStore>`

use crate::codec;
use crate::commands::{self, query, stats};
use crate::config::PassportConfig;
use crate::error::{PassportError, Result};
use crate::model::{AttributeFilter, Badge, CoffeeEntry, FilterField, TastedFilter};
use crate::observer::{Change, Observer, SubscriptionId, Subscribers};
use crate::seed;
use crate::store::KeyValueStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Key the collection document is stored under.
pub const SAVE_KEY: &str = "SavedCoffees";

pub struct CollectionStore<S: KeyValueStore> {
    store: S,
    entries: Vec<CoffeeEntry>,
    subscribers: Subscribers,
    last_persist_error: Option<String>,
    load_error: Option<String>,
}

impl<S: KeyValueStore> CollectionStore<S> {
    pub fn open(store: S) -> Self {
        Self::open_with(store, &PassportConfig::default())
    }

    pub fn open_with(store: S, config: &PassportConfig) -> Self {
        let loaded = load_entries(&store);

        let mut collection = Self {
            store,
            entries: Vec::new(),
            subscribers: Subscribers::new(),
            last_persist_error: None,
            load_error: None,
        };

        match loaded {
            Loaded::Entries(entries) if !(config.reseed_when_empty && entries.is_empty()) => {
                debug!(count = entries.len(), "loaded stored collection");
                collection.entries = entries;
            }
            Loaded::ReadFailed(e) => {
                // The stored document may still be intact, so it is not overwritten here
                warn!(error = %e, "could not read stored collection; using samples in memory only");
                collection.entries = seed::sample_coffees();
                collection.load_error = Some(e.to_string());
            }
            _ => {
                collection.entries = seed::sample_coffees();
                info!(count = collection.entries.len(), "seeded sample coffees");
                collection.persist();
            }
        }

        collection
    }

    // --- Mutations ---

    pub fn add(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        details: Option<String>,
        image_data: Option<Vec<u8>>,
    ) -> Uuid {
        let id = commands::add::run(
            &mut self.entries,
            name.into(),
            description.into(),
            category.into(),
            details,
            image_data,
        );
        debug!(%id, "added coffee");
        self.commit(Change::Added(id));
        id
    }

    pub fn check_in(
        &mut self,
        id: &Uuid,
        note: impl Into<String>,
        image_data: Option<Vec<u8>>,
    ) -> Result<()> {
        commands::check_in::run(&mut self.entries, id, note.into(), image_data)?;
        debug!(%id, "checked in coffee");
        self.commit(Change::CheckedIn(*id));
        Ok(())
    }

    /// Returns the new favorite state.
    pub fn toggle_favorite(&mut self, id: &Uuid) -> Result<bool> {
        let is_favorite = commands::flags::toggle_favorite(&mut self.entries, id)?;
        debug!(%id, is_favorite, "toggled favorite");
        self.commit(Change::FavoriteToggled {
            id: *id,
            is_favorite,
        });
        Ok(is_favorite)
    }

    /// Returns the new tasted state.
    pub fn toggle_tasted(&mut self, id: &Uuid) -> Result<bool> {
        let tasted = commands::flags::toggle_tasted(&mut self.entries, id)?;
        debug!(%id, tasted, "toggled tasted");
        self.commit(Change::TastedToggled { id: *id, tasted });
        Ok(tasted)
    }

    /// Removes the entry at a zero-based position.
    pub fn delete(&mut self, position: usize) -> Result<CoffeeEntry> {
        let mut removed = self.delete_many(&[position])?;
        Ok(removed.remove(0))
    }

    /// Removes the entries at a set of zero-based positions. Nothing is
    /// removed if any position is out of range.
    pub fn delete_many(&mut self, positions: &[usize]) -> Result<Vec<CoffeeEntry>> {
        let removed = commands::delete::run(&mut self.entries, positions)?;
        if removed.is_empty() {
            return Ok(removed);
        }
        let ids: Vec<Uuid> = removed.iter().map(|e| e.id).collect();
        debug!(count = ids.len(), "deleted coffees");
        self.commit(Change::Deleted(ids));
        Ok(removed)
    }

    /// Throws away the current collection and starts over from the samples.
    pub fn reset_to_samples(&mut self) {
        self.entries = seed::sample_coffees();
        info!("collection reset to sample coffees");
        self.commit(Change::Seeded);
    }

    // --- Views ---

    pub fn entries(&self) -> &[CoffeeEntry] {
        &self.entries
    }

    pub fn get(&self, id: &Uuid) -> Option<&CoffeeEntry> {
        query::find(&self.entries, id)
    }

    pub fn position_of(&self, id: &Uuid) -> Option<usize> {
        self.entries.iter().position(|e| e.id == *id)
    }

    pub fn by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a CoffeeEntry> + 'a {
        query::by_category(&self.entries, category)
    }

    pub fn filtered<'a>(
        &'a self,
        filter: &'a AttributeFilter,
    ) -> impl Iterator<Item = &'a CoffeeEntry> + 'a {
        query::filtered(&self.entries, filter)
    }

    pub fn by_status(&self, status: TastedFilter) -> impl Iterator<Item = &CoffeeEntry> + '_ {
        query::by_status(&self.entries, status)
    }

    pub fn favorites(&self) -> impl Iterator<Item = &CoffeeEntry> + '_ {
        query::favorites(&self.entries)
    }

    pub fn gallery(&self) -> impl Iterator<Item = &CoffeeEntry> + '_ {
        query::gallery(&self.entries)
    }

    pub fn list(&self, list_query: &query::ListQuery) -> Vec<query::DisplayCoffee<'_>> {
        query::list(&self.entries, list_query)
    }

    pub fn distinct_values(&self, field: FilterField) -> Vec<String> {
        query::distinct_values(&self.entries, field)
    }

    pub fn tasted_count(&self) -> usize {
        stats::tasted_count(&self.entries)
    }

    pub fn total_count(&self) -> usize {
        stats::total_count(&self.entries)
    }

    pub fn progress(&self) -> stats::Progress {
        stats::progress(&self.entries)
    }

    pub fn earned_badges(&self) -> Vec<&'static str> {
        stats::earned_badges(&self.entries)
    }

    pub fn earned_badge_kinds(&self) -> Vec<Badge> {
        stats::badges_for(self.tasted_count())
    }

    // --- Observers ---

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Change, &[CoffeeEntry]) + Send + 'static,
    {
        let boxed: Observer = Box::new(observer);
        self.subscribers.subscribe(boxed)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // --- Persistence ---

    /// The most recent write failure, cleared by the next successful write.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// Why the stored collection could not be read on open, if it could not.
    ///
    /// When set, the in-memory samples were not written back, so the stored
    /// document is left as it was until the next mutation.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn commit(&mut self, change: Change) {
        self.persist();
        self.subscribers.broadcast(&change, &self.entries);
    }

    fn persist(&mut self) {
        let outcome = codec::encode(&self.entries)
            .and_then(|bytes| self.store.save(SAVE_KEY, &bytes).map(|_| bytes.len()));
        match outcome {
            Ok(bytes) => {
                debug!(bytes, "persisted collection");
                self.last_persist_error = None;
            }
            Err(e) => {
                warn!(error = %e, "failed to persist collection; keeping in-memory state");
                self.last_persist_error = Some(e.to_string());
            }
        }
    }
}

enum Loaded {
    Entries(Vec<CoffeeEntry>),
    Absent,
    Undecodable,
    ReadFailed(PassportError),
}

fn load_entries<S: KeyValueStore>(store: &S) -> Loaded {
    let bytes = match store.load(SAVE_KEY) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Loaded::Absent,
        Err(e) => return Loaded::ReadFailed(e),
    };

    match codec::decode(&bytes) {
        Ok(entries) => Loaded::Entries(entries),
        Err(e) => {
            warn!(error = %e, "stored collection is unreadable; starting from samples");
            Loaded::Undecodable
        }
    }
}

/// A cloneable handle that serializes every operation on one
/// [`CollectionStore`] through a mutex.
///
/// Observers run while the lock is held and must not call back into the
/// same handle.
pub struct SharedCollection<S: KeyValueStore> {
    inner: Arc<Mutex<CollectionStore<S>>>,
}

impl<S: KeyValueStore> Clone for SharedCollection<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> SharedCollection<S> {
    pub fn new(collection: CollectionStore<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(collection)),
        }
    }

    /// Run `f` with exclusive access to the collection.
    pub fn with<R>(&self, f: impl FnOnce(&mut CollectionStore<S>) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn add(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        details: Option<String>,
        image_data: Option<Vec<u8>>,
    ) -> Uuid {
        self.lock()
            .add(name, description, category, details, image_data)
    }

    pub fn check_in(
        &self,
        id: &Uuid,
        note: impl Into<String>,
        image_data: Option<Vec<u8>>,
    ) -> Result<()> {
        self.lock().check_in(id, note, image_data)
    }

    pub fn toggle_favorite(&self, id: &Uuid) -> Result<bool> {
        self.lock().toggle_favorite(id)
    }

    pub fn toggle_tasted(&self, id: &Uuid) -> Result<bool> {
        self.lock().toggle_tasted(id)
    }

    pub fn delete_many(&self, positions: &[usize]) -> Result<Vec<CoffeeEntry>> {
        self.lock().delete_many(positions)
    }

    /// A copy of the collection as it is right now.
    pub fn snapshot(&self) -> Vec<CoffeeEntry> {
        self.lock().entries().to_vec()
    }

    fn lock(&self) -> MutexGuard<'_, CollectionStore<S>> {
        // A panicking observer must not brick the collection for other handles
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BLONDE_ROAST, DARK_ROAST};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::thread;

    fn fresh() -> CollectionStore<InMemoryStore> {
        CollectionStore::open(InMemoryStore::new())
    }

    fn stored_entries(collection: &CollectionStore<InMemoryStore>) -> Vec<CoffeeEntry> {
        codec::decode(collection.store().raw(SAVE_KEY).unwrap()).unwrap()
    }

    #[test]
    fn empty_store_seeds_and_persists_samples() {
        let collection = fresh();
        assert_eq!(collection.total_count(), 5);
        assert!(collection.entries().iter().all(|e| !e.tasted));
        assert_eq!(collection.store().writes(), 1);
        assert_eq!(stored_entries(&collection), collection.entries());
    }

    #[test]
    fn stored_collection_is_adopted_without_writing() {
        let fixture = StoreFixture::new()
            .with_coffees(2, DARK_ROAST)
            .with_tasted_coffee("Kenya AA", BLONDE_ROAST);
        let expected = fixture.entries().to_vec();

        let collection = CollectionStore::open(fixture.store);
        assert_eq!(collection.entries(), expected.as_slice());
        assert_eq!(collection.tasted_count(), 1);
        assert_eq!(collection.store().writes(), 0);
    }

    #[test]
    fn corrupt_data_falls_back_to_samples() {
        let fixture = StoreFixture::new().with_corrupt_data();
        let collection = CollectionStore::open(fixture.store);
        assert_eq!(collection.total_count(), 5);
        assert_eq!(stored_entries(&collection).len(), 5);
    }

    #[test]
    fn read_failure_seeds_in_memory_without_overwriting_stored_data() {
        let mut fixture = StoreFixture::new().with_tasted_coffee("Mine", DARK_ROAST);
        fixture.store.set_reject_reads(true);

        let mut collection = CollectionStore::open(fixture.store);
        assert_eq!(collection.total_count(), 5);
        assert!(collection.load_error().is_some());
        assert_eq!(collection.store().writes(), 0);

        collection.store_mut().set_reject_reads(false);
        let stored = stored_entries(&collection);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Mine");
    }

    #[test]
    fn favorites_come_from_stored_flags() {
        let fixture = StoreFixture::new()
            .with_coffees(2, DARK_ROAST)
            .with_favorite_coffee("House Blend", BLONDE_ROAST);
        let mut collection = CollectionStore::open(fixture.store);
        assert!(collection.load_error().is_none());

        let names: Vec<&str> = collection.favorites().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["House Blend"]);

        let id = collection.entries()[2].id;
        assert!(!collection.toggle_favorite(&id).unwrap());
        assert_eq!(collection.favorites().count(), 0);
    }

    #[test]
    fn empty_stored_collection_is_kept_by_default() {
        let fixture = StoreFixture::new().with_coffees(0, DARK_ROAST);
        let collection = CollectionStore::open(fixture.store);
        assert_eq!(collection.total_count(), 0);
    }

    #[test]
    fn empty_stored_collection_reseeds_when_configured() {
        let fixture = StoreFixture::new().with_coffees(0, DARK_ROAST);
        let config = PassportConfig {
            reseed_when_empty: true,
            ..PassportConfig::default()
        };
        let collection = CollectionStore::open_with(fixture.store, &config);
        assert_eq!(collection.total_count(), 5);
    }

    #[test]
    fn add_appends_persists_and_is_found_by_category() {
        let mut collection = fresh();
        let before = collection.total_count();

        let id = collection.add("Nitro Cold Brew", "Smooth", DARK_ROAST, None, None);

        assert_eq!(collection.total_count(), before + 1);
        let entry = collection.get(&id).unwrap();
        assert!(!entry.tasted);
        assert!(!entry.is_favorite);
        assert!(collection.by_category(DARK_ROAST).any(|e| e.id == id));
        assert_eq!(collection.position_of(&id), Some(before));
        assert_eq!(stored_entries(&collection), collection.entries());
    }

    #[test]
    fn check_in_scenario() {
        let mut collection = fresh();
        let id = collection.entries()[0].id;
        let photo = vec![0xFF, 0xD8, 0xFF];

        collection
            .check_in(&id, "Tastes nutty", Some(photo.clone()))
            .unwrap();

        let entry = collection.get(&id).unwrap();
        assert!(entry.tasted);
        assert_eq!(entry.details.as_deref(), Some("Tastes nutty"));
        assert_eq!(entry.image_data.as_ref(), Some(&photo));
        assert_eq!(collection.tasted_count(), 1);
        assert_eq!(collection.gallery().count(), 1);
    }

    #[test]
    fn not_found_is_reported_and_nothing_is_written() {
        let mut collection = fresh();
        let before = collection.entries().to_vec();
        let writes = collection.store().writes();
        let missing = Uuid::new_v4();

        assert!(matches!(
            collection.check_in(&missing, "x", None),
            Err(PassportError::NotFound(_))
        ));
        assert!(collection.toggle_favorite(&missing).is_err());
        assert!(collection.toggle_tasted(&missing).is_err());

        assert_eq!(collection.entries(), before.as_slice());
        assert_eq!(collection.store().writes(), writes);
    }

    #[test]
    fn toggle_favorite_twice_restores_collection() {
        let mut collection = fresh();
        let before = collection.entries().to_vec();
        let id = before[2].id;

        assert!(collection.toggle_favorite(&id).unwrap());
        assert_eq!(collection.favorites().count(), 1);
        assert!(!collection.toggle_favorite(&id).unwrap());
        assert_eq!(collection.entries(), before.as_slice());
    }

    #[test]
    fn delete_out_of_range_leaves_collection_unchanged() {
        let mut collection = fresh();
        let before = collection.entries().to_vec();

        let err = collection.delete(5).unwrap_err();
        assert!(matches!(err, PassportError::OutOfRange { position: 5, len: 5 }));
        assert!(collection.delete_many(&[1, 99]).is_err());
        assert_eq!(collection.entries(), before.as_slice());
    }

    #[test]
    fn delete_removes_and_persists() {
        let mut collection = fresh();
        let removed = collection.delete(0).unwrap();
        assert_eq!(removed.name, "Sunsera Blend");
        assert_eq!(collection.total_count(), 4);
        assert_eq!(stored_entries(&collection).len(), 4);

        let removed = collection.delete_many(&[0, 3]).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(collection.total_count(), 2);
    }

    #[test]
    fn badges_scenario() {
        let mut collection = fresh();
        for _ in 0..5 {
            collection.add("Extra", "", DARK_ROAST, None, None);
        }
        let ids: Vec<Uuid> = collection.entries().iter().map(|e| e.id).collect();

        for id in &ids[..5] {
            collection.toggle_tasted(id).unwrap();
        }
        assert_eq!(collection.earned_badges(), vec!["Coffee Explorer"]);

        for id in &ids[5..10] {
            collection.check_in(id, "ok", None).unwrap();
        }
        assert_eq!(
            collection.earned_badges(),
            vec!["Coffee Explorer", "Caffeine Connoisseur"]
        );
        assert_eq!(
            collection.earned_badge_kinds(),
            vec![Badge::CoffeeExplorer, Badge::CaffeineConnoisseur]
        );
    }

    #[test]
    fn filters_and_distinct_values() {
        let collection = fresh();
        let filter = AttributeFilter::new().acidity("Medium");
        let names: Vec<&str> = collection.filtered(&filter).map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Sunsera Blend", "Pike Place Roast"]);
        assert_eq!(
            collection.distinct_values(FilterField::Acidity),
            vec!["Low", "Medium", "Mild"]
        );
        assert_eq!(collection.by_status(TastedFilter::Untasted).count(), 5);
    }

    #[test]
    fn write_failure_keeps_memory_state() {
        let mut collection = fresh();
        collection.store_mut().set_reject_writes(true);

        let id = collection.add("Offline", "", DARK_ROAST, None, None);
        assert!(collection.get(&id).is_some());
        assert!(collection.last_persist_error().is_some());
        assert_eq!(stored_entries(&collection).len(), 5);

        collection.store_mut().set_reject_writes(false);
        collection.toggle_favorite(&id).unwrap();
        assert!(collection.last_persist_error().is_none());
        assert_eq!(stored_entries(&collection).len(), 6);
    }

    #[test]
    fn reopening_sees_persisted_mutations() {
        let mut collection = fresh();
        let id = collection.entries()[1].id;
        collection.check_in(&id, "Mellow", None).unwrap();
        let bytes = collection.store().raw(SAVE_KEY).unwrap().to_vec();

        let mut store = InMemoryStore::new();
        store.insert_raw(SAVE_KEY, bytes);
        let reopened = CollectionStore::open(store);
        assert_eq!(reopened.entries(), collection.entries());
    }

    #[test]
    fn observers_see_every_successful_mutation() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut collection = fresh();
        let log = Arc::clone(&seen);
        let sub = collection.subscribe(move |change, entries| {
            log.lock().unwrap().push((change.clone(), entries.len()));
        });

        let id = collection.add("Watched", "", DARK_ROAST, None, None);
        collection.toggle_favorite(&id).unwrap();
        let _ = collection.toggle_tasted(&Uuid::new_v4());
        let _ = collection.delete(42);
        collection.delete(0).unwrap();
        assert!(collection.unsubscribe(sub));
        collection.reset_to_samples();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], (Change::Added(id), 6));
        assert_eq!(
            seen[1],
            (
                Change::FavoriteToggled {
                    id,
                    is_favorite: true
                },
                6
            )
        );
        assert!(matches!(&seen[2], (Change::Deleted(ids), 5) if ids.len() == 1));
    }

    #[test]
    fn shared_collection_serializes_writers() {
        let shared = SharedCollection::new(fresh());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        shared.add(format!("T{}-{}", t, i), "", DARK_ROAST, None, None);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.snapshot().len(), 105);
        shared.with(|c| {
            assert_eq!(stored_entries(c).len(), 105);
        });
    }
}
