//! Swipeable list containers.
//!
//! A [`ListContainer`] is the single owner of its collection. Rows never
//! mutate it themselves: their hosts hand commands back from `tick`, and the
//! container applies them by id before returning the resulting [`Mutation`]s
//! for the caller to push to the backend. Nothing is rolled back if a push
//! fails; the next [`ListContainer::replace_all`] reconciles.

pub mod bindings;

use crate::model::{Mutation, MutationKind, Record};
use crate::swipe::{ActionBinding, Drag, GestureOutcome, Haptics, SwipeConfig, SwipeHost};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

pub use bindings::{action_binding, action_style};

/// A record and the swipe host bound to it.
pub struct ListItem<T: Record> {
    record: T,
    host: SwipeHost<MutationKind>,
}

impl<T: Record> ListItem<T> {
    pub fn id(&self) -> &str {
        self.record.id()
    }

    pub fn record(&self) -> &T {
        &self.record
    }

    pub fn host(&self) -> &SwipeHost<MutationKind> {
        &self.host
    }

    /// A commit sequence is running on this row.
    pub fn committing(&self) -> bool {
        self.host.is_committing()
    }
}

pub struct ListContainer<T: Record> {
    items: Vec<ListItem<T>>,
    config: SwipeConfig,
    binding: Arc<ActionBinding<MutationKind>>,
    haptics: Arc<dyn Haptics>,
    viewport_width: Option<f32>,
}

impl<T: Record> ListContainer<T> {
    pub fn new(config: SwipeConfig, binding: ActionBinding<MutationKind>, haptics: Arc<dyn Haptics>) -> Self {
        Self {
            items: Vec::new(),
            config,
            binding: Arc::new(binding),
            haptics,
            viewport_width: None,
        }
    }

    pub fn with_records(mut self, records: Vec<T>) -> Self {
        self.replace_all(records);
        self
    }

    fn make_host(&self) -> SwipeHost<MutationKind> {
        let mut host = SwipeHost::new(self.config, Arc::clone(&self.binding), Arc::clone(&self.haptics));
        if let Some(width) = self.viewport_width {
            host.set_viewport_width(width);
        }
        host
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ListItem<T>] {
        &self.items
    }

    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|item| &item.record)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&ListItem<T>> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn host_mut(&mut self, id: &str) -> Option<&mut SwipeHost<MutationKind>> {
        self.items
            .iter_mut()
            .find(|item| item.record.id() == id)
            .map(|item| &mut item.host)
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        if width <= 0.0 || self.viewport_width == Some(width) {
            return;
        }
        self.viewport_width = Some(width);
        for item in &mut self.items {
            item.host.set_viewport_width(width);
        }
    }

    pub fn touch_down(&mut self, id: &str, now: Instant) -> bool {
        self.host_mut(id).is_some_and(|host| host.touch_down(now))
    }

    pub fn touch_move(&mut self, id: &str, dx: f32, dy: f32, now: Instant) -> Drag {
        match self.host_mut(id) {
            Some(host) => host.touch_move(dx, dy, now),
            None => Drag::Unclaimed,
        }
    }

    pub fn touch_up(&mut self, id: &str, now: Instant) -> GestureOutcome {
        match self.host_mut(id) {
            Some(host) => host.touch_up(now),
            None => GestureOutcome::Cancel,
        }
    }

    pub fn touch_cancel(&mut self, id: &str, now: Instant) {
        if let Some(host) = self.host_mut(id) {
            host.touch_cancel(now);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.items.iter().any(|item| item.host.is_animating())
    }

    /// Advance every row and apply the commands fired on this tick.
    ///
    /// Commands are collected from all rows first and then applied by id, so
    /// rows committing in the same frame never overwrite each other.
    pub fn tick(&mut self, now: Instant) -> Vec<Mutation> {
        let fired: Vec<(String, MutationKind)> = self
            .items
            .iter_mut()
            .filter_map(|item| item.host.tick(now).map(|kind| (item.record.id().to_string(), kind)))
            .collect();

        let mutations: Vec<Mutation> = fired
            .into_iter()
            .filter_map(|(id, kind)| self.apply(&id, kind))
            .collect();

        self.items.retain(|item| !item.host.is_removed());
        mutations
    }

    /// Optimistically apply `kind` to the record `id`.
    ///
    /// Returns the mutation to push to the backend, or `None` when the record
    /// is gone, the action does not apply, or nothing changed.
    pub fn apply(&mut self, id: &str, kind: MutationKind) -> Option<Mutation> {
        if !kind.applies_to(T::KIND) {
            log::warn!("ignoring {kind} on a {} list", T::KIND);
            return None;
        }
        let index = self.position(id)?;
        if kind.is_destructive() {
            self.items.remove(index);
        } else if !self.items[index].record.apply(kind) {
            log::debug!("{kind} on {} {id} changed nothing", T::KIND);
            return None;
        }
        Some(Mutation::new(T::KIND, id, kind))
    }

    /// Replace the collection with a fresh snapshot.
    ///
    /// Rows still present keep their host so running animations carry on;
    /// duplicate ids keep their first occurrence.
    pub fn replace_all(&mut self, records: Vec<T>) {
        let mut previous: HashMap<String, SwipeHost<MutationKind>> = self
            .items
            .drain(..)
            .map(|item| (item.record.id().to_string(), item.host))
            .collect();

        let mut seen = HashSet::new();
        for record in records {
            if !seen.insert(record.id().to_string()) {
                log::warn!("dropping duplicate {} {}", T::KIND, record.id());
                continue;
            }
            let host = match previous.remove(record.id()) {
                Some(host) if !host.is_removed() => host,
                _ => self.make_host(),
            };
            self.items.push(ListItem { record, host });
        }
    }
}
