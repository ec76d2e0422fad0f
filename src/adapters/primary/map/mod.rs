//! Query state held by the map page.
//!
//! `MapState` owns the three independently mutable pieces of query state and
//! the last known list of nurses. Every mutation re-runs the filter
//! synchronously and hands the fresh result to all subscribers, so the most
//! recent event always wins.

use places::{Bounds, Coord, Nurse};
use std::collections::BTreeSet;
use tracing::debug;

use crate::domain::model::filter::Filter;
use crate::domain::model::query::QueryState;
use crate::domain::ports::primary::list_visible_nurses::ListVisibleNurses;

pub mod viewport;

pub use viewport::{ViewportAdapter, WidgetEvent};

/// Discrete events the map page reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// The map finished a pan or zoom.
    ViewportSettled(Bounds),
    MarkerClicked(Coord),
    /// A click anywhere on the map but a marker.
    BackgroundClicked,
    SpecialtiesChanged(BTreeSet<String>),
    RecordsLoaded(Vec<Nurse>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Subscriber = Box<dyn FnMut(&[Nurse])>;

pub struct MapState {
    filter: Filter,
    state: QueryState,
    // None while the first fetch is pending.
    nurses: Option<Vec<Nurse>>,
    filtered: Vec<Nurse>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: usize,
}

impl MapState {
    pub fn new(filter: Filter, state: QueryState) -> Self {
        MapState {
            filter,
            state,
            nurses: None,
            filtered: Vec::new(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Result of the last recomputation.
    pub fn filtered(&self) -> &[Nurse] {
        &self.filtered
    }

    pub fn is_pending(&self) -> bool {
        self.nurses.is_none()
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&[Nurse]) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn set_selected_point(&mut self, point: Option<Coord>) {
        self.state.selected_point = point;
        self.recompute();
    }

    pub fn set_viewport_bounds(&mut self, bounds: Bounds) {
        self.state.viewport_bounds = bounds;
        self.recompute();
    }

    pub fn set_specialty_filter(&mut self, specialties: BTreeSet<String>) {
        self.state.specialty_filter = specialties;
        self.recompute();
    }

    pub fn set_records(&mut self, nurses: Vec<Nurse>) {
        self.nurses = Some(nurses);
        self.recompute();
    }

    /// Fetches the nurses and re-runs the filter once they are in. A failing
    /// source counts as an empty list.
    pub async fn refresh<S>(&mut self, source: &S)
    where
        S: ListVisibleNurses + ?Sized,
    {
        let nurses = source.list_available().await;
        self.set_records(nurses);
    }

    pub fn handle(&mut self, event: MapEvent) {
        match event {
            MapEvent::ViewportSettled(bounds) => self.set_viewport_bounds(bounds),
            MapEvent::MarkerClicked(coord) => self.set_selected_point(Some(coord)),
            MapEvent::BackgroundClicked => self.set_selected_point(None),
            MapEvent::SpecialtiesChanged(specialties) => self.set_specialty_filter(specialties),
            MapEvent::RecordsLoaded(nurses) => self.set_records(nurses),
        }
    }

    fn recompute(&mut self) {
        let nurses = self.nurses.as_deref().unwrap_or(&[]);
        self.filtered = self.filter.apply(nurses, &self.state);
        debug!(
            total = nurses.len(),
            visible = self.filtered.len(),
            selected = self.state.selected_point.is_some(),
            "recomputed visible nurses"
        );
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.filtered);
        }
    }
}

impl Default for MapState {
    fn default() -> Self {
        MapState::new(Filter::default(), QueryState::default())
    }
}
