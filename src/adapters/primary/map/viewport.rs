use places::{Bounds, Coord};

use super::MapEvent;
use crate::domain::ports::secondary::viewport::Viewport;

/// Raw events as emitted by the map widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    MoveStart,
    /// Intermediate frame of a pan or zoom.
    Move(Bounds),
    MoveEnd(Bounds),
    Click { marker: Option<Coord> },
}

/// Turns the widget's event stream into the few events the map page cares
/// about. Intermediate frames only update the current bounds; one
/// `ViewportSettled` is emitted per completed gesture.
#[derive(Debug, Clone, Default)]
pub struct ViewportAdapter {
    current: Bounds,
    settled: Option<Bounds>,
    moving: bool,
}

impl ViewportAdapter {
    pub fn new(initial: Bounds) -> Self {
        ViewportAdapter {
            current: initial,
            settled: None,
            moving: false,
        }
    }

    pub fn translate(&mut self, event: WidgetEvent) -> Option<MapEvent> {
        match event {
            WidgetEvent::MoveStart => {
                self.moving = true;
                None
            }
            WidgetEvent::Move(bounds) => {
                self.current = bounds;
                None
            }
            WidgetEvent::MoveEnd(bounds) => {
                self.current = bounds;
                // A move end without a gesture comes from a programmatic
                // move, forward it only if something actually changed.
                let was_moving = std::mem::replace(&mut self.moving, false);
                if was_moving || self.settled != Some(bounds) {
                    self.settled = Some(bounds);
                    Some(MapEvent::ViewportSettled(bounds))
                } else {
                    None
                }
            }
            WidgetEvent::Click { marker: Some(coord) } => Some(MapEvent::MarkerClicked(coord)),
            WidgetEvent::Click { marker: None } => Some(MapEvent::BackgroundClicked),
        }
    }
}

impl Viewport for ViewportAdapter {
    fn bounds(&self) -> Bounds {
        self.current
    }
}
