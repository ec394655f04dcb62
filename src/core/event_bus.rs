//! Strukturierte Designer-Benachrichtigungen und ihre synchrone Verteilung.

use super::{BrickId, BrickType, ConnectionRejected};
use glam::IVec2;
use std::fmt;

/// Benachrichtigung über eine Änderung am Graphen oder an der Selektion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignerEvent {
    /// Brick wurde hinzugefügt
    BrickAdded {
        /// Neuer Brick
        brick: BrickId,
        /// Typ des Bricks
        brick_type: BrickType,
    },
    /// Brick wurde entfernt (alle Verbindungen sind bereits getrennt)
    BrickRemoved {
        /// Entfernter Brick
        brick: BrickId,
        /// Typ des Bricks
        brick_type: BrickType,
    },
    /// Brick wurde selektiert
    BrickSelected {
        /// Selektierter Brick
        brick: BrickId,
    },
    /// Brick wurde verschoben
    BrickMoved {
        /// Verschobener Brick
        brick: BrickId,
        /// Neue linke obere Ecke
        position: IVec2,
    },
    /// Selektion wurde aufgehoben
    SelectionCleared,
    /// Verbindung wurde erstellt
    LinkCreated {
        /// Ausgangs-Brick der Geste
        a: BrickId,
        /// Ziel-Brick der Geste
        b: BrickId,
    },
    /// Verbindung wurde abgelehnt
    LinkRefused {
        /// Ausgangs-Brick der Geste
        a: BrickId,
        /// Ziel-Brick der Geste
        b: BrickId,
        /// Grund der Ablehnung
        reason: ConnectionRejected,
    },
    /// Verbindung wurde entfernt
    LinkDeleted {
        /// Erster Brick
        a: BrickId,
        /// Zweiter Brick
        b: BrickId,
    },
}

/// Handle einer Registrierung, für `EventBus::unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Beobachter-Callback.
pub type Observer = Box<dyn FnMut(&DesignerEvent)>;

/// Verteilt Events synchron und in Registrierungsreihenfolge.
///
/// An- und Abmelden ist jederzeit zwischen zwei Events möglich, aber nicht
/// während der Auslieferung: der Bus gehört dem Graphen und ist in `publish`
/// exklusiv geliehen, ein Beobachter kann sich daher weder selbst noch andere
/// abmelden. Stattdessen ein Flag im eigenen Zustand setzen und nach der
/// Mutation `unsubscribe` aufrufen.
///
/// Panics in Beobachtern werden nicht abgefangen.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<(ObserverId, Observer)>,
    next_id: u64,
}

impl EventBus {
    /// Erstellt einen Bus ohne Beobachter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Beobachter.
    pub fn subscribe(&mut self, observer: impl FnMut(&DesignerEvent) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Entfernt einen Beobachter. Gibt `false` zurück, wenn er nicht registriert war.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() < before
    }

    /// Anzahl registrierter Beobachter.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Liefert ein Event an alle Beobachter aus.
    pub fn publish(&mut self, event: DesignerEvent) {
        log::debug!("Event: {:?}", event);
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observers.len())
            .finish()
    }
}
