//! Der zentrale Verbindungsgraph: Bricks, Kanten, Selektion und Events.

use super::{Brick, BrickId, BrickKind, BrickType, DesignerEvent, EventBus, ObserverId};
use glam::IVec2;
use indexmap::IndexMap;
use std::sync::Arc;
use thiserror::Error;

/// Invariantenverletzung durch den Aufrufer (Programmierfehler, kein Benutzerfehler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Brick ist kein Mitglied dieses Graphen
    #[error("Brick {0} ist nicht Teil des Graphen")]
    UnknownBrick(BrickId),
}

/// Grund, aus dem eine Verbindung abgelehnt wurde (erwartetes Ergebnis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConnectionRejected {
    /// Ein Brick kann nicht mit sich selbst verbunden werden
    #[error("Brick kann nicht mit sich selbst verbunden werden")]
    SelfLoop,
    /// Die beiden Bricks sind bereits verbunden
    #[error("Bricks sind bereits verbunden")]
    AlreadyConnected,
    /// Mindestens eine Seite sieht den Typ des Gegenübers nicht vor
    #[error("Typ '{from}' kann nicht mit Typ '{to}' verbunden werden")]
    NotSupported {
        /// Typ des Ausgangs-Bricks
        from: BrickType,
        /// Typ des Ziel-Bricks
        to: BrickType,
    },
    /// Die Kapazität mindestens einer Seite ist ausgeschöpft
    #[error("Kapazität von '{from}' zu '{to}' ausgeschöpft")]
    CapacityExhausted {
        /// Typ des Ausgangs-Bricks
        from: BrickType,
        /// Typ des Ziel-Bricks
        to: BrickType,
    },
}

/// Sammlung aller Bricks eines Designers.
///
/// Die Einfügereihenfolge bestimmt Zeichen- und Hit-Test-Reihenfolge:
/// der zuletzt hinzugefügte Brick liegt oben.
#[derive(Debug)]
pub struct ConnectionGraph<T> {
    bricks: IndexMap<BrickId, Brick<T>>,
    selected: Option<BrickId>,
    next_id: u64,
    events: EventBus,
}

impl<T> Default for ConnectionGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConnectionGraph<T> {
    /// Erstellt einen leeren Graphen.
    pub fn new() -> Self {
        Self {
            bricks: IndexMap::new(),
            selected: None,
            next_id: 1,
            events: EventBus::new(),
        }
    }

    // ── Beobachter ──────────────────────────────────────────────

    /// Registriert einen Beobachter für alle Graph-Events.
    ///
    /// Beobachter können den Graphen während der Auslieferung nicht erreichen,
    /// siehe [`EventBus`].
    pub fn subscribe(&mut self, observer: impl FnMut(&DesignerEvent) + 'static) -> ObserverId {
        self.events.subscribe(observer)
    }

    /// Entfernt einen Beobachter.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.events.unsubscribe(id)
    }

    // ── Abfragen ────────────────────────────────────────────────

    /// Anzahl der Bricks.
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    /// Gibt `true` zurück, wenn der Graph keine Bricks enthält.
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Prüft die Mitgliedschaft eines Bricks.
    pub fn contains(&self, id: BrickId) -> bool {
        self.bricks.contains_key(&id)
    }

    /// Zugriff auf einen Brick.
    pub fn brick(&self, id: BrickId) -> Option<&Brick<T>> {
        self.bricks.get(&id)
    }

    /// Mutabler Zugriff auf das Modellobjekt eines Bricks.
    pub fn model_mut(&mut self, id: BrickId) -> Option<&mut T> {
        self.bricks.get_mut(&id).map(Brick::model_mut)
    }

    /// Alle Bricks in Zeichenreihenfolge (unten nach oben).
    pub fn bricks(&self) -> impl Iterator<Item = &Brick<T>> {
        self.bricks.values()
    }

    /// Oberster Brick, dessen Bounds `point` enthalten.
    pub fn brick_at(&self, point: IVec2) -> Option<BrickId> {
        self.bricks
            .values()
            .rev()
            .find(|brick| brick.bounds().contains(point))
            .map(Brick::id)
    }

    /// Aktuell selektierter Brick.
    pub fn selected(&self) -> Option<BrickId> {
        self.selected
    }

    /// Der selektierte Brick selbst.
    pub fn selected_brick(&self) -> Option<&Brick<T>> {
        self.selected.and_then(|id| self.bricks.get(&id))
    }

    /// Prüft ob zwischen `a` und `b` eine Kante existiert.
    pub fn has_connection(&self, a: BrickId, b: BrickId) -> bool {
        self.bricks.get(&a).is_some_and(|brick| brick.has_connection(b))
    }

    /// Beidseitige Kapazitätsprüfung (ohne Duplikat-/Self-Loop-Prüfung).
    pub fn can_connect(&self, a: BrickId, b: BrickId) -> bool {
        match (self.bricks.get(&a), self.bricks.get(&b)) {
            (Some(a), Some(b)) => a.can_connect(b),
            _ => false,
        }
    }

    /// Jede Kante genau einmal, in Einfügereihenfolge des ersten Endpunkts.
    pub fn links(&self) -> impl Iterator<Item = (BrickId, BrickId)> + '_ {
        self.bricks.iter().enumerate().flat_map(move |(index, (&id, brick))| {
            brick
                .connections()
                .filter(move |peer| {
                    self.bricks
                        .get_index_of(peer)
                        .is_some_and(|peer_index| peer_index > index)
                })
                .map(move |peer| (id, peer))
        })
    }

    /// Anzahl der (ungerichteten) Kanten.
    pub fn connection_count(&self) -> usize {
        self.bricks.values().map(Brick::connection_count).sum::<usize>() / 2
    }

    // ── Bricks ──────────────────────────────────────────────────

    /// Erstellt einen Brick und hängt ihn oben an.
    pub fn add_brick(&mut self, kind: Arc<BrickKind>, model: T, position: IVec2) -> BrickId {
        let id = BrickId(self.next_id);
        self.next_id += 1;

        let brick_type = kind.brick_type();
        self.bricks.insert(id, Brick::new(id, kind, model, position));
        log::info!("Brick {} ({}) bei {} hinzugefügt", id, brick_type, position);

        self.events
            .publish(DesignerEvent::BrickAdded { brick: id, brick_type });
        id
    }

    /// Entfernt einen Brick inklusive aller Kanten und gibt sein Modellobjekt zurück.
    ///
    /// Feuert pro getrennter Kante ein `LinkDeleted`, ggf. `SelectionCleared`
    /// und zuletzt `BrickRemoved`.
    pub fn remove_brick(&mut self, id: BrickId) -> Result<T, GraphError> {
        self.ensure_member(id)?;

        for peer in self.remove_all_connections(id) {
            self.events.publish(DesignerEvent::LinkDeleted { a: id, b: peer });
        }

        let Some(brick) = self.bricks.shift_remove(&id) else {
            return Err(GraphError::UnknownBrick(id));
        };
        if self.selected == Some(id) {
            self.clear_selection();
        }

        let brick_type = brick.brick_type();
        log::info!("Brick {} ({}) entfernt", id, brick_type);
        self.events
            .publish(DesignerEvent::BrickRemoved { brick: id, brick_type });
        Ok(brick.into_model())
    }

    /// Verschiebt einen Brick. `BrickMoved` feuert nur bei tatsächlicher Änderung.
    pub fn move_brick(&mut self, id: BrickId, position: IVec2) -> Result<bool, GraphError> {
        let brick = self
            .bricks
            .get_mut(&id)
            .ok_or(GraphError::UnknownBrick(id))?;
        if brick.position() == position {
            return Ok(false);
        }
        brick.set_position(position);
        self.events
            .publish(DesignerEvent::BrickMoved { brick: id, position });
        Ok(true)
    }

    // ── Selektion ───────────────────────────────────────────────

    /// Selektiert einen Brick. Schlägt für Nicht-Mitglieder fehl, ohne Zustand zu ändern.
    pub fn select(&mut self, id: BrickId) -> Result<(), GraphError> {
        self.ensure_member(id)?;
        self.selected = Some(id);
        self.events.publish(DesignerEvent::BrickSelected { brick: id });
        Ok(())
    }

    /// Hebt die Selektion auf (idempotent, feuert immer `SelectionCleared`).
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.events.publish(DesignerEvent::SelectionCleared);
    }

    // ── Kanten ──────────────────────────────────────────────────

    /// Grund, aus dem `a` nicht mit `b` verbunden werden dürfte, oder `None`.
    ///
    /// Prüft Self-Loop, Duplikat sowie Unterstützung und Kapazität in beiden
    /// Richtungen, bei jedem Aufruf frisch gezählt.
    pub fn connection_rejection(
        &self,
        a: BrickId,
        b: BrickId,
    ) -> Result<Option<ConnectionRejected>, GraphError> {
        let brick_a = self.bricks.get(&a).ok_or(GraphError::UnknownBrick(a))?;
        let brick_b = self.bricks.get(&b).ok_or(GraphError::UnknownBrick(b))?;
        let (type_a, type_b) = (brick_a.brick_type(), brick_b.brick_type());

        let rejection = if a == b {
            Some(ConnectionRejected::SelfLoop)
        } else if brick_a.has_connection(b) {
            Some(ConnectionRejected::AlreadyConnected)
        } else if !brick_a.kind().capacities().supports(type_b)
            || !brick_b.kind().capacities().supports(type_a)
        {
            Some(ConnectionRejected::NotSupported {
                from: type_a,
                to: type_b,
            })
        } else if !brick_a.can_connect(brick_b) {
            Some(ConnectionRejected::CapacityExhausted {
                from: type_a,
                to: type_b,
            })
        } else {
            None
        };
        Ok(rejection)
    }

    /// Fügt eine geprüfte Kante symmetrisch ein.
    fn link(&mut self, a: BrickId, b: BrickId) {
        let type_of = |id: BrickId| self.bricks.get(&id).map(Brick::brick_type);
        let (Some(type_a), Some(type_b)) = (type_of(a), type_of(b)) else {
            return;
        };
        if let Some(brick) = self.bricks.get_mut(&a) {
            brick.attach(b, type_b);
        }
        if let Some(brick) = self.bricks.get_mut(&b) {
            brick.attach(a, type_a);
        }
    }

    /// Entfernt eine Kante symmetrisch, ohne Events. No-op wenn nicht vorhanden.
    fn remove_connection(&mut self, a: BrickId, b: BrickId) -> bool {
        let removed_a = self.bricks.get_mut(&a).is_some_and(|brick| brick.detach(b));
        let removed_b = self.bricks.get_mut(&b).is_some_and(|brick| brick.detach(a));
        debug_assert_eq!(removed_a, removed_b, "Adjazenz von {a} und {b} asymmetrisch");
        removed_a || removed_b
    }

    /// Trennt nacheinander alle Kanten eines Bricks und gibt die früheren Nachbarn zurück.
    fn remove_all_connections(&mut self, id: BrickId) -> Vec<BrickId> {
        let mut peers = Vec::new();
        while let Some(peer) = self
            .bricks
            .get(&id)
            .and_then(|brick| brick.connections().next())
        {
            self.remove_connection(id, peer);
            peers.push(peer);
        }
        peers
    }

    /// Verbindet zwei Bricks. Ablehnung ist ein erwartetes Ergebnis:
    /// `Ok(false)` plus `LinkRefused`-Event statt eines Fehlers.
    pub fn connect(&mut self, a: BrickId, b: BrickId) -> Result<bool, GraphError> {
        if let Some(reason) = self.connection_rejection(a, b)? {
            log::warn!("Verbindung {}↔{} abgelehnt: {}", a, b, reason);
            self.events
                .publish(DesignerEvent::LinkRefused { a, b, reason });
            return Ok(false);
        }

        self.link(a, b);
        log::info!("Verbindung {}↔{} erstellt", a, b);
        self.events.publish(DesignerEvent::LinkCreated { a, b });
        Ok(true)
    }

    /// Trennt zwei Bricks. Feuert `LinkDeleted` nur, wenn eine Kante entfernt wurde.
    pub fn disconnect(&mut self, a: BrickId, b: BrickId) -> Result<bool, GraphError> {
        self.ensure_member(a)?;
        self.ensure_member(b)?;

        if !self.remove_connection(a, b) {
            log::debug!("Keine Verbindung {}↔{} zum Trennen", a, b);
            return Ok(false);
        }
        log::info!("Verbindung {}↔{} entfernt", a, b);
        self.events.publish(DesignerEvent::LinkDeleted { a, b });
        Ok(true)
    }

    fn ensure_member(&self, id: BrickId) -> Result<(), GraphError> {
        if self.bricks.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::UnknownBrick(id))
        }
    }
}
