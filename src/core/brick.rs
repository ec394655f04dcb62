//! Repräsentiert einen positionierten, typisierten Brick mit Kapazitätsregeln.

use super::{BrickType, CapacityTable, ConnectionRule, Rect};
use glam::IVec2;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Eindeutige ID eines Bricks innerhalb eines Graphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrickId(pub(crate) u64);

impl BrickId {
    /// Rohwert der ID.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BrickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Beschreibt eine konkrete Brick-Art: Typ, feste Größe, Kapazitätstabelle.
///
/// Wird per `Arc` zwischen allen Bricks derselben Art geteilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrickKind {
    brick_type: BrickType,
    display_name: String,
    size: IVec2,
    capacities: CapacityTable,
    has_context_menu: bool,
}

impl BrickKind {
    /// Erstellt eine Brick-Art ohne eigenes Kontextmenü.
    pub fn new(
        brick_type: BrickType,
        size: IVec2,
        rules: impl IntoIterator<Item = ConnectionRule>,
    ) -> Self {
        Self {
            brick_type,
            display_name: brick_type.name().to_string(),
            size,
            capacities: CapacityTable::new(rules),
            has_context_menu: false,
        }
    }

    /// Setzt den Anzeigenamen (Standard: Name des Typ-Tags).
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Markiert die Art als Träger eines eigenen Kontextmenüs.
    pub fn with_context_menu(mut self) -> Self {
        self.has_context_menu = true;
        self
    }

    /// Typ-Tag für die Regelauflösung.
    pub fn brick_type(&self) -> BrickType {
        self.brick_type
    }

    /// Anzeigename.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Feste Größe (Breite, Höhe) in Pixeln.
    pub fn size(&self) -> IVec2 {
        self.size
    }

    /// Kapazitätstabelle.
    pub fn capacities(&self) -> &CapacityTable {
        &self.capacities
    }

    /// Ob Bricks dieser Art ein eigenes Kontextmenü anbieten.
    pub fn has_context_menu(&self) -> bool {
        self.has_context_menu
    }
}

/// Ein Brick im Designer.
///
/// Die Adjazenz speichert zu jedem Nachbarn dessen Typ-Tag, damit
/// Kapazitäten ohne Rückgriff auf den Graphen frisch gezählt werden können.
/// Symmetrie der Adjazenz stellt ausschließlich `ConnectionGraph` her.
#[derive(Debug)]
pub struct Brick<T> {
    id: BrickId,
    kind: Arc<BrickKind>,
    position: IVec2,
    model: T,
    connections: IndexMap<BrickId, BrickType>,
}

impl<T> Brick<T> {
    pub(crate) fn new(id: BrickId, kind: Arc<BrickKind>, model: T, position: IVec2) -> Self {
        Self {
            id,
            kind,
            position,
            model,
            connections: IndexMap::new(),
        }
    }

    /// ID des Bricks.
    pub fn id(&self) -> BrickId {
        self.id
    }

    /// Brick-Art.
    pub fn kind(&self) -> &Arc<BrickKind> {
        &self.kind
    }

    /// Typ-Tag.
    pub fn brick_type(&self) -> BrickType {
        self.kind.brick_type()
    }

    /// Linke obere Ecke in Pixeln.
    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    /// Feste Größe der Brick-Art.
    pub fn size(&self) -> IVec2 {
        self.kind.size()
    }

    /// Bounding-Box, bei jedem Aufruf aus der aktuellen Position berechnet.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.kind.size())
    }

    /// Das dargestellte Modellobjekt.
    pub fn model(&self) -> &T {
        &self.model
    }

    /// Mutabler Zugriff auf das Modellobjekt.
    pub fn model_mut(&mut self) -> &mut T {
        &mut self.model
    }

    pub(crate) fn into_model(self) -> T {
        self.model
    }

    /// IDs aller verbundenen Bricks.
    pub fn connections(&self) -> impl Iterator<Item = BrickId> + '_ {
        self.connections.keys().copied()
    }

    /// Anzahl aller Verbindungen.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Anzahl der Verbindungen zu Bricks vom Typ `peer`.
    pub fn connections_to(&self, peer: BrickType) -> usize {
        self.connections.values().filter(|&&t| t == peer).count()
    }

    /// Reiner Mitgliedschaftstest.
    pub fn has_connection(&self, other: BrickId) -> bool {
        self.connections.contains_key(&other)
    }

    /// Einseitige Prüfung: unterstützt dieser Brick `peer` und ist noch Kapazität frei?
    pub fn has_free_capacity_for(&self, peer: BrickType) -> bool {
        self.kind
            .capacities()
            .capacity_for(peer)
            .is_some_and(|max| self.connections_to(peer) < max)
    }

    /// Beidseitige Kapazitätsprüfung, bei jedem Aufruf frisch gezählt.
    ///
    /// Duplikate und Self-Loops prüft erst `ConnectionGraph::connect`.
    pub fn can_connect<U>(&self, other: &Brick<U>) -> bool {
        self.has_free_capacity_for(other.brick_type())
            && other.has_free_capacity_for(self.brick_type())
    }

    pub(crate) fn attach(&mut self, peer: BrickId, peer_type: BrickType) {
        self.connections.insert(peer, peer_type);
    }

    pub(crate) fn detach(&mut self, peer: BrickId) -> bool {
        self.connections.shift_remove(&peer).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: BrickType = BrickType::new("X");
    const Y: BrickType = BrickType::new("Y");

    fn brick(id: u64, brick_type: BrickType, rules: Vec<ConnectionRule>) -> Brick<()> {
        let kind = Arc::new(BrickKind::new(brick_type, IVec2::new(40, 30), rules));
        Brick::new(BrickId(id), kind, (), IVec2::new(5, 7))
    }

    #[test]
    fn test_bounds_follow_position() {
        let mut b = brick(1, X, vec![]);
        assert_eq!(b.bounds(), Rect::new(5, 7, 40, 30));
        b.set_position(IVec2::new(-3, 12));
        assert_eq!(b.bounds(), Rect::new(-3, 12, 40, 30));
    }

    #[test]
    fn test_can_connect_requires_both_directions() {
        let a = brick(1, X, vec![ConnectionRule::new(Y, 1)]);
        let one_sided = brick(2, Y, vec![]);
        let mutual = brick(3, Y, vec![ConnectionRule::new(X, 1)]);

        assert!(!a.can_connect(&one_sided));
        assert!(!one_sided.can_connect(&a));
        assert!(a.can_connect(&mutual));
        assert!(mutual.can_connect(&a));
    }

    #[test]
    fn test_capacity_counts_only_matching_peer_type() {
        let mut a = brick(1, X, vec![ConnectionRule::new(Y, 1), ConnectionRule::new(X, 2)]);
        let b = brick(2, Y, vec![ConnectionRule::new(X, 5)]);

        a.attach(BrickId(10), X);
        a.attach(BrickId(11), X);
        assert!(a.can_connect(&b));

        a.attach(BrickId(12), Y);
        assert_eq!(a.connections_to(Y), 1);
        assert!(!a.can_connect(&b));
    }

    #[test]
    fn test_zero_capacity_rule_never_connects() {
        let a = brick(1, X, vec![ConnectionRule::new(Y, 0)]);
        let b = brick(2, Y, vec![ConnectionRule::new(X, 1)]);
        assert!(!a.can_connect(&b));
    }

    #[test]
    fn test_detach_missing_peer_is_noop() {
        let mut a = brick(1, X, vec![]);
        assert!(!a.detach(BrickId(99)));
        a.attach(BrickId(2), Y);
        assert!(a.detach(BrickId(2)));
        assert_eq!(a.connection_count(), 0);
    }
}
