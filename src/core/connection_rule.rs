//! Kapazitätsregeln: wie viele gleichzeitige Verbindungen ein Brick zu
//! Bricks eines bestimmten Typs haben darf.

use indexmap::IndexMap;
use std::fmt;

/// Typ-Tag eines Bricks, Schlüssel für die Kapazitätsregeln.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrickType(&'static str);

impl BrickType {
    /// Erstellt ein Typ-Tag.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Name des Typs.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for BrickType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Eine einzelne Regel: maximal `max_connections` Verbindungen zu Bricks vom Typ `peer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionRule {
    /// Typ des Gegenübers
    pub peer: BrickType,
    /// Maximale Anzahl gleichzeitiger Verbindungen zu diesem Typ
    pub max_connections: usize,
}

impl ConnectionRule {
    /// Erstellt eine Regel.
    pub const fn new(peer: BrickType, max_connections: usize) -> Self {
        Self {
            peer,
            max_connections,
        }
    }
}

/// Unveränderliche Kapazitätstabelle eines Brick-Typs.
///
/// Nach Peer-Typ indiziert; nennt die Regelliste einen Typ mehrfach,
/// gilt die erste Regel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapacityTable {
    limits: IndexMap<BrickType, usize>,
}

impl CapacityTable {
    /// Baut die Tabelle aus einer Regelliste.
    pub fn new(rules: impl IntoIterator<Item = ConnectionRule>) -> Self {
        let mut limits = IndexMap::new();
        for rule in rules {
            limits.entry(rule.peer).or_insert(rule.max_connections);
        }
        Self { limits }
    }

    /// Maximale Verbindungsanzahl zu `peer`, `None` wenn der Typ nicht unterstützt wird.
    pub fn capacity_for(&self, peer: BrickType) -> Option<usize> {
        self.limits.get(&peer).copied()
    }

    /// Prüft ob Verbindungen zu `peer` überhaupt vorgesehen sind.
    pub fn supports(&self, peer: BrickType) -> bool {
        self.limits.contains_key(&peer)
    }

    /// Alle Regeln in Definitionsreihenfolge.
    pub fn rules(&self) -> impl Iterator<Item = ConnectionRule> + '_ {
        self.limits
            .iter()
            .map(|(&peer, &max_connections)| ConnectionRule::new(peer, max_connections))
    }

    /// Anzahl der Regeln.
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// Gibt `true` zurück, wenn keine Regel existiert (Brick ist nicht verbindbar).
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl FromIterator<ConnectionRule> for CapacityTable {
    fn from_iter<I: IntoIterator<Item = ConnectionRule>>(iter: I) -> Self {
        Self::new(iter)
    }
}
