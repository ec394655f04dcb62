//! Core-Domänentypen: Bricks, Kapazitätsregeln, Verbindungsgraph, Events.

/// Bricks und Brick-Arten
pub mod brick;
/// Typ-Tags und Kapazitätsregeln
pub mod connection_rule;
pub mod event_bus;
pub mod geometry;
/// Der Verbindungsgraph
///
/// Einziger Ort, an dem Kanten entstehen oder verschwinden:
/// - ConnectionGraph: Bricks, Kanten, Selektion
/// - GraphError: Invariantenverletzung des Aufrufers
/// - ConnectionRejected: erwartete Ablehnung einer Verbindung
pub mod graph;

pub use brick::{Brick, BrickId, BrickKind};
pub use connection_rule::{BrickType, CapacityTable, ConnectionRule};
pub use event_bus::{DesignerEvent, EventBus, Observer, ObserverId};
pub use geometry::{link_tag_rect, snap_to_grid, Rect};
pub use graph::{ConnectionGraph, ConnectionRejected, GraphError};
