//! Bach Designer Library.
//! Interaktionskern des Brick-Designers: Verbindungsgraph mit Kapazitätsregeln,
//! Interaktions-State-Machine und Event-Verteilung, als Library für Shells und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    ContextMenuRequest, DesignerCommand, DesignerController, DesignerIntent, DesignerState,
    InteractionKind, InteractionState, LinkSegment, PointerButton, PointerEvent, PointerEventKind,
    ShellRequest,
};
pub use core::{
    Brick, BrickId, BrickKind, BrickType, CapacityTable, ConnectionGraph, ConnectionRejected,
    ConnectionRule, DesignerEvent, GraphError, ObserverId, Rect,
};
pub use shared::DesignerOptions;
