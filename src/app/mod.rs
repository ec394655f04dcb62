//! Application-Layer: Controller, State, Events und Interaktion.

pub mod controller;
pub mod events;
pub mod handlers;
/// Interaktions-State-Machine
///
/// Übersetzt rohe Zeiger-Events zustandsabhängig in Commands.
pub mod interaction;
mod intent_mapping;
pub mod state;

pub use controller::DesignerController;
pub use events::{
    ContextMenuRequest, DesignerCommand, DesignerIntent, PointerButton, PointerEvent,
    PointerEventKind, ShellRequest,
};
pub use interaction::{InteractionKind, InteractionState};
pub use state::{DesignerState, LinkSegment};
