//! Interaktions-State-Machine: übersetzt rohe Zeiger-Events in Commands.
//!
//! Die Übergangsfunktion liest nur den `DesignerState` und liefert die
//! auszuführenden Commands; Zustandswechsel sind selbst ein Command
//! (`SetInteraction`) und werden vom Controller angewendet.

use super::events::{
    ContextMenuRequest, DesignerCommand, PointerButton, PointerEvent, PointerEventKind,
};
use super::DesignerState;
use crate::core::{snap_to_grid, Brick, BrickId};
use glam::IVec2;
use std::fmt;

/// Zustand der Interaktion mit der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Leerlauf, ggf. ist ein Brick selektiert
    #[default]
    Default,
    /// Der selektierte Brick folgt dem Zeiger
    Dragging {
        /// Abstand Zeiger → linke obere Brick-Ecke beim Drücken
        offset: IVec2,
    },
    /// Eine Verbindung vom selektierten Brick wartet auf ihr Ziel
    Linking,
    /// Eine Verbindung des selektierten Bricks wartet auf ihre Trennung
    Unlinking,
    /// Bearbeitung gesperrt
    Locked,
}

/// Nutzlastfreie Sicht auf den Interaktionszustand (z.B. für Cursor-Feedback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Default,
    Dragging,
    Linking,
    Unlinking,
    Locked,
}

impl InteractionState {
    /// Art des Zustands ohne Nutzlast.
    pub fn kind(&self) -> InteractionKind {
        match self {
            Self::Default => InteractionKind::Default,
            Self::Dragging { .. } => InteractionKind::Dragging,
            Self::Linking => InteractionKind::Linking,
            Self::Unlinking => InteractionKind::Unlinking,
            Self::Locked => InteractionKind::Locked,
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }

    /// Ob gerade eine Geste (Ziehen, Verbinden, Trennen) läuft.
    pub fn is_gesture(&self) -> bool {
        matches!(self, Self::Dragging { .. } | Self::Linking | Self::Unlinking)
    }

    /// Ob eine Gummiband-Linie zum Zeiger gezeichnet werden soll.
    pub fn is_pending_link(&self) -> bool {
        matches!(self, Self::Linking | Self::Unlinking)
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "Standard",
            Self::Dragging => "Ziehen",
            Self::Linking => "Verbinden",
            Self::Unlinking => "Trennen",
            Self::Locked => "Gesperrt",
        };
        f.write_str(name)
    }
}

/// Übergangsfunktion: Commands für ein Zeiger-Event im aktuellen Zustand.
///
/// Eine leere Liste bedeutet: Event ignoriert, kein Neuzeichnen nötig.
pub fn on_pointer_event<T>(state: &DesignerState<T>, event: PointerEvent) -> Vec<DesignerCommand> {
    match state.interaction {
        InteractionState::Default => on_default(state, event),
        InteractionState::Dragging { offset } => on_dragging(state, event, offset),
        InteractionState::Linking => on_linking(state, event),
        InteractionState::Unlinking => on_unlinking(state, event),
        InteractionState::Locked => Vec::new(),
    }
}

/// Hängt Zustandswechsel und Neuzeichnen an.
fn enter(mut commands: Vec<DesignerCommand>, next: InteractionState) -> Vec<DesignerCommand> {
    commands.push(DesignerCommand::SetInteraction { state: next });
    commands.push(DesignerCommand::RequestRedraw);
    commands
}

fn select_if_needed<T>(state: &DesignerState<T>, brick: BrickId) -> Vec<DesignerCommand> {
    if state.graph.selected() == Some(brick) {
        Vec::new()
    } else {
        vec![DesignerCommand::SelectBrick { brick }]
    }
}

fn brick_under<T>(state: &DesignerState<T>, position: IVec2) -> Option<&Brick<T>> {
    state
        .graph
        .brick_at(position)
        .and_then(|id| state.graph.brick(id))
}

// ── Default ─────────────────────────────────────────────────────────

fn on_default<T>(state: &DesignerState<T>, event: PointerEvent) -> Vec<DesignerCommand> {
    if event.kind != PointerEventKind::Pressed {
        return Vec::new();
    }
    let position = event.position;
    // Link-Tag liegt außerhalb der Bounds und hat Vorrang vor dem Hit-Test
    let on_link_tag = state.is_in_link_tag(position);

    match event.button {
        PointerButton::Primary if on_link_tag => enter(Vec::new(), InteractionState::Linking),
        PointerButton::Secondary if on_link_tag => enter(Vec::new(), InteractionState::Unlinking),
        PointerButton::Primary => match brick_under(state, position) {
            Some(brick) => {
                let offset = position.saturating_sub(brick.position());
                enter(
                    select_if_needed(state, brick.id()),
                    InteractionState::Dragging { offset },
                )
            }
            None => Vec::new(),
        },
        PointerButton::Secondary => match brick_under(state, position) {
            Some(brick) => {
                let mut commands = select_if_needed(state, brick.id());
                if brick.kind().has_context_menu() {
                    commands.push(DesignerCommand::ShowContextMenu {
                        request: ContextMenuRequest::Brick {
                            brick: brick.id(),
                            position,
                        },
                    });
                }
                commands.push(DesignerCommand::RequestRedraw);
                commands
            }
            None => vec![DesignerCommand::ShowContextMenu {
                request: ContextMenuRequest::EmptySpace { position },
            }],
        },
        PointerButton::Middle | PointerButton::None => Vec::new(),
    }
}

// ── Dragging ────────────────────────────────────────────────────────

fn on_dragging<T>(
    state: &DesignerState<T>,
    event: PointerEvent,
    offset: IVec2,
) -> Vec<DesignerCommand> {
    match event.kind {
        PointerEventKind::Moved | PointerEventKind::Dragged => {
            let Some(brick) = state.graph.selected_brick() else {
                return enter(Vec::new(), InteractionState::Default);
            };
            let mut target = event.position.saturating_sub(offset);
            if state.options.grid_snap_enabled {
                target = snap_to_grid(target, state.options.grid_spacing);
            }
            if target == brick.position() {
                return Vec::new();
            }
            vec![
                DesignerCommand::MoveBrick {
                    brick: brick.id(),
                    position: target,
                },
                DesignerCommand::RequestRedraw,
            ]
        }
        PointerEventKind::Released => enter(Vec::new(), InteractionState::Default),
        _ => Vec::new(),
    }
}

// ── Linking / Unlinking ─────────────────────────────────────────────

fn on_linking<T>(state: &DesignerState<T>, event: PointerEvent) -> Vec<DesignerCommand> {
    match event.kind {
        PointerEventKind::Moved | PointerEventKind::Dragged => {
            vec![DesignerCommand::RequestRedraw]
        }
        PointerEventKind::Pressed => {
            let commands = match (state.graph.selected(), state.graph.brick_at(event.position)) {
                (Some(source), Some(target)) => vec![
                    DesignerCommand::Connect {
                        a: source,
                        b: target,
                    },
                    DesignerCommand::SelectBrick { brick: target },
                ],
                _ => vec![DesignerCommand::ClearSelection],
            };
            enter(commands, InteractionState::Default)
        }
        _ => Vec::new(),
    }
}

fn on_unlinking<T>(state: &DesignerState<T>, event: PointerEvent) -> Vec<DesignerCommand> {
    match event.kind {
        PointerEventKind::Moved | PointerEventKind::Dragged => {
            vec![DesignerCommand::RequestRedraw]
        }
        PointerEventKind::Pressed => {
            let source = state.graph.selected();
            let target = state.graph.brick_at(event.position);
            let commands = match (source, target) {
                (Some(source), Some(target)) if state.graph.has_connection(source, target) => vec![
                    DesignerCommand::Disconnect {
                        a: source,
                        b: target,
                    },
                    DesignerCommand::SelectBrick { brick: target },
                ],
                _ => vec![DesignerCommand::ClearSelection],
            };
            enter(commands, InteractionState::Default)
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests;
