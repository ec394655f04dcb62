//! Mapping von Shell-Intents auf mutierende Designer-Commands.

use super::interaction::{self, InteractionState};
use super::{DesignerCommand, DesignerIntent, DesignerState, PointerEventKind};

/// Übersetzt einen `DesignerIntent` in eine Sequenz ausführbarer `DesignerCommand`s.
pub fn map_intent_to_commands<T>(
    state: &DesignerState<T>,
    intent: DesignerIntent,
) -> Vec<DesignerCommand> {
    match intent {
        DesignerIntent::Pointer(event) => {
            let position = match event.kind {
                PointerEventKind::Exited => None,
                _ => Some(event.position),
            };
            let mut commands = Vec::new();
            if state.pointer != position {
                commands.push(DesignerCommand::UpdatePointer { position });
            }
            commands.extend(interaction::on_pointer_event(state, event));
            commands
        }
        DesignerIntent::GridSnapToggled => vec![DesignerCommand::SetGridSnap {
            enabled: !state.options.grid_snap_enabled,
        }],
        DesignerIntent::GridSnapSet { enabled } => vec![DesignerCommand::SetGridSnap { enabled }],
        DesignerIntent::GridSpacingChanged { spacing } => {
            vec![DesignerCommand::SetGridSpacing { spacing }]
        }
        DesignerIntent::OptionsChanged { options } => vec![
            DesignerCommand::ApplyOptions { options },
            DesignerCommand::RequestRedraw,
        ],
        DesignerIntent::LockRequested => {
            if state.is_locked() {
                Vec::new()
            } else {
                vec![
                    DesignerCommand::SetInteraction {
                        state: InteractionState::Locked,
                    },
                    DesignerCommand::RequestRedraw,
                ]
            }
        }
        DesignerIntent::UnlockRequested => {
            if state.is_locked() {
                vec![
                    DesignerCommand::SetInteraction {
                        state: InteractionState::Default,
                    },
                    DesignerCommand::RequestRedraw,
                ]
            } else {
                Vec::new()
            }
        }
        DesignerIntent::RemoveSelectedRequested => {
            if state.is_locked() {
                log::warn!("Designer gesperrt: Löschen ignoriert");
                Vec::new()
            } else if state.graph.selected().is_none() {
                Vec::new()
            } else {
                vec![
                    DesignerCommand::RemoveSelectedBrick,
                    DesignerCommand::RequestRedraw,
                ]
            }
        }
        DesignerIntent::ClearSelectionRequested => {
            let mut commands = vec![DesignerCommand::ClearSelection];
            if state.interaction.is_gesture() {
                commands.push(DesignerCommand::SetInteraction {
                    state: InteractionState::Default,
                });
            }
            commands.push(DesignerCommand::RequestRedraw);
            commands
        }
    }
}
