//! Designer Controller für zentrale Event-Verarbeitung.

use super::{DesignerCommand, DesignerIntent, DesignerState};
use crate::core::{BrickId, BrickKind};
use glam::IVec2;
use std::sync::Arc;

/// Orchestriert Shell-Intents und Handler auf den DesignerState.
#[derive(Debug, Default)]
pub struct DesignerController;

impl DesignerController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent<T>(
        &mut self,
        state: &mut DesignerState<T>,
        intent: DesignerIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands<T>(
        &self,
        state: &DesignerState<T>,
        intent: DesignerIntent,
    ) -> Vec<DesignerCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem DesignerState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command<T>(
        &mut self,
        state: &mut DesignerState<T>,
        command: DesignerCommand,
    ) -> anyhow::Result<()> {
        log::trace!("Command: {command:?}");
        use super::handlers;

        match command {
            // === Selektion ===
            DesignerCommand::SelectBrick { brick } => handlers::selection::select(state, brick)?,
            DesignerCommand::ClearSelection => handlers::selection::clear(state),

            // === Editing ===
            DesignerCommand::MoveBrick { brick, position } => {
                handlers::editing::move_brick(state, brick, position)?
            }
            DesignerCommand::Connect { a, b } => handlers::editing::connect(state, a, b)?,
            DesignerCommand::Disconnect { a, b } => handlers::editing::disconnect(state, a, b)?,
            DesignerCommand::RemoveSelectedBrick => handlers::editing::remove_selected(state)?,

            // === Interaktion ===
            DesignerCommand::SetInteraction { state: next } => {
                handlers::interaction::set_state(state, next)
            }
            DesignerCommand::UpdatePointer { position } => {
                handlers::interaction::update_pointer(state, position)
            }
            DesignerCommand::ShowContextMenu { request } => {
                handlers::interaction::show_context_menu(state, request)
            }
            DesignerCommand::RequestRedraw => handlers::interaction::request_redraw(state),

            // === Optionen ===
            DesignerCommand::SetGridSnap { enabled } => handlers::view::set_grid_snap(state, enabled),
            DesignerCommand::SetGridSpacing { spacing } => {
                handlers::view::set_grid_spacing(state, spacing)?
            }
            DesignerCommand::ApplyOptions { options } => {
                handlers::view::apply_options(state, options)?
            }
        }

        Ok(())
    }

    /// Fügt einen Brick mit linker oberer Ecke `position` hinzu.
    ///
    /// Gibt `None` zurück, wenn der Designer gesperrt ist.
    pub fn add_brick<T>(
        &mut self,
        state: &mut DesignerState<T>,
        kind: Arc<BrickKind>,
        model: T,
        position: IVec2,
    ) -> Option<BrickId> {
        if state.is_locked() {
            log::warn!(
                "Designer gesperrt: Brick '{}' wird nicht hinzugefügt",
                kind.display_name()
            );
            return None;
        }
        let id = state.graph.add_brick(kind, model, position);
        state.request_redraw();
        Some(id)
    }

    /// Fügt einen Brick zentriert auf die letzte Kontextmenü-Position hinzu.
    ///
    /// Gibt `None` zurück, wenn kein Menü angefordert wurde oder der Designer gesperrt ist.
    pub fn add_brick_at_menu_position<T>(
        &mut self,
        state: &mut DesignerState<T>,
        kind: Arc<BrickKind>,
        model: T,
    ) -> Option<BrickId> {
        let Some(menu_position) = state.last_menu_position else {
            log::warn!("Keine Kontextmenü-Position bekannt: Brick wird nicht hinzugefügt");
            return None;
        };
        let position = menu_position.saturating_sub(kind.size() / 2);
        self.add_brick(state, kind, model, position)
    }
}
