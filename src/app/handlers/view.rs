//! Handler für Grid- und Options-Einstellungen.

use crate::app::DesignerState;
use crate::shared::DesignerOptions;
use anyhow::Context;

/// Schaltet Grid-Snapping ein oder aus.
pub fn set_grid_snap<T>(state: &mut DesignerState<T>, enabled: bool) {
    state.options.grid_snap_enabled = enabled;
    log::info!("Grid-Snapping {}", if enabled { "an" } else { "aus" });
}

/// Setzt den Rasterabstand; nicht-positive Werte werden abgelehnt.
pub fn set_grid_spacing<T>(state: &mut DesignerState<T>, spacing: i32) -> anyhow::Result<()> {
    apply_options(
        state,
        DesignerOptions {
            grid_spacing: spacing,
            ..state.options.clone()
        },
    )
}

/// Übernimmt validierte Optionen.
pub fn apply_options<T>(
    state: &mut DesignerState<T>,
    options: DesignerOptions,
) -> anyhow::Result<()> {
    options.validate().context("Optionen abgelehnt")?;
    state.options = options;
    Ok(())
}
