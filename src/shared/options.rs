//! Zentrale Konfiguration für den Bach-Designer.
//!
//! `DesignerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Grid ────────────────────────────────────────────────────────────

/// Standard-Rasterabstand in Pixeln.
pub const GRID_SPACING_PX: i32 = 15;

// ── Link-Tag ────────────────────────────────────────────────────────

/// Kantenlänge des Link-Tags in Pixeln.
pub const LINK_TAG_SIZE_PX: i32 = 10;
/// Abstand des Link-Tags von der linken oberen Brick-Ecke.
pub const LINK_TAG_MARGIN_PX: i32 = 0;

const CONFIG_FILE_NAME: &str = "bach_designer.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Designer-Optionen.
/// Wird als `bach_designer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerOptions {
    // ── Grid ────────────────────────────────────────────────────
    /// Brick-Positionen beim Ziehen auf das Raster einrasten
    pub grid_snap_enabled: bool,
    /// Rasterabstand in Pixeln
    pub grid_spacing: i32,

    // ── Link-Tag ────────────────────────────────────────────────
    /// Kantenlänge des Link-Tags in Pixeln
    pub link_tag_size: i32,
    /// Abstand des Link-Tags nach außen (nie negativ, sonst läge das Tag in den Bounds)
    pub link_tag_margin: i32,
}

impl Default for DesignerOptions {
    fn default() -> Self {
        Self {
            grid_snap_enabled: true,
            grid_spacing: GRID_SPACING_PX,
            link_tag_size: LINK_TAG_SIZE_PX,
            link_tag_margin: LINK_TAG_MARGIN_PX,
        }
    }
}

impl DesignerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fehlt die Datei oder ist sie
    /// fehlerhaft bzw. ungültig, werden Standardwerte verwendet.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {:#}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("bach-designer"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Prüft die Werte auf Plausibilität.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.grid_spacing <= 0 {
            bail!("Rasterabstand muss positiv sein (ist {})", self.grid_spacing);
        }
        if self.link_tag_size <= 0 {
            bail!("Link-Tag-Größe muss positiv sein (ist {})", self.link_tag_size);
        }
        if self.link_tag_margin < 0 {
            bail!(
                "Link-Tag-Abstand darf nicht negativ sein (ist {})",
                self.link_tag_margin
            );
        }
        Ok(())
    }
}
