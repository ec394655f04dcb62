//! Bach Designer (headless).
//!
//! Spielt eine Gestenfolge gegen den Interaktionskern ab und protokolliert
//! Events und Shell-Anfragen, ohne Fenster oder Renderer.

use bach_designer::{
    BrickKind, BrickType, ConnectionRule, DesignerController, DesignerIntent, DesignerOptions,
    DesignerState, PointerButton, PointerEvent, ShellRequest,
};
use glam::IVec2;
use std::sync::Arc;

const AGENT: BrickType = BrickType::new("Agent");
const RAW_DATA: BrickType = BrickType::new("RawDataConnection");

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Bach Designer v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = DesignerOptions::load_from_file(&DesignerOptions::config_path());
    let mut shell = HeadlessShell::new(options);
    shell.run_script()?;

    log::info!(
        "Fertig: {} Bricks, {} Verbindungen",
        shell.state.graph.len(),
        shell.state.graph.connection_count()
    );
    Ok(())
}

/// Minimale Shell: leitet Zeiger-Events weiter und bedient Shell-Anfragen per Log.
struct HeadlessShell {
    state: DesignerState<String>,
    controller: DesignerController,
    agent_kind: Arc<BrickKind>,
    raw_data_kind: Arc<BrickKind>,
}

impl HeadlessShell {
    fn new(options: DesignerOptions) -> Self {
        let mut state = DesignerState::with_options(options);
        state
            .graph
            .subscribe(|event| log::info!("Designer-Event: {:?}", event));

        let agent_kind = Arc::new(
            BrickKind::new(
                AGENT,
                IVec2::new(258, 298),
                [
                    ConnectionRule::new(RAW_DATA, 1),
                    ConnectionRule::new(AGENT, 4),
                ],
            )
            .with_display_name("Agent")
            .with_context_menu(),
        );
        let raw_data_kind = Arc::new(
            BrickKind::new(RAW_DATA, IVec2::new(64, 64), [ConnectionRule::new(AGENT, 2)])
                .with_display_name("Rohdaten-Verbindung"),
        );

        Self {
            state,
            controller: DesignerController::new(),
            agent_kind,
            raw_data_kind,
        }
    }

    fn dispatch(&mut self, intent: DesignerIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)?;
        self.serve_requests();
        Ok(())
    }

    fn pointer(&mut self, event: PointerEvent) -> anyhow::Result<()> {
        self.dispatch(DesignerIntent::Pointer(event))
    }

    fn serve_requests(&mut self) {
        for request in self.state.drain_shell_requests() {
            match request {
                ShellRequest::Redraw => log::debug!(
                    "Neuzeichnen ({}): {} Bricks, {} Verbindungen",
                    self.state.interaction_kind(),
                    self.state.graph.len(),
                    self.state.link_segments().count()
                ),
                ShellRequest::ContextMenu(menu) => {
                    log::info!("Kontextmenü angefordert: {:?}", menu)
                }
            }
        }
    }

    fn run_script(&mut self) -> anyhow::Result<()> {
        let agent = self
            .controller
            .add_brick(
                &mut self.state,
                Arc::clone(&self.agent_kind),
                "Agent 1".to_string(),
                IVec2::new(30, 30),
            )
            .ok_or_else(|| anyhow::anyhow!("Agent konnte nicht hinzugefügt werden"))?;
        self.controller.add_brick(
            &mut self.state,
            Arc::clone(&self.raw_data_kind),
            "Rohdaten".to_string(),
            IVec2::new(420, 60),
        );

        // Rechtsklick ins Leere, dann Agent an der Menüposition anlegen
        self.pointer(PointerEvent::pressed(
            IVec2::new(600, 500),
            PointerButton::Secondary,
        ))?;
        self.controller.add_brick_at_menu_position(
            &mut self.state,
            Arc::clone(&self.agent_kind),
            "Agent 2".to_string(),
        );

        // Agent 1 ziehen
        self.pointer(PointerEvent::pressed(IVec2::new(40, 40), PointerButton::Primary))?;
        self.pointer(PointerEvent::dragged(IVec2::new(67, 88), PointerButton::Primary))?;
        self.pointer(PointerEvent::released(IVec2::new(67, 88), PointerButton::Primary))?;

        // Über den Link-Tag mit den Rohdaten verbinden
        let tag = self
            .state
            .link_tag_bounds()
            .ok_or_else(|| anyhow::anyhow!("Kein Brick selektiert"))?;
        self.pointer(PointerEvent::pressed(tag.center(), PointerButton::Primary))?;
        self.pointer(PointerEvent::moved(IVec2::new(300, 100)))?;
        if let Some((from, to)) = self.state.pending_link_line() {
            log::info!("Gummiband von {} nach {}", from, to);
        }
        self.pointer(PointerEvent::pressed(IVec2::new(450, 90), PointerButton::Primary))?;

        for segment in self.state.link_segments() {
            log::info!(
                "Verbindung {}↔{}: {} → {}",
                segment.a,
                segment.b,
                segment.from,
                segment.to
            );
        }

        // Gesperrt wird nicht gelöscht
        self.dispatch(DesignerIntent::LockRequested)?;
        self.dispatch(DesignerIntent::RemoveSelectedRequested)?;
        self.dispatch(DesignerIntent::UnlockRequested)?;

        self.state.graph.select(agent)?;
        self.dispatch(DesignerIntent::RemoveSelectedRequested)?;
        self.pointer(PointerEvent::exited(IVec2::new(-1, -1)))?;
        Ok(())
    }
}
