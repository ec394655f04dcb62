use super::*;
use crate::app::{DesignerController, DesignerIntent, ShellRequest};
use crate::core::{BrickKind, BrickType, ConnectionRejected, ConnectionRule, DesignerEvent};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

const X: BrickType = BrickType::new("X");
const Y: BrickType = BrickType::new("Y");

struct Fixture {
    state: DesignerState<&'static str>,
    controller: DesignerController,
    events: Rc<RefCell<Vec<DesignerEvent>>>,
    a: BrickId,
    b: BrickId,
    c: BrickId,
}

impl Fixture {
    /// A (Typ X, {Y:1}) bei (100,100), B und C (Typ Y, {X:1}) rechts daneben.
    fn new() -> Self {
        let x_kind = Arc::new(BrickKind::new(
            X,
            IVec2::new(40, 40),
            [ConnectionRule::new(Y, 1)],
        ));
        let y_kind = Arc::new(
            BrickKind::new(Y, IVec2::new(40, 40), [ConnectionRule::new(X, 1)]).with_context_menu(),
        );

        let mut state = DesignerState::new();
        let a = state.graph.add_brick(x_kind, "a", IVec2::new(100, 100));
        let b = state
            .graph
            .add_brick(Arc::clone(&y_kind), "b", IVec2::new(200, 100));
        let c = state.graph.add_brick(y_kind, "c", IVec2::new(300, 100));

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        state
            .graph
            .subscribe(move |event| sink.borrow_mut().push(event.clone()));

        Self {
            state,
            controller: DesignerController::new(),
            events,
            a,
            b,
            c,
        }
    }

    fn pointer(&mut self, event: PointerEvent) {
        self.controller
            .handle_intent(&mut self.state, DesignerIntent::Pointer(event))
            .expect("Zeiger-Event darf nicht fehlschlagen");
    }

    fn press(&mut self, x: i32, y: i32, button: PointerButton) {
        self.pointer(PointerEvent::pressed(IVec2::new(x, y), button));
    }

    fn select(&mut self, brick: BrickId) {
        self.state.graph.select(brick).expect("Mitglied");
        self.events.borrow_mut().clear();
    }

    fn events(&self) -> Vec<DesignerEvent> {
        self.events.borrow().clone()
    }

    fn position_of(&self, brick: BrickId) -> IVec2 {
        self.state.graph.brick(brick).expect("Mitglied").position()
    }
}

// ── Default ─────────────────────────────────────────────────────────

#[test]
fn test_press_on_brick_starts_dragging_with_offset() {
    let mut fx = Fixture::new();

    fx.press(110, 125, PointerButton::Primary);

    assert_eq!(
        fx.state.interaction,
        InteractionState::Dragging {
            offset: IVec2::new(10, 25)
        }
    );
    assert_eq!(fx.state.graph.selected(), Some(fx.a));
    assert_eq!(fx.events(), vec![DesignerEvent::BrickSelected { brick: fx.a }]);
}

#[test]
fn test_press_on_already_selected_brick_does_not_reselect() {
    let mut fx = Fixture::new();
    fx.select(fx.a);

    fx.press(110, 110, PointerButton::Primary);

    assert_eq!(fx.state.interaction_kind(), InteractionKind::Dragging);
    assert!(fx.events().is_empty());
}

#[test]
fn test_left_press_on_empty_space_is_noop() {
    let mut fx = Fixture::new();
    fx.select(fx.b);
    fx.state.drain_shell_requests();

    let commands = on_pointer_event(
        &fx.state,
        PointerEvent::pressed(IVec2::new(10, 10), PointerButton::Primary),
    );
    assert!(commands.is_empty());

    fx.press(10, 10, PointerButton::Primary);
    assert_eq!(fx.state.interaction, InteractionState::Default);
    assert_eq!(fx.state.graph.selected(), Some(fx.b));
    assert!(fx.events().is_empty());
    assert!(fx.state.drain_shell_requests().is_empty());
}

#[test]
fn test_right_press_on_empty_space_requests_menu_without_mutation() {
    let mut fx = Fixture::new();
    fx.select(fx.b);

    fx.press(10, 10, PointerButton::Secondary);

    let menu = ContextMenuRequest::EmptySpace {
        position: IVec2::new(10, 10),
    };
    assert_eq!(fx.state.drain_shell_requests(), vec![ShellRequest::ContextMenu(menu)]);
    assert_eq!(fx.state.last_menu_position, Some(IVec2::new(10, 10)));
    assert_eq!(fx.state.interaction, InteractionState::Default);
    assert_eq!(fx.state.graph.selected(), Some(fx.b));
    assert_eq!(fx.state.graph.len(), 3);
    assert!(fx.events().is_empty());
}

#[test]
fn test_right_press_on_brick_selects_and_opens_its_menu() {
    let mut fx = Fixture::new();

    fx.press(210, 110, PointerButton::Secondary);

    assert_eq!(fx.state.graph.selected(), Some(fx.b));
    assert_eq!(fx.state.interaction, InteractionState::Default);
    assert!(fx
        .state
        .drain_shell_requests()
        .contains(&ShellRequest::ContextMenu(ContextMenuRequest::Brick {
            brick: fx.b,
            position: IVec2::new(210, 110),
        })));
}

#[test]
fn test_right_press_on_brick_without_menu_only_selects() {
    let mut fx = Fixture::new();

    fx.press(110, 110, PointerButton::Secondary);

    assert_eq!(fx.state.graph.selected(), Some(fx.a));
    assert_eq!(fx.state.last_menu_position, None);
    assert_eq!(fx.state.drain_shell_requests(), vec![ShellRequest::Redraw]);
}

#[test]
fn test_clicked_and_middle_button_are_ignored() {
    let mut fx = Fixture::new();

    fx.pointer(PointerEvent::clicked(IVec2::new(110, 110), PointerButton::Primary));
    fx.press(110, 110, PointerButton::Middle);

    assert_eq!(fx.state.interaction, InteractionState::Default);
    assert_eq!(fx.state.graph.selected(), None);
}

#[test]
fn test_link_tag_takes_precedence_over_overlapping_brick() {
    let mut fx = Fixture::new();
    // B so verschieben, dass es den Link-Tag von A überdeckt
    fx.state
        .graph
        .move_brick(fx.b, IVec2::new(70, 70))
        .expect("Mitglied");
    fx.select(fx.a);

    fx.press(95, 95, PointerButton::Primary);

    assert_eq!(fx.state.interaction, InteractionState::Linking);
    assert_eq!(fx.state.graph.selected(), Some(fx.a));
}

// ── Dragging ────────────────────────────────────────────────────────

#[test]
fn test_drag_snaps_to_grid() {
    let mut fx = Fixture::new();
    fx.state
        .graph
        .move_brick(fx.a, IVec2::ZERO)
        .expect("Mitglied");
    fx.press(0, 0, PointerButton::Primary);
    fx.events.borrow_mut().clear();

    fx.pointer(PointerEvent::dragged(IVec2::new(23, 41), PointerButton::Primary));

    assert_eq!(fx.position_of(fx.a), IVec2::new(15, 30));
    assert_eq!(
        fx.events(),
        vec![DesignerEvent::BrickMoved {
            brick: fx.a,
            position: IVec2::new(15, 30)
        }]
    );

    // Gleiche Rasterzelle: keine Bewegung, kein Event
    fx.pointer(PointerEvent::dragged(IVec2::new(27, 44), PointerButton::Primary));
    assert_eq!(fx.events().len(), 1);

    fx.pointer(PointerEvent::released(IVec2::new(27, 44), PointerButton::Primary));
    assert_eq!(fx.state.interaction, InteractionState::Default);
    assert_eq!(fx.position_of(fx.a), IVec2::new(15, 30));
}

#[test]
fn test_drag_without_snapping_keeps_offset() {
    let mut fx = Fixture::new();
    fx.state.options.grid_snap_enabled = false;
    fx.press(110, 120, PointerButton::Primary);

    fx.pointer(PointerEvent::dragged(IVec2::new(133, 161), PointerButton::Primary));

    assert_eq!(fx.position_of(fx.a), IVec2::new(123, 141));
}

#[test]
fn test_drag_snaps_negative_positions_downwards() {
    let mut fx = Fixture::new();
    fx.press(100, 100, PointerButton::Primary);

    fx.pointer(PointerEvent::dragged(IVec2::new(-7, -16), PointerButton::Primary));

    assert_eq!(fx.position_of(fx.a), IVec2::new(-15, -30));
}

#[test]
fn test_drag_to_coordinate_limit_saturates() {
    let mut fx = Fixture::new();
    fx.press(110, 120, PointerButton::Primary);

    fx.pointer(PointerEvent::dragged(IVec2::splat(i32::MIN), PointerButton::Primary));
    assert_eq!(fx.position_of(fx.a), IVec2::splat(i32::MIN));

    fx.pointer(PointerEvent::released(IVec2::splat(i32::MIN), PointerButton::Primary));
    // Link-Tag liegt jetzt am Rand des Koordinatenbereichs
    fx.press(0, 0, PointerButton::Primary);
    assert_eq!(fx.state.interaction, InteractionState::Default);
    assert_eq!(fx.state.graph.selected(), Some(fx.a));
}

// ── Linking ─────────────────────────────────────────────────────────

#[test]
fn test_link_gesture_connects_and_selects_target() {
    let mut fx = Fixture::new();
    fx.select(fx.a);

    fx.press(95, 95, PointerButton::Primary);
    assert_eq!(fx.state.interaction, InteractionState::Linking);

    fx.pointer(PointerEvent::moved(IVec2::new(150, 150)));
    assert_eq!(
        fx.state.pending_link_line(),
        Some((IVec2::new(120, 120), IVec2::new(150, 150)))
    );

    fx.press(210, 110, PointerButton::Primary);

    assert!(fx.state.graph.has_connection(fx.a, fx.b));
    assert_eq!(fx.state.graph.selected(), Some(fx.b));
    assert_eq!(fx.state.interaction, InteractionState::Default);
    assert_eq!(fx.state.pending_link_line(), None);
    assert_eq!(
        fx.events(),
        vec![
            DesignerEvent::LinkCreated { a: fx.a, b: fx.b },
            DesignerEvent::BrickSelected { brick: fx.b },
        ]
    );
}

#[test]
fn test_refused_link_still_selects_target() {
    let mut fx = Fixture::new();
    fx.state.graph.connect(fx.a, fx.b).expect("Mitglieder");
    fx.select(fx.a);

    fx.press(95, 95, PointerButton::Primary);
    fx.press(310, 110, PointerButton::Primary);

    assert!(!fx.state.graph.has_connection(fx.a, fx.c));
    assert_eq!(fx.state.graph.selected(), Some(fx.c));
    assert_eq!(fx.state.interaction, InteractionState::Default);
    assert_eq!(
        fx.events(),
        vec![
            DesignerEvent::LinkRefused {
                a: fx.a,
                b: fx.c,
                reason: ConnectionRejected::CapacityExhausted { from: X, to: Y },
            },
            DesignerEvent::BrickSelected { brick: fx.c },
        ]
    );
}

#[test]
fn test_link_press_on_empty_space_clears_selection() {
    let mut fx = Fixture::new();
    fx.select(fx.a);
    fx.press(95, 95, PointerButton::Primary);

    fx.press(10, 10, PointerButton::Secondary);

    assert_eq!(fx.state.graph.selected(), None);
    assert_eq!(fx.state.interaction, InteractionState::Default);
    assert_eq!(fx.state.graph.connection_count(), 0);
}

// ── Unlinking ───────────────────────────────────────────────────────

#[test]
fn test_unlink_gesture_disconnects_and_selects_target() {
    let mut fx = Fixture::new();
    fx.state.graph.connect(fx.a, fx.b).expect("Mitglieder");
    fx.select(fx.a);

    fx.press(95, 95, PointerButton::Secondary);
    assert_eq!(fx.state.interaction, InteractionState::Unlinking);

    fx.press(210, 110, PointerButton::Primary);

    assert!(!fx.state.graph.has_connection(fx.a, fx.b));
    assert_eq!(fx.state.graph.selected(), Some(fx.b));
    assert_eq!(fx.state.interaction, InteractionState::Default);
    assert_eq!(
        fx.events(),
        vec![
            DesignerEvent::LinkDeleted { a: fx.a, b: fx.b },
            DesignerEvent::BrickSelected { brick: fx.b },
        ]
    );
}

#[test]
fn test_unlink_press_on_unconnected_brick_clears_selection() {
    let mut fx = Fixture::new();
    fx.state.graph.connect(fx.a, fx.b).expect("Mitglieder");
    fx.select(fx.a);

    fx.press(95, 95, PointerButton::Secondary);
    fx.press(310, 110, PointerButton::Primary);

    assert!(fx.state.graph.has_connection(fx.a, fx.b));
    assert_eq!(fx.state.graph.selected(), None);
    assert_eq!(fx.state.interaction, InteractionState::Default);
    assert_eq!(fx.events(), vec![DesignerEvent::SelectionCleared]);
}

// ── Locked ──────────────────────────────────────────────────────────

#[test]
fn test_lock_cancels_gesture_and_ignores_pointer() {
    let mut fx = Fixture::new();
    fx.press(110, 110, PointerButton::Primary);
    assert_eq!(fx.state.interaction_kind(), InteractionKind::Dragging);

    fx.controller
        .handle_intent(&mut fx.state, DesignerIntent::LockRequested)
        .expect("Sperren");
    assert_eq!(fx.state.interaction, InteractionState::Locked);
    assert_eq!(fx.state.graph.selected(), Some(fx.a));
    fx.events.borrow_mut().clear();

    fx.pointer(PointerEvent::dragged(IVec2::new(300, 300), PointerButton::Primary));
    fx.press(210, 110, PointerButton::Primary);
    fx.press(10, 10, PointerButton::Secondary);

    assert_eq!(fx.position_of(fx.a), IVec2::new(100, 100));
    assert_eq!(fx.state.graph.selected(), Some(fx.a));
    assert!(fx.events().is_empty());
    assert_eq!(fx.state.last_menu_position, None);

    fx.controller
        .handle_intent(&mut fx.state, DesignerIntent::UnlockRequested)
        .expect("Entsperren");
    assert_eq!(fx.state.interaction, InteractionState::Default);
}

#[test]
fn test_pointer_is_tracked_in_every_state() {
    let mut fx = Fixture::new();
    fx.state.interaction = InteractionState::Locked;

    fx.pointer(PointerEvent::entered(IVec2::new(5, 6)));
    assert_eq!(fx.state.pointer, Some(IVec2::new(5, 6)));

    fx.pointer(PointerEvent::exited(IVec2::new(-1, 6)));
    assert_eq!(fx.state.pointer, None);
}

#[test]
fn test_interaction_kind_display_names() {
    assert_eq!(InteractionKind::Linking.to_string(), "Verbinden");
    assert_eq!(InteractionState::Locked.kind().to_string(), "Gesperrt");
}
