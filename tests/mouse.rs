//! Mouse click tests - focus on click, caret placement from pixels

mod common;

use common::{caret_of, focused_count, test_field, test_fields, FakeControl};
use token_field::editable::caret;
use token_field::host::{ControlId, FontId};
use token_field::input::{MouseButton, MouseClick};

// Control 1 sits at x = 0, y = 30, 200x20; characters are 10px wide.

#[test]
fn test_click_focuses_and_places_caret() {
    let (mut fields, id) = test_field("hello", 0);

    assert!(fields.handle_mouse_click(id, MouseClick::left(23.0, 35.0)));
    assert_eq!(fields.focused(), Some(id));
    assert!(fields.field(id).unwrap().has_focus());
    assert_eq!(caret_of(&fields, id), 2);
}

#[test]
fn test_click_rounds_to_closest_boundary() {
    let (mut fields, id) = test_field("hello", 0);

    fields.handle_mouse_click(id, MouseClick::left(27.0, 35.0));
    assert_eq!(caret_of(&fields, id), 3);

    // Exactly halfway goes left
    fields.handle_mouse_click(id, MouseClick::left(25.0, 35.0));
    assert_eq!(caret_of(&fields, id), 2);
}

#[test]
fn test_click_past_text_end_puts_caret_at_end() {
    let (mut fields, id) = test_field("hello", 0);
    fields.handle_mouse_click(id, MouseClick::left(150.0, 35.0));
    assert_eq!(caret_of(&fields, id), 5);
}

#[test]
fn test_click_outside_bounds_focuses_without_moving_caret() {
    let (mut fields, id) = test_field("hello", 1);

    assert!(fields.handle_mouse_click(id, MouseClick::left(250.0, 35.0)));
    assert_eq!(fields.focused(), Some(id));
    assert_eq!(caret_of(&fields, id), 1);

    assert!(fields.handle_mouse_click(id, MouseClick::left(20.0, 5.0)));
    assert_eq!(caret_of(&fields, id), 1);
}

#[test]
fn test_click_honors_left_padding() {
    let mut fields = test_fields();
    let id = fields
        .create(&FakeControl::new(1), Some("hello"), 10.0, 0.0)
        .unwrap();

    fields.handle_mouse_click(id, MouseClick::left(33.0, 35.0));
    assert_eq!(caret_of(&fields, id), 2);

    // Inside the padding
    fields.handle_mouse_click(id, MouseClick::left(4.0, 35.0));
    assert_eq!(caret_of(&fields, id), 0);
}

#[test]
fn test_click_honors_caret_offset() {
    let (mut fields, id) = test_field("hello", 0);
    fields.set_caret_offset(3.0);

    for i in 0..=5 {
        let x = caret::pixel_from_caret_index("hello", fields.metrics(), FontId(0), i, 3.0);
        fields.handle_mouse_click(id, MouseClick::left(x, 35.0));
        assert_eq!(caret_of(&fields, id), i);
    }
}

#[test]
fn test_any_button_focuses() {
    let (mut fields, id) = test_field("hello", 0);
    assert!(fields.handle_mouse_click(id, MouseClick::new(MouseButton::Right, 11.0, 35.0)));
    assert_eq!(fields.focused(), Some(id));
    assert_eq!(caret_of(&fields, id), 1);
}

#[test]
fn test_click_on_disabled_field_is_ignored() {
    let (mut fields, id) = test_field("hello", 0);
    fields.set_enabled(id, false);

    assert!(!fields.handle_mouse_click(id, MouseClick::left(23.0, 35.0)));
    assert_eq!(fields.focused(), None);
    assert_eq!(caret_of(&fields, id), 0);
}

#[test]
fn test_click_moves_focus_between_fields() {
    let mut fields = test_fields();
    let a = fields
        .create(&FakeControl::new(1), Some("first"), 0.0, 0.0)
        .unwrap();
    let b = fields
        .create(&FakeControl::new(2), Some("second"), 0.0, 0.0)
        .unwrap();

    fields.handle_mouse_click(a, MouseClick::left(5.0, 35.0));
    fields.handle_mouse_click(b, MouseClick::left(5.0, 65.0));

    assert_eq!(fields.focused(), Some(b));
    assert_eq!(focused_count(&fields), 1);
    assert!(!fields.field(a).unwrap().has_focus());
}

// ========================================================================
// Clicks routed by control
// ========================================================================

#[test]
fn test_click_any_routes_to_bound_field() {
    let mut fields = test_fields();
    let id = fields
        .create(&FakeControl::new(2), Some("hello"), 0.0, 0.0)
        .unwrap();

    assert!(fields.handle_mouse_click_any(ControlId::from_raw(2), MouseClick::left(41.0, 65.0)));
    assert_eq!(fields.focused(), Some(id));
    assert_eq!(caret_of(&fields, id), 4);
}

#[test]
fn test_click_any_on_unbound_control_changes_nothing() {
    let (mut fields, id) = test_field("hello", 2);
    fields.set_focus(Some(id));

    assert!(!fields.handle_mouse_click_any(ControlId::from_raw(77), MouseClick::left(5.0, 35.0)));
    assert!(!fields.handle_mouse_click_any(ControlId::NULL, MouseClick::left(5.0, 35.0)));

    assert_eq!(fields.focused(), Some(id));
    assert!(fields.field(id).unwrap().has_focus());
    assert_eq!(caret_of(&fields, id), 2);
    assert_eq!(fields.fields().len(), 1);
}
