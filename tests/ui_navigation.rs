//! End-to-end navigation flows through the menu overlay

use hello_gpu::app::UiConfig;
use hello_gpu::ui::{FocusLayer, GamepadSnapshot, MenuOverlay, NavKey, Scene};

/// Feeds keys one second apart so focus debouncing never interferes
fn press(ui: &mut MenuOverlay, keys: &[NavKey], clock: &mut f64) {
    for &key in keys {
        *clock += 1.0;
        ui.handle_key(key, *clock);
        ui.update(1.0 / 60.0);
    }
}

fn settle(ui: &mut MenuOverlay) {
    for _ in 0..240 {
        ui.update(1.0 / 60.0);
    }
}

fn assert_focus_in_bounds(ui: &MenuOverlay) {
    let len = ui.focus_list().len();
    match ui.focus_index() {
        Some(index) => assert!(index < len, "focus {index} out of {len}"),
        None => assert_eq!(len, 0),
    }
}

#[test]
fn test_keyboard_journey_through_pause_options() {
    let mut ui = MenuOverlay::new(UiConfig::default());
    let mut clock = 0.0;

    press(&mut ui, &[NavKey::Enter], &mut clock);
    assert_eq!(ui.state().scene, Scene::Playing);
    assert_eq!(ui.state().focus_layer(), FocusLayer::Hud);

    press(&mut ui, &[NavKey::Escape], &mut clock);
    assert!(ui.state().paused);
    assert_eq!(ui.focused_label(), Some("Resume"));

    press(&mut ui, &[NavKey::Down, NavKey::Enter], &mut clock);
    assert!(ui.state().show_options);
    assert_eq!(ui.focused_label(), Some("Triangle speed"));

    // Five 2% steps across the 0.1..3.0 range
    let before = ui.triangle_speed();
    press(&mut ui, &[NavKey::Right; 5], &mut clock);
    assert!((ui.triangle_speed() - (before + 0.1 * 2.9)).abs() < 1e-4);
    assert!((ui.triangle_scale() - 1.0).abs() < 1e-6);

    press(&mut ui, &[NavKey::Quit], &mut clock);
    assert!(ui.quit_requested());
}

#[test]
fn test_pause_to_main_menu_and_back_into_game() {
    let mut ui = MenuOverlay::default();
    let mut clock = 0.0;

    press(&mut ui, &[NavKey::Enter, NavKey::TogglePause], &mut clock);
    press(&mut ui, &[NavKey::Down, NavKey::Down], &mut clock);
    assert_eq!(ui.focused_label(), Some("Main Menu"));

    press(&mut ui, &[NavKey::Enter], &mut clock);
    let state = *ui.state();
    assert_eq!(state.scene, Scene::Menu);
    assert!(!state.paused && !state.pause_menu_open && !state.show_options);
    assert_eq!(ui.focus_list().len(), 3);
    assert_focus_in_bounds(&ui);

    // Focus kept its index, which lands on Quit in the three-button menu
    assert_eq!(ui.focused_label(), Some("Quit"));
    press(&mut ui, &[NavKey::Up, NavKey::Up], &mut clock);
    assert_eq!(ui.focused_label(), Some("Start"));
    press(&mut ui, &[NavKey::Enter], &mut clock);
    assert_eq!(ui.state().scene, Scene::Playing);
    assert!(!ui.state().paused);
}

#[test]
fn test_escape_from_menu_quits() {
    let mut ui = MenuOverlay::default();
    let mut clock = 0.0;
    press(&mut ui, &[NavKey::Enter, NavKey::Escape], &mut clock);
    press(&mut ui, &[NavKey::Down, NavKey::Down, NavKey::Enter], &mut clock);
    assert_eq!(ui.state().scene, Scene::Menu);
    assert!(!ui.quit_requested());

    press(&mut ui, &[NavKey::Escape], &mut clock);
    assert!(ui.quit_requested());
}

#[test]
fn test_focus_stays_in_bounds_under_key_mashing() {
    let keys = [
        NavKey::Enter,
        NavKey::Tab,
        NavKey::Up,
        NavKey::Down,
        NavKey::Left,
        NavKey::Right,
        NavKey::ToggleOptions,
        NavKey::TogglePause,
        NavKey::Escape,
    ];
    let mut ui = MenuOverlay::default();
    let mut seed: u32 = 0x2545_f491;
    let mut clock = 0.0;

    for _ in 0..2000 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let key = keys[(seed >> 16) as usize % keys.len()];
        // Escape outside the game would end the session
        if key == NavKey::Escape && ui.state().scene != Scene::Playing {
            continue;
        }
        clock += 0.1;
        ui.handle_key(key, clock);
        ui.update(1.0 / 60.0);

        assert_focus_in_bounds(&ui);
        assert!(!ui.quit_requested() || ui.focused_label() == Some("Quit"));
        if ui.quit_requested() {
            break;
        }
    }
}

#[test]
fn test_mouse_flow_with_slider_drag() {
    let mut ui = MenuOverlay::default();
    settle(&mut ui);

    ui.handle_press([0.0, 0.28]);
    assert_eq!(ui.state().scene, Scene::Playing);

    // HUD pause box in the top-left corner
    ui.handle_press([-0.9, 0.85]);
    assert!(ui.state().pause_menu_open);

    ui.handle_press([0.0, -0.02]);
    assert!(ui.state().show_options);
    settle(&mut ui);

    let track = ui.slider_track(0).expect("scale slider visible in pause options");
    ui.handle_press([track.cx, track.cy]);
    assert!(ui.sliders()[0].dragging);
    assert_eq!(ui.focused_label(), Some("Triangle scale"));

    ui.update_pointer(Some([track.right(), track.cy]), true);
    assert!((ui.triangle_scale() - 3.0).abs() < 1e-5);

    // Dragging past the track clamps
    ui.update_pointer(Some([track.left() - 1.0, track.cy]), true);
    assert!((ui.triangle_scale() - 0.2).abs() < 1e-5);

    ui.update_pointer(Some([track.left() - 1.0, track.cy]), false);
    assert!(!ui.sliders()[0].dragging);
    ui.update_pointer(Some([track.right(), track.cy]), false);
    assert!((ui.triangle_scale() - 0.2).abs() < 1e-5);
}

#[test]
fn test_gamepad_opens_options_and_adjusts_slider() {
    let mut ui = MenuOverlay::default();
    let idle = GamepadSnapshot::default();
    let down = GamepadSnapshot {
        stick: [0.0, 0.9],
        south: false,
    };
    let right = GamepadSnapshot {
        stick: [0.9, 0.0],
        south: false,
    };
    let south = GamepadSnapshot {
        stick: [0.0, 0.0],
        south: true,
    };

    ui.handle_gamepad(down, 0.0);
    assert_eq!(ui.focused_label(), Some("Options"));
    ui.handle_gamepad(idle, 0.5);
    ui.handle_gamepad(south, 1.0);
    assert!(ui.state().show_options);

    // Holding the button does not re-trigger
    ui.handle_gamepad(south, 2.0);
    assert!(ui.state().show_options);

    let before = ui.triangle_speed();
    ui.handle_gamepad(right, 3.0);
    assert!(ui.triangle_speed() > before);
    assert_focus_in_bounds(&ui);
}

#[test]
fn test_window_title_tracks_scene() {
    let mut ui = MenuOverlay::default();
    let mut clock = 0.0;
    assert!(ui.fallback_title().starts_with("Home"));

    press(&mut ui, &[NavKey::Enter], &mut clock);
    assert!(ui.fallback_title().starts_with("Playing"));

    press(&mut ui, &[NavKey::TogglePause], &mut clock);
    assert!(ui.fallback_title().starts_with("Paused"));

    press(&mut ui, &[NavKey::ToggleOptions], &mut clock);
    assert!(ui.fallback_title().starts_with("Options"));
}
