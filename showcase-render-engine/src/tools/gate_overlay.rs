use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use super::access_gate::AccessGate;

const PLACEHOLDER: &str = "enter code";
const MASK_CHAR: char = '•';

#[derive(Component)]
pub struct GateOverlay;

#[derive(Component)]
pub struct GateInputText;

/// Masked rendering of typed text, one bullet per character.
pub fn masked(text: &str) -> String {
    if text.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        std::iter::repeat_n(MASK_CHAR, text.chars().count()).collect()
    }
}

/// Apply one key press to the input text. Returns whether the text changed.
pub fn edit_input(text: &mut String, key: &Key) -> bool {
    match key {
        Key::Character(chars) => {
            text.push_str(chars.as_str());
            true
        }
        Key::Space => {
            text.push(' ');
            true
        }
        Key::Backspace => text.pop().is_some(),
        _ => false,
    }
}

pub fn spawn_gate_overlay(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.94, 0.94, 0.94, 0.96)),
            GlobalZIndex(10),
            GateOverlay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(masked("")),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.1, 0.1, 0.1)),
                Node {
                    padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BorderColor(Color::srgb(0.1, 0.1, 0.1)),
                GateInputText,
            ));
        });
}

// Feeds key presses into the gate while it is locked
pub fn type_into_gate(
    mut keys: EventReader<KeyboardInput>,
    mut gate: ResMut<AccessGate>,
    mut labels: Query<&mut Text, With<GateInputText>>,
) {
    if gate.is_unlocked() {
        keys.clear();
        return;
    }

    let mut text = gate.input().to_string();
    let mut edited = false;
    for event in keys.read() {
        if event.state == ButtonState::Pressed {
            edited |= edit_input(&mut text, &event.logical_key);
        }
    }
    if !edited {
        return;
    }

    if gate.on_input(&text) {
        info!("Access granted");
    }
    for mut label in &mut labels {
        label.0 = masked(&text);
    }
}

pub fn dismiss_gate_overlay(
    gate: Res<AccessGate>,
    overlays: Query<Entity, With<GateOverlay>>,
    mut commands: Commands,
) {
    if !gate.is_unlocked() {
        return;
    }
    for overlay in &overlays {
        commands.entity(overlay).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_each_character() {
        assert_eq!(masked("abc"), "•••");
        assert_eq!(masked("äö"), "••");
        assert_eq!(masked(""), PLACEHOLDER);
    }

    #[test]
    fn edits_follow_key_presses() {
        let mut text = String::new();
        assert!(edit_input(&mut text, &Key::Character("c".into())));
        assert!(edit_input(&mut text, &Key::Space));
        assert!(edit_input(&mut text, &Key::Character("d".into())));
        assert_eq!(text, "c d");

        assert!(edit_input(&mut text, &Key::Backspace));
        assert_eq!(text, "c ");

        assert!(!edit_input(&mut text, &Key::Shift));
        assert_eq!(text, "c ");
    }

    #[test]
    fn backspace_on_empty_text_is_not_an_edit() {
        let mut text = String::new();
        assert!(!edit_input(&mut text, &Key::Backspace));
    }
}
