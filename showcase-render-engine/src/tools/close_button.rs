use bevy::prelude::*;

use super::selection::{CloseRequest, SelectionController};

#[derive(Component)]
pub struct CloseButton;

pub fn spawn_close_button(mut commands: Commands) {
    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(24.0),
                right: Val::Px(24.0),
                padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgb(0.10, 0.10, 0.10)),
            Visibility::Hidden,
            CloseButton,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Close"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

// Close button issues a close request and shades on hover/press
pub fn close_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>, With<CloseButton>)>,
    mut closes: EventWriter<CloseRequest>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                closes.write(CloseRequest);
                *bg = BackgroundColor(Color::srgb(0.05, 0.05, 0.05));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.22, 0.22, 0.22)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.10, 0.10, 0.10)),
        }
    }
}

// Only shown while a cell is open
pub fn reflect_close_button(
    selection: Res<SelectionController>,
    mut q: Query<&mut Visibility, With<CloseButton>>,
) {
    let visibility = if selection.is_grid_mode() {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };
    for mut current in &mut q {
        *current = visibility;
    }
}

pub fn close_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut closes: EventWriter<CloseRequest>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        closes.write(CloseRequest);
    }
}
