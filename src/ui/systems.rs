//! UI systems keeping widgets and overlays in sync with the simulation state

use bevy::picking::hover::HoverMap;
use bevy::prelude::*;
use bevy_feathers::theme::UiTheme;
use bevy_panorbit_camera::PanOrbitCamera;
use bevy_ui_widgets::SliderValue;

use crate::catalog::BodyId;
use crate::orbital::SimulationState;
use crate::ui::panels::{
    HoverOverlay, HoverText, PauseButton, PauseLabel, SpeedReadout, SpeedSlider,
    ThemeToggleLabel, pause_button_label, pause_button_variant, speed_readout_label,
    theme_toggle_label,
};
use crate::ui::theme::{ThemePalette, ThemedLabel, ThemedSurface, feathers_theme};
use crate::visualization::bodies::orbit_position;

/// Marker component for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Tooltip corner relative to the hovered body's screen position
const TOOLTIP_OFFSET_PX: Vec2 = Vec2::new(14.0, -18.0);

pub fn tooltip_position(body_screen_pos: Vec2) -> Vec2 {
    body_screen_pos + TOOLTIP_OFFSET_PX
}

/// Push multipliers into the sliders (covers reset as well as drags)
pub fn sync_speed_sliders(
    mut commands: Commands,
    state: Res<SimulationState>,
    sliders: Query<(Entity, &SpeedSlider, &SliderValue)>,
) {
    for (entity, slider, value) in sliders.iter() {
        let target = state.speed_multiplier(slider.0);
        if value.0 != target {
            commands.entity(entity).insert(SliderValue(target));
        }
    }
}

pub fn sync_speed_readouts(
    state: Res<SimulationState>,
    mut readouts: Query<(&SpeedReadout, &mut Text)>,
) {
    for (readout, mut text) in readouts.iter_mut() {
        let label = speed_readout_label(state.speed_multiplier(readout.0));
        if text.0 != label {
            text.0 = label;
        }
    }
}

/// Pause button label and variant follow the pause flag
pub fn sync_playback_controls(
    mut commands: Commands,
    state: Res<SimulationState>,
    mut last: Local<Option<bool>>,
    buttons: Query<Entity, With<PauseButton>>,
    mut labels: Query<&mut Text, With<PauseLabel>>,
) {
    let paused = state.is_paused();
    if *last == Some(paused) {
        return;
    }
    *last = Some(paused);

    for entity in buttons.iter() {
        commands.entity(entity).insert(pause_button_variant(paused));
    }
    for mut text in labels.iter_mut() {
        text.0 = pause_button_label(paused).to_string();
    }
}

/// Restyle background, panel and widgets when the theme flips
pub fn apply_theme(
    state: Res<SimulationState>,
    mut last: Local<Option<bool>>,
    mut clear_color: ResMut<ClearColor>,
    mut ui_theme: ResMut<UiTheme>,
    mut surfaces: Query<(&ThemedSurface, &mut BackgroundColor)>,
    mut labels: Query<(&ThemedLabel, &mut TextColor)>,
    mut toggle_labels: Query<&mut Text, With<ThemeToggleLabel>>,
) {
    let dark_mode = state.is_dark_mode();
    if *last == Some(dark_mode) {
        return;
    }
    *last = Some(dark_mode);

    let palette = ThemePalette::for_mode(dark_mode);
    clear_color.0 = palette.background;
    *ui_theme = feathers_theme(dark_mode);

    for (surface, mut background) in surfaces.iter_mut() {
        background.0 = surface.color(&palette);
    }
    for (label, mut color) in labels.iter_mut() {
        color.0 = label.color(&palette);
    }
    for mut text in toggle_labels.iter_mut() {
        text.0 = theme_toggle_label(dark_mode).to_string();
    }
}

/// Show or hide the hover overlays and fill in the hovered body's text
pub fn update_hover_overlays(
    state: Res<SimulationState>,
    mut last: Local<Option<Option<BodyId>>>,
    mut overlays: Query<&mut Visibility, With<HoverOverlay>>,
    mut texts: Query<(&HoverText, &mut Text)>,
) {
    let hovered = state.hovered();
    if *last == Some(hovered) {
        return;
    }
    *last = Some(hovered);

    let visibility = if hovered.is_some() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut overlay in overlays.iter_mut() {
        *overlay = visibility;
    }

    let Some(id) = hovered else { return };
    let body = id.body();
    for (kind, mut text) in texts.iter_mut() {
        text.0 = match kind {
            HoverText::Name => body.name,
            HoverText::Info => body.info,
        }
        .to_string();
    }
}

/// Keep the tooltip next to the hovered body on screen.
///
/// Runs after the orbit camera has moved and before UI layout. `GlobalTransform`
/// is only propagated after layout, so the body position is taken from the
/// orbital angle and the camera (a root entity) from its local `Transform`.
pub fn position_hover_tooltip(
    state: Res<SimulationState>,
    camera: Query<(&Camera, &Transform), With<MainCamera>>,
    mut overlays: Query<(&HoverOverlay, &mut Node)>,
) {
    let Some(id) = state.hovered() else { return };
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let body_pos = orbit_position(id, state.orbit_angle(id));
    let Ok(screen_pos) = camera.world_to_viewport(&GlobalTransform::from(*camera_transform), body_pos)
    else {
        return;
    };

    let pos = tooltip_position(screen_pos);
    for (overlay, mut node) in overlays.iter_mut() {
        if *overlay == HoverOverlay::Tooltip {
            node.left = Val::Px(pos.x);
            node.top = Val::Px(pos.y);
        }
    }
}

/// Stop the orbit camera from reacting to drags and scrolls over the panel
pub fn block_camera_over_ui(
    hover_map: Res<HoverMap>,
    nodes: Query<(), With<Node>>,
    mut cameras: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    let over_ui = hover_map
        .values()
        .flat_map(|hits| hits.keys())
        .any(|entity| nodes.contains(*entity));

    for mut camera in cameras.iter_mut() {
        if camera.enabled == over_ui {
            camera.enabled = !over_ui;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: usize) -> BodyId {
        BodyId::new(index).unwrap()
    }

    fn ui_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<SimulationState>()
            .init_resource::<ClearColor>()
            .insert_resource(feathers_theme(true));
        app
    }

    #[test]
    fn test_tooltip_offset() {
        assert_eq!(tooltip_position(Vec2::new(100.0, 100.0)), Vec2::new(114.0, 82.0));
    }

    #[test]
    fn test_sliders_follow_state() {
        let mut app = ui_app();
        app.add_systems(Update, sync_speed_sliders);
        let slider = app
            .world_mut()
            .spawn((SpeedSlider(id(3)), SliderValue(1.0)))
            .id();

        app.world_mut()
            .resource_mut::<SimulationState>()
            .set_speed_multiplier(id(3), 4.2);
        app.update();
        let value = app.world().get::<SliderValue>(slider).unwrap().0;
        assert!((value - 4.2).abs() < 1e-5);

        app.world_mut().resource_mut::<SimulationState>().reset_speeds();
        app.update();
        assert_eq!(app.world().get::<SliderValue>(slider).unwrap().0, 1.0);
    }

    #[test]
    fn test_readouts_follow_state() {
        let mut app = ui_app();
        app.add_systems(Update, sync_speed_readouts);
        let readout = app
            .world_mut()
            .spawn((SpeedReadout(id(0)), Text::new("1.0x")))
            .id();

        app.world_mut()
            .resource_mut::<SimulationState>()
            .set_speed_multiplier(id(0), 0.0);
        app.update();
        assert_eq!(app.world().get::<Text>(readout).unwrap().0, "0.0x");
    }

    #[test]
    fn test_pause_label_follows_state() {
        let mut app = ui_app();
        app.add_systems(Update, sync_playback_controls);
        let label = app
            .world_mut()
            .spawn((PauseLabel, Text::new("Pause")))
            .id();

        app.update();
        assert_eq!(app.world().get::<Text>(label).unwrap().0, "Pause");

        app.world_mut().resource_mut::<SimulationState>().toggle_pause();
        app.update();
        assert_eq!(app.world().get::<Text>(label).unwrap().0, "Resume");
    }

    #[test]
    fn test_theme_toggle_restyles() {
        let mut app = ui_app();
        app.add_systems(Update, apply_theme);
        let panel = app
            .world_mut()
            .spawn((ThemedSurface::Panel, BackgroundColor(ThemePalette::DARK.panel_bg)))
            .id();
        let text = app
            .world_mut()
            .spawn((ThemedLabel::Main, TextColor(ThemePalette::DARK.text_main)))
            .id();

        app.update();
        assert_eq!(app.world().resource::<ClearColor>().0, Color::BLACK);

        app.world_mut().resource_mut::<SimulationState>().toggle_theme();
        app.update();
        let light = ThemePalette::LIGHT;
        assert_eq!(app.world().resource::<ClearColor>().0, light.background);
        assert_eq!(app.world().get::<BackgroundColor>(panel).unwrap().0, light.panel_bg);
        assert_eq!(app.world().get::<TextColor>(text).unwrap().0, light.text_main);

        app.world_mut().resource_mut::<SimulationState>().toggle_theme();
        app.update();
        assert_eq!(app.world().resource::<ClearColor>().0, Color::BLACK);
    }

    #[test]
    fn test_hover_overlays_show_hovered_body() {
        let mut app = ui_app();
        app.add_systems(Update, update_hover_overlays);
        let overlay = app
            .world_mut()
            .spawn((HoverOverlay::Summary, Visibility::Hidden))
            .id();
        let name = app
            .world_mut()
            .spawn((HoverText::Name, Text::new("")))
            .id();
        let info = app
            .world_mut()
            .spawn((HoverText::Info, Text::new("")))
            .id();

        app.update();
        assert_eq!(
            *app.world().get::<Visibility>(overlay).unwrap(),
            Visibility::Hidden
        );

        app.world_mut()
            .resource_mut::<SimulationState>()
            .pointer_enter(id(5));
        app.update();
        assert_eq!(
            *app.world().get::<Visibility>(overlay).unwrap(),
            Visibility::Visible
        );
        assert_eq!(app.world().get::<Text>(name).unwrap().0, "Saturn");
        assert_eq!(app.world().get::<Text>(info).unwrap().0, "Has beautiful rings");

        app.world_mut()
            .resource_mut::<SimulationState>()
            .pointer_leave(id(5));
        app.update();
        assert_eq!(
            *app.world().get::<Visibility>(overlay).unwrap(),
            Visibility::Hidden
        );
    }
}
