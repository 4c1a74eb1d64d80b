//! Control panel and overlay layout
use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy_feathers::controls::{ButtonProps, ButtonVariant, SliderProps, button, slider};
use bevy_feathers::theme::ThemedText;
use bevy_ui_widgets::{Activate, SliderPrecision, SliderStep, ValueChange, observe};

use crate::catalog::BodyId;
use crate::orbital::SimulationState;
use crate::orbital::state::{MAX_SPEED_MULTIPLIER, MIN_SPEED_MULTIPLIER, SPEED_MULTIPLIER_STEP};
use crate::ui::theme::{ThemePalette, ThemedLabel, ThemedSurface};

const PANEL_WIDTH_PX: f32 = 320.0;
const PANEL_MARGIN_PX: f32 = 16.0;

/// Slider bound to one body's speed multiplier
#[derive(Component, Debug, Clone, Copy)]
pub struct SpeedSlider(pub BodyId);

/// Numeric readout next to a speed slider
#[derive(Component, Debug, Clone, Copy)]
pub struct SpeedReadout(pub BodyId);

#[derive(Component)]
pub struct PauseButton;

#[derive(Component)]
pub struct PauseLabel;

#[derive(Component)]
pub struct ThemeToggleLabel;

/// Overlay shown while a body is hovered; hidden otherwise
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverOverlay {
    /// Centered summary at the bottom of the screen
    Summary,
    /// Label that follows the hovered body
    Tooltip,
}

/// Text inside a hover overlay
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverText {
    Name,
    Info,
}

pub fn speed_readout_label(multiplier: f32) -> String {
    format!("{:.1}x", multiplier)
}

pub fn pause_button_label(paused: bool) -> &'static str {
    if paused { "Resume" } else { "Pause" }
}

pub fn pause_button_variant(paused: bool) -> ButtonVariant {
    if paused {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Normal
    }
}

/// The toggle names the mode it switches to
pub fn theme_toggle_label(dark_mode: bool) -> &'static str {
    if dark_mode { "Light" } else { "Dark" }
}

fn label(text: impl Into<String>, size: f32, role: ThemedLabel, palette: ThemePalette) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(role.color(&palette)),
        role,
    )
}

fn header(palette: ThemePalette, dark_mode: bool) -> impl Bundle {
    (
        Node {
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            ..default()
        },
        children![
            label("Solar System Controls", 18.0, ThemedLabel::Main, palette),
            (
                button(
                    ButtonProps::default(),
                    (),
                    Spawn((
                        Text::new(theme_toggle_label(dark_mode)),
                        ThemedText,
                        ThemeToggleLabel,
                    )),
                ),
                observe(
                    |_activate: On<Activate>, mut state: ResMut<SimulationState>| {
                        let dark = state.toggle_theme();
                        info!("Theme switched to {}", if dark { "dark" } else { "light" });
                    }
                ),
            ),
        ],
    )
}

fn playback_row(paused: bool) -> impl Bundle {
    (
        Node {
            column_gap: Val::Px(8.0),
            ..default()
        },
        children![
            (
                button(
                    ButtonProps {
                        variant: pause_button_variant(paused),
                        ..default()
                    },
                    PauseButton,
                    Spawn((Text::new(pause_button_label(paused)), ThemedText, PauseLabel)),
                ),
                observe(
                    |_activate: On<Activate>, mut state: ResMut<SimulationState>| {
                        let paused = state.toggle_pause();
                        info!("Simulation {}", if paused { "paused" } else { "resumed" });
                    }
                ),
            ),
            (
                button(
                    ButtonProps::default(),
                    (),
                    Spawn((Text::new("Reset"), ThemedText)),
                ),
                observe(
                    |_activate: On<Activate>, mut state: ResMut<SimulationState>| {
                        state.reset_speeds();
                        info!("Speed multipliers reset");
                    }
                ),
            ),
        ],
    )
}

fn speed_row(id: BodyId, swatch: Color, multiplier: f32, palette: ThemePalette) -> impl Bundle {
    let body = id.body();
    (
        Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            ..default()
        },
        children![
            (
                Node {
                    justify_content: JustifyContent::SpaceBetween,
                    align_items: AlignItems::Center,
                    ..default()
                },
                children![
                    (
                        Node {
                            align_items: AlignItems::Center,
                            column_gap: Val::Px(8.0),
                            ..default()
                        },
                        children![
                            (
                                Node {
                                    width: Val::Px(12.0),
                                    height: Val::Px(12.0),
                                    ..default()
                                },
                                BackgroundColor(swatch),
                            ),
                            label(body.name, 14.0, ThemedLabel::Main, palette),
                        ],
                    ),
                    (
                        Node {
                            padding: UiRect::axes(Val::Px(6.0), Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(palette.badge_bg),
                        ThemedSurface::Badge,
                        children![(
                            label(speed_readout_label(multiplier), 12.0, ThemedLabel::Main, palette),
                            SpeedReadout(id),
                        )],
                    ),
                ],
            ),
            (
                slider(
                    SliderProps {
                        value: multiplier,
                        min: MIN_SPEED_MULTIPLIER,
                        max: MAX_SPEED_MULTIPLIER,
                        ..default()
                    },
                    (
                        SliderStep(SPEED_MULTIPLIER_STEP),
                        SliderPrecision(1),
                        SpeedSlider(id),
                    ),
                ),
                observe(
                    move |change: On<ValueChange<f32>>, mut state: ResMut<SimulationState>| {
                        state.set_speed_multiplier(id, change.value);
                    }
                ),
            ),
        ],
    )
}

fn help_text(palette: ThemePalette) -> impl Bundle {
    (
        Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(2.0),
            padding: UiRect::all(Val::Px(8.0)),
            margin: UiRect::top(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(palette.badge_bg),
        ThemedSurface::Badge,
        children![
            label("Controls:", 12.0, ThemedLabel::Main, palette),
            label("Drag to rotate view", 12.0, ThemedLabel::Dim, palette),
            label("Scroll to zoom", 12.0, ThemedLabel::Dim, palette),
            label("Hover planets for info", 12.0, ThemedLabel::Dim, palette),
        ],
    )
}

/// Startup system: spawn the control panel on the left edge
pub fn spawn_control_panel(mut commands: Commands, state: Res<SimulationState>) -> Result {
    let palette = ThemePalette::for_mode(state.is_dark_mode());
    let rows = BodyId::all()
        .map(|id| {
            let swatch = id.body().color()?;
            Ok::<_, anyhow::Error>(speed_row(id, swatch, state.speed_multiplier(id), palette))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(PANEL_MARGIN_PX),
            top: Val::Px(PANEL_MARGIN_PX),
            width: Val::Px(PANEL_WIDTH_PX),
            bottom: Val::Px(PANEL_MARGIN_PX),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(12.0),
            padding: UiRect::all(Val::Px(16.0)),
            overflow: Overflow::clip_y(),
            ..default()
        },
        BackgroundColor(palette.panel_bg),
        ThemedSurface::Panel,
        Name::new("Control panel"),
        children![
            header(palette, state.is_dark_mode()),
            playback_row(state.is_paused()),
            (
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(12.0),
                    ..default()
                },
                Children::spawn(SpawnIter(rows.into_iter())),
            ),
            help_text(palette),
        ],
    ));
    Ok(())
}

fn hover_texts() -> impl Bundle {
    children![
        (
            Text::new(""),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(ThemePalette::DARK.overlay_text),
            ThemedLabel::Overlay,
            HoverText::Name,
            Pickable::IGNORE,
        ),
        (
            Text::new(""),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(ThemePalette::DARK.overlay_text.with_alpha(0.8)),
            HoverText::Info,
            Pickable::IGNORE,
        ),
    ]
}

/// Startup system: spawn the hover summary, hover tooltip and footer caption
pub fn spawn_overlays(mut commands: Commands, state: Res<SimulationState>) {
    let palette = ThemePalette::for_mode(state.is_dark_mode());

    // Full-width strip so the summary box can be centered.
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(PANEL_MARGIN_PX),
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        Pickable::IGNORE,
        children![(
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(palette.overlay_bg),
            ThemedSurface::Overlay,
            HoverOverlay::Summary,
            Visibility::Hidden,
            Pickable::IGNORE,
            hover_texts(),
        )],
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            flex_direction: FlexDirection::Column,
            padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(palette.overlay_bg),
        ThemedSurface::Overlay,
        HoverOverlay::Tooltip,
        Visibility::Hidden,
        Pickable::IGNORE,
        hover_texts(),
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(PANEL_MARGIN_PX),
            right: Val::Px(PANEL_MARGIN_PX),
            padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
            ..default()
        },
        BackgroundColor(palette.caption_bg),
        ThemedSurface::Caption,
        Pickable::IGNORE,
        children![(
            label("3D Solar System Simulation", 11.0, ThemedLabel::Dim, palette),
            Pickable::IGNORE,
        )],
    ));
}
