//! Static table of the bodies orbiting the Sun.
//!
//! The table is compiled in and never mutated. Everything else in the crate
//! refers to a body through its [`BodyId`], the index into [`BODIES`].

use anyhow::Context;
use bevy::prelude::*;

/// Number of orbiting bodies in the catalog
pub const BODY_COUNT: usize = 8;

/// Static visual and orbital parameters of one orbiting body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub name: &'static str,
    /// sRGB hex color, `#RRGGBB`
    pub color_hex: &'static str,
    /// Render radius in scene units
    pub size: f32,
    /// Orbital radius in scene units
    pub distance: f32,
    /// Relative angular speed (inverse of the orbital period, arbitrary units)
    pub base_speed: f32,
    pub info: &'static str,
    /// Draws the secondary ring system around the body
    pub has_ring_system: bool,
}

impl Body {
    /// Parse the display color of this body
    pub fn color(&self) -> anyhow::Result<Color> {
        let srgba = Srgba::hex(self.color_hex)
            .with_context(|| format!("invalid color {:?} for {}", self.color_hex, self.name))?;
        Ok(Color::Srgba(srgba))
    }
}

// Ordered by distance from the Sun.
pub const BODIES: [Body; BODY_COUNT] = [
    Body {
        name: "Mercury",
        color_hex: "#B7B8B9",
        size: 0.2,
        distance: 2.5,
        base_speed: 4.74,
        info: "Closest to Sun",
        has_ring_system: false,
    },
    Body {
        name: "Venus",
        color_hex: "#FFD700",
        size: 0.3,
        distance: 3.5,
        base_speed: 3.5,
        info: "Hottest planet",
        has_ring_system: false,
    },
    Body {
        name: "Earth",
        color_hex: "#4A90E2",
        size: 0.35,
        distance: 4.5,
        base_speed: 2.98,
        info: "Our home planet",
        has_ring_system: false,
    },
    Body {
        name: "Mars",
        color_hex: "#FF4500",
        size: 0.25,
        distance: 5.5,
        base_speed: 2.41,
        info: "The red planet",
        has_ring_system: false,
    },
    Body {
        name: "Jupiter",
        color_hex: "#FFA500",
        size: 0.9,
        distance: 7.5,
        base_speed: 1.31,
        info: "Largest planet",
        has_ring_system: false,
    },
    Body {
        name: "Saturn",
        color_hex: "#FFFF99",
        size: 0.8,
        distance: 9.5,
        base_speed: 0.97,
        info: "Has beautiful rings",
        has_ring_system: true,
    },
    Body {
        name: "Uranus",
        color_hex: "#00FFFF",
        size: 0.5,
        distance: 11.5,
        base_speed: 0.68,
        info: "Tilted on its side",
        has_ring_system: false,
    },
    Body {
        name: "Neptune",
        color_hex: "#0066FF",
        size: 0.5,
        distance: 13.5,
        base_speed: 0.54,
        info: "Windiest planet",
        has_ring_system: false,
    },
];

/// Central body radius in scene units
pub const SUN_RADIUS: f32 = 0.6;
pub const SUN_COLOR: Color = Color::srgb(1.0, 0.843, 0.0);

/// Index of a body in [`BODIES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(usize);

impl BodyId {
    /// Returns `None` for indices outside the catalog
    pub fn new(index: usize) -> Option<Self> {
        (index < BODY_COUNT).then_some(Self(index))
    }

    /// All ids in canonical order
    pub fn all() -> impl Iterator<Item = BodyId> + Clone {
        (0..BODY_COUNT).map(BodyId)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn body(self) -> &'static Body {
        &BODIES[self.0]
    }
}
