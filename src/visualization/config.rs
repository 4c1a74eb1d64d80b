//! Visualization configuration

use bevy::prelude::*;

/// Orbit path band drawn at each body's orbital radius
#[derive(Debug, Clone)]
pub struct OrbitPathConfig {
    pub half_width: f32,
    pub segments: u32,
    pub color: Color,
    pub opacity: f32,
}

/// Secondary ring system drawn around bodies flagged in the catalog
#[derive(Debug, Clone)]
pub struct RingSystemConfig {
    /// Inner edge, measured from the body's surface
    pub inner_offset: f32,
    /// Outer edge, measured from the body's surface
    pub outer_offset: f32,
    pub segments: u32,
    pub color: Color,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct PlanetMaterialConfig {
    pub roughness: f32,
    pub metallic: f32,
    pub emissive_intensity: f32,
    pub sphere_sectors: u32,
    pub sphere_stacks: u32,
}

/// One of the point lights parented to the Sun
#[derive(Debug, Clone, Copy)]
pub struct SunLightSpec {
    /// Relative intensity, multiplied by `LightingConfig::point_light_lumens`
    pub intensity: f32,
    pub range: f32,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct LightingConfig {
    /// Near glow and far falloff around the Sun
    pub sun_lights: [SunLightSpec; 2],
    pub point_light_lumens: f32,
    pub ambient_brightness: f32,
    pub fill_light_position: Vec3,
    pub fill_light_illuminance: f32,
}

#[derive(Debug, Clone)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Inner radius of the star shell
    pub radius: f32,
    /// Thickness of the star shell
    pub depth: f32,
    /// Size multiplier for individual stars
    pub factor: f32,
    pub seed: u32,
}

#[derive(Debug, Clone)]
pub struct CameraConfig {
    pub position: Vec3,
    pub fov_degrees: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl CameraConfig {
    /// Radius, yaw and pitch of `position` around the origin, in the
    /// convention `PanOrbitCamera` uses
    pub fn orbit_pose(&self) -> (f32, f32, f32) {
        let radius = self.position.length();
        if radius <= f32::EPSILON {
            return (0.0, 0.0, 0.0);
        }
        let yaw = self.position.x.atan2(self.position.z);
        let pitch = (self.position.y / radius).clamp(-1.0, 1.0).asin();
        (radius, yaw, pitch)
    }
}

/// Scene rendering configuration resource
#[derive(Resource, Debug, Clone)]
pub struct SceneConfig {
    pub hover_scale: f32,
    pub orbit_path: OrbitPathConfig,
    pub ring_system: RingSystemConfig,
    pub planet_material: PlanetMaterialConfig,
    pub lighting: LightingConfig,
    pub starfield: StarfieldConfig,
    pub camera: CameraConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            hover_scale: 1.3,
            orbit_path: OrbitPathConfig {
                half_width: 0.05,
                segments: 128,
                color: Color::WHITE,
                opacity: 0.3,
            },
            ring_system: RingSystemConfig {
                inner_offset: 0.15,
                outer_offset: 0.4,
                segments: 64,
                color: Color::srgb(1.0, 0.843, 0.0),
                opacity: 0.8,
            },
            planet_material: PlanetMaterialConfig {
                roughness: 0.6,
                metallic: 0.1,
                emissive_intensity: 0.1,
                sphere_sectors: 32,
                sphere_stacks: 32,
            },
            lighting: LightingConfig {
                sun_lights: [
                    SunLightSpec {
                        intensity: 3.0,
                        range: 60.0,
                        color: Color::srgb(1.0, 0.843, 0.0),
                    },
                    SunLightSpec {
                        intensity: 1.5,
                        range: 30.0,
                        color: Color::srgb(1.0, 0.647, 0.0),
                    },
                ],
                point_light_lumens: 200_000.0,
                ambient_brightness: 150.0,
                fill_light_position: Vec3::new(0.0, 0.0, 5.0),
                fill_light_illuminance: 2_000.0,
            },
            starfield: StarfieldConfig {
                count: 5000,
                radius: 100.0,
                depth: 50.0,
                factor: 4.0,
                seed: 0x5eed_2024,
            },
            camera: CameraConfig {
                position: Vec3::new(0.0, 10.0, 15.0),
                fov_degrees: 60.0,
                min_distance: 5.0,
                max_distance: 50.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_pose() {
        let (radius, yaw, pitch) = SceneConfig::default().camera.orbit_pose();
        assert!((radius - 325.0_f32.sqrt()).abs() < 1e-4);
        assert!(yaw.abs() < 1e-6);
        assert!((pitch - (10.0_f32 / 325.0_f32.sqrt()).asin()).abs() < 1e-6);
    }

    #[test]
    fn test_default_camera_inside_zoom_limits() {
        let camera = SceneConfig::default().camera;
        let (radius, _, _) = camera.orbit_pose();
        assert!(radius >= camera.min_distance && radius <= camera.max_distance);
    }

    #[test]
    fn test_sun_lights_near_and_far() {
        let lights = SceneConfig::default().lighting.sun_lights;
        assert!(lights[0].range > lights[1].range);
        assert!(lights[0].intensity > lights[1].intensity);
    }
}
