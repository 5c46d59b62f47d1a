use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::constants::camera;
use crate::ui::Settings;

/// Marker component for the preview camera
#[derive(Component)]
pub struct PreviewCamera;

/// Orbit camera state. The camera always looks at `target`.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: camera::CUBE_DISTANCE,
            target: Vec3::ZERO,
        }
    }
}

impl OrbitCamera {
    /// Put the camera back on the +Z axis at `distance`.
    pub fn reset(&mut self, distance: f32) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.distance = distance.clamp(camera::MIN_DISTANCE, camera::MAX_DISTANCE);
    }

    pub fn rotate(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch = (self.pitch - delta.y * sensitivity)
            .clamp(-std::f32::consts::FRAC_PI_2 + 0.1, std::f32::consts::FRAC_PI_2 - 0.1);
    }

    /// Scroll up zooms in, scroll down zooms out. `scroll` is in wheel
    /// lines; a single step never moves more than the zoom factor bounds.
    pub fn zoom(&mut self, scroll: f32, speed: f32) {
        let factor = (1.0 - scroll * speed).clamp(camera::MIN_ZOOM_FACTOR, camera::MAX_ZOOM_FACTOR);
        self.distance = (self.distance * factor).clamp(camera::MIN_DISTANCE, camera::MAX_DISTANCE);
    }

    pub fn eye(&self) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        self.target + rotation * Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

pub(crate) fn spawn_preview_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    commands.spawn((
        PreviewCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera::FOV_DEGREES.to_radians(),
            near: camera::NEAR,
            far: camera::FAR,
            ..default()
        }),
        orbit.transform(),
        orbit,
    ));
}

/// Convert a vertical scroll delta to wheel lines
fn scroll_lines(unit: MouseScrollUnit, delta: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => delta,
        MouseScrollUnit::Pixel => delta / camera::PIXELS_PER_SCROLL_LINE,
    }
}

/// Rotate with the left mouse button, zoom with the scroll wheel
pub(crate) fn orbit_controls(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    settings: Res<Settings>,
    mut query: Query<&mut OrbitCamera, With<PreviewCamera>>,
    mut contexts: EguiContexts,
) {
    // Don't steal input from the control panel
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() || ctx.is_pointer_over_area() {
            return;
        }
    }

    let rotate = mouse_button.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO;
    let zoom = scroll.delta.y != 0.0;
    if !rotate && !zoom {
        return;
    }

    let lines = scroll_lines(scroll.unit, scroll.delta.y);

    for mut orbit in &mut query {
        if rotate {
            orbit.rotate(mouse_motion.delta, settings.orbit_sensitivity);
        }
        if zoom {
            orbit.zoom(lines, settings.zoom_speed);
        }
    }
}

/// Keep the camera transform in sync with its orbit state
pub(crate) fn sync_orbit_transform(
    mut query: Query<(&OrbitCamera, &mut Transform), (With<PreviewCamera>, Changed<OrbitCamera>)>,
) {
    for (orbit, mut transform) in &mut query {
        *transform = orbit.transform();
    }
}
