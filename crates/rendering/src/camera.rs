use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use terrain::config::TerrainConfig;
use terrain::mesh::TerrainMesh;

const PAN_SPEED: f32 = 500.0;
const ZOOM_SPEED: f32 = 0.15;
const KEY_ZOOM_RATE: f32 = 1.5;
const ROTATE_SPEED: f32 = 1.5;
const MIN_DISTANCE: f32 = 2.0;
const MIN_PITCH: f32 = 5.0 * std::f32::consts::PI / 180.0; // 5 degrees (grazing)
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0; // 85 degrees
const ORBIT_SENSITIVITY: f32 = 0.005;

/// Orbital camera model: camera orbits around a focus point on the terrain.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Ground point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
    /// Side length of the terrain; bounds panning and zoom-out.
    pub extent: f32,
}

impl OrbitCamera {
    /// Camera centred over a terrain of the given side length, far enough
    /// back to see all of it.
    pub fn framing(extent: f32) -> Self {
        Self {
            focus: Vec3::new(extent / 2.0, 0.0, extent / 2.0),
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 40.0_f32.to_radians(),
            distance: (extent * 1.2).max(MIN_DISTANCE * 4.0),
            extent,
        }
    }

    pub fn max_distance(&self) -> f32 {
        (self.extent * 4.0).max(MIN_DISTANCE * 10.0)
    }

    /// Scale factor for pan speeds: pans cover more ground when zoomed out.
    fn pan_scale(&self) -> f32 {
        self.distance / 1000.0
    }

    fn clamp_focus(&mut self) {
        let margin = self.extent * 0.5;
        self.focus.x = self.focus.x.clamp(-margin, self.extent + margin);
        self.focus.z = self.focus.z.clamp(-margin, self.extent + margin);
    }

    /// Multiply the distance by `factor`, keeping it within zoom limits.
    pub fn zoom_by(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, self.max_distance());
    }

    /// Move the focus by a screen-relative direction rotated by the current yaw.
    pub fn pan(&mut self, right: f32, forward: f32) {
        let cos_yaw = self.yaw.cos();
        let sin_yaw = self.yaw.sin();
        self.focus.x += right * cos_yaw + forward * sin_yaw;
        self.focus.z += -right * sin_yaw + forward * cos_yaw;
        self.clamp_focus();
    }

    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Camera position and look-at target.
    pub fn eye_and_target(&self) -> (Vec3, Vec3) {
        // Spherical to cartesian offset from focus
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        (self.focus + Vec3::new(x, y, z), self.focus)
    }

    pub fn transform(&self) -> Transform {
        let (pos, look_at) = self.eye_and_target();
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y)
    }
}

#[derive(Resource, Default)]
pub struct CameraDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

/// Spawn the 3D camera framing the generated terrain. Falls back to the
/// configured width when generation did not run.
pub fn setup_camera(
    mut commands: Commands,
    mesh: Option<Res<TerrainMesh>>,
    config: Res<TerrainConfig>,
) {
    let extent = match mesh {
        Some(mesh) => mesh.extent(),
        None => config.width as f32,
    };
    let orbit = OrbitCamera::framing(extent);

    commands.spawn((Camera3d::default(), Msaa::Sample4, orbit.transform()));
    commands.insert_resource(orbit);
}

/// System: apply OrbitCamera state to the actual camera Transform each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = orbit.transform();
}

/// WASD/Arrow keys: pan focus along ground plane (direction relative to current yaw).
pub fn camera_pan_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }

    if dir != Vec2::ZERO {
        let dir = dir.normalize();
        let delta = PAN_SPEED * orbit.pan_scale() * time.delta_secs();
        orbit.pan(dir.x * delta, dir.y * delta);
    }
}

/// Q/E: rotate around the focus.
pub fn camera_rotate_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let mut spin = 0.0;
    if keys.pressed(KeyCode::KeyQ) {
        spin -= 1.0;
    }
    if keys.pressed(KeyCode::KeyE) {
        spin += 1.0;
    }
    if spin != 0.0 {
        orbit.orbit(spin * ROTATE_SPEED * time.delta_secs(), 0.0);
    }
}

/// +/-: zoom in and out.
pub fn camera_zoom_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let step = KEY_ZOOM_RATE * time.delta_secs();
    if keys.pressed(KeyCode::Equal) || keys.pressed(KeyCode::NumpadAdd) {
        orbit.zoom_by(1.0 - step);
    }
    if keys.pressed(KeyCode::Minus) || keys.pressed(KeyCode::NumpadSubtract) {
        orbit.zoom_by(1.0 + step);
    }
}

/// Middle-mouse drag: pan focus.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<CameraDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Middle) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Middle) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = (pos - drag.last_pos) * orbit.pan_scale();
            orbit.pan(-delta.x, -delta.y);
            drag.last_pos = pos;
        }
    }
}

/// Right-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<CameraOrbitDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Right) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            orbit.orbit(delta.x * ORBIT_SENSITIVITY, -delta.y * ORBIT_SENSITIVITY);
            drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(mut scroll_evts: EventReader<MouseWheel>, mut orbit: ResMut<OrbitCamera>) {
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        orbit.zoom_by(1.0 - dy * ZOOM_SPEED);
    }
}
