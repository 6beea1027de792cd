use glam::Vec2;

/// View window that tracks the player within level bounds.
///
/// The origin is recomputed from scratch every step: the camera carries no
/// velocity or easing state and snaps straight to its clamped target.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Top-left corner of the view in world units.
    pub origin: Vec2,
    /// View extent in world units.
    pub viewport: Vec2,
    /// Horizontal lead ahead of the focus, in its facing direction.
    pub look_ahead: f32,
}

impl Camera {
    pub fn new(viewport: Vec2, look_ahead: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            viewport,
            look_ahead,
        }
    }

    /// Center the view on `focus`, lead by [`Camera::look_ahead`] in the
    /// `facing` direction (±1), then clamp both axes to
    /// `[0, level_extent - viewport]`. A level smaller than the viewport
    /// pins the view to the world origin.
    pub fn follow(&mut self, focus: Vec2, facing: f32, level_extent: Vec2) {
        let target = Vec2::new(
            focus.x - self.viewport.x * 0.5 + facing * self.look_ahead,
            focus.y - self.viewport.y * 0.5,
        );
        let max = (level_extent - self.viewport).max(Vec2::ZERO);
        self.origin = target.clamp(Vec2::ZERO, max);
    }
}
