use glam::Vec2;

/// Screen-space box of the menu button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl ButtonRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

/// Translation pulling the button toward the pointer.
#[inline]
pub fn magnetic_offset(pointer: Vec2, rect: &ButtonRect, strength: f32) -> Vec2 {
    (pointer - rect.center()) * strength
}
