//! Colors used by the recording UI.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);

    // Tailwind palette entries the recording UI draws with.
    pub const RED_500: Color = Color::from_rgb_u8(239, 68, 68);
    pub const STONE_200: Color = Color::from_rgb_u8(231, 229, 228);
    pub const STONE_400: Color = Color::from_rgb_u8(168, 162, 158);
}
