//! RGB color type and named colors.

/// Three independent integer channels.
///
/// Channels may temporarily leave `[0, 255]` (an ambient of 300 is legal
/// input); [`Color::limit`] clamps them at the lighting boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);

impl Color {
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Same value in every channel.
    pub const fn gray(value: i32) -> Self {
        Self::new(value, value, value)
    }

    /// Clamps every channel to `[0, 255]`.
    pub fn limit(self) -> Self {
        Self {
            red: self.red.clamp(0, 255),
            green: self.green.clamp(0, 255),
            blue: self.blue.clamp(0, 255),
        }
    }

    /// Channels as bytes, clamping first.
    pub fn to_rgb(self) -> [u8; 3] {
        let c = self.limit();
        [c.red as u8, c.green as u8, c.blue as u8]
    }

    /// Packs into ARGB8888 for presenting on a window surface.
    pub fn pack_argb(self) -> u32 {
        let [r, g, b] = self.to_rgb();
        0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
    }

    /// Channel by index: 0 = red, 1 = green, 2 = blue.
    pub fn channel(self, index: usize) -> i32 {
        match index {
            0 => self.red,
            1 => self.green,
            _ => self.blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_clamps_both_ends() {
        assert_eq!(Color::new(-20, 128, 300).limit(), Color::new(0, 128, 255));
    }

    #[test]
    fn pack_argb_is_opaque() {
        assert_eq!(Color::new(0x12, 0x34, 0x56).pack_argb(), 0xFF123456);
    }
}
