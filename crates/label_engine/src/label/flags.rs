//! Packed per-label configuration state
//!
//! A scene can hold many thousands of labels, so the eight two-bit
//! enumeration fields plus the visibility and disposal bits all live in one
//! `u16` word behind mask/shift accessors.

/// Vertical alignment of the text block within its container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AlignVertical {
    /// Text block starts at the container top
    Top = 0,
    /// Text block is centered vertically
    Center = 1,
    /// Text block ends at the container bottom
    Bottom = 2,
}

impl AlignVertical {
    pub(crate) fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            1 => Self::Center,
            2 => Self::Bottom,
            _ => Self::Top,
        }
    }
}

/// Horizontal alignment of each text line within its container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AlignHorizontal {
    /// Lines start at the container left edge
    Left = 0,
    /// Lines are centered horizontally
    Center = 1,
    /// Lines end at the container right edge
    Right = 2,
}

impl AlignHorizontal {
    pub(crate) fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            1 => Self::Center,
            2 => Self::Right,
            _ => Self::Left,
        }
    }
}

/// Direction the container grows vertically to fit the text
///
/// In fixed-size mode growth only applies when the measured text is taller
/// than the explicit height. In auto-size mode the policy defines the
/// container outright; `None` has no meaningful extent there, so the
/// container falls back to `Down` growth and a warning is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GrowVertical {
    /// Extend the bottom edge; the anchor stays at the top
    Down = 0,
    /// Extend the top edge; the anchor shifts up with it
    Up = 1,
    /// Extend both edges equally around the anchor
    Both = 2,
    /// Never extend; overflowing text draws past the container
    None = 3,
}

impl GrowVertical {
    pub(crate) fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            1 => Self::Up,
            2 => Self::Both,
            3 => Self::None,
            _ => Self::Down,
        }
    }
}

/// Direction the container grows horizontally to fit the text
///
/// In fixed-size mode growth only applies when the measured text is wider
/// than the explicit width. In auto-size mode the policy defines the
/// container outright; `None` has no meaningful extent there, so the
/// container falls back to `Right` growth and a warning is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GrowHorizontal {
    /// Extend the right edge; the anchor stays at the left
    Right = 0,
    /// Extend the left edge; the anchor shifts left with it
    Left = 1,
    /// Extend both edges equally around the anchor
    Both = 2,
    /// Never extend; overflowing text draws past the container
    None = 3,
}

impl GrowHorizontal {
    pub(crate) fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            1 => Self::Left,
            2 => Self::Both,
            3 => Self::None,
            _ => Self::Right,
        }
    }
}

/// Packed label state word
///
/// Bit layout:
/// - bit 0: visible
/// - bits 1-2: vertical alignment
/// - bits 3-4: horizontal alignment
/// - bits 5-6: horizontal growth
/// - bits 7-8: vertical growth
/// - bit 9: disposed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LabelFlags(u16);

impl LabelFlags {
    const VISIBLE: u16 = 1 << 0;
    const DISPOSED: u16 = 1 << 9;

    const ALIGN_V_SHIFT: u16 = 1;
    const ALIGN_H_SHIFT: u16 = 3;
    const GROW_H_SHIFT: u16 = 5;
    const GROW_V_SHIFT: u16 = 7;

    const FIELD_MASK: u16 = 0b11;

    /// Freshly constructed labels are visible with every field zeroed
    pub fn new() -> Self {
        Self(Self::VISIBLE)
    }

    fn field(self, shift: u16) -> u16 {
        (self.0 >> shift) & Self::FIELD_MASK
    }

    fn set_field(&mut self, shift: u16, value: u16) {
        self.0 &= !(Self::FIELD_MASK << shift);
        self.0 |= (value & Self::FIELD_MASK) << shift;
    }

    pub fn align_vertical(self) -> AlignVertical {
        AlignVertical::from_bits(self.field(Self::ALIGN_V_SHIFT))
    }

    pub fn set_align_vertical(&mut self, align: AlignVertical) {
        self.set_field(Self::ALIGN_V_SHIFT, align as u16);
    }

    pub fn align_horizontal(self) -> AlignHorizontal {
        AlignHorizontal::from_bits(self.field(Self::ALIGN_H_SHIFT))
    }

    pub fn set_align_horizontal(&mut self, align: AlignHorizontal) {
        self.set_field(Self::ALIGN_H_SHIFT, align as u16);
    }

    pub fn grow_horizontal(self) -> GrowHorizontal {
        GrowHorizontal::from_bits(self.field(Self::GROW_H_SHIFT))
    }

    pub fn set_grow_horizontal(&mut self, grow: GrowHorizontal) {
        self.set_field(Self::GROW_H_SHIFT, grow as u16);
    }

    pub fn grow_vertical(self) -> GrowVertical {
        GrowVertical::from_bits(self.field(Self::GROW_V_SHIFT))
    }

    pub fn set_grow_vertical(&mut self, grow: GrowVertical) {
        self.set_field(Self::GROW_V_SHIFT, grow as u16);
    }

    pub fn is_visible(self) -> bool {
        self.0 & Self::VISIBLE != 0
    }

    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.0 |= Self::VISIBLE;
        } else {
            self.0 &= !Self::VISIBLE;
        }
    }

    pub fn is_disposed(self) -> bool {
        self.0 & Self::DISPOSED != 0
    }

    pub fn set_disposed(&mut self) {
        self.0 |= Self::DISPOSED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_flags_are_visible_only() {
        let flags = LabelFlags::new();

        assert!(flags.is_visible());
        assert!(!flags.is_disposed());
        assert_eq!(flags.align_vertical(), AlignVertical::Top);
        assert_eq!(flags.align_horizontal(), AlignHorizontal::Left);
        assert_eq!(flags.grow_horizontal(), GrowHorizontal::Right);
        assert_eq!(flags.grow_vertical(), GrowVertical::Down);
    }

    #[test]
    fn test_every_enum_member_round_trips() {
        let mut flags = LabelFlags::new();

        for align in [
            AlignVertical::Top,
            AlignVertical::Center,
            AlignVertical::Bottom,
        ] {
            flags.set_align_vertical(align);
            assert_eq!(flags.align_vertical(), align);
        }
        for align in [
            AlignHorizontal::Left,
            AlignHorizontal::Center,
            AlignHorizontal::Right,
        ] {
            flags.set_align_horizontal(align);
            assert_eq!(flags.align_horizontal(), align);
        }
        for grow in [
            GrowHorizontal::Right,
            GrowHorizontal::Left,
            GrowHorizontal::Both,
            GrowHorizontal::None,
        ] {
            flags.set_grow_horizontal(grow);
            assert_eq!(flags.grow_horizontal(), grow);
        }
        for grow in [
            GrowVertical::Down,
            GrowVertical::Up,
            GrowVertical::Both,
            GrowVertical::None,
        ] {
            flags.set_grow_vertical(grow);
            assert_eq!(flags.grow_vertical(), grow);
        }
    }

    #[test]
    fn test_setting_one_field_leaves_the_others_alone() {
        let mut flags = LabelFlags::new();
        flags.set_align_vertical(AlignVertical::Bottom);
        flags.set_align_horizontal(AlignHorizontal::Center);
        flags.set_grow_horizontal(GrowHorizontal::Both);
        flags.set_grow_vertical(GrowVertical::None);
        flags.set_visible(false);

        flags.set_align_horizontal(AlignHorizontal::Right);

        assert_eq!(flags.align_vertical(), AlignVertical::Bottom);
        assert_eq!(flags.align_horizontal(), AlignHorizontal::Right);
        assert_eq!(flags.grow_horizontal(), GrowHorizontal::Both);
        assert_eq!(flags.grow_vertical(), GrowVertical::None);
        assert!(!flags.is_visible());
    }

    #[test]
    fn test_visibility_bit_toggles_both_ways() {
        let mut flags = LabelFlags::new();

        flags.set_visible(false);
        assert!(!flags.is_visible());

        flags.set_visible(true);
        assert!(flags.is_visible());
    }

    #[test]
    fn test_disposed_bit_is_independent() {
        let mut flags = LabelFlags::new();
        flags.set_grow_vertical(GrowVertical::None);

        flags.set_disposed();

        assert!(flags.is_disposed());
        assert!(flags.is_visible());
        assert_eq!(flags.grow_vertical(), GrowVertical::None);
    }
}
