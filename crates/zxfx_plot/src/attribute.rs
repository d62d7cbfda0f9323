//! Colour attributes for 8×8 character cells
//!
//! One byte per cell: ink in bits 0-2, paper in bits 3-5, then BRIGHT and
//! FLASH. Set pixels take the ink colour, clear pixels the paper colour.

use bitflags::bitflags;
use serde::{Serialize, Deserialize};

/// The eight base colours, in palette order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Colour {
    Black = 0,
    Blue = 1,
    Red = 2,
    Magenta = 3,
    Green = 4,
    Cyan = 5,
    Yellow = 6,
    White = 7,
}

impl Colour {
    const ALL: [Colour; 8] = [
        Colour::Black,
        Colour::Blue,
        Colour::Red,
        Colour::Magenta,
        Colour::Green,
        Colour::Cyan,
        Colour::Yellow,
        Colour::White,
    ];

    /// Colour for the low three bits of `bits`
    pub fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0x07) as usize]
    }

    /// RGB value; bright colours use full intensity
    pub fn rgb(self, bright: bool) -> [u8; 3] {
        let on = if bright { 0xFF } else { 0xD7 };
        let bits = self as u8;
        [
            if bits & 0x02 != 0 { on } else { 0 },
            if bits & 0x04 != 0 { on } else { 0 },
            if bits & 0x01 != 0 { on } else { 0 },
        ]
    }
}

bitflags! {
    /// Attribute byte of one character cell
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Attribute: u8 {
        const INK = 0b0000_0111;
        const PAPER = 0b0011_1000;
        const BRIGHT = 1 << 6;
        const FLASH = 1 << 7;
    }
}

impl Default for Attribute {
    /// White ink on black paper
    fn default() -> Self {
        Self::new(Colour::White, Colour::Black)
    }
}

impl Attribute {
    /// Create an attribute from ink and paper colours
    pub fn new(ink: Colour, paper: Colour) -> Self {
        Self::from_bits_retain(ink as u8 | (paper as u8) << 3)
    }

    /// Same colours with BRIGHT set
    pub fn with_bright(self) -> Self {
        self | Self::BRIGHT
    }

    pub fn ink(self) -> Colour {
        Colour::from_bits(self.bits())
    }

    pub fn paper(self) -> Colour {
        Colour::from_bits(self.bits() >> 3)
    }

    pub fn is_bright(self) -> bool {
        self.contains(Self::BRIGHT)
    }

    /// RGB for a pixel in this cell
    pub fn rgb(self, pixel_set: bool) -> [u8; 3] {
        let colour = if pixel_set { self.ink() } else { self.paper() };
        colour.rgb(self.is_bright())
    }
}
