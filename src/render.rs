use crate::constants::{BLANK, MAX_DIGITS, MINUS};
use crate::position::{digit_offset, Orientation};
use crate::segment::encode;

/// Numeric base used when rendering integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Radix {
    Decimal = 10,
    Hexadecimal = 16,
}

impl Radix {
    pub const fn base(self) -> i32 {
        self as i32
    }
}

/// One digit register write: physical offset from `DIGIT_OFFSET` and its segment data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    pub offset: u8,
    pub segments: u8,
}

/// Segment data for every scanned digit, in logical order (position 1 first).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderedFrame {
    cells: [Cell; MAX_DIGITS as usize],
    len: u8,
}

impl RenderedFrame {
    /// All positions off.
    pub fn blank(digit_count: u8, orientation: Orientation) -> Self {
        let len = digit_count.min(MAX_DIGITS);
        let mut cells = [Cell::default(); MAX_DIGITS as usize];
        for pos in 1..=len {
            cells[(pos - 1) as usize] = Cell {
                offset: digit_offset(pos, len, orientation),
                segments: BLANK,
            };
        }
        Self { cells, len }
    }

    /// Every position shows the overflow bar.
    pub fn overflow(digit_count: u8, orientation: Orientation) -> Self {
        let mut frame = Self::blank(digit_count, orientation);
        for cell in frame.cells_mut() {
            cell.segments = MINUS;
        }
        frame
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells[..self.len as usize]
    }

    /// Segment data in logical order.
    pub fn segments(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells().iter().map(|cell| cell.segments)
    }

    /// Segment data for logical position `pos`, if it is part of the frame.
    pub fn segments_at(&self, pos: u8) -> Option<u8> {
        let index = pos.checked_sub(1)?;
        self.cells().get(index as usize).map(|cell| cell.segments)
    }

    fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells[..self.len as usize]
    }

    fn set(&mut self, pos: u8, segments: u8) {
        self.cells[(pos - 1) as usize].segments = segments;
    }
}

/// Renders `value` right aligned across `digit_count` digits.
///
/// Values outside `-(base^(n-1)), base^n` (exclusive) fill every digit with
/// the overflow bar. Negative values put a minus on logical position 1, and
/// leading zeros are blanked except for a lone `0`.
pub fn render(value: i32, radix: Radix, digit_count: u8, orientation: Orientation) -> RenderedFrame {
    let mut frame = RenderedFrame::blank(digit_count, orientation);
    let count = frame.len;
    if count == 0 {
        return frame;
    }

    let base = radix.base();
    let high = base.pow(count as u32);
    let low = -base.pow(count as u32 - 1);
    if value <= low || value >= high {
        return RenderedFrame::overflow(count, orientation);
    }

    let mut first = 1;
    if value < 0 {
        frame.set(1, MINUS);
        first = 2;
    }

    let base = base as u32;
    let mut magnitude = value.unsigned_abs();
    for pos in (first..=count).rev() {
        if magnitude == 0 && !(value == 0 && pos == count) {
            break;
        }
        frame.set(pos, encode((magnitude % base) as u8));
        magnitude /= base;
    }

    frame
}
