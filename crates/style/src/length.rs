//! Lengths in pins (columns) and pin rows.

use crate::error::StyleError;

/// Columns one `em` spans horizontally: one braille cell plus its spacer.
pub const EM_HORIZONTAL_FACTOR: f32 = 3.0;

/// Direction a length is measured in; decides what an `em` is worth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Rows. One `em` is one line-height.
    Vertical,
    /// Columns. One `em` is [`EM_HORIZONTAL_FACTOR`] columns.
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Em,
}

/// A parsed length before resolution against a line-height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub const ZERO: Self = Self::px(0.0);

    #[inline]
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    #[inline]
    pub const fn em(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Em,
        }
    }

    /// Parse a single length token.
    ///
    /// Bare numbers and `px` are pixels, `em` is relative. Any other suffix is stripped down
    /// to its numeric characters (digits, sign, decimal point) and read as pixels.
    ///
    /// # Errors
    /// Returns [`StyleError::InvalidLength`] when nothing numeric is left.
    pub fn parse(raw: &str) -> Result<Self, StyleError> {
        let token = raw.trim();
        if let Some(number) = token.strip_suffix("em")
            && let Ok(value) = number.trim().parse::<f32>()
        {
            return Ok(Self::em(value));
        }
        let number = token.strip_suffix("px").unwrap_or(token).trim();
        if let Ok(value) = number.parse::<f32>() {
            return Ok(Self::px(value));
        }

        let stripped: String = token
            .chars()
            .filter(|&chr| chr.is_ascii_digit() || chr == '-' || chr == '.')
            .collect();
        stripped
            .parse::<f32>()
            .map(Self::px)
            .map_err(|_| StyleError::InvalidLength(raw.to_owned()))
    }

    /// Resolve to whole pins along `axis`. Vertical `em`s scale by `line_height` rows.
    #[inline]
    pub fn resolve(self, axis: Axis, line_height: usize) -> i32 {
        let scaled = match (self.unit, axis) {
            (LengthUnit::Px, _) => self.value,
            (LengthUnit::Em, Axis::Vertical) => self.value * line_height as f32,
            (LengthUnit::Em, Axis::Horizontal) => self.value * EM_HORIZONTAL_FACTOR,
        };
        scaled.round() as i32
    }

    /// Like [`Length::resolve`] but clamped to zero, for insets and sizes.
    #[inline]
    pub fn resolve_unsigned(self, axis: Axis, line_height: usize) -> usize {
        usize::try_from(self.resolve(axis, line_height)).unwrap_or(0)
    }
}
