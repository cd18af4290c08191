//! Five-star rating display.

/// Number of stars in a rating.
pub const MAX_STARS: u8 = 5;

/// A rating split into full, half and empty stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Split a 0–5 rating; a fractional part of at least 0.5 becomes a half star.
    ///
    /// Out-of-range and NaN ratings are clamped into 0–5.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, f64::from(MAX_STARS))
        };
        let full = rating.floor() as u8;
        let half = full < MAX_STARS && rating - f64::from(full) >= 0.5;
        let empty = MAX_STARS - full - u8::from(half);

        Self { full, half, empty }
    }

    /// Text rendering, e.g. "★★★★½".
    #[must_use]
    pub fn glyphs(&self) -> String {
        let mut out = "★".repeat(usize::from(self.full));
        if self.half {
            out.push('½');
        }
        out.push_str(&"☆".repeat(usize::from(self.empty)));
        out
    }
}
