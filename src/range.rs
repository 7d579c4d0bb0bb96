//! The numeric domain and geometric extent of a slider, and the conversions between them.

/// A slider's numeric domain. Both endpoints are inclusive. The control maintains `min <= max` by
/// mutually clamping its bounds setters, so a degenerate `min == max` domain is legal and every
/// conversion here guards against it instead of producing NaN or infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
}

/// The pair of geometric positions along the drag axis that correspond to a [`SliderRange`]'s
/// endpoints. Only known once the control's visual representation has been realized; before that,
/// conversions use [`TrackExtent::SENTINEL`] so they stay well-defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackExtent {
    pub start: f32,
    pub end: f32,
}

impl SliderRange {
    pub fn new(min: f32, max: f32) -> Self {
        track_debug_assert!(min <= max, "domain bounds out of order: {} > {}", min, max);
        Self { min, max }
    }

    /// Clamp a plain value to the bounds of this range.
    #[inline]
    pub fn clamp(&self, plain: f32) -> f32 {
        plain.clamp(self.min, self.max)
    }

    /// Whether this range has collapsed to a single value.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Normalize a plain, unnormalized value. Will be clamped to the bounds of the range if the
    /// normalized value exceeds `[0, 1]`. A degenerate range normalizes everything to `0.0`.
    pub fn normalize(&self, plain: f32) -> f32 {
        if self.is_degenerate() {
            return 0.0;
        }

        (self.clamp(plain) - self.min) / (self.max - self.min)
    }

    /// Unnormalize a normalized value. Will be clamped to `[0, 1]` if the plain, unnormalized
    /// value would exceed that range.
    pub fn unnormalize(&self, normalized: f32) -> f32 {
        let normalized = normalized.clamp(0.0, 1.0);
        (normalized * (self.max - self.min)) + self.min
    }
}

impl TrackExtent {
    /// The extent reported before a control has been realized. Chosen to be symmetrical around the
    /// origin so an unrealized thumb sits at `0.0` for a centered value.
    pub const SENTINEL: Self = Self {
        start: -1.0,
        end: 1.0,
    };

    /// Clamp a position to this extent.
    #[inline]
    pub fn clamp(&self, position: f32) -> f32 {
        // The extent is not required to be ordered the way the numeric domain is
        if self.start <= self.end {
            position.clamp(self.start, self.end)
        } else {
            position.clamp(self.end, self.start)
        }
    }

    /// The position at a normalized fraction of this extent. The result is clamped to the extent
    /// to guard against floating point error pushing the thumb past the track.
    pub fn position_at(&self, fraction: f32) -> f32 {
        self.clamp(self.start + fraction * (self.end - self.start))
    }

    /// The inverse of [`position_at()`][Self::position_at()]: the normalized fraction of this
    /// extent that a position lies at. A degenerate extent yields `0.0`.
    pub fn fraction_of(&self, position: f32) -> f32 {
        if self.end == self.start {
            return 0.0;
        }

        (self.clamp(position) - self.start) / (self.end - self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const fn make_range() -> SliderRange {
        SliderRange {
            min: 10.0,
            max: 20.0,
        }
    }

    const fn make_extent() -> TrackExtent {
        TrackExtent {
            start: -4.0,
            end: 4.0,
        }
    }

    #[test]
    fn range_normalize() {
        let range = make_range();
        assert_eq!(range.normalize(17.5), 0.75);
    }

    #[test]
    fn range_normalize_clamps() {
        let range = make_range();
        assert_eq!(range.normalize(25.0), 1.0);
        assert_eq!(range.normalize(-5.0), 0.0);
    }

    #[test]
    fn range_unnormalize() {
        let range = make_range();
        assert_eq!(range.unnormalize(0.25), 12.5);
    }

    #[test]
    fn degenerate_range_has_no_nan() {
        let range = SliderRange { min: 5.0, max: 5.0 };
        assert!(range.is_degenerate());
        assert_eq!(range.normalize(123.0), 0.0);
        assert_eq!(range.unnormalize(0.5), 5.0);
    }

    #[test]
    fn extent_position_at() {
        let extent = make_extent();
        assert_relative_eq!(extent.position_at(0.5), 0.0);
        assert_relative_eq!(extent.position_at(0.75), 2.0);
    }

    #[test]
    fn extent_position_clamps_overshoot() {
        let extent = make_extent();
        assert_eq!(extent.position_at(1.5), 4.0);
        assert_eq!(extent.position_at(-0.5), -4.0);
    }

    #[test]
    fn extent_fraction_round_trip() {
        let extent = make_extent();
        assert_relative_eq!(extent.fraction_of(extent.position_at(0.37)), 0.37);
    }

    #[test]
    fn degenerate_extent_has_no_nan() {
        let extent = TrackExtent {
            start: 2.0,
            end: 2.0,
        };
        assert_eq!(extent.fraction_of(10.0), 0.0);
        assert_eq!(extent.position_at(0.5), 2.0);
    }

    #[test]
    fn sentinel_extent_is_symmetrical() {
        assert_eq!(TrackExtent::SENTINEL.position_at(0.5), 0.0);
    }
}
