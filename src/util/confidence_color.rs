//! Per-point confidence → ribbon color mapping.
//!
//! Confidence is an illustrative pLDDT-like score in roughly [40, 100].
//! It is mapped onto four discrete bands, highest first:
//!
//! | band      | threshold | color     |
//! |-----------|-----------|-----------|
//! | VeryHigh  | > 90      | dark blue |
//! | Confident | > 70      | light blue|
//! | Low       | > 50      | yellow    |
//! | VeryLow   | otherwise | orange    |

use super::color::Rgba;

/// Discrete confidence band used for coloring and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceBand {
    /// Confidence above 90.
    VeryHigh,
    /// Confidence above 70.
    Confident,
    /// Confidence above 50.
    Low,
    /// Everything else.
    VeryLow,
}

impl ConfidenceBand {
    /// All bands, highest confidence first (legend order).
    pub const ALL: [Self; 4] =
        [Self::VeryHigh, Self::Confident, Self::Low, Self::VeryLow];

    /// Classify a confidence value.
    #[must_use]
    pub fn classify(confidence: f32) -> Self {
        if confidence > 90.0 {
            Self::VeryHigh
        } else if confidence > 70.0 {
            Self::Confident
        } else if confidence > 50.0 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    /// Ribbon color for this band.
    #[must_use]
    pub const fn color(self) -> Rgba {
        match self {
            Self::VeryHigh => Rgba::hex(0x0053d6),
            Self::Confident => Rgba::hex(0x65cbf3),
            Self::Low => Rgba::hex(0xffdb13),
            Self::VeryLow => Rgba::hex(0xff7d45),
        }
    }

    /// Legend caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High (>90)",
            Self::Confident => "Confident (70-90)",
            Self::Low => "Low (50-70)",
            Self::VeryLow => "Very Low (<50)",
        }
    }
}

/// Color for a raw confidence value.
#[must_use]
pub fn confidence_color(confidence: f32) -> Rgba {
    ConfidenceBand::classify(confidence).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(ConfidenceBand::classify(90.0), ConfidenceBand::Confident);
        assert_eq!(ConfidenceBand::classify(90.01), ConfidenceBand::VeryHigh);
        assert_eq!(ConfidenceBand::classify(70.0), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::classify(50.0), ConfidenceBand::VeryLow);
        assert_eq!(ConfidenceBand::classify(12.0), ConfidenceBand::VeryLow);
    }

    #[test]
    fn bands_have_distinct_colors() {
        let colors: Vec<Rgba> =
            ConfidenceBand::ALL.iter().map(|b| b.color()).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(confidence_color(95.0), Rgba::hex(0x0053d6));
    }
}
