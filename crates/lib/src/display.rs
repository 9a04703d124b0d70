//! # Display Thresholds
//!
//! Presentation-only severity tiers. The severity ring and the category bars
//! carry two independently configured threshold pairs: the ring breaks at
//! 0.3/0.6 while the bars break at 0.4/0.7 (matching the recommendation
//! mapping). These are separate display policies and must not be unified.

use crate::policy::{ALLOW_BELOW, FLAG_BELOW};
use crate::types::Recommendation;

/// A display color tier with its pinned hex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    Emerald,
    Amber,
    Rose,
}

impl SeverityTier {
    pub fn hex(&self) -> &'static str {
        match self {
            SeverityTier::Emerald => "#10b981",
            SeverityTier::Amber => "#fbbf24",
            SeverityTier::Rose => "#f43f5e",
        }
    }
}

/// A two-threshold scale mapping a score to a tier: emerald at or below the
/// first break, amber at or below the second, rose above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityScale {
    pub amber_above: f64,
    pub rose_above: f64,
}

impl SeverityScale {
    pub fn tier(&self, score: f64) -> SeverityTier {
        if score > self.rose_above {
            SeverityTier::Rose
        } else if score > self.amber_above {
            SeverityTier::Amber
        } else {
            SeverityTier::Emerald
        }
    }
}

/// Scale for the overall severity ring.
pub const RING_SCALE: SeverityScale = SeverityScale {
    amber_above: 0.3,
    rose_above: 0.6,
};

/// Scale for the per-category bars; deliberately aligned with the
/// recommendation thresholds, unlike the ring.
pub const BAR_SCALE: SeverityScale = SeverityScale {
    amber_above: ALLOW_BELOW,
    rose_above: FLAG_BELOW,
};

/// Formats an overall score as the ring's whole-number percent label.
pub fn percent_label(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

/// The verdict badge: a label and a tier per recommendation.
pub fn badge(recommendation: Recommendation) -> (&'static str, SeverityTier) {
    match recommendation {
        Recommendation::Allow => ("Safe Content", SeverityTier::Emerald),
        Recommendation::Flag => ("Review Required", SeverityTier::Amber),
        Recommendation::Block => ("Policy Violation", SeverityTier::Rose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_tier_boundaries() {
        assert_eq!(RING_SCALE.tier(0.0), SeverityTier::Emerald);
        assert_eq!(RING_SCALE.tier(0.3), SeverityTier::Emerald);
        assert_eq!(RING_SCALE.tier(0.31), SeverityTier::Amber);
        assert_eq!(RING_SCALE.tier(0.6), SeverityTier::Amber);
        assert_eq!(RING_SCALE.tier(0.61), SeverityTier::Rose);
        assert_eq!(RING_SCALE.tier(1.0), SeverityTier::Rose);
    }

    #[test]
    fn bar_tier_boundaries() {
        assert_eq!(BAR_SCALE.tier(0.4), SeverityTier::Emerald);
        assert_eq!(BAR_SCALE.tier(0.41), SeverityTier::Amber);
        assert_eq!(BAR_SCALE.tier(0.7), SeverityTier::Amber);
        assert_eq!(BAR_SCALE.tier(0.71), SeverityTier::Rose);
    }

    #[test]
    fn ring_and_bar_scales_stay_distinct() {
        // 0.35 sits between the two first breaks: amber on the ring, still
        // emerald on the bars.
        assert_eq!(RING_SCALE.tier(0.35), SeverityTier::Amber);
        assert_eq!(BAR_SCALE.tier(0.35), SeverityTier::Emerald);
    }

    #[test]
    fn tier_hex_colors() {
        assert_eq!(SeverityTier::Emerald.hex(), "#10b981");
        assert_eq!(SeverityTier::Amber.hex(), "#fbbf24");
        assert_eq!(SeverityTier::Rose.hex(), "#f43f5e");
    }

    #[test]
    fn percent_label_rounds_to_whole_number() {
        assert_eq!(percent_label(0.55), "55%");
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(1.0), "100%");
    }

    #[test]
    fn flag_verdict_renders_amber_ring_and_review_badge() {
        // 0.55 overall: amber ring at "55%", Review Required badge.
        assert_eq!(RING_SCALE.tier(0.55), SeverityTier::Amber);
        assert_eq!(percent_label(0.55), "55%");
        assert_eq!(badge(Recommendation::Flag).0, "Review Required");
    }

    #[test]
    fn badge_labels() {
        assert_eq!(
            badge(Recommendation::Flag),
            ("Review Required", SeverityTier::Amber)
        );
        assert_eq!(
            badge(Recommendation::Allow),
            ("Safe Content", SeverityTier::Emerald)
        );
        assert_eq!(
            badge(Recommendation::Block),
            ("Policy Violation", SeverityTier::Rose)
        );
    }
}
