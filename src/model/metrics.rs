// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock SOC metrics backing the dashboard section.
//!
//! Everything here is a static literal; the dashboard is a demonstration,
//! not a data pipeline.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One hour of simulated SOC activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreatSample {
    pub hour: u32,
    pub detected: u32,
    pub blocked: u32,
    /// Mean time-to-respond for that hour, in minutes.
    pub response_min: f32,
}

/// A headline number shown as an animated counter tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: f64,
    pub suffix: &'static str,
    pub decimals: usize,
}

pub const STAT_TILES: [StatTile; 4] = [
    StatTile {
        label: "Intrusions blocked this year",
        value: 12_847.0,
        suffix: "+",
        decimals: 0,
    },
    StatTile {
        label: "Mean response time (minutes)",
        value: 4.2,
        suffix: "",
        decimals: 1,
    },
    StatTile {
        label: "Incident resolution rate",
        value: 99.7,
        suffix: "%",
        decimals: 1,
    },
    StatTile {
        label: "Endpoints under watch",
        value: 52_000.0,
        suffix: "+",
        decimals: 0,
    },
];

/// 24 hours of simulated detections, shaped like a real diurnal curve:
/// quiet overnight, a ramp through business hours, a spike in the evening.
pub static THREAT_SERIES: Lazy<Vec<ThreatSample>> = Lazy::new(|| {
    let detected = [
        42, 38, 31, 27, 25, 29, 44, 68, 95, 121, 138, 150, 147, 152, 161, 158, 149, 155, 171,
        186, 164, 127, 88, 57,
    ];
    let response_min = [
        3.1, 3.0, 2.8, 2.7, 2.9, 3.2, 3.8, 4.4, 4.9, 5.1, 5.3, 5.6, 5.4, 5.2, 5.5, 5.3, 5.0,
        5.2, 5.8, 6.1, 5.4, 4.6, 3.9, 3.4,
    ];
    detected
        .iter()
        .zip(response_min.iter())
        .enumerate()
        .map(|(hour, (&detected, &response_min))| ThreatSample {
            hour: hour as u32,
            detected,
            // A handful of detections per hour are benign and only logged.
            blocked: detected - detected / 20,
            response_min,
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_covers_a_full_day() {
        assert_eq!(THREAT_SERIES.len(), 24);
        for (i, sample) in THREAT_SERIES.iter().enumerate() {
            assert_eq!(sample.hour, i as u32);
            assert!(sample.blocked <= sample.detected);
        }
    }

    #[test]
    fn samples_round_trip_through_json() {
        let json = serde_json::to_string(&*THREAT_SERIES).unwrap();
        let back: Vec<ThreatSample> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, *THREAT_SERIES);
    }
}
