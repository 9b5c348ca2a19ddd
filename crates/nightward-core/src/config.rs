//! `WorldConfig` — the enumerated configuration table from spec §6.4.
//!
//! Every field has a default matching the spec's table, so `WorldConfig::default()`
//! alone is enough to construct a playable world. The `config` feature adds
//! `from_toml_str` for overriding a subset of fields from a config file, in the
//! style of a settings file with sparse overrides rather than a full replacement.

use crate::error::{CoreError, CoreResult};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadtreeConfig {
    pub max_depth: u8,
    pub max_objects: usize,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self { max_depth: 4, max_objects: 5 }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PursuerSpeeds {
    pub shambler: f32,
    pub runner: f32,
    pub brute: f32,
}

impl Default for PursuerSpeeds {
    fn default() -> Self {
        Self { shambler: 40.0, runner: 90.0, brute: 30.0 }
    }
}

/// The full, flat configuration table consumed by `World::new`.
///
/// Grouped by the component that reads it, matching spec §6.4's layout; the
/// grouping is purely organizational, there is no nested TOML requirement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Upper clamp on `dt` per tick, to avoid huge jumps after a stall.
    pub tick_dt_cap: f32,

    pub static_quadtree: QuadtreeConfig,
    pub dynamic_quadtree: QuadtreeConfig,

    pub player_speed: f32,
    pub follower_speed: f32,
    pub pursuer_speed: PursuerSpeeds,

    /// Follower anchor offset behind the player, in world units.
    pub follow_distance: f32,

    pub activation_r: f32,
    pub detection_r: f32,
    pub attack_r: f32,
    pub range_buffer: f32,

    /// Seconds between attack damage events.
    pub attack_cooldown: f32,

    pub congestion_r: f32,
    pub avoid_duration: f32,

    pub separation_r: f32,
    pub separation_force: f32,
    pub separation_period: u64,

    pub day_duration: f32,
    pub day_phase_fraction: f32,
    pub zombies_per_day: u32,

    pub max_pursuers: usize,
    pub max_followers: usize,

    pub rng_seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tick_dt_cap: 1.0 / 30.0,

            static_quadtree: QuadtreeConfig { max_depth: 4, max_objects: 5 },
            dynamic_quadtree: QuadtreeConfig { max_depth: 6, max_objects: 8 },

            player_speed: 120.0,
            follower_speed: 110.0,
            pursuer_speed: PursuerSpeeds::default(),

            follow_distance: 100.0,

            activation_r: 250.0,
            detection_r: 400.0,
            attack_r: 40.0,
            range_buffer: 10.0,

            attack_cooldown: 1.0,

            congestion_r: 80.0,
            avoid_duration: 0.6,

            separation_r: 60.0,
            separation_force: 200.0,
            separation_period: 60,

            day_duration: 600.0,
            day_phase_fraction: 0.5,
            zombies_per_day: 3,

            max_pursuers: 9_999,
            max_followers: 64,

            rng_seed: 0,
        }
    }
}

#[cfg(feature = "config")]
impl WorldConfig {
    /// Parse a TOML document into a `WorldConfig`, overlaying onto defaults
    /// for any key the document omits.
    pub fn from_toml_str(src: &str) -> CoreResult<Self> {
        toml::from_str(src).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

impl WorldConfig {
    /// Sanity-check fields whose valid range isn't already enforced by type
    /// (e.g. `day_phase_fraction` must be in `[0, 1]`). Called by
    /// `Map::compile`'s caller, not automatically — a config is just data
    /// until someone builds a world from it.
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.day_phase_fraction) {
            return Err(CoreError::ConfigRange {
                field: "day_phase_fraction",
                value: self.day_phase_fraction.to_string(),
            });
        }
        if self.tick_dt_cap <= 0.0 {
            return Err(CoreError::ConfigRange {
                field: "tick_dt_cap",
                value: self.tick_dt_cap.to_string(),
            });
        }
        Ok(())
    }
}
