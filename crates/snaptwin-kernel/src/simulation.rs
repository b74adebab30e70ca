//! Discrete-time simulation of one derived telemetry value.
//!
//! The engine emulates sensor noise around a nominal operating point taken
//! from the nameplate (by default the `RPM` property). Each tick moves the
//! live value by a bounded random step with mild pull back toward the seed,
//! then clamps it into `[seed - bound, seed + bound]` where
//! `bound = amplitude * |seed|`. Band limits that would overflow are pinned
//! to the largest finite `f64`, so the live value is always finite.
//!
//! Noise comes from a `ChaCha8Rng` seeded with [`SimulationConfig::noise_seed`],
//! so the same seed value, noise seed and tick count always give the same
//! live value. [`SimulationEngine::reset`] re-seeds the generator, which makes
//! the sequence after a reset identical to the sequence after load.
//!
//! When the nameplate has no usable driving property the engine runs in
//! neutral mode: ticks are counted but the value stays at `0.0`.

use std::fmt::Display;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use snaptwin_types::Property;

/// Nameplate property that seeds the simulation unless configured otherwise.
pub const DEFAULT_DRIVING_PROPERTY: &str = "RPM";

/// Default half-width of the allowed band, as a fraction of the seed (±2%).
pub const DEFAULT_AMPLITUDE: f64 = 0.02;

/// Default noise seed.
pub const DEFAULT_NOISE_SEED: u64 = 0x5EED_0A45;

/// Largest random step per tick, as a fraction of the bound.
const STEP_FRACTION: f64 = 0.25;

/// Fraction of the distance to the seed recovered on each tick.
const MEAN_REVERSION: f64 = 0.1;

/// Value reported in neutral mode.
const NEUTRAL_VALUE: f64 = 0.0;

/// Magnitude from which readings switch to scientific notation.
const SCIENTIFIC_ABOVE: f64 = 1e9;

// ============================================================================
// Configuration
// ============================================================================

/// Tunables for the simulation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// `id_short` of the nameplate property that seeds the simulation.
    pub driving_property: String,
    /// Band half-width as a fraction of the seed. Values outside `[0, 1]`
    /// are clamped; non-finite values fall back to [`DEFAULT_AMPLITUDE`].
    pub amplitude: f64,
    /// Seed for the noise generator.
    pub noise_seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            driving_property: DEFAULT_DRIVING_PROPERTY.to_string(),
            amplitude: DEFAULT_AMPLITUDE,
            noise_seed: DEFAULT_NOISE_SEED,
        }
    }
}

impl SimulationConfig {
    fn effective_amplitude(&self) -> f64 {
        if self.amplitude.is_finite() {
            self.amplitude.clamp(0.0, 1.0)
        } else {
            DEFAULT_AMPLITUDE
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Lifecycle of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationPhase {
    /// Right after construction or reset; the live value equals the seed.
    Seeded,
    /// At least one tick since the last reset.
    Running,
}

/// One tick's output.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Ticks since the last reset, including this one.
    pub tick: u64,
    /// Live value, or `None` in neutral mode.
    pub value: Option<f64>,
    /// Name of the driving property.
    pub label: String,
    /// Unit of the driving property, if it has one.
    pub unit: Option<String>,
}

impl Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Live {}: ", self.label)?;
        match (self.value, self.unit.as_deref()) {
            (Some(value), Some(unit)) => write!(f, "{} {unit}", format_value(value))?,
            (Some(value), None) => write!(f, "{}", format_value(value))?,
            (None, _) => write!(f, "n/a")?,
        }
        write!(f, " (tick: {})", self.tick)
    }
}

/// Renders a live value with two decimals, or in scientific notation when
/// its magnitude is too large for fixed-point to stay readable.
pub fn format_value(value: f64) -> String {
    if value.abs() >= SCIENTIFIC_ABOVE {
        format!("{value:.2e}")
    } else {
        format!("{value:.2}")
    }
}

/// Seed-anchored bounded random walk.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    label: String,
    unit: Option<String>,
    /// `None` in neutral mode. Never changes after construction.
    seed: Option<f64>,
    live: f64,
    /// Inclusive `(low, high)` limits, both finite.
    band: (f64, f64),
    /// Largest random step per tick.
    step: f64,
    noise_seed: u64,
    rng: ChaCha8Rng,
    ticks: u64,
}

impl SimulationEngine {
    /// Creates an engine seeded with `seed_value`.
    ///
    /// A non-finite seed yields a neutral engine.
    pub fn new(seed_value: f64, config: &SimulationConfig) -> Self {
        if !seed_value.is_finite() {
            return Self::neutral(config);
        }

        // amplitude <= 1, so bound <= |seed| and stays finite
        let bound = config.effective_amplitude() * seed_value.abs();
        let band = (
            (seed_value - bound).max(f64::MIN),
            (seed_value + bound).min(f64::MAX),
        );

        // Postcondition: finite band around the seed
        debug_assert!(band.0.is_finite() && band.1.is_finite());
        debug_assert!(band.0 <= seed_value && seed_value <= band.1);

        Self {
            label: config.driving_property.clone(),
            unit: None,
            seed: Some(seed_value),
            live: seed_value,
            band,
            step: bound * STEP_FRACTION,
            noise_seed: config.noise_seed,
            rng: ChaCha8Rng::seed_from_u64(config.noise_seed),
            ticks: 0,
        }
    }

    /// Creates an engine that only counts ticks.
    pub fn neutral(config: &SimulationConfig) -> Self {
        Self {
            label: config.driving_property.clone(),
            unit: None,
            seed: None,
            live: NEUTRAL_VALUE,
            band: (NEUTRAL_VALUE, NEUTRAL_VALUE),
            step: 0.0,
            noise_seed: config.noise_seed,
            rng: ChaCha8Rng::seed_from_u64(config.noise_seed),
            ticks: 0,
        }
    }

    /// Seeds the engine from the first nameplate property named
    /// `config.driving_property`.
    ///
    /// Falls back to neutral mode when the property is absent or its value
    /// is not a finite number. Never fails.
    pub fn from_nameplate(nameplate: &[Property], config: &SimulationConfig) -> Self {
        let Some(prop) = nameplate
            .iter()
            .find(|prop| prop.id_short == config.driving_property)
        else {
            tracing::debug!(
                driving_property = %config.driving_property,
                "no driving property, simulation is neutral"
            );
            return Self::neutral(config);
        };

        match prop.value.trim().parse::<f64>() {
            Ok(seed) if seed.is_finite() => {
                let mut engine = Self::new(seed, config);
                engine.unit = prop.unit().map(str::to_string);
                engine
            }
            _ => {
                tracing::warn!(
                    driving_property = %config.driving_property,
                    value = %prop.value,
                    "driving property is not numeric, simulation is neutral"
                );
                let mut engine = Self::neutral(config);
                engine.unit = prop.unit().map(str::to_string);
                engine
            }
        }
    }

    /// Advances one step and returns the new reading.
    pub fn tick(&mut self) -> Reading {
        self.ticks = self.ticks.saturating_add(1);

        if let Some(seed) = self.seed {
            let (low, high) = self.band;
            let noise = if self.step > 0.0 {
                self.rng.gen_range(-self.step..=self.step)
            } else {
                0.0
            };
            // |seed - live| <= bound, so both terms are finite. Their sum
            // with live may overflow to +-inf, which the clamp pulls back.
            let reversion = MEAN_REVERSION * (seed - self.live);
            self.live = (self.live + (noise + reversion)).clamp(low, high);

            // Invariant: live value stays finite and inside the band
            debug_assert!(
                self.live.is_finite() && self.live >= low && self.live <= high,
                "live value {} escaped band [{low}, {high}]",
                self.live
            );
        }

        tracing::trace!(tick = self.ticks, live = self.live, "simulation tick");

        Reading {
            tick: self.ticks,
            value: self.seed.map(|_| self.live),
            label: self.label.clone(),
            unit: self.unit.clone(),
        }
    }

    /// Restores the live value to the seed and restarts the noise sequence.
    pub fn reset(&mut self) {
        self.live = self.seed.unwrap_or(NEUTRAL_VALUE);
        self.ticks = 0;
        self.rng = ChaCha8Rng::seed_from_u64(self.noise_seed);

        // Postcondition: back in the seeded phase
        debug_assert_eq!(self.phase(), SimulationPhase::Seeded);
    }

    pub fn phase(&self) -> SimulationPhase {
        if self.ticks == 0 {
            SimulationPhase::Seeded
        } else {
            SimulationPhase::Running
        }
    }

    /// Current live value (`0.0` in neutral mode).
    pub fn live_value(&self) -> f64 {
        self.live
    }

    /// The value the engine was seeded with, or `None` in neutral mode.
    pub fn seed(&self) -> Option<f64> {
        self.seed
    }

    /// Inclusive band the live value is confined to.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.seed.map(|_| self.band)
    }

    /// Ticks since the last reset.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn is_neutral(&self) -> bool {
        self.seed.is_none()
    }

    /// Name of the driving property.
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rpm_nameplate(value: &str) -> Vec<Property> {
        vec![
            Property::new("Voltage", "400").with_unit("V"),
            Property::new("RPM", value).with_unit("1/min"),
        ]
    }

    #[test]
    fn starts_seeded_at_seed_value() {
        let engine =
            SimulationEngine::from_nameplate(&rpm_nameplate("1440"), &SimulationConfig::default());
        assert_eq!(engine.phase(), SimulationPhase::Seeded);
        assert_eq!(engine.seed(), Some(1440.0));
        assert!((engine.live_value() - 1440.0).abs() < f64::EPSILON);
        assert_eq!(engine.tick_count(), 0);
    }

    #[test]
    fn tick_moves_to_running() {
        let mut engine = SimulationEngine::new(1440.0, &SimulationConfig::default());
        let reading = engine.tick();
        assert_eq!(reading.tick, 1);
        assert_eq!(engine.phase(), SimulationPhase::Running);
    }

    #[test]
    fn stays_within_band() {
        let mut engine = SimulationEngine::new(1440.0, &SimulationConfig::default());
        let (low, high) = engine.bounds().expect("seeded");
        assert!((high - low - 2.0 * 1440.0 * DEFAULT_AMPLITUDE).abs() < 1e-9);

        for _ in 0..10_000 {
            let value = engine.tick().value.expect("seeded engine reports a value");
            assert!(value >= low && value <= high, "{value} outside [{low}, {high}]");
        }
    }

    #[test]
    fn same_noise_seed_same_sequence() {
        let config = SimulationConfig::default();
        let mut a = SimulationEngine::new(1440.0, &config);
        let mut b = SimulationEngine::new(1440.0, &config);

        for _ in 0..50 {
            assert_eq!(a.tick(), b.tick());
        }
    }

    #[test]
    fn different_noise_seed_different_sequence() {
        let mut a = SimulationEngine::new(1440.0, &SimulationConfig::default());
        let mut b = SimulationEngine::new(
            1440.0,
            &SimulationConfig {
                noise_seed: 7,
                ..Default::default()
            },
        );

        let a_values: Vec<_> = (0..20).map(|_| a.tick().value).collect();
        let b_values: Vec<_> = (0..20).map(|_| b.tick().value).collect();
        assert_ne!(a_values, b_values);
    }

    #[test]
    fn reset_restores_seed_and_replays_sequence() {
        let mut engine = SimulationEngine::new(1440.0, &SimulationConfig::default());
        let first: Vec<_> = (0..25).map(|_| engine.tick().value).collect();

        engine.reset();
        assert_eq!(engine.phase(), SimulationPhase::Seeded);
        assert_eq!(engine.live_value().to_bits(), 1440.0_f64.to_bits());
        assert_eq!(engine.tick_count(), 0);

        let second: Vec<_> = (0..25).map(|_| engine.tick().value).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_driving_property_is_neutral() {
        let nameplate = vec![Property::new("Voltage", "400").with_unit("V")];
        let mut engine =
            SimulationEngine::from_nameplate(&nameplate, &SimulationConfig::default());

        assert!(engine.is_neutral());
        let reading = engine.tick();
        assert_eq!(reading.value, None);
        assert_eq!(reading.to_string(), "Live RPM: n/a (tick: 1)");
        assert!((engine.live_value() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_numeric_driving_property_is_neutral() {
        let mut engine = SimulationEngine::from_nameplate(
            &rpm_nameplate("approx. 1440"),
            &SimulationConfig::default(),
        );
        assert!(engine.is_neutral());
        assert_eq!(engine.tick().to_string(), "Live RPM: n/a (tick: 1)");
    }

    #[test]
    fn infinite_seed_is_neutral() {
        let engine = SimulationEngine::new(f64::INFINITY, &SimulationConfig::default());
        assert!(engine.is_neutral());
        assert_eq!(engine.bounds(), None);
    }

    #[test]
    fn zero_amplitude_holds_the_seed() {
        let config = SimulationConfig {
            amplitude: 0.0,
            ..Default::default()
        };
        let mut engine = SimulationEngine::new(50.0, &config);
        for _ in 0..10 {
            assert_eq!(engine.tick().value, Some(50.0));
        }
    }

    #[test]
    fn out_of_range_amplitude_is_clamped() {
        let config = SimulationConfig {
            amplitude: 5.0,
            ..Default::default()
        };
        let engine = SimulationEngine::new(100.0, &config);
        assert_eq!(engine.bounds(), Some((0.0, 200.0)));

        let nan = SimulationConfig {
            amplitude: f64::NAN,
            ..Default::default()
        };
        let engine = SimulationEngine::new(100.0, &nan);
        assert_eq!(engine.bounds(), Some((98.0, 102.0)));
    }

    #[test]
    fn negative_seed_band_is_symmetric() {
        let engine = SimulationEngine::new(-200.0, &SimulationConfig::default());
        assert_eq!(engine.bounds(), Some((-204.0, -196.0)));
    }

    #[test]
    fn extreme_seeds_stay_finite() {
        for seed in [1.79e308, f64::MAX, -f64::MAX, f64::MIN_POSITIVE] {
            for amplitude in [DEFAULT_AMPLITUDE, 0.5, 1.0] {
                let config = SimulationConfig {
                    amplitude,
                    ..Default::default()
                };
                let mut engine = SimulationEngine::new(seed, &config);
                let (low, high) = engine.bounds().expect("finite seed");
                assert!(low.is_finite() && high.is_finite(), "[{low}, {high}]");

                for _ in 0..2_000 {
                    let value = engine.tick().value.expect("seeded");
                    assert!(
                        value.is_finite() && value >= low && value <= high,
                        "seed {seed} amplitude {amplitude}: {value} outside [{low}, {high}]"
                    );
                }

                engine.reset();
                assert_eq!(engine.live_value().to_bits(), seed.to_bits());
            }
        }
    }

    #[test]
    fn full_amplitude_band_is_pinned_at_max() {
        let config = SimulationConfig {
            amplitude: 1.0,
            ..Default::default()
        };
        let engine = SimulationEngine::new(f64::MAX, &config);
        assert_eq!(engine.bounds(), Some((0.0, f64::MAX)));
    }

    #[test]
    fn huge_readings_use_scientific_notation() {
        let mut engine = SimulationEngine::from_nameplate(
            &rpm_nameplate("1.79e308"),
            &SimulationConfig::default(),
        );
        let text = engine.tick().to_string();
        assert!(text.contains("e308 1/min (tick: 1)"), "{text}");
        assert!(text.len() < 40, "{text}");

        assert_eq!(format_value(1440.0), "1440.00");
        assert_eq!(format_value(-2.5e12), "-2.50e12");
    }

    #[test]
    fn reading_includes_unit() {
        let mut engine =
            SimulationEngine::from_nameplate(&rpm_nameplate("1440"), &SimulationConfig::default());
        let text = engine.tick().to_string();
        assert!(text.starts_with("Live RPM: "), "{text}");
        assert!(text.contains(" 1/min (tick: 1)"), "{text}");
    }

    #[test]
    fn custom_driving_property() {
        let nameplate = vec![Property::new("FlowRate", "12.5").with_unit("m3/h")];
        let config = SimulationConfig {
            driving_property: "FlowRate".to_string(),
            ..Default::default()
        };
        let engine = SimulationEngine::from_nameplate(&nameplate, &config);
        assert_eq!(engine.seed(), Some(12.5));
        assert_eq!(engine.label(), "FlowRate");
    }
}
