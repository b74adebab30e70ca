//! The digital twin: one loaded shell plus its simulation.
//!
//! [`DigitalTwin`] is the only object a host needs. It owns its shell and
//! simulation engine exclusively; separate twins share nothing and can live
//! side by side in one process. The shell is never mutated after load.

use snaptwin_types::{AssetAdministrationShell, Property};

use crate::export;
use crate::index::{PropertyIndex, PropertyNotFound};
use crate::parse::{ParseError, parse};
use crate::simulation::{Reading, SimulationConfig, SimulationEngine};

/// An executable, queryable twin of one physical asset.
#[derive(Debug, Clone)]
pub struct DigitalTwin {
    shell: AssetAdministrationShell,
    index: PropertyIndex,
    simulation: SimulationEngine,
}

impl DigitalTwin {
    /// Loads a twin from a configuration document with the default
    /// simulation settings.
    pub fn new(document: &str) -> Result<Self, ParseError> {
        Self::with_simulation(document, SimulationConfig::default())
    }

    /// Loads a twin from a configuration document.
    ///
    /// Fails only when the document is rejected; a missing or non-numeric
    /// driving property leaves the simulation neutral instead.
    pub fn with_simulation(document: &str, config: SimulationConfig) -> Result<Self, ParseError> {
        let shell = parse(document)?;
        Ok(Self::from_shell(shell, config))
    }

    /// Wraps an already parsed shell.
    pub fn from_shell(shell: AssetAdministrationShell, config: SimulationConfig) -> Self {
        let index = PropertyIndex::build(&shell.nameplate);
        let simulation = SimulationEngine::from_nameplate(&shell.nameplate, &config);

        if index.has_duplicates() {
            tracing::warn!(
                id = %shell.id,
                properties = shell.property_count(),
                distinct = index.distinct_len(),
                "nameplate has duplicate id_short values, lookups return the first"
            );
        }
        tracing::debug!(
            id = %shell.id,
            asset_type = %shell.asset_type,
            properties = shell.property_count(),
            neutral = simulation.is_neutral(),
            "twin loaded"
        );

        Self {
            shell,
            index,
            simulation,
        }
    }

    // ========================================================================
    // Identity
    // ========================================================================

    pub fn get_id(&self) -> String {
        self.shell.id.to_string()
    }

    pub fn get_asset_type(&self) -> String {
        self.shell.asset_type.to_string()
    }

    /// The loaded document model.
    pub fn shell(&self) -> &AssetAdministrationShell {
        &self.shell
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Returns the first property named `name`.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.index.lookup(&self.shell.nameplate, name)
    }

    /// Renders the first property named `name` as `"value unit"` or `"value"`.
    pub fn get_property(&self, name: &str) -> Result<String, PropertyNotFound> {
        self.property(name)
            .map(Property::render)
            .ok_or_else(|| PropertyNotFound::new(name))
    }

    /// All property names in nameplate order.
    pub fn list_properties(&self) -> Vec<String> {
        PropertyIndex::names(&self.shell.nameplate)
    }

    // ========================================================================
    // Export
    // ========================================================================

    pub fn get_summary(&self) -> String {
        export::summary(&self.shell)
    }

    /// The loaded shell as pretty-printed AAS JSON.
    pub fn get_aas_json(&self) -> String {
        export::export(&self.shell)
    }

    /// The loaded shell as single-line AAS JSON.
    pub fn get_aas_json_compact(&self) -> String {
        export::export_compact(&self.shell)
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Advances the simulation one step and describes the new value.
    pub fn tick_simulation(&mut self) -> String {
        self.tick().to_string()
    }

    /// Advances the simulation one step.
    pub fn tick(&mut self) -> Reading {
        self.simulation.tick()
    }

    /// Returns the simulation to its seed. The shell is untouched.
    pub fn reset_simulation(&mut self) {
        self.simulation.reset();
    }

    pub fn simulation_value(&self) -> f64 {
        self.simulation.live_value()
    }

    pub fn simulation_seed(&self) -> Option<f64> {
        self.simulation.seed()
    }

    pub fn tick_count(&self) -> u64 {
        self.simulation.tick_count()
    }

    pub fn simulation(&self) -> &SimulationEngine {
        &self.simulation
    }
}
