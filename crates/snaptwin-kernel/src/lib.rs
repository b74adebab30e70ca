//! # snaptwin-kernel: Executable digital twin of one industrial asset
//!
//! The kernel loads an Asset Administration Shell style JSON document once,
//! then answers property queries, re-exports the document, and steps a small
//! simulation of live telemetry.
//!
//! ## Key Principles
//!
//! - **No IO**: Document text arrives already read; exported text is handed back
//! - **All or nothing**: A document either loads completely or not at all
//! - **Immutable model**: The loaded shell never changes
//! - **Reproducible noise**: Simulation randomness comes from a seeded generator
//!
//! ## Architecture
//!
//! - [`parse`]: Document text to [`AssetAdministrationShell`], plus validate-only
//! - [`index`]: First-match lookup by `id_short`
//! - [`simulation`]: Bounded random walk around a nameplate value
//! - [`export`]: Shell back to JSON, and a human-readable summary
//! - [`twin`]: The [`DigitalTwin`] facade tying it all together
//!
//! ## Example
//!
//! ```
//! use snaptwin_kernel::DigitalTwin;
//!
//! let mut twin = DigitalTwin::new(r#"{
//!     "id": "MOTOR-1",
//!     "asset_type": "Siemens 1LE1001",
//!     "nameplate": [
//!         {"id_short": "Voltage", "value": "400", "unit": "V"},
//!         {"id_short": "RPM", "value": "1440", "unit": "1/min"}
//!     ]
//! }"#).expect("valid document");
//!
//! assert_eq!(twin.get_property("Voltage").unwrap(), "400 V");
//! assert!(twin.get_property("Torque").is_err());
//!
//! twin.tick_simulation();
//! twin.reset_simulation();
//! assert_eq!(twin.simulation_value(), 1440.0);
//! ```

pub mod export;
pub mod index;
pub mod parse;
pub mod simulation;
pub mod twin;


pub use index::{PropertyIndex, PropertyNotFound};
pub use parse::{ParseError, parse, validate};
pub use simulation::{
    Reading, SimulationConfig, SimulationEngine, SimulationPhase, format_value,
};
pub use snaptwin_types::{AssetAdministrationShell, AssetId, AssetType, Property};
pub use twin::DigitalTwin;

/// Version of the kernel crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
