//! # snaptwin-types: Document model for `snaptwin`
//!
//! This crate contains the plain data types that describe one physical asset:
//! - Asset identity ([`AssetId`], [`AssetType`])
//! - Nameplate properties ([`Property`])
//! - The whole document ([`AssetAdministrationShell`])
//!
//! The types carry no behavior beyond construction and rendering. Parsing,
//! validation, lookup and simulation live in `snaptwin-kernel`.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

// ============================================================================
// Asset Identity
// ============================================================================

/// Unique identifier of a physical asset (serial number or model code).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AssetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<AssetId> for String {
    fn from(value: AssetId) -> Self {
        value.0
    }
}

/// Human-readable asset classifier, manufacturer and model combined
/// (e.g. `"Siemens 1LE1001"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetType(String);

impl AssetType {
    pub fn new(asset_type: impl Into<String>) -> Self {
        Self(asset_type.into())
    }

    /// Joins a manufacturer and a model name with a single space.
    ///
    /// Blank parts are skipped, so a missing manufacturer yields just the
    /// model. Returns `None` when both parts are blank.
    ///
    /// # Examples
    ///
    /// ```
    /// # use snaptwin_types::AssetType;
    /// let t = AssetType::from_parts(Some("Siemens"), Some("1LE1001")).unwrap();
    /// assert_eq!(t.as_str(), "Siemens 1LE1001");
    /// assert_eq!(AssetType::from_parts(None, Some(" ")), None);
    /// ```
    pub fn from_parts(manufacturer: Option<&str>, model: Option<&str>) -> Option<Self> {
        let joined = [manufacturer, model]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            None
        } else {
            Some(Self(joined))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AssetType {
    fn from(asset_type: String) -> Self {
        Self(asset_type)
    }
}

impl From<&str> for AssetType {
    fn from(asset_type: &str) -> Self {
        Self(asset_type.to_string())
    }
}

impl From<AssetType> for String {
    fn from(value: AssetType) -> Self {
        value.0
    }
}

// ============================================================================
// Nameplate Properties
// ============================================================================

/// One nameplate attribute.
///
/// `value` is kept as text exactly as it appeared in the source document.
/// Numeric values are never coerced, so `"7.50"` stays `"7.50"` on export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id_short: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Property {
    pub fn new(id_short: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            value: value.into(),
            unit: None,
        }
    }

    /// Attaches a unit to the property.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Returns the unit, treating an empty unit string as no unit.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref().filter(|unit| !unit.is_empty())
    }

    /// Renders the property as `"value unit"`, or just `"value"` when it has
    /// no unit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use snaptwin_types::Property;
    /// assert_eq!(Property::new("Voltage", "400").with_unit("V").render(), "400 V");
    /// assert_eq!(Property::new("IPRating", "IP55").render(), "IP55");
    /// ```
    pub fn render(&self) -> String {
        match self.unit() {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.clone(),
        }
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id_short, self.render())
    }
}

// ============================================================================
// Asset Administration Shell
// ============================================================================

/// The document model: identity plus the ordered nameplate.
///
/// Property order is the source document's order and is preserved on export.
/// Duplicate `id_short` values are allowed here; lookups return the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAdministrationShell {
    pub id: AssetId,
    pub asset_type: AssetType,
    pub nameplate: Vec<Property>,
}

impl AssetAdministrationShell {
    pub fn new(id: impl Into<AssetId>, asset_type: impl Into<AssetType>) -> Self {
        Self {
            id: id.into(),
            asset_type: asset_type.into(),
            nameplate: Vec::new(),
        }
    }

    /// Appends a property to the nameplate.
    pub fn with_property(mut self, property: Property) -> Self {
        self.nameplate.push(property);
        self
    }

    /// Returns the number of nameplate properties.
    pub fn property_count(&self) -> usize {
        self.nameplate.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_unit_has_no_trailing_space() {
        let prop = Property::new("SerialNumber", "A1234");
        assert_eq!(prop.render(), "A1234");
    }

    #[test]
    fn empty_unit_renders_like_no_unit() {
        let prop = Property::new("PowerFactor", "0.82").with_unit("");
        assert_eq!(prop.unit(), None);
        assert_eq!(prop.render(), "0.82");
        // The empty unit is still kept for round-trip fidelity.
        assert_eq!(prop.unit.as_deref(), Some(""));
    }

    #[test]
    fn property_display_includes_name() {
        let prop = Property::new("RPM", "1440").with_unit("1/min");
        assert_eq!(prop.to_string(), "RPM: 1440 1/min");
    }

    #[test]
    fn asset_type_from_parts_trims_and_skips_blanks() {
        assert_eq!(
            AssetType::from_parts(Some("  ABB "), None),
            Some(AssetType::from("ABB"))
        );
        assert_eq!(
            AssetType::from_parts(Some(""), Some("M3BP")),
            Some(AssetType::from("M3BP"))
        );
        assert_eq!(AssetType::from_parts(None, None), None);
    }

    #[test]
    fn shell_serializes_in_document_field_order() {
        let shell = AssetAdministrationShell::new("MOTOR-1", "Siemens 1LE1001")
            .with_property(Property::new("Voltage", "400").with_unit("V"))
            .with_property(Property::new("IPRating", "IP55"));

        let json = serde_json::to_string(&shell).expect("serialize");
        assert_eq!(
            json,
            r#"{"id":"MOTOR-1","asset_type":"Siemens 1LE1001","nameplate":[{"id_short":"Voltage","value":"400","unit":"V"},{"id_short":"IPRating","value":"IP55"}]}"#
        );
    }

    #[test]
    fn missing_unit_deserializes_as_none() {
        let prop: Property =
            serde_json::from_str(r#"{"id_short":"IPRating","value":"IP55"}"#).expect("parse");
        assert_eq!(prop.unit, None);
    }
}
