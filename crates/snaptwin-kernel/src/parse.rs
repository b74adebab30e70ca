//! Parsing and validation of AAS configuration documents.
//!
//! The upstream generator is not trusted: every document goes through
//! [`parse`], which either returns a fully populated
//! [`AssetAdministrationShell`] or a [`ParseError`]. There is no partially
//! loaded shell.
//!
//! Parsing happens in two passes. `serde_json` first turns the text into a
//! [`Value`] tree (syntax errors surface here), then the tree is walked field
//! by field so that missing and mistyped fields can be reported by name.

use serde_json::{Map, Value};
use snaptwin_types::{AssetAdministrationShell, AssetId, AssetType, Property};

/// Nameplate property the asset type is derived from when `asset_type` is absent.
pub const MANUFACTURER_PROPERTY: &str = "Manufacturer";

/// Nameplate property holding the model name, paired with [`MANUFACTURER_PROPERTY`].
pub const MODEL_PROPERTY: &str = "ModelNumber";

/// Errors that reject a configuration document.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed document: {0}")]
    Syntax(String),

    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("field '{field}' must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },
}

/// Parses a configuration document into a shell.
///
/// Field values are kept verbatim; no numeric coercion is performed.
pub fn parse(document: &str) -> Result<AssetAdministrationShell, ParseError> {
    let root: Value =
        serde_json::from_str(document).map_err(|e| ParseError::Syntax(e.to_string()))?;

    let Value::Object(root) = root else {
        return Err(ParseError::Syntax(
            "expected a JSON object at the top level".to_string(),
        ));
    };

    let id = required_text(&root, "id", "id")?;
    let declared_type = optional_text(&root, "asset_type", "asset_type")?
        .filter(|asset_type| !asset_type.trim().is_empty());
    let nameplate = parse_nameplate(&root)?;

    let asset_type = match declared_type {
        Some(asset_type) => AssetType::from(asset_type),
        None => derive_asset_type(&nameplate)
            .ok_or_else(|| ParseError::MissingField("asset_type".to_string()))?,
    };

    let shell = AssetAdministrationShell {
        id: AssetId::from(id),
        asset_type,
        nameplate,
    };

    // Postcondition: identity is never blank
    debug_assert!(!shell.id.as_str().trim().is_empty());
    debug_assert!(!shell.asset_type.as_str().trim().is_empty());

    Ok(shell)
}

/// Reports whether [`parse`] would accept the document.
///
/// Applies exactly the same rules as [`parse`]; nothing is retained.
pub fn validate(document: &str) -> bool {
    parse(document).is_ok()
}

// ============================================================================
// Nameplate
// ============================================================================

fn parse_nameplate(root: &Map<String, Value>) -> Result<Vec<Property>, ParseError> {
    let entries = match root.get("nameplate") {
        None | Some(Value::Null) => {
            return Err(ParseError::MissingField("nameplate".to_string()));
        }
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(ParseError::InvalidType {
                field: "nameplate".to_string(),
                expected: "an array",
            });
        }
    };

    let nameplate = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| parse_property(position, entry))
        .collect::<Result<Vec<_>, _>>()?;

    // Postcondition: one property per entry, in source order
    assert_eq!(
        nameplate.len(),
        entries.len(),
        "nameplate length mismatch: {} entries, {} properties",
        entries.len(),
        nameplate.len()
    );

    Ok(nameplate)
}

fn parse_property(position: usize, entry: &Value) -> Result<Property, ParseError> {
    let path = format!("nameplate[{position}]");

    let Value::Object(fields) = entry else {
        return Err(ParseError::InvalidType {
            field: path,
            expected: "an object",
        });
    };

    let id_short = required_text(fields, "id_short", &format!("{path}.id_short"))?;

    // An empty value is still a value; only absence is rejected.
    let value = optional_text(fields, "value", &format!("{path}.value"))?
        .ok_or_else(|| ParseError::MissingField(format!("{path}.value")))?;

    let unit = optional_text(fields, "unit", &format!("{path}.unit"))?;

    Ok(Property {
        id_short: id_short.to_string(),
        value: value.to_string(),
        unit: unit.map(str::to_string),
    })
}

fn derive_asset_type(nameplate: &[Property]) -> Option<AssetType> {
    let first_value = |name: &str| {
        nameplate
            .iter()
            .find(|prop| prop.id_short == name)
            .map(|prop| prop.value.as_str())
    };

    AssetType::from_parts(
        first_value(MANUFACTURER_PROPERTY),
        first_value(MODEL_PROPERTY),
    )
}

// ============================================================================
// Field helpers
// ============================================================================

/// Reads a string field that must be present and non-blank.
fn required_text<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a str, ParseError> {
    match optional_text(fields, key, path)? {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ParseError::MissingField(path.to_string())),
    }
}

/// Reads a string field that may be absent or `null`.
fn optional_text<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<&'a str>, ParseError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(ParseError::InvalidType {
            field: path.to_string(),
            expected: "a string",
        }),
    }
}
