//! Rendering a shell back to the document format.
//!
//! Export is recomputed from the shell on every call; nothing is cached.
//! The JSON tree is built by hand so that rendering cannot fail and keys come
//! out in document order (`serde_json` is built with `preserve_order`).

use serde_json::{Map, Value};
use snaptwin_types::{AssetAdministrationShell, Property};

/// Renders the shell as pretty-printed JSON accepted by [`crate::parse`].
pub fn export(shell: &AssetAdministrationShell) -> String {
    format!("{:#}", document_value(shell))
}

/// Renders the shell as single-line JSON accepted by [`crate::parse`].
pub fn export_compact(shell: &AssetAdministrationShell) -> String {
    document_value(shell).to_string()
}

/// Short human-readable description. Not meant to be parsed.
pub fn summary(shell: &AssetAdministrationShell) -> String {
    let names = shell
        .nameplate
        .iter()
        .map(|prop| prop.id_short.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut text = format!(
        "Asset: {}\nType: {}\nProperties: {}",
        shell.id,
        shell.asset_type,
        shell.property_count()
    );
    if !names.is_empty() {
        text.push_str(&format!(" ({names})"));
    }
    text
}

fn document_value(shell: &AssetAdministrationShell) -> Value {
    let mut doc = Map::new();
    doc.insert("id".to_string(), Value::from(shell.id.as_str()));
    doc.insert(
        "asset_type".to_string(),
        Value::from(shell.asset_type.as_str()),
    );
    doc.insert(
        "nameplate".to_string(),
        Value::Array(shell.nameplate.iter().map(property_value).collect()),
    );
    Value::Object(doc)
}

fn property_value(prop: &Property) -> Value {
    let mut fields = Map::new();
    fields.insert("id_short".to_string(), Value::from(prop.id_short.as_str()));
    fields.insert("value".to_string(), Value::from(prop.value.as_str()));
    if let Some(unit) = &prop.unit {
        fields.insert("unit".to_string(), Value::from(unit.as_str()));
    }
    Value::Object(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> AssetAdministrationShell {
        AssetAdministrationShell::new("MOTOR-1", "Siemens 1LE1001")
            .with_property(Property::new("Voltage", "400").with_unit("V"))
            .with_property(Property::new("IPRating", "IP55"))
    }

    #[test]
    fn compact_export_keeps_document_order() {
        assert_eq!(
            export_compact(&shell()),
            r#"{"id":"MOTOR-1","asset_type":"Siemens 1LE1001","nameplate":[{"id_short":"Voltage","value":"400","unit":"V"},{"id_short":"IPRating","value":"IP55"}]}"#
        );
    }

    #[test]
    fn pretty_export_is_multiline() {
        let text = export(&shell());
        assert!(text.starts_with("{\n  \"id\": \"MOTOR-1\""), "{text}");
        assert!(text.lines().count() > 5);
    }

    #[test]
    fn pretty_and_compact_describe_the_same_document() {
        let pretty: Value = serde_json::from_str(&export(&shell())).expect("valid json");
        let compact: Value = serde_json::from_str(&export_compact(&shell())).expect("valid json");
        assert_eq!(pretty, compact);
    }

    #[test]
    fn summary_lists_identity_and_count() {
        assert_eq!(
            summary(&shell()),
            "Asset: MOTOR-1\nType: Siemens 1LE1001\nProperties: 2 (Voltage, IPRating)"
        );
    }

    #[test]
    fn summary_of_empty_nameplate() {
        let shell = AssetAdministrationShell::new("P-7", "Grundfos CR 5");
        assert_eq!(summary(&shell), "Asset: P-7\nType: Grundfos CR 5\nProperties: 0");
    }

    #[test]
    fn special_characters_are_escaped() {
        let shell = AssetAdministrationShell::new("M\"1", "Type\\X")
            .with_property(Property::new("Note", "line1\nline2").with_unit("°C"));
        let back = crate::parse(&export(&shell)).expect("export must parse");
        assert_eq!(back, shell);
    }
}
