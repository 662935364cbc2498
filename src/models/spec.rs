// ============================================================================
// VISUALIZATION SPEC - Documento declarativo que entiende el motor
// ============================================================================
// Opaco para nosotros: solo escribimos `width` y `height`. El resto de
// claves se conserva tal cual y en el mismo orden.
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ViewError;

/// Spec de visualización (mapa ordenado de claves a valores JSON)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisualizationSpec(Map<String, Value>);

impl VisualizationSpec {
    /// Parsear el cuerpo de `/spec.json`. El documento tiene que ser un objeto.
    pub fn parse(body: &str) -> Result<Self, ViewError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// Construir desde un valor JSON ya parseado
    pub fn from_value(value: Value) -> Result<Self, ViewError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ViewError::NonJson(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Sobrescribir el tamaño del spec (píxeles enteros)
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.0.insert("width".to_string(), Value::from(width));
        self.0.insert("height".to_string(), Value::from(height));
    }

    pub fn width(&self) -> Option<u64> {
        self.0.get("width").and_then(Value::as_u64)
    }

    pub fn height(&self) -> Option<u64> {
        self.0.get("height").and_then(Value::as_u64)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Claves en el orden del documento
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Serializar a texto JSON conservando el orden de las claves
    pub fn to_json_string(&self) -> Result<String, ViewError> {
        serde_json::to_string(&self.0).map_err(|e| ViewError::Render(e.to_string()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parse_keeps_key_order() {
        let spec = VisualizationSpec::parse(r#"{"$schema":"x","data":[],"marks":[],"axes":[]}"#).unwrap();
        assert_eq!(spec.keys().collect::<Vec<_>>(), vec!["$schema", "data", "marks", "axes"]);
    }

    #[test]
    fn set_size_appends_new_keys_at_the_end() {
        let mut spec = VisualizationSpec::parse(r#"{"marks":[]}"#).unwrap();
        spec.set_size(1140, 675);
        assert_eq!(spec.to_json_string().unwrap(), r#"{"marks":[],"width":1140,"height":675}"#);
    }

    #[test]
    fn set_size_overwrites_previous_values_in_place() {
        let mut spec = VisualizationSpec::from_value(json!({
            "width": 10,
            "padding": 5,
            "height": 20,
        }))
        .unwrap();
        spec.set_size(300, 200);
        assert_eq!(spec.keys().collect::<Vec<_>>(), vec!["width", "padding", "height"]);
        assert_eq!(spec.width(), Some(300));
        assert_eq!(spec.height(), Some(200));
        assert_eq!(spec.get("padding"), Some(&json!(5)));
    }

    #[test]
    fn malformed_body_is_non_json() {
        let err = VisualizationSpec::parse("<html>not found</html>").unwrap_err();
        assert!(matches!(err, ViewError::NonJson(_)));
    }

    #[test]
    fn top_level_array_is_rejected() {
        let err = VisualizationSpec::parse("[1, 2, 3]").unwrap_err();
        assert_eq!(err, ViewError::NonJson("expected a JSON object, got an array".to_string()));
    }
}
