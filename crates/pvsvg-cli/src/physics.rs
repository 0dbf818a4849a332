use pvsvg_graph::Attributes;
use serde_json::{Value, json};

/// vis-network physics options, serialized verbatim into the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsOptions(Attributes);

impl Default for PhysicsOptions {
    fn default() -> Self {
        let defaults = json!({
            "enabled": true,
            "barnesHut": {
                "theta": 0.5,
                "gravitationalConstant": -2000,
                "centralGravity": 0.3,
                "springLength": 95,
                "springConstant": 0.04,
                "damping": 0.09,
                "avoidOverlap": 0.0
            }
        });

        match defaults {
            Value::Object(map) => PhysicsOptions(map),
            _ => unreachable!("physics defaults are a JSON object"),
        }
    }
}

impl PhysicsOptions {
    /// Defaults with `overrides` applied on top.
    pub fn with_overrides(overrides: Option<&Attributes>) -> Self {
        let mut options = Self::default();
        if let Some(overrides) = overrides {
            options.merge(overrides);
        }
        options
    }

    /// Shallow, key-by-key update: a supplied top-level key replaces the stored value
    /// wholesale, including nested objects such as `barnesHut`.
    pub fn merge(&mut self, overrides: &Attributes) {
        for (key, value) in overrides {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Attributes {
        &self.0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_default_json() {
        let json = PhysicsOptions::default().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"enabled":true,"barnesHut":{"theta":0.5,"gravitationalConstant":-2000,"centralGravity":0.3,"springLength":95,"springConstant":0.04,"damping":0.09,"avoidOverlap":0.0}}"#
        );
    }

    #[test]
    fn test_no_overrides_is_default() {
        assert_eq!(PhysicsOptions::with_overrides(None), PhysicsOptions::default());
    }

    #[test]
    fn test_nested_override_replaces_whole_object() {
        let options =
            PhysicsOptions::with_overrides(Some(&overrides(json!({"barnesHut": {"theta": 0.1}}))));

        assert_eq!(options.get("barnesHut"), Some(&json!({"theta": 0.1})));
        assert_eq!(options.get("enabled"), Some(&json!(true)));
    }

    #[test]
    fn test_top_level_override_and_new_keys() {
        let options = PhysicsOptions::with_overrides(Some(&overrides(
            json!({"enabled": false, "solver": "forceAtlas2Based"}),
        )));

        assert_eq!(options.get("enabled"), Some(&json!(false)));
        assert_eq!(options.get("solver"), Some(&json!("forceAtlas2Based")));
        assert_eq!(
            options.get("barnesHut").and_then(|b| b.get("springLength")),
            Some(&json!(95))
        );
        // Existing keys keep their position, new keys are appended.
        let keys: Vec<&str> = options.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["enabled", "barnesHut", "solver"]);
    }
}
