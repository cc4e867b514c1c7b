use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// App instance configuration as delivered by the platform webhook: public
/// `data` plus merchant-private `hidden_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(default)]
    pub hidden_data: Map<String, Value>,
}

impl Application {
    /// Merge merchant settings, private values winning on key collision.
    pub fn merged(&self) -> MerchantConfig {
        let mut settings = self.data.clone();
        for (key, value) in &self.hidden_data {
            settings.insert(key.clone(), value.clone());
        }
        MerchantConfig::from_map(settings)
    }
}

/// Merged merchant settings with typed accessors for the fields the module
/// reads. The rest of the map is kept so future settings can be inspected
/// without a schema change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MerchantConfig {
    settings: Map<String, Value>,
}

impl MerchantConfig {
    pub fn from_map(settings: Map<String, Value>) -> Self {
        Self { settings }
    }

    /// Free shipping threshold, only when configured non-negative.
    pub fn free_shipping_from_value(&self) -> Option<f64> {
        self.settings
            .get("free_shipping_from_value")?
            .as_f64()
            .filter(|value| *value >= 0.0)
    }

    /// Carrier auth token. Empty strings count as unset.
    pub fn token(&self) -> Option<&str> {
        self.settings
            .get("token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
    }

    /// Fallback origin postal code.
    pub fn zip(&self) -> Option<&str> {
        self.settings.get("zip").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn application(data: Value, hidden_data: Value) -> Application {
        serde_json::from_value(json!({ "data": data, "hidden_data": hidden_data }))
            .expect("application should deserialize")
    }

    #[test]
    fn hidden_data_overrides_public_data() {
        let app = application(
            json!({ "token": "public-token", "zip": "01310-100" }),
            json!({ "token": "secret-token" }),
        );
        let config = app.merged();

        assert_eq!(config.token(), Some("secret-token"));
        assert_eq!(config.zip(), Some("01310-100"));
    }

    #[test]
    fn free_shipping_threshold_accepts_zero_and_rejects_negatives() {
        let zero = application(json!({ "free_shipping_from_value": 0 }), json!({}));
        assert_eq!(zero.merged().free_shipping_from_value(), Some(0.0));

        let negative = application(json!({ "free_shipping_from_value": -1 }), json!({}));
        assert_eq!(negative.merged().free_shipping_from_value(), None);

        let unset = application(json!({}), json!({}));
        assert_eq!(unset.merged().free_shipping_from_value(), None);
    }

    #[test]
    fn blank_token_counts_as_unset() {
        let app = application(json!({}), json!({ "token": "" }));
        assert_eq!(app.merged().token(), None);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let app: Application = serde_json::from_value(json!({})).expect("empty app is valid");
        assert_eq!(app.merged().token(), None);
    }
}
