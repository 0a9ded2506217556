use log::{warn, Level};
use serde::Deserialize;

use crate::estimate::{estimate, Service, Situation, Vehicle};

/// Id of the `<script type="application/json">` block the host page can use
/// to override the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub scroll_threshold_px: f64,
    /// Matches the CSS transition on `.menu` and `.overlay`.
    pub menu_close_delay_ms: u32,
    pub phone: String,
    /// Navigate to `tel:` after an estimate is submitted.
    pub offer_call: bool,
    pub currency_suffix: String,
    pub texts: Texts,
    pub price_rows: Vec<PriceRow>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 10.0,
            menu_close_delay_ms: 300,
            phone: "+74952041652".to_string(),
            offer_call: false,
            currency_suffix: "₽".to_string(),
            texts: Texts::default(),
            price_rows: Service::ALL
                .into_iter()
                .map(|service| PriceRow {
                    service: service.label().to_string(),
                    price_from: estimate(service, Vehicle::Light, Situation::Normal).price_from,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Texts {
    pub show_prices: String,
    pub hide_prices: String,
    pub lead_ack: String,
    pub estimate_ack: String,
    pub price_prefix: String,
    pub eta_prefix: String,
}

impl Default for Texts {
    fn default() -> Self {
        Self {
            show_prices: "Show the price table".to_string(),
            hide_prices: "Hide the price table".to_string(),
            lead_ack: "Demo: the form has been sent. Hook up a real handler to deliver requests."
                .to_string(),
            estimate_ack: "The estimate has been updated. Call the operator for an exact price."
                .to_string(),
            price_prefix: "From".to_string(),
            eta_prefix: "Arrival:".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PriceRow {
    pub service: String,
    pub price_from: u32,
}

impl LandingConfig {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the config block from the page, or the defaults if there is
    /// none or it does not parse.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::parse(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(LandingConfig::parse("{}").unwrap(), LandingConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_fields() {
        let config = LandingConfig::parse(
            r#"{"menu_close_delay_ms": 450, "texts": {"show_prices": "Prices"}}"#,
        )
        .unwrap();

        assert_eq!(config.menu_close_delay_ms, 450);
        assert_eq!(config.scroll_threshold_px, 10.0);
        assert_eq!(config.texts.show_prices, "Prices");
        assert_eq!(config.texts.hide_prices, Texts::default().hide_prices);
    }

    #[test]
    fn default_price_rows_follow_the_estimator() {
        let rows: Vec<(String, u32)> = LandingConfig::default()
            .price_rows
            .into_iter()
            .map(|r| (r.service, r.price_from))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Tow truck".to_string(), 1500),
                ("Technical assistance".to_string(), 1200),
                ("Fuel delivery".to_string(), 1000),
                ("Sober driver".to_string(), 2000),
            ]
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(LandingConfig::parse(r#"{"offer_call": "#).is_err());
        assert!(LandingConfig::parse(r#"{"offer_call": "yes"}"#).is_err());
    }

    #[test]
    fn call_link() {
        assert_eq!(LandingConfig::default().tel_href(), "tel:+74952041652");
    }
}
