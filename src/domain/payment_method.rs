use super::channel::Channel;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Identity of the payment-processing backend attached to a payment method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayConfig {
    /// Key the gateway factory was constructed with, e.g. `"offline"`.
    pub factory_name: String,
    /// Display name of the gateway, e.g. `"Offline"`.
    pub gateway_name: String,
    /// Free-form gateway configuration.
    pub config: Map<String, Value>,
}

/// Translatable fields of a payment method for one locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentMethodTranslation {
    pub name: String,
    pub description: String,
    pub instructions: Option<String>,
}

/// A payment method as exposed in the store catalog.
///
/// Translations are an explicit mapping from locale code to translated fields;
/// there is no ambient "current locale" pointer. A `BTreeMap` keeps the
/// serialized output deterministic regardless of repository iteration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentMethod {
    pub code: String,
    pub enabled: bool,
    pub gateway_config: GatewayConfig,
    pub translations: BTreeMap<String, PaymentMethodTranslation>,
    pub channels: Vec<Channel>,
}

impl PaymentMethod {
    /// Creates a bare payment method configured for the given gateway factory.
    pub fn with_gateway(factory_name: impl Into<String>) -> Self {
        let factory_name = factory_name.into();
        Self {
            code: String::new(),
            enabled: false,
            gateway_config: GatewayConfig {
                factory_name,
                gateway_name: String::new(),
                config: Map::new(),
            },
            translations: BTreeMap::new(),
            channels: Vec::new(),
        }
    }

    /// Returns the translation for `locale`, creating an empty one if absent.
    pub fn translation_mut(&mut self, locale: &str) -> &mut PaymentMethodTranslation {
        self.translations.entry(locale.to_string()).or_default()
    }

    /// Associates a channel with this payment method.
    ///
    /// Purely additive; adding a channel that is already associated (same
    /// code) is a no-op.
    pub fn add_channel(&mut self, channel: Channel) {
        if !self.channels.iter().any(|c| c.code == channel.code) {
            self.channels.push(channel);
        }
    }
}
