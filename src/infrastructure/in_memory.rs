use crate::domain::channel::Channel;
use crate::domain::locale::Locale;
use crate::domain::payment_method::PaymentMethod;
use crate::domain::ports::{ChannelRepository, LocaleRepository, PaymentMethodFactory};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory channel catalog.
///
/// Uses `Arc<RwLock<Vec<Channel>>>` to allow shared concurrent access while
/// preserving insertion order, which `all()` reflects.
#[derive(Default, Clone)]
pub struct InMemoryChannelRepository {
    channels: Arc<RwLock<Vec<Channel>>>,
}

impl InMemoryChannelRepository {
    /// Creates a new, empty channel repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a channel. Seeding helper for demos and tests.
    pub async fn add(&self, channel: Channel) {
        let mut channels = self.channels.write().await;
        channels.push(channel);
    }
}

#[async_trait]
impl ChannelRepository for InMemoryChannelRepository {
    async fn all(&self) -> Result<Vec<Channel>> {
        let channels = self.channels.read().await;
        Ok(channels.clone())
    }

    async fn find_by_codes(&self, codes: &[String]) -> Result<Vec<Channel>> {
        let channels = self.channels.read().await;
        Ok(channels
            .iter()
            .filter(|channel| codes.contains(&channel.code))
            .cloned()
            .collect())
    }
}

/// A thread-safe in-memory locale catalog.
#[derive(Default, Clone)]
pub struct InMemoryLocaleRepository {
    locales: Arc<RwLock<Vec<Locale>>>,
}

impl InMemoryLocaleRepository {
    /// Creates a new, empty locale repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a locale. Seeding helper for demos and tests.
    pub async fn add(&self, locale: Locale) {
        let mut locales = self.locales.write().await;
        locales.push(locale);
    }
}

#[async_trait]
impl LocaleRepository for InMemoryLocaleRepository {
    async fn all(&self) -> Result<Vec<Locale>> {
        let locales = self.locales.read().await;
        Ok(locales.clone())
    }
}

/// Constructs bare payment methods directly, with no persistence behind them.
#[derive(Default, Clone, Copy)]
pub struct DefaultPaymentMethodFactory;

#[async_trait]
impl PaymentMethodFactory for DefaultPaymentMethodFactory {
    async fn create_with_gateway(&self, factory_name: &str) -> Result<PaymentMethod> {
        Ok(PaymentMethod::with_gateway(factory_name))
    }
}
