use super::channel::Channel;
use super::locale::Locale;
use super::payment_method::PaymentMethod;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Returns every channel currently known to the catalog.
    async fn all(&self) -> Result<Vec<Channel>>;

    /// Looks up channels by code in one batch.
    ///
    /// Returns only the channels that exist; the caller decides how to treat
    /// codes that did not match.
    async fn find_by_codes(&self, codes: &[String]) -> Result<Vec<Channel>>;
}

#[async_trait]
pub trait LocaleRepository: Send + Sync {
    async fn all(&self) -> Result<Vec<Locale>>;
}

#[async_trait]
pub trait PaymentMethodFactory: Send + Sync {
    /// Constructs a bare payment method configured with the given gateway
    /// factory key. Field population is the example factory's job.
    async fn create_with_gateway(&self, factory_name: &str) -> Result<PaymentMethod>;
}

/// Source of randomized demo data.
pub trait Sampler: Send + Sync {
    /// `count` random words joined with single spaces.
    fn words(&self, count: usize) -> String;

    /// One random sentence.
    fn sentence(&self) -> String;

    /// `true` with the given probability (0-100 percent).
    fn chance(&self, percent: u8) -> bool;
}

pub type ChannelRepositoryBox = Box<dyn ChannelRepository>;
pub type LocaleRepositoryBox = Box<dyn LocaleRepository>;
pub type PaymentMethodFactoryBox = Box<dyn PaymentMethodFactory>;
