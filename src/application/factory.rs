use crate::application::options::{DefaultRule, Kind, OptionsResolver, ResolvedOptions, kind_of};
use crate::domain::channel::Channel;
use crate::domain::inflector::name_to_code;
use crate::domain::payment_method::PaymentMethod;
use crate::domain::ports::{
    ChannelRepositoryBox, LocaleRepositoryBox, PaymentMethodFactoryBox, Sampler,
};
use crate::error::{FixtureError, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Locale used when the locale repository knows none.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Generates fully populated example payment methods for catalog seeding.
///
/// The option schema is built once at construction and reused by every
/// [`create`](Self::create) call; the factory itself keeps no other state.
pub struct PaymentMethodExampleFactory {
    payment_method_factory: PaymentMethodFactoryBox,
    locale_repository: LocaleRepositoryBox,
    channel_repository: ChannelRepositoryBox,
    resolver: OptionsResolver,
}

impl PaymentMethodExampleFactory {
    pub fn new(
        payment_method_factory: PaymentMethodFactoryBox,
        locale_repository: LocaleRepositoryBox,
        channel_repository: ChannelRepositoryBox,
        sampler: Arc<dyn Sampler>,
    ) -> Self {
        Self {
            payment_method_factory,
            locale_repository,
            channel_repository,
            resolver: Self::configure_options(sampler),
        }
    }

    /// Turns a (possibly empty) option map into a fully populated entity.
    ///
    /// All-or-nothing: any resolution failure or collaborator error surfaces
    /// before a partial entity can escape.
    pub async fn create(&self, options: Map<String, Value>) -> Result<PaymentMethod> {
        let options = self.resolver.resolve(options)?;

        // Channels are validated before the base entity exists, so an
        // unresolvable code never leaves side effects behind.
        let channels = self.resolve_channels(&options).await?;

        let mut payment_method = self
            .payment_method_factory
            .create_with_gateway(options.str("gatewayFactory")?)
            .await?;
        payment_method.gateway_config.gateway_name = options.str("gatewayName")?.to_string();
        payment_method.gateway_config.config = options.object("gatewayConfig")?.clone();

        payment_method.code = options.str("code")?.to_string();
        payment_method.enabled = options.bool("enabled")?;

        // The same values go under every locale; demo data carries no
        // per-locale variation.
        for locale_code in self.locale_codes().await? {
            let translation = payment_method.translation_mut(&locale_code);
            translation.name = options.str("name")?.to_string();
            translation.description = options.str("description")?.to_string();
            translation.instructions = options.opt_str("instructions")?.map(str::to_string);
        }

        for channel in channels {
            payment_method.add_channel(channel);
        }

        tracing::debug!(
            code = %payment_method.code,
            locales = payment_method.translations.len(),
            channels = payment_method.channels.len(),
            "generated example payment method"
        );

        Ok(payment_method)
    }

    /// Shorthand for [`create`](Self::create) with defaults only.
    pub async fn create_default(&self) -> Result<PaymentMethod> {
        self.create(Map::new()).await
    }

    fn configure_options(sampler: Arc<dyn Sampler>) -> OptionsResolver {
        let name_sampler = Arc::clone(&sampler);
        let description_sampler = Arc::clone(&sampler);
        let enabled_sampler = Arc::clone(&sampler);

        OptionsResolver::new()
            .define(
                "name",
                &[Kind::String],
                DefaultRule::lazy(move |_| Ok(Value::String(name_sampler.words(3)))),
            )
            .define(
                "code",
                &[Kind::String],
                // Depends on `name`, which resolves first by declaration order.
                DefaultRule::lazy(|options| Ok(Value::String(name_to_code(options.str("name")?)))),
            )
            .define(
                "description",
                &[Kind::String],
                DefaultRule::lazy(move |_| Ok(Value::String(description_sampler.sentence()))),
            )
            .define(
                "instructions",
                &[Kind::Null, Kind::String],
                DefaultRule::Literal(Value::Null),
            )
            .define(
                "gatewayName",
                &[Kind::String],
                DefaultRule::Literal(Value::String("Offline".to_string())),
            )
            .define(
                "gatewayFactory",
                &[Kind::String],
                DefaultRule::Literal(Value::String("offline".to_string())),
            )
            .define(
                "gatewayConfig",
                &[Kind::Object],
                DefaultRule::Literal(Value::Object(Map::new())),
            )
            .define(
                "enabled",
                &[Kind::Bool],
                DefaultRule::lazy(move |_| Ok(Value::Bool(enabled_sampler.chance(90)))),
            )
            .define("channels", &[Kind::Array], DefaultRule::External)
    }

    /// Materializes the `channels` option.
    ///
    /// Omitted means "all channels in the repository". Supplied entries are
    /// first coerced to a code list (strings are codes; objects must carry a
    /// `"code"` field), then looked up in one batch. Every code must match an
    /// existing channel.
    async fn resolve_channels(&self, options: &ResolvedOptions) -> Result<Vec<Channel>> {
        let Some(entries) = options.array("channels")? else {
            return self.channel_repository.all().await;
        };

        let mut codes = Vec::with_capacity(entries.len());
        for entry in entries {
            let code = match entry {
                Value::String(code) => code.as_str(),
                Value::Object(map) => {
                    map.get("code")
                        .and_then(Value::as_str)
                        .ok_or(FixtureError::TypeMismatch {
                            option: "channels",
                            expected: "object with a string \"code\" field".to_string(),
                            actual: "object",
                        })?
                }
                other => {
                    return Err(FixtureError::TypeMismatch {
                        option: "channels",
                        expected: "channel code or channel object".to_string(),
                        actual: kind_of(other),
                    });
                }
            };
            codes.push(code.to_string());
        }

        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let found = self.channel_repository.find_by_codes(&codes).await?;
        let by_code: HashMap<&str, &Channel> =
            found.iter().map(|c| (c.code.as_str(), c)).collect();

        codes
            .iter()
            .map(|code| {
                by_code
                    .get(code.as_str())
                    .map(|&channel| channel.clone())
                    .ok_or_else(|| FixtureError::UnknownChannel(code.clone()))
            })
            .collect()
    }

    async fn locale_codes(&self) -> Result<Vec<String>> {
        let locales = self.locale_repository.all().await?;
        if locales.is_empty() {
            return Ok(vec![DEFAULT_LOCALE.to_string()]);
        }
        Ok(locales.into_iter().map(|locale| locale.code).collect())
    }
}
