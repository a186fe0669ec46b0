use serde_json::{Map, Value, json};
use shop_fixtures::application::factory::PaymentMethodExampleFactory;
use shop_fixtures::domain::channel::Channel;
use shop_fixtures::domain::inflector::name_to_code;
use shop_fixtures::domain::locale::Locale;
use shop_fixtures::error::FixtureError;
use shop_fixtures::infrastructure::in_memory::{
    DefaultPaymentMethodFactory, InMemoryChannelRepository, InMemoryLocaleRepository,
};
use shop_fixtures::infrastructure::sampler::LoremSampler;
use std::sync::Arc;

async fn demo_factory() -> PaymentMethodExampleFactory {
    let channels = InMemoryChannelRepository::new();
    channels.add(Channel::new("WEB", "Web Store")).await;
    channels.add(Channel::new("POS", "Point of Sale")).await;

    let locales = InMemoryLocaleRepository::new();
    locales.add(Locale::new("en_US")).await;
    locales.add(Locale::new("fr_FR")).await;

    PaymentMethodExampleFactory::new(
        Box::new(DefaultPaymentMethodFactory),
        Box::new(locales),
        Box::new(channels),
        Arc::new(LoremSampler::new()),
    )
}

fn options(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("object literal")
}

#[tokio::test]
async fn test_defaults_with_real_sampler() {
    let factory = demo_factory().await;
    let method = factory.create_default().await.unwrap();

    let translation = &method.translations["en_US"];
    assert!(!translation.name.is_empty());
    assert_eq!(translation.name.split(' ').count(), 3);
    assert_eq!(method.code, name_to_code(&translation.name));
    assert!(translation.description.ends_with('.'));
    assert_eq!(translation.instructions, None);

    // Identical values under every known locale.
    assert_eq!(method.translations["fr_FR"], *translation);

    // All channels attached when the option is omitted.
    assert_eq!(method.channels.len(), 2);
}

#[tokio::test]
async fn test_randomized_fields_vary_across_calls() {
    let factory = demo_factory().await;

    let mut names = Vec::new();
    for _ in 0..5 {
        let method = factory.create_default().await.unwrap();
        names.push(method.translations["en_US"].name.clone());
    }
    names.sort();
    names.dedup();
    assert!(names.len() > 1, "expected at least two distinct random names");
}

#[tokio::test]
async fn test_supplied_options_override_randomization() {
    let factory = demo_factory().await;

    let method = factory
        .create(options(json!({
            "name": "Cash on Delivery",
            "enabled": true,
            "channels": ["WEB"]
        })))
        .await
        .unwrap();

    assert_eq!(method.code, "cash_on_delivery");
    assert!(method.enabled);
    assert_eq!(method.channels.len(), 1);
    assert_eq!(method.channels[0].code, "WEB");
    assert_eq!(method.translations["fr_FR"].name, "Cash on Delivery");
}

#[tokio::test]
async fn test_unknown_channel_is_a_validation_error() {
    let factory = demo_factory().await;

    let err = factory
        .create(options(json!({ "channels": ["WEB", "MOBILE"] })))
        .await
        .unwrap_err();
    assert!(matches!(err, FixtureError::UnknownChannel(code) if code == "MOBILE"));
}

#[tokio::test]
async fn test_unknown_option_is_a_validation_error() {
    let factory = demo_factory().await;

    let err = factory
        .create(options(json!({ "color": "red" })))
        .await
        .unwrap_err();
    assert!(matches!(err, FixtureError::UnknownOption(key) if key == "color"));
}

#[tokio::test]
async fn test_type_mismatch_is_a_validation_error() {
    let factory = demo_factory().await;

    let err = factory
        .create(options(json!({ "enabled": "yes" })))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FixtureError::TypeMismatch {
            option: "enabled",
            ..
        }
    ));
}

#[tokio::test]
async fn test_factory_generates_many_independent_entities() {
    let factory = demo_factory().await;

    for i in 0..20 {
        let method = factory
            .create(options(json!({ "name": format!("Method {i}") })))
            .await
            .unwrap();
        assert_eq!(method.code, format!("method_{i}"));
        assert_eq!(method.translations.len(), 2);
    }
}
