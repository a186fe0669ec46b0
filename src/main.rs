use clap::Parser;
use miette::{IntoDiagnostic, Result};
use serde_json::Map;
use shop_fixtures::application::factory::PaymentMethodExampleFactory;
use shop_fixtures::domain::channel::Channel;
use shop_fixtures::domain::locale::Locale;
use shop_fixtures::infrastructure::in_memory::{
    DefaultPaymentMethodFactory, InMemoryChannelRepository, InMemoryLocaleRepository,
};
use shop_fixtures::infrastructure::sampler::LoremSampler;
use shop_fixtures::interfaces::json::fixture_writer::FixtureWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of payment methods to generate
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Output JSON file (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Demo catalog the fixtures are generated against.
    let channels = InMemoryChannelRepository::new();
    channels.add(Channel::new("WEB", "Web Store")).await;
    channels.add(Channel::new("POS", "Point of Sale")).await;

    let locales = InMemoryLocaleRepository::new();
    locales.add(Locale::new("en_US")).await;
    locales.add(Locale::new("fr_FR")).await;

    let factory = PaymentMethodExampleFactory::new(
        Box::new(DefaultPaymentMethodFactory),
        Box::new(locales),
        Box::new(channels),
        Arc::new(LoremSampler::new()),
    );

    let mut methods = Vec::with_capacity(cli.count);
    for _ in 0..cli.count {
        methods.push(factory.create(Map::new()).await.into_diagnostic()?);
    }

    match cli.output {
        Some(path) => {
            let file = File::create(path).into_diagnostic()?;
            FixtureWriter::new(file)
                .write_payment_methods(&methods)
                .into_diagnostic()?;
        }
        None => {
            let stdout = io::stdout();
            FixtureWriter::new(stdout.lock())
                .write_payment_methods(&methods)
                .into_diagnostic()?;
        }
    }

    Ok(())
}
