use std::error::Error;

use butler_helpers::{Replacement, SlugConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());
    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    // Compile once, reuse for every title.
    let titles = SlugConfig::builder()
        .delimiter('_')
        .limit(32)
        .replacement(Replacement::delimited("/zombie/i", "unicorn")?)
        .replace(r"(?i)(?:^|_)(?:a|an|the)_", "_")
        .compile()?;

    for title in [
        "The Zombie Apocalypse: A Survival Guide",
        "Привет, мир!",
        "Příliš žluťoučký kůň úpěl ďábelské ódy",
    ] {
        println!("{title:<45} → {}", titles.slugify(title));
    }
    // → unicorn_apocalypse_survival_gui
    // → privet_mir
    // → prilis_zlutoucky_kun_upel_dabels

    // Keep Unicode letters and case.
    let raw = SlugConfig::builder()
        .transliterate(false)
        .lowercase(false)
        .compile()?;
    println!("{}", raw.slugify("Ελληνικά και 日本語!"));
    // → Ελληνικά-και-日本語

    // Bad patterns are reported, not ignored.
    if let Err(err) = SlugConfig::builder().replace("(", "").compile() {
        println!("error: {err}");
    }

    Ok(())
}
