//! Walks one widget through its settings lifecycle on disk
//!
//! Run with `RUST_LOG=debug` to see every committed write.

use coinwidget_prefs::{
    AppName, Coin, Exchange, FileStore, NightMode, Orientation, PrefsResult, ThemeLayout,
    WidgetConfig, WidgetSettingsStore,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const WIDGET_ID: i32 = 42;

#[tokio::main]
async fn main() -> PrefsResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app_name = AppName::new("com", "example", "coinwidget");
    let file_store = FileStore::new(&app_name);
    println!("=== Widget settings demo ({}) ===\n", file_store.dir().display());

    let settings = WidgetSettingsStore::new(Arc::new(file_store));
    let prefs = settings.widget(WIDGET_ID);

    println!("1. Saving configuration...");
    prefs
        .set_values(&WidgetConfig {
            coin: Coin::ETH,
            currency: Some("USD".to_string()),
            refresh_minutes: 15,
            exchange: Exchange::KRAKEN,
            theme: ThemeLayout::DayNight,
            ..WidgetConfig::default()
        })
        .await?;

    println!("2. Recording a refresh...");
    prefs.set_exchange_values(Some("XETH"), Some("ZUSD")).await?;
    prefs.set_last_value("$3,141.59").await?;
    prefs.set_last_update().await?;
    prefs.set_text_size(14.5, Orientation::Portrait).await?;

    let snapshot = prefs.settings().await?;
    println!("   query {}/{:?}", snapshot.exchange_coin_name, snapshot.exchange_currency_name);
    println!(
        "   layout {} (light at night: {})",
        snapshot.theme.layout_id(),
        prefs.is_light_theme(&NightMode::Yes).await?
    );
    println!("   last value {:?} at {}", snapshot.last_value, snapshot.last_update);

    println!("3. Configured widgets: {:?}", settings.configured_widgets().await?);

    println!("4. Removing widget...");
    prefs.delete().await?;
    println!("   interval after delete: {} minutes", prefs.interval().await?);

    Ok(())
}
