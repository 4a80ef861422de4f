use epic_freebies::{
    localized_title, Announcement, FreeGamesCatalog, TelegramConfig, TelegramNotifier,
};
use eyre::Result;
use log::{error, info, warn};

/// One pass: fetch the feed, announce every currently-free game, exit 0.
/// Every failure along the way is logged and absorbed so a scheduled run
/// never ends with a non-zero status.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("checking the Epic Games Store for free games");
    let locale = std::env::var("EPIC_LOCALE").ok().filter(|v| !v.is_empty());

    let catalog = match FreeGamesCatalog::fetch(locale.as_deref()).await {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("catalog fetch failed: {err}");
            return Ok(());
        }
    };

    let mut announcements: Vec<Announcement> = catalog
        .entries
        .iter()
        .filter_map(Announcement::from_entry)
        .collect();
    if announcements.is_empty() {
        info!("no free games found in {} catalog entries", catalog.entries.len());
        return Ok(());
    }
    info!("{} free game(s) found", announcements.len());

    let config = TelegramConfig::from_env();
    let Some(notifier) = TelegramNotifier::from_config(&config) else {
        warn!("TG_BOT_TOKEN or TG_CHAT_ID not set, skipping notification");
        return Ok(());
    };

    for announcement in &mut announcements {
        if let (Some(slug), Some(locale)) = (announcement.slug.as_deref(), locale.as_deref()) {
            announcement.localized_title = localized_title(slug, locale).await;
        }
        match notifier
            .send(&announcement.render_html(), announcement.disable_preview())
            .await
        {
            Ok(()) => info!("announced: {}", announcement.title),
            Err(err) => error!("failed to announce {}: {err}", announcement.title),
        }
    }

    Ok(())
}
