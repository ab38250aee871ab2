use cartelera::config::env_loader::load_config;
use cartelera::eventos::api::EventosAPI;
use cartelera::feedback::ConsoleFeedback;
use cartelera::manager::EventManager;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = load_config();
    let api = EventosAPI::new(&config.api_base_url);
    let mut manager = EventManager::new(api, ConsoleFeedback);

    manager.load_events().await;
    manager.set_category_filter(config.category_filter);

    manager.visible_events().iter().for_each(|event| {
        info!(
            "{} | {} | {} | {}",
            event.date,
            event.name,
            event
                .category
                .map(<&'static str>::from)
                .unwrap_or("sin categoría"),
            event.description
        )
    });
}
