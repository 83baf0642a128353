use anyhow::Context;
use order_kiosk::orders::{DiningMode, SubmittedOrder};
use order_kiosk::{
    BroadcastIntake, CatalogProvider, FileCatalog, JsonLinesIntake, Kiosk, KioskConfig,
    OrderIntake, Session, StaticCatalog, init_logger_with_file,
};
use shared::models::ItemList;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = KioskConfig::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(tz = %config.business_tz, "Order kiosk starting");

    let provider: Arc<dyn CatalogProvider> = match &config.catalog_path {
        Some(path) => Arc::new(
            FileCatalog::open(path).with_context(|| format!("failed to load catalog {path}"))?,
        ),
        None => Arc::new(StaticCatalog::house_menu()),
    };

    let (intake, feed): (Arc<dyn OrderIntake>, Option<JoinHandle<()>>) =
        match &config.order_log_path {
            Some(path) => (
                Arc::new(
                    JsonLinesIntake::open(path)
                        .with_context(|| format!("failed to open order log {path}"))?,
                ),
                None,
            ),
            None => {
                let kitchen = BroadcastIntake::default();
                let rx = kitchen.subscribe();
                (Arc::new(kitchen), Some(tokio::spawn(kitchen_feed(rx))))
            }
        };

    let session = Session::new(
        provider,
        Arc::new(config.context_rules()),
        config.business_tz,
    );
    let mut kiosk = Kiosk::new(session, intake);

    let order = run_demo_order(&mut kiosk)?;
    println!("{}", serde_json::to_string_pretty(&order)?);

    kiosk.start_new_order();

    // Dropping the kiosk closes the kitchen feed
    drop(kiosk);
    if let Some(handle) = feed {
        handle.await?;
    }

    tracing::info!("Order kiosk stopped");
    Ok(())
}

/// Takeout: two 原味細麵 and one 滷蛋
fn run_demo_order(kiosk: &mut Kiosk) -> anyhow::Result<SubmittedOrder> {
    let session = kiosk.session_mut();
    session.select_mode(DiningMode::Takeout)?;
    session.set_customer_name("王先生")?;
    session.proceed_to_menu()?;

    for _ in 0..2 {
        session.select_combo_base("original")?;
        session.select_combo_modifier("thin")?;
        session.commit_combo()?;
    }
    session.add_item(ItemList::Sides, "s2")?;

    tracing::info!(
        total_items = session.total_items(),
        total = session.total_price(),
        "Cart ready"
    );

    Ok(kiosk.confirm()?)
}

async fn kitchen_feed(mut rx: broadcast::Receiver<SubmittedOrder>) {
    loop {
        match rx.recv().await {
            Ok(order) => {
                tracing::info!(
                    order_id = %order.order_id,
                    lines = order.line_count(),
                    total = order.total,
                    "Kitchen received order"
                );
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!("Kitchen feed lagged {n} orders");
            }
            Err(broadcast::error::RecvError::Closed) => {
                tracing::info!("Kitchen feed closed");
                break;
            }
        }
    }
}
