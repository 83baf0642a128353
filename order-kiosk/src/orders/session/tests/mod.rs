use super::*;
use crate::catalog::StaticCatalog;
use crate::orders::{DEFAULT_PARTY_SIZE, MenuCursor, RejectionCode};
use chrono::NaiveTime;
use shared::models::CatalogItem;

fn create_test_session() -> Session {
    Session::new(
        Arc::new(StaticCatalog::house_menu()),
        Arc::new(ContextRules::default()),
        chrono_tz::Asia::Taipei,
    )
}

fn create_session_with_catalog(catalog: Catalog) -> Session {
    Session::new(
        Arc::new(StaticCatalog::new(catalog).unwrap()),
        Arc::new(ContextRules::default()),
        chrono_tz::Asia::Taipei,
    )
}

fn fixed_time() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2026-10-18T18:45:00+08:00").unwrap()
}

// ========================================================================
// Helper: sessions already on the menu
// ========================================================================

fn dine_in_session(table: &str) -> Session {
    let mut session = create_test_session();
    session.select_mode(DiningMode::DineIn).unwrap();
    session.select_table(table).unwrap();
    session.proceed_to_menu().unwrap();
    session
}

fn takeout_session(name: &str) -> Session {
    let mut session = create_test_session();
    session.select_mode(DiningMode::Takeout).unwrap();
    session.set_customer_name(name).unwrap();
    session.proceed_to_menu().unwrap();
    session
}

fn add_combo(session: &mut Session, base: &str, modifier: &str) -> u32 {
    session.select_combo_base(base).unwrap();
    session.select_combo_modifier(modifier).unwrap();
    session.commit_combo().unwrap()
}

mod test_cart;
