use super::*;

#[test]
fn test_add_catalog_items() {
    let mut session = dine_in_session("1");

    assert_eq!(session.add_item(ItemList::Sides, "s1"), Ok(1));
    assert_eq!(session.add_item(ItemList::Sides, "s1"), Ok(2));
    assert_eq!(session.add_item(ItemList::Hidden, "h1"), Ok(1));

    assert_eq!(session.total_items(), 3);
    assert_eq!(session.total_price(), 30 * 2 + 80);
    let line = session.cart().get("h1").unwrap();
    assert_eq!(line.name, "原味炒飯");
    assert_eq!(line.detail, None);
}

#[test]
fn test_item_from_wrong_list_rejected() {
    let mut session = dine_in_session("1");
    assert_eq!(
        session.add_item(ItemList::Hidden, "s1"),
        Err(Rejection::UnknownItem("s1".into()))
    );
    assert!(session.cart().is_empty());
}

#[test]
fn test_sold_out_item_rejected() {
    let mut catalog = Catalog::house_menu();
    catalog
        .sides
        .push(CatalogItem::new("s5", "皮蛋豆腐", 40).sold_out());
    let mut session = create_session_with_catalog(catalog);
    session.select_mode(DiningMode::DineIn).unwrap();
    session.select_table("1").unwrap();
    session.proceed_to_menu().unwrap();

    assert_eq!(
        session.add_item(ItemList::Sides, "s5"),
        Err(Rejection::ItemUnavailable("s5".into()))
    );
    assert_eq!(session.cart().quantity_of("s5"), 0);
}

#[test]
fn test_combo_twice_is_one_line() {
    let mut session = takeout_session("王");

    assert_eq!(add_combo(&mut session, "original", "thin"), 1);
    assert_eq!(add_combo(&mut session, "original", "thin"), 2);

    assert_eq!(session.cart().len(), 1);
    let line = session.cart().get("combo_original_thin").unwrap();
    assert_eq!(line.qty, 2);
    assert_eq!(line.name, "原味細麵");
    assert_eq!(session.total_price(), 180);
}

#[test]
fn test_commit_clears_selection() {
    let mut session = takeout_session("王");
    add_combo(&mut session, "shrimp", "glass");

    assert_eq!(session.combo().base(), None);
    assert_eq!(session.combo().modifier(), None);
    assert_eq!(session.commit_combo(), Err(Rejection::IncompleteCombo));
    assert_eq!(session.total_items(), 1);
}

#[test]
fn test_commit_with_one_choice_is_noop() {
    let mut session = takeout_session("王");
    session.select_combo_modifier("handmade").unwrap();

    assert_eq!(session.commit_combo(), Err(Rejection::IncompleteCombo));
    assert!(session.cart().is_empty());
    assert_eq!(session.combo().modifier(), Some("handmade"));

    session.clear_combo_modifier().unwrap();
    session.select_combo_base("miso").unwrap();
    assert_eq!(session.commit_combo(), Err(Rejection::IncompleteCombo));
    session.clear_combo_base().unwrap();
    assert_eq!(*session.combo(), ComboBuilder::default());
}

#[test]
fn test_combo_preview_matches_commit() {
    let mut session = takeout_session("王");
    assert_eq!(session.combo_preview(), Err(Rejection::IncompleteCombo));

    session.select_combo_base("miso").unwrap();
    session.select_combo_modifier("glass").unwrap();
    let preview = session.combo_preview().unwrap();
    assert_eq!(preview.name, "味噌冬粉");
    assert_eq!(preview.price, 90);

    session.commit_combo().unwrap();
    assert_eq!(session.cart().get(&preview.id), Some(&preview));
}

#[test]
fn test_different_combos_are_different_lines() {
    let mut session = takeout_session("王");
    add_combo(&mut session, "original", "thin");
    add_combo(&mut session, "original", "handmade");
    add_combo(&mut session, "miso", "thin");

    let ids: Vec<_> = session.cart().lines().iter().map(|l| l.id.clone()).collect();
    assert_eq!(
        ids,
        vec![
            "combo_original_thin",
            "combo_original_handmade",
            "combo_miso_thin"
        ]
    );
    assert_eq!(session.total_price(), 270);
}

#[test]
fn test_adjust_qty_through_session() {
    let mut session = dine_in_session("1");
    session.add_item(ItemList::Sides, "s2").unwrap();
    add_combo(&mut session, "original", "thin");

    assert_eq!(session.adjust_qty("s2", 2), Ok(3));
    assert_eq!(session.adjust_qty("combo_original_thin", -1), Ok(0));
    assert!(session.cart().get("combo_original_thin").is_none());
    assert_eq!(
        session.adjust_qty("combo_original_thin", -1),
        Err(Rejection::UnknownLine("combo_original_thin".into()))
    );
    assert_eq!(session.total_items(), 3);
    assert_eq!(session.total_price(), 30);
}

#[test]
fn test_remove_last_line_disables_submit() {
    let mut session = dine_in_session("1");
    session.add_item(ItemList::Sides, "s3").unwrap();
    assert!(session.can_submit());

    session.adjust_qty("s3", -1).unwrap();
    assert!(!session.can_submit());
    assert_eq!(session.total_price(), 0);
}

#[test]
fn test_unknown_combo_option_rejected() {
    let mut session = takeout_session("王");
    assert_eq!(
        session.select_combo_base("tonkotsu"),
        Err(Rejection::UnknownOption("tonkotsu".into()))
    );
    assert_eq!(session.combo().base(), None);
}
