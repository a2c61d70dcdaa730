use games_inventory_core::{CATALOG_PROJECTION, Column, GameAddress, Genre, NewGame, Platform, ResourceKind};
use games_inventory_db::*;

fn collection() -> String {
    GameAddress::collection_uri()
}

fn diablo() -> GameValues {
    GameValues::new()
        .name("Diablo III")
        .genre(Genre::Rpg)
        .platform(Platform::Ps4)
        .price(19.99)
        .quantity(1)
        .supplier_name("Blizzard")
        .supplier_phone(Some("+1-000-000-0000".to_string()))
}

fn count(gateway: &GameGateway) -> usize {
    gateway
        .query(&collection(), &[Column::Id], &Filter::all(), &[])
        .unwrap()
        .len()
}

fn insert(gateway: &GameGateway, values: &GameValues) -> GameAddress {
    gateway.insert(&collection(), values).unwrap().unwrap()
}

#[test]
fn diablo_lifecycle() {
    let gateway = GameGateway::open_memory().unwrap();

    let address = insert(&gateway, &diablo());
    let item = address.to_string();
    assert_eq!(address.kind(), ResourceKind::Item);

    let rows = gateway.query(&item, &[], &Filter::all(), &[]).unwrap();
    assert_eq!(rows.len(), 1);
    let game = rows[0].to_game().unwrap();
    assert_eq!(Some(game.id), address.id());
    assert_eq!(game.name, "Diablo III");
    assert_eq!(game.genre, Genre::Rpg);
    assert_eq!(game.platform, Platform::Ps4);
    assert_eq!(game.price, 19.99);
    assert_eq!(game.quantity, 1);
    assert_eq!(game.supplier_name, "Blizzard");
    assert_eq!(game.supplier_phone.as_deref(), Some("+1-000-000-0000"));

    let updated = gateway
        .update(&item, &GameValues::new().quantity(0), &Filter::all())
        .unwrap();
    assert_eq!(updated, 1);
    assert_eq!(gateway.get_game(game.id).unwrap().unwrap().quantity, 0);

    assert_eq!(gateway.delete(&item, &Filter::all()).unwrap(), 1);
    assert!(gateway.query(&item, &[], &Filter::all(), &[]).unwrap().is_empty());
}

#[test]
fn inserted_ids_are_fresh_and_never_reused() {
    let gateway = GameGateway::open_memory().unwrap();
    let first = insert(&gateway, &diablo()).id().unwrap();
    let second = insert(&gateway, &diablo()).id().unwrap();
    assert!(second > first);

    gateway.delete_all().unwrap();
    let third = insert(&gateway, &diablo()).id().unwrap();
    assert!(third > second, "id {} was reused", third);
}

#[test]
fn insert_from_new_game() {
    let gateway = GameGateway::open_memory().unwrap();
    let new_game = NewGame::new("Forza Horizon 3", "Microsoft")
        .genre(Genre::Sport)
        .platform(Platform::XboxOne)
        .price(39.5)
        .quantity(12);
    let address = insert(&gateway, &GameValues::from(&new_game));

    let game = gateway.get_game(address.id().unwrap()).unwrap().unwrap();
    assert_eq!(game.name, new_game.name);
    assert_eq!(game.genre, Genre::Sport);
    assert_eq!(game.supplier_phone, None);
    assert!(game.in_stock());
}

#[test]
fn missing_name_is_rejected_without_writing() {
    let gateway = GameGateway::open_memory().unwrap();
    insert(&gateway, &diablo());

    let mut values = diablo();
    values.remove(Column::Name);
    let err = gateway.insert(&collection(), &values).unwrap_err();
    assert!(matches!(
        err,
        GatewayError::Validation(ValidationError::MissingName)
    ));
    assert_eq!(err.invalid_field(), Some(Column::Name));

    let err = gateway.insert(&collection(), &diablo().name("")).unwrap_err();
    assert_eq!(err.invalid_field(), Some(Column::Name));

    assert_eq!(count(&gateway), 1);
}

#[test]
fn out_of_set_genre_is_rejected() {
    let gateway = GameGateway::open_memory().unwrap();
    for code in [-3, 6, 17] {
        let values = diablo().with(Column::Genre, code);
        let err = gateway.insert(&collection(), &values).unwrap_err();
        assert_eq!(err.invalid_field(), Some(Column::Genre), "genre {}", code);
    }
    assert_eq!(count(&gateway), 0);
}

#[test]
fn insert_reports_first_failing_field() {
    let gateway = GameGateway::open_memory().unwrap();
    let values = diablo()
        .with(Column::Platform, 99)
        .price(-1.0)
        .supplier_name("");
    let err = gateway.insert(&collection(), &values).unwrap_err();
    assert_eq!(err.invalid_field(), Some(Column::Platform));

    let values = diablo().quantity(-2).supplier_name("");
    let err = gateway.insert(&collection(), &values).unwrap_err();
    assert_eq!(err.invalid_field(), Some(Column::Quantity));
}

#[test]
fn insert_at_item_address_is_unsupported() {
    let gateway = GameGateway::open_memory().unwrap();
    let address = insert(&gateway, &diablo());

    let err = gateway.insert(&address.to_string(), &diablo()).unwrap_err();
    assert!(matches!(
        err,
        GatewayError::UnsupportedAddress {
            operation: Operation::Insert,
            ..
        }
    ));
    assert_eq!(count(&gateway), 1);
}

#[test]
fn unknown_addresses_are_unsupported_everywhere() {
    let gateway = GameGateway::open_memory().unwrap();
    let bad = "content://games-inventory/suppliers";

    assert!(matches!(
        gateway.query(bad, &[], &Filter::all(), &[]),
        Err(GatewayError::UnsupportedAddress { .. })
    ));
    assert!(matches!(
        gateway.insert(bad, &diablo()),
        Err(GatewayError::UnsupportedAddress { .. })
    ));
    assert!(matches!(
        gateway.update(bad, &GameValues::new(), &Filter::all()),
        Err(GatewayError::UnsupportedAddress { .. })
    ));
    assert!(matches!(
        gateway.delete(bad, &Filter::all()),
        Err(GatewayError::UnsupportedAddress { .. })
    ));
    assert!(matches!(
        gateway.resource_kind(bad),
        Err(GatewayError::UnsupportedAddress {
            operation: Operation::ResolveKind,
            ..
        })
    ));
}

#[test]
fn resource_kinds() {
    let gateway = GameGateway::open_memory().unwrap();
    assert_eq!(
        gateway.resource_kind(&collection()).unwrap(),
        ResourceKind::Collection
    );
    assert_eq!(
        gateway
            .resource_kind("content://games-inventory/games/12")
            .unwrap(),
        ResourceKind::Item
    );
}

#[test]
fn negative_quantity_update_leaves_row_unchanged() {
    let gateway = GameGateway::open_memory().unwrap();
    let address = insert(&gateway, &diablo());

    let err = gateway
        .update(
            &address.to_string(),
            &GameValues::new().quantity(-1),
            &Filter::all(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        GatewayError::Validation(ValidationError::InvalidQuantity)
    ));
    let game = gateway.get_game(address.id().unwrap()).unwrap().unwrap();
    assert_eq!(game.quantity, 1);
}

#[test]
fn empty_update_never_touches_the_store() {
    let gateway = GameGateway::open_memory().unwrap();
    let address = insert(&gateway, &diablo()).to_string();

    // With the table gone, any real statement would fail
    gateway
        .store()
        .writable()
        .execute_batch("DROP TABLE games;")
        .unwrap();

    assert_eq!(
        gateway
            .update(&address, &GameValues::new(), &Filter::all())
            .unwrap(),
        0
    );
    assert!(matches!(
        gateway.update(&address, &GameValues::new().quantity(3), &Filter::all()),
        Err(GatewayError::Storage(_))
    ));
}

#[test]
fn partial_update_only_checks_present_fields() {
    let gateway = GameGateway::open_memory().unwrap();
    let address = insert(&gateway, &diablo());

    let changes = GameValues::new()
        .name("Diablo III: Reaper of Souls")
        .supplier_phone(None);
    assert_eq!(
        gateway
            .update(&address.to_string(), &changes, &Filter::all())
            .unwrap(),
        1
    );

    let game = gateway.get_game(address.id().unwrap()).unwrap().unwrap();
    assert_eq!(game.name, "Diablo III: Reaper of Souls");
    assert_eq!(game.supplier_phone, None);
    assert_eq!(game.price, 19.99);
    assert_eq!(game.supplier_name, "Blizzard");
}

#[test]
fn update_cannot_change_id() {
    let gateway = GameGateway::open_memory().unwrap();
    let address = insert(&gateway, &diablo());
    let err = gateway
        .update(
            &address.to_string(),
            &GameValues::new().with(Column::Id, 500),
            &Filter::all(),
        )
        .unwrap_err();
    assert_eq!(err.invalid_field(), Some(Column::Id));
}

#[test]
fn update_of_missing_id_returns_zero() {
    let gateway = GameGateway::open_memory().unwrap();
    let updated = gateway
        .update(
            "content://games-inventory/games/404",
            &GameValues::new().quantity(2),
            &Filter::all(),
        )
        .unwrap();
    assert_eq!(updated, 0);
}

#[test]
fn collection_update_applies_filter() {
    let gateway = GameGateway::open_memory().unwrap();
    insert(&gateway, &diablo());
    insert(&gateway, &diablo().platform(Platform::Pc));
    insert(&gateway, &diablo().platform(Platform::Pc).name("StarCraft II"));

    let updated = gateway
        .update(
            &collection(),
            &GameValues::new().price(9.99),
            &Filter::all().equals(Column::Platform, Platform::Pc),
        )
        .unwrap();
    assert_eq!(updated, 2);

    let cheap = gateway
        .query(
            &collection(),
            &[Column::Name],
            &Filter::all().less_than(Column::Price, 10.0),
            &[OrderBy::asc(Column::Name)],
        )
        .unwrap();
    let names: Vec<&str> = cheap
        .iter()
        .filter_map(|r| r.get(Column::Name).and_then(FieldValue::as_str))
        .collect();
    assert_eq!(names, vec!["Diablo III", "StarCraft II"]);
}

#[test]
fn item_address_overrides_caller_filter() {
    let gateway = GameGateway::open_memory().unwrap();
    let first = insert(&gateway, &diablo());
    let second = insert(&gateway, &diablo().name("Overwatch"));

    // The filter names the second row, but the address wins
    let filter = Filter::by_id(second.id().unwrap());
    let rows = gateway
        .query(&first.to_string(), &[Column::Name], &filter, &[])
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(Column::Name), Some(&FieldValue::from("Diablo III")));

    let deleted = gateway
        .delete(&first.to_string(), &Filter::all().equals(Column::Name, "Overwatch"))
        .unwrap();
    assert_eq!(deleted, 1);
    assert!(gateway.get_game(first.id().unwrap()).unwrap().is_none());
    assert!(gateway.get_game(second.id().unwrap()).unwrap().is_some());
}

#[test]
fn unconditioned_delete_removes_everything() {
    let gateway = GameGateway::open_memory().unwrap();
    for _ in 0..4 {
        insert(&gateway, &diablo());
    }
    let before = count(&gateway);

    let deleted = gateway.delete(&collection(), &Filter::all()).unwrap();
    assert_eq!(deleted, before);
    assert_eq!(count(&gateway), 0);
    assert_eq!(gateway.delete_all().unwrap(), 0);
}

#[test]
fn query_projection_and_order() {
    let gateway = GameGateway::open_memory().unwrap();
    insert(&gateway, &diablo().name("B").price(2.0));
    insert(&gateway, &diablo().name("A").price(3.0));
    insert(&gateway, &diablo().name("C").price(1.0));

    let rows = gateway
        .query(
            &collection(),
            CATALOG_PROJECTION,
            &Filter::all(),
            &[OrderBy::desc(Column::Price)],
        )
        .unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].columns().collect::<Vec<_>>(), CATALOG_PROJECTION);
    assert!(rows[0].get(Column::SupplierName).is_none());
    let names: Vec<&str> = rows
        .iter()
        .filter_map(|r| r.get(Column::Name).and_then(FieldValue::as_str))
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    // A catalog row is not a full game
    assert!(matches!(
        rows[0].to_game(),
        Err(RowError::Missing(Column::SupplierName))
    ));
}

#[test]
fn null_phone_filters() {
    let gateway = GameGateway::open_memory().unwrap();
    insert(&gateway, &diablo());
    insert(&gateway, &diablo().supplier_phone(None));

    let without = gateway
        .query(
            &collection(),
            &[Column::Id],
            &Filter::all().equals(Column::SupplierPhone, FieldValue::Null),
            &[],
        )
        .unwrap();
    assert_eq!(without.len(), 1);

    let with = gateway
        .query(
            &collection(),
            &[Column::Id],
            &Filter::all().not_equals(Column::SupplierPhone, FieldValue::Null),
            &[],
        )
        .unwrap();
    assert_eq!(with.len(), 1);
}

#[test]
fn store_rejection_is_a_soft_failure() {
    let gateway = GameGateway::open_memory().unwrap();
    gateway
        .store()
        .writable()
        .execute_batch(
            "CREATE TRIGGER reject_inserts BEFORE INSERT ON games
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();

    let result = gateway.insert(&collection(), &diablo()).unwrap();
    assert_eq!(result, None);
    assert_eq!(count(&gateway), 0);
}

#[test]
fn list_games_in_id_order() {
    let gateway = GameGateway::open_memory().unwrap();
    insert(&gateway, &diablo().name("Second").with(Column::Quantity, 4));
    gateway.insert_sample().unwrap().unwrap();

    let games = gateway.list_games().unwrap();
    assert_eq!(games.len(), 2);
    assert!(games[0].id < games[1].id);
    assert_eq!(games[1].supplier_name, "2K");
    assert_eq!(games[1].genre, Genre::Action);
    assert_eq!(games[1].platform, Platform::XboxOne);
    assert_eq!(games[1].quantity, 5);
}

#[test]
fn selling_decrements_until_out_of_stock() {
    let gateway = GameGateway::open_memory().unwrap();
    let item = insert(&gateway, &diablo().quantity(2)).to_string();

    assert_eq!(
        gateway.sell_one(&item).unwrap(),
        SaleOutcome::Sold { remaining: 1 }
    );
    assert_eq!(
        gateway.sell_one(&item).unwrap(),
        SaleOutcome::Sold { remaining: 0 }
    );
    assert_eq!(gateway.sell_one(&item).unwrap(), SaleOutcome::OutOfStock);

    assert_eq!(
        gateway
            .sell_one("content://games-inventory/games/999")
            .unwrap(),
        SaleOutcome::NotFound
    );
    assert!(matches!(
        gateway.sell_one(&collection()),
        Err(GatewayError::UnsupportedAddress { .. })
    ));
}
