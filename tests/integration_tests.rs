use monstat::*;
use pretty_assertions::assert_eq;

fn catalog() -> SpeciesCatalog {
    SpeciesCatalog::bundled().unwrap()
}

/// Charmander's physical hit on Bulbasaur, chained through every stage.
#[test]
fn test_charmander_tackles_bulbasaur() {
    let catalog = catalog();
    let charmander = CreatureConfiguration::resolve("Charmander", &catalog).unwrap();
    let bulbasaur = CreatureConfiguration::resolve("Bulbasaur", &catalog).unwrap();

    let attacker = StatCalculator::derive(&charmander).unwrap();
    let defender = StatCalculator::derive(&bulbasaur).unwrap();

    // Atk = floor((104 + 31) / 2) + 5, Def = floor((98 + 31) / 2) + 5
    assert_eq!(attacker.value(Stat::Atk), compute_stat(31, 0, 52));
    assert_eq!(attacker.value(Stat::Atk), 72);
    assert_eq!(defender.value(Stat::Def), compute_stat(31, 0, 49));
    assert_eq!(defender.value(Stat::Def), 69);

    let hit = DamageEstimator::estimate(
        &MoveConfiguration::default(),
        Some(&attacker),
        Some(&defender),
    );

    // floor(floor(1100 * 72 / 69) / 50) = floor(1147 / 50) = 22
    assert_eq!(hit.damage.as_integer(), Some(22));
    assert_eq!(format!("{:.1}", hit.health_percent), "48.9");
    assert_eq!(hit.hits_to_ko.as_integer(), Some(3));
}

/// The same matchup driven through the board.
#[test]
fn test_board_matchup_report() {
    let catalog = catalog();
    let mut board = Board::new(&catalog, &BoardConfig::default());
    board.select(Side::B, Slot::Left);
    board
        .set_species(Side::B, Slot::Left, "Bulbasaur", &catalog)
        .unwrap();

    assert_eq!(
        board.report().to_string(),
        "Charmander will do approx. 22 Hit Points to Bulbasaur (48.9%) - 3HKO"
    );
}

/// Species changes discard edits; failed lookups keep them.
#[test]
fn test_species_change_resets_investments() {
    let catalog = catalog();
    let mut board = Board::new(&catalog, &BoardConfig::default());

    {
        let slot = board.slot_mut(Side::A, Slot::Left);
        slot.set_iv(Stat::Atk, "0");
        slot.set_ev(Stat::Atk, "252");
        slot.set_ability("Solar Power").unwrap();
    }
    let tuned = board.report().damage;

    assert!(board
        .set_species(Side::A, Slot::Left, "Missingno", &catalog)
        .is_err());
    assert_eq!(board.report().damage, tuned);
    assert_eq!(board.attacker().ev(Stat::Atk).value(), Some(252));

    board
        .set_species(Side::A, Slot::Left, "Gengar", &catalog)
        .unwrap();
    let gengar = board.attacker();
    assert_eq!(gengar.ability(), Some("Cursed Body"));
    assert_eq!(gengar.creature_type(), Some(Type::Ghost));
    for stat in Stat::ALL {
        assert_eq!(gengar.iv(stat).value(), Some(31));
        assert_eq!(gengar.ev(stat).value(), Some(0));
    }
}

/// Any move widget edit is seen by the estimate.
#[test]
fn test_shared_move_drives_estimate() {
    let catalog = catalog();
    let board = Board::new(&catalog, &BoardConfig::default());

    let sidebar_b = board.move_slots(Side::B);
    sidebar_b[0].set_category(MoveCategory::Special);
    sidebar_b[3].set_power("90");

    let move_config = board.move_slot(Side::A, 2).unwrap().get();
    assert_eq!(move_config.category, MoveCategory::Special);
    assert_eq!(move_config.effective_power(), 90);

    // Charmander SpAtk 80 into Squirtle SpDef 84 at power 90:
    // floor(floor(1980 * 80 / 84) / 50) = floor(1885 / 50) = 37
    assert_eq!(board.estimate().damage.as_integer(), Some(37));
}

/// Invalid power text keeps the field and estimates with 0.
#[test]
fn test_invalid_power_estimates_zero_damage() {
    let catalog = catalog();
    let board = Board::new(&catalog, &BoardConfig::default());
    board.move_slot(Side::A, 0).unwrap().set_power("");

    let report = board.report();
    assert_eq!(board.move_slot(Side::B, 0).unwrap().get().power.raw(), "");
    assert_eq!(report.damage.as_integer(), Some(0));
    assert_eq!(format!("{:.1}", report.health_percent), "0.0");
    assert!(!report.hits_to_ko.is_numeric());
    assert_eq!(
        report.to_string(),
        "Charmander will do approx. 0 Hit Points to Squirtle (0.0%) - InfinityHKO"
    );
}

/// Invalid effort value text never reaches the displayed stat.
#[test]
fn test_invalid_ev_keeps_stat_numeric() {
    let catalog = catalog();
    let mut squirtle = CreatureConfiguration::resolve("Squirtle", &catalog).unwrap();
    squirtle.set_ev(Stat::Def, "");

    let stats = StatCalculator::derive(&squirtle).unwrap();
    let def = stats.get(Stat::Def);
    assert_eq!(def.value, compute_stat(31, 0, 65));
    assert!(def.ev_fallback);
    assert_eq!(squirtle.ev(Stat::Def).raw(), "");
}

/// A catalog read from disk behaves like the bundled one.
#[test]
fn test_catalog_from_path() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/pokemon.json");
    let from_disk = SpeciesCatalog::from_path(path).unwrap();
    let bundled = catalog();

    assert_eq!(
        from_disk.names().collect::<Vec<_>>(),
        bundled.names().collect::<Vec<_>>()
    );
    assert_eq!(from_disk.get("Snorlax"), bundled.get("Snorlax"));
}

/// Board layout comes from configuration.
#[test]
fn test_board_from_json_config() {
    let catalog = catalog();
    let config = BoardConfig::from_json_str(
        r#"{
            "sideA": { "left": "Snorlax", "right": "Eevee", "selected": "Right" },
            "iconBase": "icons/"
        }"#,
    )
    .unwrap();
    let board = Board::new(&catalog, &config);

    assert_eq!(board.attacker().name(), "Eevee");
    assert_eq!(board.defender().name(), "Squirtle");
    assert_eq!(
        board.icon_path(Side::A, Slot::Left).as_deref(),
        Some("icons/pm143_big.png")
    );
}
