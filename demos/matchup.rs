//! Matchup example: the default board, as a front end would show it
//!
//! This example demonstrates:
//! - Loading the bundled species catalog
//! - Deriving each active creature's stats
//! - Editing the shared move and reading the damage report

use monstat::*;

fn print_stats(board: &Board, side: Side) {
    let creature = board.active(side);
    println!("\n=== Side {:?}: {} ===", side, creature.name());

    let Some(stats) = board.stats(side) else {
        println!("  (unresolved)");
        return;
    };
    if let Some(ability) = creature.ability() {
        println!("  Ability: {ability}");
    }
    for row in stats.iter() {
        println!(
            "  {:<6} base {:>3}  IV {:>2}  EV {:>3}  => {:>3}",
            row.stat, row.base, row.iv, row.ev, row.value
        );
    }
}

fn main() -> Result<(), CalcError> {
    let catalog = SpeciesCatalog::bundled()?;
    println!("Species: {}", catalog.names().collect::<Vec<_>>().join(", "));

    let mut board = Board::new(&catalog, &BoardConfig::default());
    print_stats(&board, Side::A);
    print_stats(&board, Side::B);

    println!("\nPhysical, power 50:");
    println!("  {}", board.report());

    if let Some(move_widget) = board.move_slot(Side::B, 0) {
        move_widget.set_category(MoveCategory::Special);
    }
    println!("\nSpecial, power 50:");
    println!("  {}", board.report());

    board.slot_mut(Side::A, Slot::Left).set_ev(Stat::SpAtk, "252");
    println!("\nSpecial, power 50, 252 SpAtk EVs:");
    println!("  {}", board.report());

    board.select(Side::B, Slot::Left);
    board.set_species(Side::B, Slot::Left, "Snorlax", &catalog)?;
    println!("\nAgainst Snorlax:");
    println!("  {}", board.report());

    Ok(())
}
