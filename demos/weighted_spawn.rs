//! Loot-table style drawing: weighted rarity, a shuffled deal, and spawn
//! points sampled from a rectangle.
//!
//! Everything runs off one seeded generator, so the output is identical on
//! every run.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tombola::chance;
use tombola::geom::{point_in_rect, point_on_rect_border, unit_direction, Rect};
use tombola::pick::weighted_index;
use tombola::shuffle::{shuffle, subset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    // Rarity table: common items dominate, legendaries are rare.
    let rarities = ["common", "uncommon", "rare", "legendary"];
    let weights = [60u32, 25, 12, 3];

    println!("ten drops from the rarity table:");
    for _ in 0..10 {
        let i = weighted_index(&weights, &mut rng)?;
        let crit = if chance::percent(25, &mut rng) { " (crit!)" } else { "" };
        println!("  {}{}", rarities[i], crit);
    }

    // Deal a hand of three distinct cards, then shuffle the rest of the deck.
    let mut deck: Vec<u8> = (1..=12).collect();
    let hand = subset(&deck, 3, &mut rng)?;
    println!();
    println!("dealt hand: {hand:?}");
    shuffle(&mut deck, &mut rng);
    println!("shuffled deck: {deck:?}");

    // Spawn two enemies inside the arena and one on its wall, each with a
    // random facing.
    let arena = Rect::new(Vec2::new(-10.0, -5.0), Vec2::new(10.0, 5.0));
    println!();
    for _ in 0..2 {
        let pos = point_in_rect(arena, &mut rng);
        let facing = unit_direction(&mut rng);
        println!("spawn inside  at {pos:?}, facing {facing:?}");
    }
    let wall = point_on_rect_border(arena, &mut rng)?;
    println!("spawn on wall at {wall:?}");

    Ok(())
}
