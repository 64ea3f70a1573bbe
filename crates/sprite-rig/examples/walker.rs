//! Builds a composite "walker" out of sub-sprites, drops it into a
//! depth-ordered scene, and walks it a few steps, printing the draw order a
//! renderer would see each frame.
//!
//! Run with `RUST_LOG=sprite_rig=debug` to watch the registry at work.

use sprite_rig::{CompositeSprite, DepthOrderedList, Offset, Result, Sprite};

fn main() -> Result<()> {
    sprite_rig::logging::init_logging(None);

    let scene = DepthOrderedList::new();

    // Background layers first, out of order on purpose.
    let sky = Sprite::new(160.0, 120.0).with_size(320.0, 240.0).into_handle();
    let hills = Sprite::new(160.0, 60.0)
        .with_size(320.0, 120.0)
        .with_z_height(1.0)
        .into_handle();
    scene.push(&hills);
    scene.push(&sky);

    // The walker: torso plus named parts, drawn above the background.
    let torso = Sprite::new(40.0, 32.0)
        .with_size(12.0, 20.0)
        .with_z_height(10.0)
        .into_handle();
    let mut walker = CompositeSprite::new(torso);
    walker.add_sub_sprite(
        "head",
        Sprite::new(0.0, 0.0).with_size(8.0, 8.0).with_z_height(10.0).into_handle(),
        Offset::xy(0, 14),
    )?;
    walker.add_sub_sprite(
        "shadow",
        Sprite::new(0.0, 0.0).with_size(14.0, 4.0).with_z_height(5.0).into_handle(),
        Offset::xy(0, -12),
    )?;

    walker.register_in_list(scene.list());
    scene.resort();

    for step in 0..4 {
        let (x, y) = walker.position();
        walker.set_position(x + 6.0, y);
        println!("step {step}: walker at {:?}", walker.position());
    }

    println!("\ndraw order (back to front):");
    for sprite in scene.sprites() {
        let (x, y) = sprite.position();
        println!("  z {:>5.1}  at ({x:>5.1}, {y:>5.1})", sprite.z_height().0);
    }

    // Detach the walker; background stays. The registry survives, so it
    // could be re-registered later in one call.
    walker.remove_from_all_lists();
    println!("\nafter detach: {} sprites left in scene", scene.len());

    Ok(())
}
