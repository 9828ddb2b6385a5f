//! Offset demo: builds a six-vertex closed chain, draws its ±7 parallels as
//! text, then simulates a hover and a drag the way a pointer host would.
//!
//! Usage:
//! ```text
//! cargo run --example offset_demo
//! RUST_LOG=mitre=debug cargo run --example offset_demo
//! ```

use mitre::math::{Point2, Vector2};
use mitre::{LocalFrame, MitreError, SegmentChain};

const OFFSET: f64 = 7.0;
const CURSOR_WIDTH: f64 = 4.0;

fn print_chain(label: &str, chain: &SegmentChain) -> Result<(), MitreError> {
    println!("{label}:");
    for (i, seg) in chain.segments().iter().enumerate() {
        let s = seg.start_point().center()?;
        let e = seg.end_point().center()?;
        println!(
            "  [{i}] ({:8.3}, {:8.3}) -> ({:8.3}, {:8.3})",
            s.x, s.y, e.x, e.y
        );
    }
    Ok(())
}

fn main() -> Result<(), MitreError> {
    // Default: WARN for everything, INFO for mitre.
    // Override with RUST_LOG env var (e.g. RUST_LOG=mitre=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("mitre=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut chain = SegmentChain::from_points(
        &[
            Point2::new(-90.0, -90.0),
            Point2::new(0.0, -30.0),
            Point2::new(90.0, -90.0),
            Point2::new(60.0, 60.0),
            Point2::new(0.0, 30.0),
            Point2::new(-60.0, 60.0),
        ],
        true,
    )?;

    print_chain("chain", &chain)?;
    print_chain("outset", &chain.offset(OFFSET)?)?;
    print_chain("inset", &chain.offset(-OFFSET)?)?;

    // Hover: the cursor sits just above the first edge.
    let cursor = Point2::new(-45.0, -59.0);
    let Some(selected) = chain.hit_test(&cursor, CURSOR_WIDTH)? else {
        println!("no segment under cursor");
        return Ok(());
    };
    println!("hover segment {selected}");

    // Drag: pointer-down, two pointer-moves, pointer-up.
    let drag = chain.begin_translate(selected)?;
    for delta in [Vector2::new(0.0, 10.0), Vector2::new(-5.0, 20.0)] {
        drag.apply(&mut chain, &delta)?;
    }
    println!("released segment {}", drag.end());

    print_chain("dragged", &chain)?;
    print_chain("dragged outset", &chain.offset(OFFSET)?)?;
    Ok(())
}
