//! Optimizes a triangle and a separate stroke, printing the resulting frame.
//!
//! ```text
//! cargo run --example triangle
//! RUST_LOG=galvo=trace cargo run --example triangle
//! ```

use std::f64::consts::FRAC_PI_4;

use galvo::{CornerClassifier, Graphic, Optimizer, Point, Settings, Shape};

fn main() -> galvo::Result<()> {
    // Default: WARN for everything, DEBUG for galvo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("galvo=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let classifier = CornerClassifier::new(FRAC_PI_4)?;
    let triangle = classifier.classify(&Shape::new(vec![
        Point::smooth(-0.5, -0.5),
        Point::smooth(0.5, -0.5),
        Point::smooth(0.0, 0.5),
        Point::smooth(-0.5, -0.5),
    ]));
    let arc: Shape = (0..=8)
        .map(|i| {
            let a = f64::from(i) * std::f64::consts::PI / 8.0;
            Point::smooth(0.8 * a.cos(), 0.8 * a.sin())
        })
        .collect();
    let graphic = Graphic::new(vec![triangle, classifier.classify(&arc)]);

    let mut optimizer = Optimizer::with_settings(Settings {
        max_travel: 0.25,
        ..Settings::default()
    });
    optimizer.optimize(&graphic)?;

    let frame = optimizer.optimized_frame();
    for (i, p) in frame.points().iter().enumerate() {
        println!(
            "{i:4} {:+.3} {:+.3} {} {}",
            p.position.x,
            p.position.y,
            if p.is_blanked { "off" } else { "on " },
            if p.is_corner { "corner" } else { "" },
        );
    }
    println!(
        "{} samples, {} blanked, travel {:.3}",
        frame.len(),
        frame.blank_count(),
        frame.travel_length()
    );
    Ok(())
}
