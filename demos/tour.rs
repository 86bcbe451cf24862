//! Walks through the main geom2d operations and logs their results.
//!
//! Usage:
//! ```text
//! cargo run --example tour
//! RUST_LOG=geom2d=trace cargo run --example tour   # library trace events too
//! ```

use geom2d::geometry::{Angle, Line, Polygon, Rect, Segment, Vector};
use geom2d::transform::{fit_rect_inside, rotation, AffineTransf};

fn main() -> geom2d::Result<()> {
    // Default: WARN for everything, INFO for geom2d and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geom2d=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tour=info".parse().unwrap_or_default())
        .add_directive("geom2d=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    transforms();
    segments();
    polygons()?;
    rects();

    Ok(())
}

fn transforms() {
    let t = AffineTransf::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    let p = Vector::new(2.0, 3.0);
    let image = t.apply_to_point(&p);
    tracing::info!(%t, point = %p, %image, "apply to point");

    let back = t.inverse().apply_to_point(&t.apply_to_point(&p));
    tracing::info!(point = %back, "inverse round trip");

    let other = AffineTransf::new(6.0, 5.0, 4.0, 3.0, 2.0, 1.0);
    tracing::info!(appended = %t.append(&other), "append");

    let quarter = rotation(Angle::PI_HALF, &Vector::new(10.0, 20.0));
    let css = quarter.to_css_matrix();
    tracing::info!(rotation = %quarter, %css, "rotation about (10, 20)");
    tracing::info!(eigen_values = ?quarter.eigen_values(), "rotation eigen values");

    let singular = AffineTransf::new(1.0, 4.0, 0.0, 0.0, 2.0, 2.0);
    tracing::info!(invertible = singular.is_invertible(), "singular transform");
}

fn segments() {
    let one = Segment::new(Vector::new(400.0, 0.0), Vector::new(0.0, 400.0));
    let two = Segment::new(Vector::new(100.0, 100.0), Vector::new(500.0, 500.0));
    if let Some(hit) = one.intersection_with_segment(&two) {
        tracing::info!(
            point = %hit.point,
            t1 = hit.t1.value(),
            t2 = hit.t2.value(),
            "segment intersection"
        );
    }

    let closest = one.closest_point_to(&(250.0, 250.0));
    tracing::info!(point = %closest.point, t = closest.t.value(), "closest point");

    let parallel = one.parallel_at_distance(10.0);
    tracing::info!(
        hit = one.intersection_with_segment(&parallel).is_some(),
        "parallel segments"
    );
}

fn polygons() -> geom2d::Result<()> {
    let triangle = Polygon::new(vec![
        Vector::new(0.0, 0.0),
        Vector::new(200.0, 0.0),
        Vector::new(100.0, 300.0),
    ])?;
    tracing::info!(
        inside = triangle.contains_point(&(100.0, 50.0)),
        outside = triangle.contains_point(&(190.0, 290.0)),
        area = triangle.signed_area(),
        centroid = %triangle.centroid(),
        "triangle"
    );

    let crossing = Segment::new(Vector::new(100.0, 50.0), Vector::new(100.0, -20.0));
    let containment = triangle.contains_segment(&crossing);
    tracing::info!(
        points = ?triangle.intersection_with_segment(&crossing).points,
        partially = containment.partially,
        completely = containment.completely,
        "crossing segment"
    );

    if let Err(err) = Polygon::new(vec![Vector::ORIGIN, Vector::I_VERSOR]) {
        tracing::warn!(%err, "degenerate polygon rejected");
    }
    Ok(())
}

fn rects() {
    let rect = Rect::make(2.0, 4.0, 10.0, 20.0);
    let line = Line::new(Vector::new(10.0, 4.0), Vector::new(1.0, 1.0));
    let points = rect.intersection_with_line(&line);
    tracing::info!(?points, "rect crossed by line");

    let dot = Rect::make(0.0, 0.0, 0.0, 0.0);
    let grown = Rect::including_points(Some(&dot), &[(5.0, 5.0)]);
    tracing::info!(?grown, "zero-size rect grown to include a point");

    let square = Rect::make(0.0, 0.0, 10.0, 10.0);
    let frame = Rect::make(0.0, 0.0, 20.0, 10.0);
    let fit = fit_rect_inside(&square, &frame, 1.0);
    tracing::info!(transform = %fit, "fit square inside rect");
}
