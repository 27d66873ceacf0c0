#[cfg(feature = "nalgebra")]
fn main() {
    use arclen::ArcLengthCurve;
    use nalgebra::Vector3;

    let curve = ArcLengthCurve::from_points(
        Vector3::new(0.0f32, 0.0, 0.0),
        Vector3::new(1.0, 2.0, 0.0),
        Vector3::new(3.0, -1.0, 0.5),
        Vector3::new(4.0, 0.0, 1.0),
    );

    let total = curve.total_length();
    let mid = curve.position_at_distance(total / 2.0);
    println!("total={:.4}, midway={:?}", total, mid);
}

#[cfg(not(feature = "nalgebra"))]
fn main() {
    eprintln!("Enable the nalgebra feature: cargo run --example nalgebra_arc_length --features nalgebra");
}
