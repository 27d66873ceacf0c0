use arclen::{ArcLengthCurve, Point3, PointNorm};

fn main() {
    let curve = ArcLengthCurve::from_points(
        Point3::new([-3.0, -3.0, 0.0]),
        Point3::new([3.0, -3.0, 0.0]),
        Point3::new([-3.0, 3.0, 0.0]),
        Point3::new([3.0, 3.0, 1.0]),
    );

    let steps = 6;
    let total = curve.total_length();
    println!(
        "total length (approx): {:.5} from {} samples",
        total,
        curve.sample_count()
    );

    let mut prev: Option<Point3<f64>> = None;
    for i in 0..steps {
        let d = total * (i as f64 / (steps - 1) as f64);
        let p = curve.position_at_distance(d);
        let gap = prev.map(|q| p.distance(q));
        match gap {
            Some(gap) => println!("i={}  d={:.4}  p={:?}  gap={:.4}", i, d, p, gap),
            None => println!("i={}  d={:.4}  p={:?}", i, d, p),
        }
        prev = Some(p);
    }
}
