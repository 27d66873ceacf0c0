extern crate plotters;
use plotters::prelude::*;

use arclen::{ArcLengthCurve, Point3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // control points for the cubic bezier curve
    let cpoints = vec![(-3f64, -3f64), (3f64, -3f64), (-3f64, 3f64), (3f64, 3f64)];

    let curve = ArcLengthCurve::from_points(
        Point3::new([-3f64, -3f64, 0f64]),
        Point3::new([3f64, -3f64, 0f64]),
        Point3::new([-3f64, 3f64, 0f64]),
        Point3::new([3f64, 3f64, 0f64]),
    );
    let bezier = curve.bezier();

    // equal steps in t bunch up where the curve is slow
    let nsteps: usize = 24;
    let by_parameter: Vec<(f64, f64)> = (0..=nsteps)
        .map(|i| {
            let p = bezier.eval(i as f64 / nsteps as f64);
            (p[0], p[1])
        })
        .collect();

    // equal steps in distance are spread evenly
    let total = curve.total_length();
    let by_distance: Vec<(f64, f64)> = (0..=nsteps)
        .map(|i| {
            let p = curve.position_at_distance(total * i as f64 / nsteps as f64);
            (p[0], p[1])
        })
        .collect();

    let graph: Vec<(f64, f64)> = curve
        .samples()
        .iter()
        .map(|sample| (sample.position[0], sample.position[1]))
        .collect();

    let root = BitMapBackend::new("arc_length_sampling.png", (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Arc length vs. parameter sampling", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-4f64..4f64, -4f64..4f64)?;

    chart.configure_mesh().draw()?;

    chart
        .draw_series(PointSeries::of_element(
            cpoints.clone(),
            5,
            &BLUE,
            &|coord, size, style| {
                EmptyElement::at(coord)
                    + Circle::new((0, 0), size, style)
                    + Text::new(format!("{:?}", coord), (0, 15), ("sans-serif", 15).into_font())
            },
        ))?
        .label("Control Points of B(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(graph, &BLACK))?
        .label(format!("sample table ({} samples)", curve.sample_count()))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    chart
        .draw_series(by_parameter.into_iter().map(|c| Circle::new(c, 3, RED.filled())))?
        .label("equal steps in t")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, RED.filled()));

    chart
        .draw_series(by_distance.into_iter().map(|c| Circle::new(c, 3, GREEN.filled())))?
        .label("equal steps in distance")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, GREEN.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
