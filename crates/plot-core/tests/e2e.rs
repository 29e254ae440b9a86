// File: crates/plot-core/tests/e2e.rs
// Purpose: End-to-end draw of a small single-series plot with a gap.

mod common;

use plot_core::{Placement, Point, RecordingSurface, Rgb, SeriesSpec, PALETTE};

#[test]
fn single_series_with_gap() {
    let (mut plot, host) = common::plot(200, 150);
    let values = [Some(0.0), Some(5.0), Some(10.0), None, Some(20.0)];
    plot.add(SeriesSpec::new("a", values, 0.0, 20.0).with_long_name("Series A")).unwrap();
    assert_eq!(host.repaints.get(), 1);

    let mut surface = RecordingSurface::new();
    plot.draw(&mut surface, &Placement::origin(200, 150));

    // graph spans x 50..150, y 53..75; x labels hang at 75 + 15 + 3
    let x_labels: Vec<(&str, Point)> = surface
        .texts()
        .into_iter()
        .filter(|(_, at, _)| at.y == 93)
        .map(|(t, at, _)| (t, at))
        .collect();
    assert_eq!(
        x_labels,
        vec![
            ("1", Point::new(47, 93)),
            ("2", Point::new(72, 93)),
            ("3", Point::new(97, 93)),
            ("4", Point::new(122, 93)),
            ("5", Point::new(147, 93)),
        ]
    );

    // 22px tall, 6 ticks over 0..20 -> every third value, left of the axis
    let y_labels: Vec<&str> = surface
        .texts()
        .into_iter()
        .filter(|(_, at, _)| at.x < 50 && at.y > 53 && at.y < 93)
        .map(|(t, _, _)| t)
        .collect();
    assert_eq!(y_labels, vec!["1", "4", "7", "10", "13", "16", "19"]);

    let paths = surface.paths();
    assert_eq!(paths.len(), 1);
    let (path, color) = paths[0];
    assert_eq!(color, PALETTE[0]);
    assert_eq!(
        path.subpaths(),
        vec![
            vec![Point::new(50, 75), Point::new(75, 69), Point::new(100, 64)],
            vec![Point::new(150, 53)],
        ]
    );

    let legend: Vec<_> = surface
        .texts()
        .into_iter()
        .filter(|(t, _, _)| *t == "Series A")
        .collect();
    assert_eq!(legend.len(), 1);
    assert_eq!(legend[0].2, Rgb::new(0.0, 0.0, 0.9));
    // "Series A  " is 10 chars at 7px: centered over 200px
    assert_eq!(legend[0].1, Point::new(65, 110));
    assert_eq!(surface.depth(), 0);
}
