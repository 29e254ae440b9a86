// File: crates/plot-core/tests/series_store.rs
// Purpose: Series add/delete/find semantics through the plot controller.

mod common;

use plot_core::{PlotError, Rgb, SeriesSpec, MAX_SERIES, PALETTE};

fn spec(name: &str, n: usize) -> SeriesSpec {
    let values: Vec<f64> = (0..n).map(|i| i as f64).collect();
    SeriesSpec::dense(name, &values, 0.0, n as f64)
}

#[test]
fn seventh_series_is_rejected_and_count_stays_at_six() {
    let (mut plot, _) = common::plot(300, 200);
    for i in 0..MAX_SERIES {
        assert_eq!(plot.add(spec(&format!("s{i}"), 4)).unwrap(), i);
    }
    let err = plot.add(spec("extra", 4)).unwrap_err();
    assert!(matches!(err, PlotError::InvalidArgument(_)));
    assert_eq!(plot.series_count(), MAX_SERIES);
    assert_eq!(plot.find_by_name("extra"), None);
}

#[test]
fn delete_shifts_later_slots_as_units() {
    let (mut plot, _) = common::plot(300, 200);
    plot.add(spec("a", 3)).unwrap();
    plot.add(spec("b", 4).with_long_name("Bravo")).unwrap();
    plot.add(spec("c", 5).with_color_name("teal")).unwrap();
    let before_c = plot.series(2).unwrap().clone();

    plot.delete(1).unwrap();

    assert_eq!(plot.series_count(), 2);
    assert_eq!(plot.series(0).unwrap().short_name, "a");
    let moved = plot.series(1).unwrap();
    assert_eq!(moved, &before_c);
    assert_eq!(moved.len(), 5);
    assert_eq!(moved.color, Rgb::from_u8(0, 128, 128));
    assert_eq!(plot.find_by_name("c"), Some(1));
    assert_eq!(plot.find_by_name("b"), None);
}

#[test]
fn delete_at_count_is_out_of_range() {
    let (mut plot, _) = common::plot(300, 200);
    plot.add(spec("a", 3)).unwrap();
    plot.add(spec("b", 3)).unwrap();
    assert!(plot.delete(2).is_err());
    assert!(plot.delete(99).is_err());
    assert_eq!(plot.series_count(), 2);
    plot.delete(1).unwrap();
    plot.delete(0).unwrap();
    assert!(plot.delete(0).is_err());
}

#[test]
fn labels_default_to_one_based_indices() {
    let (mut plot, _) = common::plot(300, 200);
    plot.add(spec("a", 4)).unwrap();
    let s = plot.series(0).unwrap();
    assert_eq!(s.x_labels, vec!["1", "2", "3", "4"]);
    assert_eq!(s.long_name, "a");
}

#[test]
fn supplied_labels_and_names_are_kept() {
    let (mut plot, _) = common::plot(300, 200);
    plot.add(spec("t", 3).with_labels(["Mon", "Tue", "Wed"]).with_long_name("Temperature"))
        .unwrap();
    let s = plot.series(0).unwrap();
    assert_eq!(s.x_labels, vec!["Mon", "Tue", "Wed"]);
    assert_eq!(s.long_name, "Temperature");
}

#[test]
fn missing_required_fields_are_rejected_without_side_effects() {
    let (mut plot, host) = common::plot(300, 200);
    let cases = [
        SeriesSpec { values: None, ..spec("a", 3) },
        SeriesSpec { min: None, ..spec("a", 3) },
        SeriesSpec { max: None, ..spec("a", 3) },
        SeriesSpec { short_name: None, ..spec("a", 3) },
        spec("a", 3).with_color_name("no-such-color"),
    ];
    for case in cases {
        assert!(matches!(plot.add(case), Err(PlotError::InvalidArgument(_))));
    }
    assert_eq!(plot.series_count(), 0);
    assert_eq!(host.repaints.get(), 0);
}

#[test]
fn palette_follows_slot_and_override_does_not_leak() {
    let (mut plot, _) = common::plot(300, 200);
    plot.add(spec("a", 2).with_color_name("black")).unwrap();
    plot.add(spec("b", 2)).unwrap();
    assert_eq!(plot.series(0).unwrap().color, Rgb::new(0.0, 0.0, 0.0));
    assert_eq!(plot.series(1).unwrap().color, PALETTE[1]);
    assert_eq!(PALETTE[0], Rgb::new(0.0, 0.0, 0.9));
}

#[test]
fn find_by_name_returns_first_match() {
    let (mut plot, _) = common::plot(300, 200);
    plot.add(spec("dup", 2)).unwrap();
    plot.add(spec("other", 2)).unwrap();
    plot.add(spec("dup", 2)).unwrap();
    assert_eq!(plot.find_by_name("dup"), Some(0));
    assert_eq!(plot.find_by_name("missing"), None);
}

#[test]
fn add_resets_window_and_mutations_request_repaint() {
    let (mut plot, host) = common::plot(300, 200);
    plot.add(spec("a", 10)).unwrap();
    assert_eq!((plot.first(), plot.last()), (0, 10));
    plot.set_range(2, 5).unwrap();
    plot.add(spec("b", 7)).unwrap();
    assert_eq!((plot.first(), plot.last()), (0, 7));
    plot.delete(0).unwrap();
    assert_eq!(host.repaints.get(), 3);
}

#[test]
fn range_setters_validate_and_do_not_repaint() {
    let (mut plot, host) = common::plot(300, 200);
    plot.add(spec("a", 10)).unwrap();
    let after_add = host.repaints.get();

    plot.set_first(3).unwrap();
    plot.set_last(8).unwrap();
    assert_eq!((plot.first(), plot.last()), (3, 8));
    assert!(plot.set_first(9).is_err());
    assert!(plot.set_last(2).is_err());
    assert!(plot.set_range(6, 5).is_err());
    assert_eq!((plot.first(), plot.last()), (3, 8));
    assert_eq!(host.repaints.get(), after_add);

    plot.redraw_to(10).unwrap();
    assert_eq!(plot.last(), 10);
    assert_eq!(host.repaints.get(), after_add + 1);
}
