use crate::display::{display_value, format_g};
use crate::plot::Viewport;
use crate::repl::{ReplErr, Session};
use calcbrain::PlotFn;
use pretty_assertions::assert_eq;
use std::rc::Rc;

#[test]
fn test_format_g() {
    assert_eq!(format_g(7.0, 9), "7");
    assert_eq!(format_g(-7.0, 9), "-7");
    assert_eq!(format_g(0.2, 9), "0.2");
    assert_eq!(format_g(0.0, 9), "0");
    assert_eq!(format_g(0.0001, 9), "0.0001");
    assert_eq!(format_g(0.00001, 9), "1e-05");
    assert_eq!(format_g(123456789.0, 9), "123456789");
    assert_eq!(format_g(1234567890.0, 9), "1.23456789e+09");
    assert_eq!(format_g(std::f64::consts::PI, 9), "3.14159265");
    assert_eq!(format_g(1.0 / 3.0, 9), "0.333333333");
    assert_eq!(format_g(f64::INFINITY, 9), "inf");
}

#[test]
fn test_display_value() {
    assert_eq!(display_value(Some(2.5)), "2.5");
    assert_eq!(display_value(None), " ");
}

#[test]
fn test_session_history_label() {
    let mut session = Session::new();
    assert_eq!(session.history_label(), " ");
    session.execute("3 4 5 ✕ +").unwrap();
    assert_eq!(session.history_label(), "3 + 4 ✕ 5 =");
    assert_eq!(session.display(), "23");
    session.execute("C").unwrap();
    assert_eq!(session.history_label(), " ");
    assert_eq!(session.display(), "0");
}

#[test]
fn test_session_keyboard_aliases() {
    let mut session = Session::new();
    session.execute("2 pi *").unwrap();
    assert_eq!(session.history_label(), "2 * pi =");
    assert_eq!(session.display(), "6.28318531");
}

#[test]
fn test_session_variables() {
    let mut session = Session::new();
    session.execute("x 2 ✕").unwrap();
    assert_eq!(session.display(), " ");
    assert!(matches!(session.execute("→x"), Err(ReplErr::NoValue(_))));
    session.execute("C 1.5 →x").unwrap();
    assert_eq!(session.display(), " ");
    session.execute("x 2 ✕").unwrap();
    assert_eq!(session.display(), "3");
    assert!(matches!(session.execute("→"), Err(ReplErr::EmptyName(_))));
    session.execute("10 >y y").unwrap();
    assert_eq!(session.display(), "10");
    assert_eq!(session.execute("history").unwrap(), vec!["[x, 2.0, ✕, y]"]);
}

#[test]
fn test_session_typed_number_is_assigned_not_entered() {
    let mut session = Session::new();
    session.execute("3 4 +").unwrap();
    session.execute("2.5 →x").unwrap();
    assert_eq!(session.history_label(), "3 + 4 =");
    assert_eq!(session.display(), "7");
    session.execute("x ✕").unwrap();
    assert_eq!(session.display(), "17.5");
    session.execute("C 5 →y").unwrap();
    session.execute("9 y").unwrap();
    assert_eq!(session.execute("history").unwrap(), vec!["[9.0, y]"]);
    assert_eq!(session.display(), "5");
}

#[test]
fn test_session_unknown_symbol_is_a_variable() {
    let mut session = Session::new();
    session.execute("3 foo").unwrap();
    assert_eq!(session.history_label(), "3, foo =");
    assert_eq!(session.display(), " ");
    assert_eq!(session.execute("history").unwrap(), vec!["[3.0, foo]"]);
}

#[test]
fn test_session_bad_arguments() {
    let mut session = Session::new();
    assert!(matches!(session.execute("zoom"), Err(ReplErr::BadArgument { cmd: "zoom", .. })));
    assert!(matches!(session.execute("pan 1"), Err(ReplErr::BadArgument { cmd: "pan", .. })));
    assert!(matches!(session.execute("3x"), Err(ReplErr::BadArgument { cmd: "number", .. })));
    assert!(matches!(session.execute("+ plot"), Err(ReplErr::NotPlottable)));
}

#[test]
fn test_evaluate_once() {
    let mut session = Session::new();
    assert_eq!(session.evaluate_once("10 2 ÷").unwrap(), "10 ÷ 2 = 0.2");
}

#[test]
fn test_viewport_mapping() {
    let mut viewport = Viewport::new(20, 11);
    assert_eq!(viewport.origin, (10.0, 5.0));
    assert_eq!(viewport.column_to_units(10), 0.0);
    assert_eq!(viewport.column_to_units(15), 0.5);
    assert_eq!(viewport.units_to_row(0.0), Some(5));
    assert_eq!(viewport.units_to_row(0.2), Some(3));
    assert_eq!(viewport.units_to_row(1.0), None);
    assert_eq!(viewport.units_to_row(f64::NAN), None);

    viewport.pan(-4.0, 2.0);
    assert_eq!(viewport.origin, (6.0, 7.0));
    viewport.zoom(2.0);
    assert_eq!(viewport.cells_per_unit, 20.0);
    viewport.zoom(-1.0);
    assert_eq!(viewport.cells_per_unit, 20.0);
    viewport.center();
    assert_eq!(viewport.origin, (10.0, 5.0));
}

#[test]
fn test_render_line() {
    let viewport = Viewport { width: 5, height: 5, origin: (2.0, 2.0), cells_per_unit: 1.0 };
    let identity: PlotFn = Rc::new(|x: f64| x);
    let expected = [
        "  x",
        "  | *",
        "  |*",
        "--*--",
        " *|",
        "* |",
    ];
    let rendered = viewport.render(&identity, "x");
    assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn test_session_plot() {
    let mut session = Session::new();
    let out = session.execute("x sin plot").unwrap();
    assert_eq!(out.len(), 1);
    let plot = &out[0];
    assert_eq!(plot.lines().next().map(str::trim), Some("sin(x)"));
    assert_eq!(plot.lines().count(), 1 + session.viewport.height);
    assert!(plot.contains('*'));
}
