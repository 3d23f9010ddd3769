use super::*;
use approx::assert_abs_diff_eq;
use clap::{CommandFactory, Parser};
use std::io::{Cursor, ErrorKind};

fn param() -> FlipParam {
    FlipParam {
        spacing_a: 3.,
        spacing_b: 2.,
        length: 500.,
        width: 200.,
        thickness: 0.5,
        fillet_radius: 30.,
    }
}

#[test]
fn command() {
    Entry::command().debug_assert();
}

#[test]
fn parse_args() {
    let entry = Entry::try_parse_from([
        "phe-flip",
        "--spacing-a",
        "-0.5",
        "--fillet-radius",
        "12",
        "--baseline",
        "side-a",
        "--no-pause",
    ])
    .unwrap();
    assert_eq!(entry.values.spacing_a, Some(-0.5));
    assert_eq!(entry.values.fillet_radius, Some(12.));
    assert_eq!(entry.values.width, None);
    assert_eq!(entry.baseline, Baseline::SideA);
    assert!(entry.no_pause);
    assert!(!entry.raw);

    let entry = Entry::try_parse_from(["phe-flip"]).unwrap();
    assert_eq!(entry.baseline, Baseline::Wider);
    assert!(Entry::try_parse_from(["phe-flip", "--thickness", "abc"]).is_err());
}

#[test]
fn prompt_again() {
    let mut input = Cursor::new("abc\n\n2.5\n");
    let mut output = Vec::new();
    let v = prompt::read_value(&mut input, &mut output, "Plate width", false).unwrap();
    assert_eq!(v, 2.5);
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches(" Plate width (mm): ").count(), 3);
    assert_eq!(output.matches("Invalid input").count(), 2);
}

#[test]
fn prompt_broken_encoding() {
    let mut input = Cursor::new(&b"\xff\xfe\n2.5\n"[..]);
    let mut output = Vec::new();
    let v = prompt::read_value(&mut input, &mut output, "Plate width", false).unwrap();
    assert_eq!(v, 2.5);
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("Invalid input").count(), 1);
}

#[test]
fn prompt_closed() {
    let mut input = Cursor::new("abc\n");
    let err = prompt::read_value(&mut input, &mut Vec::new(), "Plate width", false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn collect_missing() {
    let values = Values {
        spacing_a: Some(3.),
        thickness: Some(0.5),
        ..Values::default()
    };
    let mut input = Cursor::new("2\n500\n200\n30\n");
    let mut output = Vec::new();
    let p = values.collect(&mut input, &mut output, false).unwrap();
    assert_eq!(p, param());
    let output = String::from_utf8(output).unwrap();
    assert!(!output.contains("A-side"));
    let b = output.find("B-side channel spacing").unwrap();
    let l = output.find("Plate length").unwrap();
    let r = output.find("Fillet radius").unwrap();
    assert!(b < l && l < r);
}

#[test]
fn report_format() {
    let flip = param().flip().unwrap();
    let mut output = Vec::new();
    report::report(&mut output, &flip, Baseline::Wider, false).unwrap();
    let output = String::from_utf8(output).unwrap();
    for line in [
        "Equidistant offset:    0.0845 mm",
        "Fold angle:            9.59 deg",
        "Flip angle:            99.59 deg",
        "Draft angle:           9.59 deg",
        "Adjusted length:       499.8310 mm",
        "Adjusted width:        199.8310 mm",
        "Adjusted fillet:       29.9155 mm",
        "on the wider channel side",
        "by YanMing",
    ] {
        assert!(output.contains(line), "missing {line:?} in\n{output}");
    }
    assert!(!output.contains('\x1b'));
}

#[test]
fn report_colored() {
    let flip = param().flip().unwrap();
    let mut output = Vec::new();
    report::report(&mut output, &flip, Baseline::Wider, true).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains('\x1b'));
    assert!(output.contains("0.0845 mm"));
}

#[test]
fn raw_record() {
    let p = param();
    let flip = p.flip().unwrap();
    let mut output = Vec::new();
    let mut logger = Logger::new(&mut output);
    logger.top_title("param").unwrap();
    logger.field("baseline", Baseline::Wider).unwrap();
    logger.log(p).unwrap();
    logger.title("flip").unwrap();
    logger.log(flip).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("[param]\nbaseline=wider\nspacing_a=3\nspacing_b=2\n"));
    assert!(output.contains("\n\n[flip]\noffset="));
    // Full precision survives the record
    let offset = output
        .lines()
        .find_map(|line| line.strip_prefix("offset="))
        .unwrap();
    assert_eq!(offset.parse::<f64>().unwrap(), flip.offset);
    assert_abs_diff_eq!(flip.offset, 0.5 / 35f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn raw_record_rejects_nested() {
    let mut output = Vec::new();
    let mut logger = Logger::new(&mut output);
    assert!(logger.log(vec![1., 2.]).is_err());
}

#[test]
fn pause_on_closed_input() {
    let mut output = Vec::new();
    prompt::pause(&mut Cursor::new(""), &mut output).unwrap();
    assert_eq!(output, b"Press Enter to exit...");
}

#[test]
fn report_side_a_note() {
    let flip = param().flip_with(Baseline::SideA).unwrap();
    let mut output = Vec::new();
    report::report(&mut output, &flip, Baseline::SideA, false).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("on the A channel side"));
    let credit = output.lines().last().unwrap();
    assert_eq!(credit, format!("{:30}by YanMing", ""));
}

fn session(args: &[&str], input: &str) -> (bool, String, String) {
    let entry = Entry::try_parse_from(args).unwrap();
    let mut output = Vec::new();
    let mut error = Vec::new();
    let ok = entry
        .run(&mut Cursor::new(input), &mut output, &mut error)
        .unwrap();
    let output = String::from_utf8(output).unwrap();
    let error = String::from_utf8(error).unwrap();
    (ok, output, error)
}

#[test]
fn session_report() {
    let (ok, output, error) = session(&["phe-flip", "--no-color"], "3\n2\n0.5\n500\n200\n30\n\n");
    assert!(ok);
    assert!(error.is_empty());
    let title = output.find("PHE Flip Calculator").unwrap();
    let offset = output.find("Equidistant offset:    0.0845 mm").unwrap();
    assert!(title < offset);
    assert!(output.ends_with("Press Enter to exit..."));
}

#[test]
fn session_error_pauses() {
    // hypotenuse = 0.5, sine = 2
    let input = "-0.5\n0\n0.5\n500\n200\n30\n\n";
    let (ok, output, error) = session(&["phe-flip", "--no-color"], input);
    assert!(!ok);
    assert!(error.starts_with("error: "));
    assert!(error.contains("outside [-1, 1]"));
    assert!(!output.contains("Result:"));
    assert!(output.ends_with("Press Enter to exit..."));

    let (ok, output, _) = session(&["phe-flip", "--no-color", "--no-pause"], input);
    assert!(!ok);
    assert!(!output.contains("Press Enter"));
}

#[test]
fn session_input_closed_pauses() {
    let (ok, output, error) = session(&["phe-flip", "--no-color"], "3\n");
    assert!(!ok);
    assert!(error.contains("input closed before B-side channel spacing"));
    assert!(output.ends_with("Press Enter to exit..."));
}

#[test]
fn session_raw() {
    let args = ["phe-flip", "--raw", "--no-color", "--spacing-a", "3", "--spacing-b", "2"];
    let (ok, output, error) = session(&args, "0.5\n500\n200\n30\n");
    assert!(ok);
    assert!(output.starts_with("[param]\nbaseline=wider\nspacing_a=3\n"));
    assert!(!output.contains("Press Enter"));
    assert!(error.contains("Plate thickness (mm): "));
}
