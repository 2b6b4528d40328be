use faultline_stack::{CaptureConfig, Trace};

#[inline(never)]
fn capture_here() -> Trace {
    Trace::capture(0)
}

#[test]
fn test_capture_includes_caller() {
    let trace = capture_here();

    assert!(!trace.is_empty());
    assert!(
        trace.frames().iter().any(|f| f.function.contains("capture_here")),
        "caller missing from trace:{}",
        trace
    );
}

#[test]
fn test_capture_filters_machinery() {
    let trace = capture_here();

    for frame in trace.frames() {
        let function = frame.function.trim_start_matches('<');
        assert!(!function.starts_with("backtrace::"), "leaked frame: {}", frame);
        assert!(!function.starts_with("faultline_stack::"), "leaked frame: {}", frame);
    }
}

#[test]
fn test_capture_innermost_first() {
    let trace = capture_here();
    let here = trace
        .frames()
        .iter()
        .position(|f| f.function.contains("capture_here"))
        .expect("capturing function missing from trace");
    let test = trace
        .frames()
        .iter()
        .position(|f| f.function.contains("test_capture_innermost_first"))
        .expect("test function missing from trace");

    assert!(here < test, "frames out of order:{}", trace);
}

#[test]
fn test_capture_skip() {
    let config = CaptureConfig::default();
    let full = Trace::capture_with(0, &config);
    let skipped = Trace::capture_with(1, &config);

    assert!(full.len() > 1);
    assert_eq!(
        skipped.frames().first().map(|f| &f.function),
        full.frames().get(1).map(|f| &f.function)
    );
}

#[test]
fn test_rendered_shape() {
    let rendered = capture_here().render();

    assert!(rendered.starts_with("\nat "));
    assert!(rendered.contains("\n   --> "));
}
