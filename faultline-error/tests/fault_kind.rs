use faultline_error::{report, FaultKind, SystemFault, UserFault};

fn http_status(err: &SystemFault) -> u16 {
    match FaultKind::of(err.cause()) {
        FaultKind::User => 400,
        FaultKind::System => 500,
        FaultKind::Foreign => 502,
        _ => 500,
    }
}

#[test]
fn test_match_with_wildcard_arm() {
    let user = SystemFault::wrap(UserFault::new("bad_input", "bad input"), "handler failed");
    assert_eq!(http_status(&user), 400);

    let nested = SystemFault::wrap(SystemFault::new("db down"), "handler failed");
    assert_eq!(http_status(&nested), 500);

    let foreign = SystemFault::wrap("upstream closed", "handler failed");
    assert_eq!(http_status(&foreign), 502);
}

#[test]
fn test_report_logs_without_rendering_side_effects() {
    let err = SystemFault::wrap(SystemFault::new("c"), "f");
    let rendered = err.to_report_string();

    assert_eq!(report(&err), FaultKind::System);
    assert_eq!(err.to_report_string(), rendered);
}
