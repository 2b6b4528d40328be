//! Process-wide config lives in its own test binary so it cannot race other captures.

use faultline_stack::{global, set_global, CaptureConfig, Trace};

#[test]
fn test_set_global_applies_to_later_captures() {
    let before = Trace::capture(0);
    assert!(!before.is_empty());
    let rendered = before.render();

    set_global(CaptureConfig::default().with_max_frames(0));
    assert_eq!(global().max_frames, 0);
    assert!(Trace::capture(0).is_empty());

    set_global(CaptureConfig::default().with_max_frames(1));
    assert_eq!(Trace::capture(0).len(), 1);

    // earlier traces are values, not views of the config
    assert_eq!(before.render(), rendered);

    set_global(CaptureConfig::default());
    assert_eq!(*global(), CaptureConfig::default());
    assert!(Trace::capture(0).len() > 1);
}
