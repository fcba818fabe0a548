use super::*;

#[test]
fn session_path_formats_expected_path() {
    assert_eq!(session_path(1), "api/session/1");
}

#[test]
fn participation_path_formats_expected_path() {
    assert_eq!(participation_path(3, 12), "api/session/3/participate/12");
}
