use std::io::Write;

use apple_catcher::config::*;

#[test]
fn defaults() {
    let c = GameConfig::default();
    assert_eq!(c.frame_millis, 33);
    assert!(c.sound_enabled);
    assert_eq!(c.seed, None);
    assert_eq!(c.hold_frames, 4);
    assert_eq!(GameConfig::load(None).unwrap(), c);
}

#[test]
fn partial_file_keeps_defaults() {
    let c = GameConfig::from_toml("seed = 42\nsound_enabled = false\n").unwrap();
    assert_eq!(c.seed, Some(42));
    assert!(!c.sound_enabled);
    assert_eq!(c.frame_millis, DEFAULT_FRAME_MILLIS);
}

#[test]
fn unknown_field_rejected() {
    assert!(GameConfig::from_toml("speed = 3\n").is_err());
}

#[test]
fn zero_values_rejected() {
    assert!(GameConfig::from_toml("frame_millis = 0\n").is_err());
    assert!(GameConfig::from_toml("hold_frames = 0\n").is_err());
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "frame_millis = 16").unwrap();
    writeln!(file, "hold_frames = 2").unwrap();

    let c = GameConfig::load(Some(file.path())).unwrap();
    assert_eq!(c.frame_millis, 16);
    assert_eq!(c.hold_frames, 2);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(err.to_string().contains("nope.toml"));
}
