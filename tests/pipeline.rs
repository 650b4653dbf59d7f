use std::io::Write;
use std::path::Path;

use signal_viewer::config::Settings;
use signal_viewer::{run_pipeline, ConfigStore, LoadErrorKind, Pipeline, SeriesName};
use tempfile::NamedTempFile;

fn file_with(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn ne_bytes(values: &[i16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

#[test]
#[cfg(target_endian = "little")]
fn little_endian_bytes_decode_to_expected_series() {
    let file = file_with(&[0x01, 0x00, 0x02, 0x00]);
    let bundle = run_pipeline(file.path(), 50).unwrap();
    assert_eq!(bundle.value, vec![1, 2]);
    assert_eq!(bundle.differential, vec![0, 1]);
    assert_eq!(bundle.integrate, vec![1, 3]);
}

#[test]
fn series_are_aligned_and_follow_their_laws() {
    let samples: Vec<i16> = vec![-300, 12, 12, 7000, -32768, 32767, 0, 5];
    let file = file_with(&ne_bytes(&samples));
    let bundle = run_pipeline(file.path(), 50).unwrap();

    assert_eq!(bundle.value, samples);
    assert_eq!(bundle.differential.len(), samples.len());
    assert_eq!(bundle.integrate.len(), samples.len());
    assert_eq!(bundle.differential[0], 0);

    let mut total = 0i64;
    for i in 0..samples.len() {
        total += i64::from(samples[i]);
        assert_eq!(bundle.integrate[i], total);
        if i > 0 {
            let expected = i32::from(samples[i]) - i32::from(samples[i - 1]);
            assert_eq!(bundle.differential[i], expected);
        }
    }
}

#[test]
fn odd_trailing_byte_is_ignored() {
    let even = ne_bytes(&[10, -20, 30]);
    let mut odd = even.clone();
    odd.push(0x7F);

    let a = run_pipeline(file_with(&even).path(), 50).unwrap();
    let b = run_pipeline(file_with(&odd).path(), 50).unwrap();
    assert_eq!(a.len(), 3);
    assert_eq!(a, b);
}

#[test]
fn empty_file_is_rejected() {
    let file = file_with(&[]);
    let err = run_pipeline(file.path(), 50).unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Empty);
}

#[test]
fn oversized_file_is_rejected() {
    let file = file_with(&vec![0u8; 3 * 1024]);
    let err = run_pipeline(file.path(), 2).unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::TooLarge);
    assert!(err.user_message().contains("please choose another file"));
}

#[test]
fn directory_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_pipeline(dir.path(), u64::MAX).unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Unreadable);
}

#[test]
fn repeated_runs_are_identical() {
    let file = file_with(&ne_bytes(&[3, 1, 4, 1, 5, 9, 2, 6]));
    let first = run_pipeline(file.path(), 50).unwrap();
    let second = run_pipeline(file.path(), 50).unwrap();
    assert_eq!(first, second);
}

#[test]
fn settings_file_sets_the_size_ceiling() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, r#"{"MaxFileSize": 1, "Foo": "bar"}"#).unwrap();

    let pipeline = Pipeline::new(ConfigStore::load(&config_path));
    assert_eq!(pipeline.config().settings().max_file_size, 1);

    let small = file_with(&ne_bytes(&[1; 512]));
    assert_eq!(pipeline.load(small.path()).unwrap().len(), 512);

    let large = file_with(&ne_bytes(&[1; 513]));
    assert_eq!(
        pipeline.load(large.path()).unwrap_err().kind(),
        LoadErrorKind::TooLarge
    );
}

#[test]
fn broken_settings_file_keeps_default_ceiling() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, "MaxFileSize = 1").unwrap();

    let store = ConfigStore::load(&config_path);
    assert_eq!(store.settings(), &Settings::default());
    assert_eq!(store.max_file_size_kib(), 50);
}

#[test]
fn plot_points_cover_every_series() {
    let file = file_with(&ne_bytes(&[2, 4]));
    let bundle = run_pipeline(Path::new(file.path()), 50).unwrap();
    assert_eq!(bundle.plot_points(SeriesName::Value), vec![[0.0, 2.0], [1.0, 4.0]]);
    assert_eq!(bundle.plot_points(SeriesName::Differential), vec![[0.0, 0.0], [1.0, 2.0]]);
    assert_eq!(bundle.plot_points(SeriesName::Integrate), vec![[0.0, 2.0], [1.0, 6.0]]);
}
