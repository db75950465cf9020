//! Split/join round trips against real files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use axnglu_core::size::MIB;
use axnglu_core::{ErrorKind, join, split_by_parts, split_by_size};
use rstest::rstest;

// Deterministic, non-repeating-ish payload so misordered fragments show up.
fn payload(len: usize) -> Vec<u8> {
    let mut x: u32 = 0x9e37_79b9;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            (x >> 24) as u8
        })
        .collect()
}

fn source(dir: &Path, name: &str, len: usize) -> (PathBuf, Vec<u8>) {
    let path = dir.join(name);
    let data = payload(len);
    fs::write(&path, &data).unwrap();
    (path, data)
}

fn sizes(paths: &[PathBuf]) -> Vec<u64> {
    paths
        .iter()
        .map(|p| fs::metadata(p).unwrap().len())
        .collect()
}

#[test]
fn ten_megabytes_in_four_parts() {
    let tmp = tempfile::tempdir().unwrap();
    let (file, data) = source(tmp.path(), "big.bin", 10 * MIB as usize);

    let parts = split_by_parts(&file, 4, true).unwrap();
    assert_eq!(parts.len(), 4);
    assert_eq!(sizes(&parts), vec![2_621_440; 4]);
    assert!(!file.exists());

    let out = join(&parts[0], true).unwrap();
    assert_eq!(out, file);
    assert_eq!(fs::read(&out).unwrap(), data);
    assert!(parts.iter().all(|p| !p.exists()));
}

#[test]
fn one_megabyte_fragments_with_remainder() {
    let tmp = tempfile::tempdir().unwrap();
    let (file, data) = source(tmp.path(), "clip.mp4", 2_621_952);

    let parts = split_by_size(&file, "1mb", false).unwrap();
    assert_eq!(
        parts,
        vec![
            tmp.path().join("clip.mp4.001"),
            tmp.path().join("clip.mp4.002"),
            tmp.path().join("clip.mp4.003"),
        ]
    );
    assert_eq!(sizes(&parts), vec![1_048_576, 1_048_576, 524_800]);

    fs::rename(&file, tmp.path().join("clip.orig")).unwrap();
    let out = join(&parts[0], false).unwrap();
    assert_eq!(fs::metadata(&out).unwrap().len(), 2_621_952);
    assert_eq!(fs::read(&out).unwrap(), data);
}

#[rstest]
#[case(3)]
#[case(7)]
#[case(999)]
fn split_by_parts_yields_requested_count(#[case] parts: u32) {
    let tmp = tempfile::tempdir().unwrap();
    let (file, data) = source(tmp.path(), "set.dat", 999 * 13);

    let frags = split_by_parts(&file, parts, true).unwrap();
    assert_eq!(frags.len(), parts as usize);
    assert_eq!(sizes(&frags).iter().sum::<u64>(), data.len() as u64);

    join(frags.last().unwrap(), false).unwrap();
    assert_eq!(fs::read(&file).unwrap(), data);
}

#[rstest]
#[case(301)]
#[case(4096)]
#[case(65_537)]
fn byte_sizes_round_trip(#[case] part: u64) {
    let tmp = tempfile::tempdir().unwrap();
    let (file, data) = source(tmp.path(), "raw", 300_000);

    let frags = split_by_size(&file, part, true).unwrap();
    assert_eq!(frags.len() as u64, 300_000u64.div_ceil(part));

    join(&frags[0], true).unwrap();
    assert_eq!(fs::read(&file).unwrap(), data);
}

#[test]
fn size_not_smaller_than_file_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let (file, _) = source(tmp.path(), "small.txt", 1000);

    for size in ["1000", "1kb", "1gb"] {
        let err = split_by_size(&file, size, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{size}");
    }
    assert!(!tmp.path().join("small.txt.001").exists());
}

#[test]
fn single_part_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let (file, _) = source(tmp.path(), "small.txt", 1000);

    let err = split_by_parts(&file, 1, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn join_refuses_to_overwrite() {
    let tmp = tempfile::tempdir().unwrap();
    let (file, data) = source(tmp.path(), "keep.bin", 5000);

    let frags = split_by_parts(&file, 5, false).unwrap();
    let err = join(&frags[0], false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(fs::read(&file).unwrap(), data);
}
