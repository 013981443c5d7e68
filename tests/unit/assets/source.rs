use super::*;

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(normalize_rel_path("a/b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("./a//b.png").unwrap(), "a/b.png");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./.").is_err());
}

#[test]
fn memory_source_serves_registered_bytes_only() {
    let src = MemoryFrameSource::new().with("f/1.png", vec![1, 2, 3]);
    assert_eq!(src.fetch("f/1.png").unwrap(), vec![1, 2, 3]);
    let err = src.fetch("f/2.png").unwrap_err();
    assert!(err.to_string().contains("f/2.png"));
}

#[test]
fn fs_source_reads_under_root_and_reports_missing_files() {
    let dir = PathBuf::from("target").join("unit_fs_source");
    std::fs::create_dir_all(dir.join("images")).unwrap();
    std::fs::write(dir.join("images").join("a.bin"), b"xyz").unwrap();

    let src = FsFrameSource::new(&dir);
    assert_eq!(src.root(), dir.as_path());
    assert_eq!(src.fetch("images/a.bin").unwrap(), b"xyz".to_vec());

    let err = src.fetch("images/missing.bin").unwrap_err();
    assert!(err.to_string().contains("missing.bin"));
    assert!(src.fetch("../escape.bin").is_err());
}
