use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_font").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_files_fall_through_to_builtin() {
    let sources = vec![
        FontSource::File(PathBuf::from("/definitely/missing/Bold.ttf")),
        FontSource::File(PathBuf::from("/definitely/missing/Regular.ttf")),
        FontSource::Builtin,
    ];
    let font = resolve_font(&sources, 45);
    assert!(font.is_builtin());
    assert_eq!(font.source(), FontSource::Builtin);
    assert_eq!(font.size_px(), None);
}

#[test]
fn resolution_is_total_without_builtin_entry() {
    let font = resolve_font(&[], 45);
    assert!(font.is_builtin());

    let only_missing = [FontSource::File(PathBuf::from("/nope.ttf"))];
    assert!(resolve_font(&only_missing, 45).is_builtin());
}

#[test]
fn builtin_first_wins_over_later_files() {
    let sources = vec![
        FontSource::Builtin,
        FontSource::File(PathBuf::from(DEJAVU_SANS)),
    ];
    assert!(resolve_font(&sources, 45).is_builtin());
}

#[test]
fn corrupt_font_file_is_skipped() {
    let dir = scratch_dir("corrupt");
    let path = dir.join("broken.ttf");
    std::fs::write(&path, b"not a truetype file").unwrap();

    let err = load_font_file(&path, 45).unwrap_err();
    assert!(matches!(err, ClipmarkError::Font(_)));

    let font = resolve_font(&[FontSource::File(path)], 45);
    assert!(font.is_builtin());
}

#[test]
fn zero_size_is_unavailable() {
    let err = load_font_file(Path::new(DEJAVU_SANS), 0).unwrap_err();
    assert!(matches!(err, ClipmarkError::Font(_)));
}

#[test]
fn system_font_loads_when_present() {
    let path = Path::new(DEJAVU_SANS_BOLD);
    if !path.is_file() {
        return;
    }
    let font = resolve_font(&FontSource::default_chain(), 45);
    assert_eq!(font.source(), FontSource::File(path.to_path_buf()));
    assert_eq!(font.size_px(), Some(45.0));
}

#[test]
fn display_names_sources() {
    assert_eq!(FontSource::Builtin.to_string(), "builtin");
    assert_eq!(
        FontSource::File(PathBuf::from("/a/b.ttf")).to_string(),
        "/a/b.ttf"
    );
}
