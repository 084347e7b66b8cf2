use assert_fs::TempDir;
use assert_fs::prelude::*;
use contao_fs::{Error, InstallLayout, LayoutMode, NormalizedPath};

#[test]
fn test_layout_mode_display() {
    assert_eq!(format!("{}", LayoutMode::Contao3), "Contao 3");
    assert_eq!(format!("{}", LayoutMode::Contao2), "Contao 2");
}

#[test]
fn test_detect_contao3_layout() {
    let temp = TempDir::new().unwrap();
    temp.child("system/config/constants.php")
        .write_str("<?php define('VERSION', '3.5');")
        .unwrap();

    let root = NormalizedPath::new(temp.path());
    let layout = InstallLayout::detect(&root).unwrap();
    assert_eq!(layout.mode, LayoutMode::Contao3);
    assert_eq!(
        layout.constants_file(),
        root.join("system/config/constants.php")
    );
}

#[test]
fn test_detect_contao2_layout() {
    let temp = TempDir::new().unwrap();
    temp.child("system/constants.php")
        .write_str("<?php define('VERSION', '2.11');")
        .unwrap();

    let root = NormalizedPath::new(temp.path());
    let layout = InstallLayout::detect(&root).unwrap();
    assert_eq!(layout.mode, LayoutMode::Contao2);
    assert_eq!(layout.constants_file(), root.join("system/constants.php"));
}

#[test]
fn test_contao3_wins_when_both_exist() {
    let temp = TempDir::new().unwrap();
    temp.child("system/config/constants.php").touch().unwrap();
    temp.child("system/constants.php").touch().unwrap();

    let layout = InstallLayout::detect(&NormalizedPath::new(temp.path())).unwrap();
    assert_eq!(layout.mode, LayoutMode::Contao3);
}

#[test]
fn test_detect_fails_without_constants() {
    let temp = TempDir::new().unwrap();
    temp.child("system/config").create_dir_all().unwrap();

    let root = NormalizedPath::new(temp.path());
    let err = InstallLayout::detect(&root).unwrap_err();
    assert!(matches!(err, Error::ConstantsNotFound { .. }));
    assert!(err.to_string().contains("Could not find constants.php in"));
    assert!(err.to_string().contains(&root.to_native().display().to_string()));
}
