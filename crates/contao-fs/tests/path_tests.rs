use assert_fs::TempDir;
use assert_fs::prelude::*;
use contao_fs::NormalizedPath;
use rstest::rstest;

#[rstest]
#[case("srv/site/app", "srv/site/app")]
#[case("srv\\site\\app", "srv/site/app")]
#[case("srv/site\\app", "srv/site/app")]
fn test_normalizes_separators(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("/srv/site");
    assert_eq!(base.join("app").as_str(), "/srv/site/app");
}

#[test]
fn test_join_onto_trailing_slash() {
    let base = NormalizedPath::new("/srv/site/");
    assert_eq!(base.join("vendor/contao/core").as_str(), "/srv/site/vendor/contao/core");
}

#[test]
fn test_resolve_relative_joins() {
    let cwd = NormalizedPath::new("/srv/site");
    assert_eq!(cwd.resolve("app").as_str(), "/srv/site/app");
    assert_eq!(cwd.resolve("../web").as_str(), "/srv/site/../web");
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("/srv/site/composer");
    assert_eq!(path.parent().unwrap().as_str(), "/srv/site");
}

#[test]
fn test_is_absolute() {
    assert!(NormalizedPath::new("/srv/site").is_absolute());
    assert!(NormalizedPath::new("D:\\htdocs").is_absolute());
    assert!(!NormalizedPath::new("app").is_absolute());
}

#[test]
fn test_probes_false_for_nonexistent() {
    let path = NormalizedPath::new("/nonexistent/path/that/does/not/exist");
    assert!(!path.is_dir());
    assert!(!path.is_file());
}

#[test]
fn test_parent_of_filesystem_root_is_none() {
    assert_eq!(NormalizedPath::new("/srv").parent().unwrap().as_str(), "/");
    assert!(NormalizedPath::new("/").parent().is_none());
}

#[test]
fn test_canonicalize_collapses_dot_segments() {
    let temp = TempDir::new().unwrap();
    temp.child("composer").create_dir_all().unwrap();

    let root = NormalizedPath::canonicalize(temp.path()).unwrap();
    let via_dots = NormalizedPath::canonicalize(temp.path().join("composer/..")).unwrap();
    assert_eq!(via_dots, root);
    assert!(root.is_absolute());
}

#[test]
fn test_canonicalize_missing_path_is_io_error() {
    let err = NormalizedPath::canonicalize("/nonexistent/path/that/does/not/exist").unwrap_err();
    assert!(matches!(err, contao_fs::Error::Io { .. }));
}

#[test]
fn test_to_absolute_keeps_absolute_paths_verbatim() {
    let path = NormalizedPath::new("/srv/site/composer");
    assert_eq!(path.to_absolute().unwrap(), path);
}

#[test]
fn test_to_absolute_resolves_dot() {
    let absolute = NormalizedPath::new(".").to_absolute().unwrap();
    assert!(absolute.is_absolute());
    assert_eq!(absolute, NormalizedPath::current_dir().unwrap());
}

#[test]
fn test_to_absolute_resolves_dot_segments_in_absolute_paths() {
    let temp = TempDir::new().unwrap();
    temp.child("composer").create_dir_all().unwrap();

    let dotted = NormalizedPath::new(temp.path().join("composer/."));
    assert_eq!(
        dotted.to_absolute().unwrap(),
        NormalizedPath::canonicalize(temp.path().join("composer")).unwrap()
    );
}
