use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tokensmith_core::CompileOptions;
use tokensmith_source::{
    compile_dir, read_artifact, ArtifactWriter, DirectorySource, DocumentSource, WriteOptions,
};

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn relative(root: &Path, paths: Vec<std::path::PathBuf>) -> Vec<String> {
    paths
        .into_iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn discovery_is_sorted_recursive_and_filtered() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "b.json", "{}");
    write(root, "a.json", "{}");
    write(root, "nested/z.json", "{}");
    write(root, "nested/deeper/y.json", "{}");
    write(root, "$metadata.json", "{}");
    write(root, "nested/$themes.json", "[]");
    write(root, "notes.txt", "not tokens");

    let paths = DirectorySource::new(root).discover().unwrap();
    assert_eq!(
        relative(root, paths),
        vec!["a.json", "b.json", "nested/deeper/y.json", "nested/z.json"]
    );
}

#[test]
fn end_to_end_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("import");
    write(&root, "a.json", r##"{ "color": { "brand": { "value": "#112233" } } }"##);
    write(
        &root,
        "b.json",
        r#"{ "spacing": { "md": { "value": 16 } }, "width": { "100": { "value": "100" } } }"#,
    );

    let output = compile_dir(&root, CompileOptions::default()).unwrap();
    assert_eq!(
        output.css,
        ":root {\n  --color-brand: #112233;\n  --spacing-md: 16;\n  --width-100: 100px;\n}\n"
    );

    let out_path = temp_dir.path().join("styles/tokens.css");
    ArtifactWriter::new(&out_path, WriteOptions::default())
        .write(&output.css)
        .unwrap();
    assert_eq!(read_artifact(&out_path).unwrap().unwrap(), output.css);
}

#[test]
fn metadata_files_never_reach_the_collector() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "$themes.json", r#"{ "leak": { "value": "x" } }"#);
    write(root, "core.json", r#"{ "kept": { "value": "y" } }"#);

    let output = compile_dir(root, CompileOptions::default()).unwrap();
    assert_eq!(output.css, ":root {\n  --kept: y;\n}\n");
}

#[test]
fn missing_directory_is_empty_build() {
    let temp_dir = TempDir::new().unwrap();
    let output = compile_dir(temp_dir.path().join("nope"), CompileOptions::default()).unwrap();
    assert_eq!(output.css, ":root {\n}\n");
    assert!(output.report.skipped.is_empty());
}

#[test]
fn later_path_overrides_earlier_path() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "1-base.json", r#"{ "x": { "value": "base" } }"#);
    write(root, "2-theme.json", r#"{ "x": { "value": "theme" } }"#);

    let mut source = DirectorySource::new(root);
    let docs = source.documents().unwrap();
    assert_eq!(docs.len(), 2);

    let output = compile_dir(root, CompileOptions::default()).unwrap();
    assert_eq!(output.css, ":root {\n  --x: theme;\n}\n");
}

#[test]
fn writer_replaces_existing_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("tokens.css");
    fs::write(&out_path, "old").unwrap();

    let writer = ArtifactWriter::new(&out_path, WriteOptions::default());
    writer.write(":root {\n}\n").unwrap();
    assert_eq!(fs::read_to_string(&out_path).unwrap(), ":root {\n}\n");

    let plain = ArtifactWriter::new(
        &out_path,
        WriteOptions {
            atomic: false,
            ..WriteOptions::default()
        },
    );
    plain.write(":root {\n  --a: 1;\n}\n").unwrap();
    assert_eq!(fs::read_to_string(&out_path).unwrap(), ":root {\n  --a: 1;\n}\n");
}

#[test]
fn read_artifact_missing_is_none() {
    let temp_dir = TempDir::new().unwrap();
    assert!(read_artifact(&temp_dir.path().join("absent.css")).unwrap().is_none());
}
