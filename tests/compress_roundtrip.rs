use huffpack::{run, CLIParser};
use std::path::PathBuf;
use std::{env, fs};

const INPUT_TEXT_PATH: &str = "tests/fixture.txt";

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_path(relative_path: &str) -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push(relative_path);
    root_path
}

fn cleanup(paths: &[&PathBuf]) {
    for path in paths {
        if path.exists() && path.is_file() {
            fs::remove_file(path).expect("Deletion of output file failed");
        }
    }
}

#[test]
fn test_text_file_roundtrip() {
    let input_path = get_path(INPUT_TEXT_PATH);
    let archive_path = get_path("tests/result_text.bin");
    let restored_path = get_path("tests/result_text.txt");
    cleanup(&[&archive_path, &restored_path]);

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        input_path.to_str().unwrap(),
        archive_path.to_str().unwrap(),
    ]);
    run(&arguments).expect("Compression failed");
    assert!(archive_path.exists(), "Archive file was not created");

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        archive_path.to_str().unwrap(),
        restored_path.to_str().unwrap(),
        "--decompress",
    ]);
    run(&arguments).expect("Decompression failed");

    let original = fs::read_to_string(&input_path).expect("Reading input file failed");
    let restored = fs::read_to_string(&restored_path).expect("Reading restored file failed");
    assert_eq!(original, restored, "Roundtrip must restore the exact text");
}

#[test]
fn test_byte_file_roundtrip() {
    let input_path = get_path(INPUT_TEXT_PATH);
    let archive_path = get_path("tests/result_bytes.bin");
    let restored_path = get_path("tests/result_bytes.out");
    cleanup(&[&archive_path, &restored_path]);

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        input_path.to_str().unwrap(),
        archive_path.to_str().unwrap(),
        "--alphabet",
        "bytes",
    ]);
    run(&arguments).expect("Compression failed");
    assert!(archive_path.exists(), "Archive file was not created");

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        archive_path.to_str().unwrap(),
        restored_path.to_str().unwrap(),
        "--decompress",
    ]);
    run(&arguments).expect("Decompression failed");

    let original = fs::read(&input_path).expect("Reading input file failed");
    let restored = fs::read(&restored_path).expect("Reading restored file failed");
    assert_eq!(original, restored, "Roundtrip must restore the exact bytes");
}

#[test]
fn test_compressing_an_empty_file_fails() {
    let empty_path = get_path("tests/empty_input.txt");
    let archive_path = get_path("tests/empty_input.bin");
    cleanup(&[&empty_path, &archive_path]);
    fs::write(&empty_path, b"").expect("Creating empty input file failed");

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        empty_path.to_str().unwrap(),
        archive_path.to_str().unwrap(),
    ]);
    let result = run(&arguments);
    assert!(result.is_err(), "Empty input must be rejected");

    cleanup(&[&empty_path]);
}
