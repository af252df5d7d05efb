use std::fs;
use std::io::BufReader;

use droid_util::files;
use droid_util::stream::{self, CharReader, CharWriter};
use droid_util::DroidError;
use tempdir::TempDir;

#[test]
fn file_round_trip_through_the_facade() {
    let temp_dir = TempDir::new("droid-util").unwrap();
    let source_path = temp_dir.path().join("nested/source.bin");
    let copy_path = temp_dir.path().join("other/copy.bin");
    let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();

    files::write_byte_array_to_file(&source_path, &data, false).unwrap();

    let mut input = files::open_input(&source_path).unwrap();
    let count = files::copy_to_file(&mut input, &copy_path).unwrap();
    assert_eq!(count, data.len() as u64);
    assert_eq!(files::read_file(&copy_path).unwrap(), data);

    let mut reader = BufReader::new(files::open_input(&copy_path).unwrap());
    stream::skip_fully::<u8, _>(&mut reader, 10_000).unwrap();
    let mut head = [0u8; 16];
    stream::read_fully_or_fail(&mut reader, &mut head, 0, 16).unwrap();
    assert_eq!(&head[..], &data[10_000..10_016]);
}

#[test]
fn short_file_reports_expected_and_actual() {
    let temp_dir = TempDir::new("droid-util").unwrap();
    let path = temp_dir.path().join("short.txt");
    fs::write(&path, "abc").unwrap();

    let mut input = files::open_input(&path).unwrap();
    let mut buffer = [0u8; 8];
    let err =
        stream::read_fully_or_fail(&mut input, &mut buffer, 0, 8).unwrap_err();
    assert!(matches!(
        err,
        DroidError::UnexpectedEof {
            expected: 8,
            actual: 3
        }
    ));
    assert_eq!(err.to_string(), "Length to read: 8 actual: 3");
}

#[test]
fn text_is_copied_as_chars() {
    let temp_dir = TempDir::new("droid-util").unwrap();
    let path = temp_dir.path().join("text.txt");
    let text = "héllo wörld ✓\n".repeat(1_000);
    files::write_string_to_file(&path, &text, false).unwrap();

    let mut reader = CharReader::new(files::open_input(&path).unwrap());
    let mut writer = CharWriter::new(Vec::<u8>::new());
    let count = stream::copy_large::<char, _, _>(&mut reader, &mut writer)
        .unwrap();

    assert_eq!(count, text.chars().count() as u64);
    assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), text);
}

#[test]
fn line_endings_do_not_affect_comparison() {
    let temp_dir = TempDir::new("droid-util").unwrap();
    let unix = temp_dir.path().join("unix.txt");
    let dos = temp_dir.path().join("dos.txt");
    files::write_lines(&unix, ["one", "two"], Some("\n"), false).unwrap();
    files::write_lines(&dos, ["one", "two"], Some("\r\n"), false).unwrap();

    assert!(files::content_equals_ignore_eol(&unix, &dos).unwrap());
    assert_eq!(files::read_lines(&dos).unwrap(), vec!["one", "two"]);
}

#[test]
fn file_urls_are_copied() {
    let temp_dir = TempDir::new("droid-util").unwrap();
    let source = temp_dir.path().join("page.html");
    let destination = temp_dir.path().join("downloads/page.html");
    fs::write(&source, "<html></html>").unwrap();

    let urls = files::to_urls(&[&source]).unwrap();
    assert_eq!(files::to_file(&urls[0]).unwrap(), source);

    let count = files::copy_url_to_file(&urls[0], &destination).unwrap();
    assert_eq!(count, 13);
    assert_eq!(fs::read_to_string(destination).unwrap(), "<html></html>");
}

#[test]
fn addresses_convert_both_ways() {
    let value = droid_util::net::ip_to_int("10.0.0.1").unwrap();
    assert_eq!(droid_util::net::int_to_ip(value), "10.0.0.1");
}
