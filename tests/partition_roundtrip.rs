use linesort::classify::{classify, kind_of};
use linesort::routing::{collect_sources, route, write_partitions, RunObserver, SinkOptions};
use linesort::types::{ClassifiedValue, LineKind};

struct QuietObserver;

impl RunObserver for QuietObserver {}

fn write_input(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn partition_files_mirror_in_memory_collections() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_input(dir.path(), "a.txt", "42\n3.14\nhello\n");
    let b = write_input(dir.path(), "b.txt", "7\n");

    let sources = collect_sources(&[a, b], &QuietObserver);
    let partitions = route(&sources);

    let out = dir.path().join("out");
    std::fs::create_dir(&out).unwrap();
    let options = SinkOptions {
        dir: out,
        ..Default::default()
    };
    let files = write_partitions(&sources, &options).unwrap();

    let ints = std::fs::read_to_string(files.integers.unwrap()).unwrap();
    assert_eq!(ints, "42\n7\n");
    let parsed: Vec<i64> = ints.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(parsed, partitions.integers);

    let texts = std::fs::read_to_string(files.texts.unwrap()).unwrap();
    assert_eq!(texts.lines().collect::<Vec<_>>(), partitions.texts);
}

#[test]
fn written_lines_reclassify_identically() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "in.txt",
        "1\n-2.75\nNaN\n9223372036854775808\nplain text\n+5\n",
    );

    let sources = collect_sources(&[input], &QuietObserver);
    let options = SinkOptions {
        dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let files = write_partitions(&sources, &options).unwrap();

    for (path, kind) in [
        (files.integers, LineKind::Integer),
        (files.floats, LineKind::Float),
        (files.texts, LineKind::Text),
    ] {
        let content = std::fs::read_to_string(path.unwrap()).unwrap();
        for line in content.lines() {
            assert_eq!(kind_of(line), kind, "line {line:?} changed kind");
            assert_eq!(classify(line).kind(), kind);
        }
    }
}

#[test]
fn text_lines_survive_the_round_trip_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "in.txt", "Hello, World!\n1,5\n12abc\n");

    let sources = collect_sources(&[input], &QuietObserver);
    let options = SinkOptions {
        dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let files = write_partitions(&sources, &options).unwrap();

    let texts = std::fs::read_to_string(files.texts.unwrap()).unwrap();
    let read_back: Vec<ClassifiedValue> = texts.lines().map(classify).collect();
    assert_eq!(
        read_back,
        vec![
            ClassifiedValue::Text("Hello, World!".to_owned()),
            ClassifiedValue::Text("1,5".to_owned()),
            ClassifiedValue::Text("12abc".to_owned()),
        ]
    );
}

#[test]
fn zero_member_kinds_produce_no_files_even_when_others_do() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "in.txt", "1\n2\n3\n");

    let sources = collect_sources(&[input], &QuietObserver);
    let out = dir.path().join("out");
    std::fs::create_dir(&out).unwrap();
    let options = SinkOptions {
        dir: out.clone(),
        ..Default::default()
    };
    let files = write_partitions(&sources, &options).unwrap();

    assert!(files.integers.is_some());
    assert_eq!(files.floats, None);
    assert_eq!(files.texts, None);

    let entries: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec!["integers.txt".to_owned()]);
}

#[test]
fn prefix_and_append_are_applied_per_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "in.txt", "11\n");

    let sources = collect_sources(&[input], &QuietObserver);
    let mut options = SinkOptions {
        dir: dir.path().to_path_buf(),
        prefix: "batch_".to_owned(),
        append: false,
    };

    write_partitions(&sources, &options).unwrap();
    options.append = true;
    write_partitions(&sources, &options).unwrap();

    let ints = std::fs::read_to_string(dir.path().join("batch_integers.txt")).unwrap();
    assert_eq!(ints, "11\n11\n");
}

#[test]
fn write_failure_leaves_partitions_usable() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "in.txt", "8\nnine\n");

    let sources = collect_sources(&[input], &QuietObserver);
    let partitions = route(&sources);

    let options = SinkOptions {
        dir: dir.path().join("no-such-dir"),
        ..Default::default()
    };
    assert!(write_partitions(&sources, &options).is_err());

    // The classified collections and their statistics are unaffected.
    assert_eq!(partitions.integers, vec![8]);
    assert_eq!(partitions.texts, vec!["nine".to_owned()]);
    assert_eq!(linesort::stats::int_stats(&partitions.integers).sum, 8);
}
