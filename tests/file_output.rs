// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests against real files.

use linewise::{Config, Destination, Error, Flags, Level, Logger};
use std::fs;
use std::sync::Arc;
use std::thread;

fn is_digit_run(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

#[test]
fn file_line_has_full_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let logger = Logger::new(
        Some(path.as_path()),
        Level::Info,
        Flags::STD | Flags::MICROSECONDS | Flags::SHORT_FILE,
    )
    .unwrap();
    logger.set_prefix("svc ");

    let line_no = line!() + 1;
    logger.info("ready").unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let line = written.strip_suffix('\n').expect("line ends in newline");
    assert!(!line.contains('\n'));

    // svc [YYYY-MM-DD HH:MM:SS.ffffff] INFO: file_output.rs:N: ready
    let rest = line.strip_prefix("svc [").unwrap();
    let (stamp, rest) = rest.split_once("] ").unwrap();
    let (date, clock) = stamp.split_once(' ').unwrap();
    let date_parts: Vec<&str> = date.split('-').collect();
    assert!(is_digit_run(date_parts[0], 4));
    assert!(is_digit_run(date_parts[1], 2));
    assert!(is_digit_run(date_parts[2], 2));
    let (hms, micros) = clock.split_once('.').unwrap();
    assert!(is_digit_run(micros, 6));
    for part in hms.split(':') {
        assert!(is_digit_run(part, 2), "{hms}");
    }
    assert_eq!(rest, format!("INFO: file_output.rs:{line_no}: ready"));
}

#[test]
fn reopening_an_existing_file_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    {
        let logger = Logger::new(Some(path.as_path()), Level::Debug, Flags::empty()).unwrap();
        logger.info("first run").unwrap();
    }
    let logger = Logger::new(Some(path.as_path()), Level::Debug, Flags::empty()).unwrap();
    logger.info("second run").unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "INFO: first run\nINFO: second run\n"
    );
}

#[test]
fn unopenable_destination_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("app.log");
    let err = Logger::from_config(Config::default().with_file(&path)).unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(err, Error::Open { path: p, .. } if p == path));
}

#[cfg(unix)]
#[test]
fn deleted_file_is_recreated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let logger = Logger::new(Some(path.as_path()), Level::Debug, Flags::empty()).unwrap();

    logger.info("before").unwrap();
    fs::remove_file(&path).unwrap();
    logger.info("after").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "INFO: after\n");
}

#[cfg(unix)]
#[test]
fn unrecoverable_deletion_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("logs");
    fs::create_dir(&sub).unwrap();
    let logger = Logger::new(Some(sub.join("app.log").as_path()), Level::Debug, Flags::empty()).unwrap();

    fs::remove_dir_all(&sub).unwrap();
    let err = logger.error("lost").unwrap_err();
    assert!(matches!(err, Error::Reopen { .. }));
    assert!(err.is_fatal());
}

#[cfg(unix)]
#[test]
fn lost_destination_keeps_failing_until_the_caller_stops() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("logs");
    fs::create_dir(&sub).unwrap();
    let logger = Logger::new(Some(sub.join("app.log").as_path()), Level::Debug, Flags::empty()).unwrap();

    fs::remove_dir_all(&sub).unwrap();
    for attempt in 0..3 {
        let err = logger.info_args(format_args!("attempt {attempt}")).unwrap_err();
        assert!(err.is_fatal(), "{err}");
    }
    let abort = logger.panic("giving up");
    assert!(abort.write_error().is_some_and(Error::is_fatal));
}

#[test]
fn set_destination_switches_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.log");
    let second = dir.path().join("second.log");
    let logger = Logger::new(Some(first.as_path()), Level::Debug, Flags::empty()).unwrap();

    logger.info("one").unwrap();
    logger
        .set_destination(&Destination::File(second.clone()))
        .unwrap();
    logger.info("two").unwrap();

    let bad = Destination::File(dir.path().join("missing").join("x.log"));
    assert!(logger.set_destination(&bad).unwrap_err().is_fatal());
    logger.info("three").unwrap();

    assert_eq!(fs::read_to_string(&first).unwrap(), "INFO: one\n");
    assert_eq!(fs::read_to_string(&second).unwrap(), "INFO: two\nINFO: three\n");
}

#[test]
fn concurrent_lines_do_not_interleave() {
    const THREADS: usize = 8;
    const LINES: usize = 200;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let logger = Arc::new(
        Logger::new(Some(path.as_path()), Level::Debug, Flags::STD | Flags::SHORT_FILE).unwrap(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..LINES {
                    linewise::infof!(logger, "thread {t} line {i} {}", "x".repeat(64)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.ends_with('\n'));
    let mut seen = std::collections::HashSet::new();
    for line in written.lines() {
        let body = line.split_once(": thread ").map(|(_, b)| b).unwrap();
        let mut words = body.split(' ');
        let t: usize = words.next().unwrap().parse().unwrap();
        assert_eq!(words.next(), Some("line"));
        let i: usize = words.next().unwrap().parse().unwrap();
        assert_eq!(words.next(), Some("x".repeat(64).as_str()));
        assert_eq!(words.next(), None);
        assert!(seen.insert((t, i)), "duplicate line {t}/{i}");
    }
    assert_eq!(seen.len(), THREADS * LINES);
}
