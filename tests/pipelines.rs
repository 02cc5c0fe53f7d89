use std::fs;
use std::path::Path;

use codemix::error::Error;
use codemix::io::{read_lines, write_lines};
use codemix::pipelines::{
    Evaluate, Generate, Pipeline, Prepare, ALIGN_IN, CM_DETOK, CM_TOK, SRC_DETOK, SRC_TOK,
    TGT_DETOK, TGT_TOK,
};

fn hindi_sentences() -> Vec<&'static str> {
    vec!["मैं स्कूल जाता हूँ।", "", "वह घर जाती है।"]
}

fn english_sentences() -> Vec<&'static str> {
    vec!["I go to school.", "Hello!", "She goes home."]
}

fn prepare(dir: &Path) -> usize {
    let src = dir.join("raw.hi");
    let tgt = dir.join("raw.en");
    write_lines(&src, hindi_sentences()).unwrap();
    write_lines(&tgt, english_sentences()).unwrap();

    Prepare::new(
        src,
        tgt,
        dir.join("prepared"),
        "hi".to_string(),
        "en".to_string(),
    )
    .run()
    .unwrap()
}

#[test]
fn prepare_tokenizes_and_cleans() {
    let dir = tempfile::tempdir().unwrap();
    let nb_pairs = prepare(dir.path());
    assert_eq!(nb_pairs, 2);

    let prepared = dir.path().join("prepared");
    assert_eq!(
        read_lines(&prepared.join(SRC_TOK)).unwrap(),
        vec!["मैं स्कूल जाता हूँ ।", "वह घर जाती है ।"]
    );
    assert_eq!(
        read_lines(&prepared.join(TGT_TOK)).unwrap(),
        vec!["I go to school .", "She goes home ."]
    );
    assert_eq!(
        read_lines(&prepared.join(ALIGN_IN)).unwrap(),
        vec![
            "मैं स्कूल जाता हूँ । ||| I go to school .",
            "वह घर जाती है । ||| She goes home ."
        ]
    );
}

#[test]
fn prepare_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("raw.hi");
    let tgt = dir.path().join("raw.en");
    write_lines(&src, ["a", "b"]).unwrap();
    write_lines(&tgt, ["x"]).unwrap();

    let err = Prepare::new(
        src,
        tgt,
        dir.path().join("out"),
        "hi".to_string(),
        "en".to_string(),
    )
    .run()
    .unwrap_err();
    assert!(matches!(err, Error::InputMismatch { .. }));

    // nothing is written
    assert!(!dir.path().join("out").exists());
}

#[test]
fn full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    prepare(dir.path());
    let prepared = dir.path().join("prepared");

    // what an aligner could output for src.tok/tgt.tok
    let alignments = dir.path().join("align.out");
    write_lines(&alignments, ["0-0 1-3 2-1 3-1 4-4", "0-0 1-2 2-1 3-1 4-3"]).unwrap();

    let stopwords = dir.path().join("stop.hi");
    write_lines(&stopwords, ["है"]).unwrap();

    let out = dir.path().join("generated");
    let nb = Generate::new(
        prepared.join(SRC_TOK),
        prepared.join(TGT_TOK),
        alignments,
        out.clone(),
        "hi".to_string(),
        "en".to_string(),
    )
    .with_stopwords(Some(stopwords), None)
    .run()
    .unwrap();
    assert_eq!(nb, 2);

    let mixed = read_lines(&out.join(CM_TOK)).unwrap();
    assert_eq!(
        mixed,
        vec!["I school जाता हूँ .", "She home जाती है ."]
    );
    assert_eq!(
        read_lines(&out.join(CM_DETOK)).unwrap(),
        vec!["I school जाता हूँ.", "She home जाती है."]
    );
    assert_eq!(
        read_lines(&out.join(SRC_DETOK)).unwrap(),
        vec!["मैं स्कूल जाता हूँ।", "वह घर जाती है।"]
    );
    assert_eq!(
        read_lines(&out.join(TGT_DETOK)).unwrap(),
        vec!["I go to school.", "She goes home."]
    );

    let report = dir.path().join("report.csv");
    let metrics = Evaluate::new(
        prepared.join(SRC_TOK),
        prepared.join(TGT_TOK),
        out.join(CM_TOK),
        Some(report.clone()),
    )
    .run()
    .unwrap();

    assert_eq!(metrics.sentences, 2);
    assert_eq!(metrics.skipped, 0);
    // both sentences: 2 source-only and 3 target-only tokens out of 5
    assert!((metrics.cmi - 40.0).abs() < 1e-9);
    // T T S S T, twice
    assert!((metrics.spf - 0.5).abs() < 1e-9);

    let report = fs::read_to_string(report).unwrap();
    let mut lines = report.lines();
    assert_eq!(
        lines.next(),
        Some("line,tokens,cmi,entropy,spf,switch_points")
    );
    assert_eq!(lines.count(), 2);
}

#[test]
fn generate_malformed_alignment() {
    let dir = tempfile::tempdir().unwrap();
    prepare(dir.path());
    let prepared = dir.path().join("prepared");

    let alignments = dir.path().join("align.out");
    write_lines(&alignments, ["0-0", "0-0 1--1"]).unwrap();

    let err = Generate::new(
        prepared.join(SRC_TOK),
        prepared.join(TGT_TOK),
        alignments,
        dir.path().join("generated"),
        "hi".to_string(),
        "en".to_string(),
    )
    .run()
    .unwrap_err();

    match err {
        Error::MalformedAlignment { line, token } => {
            assert_eq!(line, 1);
            assert_eq!(token, "1--1");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn generate_alignment_line_count() {
    let dir = tempfile::tempdir().unwrap();
    prepare(dir.path());
    let prepared = dir.path().join("prepared");

    let alignments = dir.path().join("align.out");
    write_lines(&alignments, ["0-0"]).unwrap();

    let err = Generate::new(
        prepared.join(SRC_TOK),
        prepared.join(TGT_TOK),
        alignments,
        dir.path().join("generated"),
        "hi".to_string(),
        "en".to_string(),
    )
    .run()
    .unwrap_err();

    assert!(matches!(
        err,
        Error::InputMismatch {
            expected: 2,
            got: 1,
            ..
        }
    ));
}
