use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

const BINARY: &str = "biodeck";
type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn count_default_sample() -> TestResult {
    Command::cargo_bin(BINARY)?
        .arg("count")
        .assert()
        .success()
        .stdout("id\tA\tT\tG\tC\tGC%\nsequence\t4\t5\t5\t4\t50.00\n");

    Ok(())
}

#[test]
fn count_ignores_unrecognised_symbols() -> TestResult {
    Command::cargo_bin(BINARY)?
        .args(["count", "ATXGC123", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""counts":{"A":1,"T":1,"G":1,"C":1}"#,
        ));

    Ok(())
}

#[test]
fn count_is_case_sensitive() -> TestResult {
    Command::cargo_bin(BINARY)?
        .args(["count", "atgc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sequence\t0\t0\t0\t0\t0.00"));

    Ok(())
}

#[test]
fn count_fasta_keeps_record_order() -> TestResult {
    let fasta = assert_fs::NamedTempFile::new("reads.fa")?;
    fasta.write_str(">first\nAAAA\n>second\nGGCC\nTT\n>third\nacgtN\n")?;

    Command::cargo_bin(BINARY)?
        .args(["count", "--fasta", fasta.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "first\t4\t0\t0\t0\t0.00\nsecond\t0\t2\t2\t2\t66.67\nthird\t0\t0\t0\t0\t0.00\n",
        ));

    fasta.close()?;
    Ok(())
}

#[test]
fn count_missing_fasta_fails() -> TestResult {
    Command::cargo_bin(BINARY)?
        .args(["count", "--fasta", "file_which_does_not_exist.fa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file_which_does_not_exist.fa"));

    Ok(())
}

#[test]
fn render_html() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let out = temp.child("slides.html");

    Command::cargo_bin(BINARY)?
        .args(["render", "revised", "-o", out.path().to_str().unwrap()])
        .assert()
        .success();

    out.assert(predicate::str::contains("<h1>🧬 생명공학에 대하여</h1>"));
    out.assert(predicate::str::contains("</svg>"));
    out.assert(predicate::str::contains("&quot;G&quot;: 5"));

    temp.close()?;
    Ok(())
}

#[test]
fn render_markdown_with_custom_sample() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let out = temp.child("slides.md");

    Command::cargo_bin(BINARY)?
        .args(["render", "blog", "--format", "markdown", "--sample", "AAAA"])
        .args(["-o", out.path().to_str().unwrap()])
        .assert()
        .success();

    out.assert(predicate::str::contains(
        r#"염기 수: `{"A": 4, "T": 0, "G": 0, "C": 0}`"#,
    ));

    temp.close()?;
    Ok(())
}

#[test]
fn table_csv() -> TestResult {
    Command::cargo_bin(BINARY)?
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("기술,2022,2025 예상\nCRISPR,45,75\n"));

    Ok(())
}
