use std::io::{self, Write};

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use crate::{allow_closed_stdout, scan_inputs, write_text, CliError, CliOptions, USAGE};

fn source_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn run_with(args: &[&str], files: &[&NamedTempFile]) -> Result<String, CliError> {
    let mut argv: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
    argv.extend(files.iter().map(|f| f.path().display().to_string()));
    let options = CliOptions::parse(&argv)?;
    let out = scan_inputs(&options, Vec::new())?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn plain_output() {
    let file = source_file("var n = 10;");
    assert_eq!(run_with(&[], &[&file]).unwrap(), "var\nn\n=\n10\n;\n");
}

#[test]
fn multiple_files_in_order() {
    let a = source_file("a");
    let b = source_file("// b\n");
    assert_eq!(run_with(&[], &[&a, &b]).unwrap(), "a\n// b\n");
}

#[test]
fn filters_apply() {
    let file = source_file("function f(x) { return x + 1; } // done");
    assert_eq!(
        run_with(&["-n", "--no-keywords"], &[&file]).unwrap(),
        "f\nx\nx\n"
    );
    assert_eq!(run_with(&["-c"], &[&file]).unwrap(), "// done\n");
}

#[test]
fn nice_spans_all_files() {
    let a = source_file("f(a);");
    let b = source_file("g(b);");
    assert_eq!(
        run_with(&["--nice"], &[&a, &b]).unwrap(),
        "f(a);\n g(b);\n \n"
    );
}

#[test]
fn positions_restart_per_file() {
    let a = source_file("x\ny");
    let b = source_file("z");
    assert_eq!(
        run_with(&["-p"], &[&a, &b]).unwrap(),
        "1:1 identifier x\n2:1 identifier y\n1:1 identifier z\n"
    );
}

#[test]
fn missing_file_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.js");
    let options = CliOptions::parse(&[missing.display().to_string()]).unwrap();
    let err = scan_inputs(&options, Vec::new()).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn invalid_utf8_still_scans() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"a \xFF b").unwrap();
    assert_eq!(run_with(&[], &[&file]).unwrap(), "a\n\u{FFFD}\nb\n");
}

/// Writer that fails every write with `kind`.
struct FailingWriter(io::ErrorKind);

impl Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.0, "refused"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn help_text_is_written_whole() {
    let mut out = Vec::new();
    write_text(&mut out, USAGE).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), USAGE);
}

#[test]
fn failed_text_write_exits_one() {
    let err = write_text(FailingWriter(io::ErrorKind::Other), USAGE).unwrap_err();
    assert!(matches!(err, CliError::Write(_)));
    assert_eq!(err.exit_code(), 1);
    assert!(allow_closed_stdout(Err(err)).is_err());
}

#[test]
fn closed_stdout_is_not_a_failure() {
    let err = write_text(FailingWriter(io::ErrorKind::BrokenPipe), "jslex 0.1.0\n").unwrap_err();
    assert!(err.is_broken_pipe());
    assert!(allow_closed_stdout(Err(err)).is_ok());
}
