use std::path::PathBuf;


/// One parsed line of progress output.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProgressLine {
    /// Present only on file lines produced with digests enabled.
    pub digest: Option<String>,

    pub path: PathBuf,
}


/// Splits captured progress output into lines.
///
/// # Panics
/// Panics if the output is not valid UTF-8 or does not end with a newline.
#[track_caller]
pub fn parse_progress_output(output: &[u8]) -> Vec<ProgressLine> {
    let output = std::str::from_utf8(output).expect("progress output is not valid UTF-8");

    if output.is_empty() {
        return Vec::new();
    }

    assert!(
        output.ends_with('\n'),
        "progress output does not end with a newline"
    );

    output
        .lines()
        .map(|line| match line.split_once('\t') {
            Some((digest, path)) => ProgressLine {
                digest: Some(digest.to_string()),
                path: PathBuf::from(path),
            },
            None => ProgressLine {
                digest: None,
                path: PathBuf::from(line),
            },
        })
        .collect()
}
