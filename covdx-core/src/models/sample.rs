use std::path::Path;

/// Separator between the sample identifier and the rest of an alignment file name.
pub const SAMPLE_ID_SEPARATOR: char = '-';

///
/// Derive a sample identifier from an alignment file path.
///
/// The identifier is the part of the file stem before the first `-`, or the whole stem
/// when there is no separator: `S001-lane1.bam` gives `S001`, `sampleX.bam` gives `sampleX`.
///
/// # Arguments:
/// - path: path to the alignment file
pub fn sample_id_from_path(path: &Path) -> String {
    let stem = match path.file_stem() {
        Some(stem) => stem.to_string_lossy(),
        None => path.to_string_lossy(),
    };

    match stem.split_once(SAMPLE_ID_SEPARATOR) {
        Some((id, _)) => id.to_string(),
        None => stem.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("S001-lane1.bam", "S001")]
    #[case("sampleX.bam", "sampleX")]
    #[case("/data/run7/NA12878-L001-R1.bam", "NA12878")]
    #[case("multi.dot.name.bam", "multi.dot.name")]
    #[case("noext", "noext")]
    fn test_sample_id_from_path(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(sample_id_from_path(Path::new(path)), expected);
    }
}
