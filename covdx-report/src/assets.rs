use std::fs;
use std::path::Path;

use crate::consts::{SCRIPT_FILE, STYLE_FILE, TEMPLATE_FILE};
use crate::error::{ReportError, Result};

///
/// The three static pieces of a report: the HTML skeleton, its stylesheet and its script.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportAssets {
    pub template: String,
    pub style: String,
    pub script: String,
}

impl ReportAssets {
    ///
    /// Load `template.html`, `style.css` and `script.js` from a directory.
    ///
    /// All three are checked for existence before any of them is read, so a missing
    /// asset is reported by path and nothing else happens.
    ///
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let paths = [TEMPLATE_FILE, STYLE_FILE, SCRIPT_FILE].map(|name| dir.join(name));
        if let Some(missing) = paths.iter().find(|path| !path.is_file()) {
            return Err(ReportError::MissingAsset(missing.clone()));
        }

        let [template, style, script] = paths;
        Ok(ReportAssets {
            template: fs::read_to_string(template)?,
            style: fs::read_to_string(style)?,
            script: fs::read_to_string(script)?,
        })
    }

    /// The assets shipped inside the binary.
    pub fn bundled() -> Self {
        ReportAssets {
            template: include_str!("../assets/template.html").to_string(),
            style: include_str!("../assets/style.css").to_string(),
            script: include_str!("../assets/script.js").to_string(),
        }
    }

    ///
    /// Use the assets in `dir` when given, the bundled ones otherwise.
    ///
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Ok(Self::bundled()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::tempdir;

    use crate::consts::{CSS_MARKER, DATA_MARKER, JS_MARKER};

    #[rstest]
    fn test_bundled_assets_carry_markers() {
        let assets = ReportAssets::bundled();
        assert!(assets.template.contains(CSS_MARKER));
        assert!(assets.template.contains(JS_MARKER));
        assert!(assets.script.contains(DATA_MARKER));
    }

    #[rstest]
    fn test_from_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(TEMPLATE_FILE), "<html></html>").unwrap();
        fs::write(dir.path().join(STYLE_FILE), "body {}").unwrap();
        fs::write(dir.path().join(SCRIPT_FILE), "let x = 1;").unwrap();

        let assets = ReportAssets::from_dir(dir.path()).unwrap();
        assert_eq!(assets.template, "<html></html>");
        assert_eq!(assets.style, "body {}");
        assert_eq!(assets.script, "let x = 1;");
    }

    #[rstest]
    #[case(TEMPLATE_FILE)]
    #[case(STYLE_FILE)]
    #[case(SCRIPT_FILE)]
    fn test_missing_asset_is_named(#[case] missing: &str) {
        let dir = tempdir().unwrap();
        for name in [TEMPLATE_FILE, STYLE_FILE, SCRIPT_FILE] {
            if name != missing {
                fs::write(dir.path().join(name), "").unwrap();
            }
        }

        match ReportAssets::from_dir(dir.path()) {
            Err(ReportError::MissingAsset(path)) => assert_eq!(path, dir.path().join(missing)),
            other => panic!("expected a missing asset error, got {other:?}"),
        }
    }

    #[rstest]
    fn test_load_defaults_to_bundled() {
        assert_eq!(ReportAssets::load(None).unwrap(), ReportAssets::bundled());
    }
}
