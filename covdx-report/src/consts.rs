pub const TEMPLATE_FILE: &str = "template.html";
pub const STYLE_FILE: &str = "style.css";
pub const SCRIPT_FILE: &str = "script.js";

pub const CSS_MARKER: &str = "/*INJECT_CSS*/";
pub const JS_MARKER: &str = "//INJECT_JS";
pub const DATA_MARKER: &str = "{{INJECT_DATA}}";

pub const DEFAULT_REPORT_FILE: &str = "covdx_report.html";
