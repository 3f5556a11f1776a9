pub const INLANG_TOOL_NAME: &str = "inlang";
pub const INLANG_MANIFEST_FILE_NAME: &str = "inlang.toml";
pub const INLANG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON schema of TextMate grammars, referenced by every generated document.
pub const TEXTMATE_SCHEMA_URL: &str = "https://raw.githubusercontent.com/martinring/tmlanguage/master/tmlanguage.json";
