//! Built-in conventions the layout inference starts from.

/// Folder names where source code conventionally lives, in preference order
pub const SOURCE_FOLDER_CANDIDATES: &[&str] = &["bin", "src", "lib", "app", "sources"];

/// Folder names where tests conventionally live, in preference order
pub const TEST_FOLDER_CANDIDATES: &[&str] = &["test", "spec", "tests", "specs"];

/// Folder name that marks a multi-package repository
pub const MONOREPO_MARKER: &str = "packages";

/// The package manifest read for package-manager signals
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Conventional TypeScript compiler config name
pub const TYPESCRIPT_CONFIG: &str = "tsconfig.json";

/// Conventional webpack bundler config name
pub const WEBPACK_CONFIG: &str = "webpack.config.js";
