/*!
 * # feedlog - bilingual changelog to update-feed description
 *
 * A Rust library for turning hand-written release notes into the
 * `<description>` snippet of an update feed item.
 *
 * ## Features
 *
 * - Parse a Chinese block and an English block separated by a line of
 *   twenty `=` characters
 * - Separate regular changelog entries from `PS:` postscript notes
 * - Render both languages into a fixed CDATA-wrapped HTML template
 * - Configurable product name and log level (JSON config file)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `changelog_parser`: Section splitting and line classification
 * - `feed_renderer`: Template rendering of the parsed sections
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system and stdin operations
 * - `sample_changelog`: Built-in release notes
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod changelog_parser;
pub mod errors;
pub mod feed_renderer;
pub mod file_utils;
pub mod sample_changelog;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, InputSource};
pub use changelog_parser::{parse_input, ChangelogSections, LineItem};
pub use feed_renderer::{generate_xml, FeedRenderer};
pub use errors::{AppError, ChangelogError};
