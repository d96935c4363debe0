//! depend-on-all - Check that an aggregating module depends on every
//! project in its multi-module build.
//!
//! A module configured with the rule must declare a dependency on every
//! other module of the build (the reactor) selected by include/exclude
//! selectors. The check reports each missing dependency and a ready-made
//! `<dependency>` block for it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`output`] - Human and JSON result formatters
//! - [`reactor`] - Modules, dependencies, and the reactor description file
//! - [`rule`] - Rule evaluation, gap detection, and failure reports
//! - [`scope`] - Rule parameters, inclusion decisions, and reactor scanning
//! - [`selector`] - Selector parsing and pattern compilation
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use depend_on_all::reactor::Module;
//! use depend_on_all::rule::{evaluate, RuleContext};
//! use depend_on_all::scope::RawScopeParams;
//!
//! let a = Module::new("com.acme", "a", "1.0", "jar");
//! let root = Module::new("com.acme", "root", "1.0", "pom");
//! let modules = vec![a, root.clone()];
//!
//! let ctx = RuleContext::new(&modules, &root, &root);
//! let outcome = evaluate(&RawScopeParams::default(), &ctx).unwrap();
//! assert!(outcome
//!     .message()
//!     .unwrap()
//!     .starts_with("Project 'com.acme:root' is missing dependency 'com.acme:a:jar'."));
//! ```

pub mod cli;
pub mod error;
pub mod output;
pub mod reactor;
pub mod rule;
pub mod scope;
pub mod selector;
pub mod ui;

pub use error::{Result, RuleError};
