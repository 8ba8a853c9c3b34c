//! citydb-cli
//! ==========
//!
//! Command-line interface for the `citydb-core` city gazetteer.
//!
//! This crate primarily provides a binary (`citydb`). The small library
//! target exists so that documentation renders an overview page.
//!
//! Basic usage:
//!
//! ```text
//! citydb --help
//! citydb stats
//! citydb search bombay --limit 5
//! citydb distance mumbai delhi
//! citydb routes pune mumbai --json
//! ```
//!
//! For programmatic access use the `citydb-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
