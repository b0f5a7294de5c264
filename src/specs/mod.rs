// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec encodes *where the
//! ground truth lives* in one remote document and *how to extract it
//! robustly*: case-insensitive marker matching, local scanning within
//! known blocks (`core::html` helpers), and whitespace/entity
//! normalization (`core::sanitize`).
//!
//! Specs only extract. Fetching lives in `core::net`, name resolution in
//! `resolve`, reply formatting in `render`; the runner wires them up.
//!
//! Every marker a spec depends on is a named constant with its own match
//! step, so a template change upstream surfaces as one failing test
//! instead of a silently empty catalog.

pub mod menus;
