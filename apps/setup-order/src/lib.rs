//! setup-order core library.
//!
//! Enforces a canonical order of top-level declarations inside Vue
//! `<script setup>` blocks and produces a single-edit fix when a file is out
//! of order.
//!
//! High-level modules:
//! - `sections`: Section labels, macros, hooks and the built-in defaults.
//! - `classify`: Statement shape -> section (+ lifecycle priority).
//! - `sort`: Comparator, stable sort and grouping.
//! - `regen`: Replacement text with blank lines between groups.
//! - `scope`: Setup-scoped statements and the fix range.
//! - `rule`: The `declaration-order` rule tying the above together.
//! - `sfc` / `script`: Document and script parsing adapters.
//! - `cli`, `config`, `lint`, `format`, `output`: Command-line surface.
//! - `models`: Options, statement model and lint output structs.
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod lint;
pub mod models;
pub mod output;
pub mod regen;
pub mod rule;
pub mod scope;
pub mod script;
pub mod sections;
pub mod sfc;
pub mod sort;
pub mod utils;
