//! # folio
//!
//! A terminal portfolio explorer: load static JSON collections describing
//! projects, skills, experience, and videos, and search across them.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌────────────┐   ┌──────────┐
//! │   Sources    │──▶│ Normalizer │──▶│  Corpus   │
//! │ 4x JSON      │   │ 3 record   │   │ in-memory │
//! │ (file/HTTP)  │   │ sets       │   │ 3 kinds   │
//! └──────────────┘   └────────────┘   └────┬─────┘
//!                                          │
//!                      ┌───────────────────┤
//!                      ▼                   ▼
//!                 ┌──────────┐       ┌──────────┐
//!                 │  search  │       │  watch   │
//!                 │ (one-off)│       │(debounce)│
//!                 └──────────┘       └──────────┘
//! ```
//!
//! The corpus is built at most once per run, after the four concurrent
//! source fetches settle, and is read-only afterward. The query engine is a
//! pure function over it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Raw collections and searchable record types |
//! | [`fetch`] | Per-source fetch, decode, and shape validation |
//! | [`loader`] | Concurrent fan-out load with failure isolation |
//! | [`normalize`] | Raw collections → uniform searchable records |
//! | [`corpus`] | The in-memory record aggregate |
//! | [`search`] | Substring matching and four-tier ranking |
//! | [`present`] | Terminal and JSON output |
//! | [`sources`] | Source health listing |
//! | [`watch`] | Debounced interactive search loop |

pub mod config;
pub mod corpus;
pub mod fetch;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod present;
pub mod search;
pub mod sources;
pub mod watch;
