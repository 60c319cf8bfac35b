//! Paralympic sports news site.
//!
//! Serves server-rendered news pages backed by a hosted content backend, with
//! built-in fallback articles, static per-sport reference pages, and a chat
//! assistant that proxies questions to a hosted language model.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod chat;
pub mod components;
pub mod config;
pub mod constants;
pub mod content;
pub mod sanity;
pub mod sports;
pub mod web;
