// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue tracker client.
//!
//! Provides the four tracker calls the time-logging workflow needs:
//! work item types, issue detail (for the type field), issue links, and
//! work item creation.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Client     │────►│  Transport  │────►│   Tracker   │
//! │(TrackerClient)│◄────│   (trait)   │◄────│  REST API   │
//! └───────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Every call goes through a [`Transport`], which forwards method, headers
//! and body verbatim and answers with a [`RelayResponse`]. HTTP failures are
//! normalized into the response's `error` field, so the client only ever sees
//! "ok with data" or "failed with a message".

mod client;
mod transport;
mod wire;

pub use client::TrackerClient;
pub use transport::{HttpTransport, Method, RelayRequest, RelayResponse, Transport};
pub use wire::{WorkItemRequest, WorkItemType};
