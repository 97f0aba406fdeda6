//! # Wartezeiten CLI
//!
//! Command-line front end for the [Wartezeiten.APP](https://www.wartezeiten.app)
//! theme park API, built on the typed [`wartezeiten_client`] crate.
//!
//! ## Commands
//!
//! | Command | Endpoint | Headers sent |
//! |---------|----------|--------------|
//! | `parks [--language de\|en]` | `GET /v1/parks` | `language` |
//! | `opening-times --park <id>` | `GET /v1/openingtimes` | `park` |
//! | `waiting-times --park <id> [--language de\|en]` | `GET /v1/waitingtimes` | `park`, `language` |
//!
//! ## Configuration
//!
//! An optional TOML file passed with `--config`:
//!
//! ```toml
//! [client]
//! base_url = "https://api.wartezeiten.app"
//! timeout_secs = 30
//!
//! [defaults]
//! language = "en"
//! ```
//!
//! `--base-url` (or `WARTEZEITEN_BASE_URL`) overrides the file.
//!
//! ## Example Usage
//!
//! ```bash
//! wartezeiten parks --language en
//! wartezeiten waiting-times --park efteling --format table
//! RUST_LOG=wartezeiten_client=debug wartezeiten opening-times --park efteling
//! ```
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cli`] | Argument definitions and command dispatch |
//! | [`config`] | TOML configuration loading |
//! | [`output`] | JSON and table rendering |

pub mod cli;
pub mod config;
pub mod output;
