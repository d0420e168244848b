//! Keyseek - find and jump to translation keys used in a source file
//!
//! Keyseek loads a nested i18n JSON dictionary (vue-i18n style, with `@:key`
//! linked messages), flattens it into dotted keys, and finds which of those
//! keys a document uses through calls like `$t('home.title')`. Each used key
//! can then be located precisely, with every quoted occurrence offered when
//! there is more than one.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: Configuration file loading, parsing and saving
//! - `core`: Dictionary flattening, loading and key occurrence search
//! - `logging`: Diagnostic logging setup
//! - `mcp`: Model Context Protocol server implementation
//! - `outcome`: Search and jump results and their user-facing messages

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod mcp;
pub mod outcome;
