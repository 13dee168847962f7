//! Hexroyale -- game-state core for a battle-royale multiplayer game server.
//!
//! Exposes the payload codec (a gzip + base64 envelope around a compact,
//! whitespace-free game-state dialect), the hex map shrinker that removes one
//! ring of the map per invocation, and the turn-preview field extraction used
//! by notification glue.

pub mod codec;
pub mod map;
pub mod preview;
