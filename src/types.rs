use rustc_hash::FxHasher;
use smol_str::SmolStr;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

// ─── Service Field Conventions ──────────────────────────────────────────────
// Fixed by the data service's response shape, not configurable.

/// Field carrying the server-internal record id.
pub const RECORD_ID_FIELD: &str = "recordId";

/// Field carrying the server-internal modification id. Absent on portal rows.
pub const MOD_ID_FIELD: &str = "modId";

/// Name prefix the transport layer gives to fields of related portal rows
/// when it flattens them into a parent record.
pub const PORTAL_PREFIX: &str = "portal_";

// ─── Aliases ────────────────────────────────────────────────────────────────

/// Alias for field names as returned by the server.
pub type FieldName = SmolStr;

pub type FastMap<K, V> = HashMap<K, V, BuildHasherDefault<FxHasher>>;
