//! Simulation constants and tuning parameters.

// --- Field ---

/// Lower bound of the field on both axes (field percent).
pub const FIELD_MIN: f64 = 0.0;

/// Upper bound of the field on both axes (field percent).
pub const FIELD_MAX: f64 = 100.0;

// --- Geometry ---

/// Tolerance for every equality-of-distance comparison.
pub const DISTANCE_EPSILON: f64 = 1e-9;

// --- Risk thresholds (field units) ---

/// Minimum distance below which both witnesses are promoted to `Collided`.
pub const COLLISION_THRESHOLD: f64 = 0.1;

/// Minimum distance below which witnesses are marked `Danger`.
pub const DANGER_THRESHOLD: f64 = 1.0;

/// Minimum distance below which witnesses are marked `Warning`.
pub const WARNING_THRESHOLD: f64 = 5.0;

// --- Scheduling ---

/// Default host tick period in milliseconds.
pub const TICK_PERIOD_MS: u64 = 2000;

// --- Population generation ---

/// Smallest population the generator attempts to place.
pub const SPAWN_MIN_AIRCRAFT: usize = 10;

/// Largest population the generator attempts to place.
pub const SPAWN_MAX_AIRCRAFT: usize = 20;

/// Minimum pairwise distance between aircraft at spawn.
pub const SPAWN_MIN_SEPARATION: f64 = 5.0;

/// Placement attempts per aircraft before the slot is skipped.
pub const SPAWN_MAX_ATTEMPTS: u32 = 50;

/// Maximum per-axis displacement per tick for spawned aircraft.
pub const SPAWN_MAX_SPEED: f64 = 0.5;

/// Passenger count range for spawned aircraft (inclusive).
pub const SPAWN_MIN_PASSENGERS: u32 = 50;
pub const SPAWN_MAX_PASSENGERS: u32 = 249;

/// Callsign airline prefixes.
pub const CALLSIGN_PREFIXES: [&str; 5] = ["AV", "CO", "LA", "AA", "BA"];

/// Airports used for origin and destination.
pub const AIRPORTS: [&str; 8] = ["JFK", "LAX", "CDG", "FRA", "HND", "DXB", "LHR", "SYD"];

/// Pilot roster.
pub const PILOT_NAMES: [&str; 7] = [
    "Juan G.",
    "Maria L.",
    "Carlos R.",
    "Ana P.",
    "Luis T.",
    "Sofia M.",
    "Pedro D.",
];
