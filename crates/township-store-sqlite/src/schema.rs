//! SQL schema for the Township SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS allotments (
    allotment_id INTEGER PRIMARY KEY,
    address      TEXT    NOT NULL,
    area         INTEGER NOT NULL
);

-- Houses and every other kind of building share this table.
-- allotment_id is intentionally not UNIQUE: occupancy is enforced by the
-- services with a read-then-insert, not by the schema.
CREATE TABLE IF NOT EXISTS buildings (
    building_id  INTEGER PRIMARY KEY,
    name         TEXT    NOT NULL,
    kind         TEXT    NOT NULL,   -- 'house' | 'workplace'
    capacity     INTEGER NOT NULL,
    allotment_id INTEGER NOT NULL REFERENCES allotments(allotment_id)
);

CREATE TABLE IF NOT EXISTS citizens (
    citizen_id   INTEGER PRIMARY KEY,
    name         TEXT    NOT NULL,
    house_id     INTEGER REFERENCES buildings(building_id) ON DELETE SET NULL,
    workplace_id INTEGER REFERENCES buildings(building_id) ON DELETE SET NULL
);

CREATE INDEX IF NOT EXISTS buildings_allotment_idx ON buildings(allotment_id);
CREATE INDEX IF NOT EXISTS citizens_house_idx      ON citizens(house_id);
CREATE INDEX IF NOT EXISTS citizens_workplace_idx  ON citizens(workplace_id);

PRAGMA user_version = 1;
";
