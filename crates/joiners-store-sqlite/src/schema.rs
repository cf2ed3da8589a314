//! SQL schema for the joiners SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS joiners (
    joiner_id             TEXT PRIMARY KEY,
    identification_number INTEGER NOT NULL UNIQUE,
    name                  TEXT NOT NULL,   -- uppercased by the gateway
    last_name             TEXT NOT NULL,   -- uppercased by the gateway
    role                  TEXT NOT NULL,   -- 'SC' | 'EN' | 'SE' | 'ST'
    stack                 TEXT NOT NULL,   -- 'net' | 'java' | 'python' | 'node'
    english_level         TEXT NOT NULL,   -- 'A1' .. 'C2'
    domain_experience     TEXT NOT NULL,   -- 'Low' | 'Medium' | 'Advanced'
    created_at            TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    updated_at            TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS joiners_created_idx ON joiners(created_at);

PRAGMA user_version = 1;
";
