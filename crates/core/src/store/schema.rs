pub const SCHEMA: &str = "
-- Host option rows written by review gates
CREATE TABLE IF NOT EXISTS options (
    key TEXT PRIMARY KEY,         -- IdentifierKey, e.g. wrm_<20 hex chars>
    value INTEGER NOT NULL,       -- First-seen Unix timestamp (seconds)
    updated_at INTEGER NOT NULL   -- Unix timestamp (seconds)
);
";
