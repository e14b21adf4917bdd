/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates (birth, death, due back) carry no time component.
pub type Date = chrono::NaiveDate;
