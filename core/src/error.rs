use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    #[error("Zone '{zone_id}' not found")]
    ZoneNotFound { zone_id: String },

    #[error("Province '{province_id}' not found")]
    ProvinceNotFound { province_id: String },

    #[error("Plan '{plan_id}' not found")]
    PlanNotFound { plan_id: String },

    #[error("Invalid working window [{work_start}, {work_end}): hours must satisfy 0 <= start < end <= 24")]
    InvalidWindow { work_start: u8, work_end: u8 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
