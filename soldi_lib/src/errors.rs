#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("duplicate account category type {0}")]
    DuplicateCategoryType(i32),

    #[error("no account category with type {0} to use as the default")]
    MissingDefaultCategory(i32),

    #[error("{0}")]
    Str(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
