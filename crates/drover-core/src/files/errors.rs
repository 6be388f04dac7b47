#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Invalid name '{name}': {message}")]
    InvalidName { name: String, message: String },

    #[error("Name too long: {length} bytes (maximum {max})")]
    NameTooLong { length: usize, max: usize },

    #[error("Destination already exists: {path}")]
    AlreadyExists { path: String },

    #[error("No such entry: {path}")]
    NotFound { path: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
