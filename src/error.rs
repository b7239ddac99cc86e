use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading the dictionary or a word list
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error writing the word list
    #[error("Word list \"{path}\" could not be written")]
    WriteError {
        path: String,
        source: std::io::Error,
    },
}
