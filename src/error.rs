use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadInputFile(String, std::io::Error),
    FailedToWriteOutputFile(String, std::io::Error),
    InputFileIsEmpty(String),
    InputFileIsNotValidUtf8(String),
    FailedToReadArchive(std::io::Error),
    FailedToWriteArchive(std::io::Error),
    TruncatedArchive(&'static str),
    SymbolOutsideByteRange(u32),
    Coding(CodingError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            Self::FailedToWriteOutputFile(path, error) => {
                write!(f, "Failed to write output file '{}': {}", path, error)
            }
            Self::InputFileIsEmpty(path) => {
                write!(
                    f,
                    "Input file '{}' is empty, there is nothing to compress",
                    path
                )
            }
            Self::InputFileIsNotValidUtf8(path) => {
                write!(
                    f,
                    "Input file '{}' is not valid UTF-8 text. Use the byte alphabet instead.",
                    path
                )
            }
            Self::FailedToReadArchive(error) => {
                write!(f, "Failed to read archive: {}", error)
            }
            Self::FailedToWriteArchive(error) => {
                write!(f, "Failed to write archive: {}", error)
            }
            Self::TruncatedArchive(region) => {
                write!(f, "Archive ends before the {} is complete", region)
            }
            Self::SymbolOutsideByteRange(value) => {
                write!(
                    f,
                    "Decoded symbol value {} does not fit into a byte",
                    value
                )
            }
            Self::Coding(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for Error {}

impl From<CodingError> for Error {
    fn from(error: CodingError) -> Self {
        Self::Coding(error)
    }
}
