use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use error::Error;
use huffman::{tree_codec, CHARACTER_LEAF_TAG};

pub mod archive;
pub mod binary_stream;
mod cli;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Compress,
    Decompress,
}

/// Requested symbol representation. `Auto` resolves from the input file
/// extension; the persisted archive remembers the actual choice through
/// its leaf tag, so decompression never consults this flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphabetChoice {
    Auto,
    Text,
    Bytes,
}

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    operation: Operation,
    alphabet: AlphabetChoice,
}

impl Arguments {
    pub fn operation(&self) -> Operation {
        self.operation
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_string_lossy().into_owned(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.to_string_lossy().into_owned(), e)
        })
}

fn read_input_file(file_path: &Path) -> Result<Vec<u8>> {
    let mut input_file = open_input_file(file_path)?;
    let mut content = Vec::new();
    input_file.read_to_end(&mut content).map_err(|e| {
        Error::FailedToReadInputFile(file_path.to_string_lossy().into_owned(), e)
    })?;
    Ok(content)
}

fn resolve_alphabet(arguments: &Arguments) -> AlphabetChoice {
    match arguments.alphabet {
        AlphabetChoice::Auto => {
            let is_text = arguments
                .input_file
                .extension()
                .is_some_and(|extension| extension.eq_ignore_ascii_case("txt"));
            if is_text {
                AlphabetChoice::Text
            } else {
                AlphabetChoice::Bytes
            }
        }
        choice => choice,
    }
}

pub fn run(arguments: &Arguments) -> Result<()> {
    match arguments.operation {
        Operation::Compress => compress_file(arguments),
        Operation::Decompress => decompress_file(arguments),
    }
}

/// Reads the input, materializes it in the session's alphabet and writes
/// the single-file archive.
pub fn compress_file(arguments: &Arguments) -> Result<()> {
    let content = read_input_file(&arguments.input_file)?;
    if content.is_empty() {
        return Err(Error::InputFileIsEmpty(
            arguments.input_file.to_string_lossy().into_owned(),
        ));
    }
    let output_file = open_output_file(&arguments.output_file)?;
    let mut writer = BufWriter::new(output_file);
    match resolve_alphabet(arguments) {
        AlphabetChoice::Text => {
            let text = String::from_utf8(content).map_err(|_| {
                Error::InputFileIsNotValidUtf8(
                    arguments.input_file.to_string_lossy().into_owned(),
                )
            })?;
            let symbols: Vec<char> = text.chars().collect();
            archive::compress_symbols(&symbols, &mut writer)?;
        }
        _ => {
            let symbols: Vec<u32> = content.iter().map(|&byte| u32::from(byte)).collect();
            archive::compress_symbols(&symbols, &mut writer)?;
        }
    }
    writer.flush().map_err(Error::FailedToWriteArchive)?;
    Ok(())
}

/// Reads an archive and restores the original file. The alphabet is taken
/// from the leaf tag of the stored tree: character leaves re-materialize
/// as UTF-8 text, integer leaves as raw bytes.
pub fn decompress_file(arguments: &Arguments) -> Result<()> {
    let mut input_file = open_input_file(&arguments.input_file)?;
    let raw = archive::read_archive(&mut input_file)?;
    let native = match tree_codec::leaf_tag(&raw.tree_bytes) {
        Some(CHARACTER_LEAF_TAG) => {
            let symbols: Vec<char> = archive::decompress_symbols(&raw)?;
            symbols.into_iter().collect::<String>().into_bytes()
        }
        _ => {
            let symbols: Vec<u32> = archive::decompress_symbols(&raw)?;
            let mut bytes = Vec::with_capacity(symbols.len());
            for value in symbols {
                let byte =
                    u8::try_from(value).map_err(|_| Error::SymbolOutsideByteRange(value))?;
                bytes.push(byte);
            }
            bytes
        }
    };
    let output_file = open_output_file(&arguments.output_file)?;
    let mut writer = BufWriter::new(output_file);
    writer.write_all(&native).map_err(|e| {
        Error::FailedToWriteOutputFile(arguments.output_file.to_string_lossy().into_owned(), e)
    })?;
    writer.flush().map_err(|e| {
        Error::FailedToWriteOutputFile(arguments.output_file.to_string_lossy().into_owned(), e)
    })?;
    Ok(())
}
