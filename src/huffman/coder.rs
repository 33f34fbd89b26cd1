use std::io::Write;

use crate::binary_stream::BitWriter;

use super::codebook::Codebook;
use super::tree::HuffmanTree;
use super::{CodingError, Symbol};

/// Maps symbol sequences through a codebook into a bit stream.
pub struct HuffmanCoder<S: Symbol> {
    codebook: Codebook<S>,
}

impl<S: Symbol> HuffmanCoder<S> {
    pub fn new(tree: &HuffmanTree<S>) -> HuffmanCoder<S> {
        HuffmanCoder {
            codebook: Codebook::from_tree(tree),
        }
    }

    pub fn codebook(&self) -> &Codebook<S> {
        &self.codebook
    }

    /// Writes the code of every symbol in order. The caller flushes the
    /// writer when the sequence is complete and reads the informative bit
    /// count off the writer.
    ///
    /// For a single-symbol alphabet every code is empty, so the stream
    /// carries zero informative bits and the symbol count is not
    /// recoverable from the payload alone.
    pub fn encode_sequence<T: Write>(
        &self,
        sequence: &[S],
        writer: &mut BitWriter<T>,
    ) -> Result<(), CodingError> {
        for symbol in sequence {
            let code = self
                .codebook
                .code_for(symbol)
                .ok_or_else(|| CodingError::UnknownSymbol(symbol.to_string()))?;
            writer
                .write_bits(&code.bytes(), code.len())
                .map_err(CodingError::BitWriterError)?;
        }
        Ok(())
    }
}
