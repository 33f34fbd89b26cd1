//! Single-file artifact around one compressed input.
//!
//! Layout: a 4-byte big-endian length of the serialized tree, the tree
//! bytes, an 8-byte big-endian count of informative payload bits, then the
//! packed bit stream padded to byte granularity. The explicit bit count is
//! what keeps flush padding from being decoded as data; the tree region
//! still parses exactly as in the count-less legacy layout.

use std::io::{Read, Write};

use crate::binary_stream::BitWriter;
use crate::error::Error;
use crate::huffman::{
    count_symbol_frequencies, tree_codec, CodingError, HuffmanCoder, HuffmanTree, Symbol,
};
use crate::logger;

const TREE_LENGTH_FIELD_SIZE: usize = 4;
const BIT_COUNT_FIELD_SIZE: usize = 8;

pub struct CompressionSummary {
    pub symbol_count: usize,
    pub distinct_symbol_count: usize,
    pub tree_byte_count: usize,
    pub payload_bit_count: u64,
}

/// Runs the full compress pipeline over a materialized symbol sequence and
/// writes the artifact. The frequency table and the tree only live for the
/// duration of this call.
pub fn compress_symbols<S: Symbol, W: Write>(
    sequence: &[S],
    writer: &mut W,
) -> Result<CompressionSummary, Error> {
    let frequencies = count_symbol_frequencies(sequence);
    let tree = HuffmanTree::from_frequencies(&frequencies)?;
    let tree_bytes = tree_codec::serialize_tree(&tree);
    logger::log_serialized_tree(&tree_bytes);

    let coder = HuffmanCoder::new(&tree);
    let mut payload = Vec::new();
    let mut bit_writer = BitWriter::new(&mut payload);
    coder.encode_sequence(sequence, &mut bit_writer)?;
    bit_writer.flush().map_err(CodingError::BitWriterError)?;
    let payload_bit_count = bit_writer.bits_written();

    writer
        .write_all(&(tree_bytes.len() as u32).to_be_bytes())
        .map_err(Error::FailedToWriteArchive)?;
    writer
        .write_all(&tree_bytes)
        .map_err(Error::FailedToWriteArchive)?;
    writer
        .write_all(&payload_bit_count.to_be_bytes())
        .map_err(Error::FailedToWriteArchive)?;
    writer
        .write_all(&payload)
        .map_err(Error::FailedToWriteArchive)?;

    log::info!(
        "compressed {} symbol(s), {} distinct, into {} tree byte(s) and {} payload bit(s)",
        sequence.len(),
        frequencies.len(),
        tree_bytes.len(),
        payload_bit_count
    );

    Ok(CompressionSummary {
        symbol_count: sequence.len(),
        distinct_symbol_count: frequencies.len(),
        tree_byte_count: tree_bytes.len(),
        payload_bit_count,
    })
}

/// The three artifact regions, split but not yet interpreted.
pub struct RawArchive {
    pub tree_bytes: Vec<u8>,
    pub payload_bit_count: u64,
    pub payload: Vec<u8>,
}

pub fn read_archive<R: Read>(reader: &mut R) -> Result<RawArchive, Error> {
    let mut envelope = Vec::new();
    reader
        .read_to_end(&mut envelope)
        .map_err(Error::FailedToReadArchive)?;
    parse_archive(&envelope)
}

pub fn parse_archive(envelope: &[u8]) -> Result<RawArchive, Error> {
    if envelope.len() < TREE_LENGTH_FIELD_SIZE {
        return Err(Error::TruncatedArchive("tree length field"));
    }
    let (length_bytes, rest) = envelope.split_at(TREE_LENGTH_FIELD_SIZE);
    let tree_length = u32::from_be_bytes([
        length_bytes[0],
        length_bytes[1],
        length_bytes[2],
        length_bytes[3],
    ]) as usize;
    if rest.len() < tree_length {
        return Err(Error::TruncatedArchive("serialized tree"));
    }
    let (tree_bytes, rest) = rest.split_at(tree_length);
    if rest.len() < BIT_COUNT_FIELD_SIZE {
        return Err(Error::TruncatedArchive("payload bit count field"));
    }
    let (count_bytes, payload) = rest.split_at(BIT_COUNT_FIELD_SIZE);
    let payload_bit_count = u64::from_be_bytes([
        count_bytes[0],
        count_bytes[1],
        count_bytes[2],
        count_bytes[3],
        count_bytes[4],
        count_bytes[5],
        count_bytes[6],
        count_bytes[7],
    ]);
    Ok(RawArchive {
        tree_bytes: tree_bytes.to_vec(),
        payload_bit_count,
        payload: payload.to_vec(),
    })
}

/// Rebuilds the tree and walks the payload back into symbols. An archive
/// holding no tree decodes to an empty sequence.
pub fn decompress_symbols<S: Symbol>(archive: &RawArchive) -> Result<Vec<S>, Error> {
    let Some(tree) = tree_codec::deserialize_tree::<S>(&archive.tree_bytes)? else {
        return Ok(Vec::new());
    };
    let mut symbols = Vec::new();
    tree.decode_sequence(&archive.payload, archive.payload_bit_count, &mut symbols);
    log::info!(
        "decompressed {} symbol(s) from {} payload bit(s)",
        symbols.len(),
        archive.payload_bit_count
    );
    Ok(symbols)
}

#[cfg(test)]
mod test {
    use super::{compress_symbols, decompress_symbols, parse_archive};
    use crate::error::Error;

    fn compress_to_vec<S: crate::huffman::Symbol>(sequence: &[S]) -> Vec<u8> {
        let mut envelope = Vec::new();
        compress_symbols(sequence, &mut envelope).expect("compression must succeed");
        envelope
    }

    #[test]
    fn test_character_roundtrip() {
        let sequence: Vec<char> = "el ingenioso hidalgo don quijote de la mancha"
            .chars()
            .collect();
        let envelope = compress_to_vec(&sequence);
        let archive = parse_archive(&envelope).expect("archive must parse");
        let decoded: Vec<char> = decompress_symbols(&archive).expect("decoding must succeed");
        assert_eq!(decoded, sequence);
    }

    #[test]
    fn test_byte_roundtrip() {
        let sequence: Vec<u32> = b"\x00\x01\x02\xFF\xFE huffpack \xAA\xAA\xAA"
            .iter()
            .map(|&byte| u32::from(byte))
            .collect();
        let envelope = compress_to_vec(&sequence);
        let archive = parse_archive(&envelope).expect("archive must parse");
        let decoded: Vec<u32> = decompress_symbols(&archive).expect("decoding must succeed");
        assert_eq!(decoded, sequence);
    }

    #[test]
    fn test_envelope_layout() {
        let sequence: Vec<char> = "ab".chars().collect();
        let envelope = compress_to_vec(&sequence);
        // tree length field
        assert_eq!(&envelope[0..4], &[0x00, 0x00, 0x00, 0x09]);
        let archive = parse_archive(&envelope).expect("archive must parse");
        assert_eq!(archive.tree_bytes.len(), 9);
        assert_eq!(archive.payload_bit_count, 2);
        assert_eq!(archive.payload, vec![0b0100_0000]);
    }

    #[test]
    fn test_degenerate_single_symbol_input() {
        let sequence: Vec<char> = "aaaa".chars().collect();
        let mut envelope = Vec::new();
        let summary =
            compress_symbols(&sequence, &mut envelope).expect("compression must succeed");
        assert_eq!(summary.payload_bit_count, 0);
        let archive = parse_archive(&envelope).expect("archive must parse");
        let decoded: Vec<char> = decompress_symbols(&archive).expect("decoding must succeed");
        assert!(
            decoded.is_empty(),
            "zero informative bits decode to zero symbols, the count is lost"
        );
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        let mut envelope = Vec::new();
        let result = compress_symbols::<u32, _>(&[], &mut envelope);
        assert!(matches!(
            result,
            Err(Error::Coding(
                crate::huffman::CodingError::EmptySymbolSequence
            ))
        ));
    }

    #[test]
    fn test_truncated_envelopes_are_rejected() {
        let sequence: Vec<char> = "abc abc".chars().collect();
        let envelope = compress_to_vec(&sequence);
        assert!(matches!(
            parse_archive(&envelope[0..2]),
            Err(Error::TruncatedArchive("tree length field"))
        ));
        assert!(matches!(
            parse_archive(&envelope[0..6]),
            Err(Error::TruncatedArchive("serialized tree"))
        ));
        let archive = parse_archive(&envelope).expect("archive must parse");
        let tree_end = 4 + archive.tree_bytes.len();
        assert!(matches!(
            parse_archive(&envelope[0..tree_end + 3]),
            Err(Error::TruncatedArchive("payload bit count field"))
        ));
    }
}
