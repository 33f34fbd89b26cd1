use huffpack::binary_stream::BitWriter;
use huffpack::huffman::{CodingError, HuffmanCoder, HuffmanTree, SymbolFrequency};
use std::io::Write;

fn main() -> Result<(), CodingError> {
    // symbol-frequency pairs
    let syms_and_freqs =
        [(0u32, 10u64), (1, 2), (2, 24), (3, 340), (4, 10), (5, 11)].map(SymbolFrequency::from);

    let tree = HuffmanTree::from_frequencies(&syms_and_freqs)?;
    println!("huffman tree\n{}", tree);

    let sequence_to_encode: Vec<u32> = vec![3, 3, 3, 2, 1, 4, 5, 3, 3, 3];

    let coder = HuffmanCoder::new(&tree);
    let mut encoded_buffer: Vec<u8> = Vec::new();
    let mut writer = BitWriter::new(&mut encoded_buffer);
    coder.encode_sequence(&sequence_to_encode, &mut writer)?;
    writer.flush().map_err(CodingError::BitWriterError)?;
    let bit_count = writer.bits_written();
    println!("sequence to encode\n{:?}", sequence_to_encode);
    println!("encoded sequence ({} bits)\n{:?}", bit_count, encoded_buffer);

    let mut decoded_buffer: Vec<u32> = Vec::new();
    tree.decode_sequence(&encoded_buffer, bit_count, &mut decoded_buffer);
    println!("decoded sequence\n{:?}", decoded_buffer);
    Ok(())
}
