use huffman::{Codec, CodecConfig, Compressed};
use std::env;
use std::fs;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let fp = env::args().nth(1).expect("Please provide path to input file as first argument.");
    let text = fs::read_to_string(fp).expect("First argument was not a valid UTF-8 text file.");

    let codec = Codec::new(CodecConfig::strict());

    // encode scope - save to file
    {
        let packed = codec.compress(&text).unwrap();
        let data = rmp_serde::to_vec_named(&packed).unwrap();

        fs::write("encoded.mp", data).unwrap();
    }

    // decode scope - read from file
    {
        let file_data = fs::read("encoded.mp").unwrap();

        let packed: Compressed<char> = rmp_serde::from_slice(&file_data).unwrap();
        let decoded = codec
            .decompress(&packed.encoded_text, &packed.code_table)
            .unwrap();

        fs::write("decoded.txt", decoded).unwrap();
    }
}
