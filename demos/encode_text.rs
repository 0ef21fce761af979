fn main() -> Result<(), huffman::CodecError> {
    tracing_subscriber::fmt::init();

    let s = String::from("Hello my name is Sam!");
    let c = huffman::compress(&s)?;

    for (symbol, code) in c.code_table.iter() {
        println!("{symbol:?} -> {code}");
    }
    println!("{}", c.encoded_text);

    let dec = huffman::decompress(&c.encoded_text, &c.code_table)?;
    println!("{dec:?}");

    Ok(())
}
