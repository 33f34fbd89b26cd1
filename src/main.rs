use std::env::args_os;

use huffpack::{run, CLIParser, Operation};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let operation_name = match arguments.operation() {
        Operation::Compress => "Compression",
        Operation::Decompress => "Decompression",
    };
    match run(&arguments) {
        Ok(_) => println!("{} successful", operation_name),
        Err(e) => eprintln!("{} failed because of: {}", operation_name, e),
    }
}
