use crate::{AlphabetChoice, Arguments, Operation};
use clap::{
    arg, builder::PossibleValue, crate_authors, crate_description, crate_name, crate_version,
    value_parser, Arg, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_decompress_argument(command);
        Self::register_alphabet_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_decompress_argument(command: Command) -> Command {
        command.arg(Self::create_decompress_argument())
    }

    fn register_alphabet_argument(command: Command) -> Command {
        command.arg(Self::create_alphabet_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the file to compress, or to the archive to decompress")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path the archive or the restored file is written to")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_decompress_argument() -> Arg {
        arg!(-d --decompress "Decompress the input archive instead of compressing")
    }

    fn create_alphabet_argument() -> Arg {
        arg!(alphabet: -a --alphabet <ALPHABET> "Symbol alphabet used for compression")
            .default_value("auto")
            .value_parser([
                PossibleValue::new("auto"),
                PossibleValue::new("text"),
                PossibleValue::new("bytes"),
            ])
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            operation: Self::extract_operation_argument(matches),
            alphabet: Self::extract_alphabet_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Required argument output_file not provided")
            .clone()
    }

    fn extract_operation_argument(matches: &ArgMatches) -> Operation {
        if matches.get_flag("decompress") {
            Operation::Decompress
        } else {
            Operation::Compress
        }
    }

    fn extract_alphabet_argument(matches: &ArgMatches) -> AlphabetChoice {
        let alphabet = matches
            .get_one::<String>("alphabet")
            .expect("Alphabet must be provided, but was unset.");
        match alphabet.as_str() {
            "text" => AlphabetChoice::Text,
            "bytes" => AlphabetChoice::Bytes,
            _ => AlphabetChoice::Auto,
        }
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
