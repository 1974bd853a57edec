use std::fmt::{Display, Formatter};

use clap::Parser;

/// Encode, decode, round-trip inspect, or self test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
    Inspect,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the available codecs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Lempel-Ziv-Welch adaptive dictionary coding (the default)
    Lzw,
    /// Run-length encoding with fixed 5-byte records
    Rle,
}
impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command line interpretation - uses the external clap crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "squish, a two-codec stream compressor.",
    long_about = "
    Compresses byte streams with either LZW adaptive dictionary coding or
    run-length encoding. Reads the named file (or stdin) and writes stdout.
    Without -e or -d it encodes, decodes and prints both, which is handy for
    eyeballing the codecs.

    It is done in the spirit of learning, both learning Rust and learning
    compression techniques."
)]
pub struct Args {
    /// Compress the input to a packed stream
    #[clap(short = 'e', long = "encode")]
    encode: bool,

    /// Decompress a packed stream
    #[clap(short = 'd', long = "decode")]
    decode: bool,

    /// Run the built-in round-trip self test and exit
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Use the run-length codec
    #[clap(long = "rle")]
    rle: bool,

    /// Use the LZW codec (the default)
    #[clap(long = "lzw")]
    lzw: bool,

    /// File to read; stdin when omitted
    #[clap()]
    pub file: Option<String>,

    /// Sets verbosity. -v 0 is silent, -v 5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    pub v: u8,
}

impl Args {
    pub fn op_mode(&self) -> Mode {
        if self.test {
            Mode::Test
        } else if self.decode {
            Mode::Decode
        } else if self.encode {
            Mode::Encode
        } else {
            Mode::Inspect
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        if self.rle && !self.lzw {
            Algorithm::Rle
        } else {
            Algorithm::Lzw
        }
    }
}

/// Parse the command line and set the log level from the verbosity flag.
pub fn args_init() -> Args {
    let args = Args::parse();
    match args.v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };
    args
}

#[cfg(test)]
mod test {
    use super::{Algorithm, Args, Mode};
    use clap::Parser;

    #[test]
    fn defaults_to_lzw_inspect() {
        let args = Args::parse_from(["squish"]);
        assert_eq!(args.op_mode(), Mode::Inspect);
        assert_eq!(args.algorithm(), Algorithm::Lzw);
        assert_eq!(args.file, None);
    }

    #[test]
    fn mode_and_codec_flags() {
        let args = Args::parse_from(["squish", "-e", "--rle", "notes.txt"]);
        assert_eq!(args.op_mode(), Mode::Encode);
        assert_eq!(args.algorithm(), Algorithm::Rle);
        assert_eq!(args.file.as_deref(), Some("notes.txt"));

        let args = Args::parse_from(["squish", "-d"]);
        assert_eq!(args.op_mode(), Mode::Decode);

        let args = Args::parse_from(["squish", "-t", "--lzw"]);
        assert_eq!(args.op_mode(), Mode::Test);
        assert_eq!(args.algorithm(), Algorithm::Lzw);
    }
}
