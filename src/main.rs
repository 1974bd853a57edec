//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs::File;
use std::io::{self, Read, Write};

use log::{debug, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use squish::codec::{lzw::Lzw, rle::Rle, Codec};
use squish::tools::cli::{args_init, Algorithm, Mode};

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace.
    // Logs go to stderr; stdout carries the stream data.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let args = args_init();
    let codec: &dyn Codec = match args.algorithm() {
        Algorithm::Lzw => &Lzw,
        Algorithm::Rle => &Rle,
    };
    debug!("Using the {} codec in {} mode.", args.algorithm(), args.op_mode());

    if args.op_mode() == Mode::Test {
        return self_test(codec, args.algorithm());
    }

    let input = read_input(args.file.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    //----- Figure out what we need to do and go do it
    match args.op_mode() {
        Mode::Encode => {
            let packed = codec.encode(&input)?;
            info!("Packed {} bytes into {}.", input.len(), packed.len());
            out.write_all(&packed)?;
        }
        Mode::Decode => {
            let data = codec.decode(&input)?;
            info!("Unpacked {} bytes into {}.", input.len(), data.len());
            out.write_all(&data)?;
        }
        Mode::Inspect => {
            let packed = codec.encode(&input)?;
            let data = codec.decode(&packed)?;
            writeln!(out, "In:  {}", String::from_utf8_lossy(&input))?;
            writeln!(out, "Enc: {:?}", packed)?;
            writeln!(out, "Dec: {}", String::from_utf8_lossy(&data))?;
        }
        Mode::Test => unreachable!(),
    }

    info!("Done.\n");
    Ok(())
}

/// Read the whole input, from the named file or from stdin.
fn read_input(file: Option<&str>) -> Result<Vec<u8>, std::io::Error> {
    let mut data = Vec::new();
    match file {
        Some(name) => {
            File::open(name)?.read_to_end(&mut data)?;
        }
        None => {
            io::stdin().read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

/// Round trip a small corpus through the chosen codec and report the result.
fn self_test(codec: &dyn Codec, algorithm: Algorithm) -> Result<(), std::io::Error> {
    let corpus: Vec<Vec<u8>> = vec![
        b"".to_vec(),
        b"abc".to_vec(),
        b"aaabccd".to_vec(),
        b"aab0bb0012".to_vec(),
        "\u{3bb}a\u{e9}".as_bytes().to_vec(),
        vec![b'a'; 1000],
        b"ababcaab".to_vec(),
    ];
    for data in &corpus {
        let roundtrip = codec.decode(&codec.encode(data)?)?;
        if &roundtrip != data {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} round trip mismatch on {:?}", algorithm, data),
            ));
        }
    }
    info!("{} self test passed on {} inputs.", algorithm, corpus.len());
    Ok(())
}
