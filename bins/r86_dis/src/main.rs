use r86_decoder::{DecodeError, InstructionStream};
use std::fmt::Write;
use std::io::Read;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Opt {
    /// The binary file to disassemble
    binary: String,

    /// Log each decoded instruction to stderr
    #[structopt(long)]
    debug: bool,
}

fn load_data(binary: &str) -> Result<Vec<u8>, std::io::Error> {
    let mut file = std::fs::File::open(binary)?;
    let mut buffer: Vec<u8> = Vec::new();
    let _ = file.read_to_end(&mut buffer)?;

    Ok(buffer)
}

/// Produce the full listing for `data`: the `bits 16` directive followed by
/// one line per instruction. The listing is what an assembler would consume
/// to reproduce `data` byte for byte.
fn disassemble(data: &[u8]) -> Result<String, DecodeError> {
    let mut listing = String::from("bits 16\n");
    let mut offset = 0;

    for decoded in InstructionStream::new(data) {
        let decoded = decoded?;

        tracing::debug!(offset, length = decoded.length, "{}", decoded.instruction);

        let _ = writeln!(listing, "{}", decoded.instruction);
        offset += decoded.length;
    }

    Ok(listing)
}

fn main() {
    let opts = Opt::from_args();

    if opts.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let data = match load_data(opts.binary.as_str()) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    match disassemble(&data) {
        Ok(listing) => print!("{}", listing),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn an_empty_input_produces_only_the_header() {
        assert_eq!(disassemble(&[]).unwrap(), "bits 16\n");
    }

    #[test]
    fn listing_covers_every_supported_encoding() {
        let data = [
            0x89, 0xD9, // register to register
            0x88, 0xE5, // byte registers
            0xB1, 0x0C, // immediate to byte register
            0xB9, 0x0C, 0x00, // immediate to word register
            0x8A, 0x00, // memory source, no displacement
            0x8B, 0x56, 0x00, // mandated zero displacement
            0x8A, 0x80, 0x87, 0x13, // word displacement
            0x89, 0x09, // memory destination
            0x8B, 0x2E, 0x05, 0x00, // direct address
            0xA1, 0xFB, 0x09, // memory to accumulator
            0xA3, 0x0F, 0x00, // accumulator to memory
        ];

        assert_eq!(
            disassemble(&data).unwrap(),
            indoc! {"
                bits 16
                mov cx, bx
                mov ch, ah
                mov cl, 12
                mov cx, 12
                mov al, [bx+si]
                mov dx, [bp+0]
                mov al, [bx+si+4999]
                mov [bx+di], cx
                mov bp, [5]
                mov ax, [2555]
                mov [15], ax
            "}
        );
    }

    #[test]
    fn a_decode_failure_aborts_the_listing() {
        assert_eq!(
            disassemble(&[0x89, 0xD9, 0x00]),
            Err(DecodeError::UnrecognizedOpCode {
                offset: 2,
                byte: 0x00
            })
        );
    }
}
