use std::io::{self, BufRead, Write as _};

use clap::{Parser, ValueEnum};
use jose_aes::{AesCipher, ContentEncryption, DecryptParams, EncryptParams};

fn main() {
    let Args {
        algorithm,
        log_level,
        cek,
        aad,
    } = Args::parse();
    let algorithm = ContentEncryption::from(algorithm);

    if let Some(log_level) = log_level {
        println!("- Using log level {log_level}");
        simple_logger::init_with_level(log_level).unwrap();
    }

    let cipher = AesCipher::default();
    let cek = match cek {
        Some(cek) => hex::decode(cek).expect("Content encryption key must be hex encoded"),
        None => cipher.generate_cek(algorithm).unwrap(),
    };
    println!(
        "- Using algorithm {algorithm}, key {}, aad \"{aad}\"",
        hex::encode(&cek)
    );

    let print_before_input = || {
        println!("--------------------------------------------------------------------------");
        println!("- Enter a phrase to be encrypted, confirm with [ENTER], abort with [CTRL+C]");
        print!("- To be encrypted:  ");
        io::stdout().flush().unwrap();
    };

    print_before_input();

    let stdin = io::stdin();
    let lines = stdin
        .lock()
        .lines()
        .take_while(Result::is_ok)
        .map(Result::unwrap);

    lines.for_each(|l| {
        let encrypted = match cipher.encrypt(EncryptParams {
            algorithm,
            cek: &cek,
            plain_text: l.as_bytes(),
            aad: aad.as_bytes(),
            iv: None,
        }) {
            Ok(encrypted) => encrypted,
            Err(err) => {
                println!("- Encryption failed: {err}");
                print_before_input();
                return;
            }
        };
        println!("- IV:          {}", hex::encode(&encrypted.iv));
        println!("- Cipher text: {}", hex::encode(&encrypted.cipher_text));
        println!("- Tag:         {}", hex::encode(&encrypted.tag));

        let decrypted = cipher
            .decrypt(DecryptParams {
                algorithm,
                cek: &cek,
                cipher_text: &encrypted.cipher_text,
                tag: &encrypted.tag,
                iv: &encrypted.iv,
                aad: aad.as_bytes(),
            })
            .unwrap();
        println!("- Decrypted:   {}", String::from_utf8_lossy(&decrypted));

        print_before_input();
    });
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(value_enum, short, long, default_value_t = ArgContentEncryption::A128Gcm)]
    algorithm: ArgContentEncryption,
    #[arg(short, long)]
    log_level: Option<log::Level>,
    /// hex encoded content encryption key, a random one is generated if omitted
    #[arg(short, long)]
    cek: Option<String>,
    #[arg(long, default_value = "")]
    aad: String,
}

// We need to redeclare here, as we need to derive ValueEnum to use it with clap...
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ArgContentEncryption {
    #[value(name = "A128CBC-HS256")]
    A128CbcHs256,
    #[value(name = "A192CBC-HS384")]
    A192CbcHs384,
    #[value(name = "A256CBC-HS512")]
    A256CbcHs512,
    #[value(name = "A128GCM")]
    A128Gcm,
    #[value(name = "A192GCM")]
    A192Gcm,
    #[value(name = "A256GCM")]
    A256Gcm,
}

impl From<ArgContentEncryption> for ContentEncryption {
    fn from(val: ArgContentEncryption) -> Self {
        match val {
            ArgContentEncryption::A128CbcHs256 => ContentEncryption::A128CbcHs256,
            ArgContentEncryption::A192CbcHs384 => ContentEncryption::A192CbcHs384,
            ArgContentEncryption::A256CbcHs512 => ContentEncryption::A256CbcHs512,
            ArgContentEncryption::A128Gcm => ContentEncryption::A128Gcm,
            ArgContentEncryption::A192Gcm => ContentEncryption::A192Gcm,
            ArgContentEncryption::A256Gcm => ContentEncryption::A256Gcm,
        }
    }
}
