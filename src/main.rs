use v8unpack::{osml, Container};
use std::env;
use std::fs::{self, File};
use std::io::{self, Read, Seek, Write};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <container> [--list] [--extract <NAME> [--out <PATH>]] [--raw] [--osml <NAME>] [--nested <NAME>]",
            args[0]
        );
        std::process::exit(1);
    }

    let path = &args[1];
    let raw = args.iter().any(|arg| arg == "--raw");
    let extract = flag_value(&args, "--extract");
    let out = flag_value(&args, "--out");
    let osml_name = flag_value(&args, "--osml");
    let nested = flag_value(&args, "--nested");

    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("ERROR: Failed to open {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let mut container = match Container::open(&mut file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("\nERROR: Failed to read container");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let result = if let Some(name) = extract {
        extract_entry(&mut container, name, out, raw)
    } else if let Some(name) = osml_name {
        print_osml(&mut container, name)
    } else if let Some(name) = nested {
        container
            .open_nested(name)
            .map(|inner| list_entries(&inner, &format!("{}/{}", path, name)))
    } else {
        list_entries(&container, path);
        Ok(())
    };

    if let Err(e) = result {
        eprintln!("\nERROR: {}", e);
        std::process::exit(1);
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let idx = args.iter().position(|arg| arg == flag)?;
    match args.get(idx + 1) {
        Some(value) => Some(value.as_str()),
        None => {
            eprintln!("ERROR: {} flag requires an argument.", flag);
            std::process::exit(1);
        }
    }
}

fn list_entries<R: Read + Seek>(container: &Container<R>, label: &str) {
    println!("Container: {}", label);
    println!("{}", "=".repeat(60));
    println!("  Default block size: {}", container.header().default_block_size);
    println!("  Entries: {}", container.entries().len());
    println!();
    for (i, entry) in container.entries().iter().enumerate() {
        println!("  {}. {} (content at {:#x})", i + 1, entry.name, entry.content_offset);
    }
}

fn extract_entry<R: Read + Seek>(
    container: &mut Container<R>,
    name: &str,
    out: Option<&str>,
    raw: bool,
) -> v8unpack::Result<()> {
    let bytes = container.read_file(name, !raw)?;
    match out {
        Some(path) => {
            fs::write(path, &bytes)?;
            println!("Wrote {} bytes to {}", bytes.len(), path);
        }
        None => io::stdout().write_all(&bytes)?,
    }
    Ok(())
}

fn print_osml<R: Read + Seek>(container: &mut Container<R>, name: &str) -> v8unpack::Result<()> {
    let bytes = container.read(name)?;
    let tree = osml::decode_bytes(&bytes)?;
    println!("{}", tree);
    Ok(())
}
