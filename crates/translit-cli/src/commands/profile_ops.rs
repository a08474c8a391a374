use std::fs;
use std::io::Read;
use std::path::Path;
use std::process;

use translit_core::dict::{DictError, Dictionary, Side};
use translit_core::profile::{self, Profile};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn profile_export() {
    print!("{}", profile::default_toml());
}

pub fn profile_validate(file: &str) {
    let p = die!(profile::open(Path::new(file)), "Error: {}");
    let dict = die!(p.to_dictionary(), "Error: {}");
    println!(
        "OK: {} pairs, longest left={}, longest right={}",
        dict.len(),
        dict.longest_word_len(Side::Left),
        dict.longest_word_len(Side::Right)
    );
}

/// Write `profile` to `path`: compiled when the extension is `tlp`, TOML
/// otherwise.
pub fn write_profile(profile: &Profile, path: &Path) -> Result<(), DictError> {
    if path.extension().is_some_and(|ext| ext == "tlp") {
        return profile.save(path);
    }
    fs::write(path, profile::to_toml(profile)?)?;
    Ok(())
}

/// Convert a `left = right` text file into a profile.
pub fn import_text(input: &Path, output: &Path, name: &str) -> Result<Profile, DictError> {
    let text = fs::read_to_string(input)?;
    let profile = profile::import_pairs_text(name, &text)?;
    write_profile(&profile, output)?;
    Ok(profile)
}

pub fn profile_import(input: &str, output: &str, name: Option<&str>) {
    let input_path = Path::new(input);
    let name = name
        .map(str::to_string)
        .or_else(|| {
            input_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "imported".to_string());

    eprintln!("Importing {input}...");
    let profile = die!(
        import_text(input_path, Path::new(output), &name),
        "Error importing: {}"
    );
    eprintln!("{} pairs written to {output}", profile.pairs.len());
}

pub fn profile_compile(input: &str, output: &str) {
    let profile = die!(profile::open(Path::new(input)), "Error opening profile: {}");
    eprintln!("Compiling {} pairs...", profile.pairs.len());
    die!(profile.save(Path::new(output)), "Error writing profile: {}");

    let file_size = fs::metadata(output).map(|m| m.len()).unwrap_or(0);
    eprintln!("Wrote {output} ({file_size} bytes)");
}

fn read_magic(file: &str) -> Option<Vec<u8>> {
    let mut f = fs::File::open(file).ok()?;
    let mut magic = [0u8; 4];
    let n = f.read(&mut magic).ok()?;
    Some(magic[..n].to_vec())
}

pub fn profile_info(file: &str) {
    let format = match read_magic(file) {
        Some(magic) if magic.as_slice() == profile::MAGIC.as_slice() => "compiled (TLPF)",
        Some(_) => "TOML",
        None => {
            eprintln!("Error reading file: {file}");
            process::exit(1);
        }
    };
    let p = die!(profile::open(Path::new(file)), "Error opening profile: {}");
    let dict = die!(p.to_dictionary(), "Error: {}");
    let file_size = fs::metadata(file).map(|m| m.len()).unwrap_or(0);

    println!("Profile:  {file}");
    println!("Format:   {format}");
    println!("Size:     {file_size} bytes");
    println!("Name:     {}", p.name);
    println!("Version:  {}", p.version.as_deref().unwrap_or("(none)"));
    if !p.left_description.is_empty() || !p.right_description.is_empty() {
        println!(
            "Sides:    {} / {}",
            p.left_description, p.right_description
        );
    }
    println!("Pairs:    {}", dict.len());
    println!("Markers:  {} {}", p.markers.start, p.markers.end);
    println!(
        "Longest:  left={}, right={}",
        dict.longest_word_len(Side::Left),
        dict.longest_word_len(Side::Right)
    );

    println!();
    println!("First pairs:");
    for (left, right) in p.pairs.iter().take(8) {
        println!("  {left} ↔ {right}");
    }
}
