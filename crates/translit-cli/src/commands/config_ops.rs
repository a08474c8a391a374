use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", translit_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        translit_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    let profile = s
        .profile
        .path()
        .map_or_else(|| "(embedded)".to_string(), |p| p.display().to_string());
    println!(
        "OK: tokenizer.selector={:?}, tokenizer.tie_break={}, session.display_side={}, session.translit_mode={}, profile.path={profile}",
        s.tokenizer.selector, s.tokenizer.tie_break, s.session.display_side, s.session.translit_mode
    );
}
