use std::path::PathBuf;

use clap::{Parser, Subcommand};

use translit_cli::commands::{config_ops, convert_ops, edit_ops, profile_ops};
use translit_core::dict::Side;

#[derive(Parser)]
#[command(name = "translit", about = "Bidirectional transliteration tool")]
struct Cli {
    /// Profile file (TOML or compiled .tlp); defaults to the embedded profile
    #[arg(long, global = true)]
    profile: Option<PathBuf>,
    /// Settings file; defaults to the embedded settings
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Directory for the JSON trace log (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text to the opposite side
    Convert {
        /// Side the input is written on (left or right)
        #[arg(long, default_value = "right")]
        from: Side,
        /// Keep exclusion delimiters in the output
        #[arg(long)]
        marked: bool,
        /// Text to convert
        text: String,
    },
    /// Show how text is tokenized
    Tokens {
        /// Side the input is written on (left or right)
        #[arg(long, default_value = "right")]
        from: Side,
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Text to tokenize
        text: String,
    },
    /// Replay a keystroke script through an edit session
    Type {
        /// Print the buffer after every keystroke
        #[arg(long)]
        steps: bool,
        /// Output every step as JSON
        #[arg(long)]
        json: bool,
        /// Keys to type; {bs} {del} {left} {right} {home} {end} {toggle} are editing keys
        script: String,
    },
    /// Look up a form in the dictionary
    Lookup {
        /// Side the form belongs to (left or right)
        #[arg(long, default_value = "right")]
        side: Side,
        /// Form to look up
        value: String,
    },
    /// Print the embedded default profile
    ProfileExport,
    /// Validate a profile file
    ProfileValidate {
        /// Profile file (TOML or .tlp)
        file: String,
    },
    /// Convert a `left = right` text file into a profile
    ProfileImport {
        /// Profile name (defaults to the input file stem)
        #[arg(long)]
        name: Option<String>,
        /// Input text file
        input: String,
        /// Output file (.tlp for compiled, TOML otherwise)
        output: String,
    },
    /// Compile a profile into the binary .tlp format
    ProfileCompile {
        /// Input profile (TOML)
        input: String,
        /// Output .tlp file
        output: String,
    },
    /// Show profile info (format auto-detected by magic bytes)
    ProfileInfo {
        /// Profile file (TOML or .tlp)
        file: String,
    },
    /// Print the embedded default settings
    SettingsExport,
    /// Validate a settings file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
}

impl Command {
    /// Subcommand name as typed on the command line.
    fn name(&self) -> &'static str {
        match self {
            Command::Convert { .. } => "convert",
            Command::Tokens { .. } => "tokens",
            Command::Type { .. } => "type",
            Command::Lookup { .. } => "lookup",
            Command::ProfileExport => "profile-export",
            Command::ProfileValidate { .. } => "profile-validate",
            Command::ProfileImport { .. } => "profile-import",
            Command::ProfileCompile { .. } => "profile-compile",
            Command::ProfileInfo { .. } => "profile-info",
            Command::SettingsExport => "settings-export",
            Command::SettingsValidate { .. } => "settings-validate",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        if let Err(e) = translit_cli::trace_init::init_tracing(dir, cli.command.name()) {
            eprintln!("Warning: no trace log: {e}");
        }
    }
    let profile = cli.profile.as_deref();
    let settings = cli.settings.as_deref();

    match cli.command {
        Command::Convert { from, marked, text } => {
            convert_ops::convert_cmd(profile, settings, &text, from, marked)
        }
        Command::Tokens { from, json, text } => {
            convert_ops::tokens_cmd(profile, settings, &text, from, json)
        }
        Command::Type {
            steps,
            json,
            script,
        } => edit_ops::type_cmd(profile, settings, &script, steps, json),
        Command::Lookup { side, value } => {
            convert_ops::lookup_cmd(profile, settings, &value, side)
        }
        Command::ProfileExport => profile_ops::profile_export(),
        Command::ProfileValidate { file } => profile_ops::profile_validate(&file),
        Command::ProfileImport {
            name,
            input,
            output,
        } => profile_ops::profile_import(&input, &output, name.as_deref()),
        Command::ProfileCompile { input, output } => {
            profile_ops::profile_compile(&input, &output)
        }
        Command::ProfileInfo { file } => profile_ops::profile_info(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
