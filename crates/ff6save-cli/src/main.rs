//! ff6save: Final Fantasy VI (Pixel Remaster) save editor
//!
//! Commands:
//!   dump <save>                 - decrypt + inflate, write the raw JSON
//!   show <save>                 - summarize characters and espers
//!   espers list <save>          - list owned espers
//!   espers add <save> <ESPER>.. - grant espers and write a new save
//!   resave <save>               - load and save unchanged
//!   picture <save> --out PATH   - extract the load-menu screenshot
//!   config show                 - display the merged configuration

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

use ff6save_core::config::EditorConfig;
use ff6save_crypto::CryptoSettings;
use ff6save_pipeline::SaveCodec;
use ff6save_schema::{Character, EsperId, SaveDocument};

// ── CLI structure ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "ff6save",
    version,
    about = "Final Fantasy VI save editor",
    long_about = "ff6save: decrypt, inspect and edit Final Fantasy VI Pixel Remaster save files"
)]
struct Cli {
    /// Path to ff6-editor.toml configuration file
    #[arg(
        long,
        short = 'c',
        env = "FF6_EDITOR_CONFIG",
        default_value = "ff6-editor.toml",
        global = true
    )]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides [log] level
    #[arg(long, env = "FF6_EDITOR_LOG", global = true)]
    log: Option<String>,

    /// Log format; overrides [log] format
    #[arg(long, env = "FF6_EDITOR_LOG_FORMAT", global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, ValueEnum)]
enum LogFormat {
    Json,
    Text,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decrypt and inflate a save, writing the top-level JSON text
    Dump {
        save: PathBuf,
        /// Output path (default: the save path with a .json extension)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
        /// Re-indent the top-level document
        #[arg(long)]
        pretty: bool,
    },

    /// Print a per-character summary
    Show {
        save: PathBuf,
        /// Only show the character with this name (or character id name)
        #[arg(long)]
        character: Option<String>,
    },

    /// Owned esper management
    Espers {
        #[command(subcommand)]
        action: EspersAction,
    },

    /// Load a save and write it back unchanged (round-trip check)
    Resave {
        save: PathBuf,
        /// Output path (default: <save>.new)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },

    /// Extract the embedded load-menu picture
    Picture {
        save: PathBuf,
        #[arg(long, short = 'o')]
        out: PathBuf,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum EspersAction {
    /// List owned espers
    List { save: PathBuf },

    /// Append espers to the owned list (sorted) and write a new save
    Add {
        save: PathBuf,
        /// Esper names (Ramuh, Bahamut, ...) or integer codes
        #[arg(required = true)]
        espers: Vec<EsperId>,
        /// Output path (default: <save>.new)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the active configuration (defaults + file + environment)
    Show,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = EditorConfig::load(&cli.config)
        .with_context(|| format!("loading config: {}", cli.config.display()))?;

    let level = cli.log.clone().unwrap_or_else(|| config.log.level.clone());
    let format = match cli.log_format.clone() {
        Some(format) => format,
        None => LogFormat::from_str(&config.log.format, true)
            .map_err(|e| anyhow::anyhow!("log.format {:?}: {e}", config.log.format))?,
    };
    init_logging(&level, &format);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        config_found = cli.config.exists(),
        "ff6save starting"
    );

    match cli.command {
        Commands::Dump { save, out, pretty } => cmd_dump(&config, &save, out.as_deref(), pretty),
        Commands::Show { save, character } => cmd_show(&config, &save, character.as_deref()),
        Commands::Espers { action: EspersAction::List { save } } => cmd_espers_list(&config, &save),
        Commands::Espers { action: EspersAction::Add { save, espers, out } } => {
            cmd_espers_add(&config, &save, &espers, out.as_deref())
        }
        Commands::Resave { save, out } => cmd_resave(&config, &save, out.as_deref()),
        Commands::Picture { save, out } => cmd_picture(&config, &save, &out),
        Commands::Config { action: ConfigAction::Show } => cmd_config_show(&config, &cli.config),
    }
}

fn init_logging(level: &str, format: &LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn build_codec(config: &EditorConfig) -> Result<SaveCodec> {
    let settings = CryptoSettings::from_config(&config.crypto).context("crypto settings")?;
    SaveCodec::new(&settings).context("initializing save cipher")
}

fn load_save(codec: &SaveCodec, path: &Path) -> Result<SaveDocument> {
    codec
        .load(path)
        .with_context(|| format!("loading save: {}", path.display()))
}

/// `<path>` with `suffix` appended to the file name: `slot1` → `slot1.new`.
fn with_appended_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

// ── `ff6save dump` ─────────────────────────────────────────────────────────────

fn cmd_dump(config: &EditorConfig, save: &Path, out: Option<&Path>, pretty: bool) -> Result<()> {
    let codec = build_codec(config)?;
    let ciphertext =
        std::fs::read(save).with_context(|| format!("reading save: {}", save.display()))?;
    let mut json = codec
        .open_json(&ciphertext)
        .with_context(|| format!("opening save: {}", save.display()))?;

    if pretty {
        let value: serde_json::Value =
            serde_json::from_slice(&json).context("save payload is not JSON")?;
        json = serde_json::to_vec_pretty(&value).context("re-indenting JSON")?;
    }

    let dst = out.map_or_else(|| save.with_extension("json"), Path::to_path_buf);
    std::fs::write(&dst, &json).with_context(|| format!("writing: {}", dst.display()))?;

    println!("{} bytes of JSON → {}", json.len(), dst.display());
    Ok(())
}

// ── `ff6save show` ─────────────────────────────────────────────────────────────

fn cmd_show(config: &EditorConfig, save: &Path, only: Option<&str>) -> Result<()> {
    let codec = build_codec(config)?;
    let doc = load_save(&codec, save)?;
    let ud = &doc.user_data;

    println!("save:       {}", save.display());
    println!("id:         {}", doc.id);
    println!("timestamp:  {}", doc.timestamp);
    println!("play time:  {}", format_play_time(doc.play_time));
    println!("gil:        {}", ud.owned_gil);
    println!("steps:      {}", ud.steps);
    println!(
        "battles:    {} (escaped {}, {} monsters killed)",
        ud.battle_count, ud.escape_count, ud.monsters_killed_count
    );
    println!("espers:     {}", esper_names(&ud.owned_espers));

    let mut shown = 0;
    for character in ud.characters() {
        if let Some(name) = only {
            if !matches_character(character, name) {
                continue;
            }
        }
        println!();
        print_character(character);
        shown += 1;
    }

    if let Some(name) = only {
        if shown == 0 {
            anyhow::bail!("no character named {name:?} in {}", save.display());
        }
    }
    Ok(())
}

fn print_character(c: &Character) {
    println!("── {} ({}) ──", c.name, c.id);
    println!("  job:        {}", c.job_id);
    println!("  exp:        {}", c.current_exp);
    println!(
        "  HP/MP:      {}/{}",
        c.parameter.current_hp, c.parameter.current_mp
    );
    println!(
        "  esper:      {}",
        c.esper.map_or_else(|| "-".to_string(), |e| e.to_string())
    );
    println!("  battles:    {}", c.number_of_battles);
    if c.owned_monster_id != 0 {
        println!("  monster:    {}", c.owned_monster_id);
    }

    for (slot, item) in c.equipped() {
        println!("  equip[{slot}]:   {} x{}", item.content_id, item.count);
    }
    for (kind, abilities) in c.ability_dictionary.iter() {
        let names: Vec<String> = abilities
            .iter()
            .map(|a| format!("{}({})", a.ability_id, a.skill_level))
            .collect();
        println!("  {kind}: {}", names.join(", "));
    }
}

fn matches_character(c: &Character, name: &str) -> bool {
    c.name.eq_ignore_ascii_case(name) || c.id.name().eq_ignore_ascii_case(name)
}

fn format_play_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!(
        "{}:{:02}:{:02}",
        total / 3600,
        (total / 60) % 60,
        total % 60
    )
}

fn esper_names(espers: &[EsperId]) -> String {
    if espers.is_empty() {
        return "-".into();
    }
    espers
        .iter()
        .map(EsperId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ── `ff6save espers` ───────────────────────────────────────────────────────────

fn cmd_espers_list(config: &EditorConfig, save: &Path) -> Result<()> {
    let codec = build_codec(config)?;
    let doc = load_save(&codec, save)?;

    for esper in doc.user_data.owned_espers.iter() {
        println!("{:>3}  {esper}", esper.code());
    }
    println!("{} of {} espers owned", doc.user_data.owned_espers.len(), EsperId::ALL.len());
    Ok(())
}

fn cmd_espers_add(
    config: &EditorConfig,
    save: &Path,
    espers: &[EsperId],
    out: Option<&Path>,
) -> Result<()> {
    let codec = build_codec(config)?;
    let mut doc = load_save(&codec, save)?;

    for &esper in espers {
        if doc.user_data.has_esper(esper) {
            println!("already owned: {esper}");
        }
        doc.user_data.add_esper(esper);
    }

    let dst = out.map_or_else(|| with_appended_suffix(save, ".new"), Path::to_path_buf);
    codec
        .save(&doc, &dst)
        .with_context(|| format!("writing save: {}", dst.display()))?;

    println!("espers: {}", esper_names(&doc.user_data.owned_espers));
    println!("saved → {}", dst.display());
    Ok(())
}

// ── `ff6save resave` ───────────────────────────────────────────────────────────

fn cmd_resave(config: &EditorConfig, save: &Path, out: Option<&Path>) -> Result<()> {
    let codec = build_codec(config)?;
    let doc = load_save(&codec, save)?;

    let dst = out.map_or_else(|| with_appended_suffix(save, ".new"), Path::to_path_buf);
    codec
        .save(&doc, &dst)
        .with_context(|| format!("writing save: {}", dst.display()))?;

    let reloaded = load_save(&codec, &dst)?;
    if reloaded != doc {
        anyhow::bail!("{} does not decode to the same document", dst.display());
    }
    println!("saved → {} (round trip verified)", dst.display());
    Ok(())
}

// ── `ff6save picture` ──────────────────────────────────────────────────────────

fn cmd_picture(config: &EditorConfig, save: &Path, out: &Path) -> Result<()> {
    let codec = build_codec(config)?;
    let doc = load_save(&codec, save)?;

    let bytes = doc.picture_bytes().context("decoding pictureData")?;
    std::fs::write(out, &bytes).with_context(|| format!("writing: {}", out.display()))?;
    println!("{} bytes → {}", bytes.len(), out.display());
    Ok(())
}

// ── `ff6save config show` ─────────────────────────────────────────────────────

fn cmd_config_show(config: &EditorConfig, config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("# Configuration from: {}", config_path.display());
    } else {
        println!("# Configuration: defaults (no file at {})", config_path.display());
    }
    println!();
    let rendered =
        toml::to_string_pretty(&config.redacted()).context("serializing config to TOML")?;
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_espers_parse_by_name_and_code() {
        let cli = Cli::try_parse_from(["ff6save", "espers", "add", "slot1", "Bahamut", "62"])
            .unwrap();
        match cli.command {
            Commands::Espers {
                action: EspersAction::Add { espers, out, .. },
            } => {
                assert_eq!(espers, vec![EsperId::Bahamut, EsperId::Ramuh]);
                assert!(out.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_esper_rejected() {
        let result = Cli::try_parse_from(["ff6save", "espers", "add", "slot1", "Gilgamesh"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ff6save",
            "show",
            "slot1",
            "--log",
            "debug",
            "--log-format",
            "json",
            "-c",
            "other.toml",
        ])
        .unwrap();
        assert_eq!(cli.log.as_deref(), Some("debug"));
        assert!(matches!(cli.log_format, Some(LogFormat::Json)));
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }

    #[test]
    fn test_appended_suffix_keeps_existing_extension() {
        assert_eq!(
            with_appended_suffix(Path::new("saves/slot1.sav"), ".new"),
            PathBuf::from("saves/slot1.sav.new")
        );
        assert_eq!(
            with_appended_suffix(Path::new("ookrbATYov="), ".new"),
            PathBuf::from("ookrbATYov=.new")
        );
    }

    #[test]
    fn test_play_time_format() {
        assert_eq!(format_play_time(86400.5), "24:00:00");
        assert_eq!(format_play_time(3725.0), "1:02:05");
        assert_eq!(format_play_time(-3.0), "0:00:00");
    }

    #[test]
    fn test_resave_and_espers_through_files() {
        let tmp = tempfile::tempdir().unwrap();
        let save_path = tmp.path().join("slot1");
        let config = EditorConfig {
            crypto: ff6save_core::config::CryptoConfig {
                password: Some("cli-password".into()),
                salt: Some("cli-salt".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let doc = ff6save_schema::decode_save(
            include_str!("../../ff6save-schema/tests/fixtures/sample_save.json").as_bytes(),
        )
        .unwrap();
        let codec = build_codec(&config).unwrap();
        codec.save(&doc, &save_path).unwrap();

        cmd_resave(&config, &save_path, None).unwrap();
        assert!(tmp.path().join("slot1.new").exists());

        let edited = tmp.path().join("edited");
        cmd_espers_add(&config, &save_path, &[EsperId::Odin], Some(&edited)).unwrap();
        let reloaded = codec.load(&edited).unwrap();
        assert!(reloaded.user_data.has_esper(EsperId::Odin));

        let dumped = tmp.path().join("dump.json");
        cmd_dump(&config, &save_path, Some(&dumped), false).unwrap();
        let json = std::fs::read(&dumped).unwrap();
        assert_eq!(ff6save_schema::decode_save(&json).unwrap(), doc);
    }
}
