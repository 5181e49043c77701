//! quranhub - Quran reader for the terminal

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use quranhub::model::{JuzNumber, ReciterGroups, chapter_number, filter_chapters, unique_juzs};
use quranhub::render;
use quranhub::{ChapterReading, ClientConfig, QuranApi, QuranClient, SectionController};

#[derive(Parser)]
#[command(name = "quranhub")]
#[command(version, about = "Quran reader for the quran.com API", long_about = None)]
#[command(after_help = "EXAMPLES:
    quranhub juz 30                 Read juz 30 with translations
    quranhub surah 1 --reciter 7    Read Al-Fatihah and show its audio URL
    quranhub chapters --search baq  Find chapters by name")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// API base URL
    #[arg(long, global = true, env = "QURANHUB_BASE_URL")]
    base_url: Option<String>,

    /// Translation resource ID
    #[arg(long, global = true, env = "QURANHUB_TRANSLATION")]
    translation: Option<u32>,

    /// Language for chapter names
    #[arg(long, global = true, env = "QURANHUB_LANGUAGE")]
    language: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print the underlying data as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List chapters (surahs)
    Chapters {
        /// Only chapters whose name contains TERM
        #[arg(short, long, value_name = "TERM")]
        search: Option<String>,
    },
    /// List juz with their verse spans
    Juzs,
    /// List reciters grouped by recitation style
    Reciters,
    /// Read a whole chapter
    Surah {
        /// Chapter number (1-114)
        number: u32,

        /// Reciter ID for the chapter audio URL
        #[arg(short, long, value_name = "ID")]
        reciter: Option<u32>,
    },
    /// Read a juz, grouped by chapter
    Juz {
        /// Juz number (1-30)
        number: u32,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "quranhub=debug",
        (false, _) => "quranhub=trace",
    };
    let filter = if quiet || verbose > 0 {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<ClientConfig, String> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)
            .map_err(|e| format!("{}: {}", path.display(), e.user_message()))?,
        None => ClientConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(translation) = cli.translation {
        config = config.with_translation(translation);
    }
    if let Some(language) = &cli.language {
        config = config.with_language(language);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(std::time::Duration::from_secs(secs));
    }
    Ok(config)
}

async fn run(cli: &Cli) -> Result<(), String> {
    let config = load_config(cli)?;
    let client = QuranClient::new(config).map_err(|e| e.user_message())?;

    match &cli.command {
        Command::Chapters { search } => list_chapters(&client, search.as_deref(), cli.json).await,
        Command::Juzs => list_juzs(&client, cli.json).await,
        Command::Reciters => list_reciters(&client, cli.json).await,
        Command::Surah { number, reciter } => {
            read_surah(&client, *number, *reciter, cli.json).await
        }
        Command::Juz { number } => read_juz(client, *number, cli.json).await,
    }
}

fn print_json(value: &impl Serialize) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

async fn list_chapters(
    client: &QuranClient,
    search: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let chapters = client.chapters().await.map_err(|e| e.user_message())?;
    let found = filter_chapters(&chapters, search.unwrap_or_default());

    if json {
        return print_json(&found);
    }
    if found.is_empty() {
        println!("Tidak ada surah yang cocok.");
        return Ok(());
    }
    print!("{}", render::render_chapter_list(found));
    Ok(())
}

async fn list_juzs(client: &QuranClient, json: bool) -> Result<(), String> {
    let juzs = unique_juzs(client.juzs().await.map_err(|e| e.user_message())?);
    if json {
        return print_json(&juzs);
    }
    print!("{}", render::render_juz_list(&juzs));
    Ok(())
}

async fn list_reciters(client: &QuranClient, json: bool) -> Result<(), String> {
    let reciters = client.reciters().await.map_err(|e| e.user_message())?;
    let groups = ReciterGroups::partition(reciters);
    if json {
        return print_json(&groups);
    }
    print!("{}", render::render_reciters(&groups));
    Ok(())
}

async fn read_surah(
    client: &QuranClient,
    number: u32,
    reciter: Option<u32>,
    json: bool,
) -> Result<(), String> {
    let chapter = chapter_number(number).map_err(|e| e.to_string())?;
    let (reading, audio) = futures::join!(
        ChapterReading::load(client, chapter),
        async {
            match reciter {
                Some(_) => Some(quranhub::chapter_audio_url(client, reciter, chapter).await),
                None => None,
            }
        }
    );
    let reading = reading.map_err(|e| e.user_message())?;
    let audio = audio.transpose().map_err(|e| e.user_message())?;

    if json {
        #[derive(Serialize)]
        struct SurahOutput<'a> {
            #[serde(flatten)]
            reading: &'a ChapterReading,
            #[serde(skip_serializing_if = "Option::is_none")]
            audio_url: Option<&'a str>,
        }
        return print_json(&SurahOutput {
            reading: &reading,
            audio_url: audio.as_ref().and_then(|url| url.as_deref()),
        });
    }

    print!("{}", render::render_reading(&reading));
    match audio {
        Some(Some(url)) => println!("Audio: {url}"),
        Some(None) => println!("Audio: tidak tersedia untuk qori ini."),
        None => {}
    }
    Ok(())
}

async fn read_juz(client: QuranClient, number: u32, json: bool) -> Result<(), String> {
    let juz = JuzNumber::new(number).map_err(|e| e.to_string())?;
    let sections = SectionController::new(client);
    let snapshot = sections
        .open(juz)
        .await
        .ok_or_else(|| format!("juz {juz} was replaced before it finished loading"))?;

    if json {
        return print_json(&snapshot);
    }
    print!("{}", render::render_section(&snapshot));
    Ok(())
}
