//! `w2l` - CLI for word2llm learning records
//!
//! This binary provides the command-line interface for inspecting and
//! maintaining the local learning-record store.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Read;

use chrono::{DateTime, Utc};
use clap::Parser;

use word2llm::cli::{
    Cli, ClearCommand, Command, ConfigCommand, DeleteCommand, ListCommand, OutputFormat,
    SaveCommand, ShowCommand, StatsCommand,
};
use word2llm::{init_logging, Config, FileBackend, LearningRecord, RecordStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Show(cmd) => handle_show(&config, &cmd),
        Command::Save(cmd) => handle_save(&config, &cmd),
        Command::Delete(cmd) => handle_delete(&config, &cmd),
        Command::Clear(cmd) => handle_clear(&config, &cmd),
        Command::Stats(cmd) => handle_stats(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn open_store(config: &Config) -> Result<RecordStore<FileBackend>, word2llm::Error> {
    let backend = FileBackend::open(config.data_dir())?;
    Ok(RecordStore::with_max_records(
        backend,
        config.storage.max_records,
    ))
}

fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map_or_else(|| millis.to_string(), |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

fn handle_list(config: &Config, cmd: &ListCommand) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config)?;
    let records = store.get_all()?;
    let records: Vec<&LearningRecord> = records.iter().take(cmd.limit).collect();

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Table => {
            println!("{:<24} {:<20} {:>6}  WORDS", "ID", "TIMESTAMP", "COUNT");
            for rec in &records {
                println!(
                    "{:<24} {:<20} {:>6}  {}",
                    rec.id,
                    format_timestamp(rec.timestamp),
                    rec.article.word_count,
                    rec.words.join(", ")
                );
            }
        }
        OutputFormat::Plain => {
            for rec in &records {
                println!(
                    "{}  {}  [{}]",
                    rec.id,
                    format_timestamp(rec.timestamp),
                    rec.words.join(", ")
                );
            }
        }
    }
    Ok(())
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config)?;
    let Some(record) = store.get_by_id(&cmd.id)? else {
        return Err(Box::new(word2llm::Error::record_not_found(&cmd.id)));
    };

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Plain | OutputFormat::Table => {
            println!("Id:        {}", record.id);
            println!("Saved:     {}", format_timestamp(record.timestamp));
            println!("Words:     {}", record.words.join(", "));
            println!();
            println!("{}", record.article.article);
            if let Some(translation) = &record.translation {
                println!();
                println!("Translation");
                println!("-----------");
                println!("{}", translation.translation);
                for point in &translation.language_points {
                    println!("  {}: {}", point.word, point.explanation);
                }
            }
            if let Some(questions) = &record.questions {
                if !questions.is_empty() {
                    println!();
                    println!("{} question(s) attached.", questions.len());
                }
            }
        }
    }
    Ok(())
}

fn handle_save(config: &Config, cmd: &SaveCommand) -> Result<(), Box<dyn std::error::Error>> {
    let raw = if cmd.file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&cmd.file)?
    };

    let record: LearningRecord = serde_json::from_str(&raw)?;
    let id = record.id.clone();

    let mut store = open_store(config)?;
    store.save(record)?;
    println!("Saved record {id}.");
    Ok(())
}

fn handle_delete(config: &Config, cmd: &DeleteCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;
    if store.get_by_id(&cmd.id)?.is_none() {
        return Err(Box::new(word2llm::Error::record_not_found(&cmd.id)));
    }
    store.delete_by_id(&cmd.id)?;
    println!("Deleted record {}.", cmd.id);
    Ok(())
}

fn handle_clear(config: &Config, cmd: &ClearCommand) -> Result<(), Box<dyn std::error::Error>> {
    if !cmd.yes {
        println!("This will remove all stored learning records.");
        println!("Use --yes to confirm.");
        return Ok(());
    }

    let mut store = open_store(config)?;
    store.clear_all()?;
    println!("All records cleared.");
    Ok(())
}

fn handle_stats(config: &Config, cmd: &StatsCommand) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config)?;
    let stats = store.stats()?;

    if cmd.json {
        let out = serde_json::json!({
            "total_records": stats.total_records,
            "max_records": store.max_records(),
            "oldest_timestamp": stats.oldest_timestamp,
            "newest_timestamp": stats.newest_timestamp,
            "data_dir": config.data_dir(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("w2l store");
        println!("---------");
        println!("Records:  {} / {}", stats.total_records, store.max_records());
        println!(
            "Oldest:   {}",
            stats.oldest_timestamp.map_or_else(|| "-".to_string(), format_timestamp)
        );
        println!(
            "Newest:   {}",
            stats.newest_timestamp.map_or_else(|| "-".to_string(), format_timestamp)
        );
        println!("Data dir: {}", config.data_dir().display());
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data dir:     {}", config.data_dir().display());
                println!("  Max records:  {}", config.storage.max_records);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
