use crate::args::Command;
use anyhow::{Context, Result};
use bitsd::mapper::json;
use bitsd::prelude::{
    ArrayTemperatureEvent, Event, MapperConfig, MessageEvent, RawRecord, Snapshot, StatusEvent,
    TemperatureEvent,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

const STDIN: &str = "-";

/// Maps the subcommand's input and writes the typed result as JSON to `out`.
pub(crate) fn run(command: &Command, config: &MapperConfig, out: impl Write) -> Result<()> {
    let policy = config.mapping.content_policy;

    match command {
        Command::Status { input } => emit(out, &StatusEvent::create(&read(input)?)?),
        Command::Temperature { input } => emit(out, &TemperatureEvent::create(&read(input)?)?),
        Command::Message { input } => emit(out, &MessageEvent::create_with(&read(input)?, policy)?),
        Command::Batch { input } => {
            let records: Vec<RawRecord> = read(input)?;
            let events = ArrayTemperatureEvent::create(&records)?;
            info!(count = events.len(), "mapped temperature batch");
            emit(out, &events)
        },
        Command::Envelope { input } => emit(out, &Event::create_with(&read(input)?, policy)?),
        Command::Snapshot { input } => emit(out, &Snapshot::create_with(&read(input)?, policy)?),
    }
}

fn read<T: DeserializeOwned>(input: &Path) -> Result<T> {
    let text = if input.as_os_str() == STDIN {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };
    Ok(json::decode(&text)?)
}

fn emit(mut out: impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, value).context("Failed to write output")?;
    writeln!(out)?;
    Ok(())
}
