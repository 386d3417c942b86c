#[macro_use]
extern crate log;

mod config_file;

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use formbind::{
    FormData, Section,
    converter::{IntConverter, OptionalConverter, ReceiverKeysConverter},
    enums::{AprsAntennaDirections, AprsBeaconSymbols, WfmTauValues},
    input::{
        CheckboxInput, DropdownInput, FloatInput, LocationInput, MultiCheckboxInput, NumberInput,
        Q65ModeMatrix, Service, TextAreaInput, TextInput,
    },
    merge_update,
};

use crate::config_file::{dump_config, load_config};

/// Render receiver settings forms and parse submissions against a config file.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the settings form for the values in CONFIG.
    Render {
        /// Configuration snapshot (.toml or .json).
        config: PathBuf,
    },
    /// Apply a submitted form to CONFIG and print the result.
    ///
    /// The config file itself is left untouched.
    Parse {
        /// Configuration snapshot (.toml or .json).
        config: PathBuf,
        /// File holding the urlencoded form body, `-` for stdin.
        payload: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let sections = settings_sections();

    match cli.command {
        Command::Render { config } => {
            let snapshot = load_config(&config)?;
            for section in &sections {
                println!("{}", section.render(&snapshot));
            }
        }
        Command::Parse { config, payload } => {
            let mut snapshot = load_config(&config)?;
            let data = FormData::from_urlencoded(read_payload(&payload)?.trim());
            for section in &sections {
                let update = section
                    .parse(&data)
                    .with_context(|| format!("invalid input in section {}", section.title()))?;
                merge_update(&mut snapshot, update);
            }
            println!("{}", dump_config(&config, snapshot)?);
        }
    }

    Ok(())
}

fn read_payload(payload: &str) -> anyhow::Result<String> {
    if payload == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    fs::read_to_string(payload).with_context(|| format!("Failed to read {payload}"))
}

fn settings_sections() -> Vec<Section> {
    let receiver = Section::new("Receiver information")
        .with_input(TextInput::new("receiver_name", "Receiver name"))
        .with_input(TextInput::new("receiver_location", "Receiver location"))
        .with_input(
            NumberInput::new("receiver_asl", "Receiver elevation")
                .with_append("meters above mean sea level"),
        )
        .with_composite(LocationInput::new("receiver_gps", "Receiver coordinates"))
        .with_input(
            TextAreaInput::new("receiver_keys", "Receiver keys")
                .with_converter(ReceiverKeysConverter)
                .with_infotext("One key per line"),
        );

    let receiver_limits = Section::new("Receiver limits")
        .with_input(
            NumberInput::new("max_clients", "Maximum number of clients")
                .with_converter(OptionalConverter::new(IntConverter))
                .with_infotext("Leave empty for no limit"),
        )
        .with_input(
            FloatInput::new("initial_squelch_level", "Initial squelch level").with_append("dBFS"),
        )
        .with_input(CheckboxInput::new(
            "allow_audio_recording",
            "Audio recording",
            "Allow users to record received audio",
        ));

    let demodulation = Section::new("Demodulation and decoding")
        .with_input(DropdownInput::from_enum::<WfmTauValues>(
            "wfm_deemphasis_tau",
            "Tau setting for WFM (broadcast FM) deemphasis",
        ))
        .with_input(MultiCheckboxInput::services(
            "services_decoders",
            "Enabled services",
            [
                Service::new("ft8", "FT8"),
                Service::new("wspr", "WSPR"),
                Service::new("js8", "JS8Call"),
                Service::new("packet", "Packet"),
                Service::new("ism", "ISM"),
            ],
        ))
        .with_input(MultiCheckboxInput::js8_profiles(
            "js8_enabled_profiles",
            "Enabled JS8Call profiles",
        ))
        .with_composite(Q65ModeMatrix::new(
            "q65_enabled_combinations",
            "Enabled Q65 Mode combinations",
        ));

    let aprs = Section::new("APRS")
        .with_input(TextInput::new("aprs_callsign", "APRS callsign"))
        .with_input(DropdownInput::from_enum::<AprsBeaconSymbols>(
            "aprs_igate_symbol",
            "IGate symbol",
        ))
        .with_input(DropdownInput::from_enum::<AprsAntennaDirections>(
            "aprs_igate_dir",
            "Antenna direction",
        ));

    vec![receiver, receiver_limits, demodulation, aprs]
}
