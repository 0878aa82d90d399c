use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::debug;
use ogre_core::core_api::{CoreError, Engine, ReadResult, Session};
use ogre_core::field::{MISC_DISPLAY_ORDER, UNIT_DISPLAY_ORDER};
use ogre_core::reference::ReferenceTables;
use serde_json::Value as JsonValue;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Inspect and edit SNES save files of 'Ogre Battle: The March of the Black Queen'"
)]
struct Cli {
    /// Save slot to operate on (0, 1 or 2).
    #[arg(short, long, global = true, default_value_t = 0)]
    slot: usize,
    /// Directory holding classes.json, items.json and names.json.
    #[arg(long, global = true, value_name = "DIR")]
    tables: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(value_name = "FILE")]
    path: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show data in human readable form.
    Show {
        #[command(subcommand)]
        what: ShowCommand,
    },
    /// Modify a field and save the slot.
    Update {
        #[command(subcommand)]
        what: UpdateCommand,
    },
    /// Show or repair the slot checksum.
    FixChecksum {
        /// Print stored and expected checksum without writing.
        #[arg(short, long)]
        dry_run: bool,
    },
    Debug {
        #[command(subcommand)]
        what: DebugCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ShowCommand {
    Unit {
        /// Field to show; repeat for several. Shows every field when omitted.
        #[arg(short, long = "info", value_name = "INFO")]
        info: Vec<String>,
        #[arg(value_name = "UNIT_INDEX", required = true)]
        units: Vec<usize>,
    },
    Misc {
        #[arg(short, long = "info", value_name = "INFO")]
        info: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
enum UpdateCommand {
    Unit {
        #[arg(value_name = "UNIT_INDEX")]
        unit: usize,
        #[arg(value_name = "INFO")]
        info: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },
    Misc {
        #[arg(value_name = "INFO")]
        info: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

#[derive(Debug, Subcommand)]
enum DebugCommand {
    /// Print the pad/slot sections of the file.
    Layout,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let engine = match &cli.tables {
        Some(dir) => {
            let tables = ReferenceTables::load_from_dir(dir).unwrap_or_else(|e| {
                fail(&format!("Error loading reference tables from {}", dir.display()), e)
            });
            Engine::with_tables(tables)
        }
        None => Engine::new(),
    };

    if let Command::Debug {
        what: DebugCommand::Layout,
    } = &cli.command
    {
        let layout = engine
            .file_layout(&cli.path)
            .unwrap_or_else(|e| fail("Error reading layout", e));
        if cli.json {
            print_json(&ogre_render::layout_to_json(&layout));
        } else {
            print!("{}", ogre_render::render_layout_text(&layout));
        }
        return;
    }

    debug!("opening {} slot {}", cli.path.display(), cli.slot);
    let mut session = engine.open(&cli.path, cli.slot).unwrap_or_else(|e| {
        fail(
            &format!("Error loading slot {} of {}", cli.slot, cli.path.display()),
            e,
        )
    });

    match &cli.command {
        Command::Show { what } => show(&session, what, cli.json),
        Command::Update { what } => update(&mut session, what, cli.json),
        Command::FixChecksum { dry_run } => fix_checksum(&mut session, *dry_run, cli.json),
        Command::Debug { .. } => unreachable!("handled before the slot is loaded"),
    }
}

fn fail(context: &str, e: CoreError) -> ! {
    eprintln!("{context}: {e}");
    process::exit(1);
}

fn print_json(value: &JsonValue) {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    });
    println!("{rendered}");
}

fn selected<'a>(requested: &'a [String], defaults: &'a [&'static str]) -> Vec<&'a str> {
    if requested.is_empty() {
        defaults.to_vec()
    } else {
        requested.iter().map(String::as_str).collect()
    }
}

fn show(session: &Session, what: &ShowCommand, json: bool) {
    match what {
        ShowCommand::Unit { info, units } => {
            let names = selected(info, &UNIT_DISPLAY_ORDER);
            let mut rows: Vec<(usize, Vec<ReadResult>)> = Vec::with_capacity(units.len());
            for &unit in units {
                let fields = names
                    .iter()
                    .map(|name| session.get_unit_info(unit, name))
                    .collect::<Result<Vec<_>, _>>()
                    .unwrap_or_else(|e| fail(&format!("Error reading unit {unit}"), e));
                rows.push((unit, fields));
            }
            if json {
                print_json(&ogre_render::units_to_json(&rows));
            } else {
                for (unit, fields) in &rows {
                    print!("{}", ogre_render::render_unit_text(*unit, fields));
                }
            }
        }
        ShowCommand::Misc { info } => {
            let names = selected(info, &MISC_DISPLAY_ORDER);
            let fields = names
                .iter()
                .map(|name| session.get_misc_display(name))
                .collect::<Result<Vec<_>, _>>()
                .unwrap_or_else(|e| fail("Error reading misc info", e));
            if json {
                print_json(&ogre_render::misc_to_json(&fields));
            } else {
                print!("{}", ogre_render::render_misc_text(&fields));
            }
        }
    }
}

fn update(session: &mut Session, what: &UpdateCommand, json: bool) {
    let (unit, info, value) = match what {
        UpdateCommand::Unit { unit, info, value } => (Some(*unit), info, value),
        UpdateCommand::Misc { info, value } => (None, info, value),
    };

    let read = |session: &Session| match unit {
        Some(index) => session.get_unit_info(index, info),
        None => session.get_misc_display(info),
    };

    let old = read(session).unwrap_or_else(|e| fail("Error reading current value", e));
    match unit {
        Some(index) => session.set_unit_info(index, info, value),
        None => session.set_misc_info(info, value),
    }
    .unwrap_or_else(|e| fail(&format!("Error applying {info} edit"), e));
    let new = read(session).unwrap_or_else(|e| fail("Error reading new value", e));

    session
        .save()
        .unwrap_or_else(|e| fail(&format!("Error writing {}", session.path().display()), e));

    if json {
        print_json(&ogre_render::update_to_json(unit, &old, &new));
    } else {
        println!("{}", ogre_render::render_update_line(unit, &old, &new));
    }
}

fn fix_checksum(session: &mut Session, dry_run: bool, json: bool) {
    if !dry_run {
        session
            .save()
            .unwrap_or_else(|e| fail(&format!("Error writing {}", session.path().display()), e));
    }

    if json {
        let report = session
            .checksum_report()
            .unwrap_or_else(|e| fail("Error computing checksum", e));
        print_json(&ogre_render::checksum_to_json(&report));
        return;
    }

    let stored = session
        .get_checksum()
        .unwrap_or_else(|e| fail("Error reading checksum", e));
    let computed = session
        .compute_checksum_result()
        .unwrap_or_else(|e| fail("Error computing checksum", e));
    print!("{}", ogre_render::render_checksum_text(&stored, &computed));
}
