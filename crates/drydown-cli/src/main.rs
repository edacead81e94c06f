mod commands;
mod output;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "drydown",
    version,
    about = "Restoration damage classification and drying equipment sizing"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a water category has escalated since the loss
    Assess {
        /// Original water category (1-3)
        #[arg(short, long)]
        category: u8,

        /// Hours elapsed since the loss occurred
        #[arg(long)]
        hours: Decimal,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Determine the mold containment level from affected area
    Containment {
        /// Affected area in square feet
        #[arg(short, long)]
        area: Decimal,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Size drying equipment for an affected room
    Sizing {
        #[command(subcommand)]
        action: SizingAction,
    },
    /// Material remediation decisions (repair in place vs. discard)
    Materials {
        #[command(subcommand)]
        action: MaterialsAction,
    },
    /// Inspect the built-in reference tables
    Reference {
        #[command(subcommand)]
        action: ReferenceAction,
    },
}

#[derive(Subcommand)]
enum SizingAction {
    /// Estimate the air mover count for a room
    AirMovers {
        /// Water damage class (1-4)
        #[arg(long)]
        class: u8,

        /// Affected floor area in square feet
        #[arg(long)]
        floor: Decimal,

        /// Affected wall length in linear feet
        #[arg(long)]
        wall: Decimal,

        /// Wet ceiling/upper-wall area in square feet, if any
        #[arg(long)]
        ceiling: Option<Decimal>,

        /// Number of wall insets or offsets deeper than 18 inches
        #[arg(long, default_value_t = 0)]
        insets: u32,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Estimate the dehumidifier count for a room
    Dehumidifiers {
        /// Water damage class (1-4)
        #[arg(long)]
        class: u8,

        /// Room length in feet
        #[arg(long)]
        length: Decimal,

        /// Room width in feet
        #[arg(long)]
        width: Decimal,

        /// Ceiling height in feet
        #[arg(long)]
        height: Decimal,

        /// AHAM rating (pints/day) of the dehumidifier model
        #[arg(long)]
        aham: Decimal,

        /// Chart factor override (default: class LGR factor)
        #[arg(long)]
        factor: Option<Decimal>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

#[derive(Subcommand)]
enum MaterialsAction {
    /// Look up the remediation decision for a material
    Lookup {
        /// Material name (case-insensitive substring match)
        name: String,

        /// Custom decision table (JSON file) instead of the built-in matrix
        #[arg(short, long, value_name = "FILE")]
        table: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List the built-in decision matrix in table order
    List,
    /// Validate a custom decision table file
    Validate {
        /// Path to JSON table file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum ReferenceAction {
    /// Water contamination categories (1-3)
    Categories,
    /// Water damage classes (1-4)
    Classes,
    /// Mold containment levels (I-III)
    Containment,
    /// Drying standards, optionally filtered by material
    Standards {
        /// Material name (case-insensitive substring match)
        material: Option<String>,
    },
    /// Documentation requirements, optionally for one phase
    Docs {
        /// Phase name (assessment, daily, equipment, completion)
        phase: Option<String>,
    },
    /// Mold remediation procedure steps
    Steps,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assess {
            category,
            hours,
            output,
        } => commands::assess::escalation(category, hours, &output),
        Commands::Containment { area, output } => commands::assess::containment(area, &output),
        Commands::Sizing { action } => match action {
            SizingAction::AirMovers {
                class,
                floor,
                wall,
                ceiling,
                insets,
                output,
            } => commands::sizing::air_movers(class, floor, wall, ceiling, insets, &output),
            SizingAction::Dehumidifiers {
                class,
                length,
                width,
                height,
                aham,
                factor,
                output,
            } => commands::sizing::dehumidifiers(class, length, width, height, aham, factor, &output),
        },
        Commands::Materials { action } => match action {
            MaterialsAction::Lookup {
                name,
                table,
                output,
            } => commands::materials::lookup(&name, table, &output),
            MaterialsAction::List => commands::materials::list(),
            MaterialsAction::Validate { file } => commands::materials::validate(&file),
        },
        Commands::Reference { action } => match action {
            ReferenceAction::Categories => commands::reference::categories(),
            ReferenceAction::Classes => commands::reference::classes(),
            ReferenceAction::Containment => commands::reference::containment(),
            ReferenceAction::Standards { material } => {
                commands::reference::standards(material.as_deref())
            }
            ReferenceAction::Docs { phase } => commands::reference::docs(phase.as_deref()),
            ReferenceAction::Steps => commands::reference::steps(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
