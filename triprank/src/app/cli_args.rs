use crate::model::ranking::RankingCriterion;
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Display;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub app: App,
}

#[derive(Subcommand)]
pub enum App {
    #[command(
        name = "rank",
        about = "score a set of trip options and rank them by two criteria"
    )]
    Rank {
        /// JSON file containing the itinerary options returned by the
        /// routing service
        options_filename: String,
        /// JSON file overriding the built-in rate table
        #[arg(long)]
        rates_filename: Option<String>,
        /// JSON file overriding the built-in emission factor tables
        #[arg(long)]
        emissions_filename: Option<String>,
        /// TOML settings file with rider profile and rate overrides
        #[arg(long)]
        settings_filename: Option<String>,
        /// criterion weighted double in the compound rank
        #[arg(long, value_enum, default_value_t = RankingCriterion::TotalCost)]
        primary: RankingCriterion,
        #[arg(long, value_enum, default_value_t = RankingCriterion::ProductiveTime)]
        secondary: RankingCriterion,
        /// score round trips instead of one-way trips
        #[arg(long)]
        round_trip: bool,
        /// score a year of commuting instead of a single day
        #[arg(long)]
        yearly: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
        };
        write!(f, "{}", s)
    }
}
