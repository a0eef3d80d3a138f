//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::domain::{CategoryFilter, TrainCategory};

/// 命令行火车票查看器
#[derive(Debug, Parser)]
#[command(
    name = "tickets",
    version = "1.0",
    disable_version_flag = true,
    after_help = "Examples:\n    tickets 上海 北京 2017-10-01\n    tickets -dg 成都 南京 2017-10-05"
)]
pub struct Args {
    /// 动车
    #[arg(short = 'd')]
    pub emu: bool,

    /// 高铁
    #[arg(short = 'g')]
    pub high_speed: bool,

    /// 城际
    #[arg(short = 'c')]
    pub intercity: bool,

    /// 快速
    #[arg(short = 'k')]
    pub fast: bool,

    /// 特快
    #[arg(short = 't')]
    pub express: bool,

    /// 直达
    #[arg(short = 'z')]
    pub direct: bool,

    /// 版本
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Departure station name
    #[arg(required_unless_present = "list_stations")]
    pub from: Option<String>,

    /// Arrival station name
    #[arg(required_unless_present = "list_stations")]
    pub to: Option<String>,

    /// Travel date (YYYY-MM-DD)
    #[arg(required_unless_present = "list_stations")]
    pub date: Option<String>,

    /// Print every known station and its telecode, then exit
    #[arg(long)]
    pub list_stations: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Read the station feed from a local file instead of downloading it
    #[arg(long, value_name = "PATH")]
    pub stations_file: Option<PathBuf>,

    /// Where to keep the downloaded station snapshot
    #[arg(long, value_name = "PATH", env = "TICKETS_STATION_CACHE")]
    pub station_cache: Option<PathBuf>,

    /// Show trains from a saved query response instead of querying
    #[arg(long, value_name = "PATH")]
    pub replay: Option<PathBuf>,

    /// Ticket query endpoint
    #[arg(long, value_name = "URL", env = "TICKETS_QUERY_URL")]
    pub query_url: Option<String>,

    /// Station feed URL
    #[arg(long, value_name = "URL", env = "TICKETS_STATION_URL")]
    pub station_url: Option<String>,
}

impl Args {
    /// Categories selected by the `-dgcktz` flags.
    pub fn categories(&self) -> CategoryFilter {
        [
            (self.emu, TrainCategory::Emu),
            (self.high_speed, TrainCategory::HighSpeed),
            (self.intercity, TrainCategory::Intercity),
            (self.fast, TrainCategory::Fast),
            (self.express, TrainCategory::Express),
            (self.direct, TrainCategory::Direct),
        ]
        .into_iter()
        .filter_map(|(selected, category)| selected.then_some(category))
        .collect()
    }
}
