use std::process::ExitCode;

use clap::Parser;

use tickets::cli::Args;
use tickets::domain::{CategoryFilter, InputError, TravelDate};
use tickets::logging::init_logging;
use tickets::query::{
    QueryClient, QueryConfig, QueryError, ReplayTicketSource, TicketQuery, TicketSource,
};
use tickets::render::{ResultPresenter, station_list};
use tickets::search::search;
use tickets::stations::{
    StationCache, StationCacheConfig, StationClient, StationClientConfig, StationDirectory,
    StationError, load_directory,
};

/// Bad station name or date.
const EXIT_INVALID_INPUT: u8 = 1;

/// Station feed or ticket query failed.
const EXIT_FETCH_FAILED: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let directory = match load_stations(&args).await {
        Ok(directory) => directory,
        Err(e) => {
            eprintln!("获取车站信息失败: {e}");
            return ExitCode::from(EXIT_FETCH_FAILED);
        }
    };
    tracing::info!(count = directory.len(), "loaded station directory");

    if args.list_stations {
        print!("{}", station_list(&directory));
        return ExitCode::SUCCESS;
    }

    let query = match resolve_query(&args, &directory) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    };

    let filter = args.categories();
    let presenter = ResultPresenter::new(!args.no_color);

    let result = query_and_show(&args, &directory, &query, &filter, presenter).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("查询失败: {e}");
            ExitCode::from(EXIT_FETCH_FAILED)
        }
    }
}

/// Build the station directory from a local file or the remote feed.
async fn load_stations(args: &Args) -> Result<StationDirectory, StationError> {
    if let Some(path) = &args.stations_file {
        return StationDirectory::from_feed_file(path);
    }

    let mut config = StationClientConfig::new();
    if let Some(url) = &args.station_url {
        config = config.with_feed_url(url);
    }
    let client = StationClient::new(config)?;
    let cache = args
        .station_cache
        .as_ref()
        .map(|path| StationCache::new(StationCacheConfig::new(path)));

    load_directory(&client, cache.as_ref()).await
}

/// Validate the positional arguments: stations first, then the date.
fn resolve_query(args: &Args, directory: &StationDirectory) -> Result<TicketQuery, InputError> {
    let from = args.from.as_deref().unwrap_or_default();
    let to = args.to.as_deref().unwrap_or_default();
    let date = args.date.as_deref().unwrap_or_default();

    for name in [from, to] {
        if directory.resolve(name).is_none() {
            return Err(InputError::StationNotFound(name.to_string()));
        }
    }

    let today = chrono::Local::now().date_naive();
    let date = TravelDate::parse(date, today)?;

    TicketQuery::resolve(directory, from, to, date)
}

/// Pick the record source and print the results.
async fn query_and_show(
    args: &Args,
    directory: &StationDirectory,
    query: &TicketQuery,
    filter: &CategoryFilter,
    presenter: ResultPresenter,
) -> Result<(), QueryError> {
    match &args.replay {
        Some(path) => {
            let source = ReplayTicketSource::from_file(path).await?;
            show(&source, directory, query, filter, presenter).await
        }
        None => {
            let mut config = QueryConfig::new();
            if let Some(url) = &args.query_url {
                config = config.with_base_url(url);
            }
            let client = QueryClient::new(config)?;
            show(&client, directory, query, filter, presenter).await
        }
    }
}

async fn show<S: TicketSource>(
    source: &S,
    directory: &StationDirectory,
    query: &TicketQuery,
    filter: &CategoryFilter,
    presenter: ResultPresenter,
) -> Result<(), QueryError> {
    let outcome = search(source, directory, query, filter).await?;

    println!("{}", presenter.render(&outcome.entries));

    if !outcome.skipped.is_empty() {
        eprintln!("已跳过 {} 条无法解析的车次记录", outcome.skipped.len());
    }

    Ok(())
}
