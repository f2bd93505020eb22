// src/cli.rs
//
// Command-line front end: flags → SearchCriteria → one search → stdout.

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, eyre};

use crate::{
    config::{
        consts::{DEFAULT_DESTINATION, DEFAULT_ORIGIN},
        options::{AppOptions, OutputFormat},
    },
    core::net::HttpFetcher,
    criteria::{Passengers, SearchCriteria, TripType},
    csv,
    data::ResultTable,
    error::CriteriaError,
    progress::CliProgress,
    query, runner,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TripArg {
    OneWay,
    RoundTrip,
}

impl From<TripArg> for TripType {
    fn from(t: TripArg) -> Self {
        match t {
            TripArg::OneWay => TripType::OneWay,
            TripArg::RoundTrip => TripType::RoundTrip,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Csv,
    Tsv,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Tsv => OutputFormat::Tsv,
        }
    }
}

/// Search Precision Air availability for one route and date.
#[derive(Debug, Parser)]
#[command(name = "flight_scrape", version, about)]
pub struct Args {
    /// Trip type
    #[arg(long, value_enum, default_value_t = TripArg::OneWay)]
    pub trip: TripArg,

    /// Departure airport code
    #[arg(long = "from", default_value = DEFAULT_ORIGIN)]
    pub origin: String,

    /// Arrival airport code
    #[arg(long = "to", default_value = DEFAULT_DESTINATION)]
    pub destination: String,

    /// Departure date, YYYY-MM-DD [default: today]
    #[arg(long)]
    pub depart: Option<NaiveDate>,

    /// Return date for round trips, YYYY-MM-DD [default: departure + 1 day]
    #[arg(long = "return")]
    pub return_date: Option<NaiveDate>,

    #[arg(long, default_value_t = 1)]
    pub adults: u32,

    #[arg(long, default_value_t = 0)]
    pub children: u32,

    #[arg(long, default_value_t = 0)]
    pub infants: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Table)]
    pub format: FormatArg,

    /// Omit the header line
    #[arg(long)]
    pub no_headers: bool,

    /// Print the request URL and exit without fetching
    #[arg(long)]
    pub print_url: bool,

    /// Override the availability page URL
    #[arg(long, env = "FLIGHT_SCRAPE_BASE_URL")]
    pub base_url: Option<String>,
}

impl Args {
    /// Dates default relative to `today`. A return date given for a one-way
    /// trip is ignored rather than rejected.
    pub fn criteria(&self, today: NaiveDate) -> Result<SearchCriteria, CriteriaError> {
        let trip: TripType = self.trip.into();
        let departure = self.depart.unwrap_or(today);
        let return_date = match trip {
            TripType::OneWay => {
                if self.return_date.is_some() {
                    logw!("CLI: --return ignored for a one-way trip");
                }
                None
            }
            TripType::RoundTrip => Some(
                self.return_date
                    .unwrap_or_else(|| departure.succ_opt().unwrap_or(departure)),
            ),
        };
        SearchCriteria::new(
            trip,
            self.origin.as_str(),
            self.destination.as_str(),
            departure,
            return_date,
            Passengers::new(self.adults, self.children, self.infants),
        )
    }

    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(url) = &self.base_url {
            opts.search.set_base_url(url);
        }
        opts.output.format = self.format.into();
        opts.output.include_headers = !self.no_headers;
        opts
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let opts = args.options();
    let criteria = args.criteria(Local::now().date_naive())?;

    if args.print_url {
        println!("{}", query::build_url(&criteria, &opts.search)?);
        return Ok(());
    }

    let fetcher = HttpFetcher::new()?;
    let mut prog = CliProgress;
    let table = match runner::search(&criteria, &opts.search, &fetcher, Some(&mut prog)) {
        Ok(t) => t,
        Err(e) => return Err(eyre!(e.user_message())),
    };

    print!("{}", render(&table, &opts));
    Ok(())
}

/// Stringify the result table per the output options.
pub fn render(table: &ResultTable, opts: &AppOptions) -> String {
    let headers = ResultTable::headers();
    let headers = opts.output.include_headers.then_some(headers.as_slice());
    let rows = table.to_string_rows();

    match opts.output.format.delim() {
        Some(sep) => csv::to_delimited_string(headers, &rows, sep),
        None => aligned(headers, &rows),
    }
}

/// Space-padded columns, two spaces apart.
fn aligned(headers: Option<&[String]>, rows: &[Vec<String>]) -> String {
    let ncols = headers
        .map(|h| h.len())
        .or_else(|| rows.first().map(|r| r.len()))
        .unwrap_or(0);
    let mut widths = vec![0usize; ncols];
    for line in headers.into_iter().chain(rows.iter().map(|r| r.as_slice())) {
        for (w, cell) in widths.iter_mut().zip(line) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = s!();
    let mut push_line = |line: &[String]| {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    };
    if let Some(h) = headers {
        push_line(h);
    }
    for r in rows {
        push_line(r);
    }
    out
}
