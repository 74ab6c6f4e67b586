use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use vaas_base::Language;
use vaas_ephem::{EphemerisError, GeoLocation, MeanEphemeris};
use vaas_panchang::{
    AccuratePanchang, AccurateShivVaas, DataSource, ShivVaasData, accurate_panchang,
    accurate_shiv_vaas, accurate_tithi, accurate_tithi_at_time, approximate_tithi, moon_times,
    nakshatra_for_date, puja_time, shiv_vaas_for_date, sun_times, yoga_for_date,
};

#[derive(Parser)]
#[command(name = "vaas", about = "Panchang and Shiv Vaas calculator")]
struct Cli {
    /// Output language: sanskrit or english
    #[arg(long, global = true, default_value = "sanskrit")]
    lang: Language,
    /// Observer latitude in degrees (north positive)
    #[arg(long, global = true, default_value_t = 28.6139, allow_hyphen_values = true)]
    lat: f64,
    /// Observer longitude in degrees (east positive)
    #[arg(long, global = true, default_value_t = 77.2090, allow_hyphen_values = true)]
    lon: f64,
    /// Civil time zone as minutes east of UTC (IST = 330)
    #[arg(long, global = true, default_value_t = 330, allow_hyphen_values = true)]
    utc_offset_minutes: i32,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tithi at sunrise (or at --at) from the ephemeris
    Tithi {
        /// Local date (YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss])
        date: String,
        /// Local time to sample instead of sunrise
        #[arg(long)]
        at: Option<String>,
    },
    /// Day-count tithi estimate
    TithiApprox {
        /// Local date (YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss])
        date: String,
    },
    /// Shiva's abode for the day
    ShivVaas {
        /// Local date (YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss])
        date: String,
        /// Local time to sample instead of sunrise
        #[arg(long)]
        at: Option<String>,
    },
    /// Shiva observance (Monday, Pradosh, Shivaratri, Shravan) for the day
    ShivVaasDay {
        /// Local date (YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss])
        date: String,
    },
    /// Day-of-year nakshatra
    Nakshatra {
        /// Local date (YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss])
        date: String,
    },
    /// Day-of-year yoga
    Yoga {
        /// Local date (YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss])
        date: String,
    },
    /// Placeholder sunrise/sunset
    SunTimes {
        /// Local date (YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss])
        date: String,
    },
    /// Moonrise/moonset from the day-count lunar phase
    MoonTimes {
        /// Local date (YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss])
        date: String,
    },
    /// Full panchang for the day
    Panchang {
        /// Local date (YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss])
        date: String,
        /// Local time to sample instead of sunrise
        #[arg(long)]
        at: Option<String>,
    },
    /// Recommended Shiva puja period for a local time
    PujaTime {
        /// Local date and time (YYYY-MM-DDThh:mm[:ss])
        date: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid date {0:?}: expected YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss]")]
    Date(String),
    #[error("{0}")]
    Location(EphemerisError),
    #[error("invalid --utc-offset-minutes: {0}")]
    Offset(EphemerisError),
    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` and `YYYY-MM-DDThh:mm:ss`
/// (a space may replace the `T`). A bare date means local midnight.
fn parse_local(s: &str) -> Result<NaiveDateTime, CliError> {
    let s = s.trim();
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(t);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| CliError::Date(s.to_owned()))
}

fn parse_optional(s: Option<&str>) -> Result<Option<NaiveDateTime>, CliError> {
    s.map(parse_local).transpose()
}

struct Context {
    language: Language,
    location: GeoLocation,
    ephemeris: MeanEphemeris,
    json: bool,
}

impl Context {
    fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let location = GeoLocation::new(cli.lat, cli.lon);
        location.validate().map_err(CliError::Location)?;
        let ephemeris = MeanEphemeris::new(cli.utc_offset_minutes).map_err(CliError::Offset)?;
        Ok(Self {
            language: cli.lang,
            location,
            ephemeris,
            json: cli.json,
        })
    }

    /// Print `value` as pretty JSON when `--json` is set, else run `text`.
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T)) -> Result<(), CliError> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            text(value);
        }
        Ok(())
    }
}

fn source_note(source: DataSource) -> &'static str {
    match source {
        DataSource::Ephemeris => "",
        DataSource::Approximation => "  (approximation: ephemeris unavailable)",
    }
}

fn print_shiv_vaas(s: &ShivVaasData) {
    if !s.is_shiv_vaas {
        println!("No Shiva observance");
    } else {
        println!("{}", s.kind);
        println!("  {}", s.significance);
    }
    println!("  Window: {}  to  {}", s.start_time, s.end_time);
    for o in &s.observances {
        println!("  - {o}");
    }
}

fn print_accurate_shiv_vaas(s: &AccurateShivVaas) {
    println!(
        "Shiv Vaas {}: {}{}",
        s.shiv_vaas_index,
        s.shiv_vaas.kind,
        source_note(s.source)
    );
    println!(
        "  Tithi: {} ({})  {}",
        s.tithi_details.name, s.tithi_details.number, s.tithi_details.paksha
    );
    println!("  {}", s.shiv_vaas.significance);
    println!(
        "  Auspicious: {}",
        if s.location.auspicious { "yes" } else { "no" }
    );
    println!("  Window: {}  to  {}", s.shiv_vaas.start_time, s.shiv_vaas.end_time);
    for o in &s.shiv_vaas.observances {
        println!("  - {o}");
    }
}

fn print_panchang(p: &AccuratePanchang) {
    let d = &p.panchang;
    println!("Tithi:      {} ({}){}", d.tithi, d.tithi_number, source_note(p.source));
    println!("Nakshatra:  {} ({})", d.nakshatra, d.nakshatra_number);
    println!("Yoga:       {}", d.yoga);
    println!("Karana:     {}", d.karana);
    println!("Sunrise:    {}", d.sunrise);
    println!("Sunset:     {}", d.sunset);
    println!("Moonrise:   {}", d.moonrise);
    println!("Moonset:    {}", d.moonset);
    println!("Rahu Kaal:  {}", d.rahu);
    println!("Yamaghanta: {}", d.yamaghanta);
    println!("Gulika:     {}", d.gulika);
    println!("Abhijit:    {}", d.abhijit);
    println!(
        "Sun {:.4} deg  Moon {:.4} deg  Elongation {:.4} deg",
        p.accurate_data.sun_longitude, p.accurate_data.moon_longitude, p.accurate_data.tithi_degrees
    );
}

fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = Context::from_cli(&cli)?;
    let lang = ctx.language;
    let loc = ctx.location;
    let eph = &ctx.ephemeris;

    match cli.command {
        Commands::Tithi { date, at } => {
            let date = parse_local(&date)?;
            let t = match parse_optional(at.as_deref())? {
                Some(at) => accurate_tithi_at_time(eph, date, &loc, at, lang),
                None => accurate_tithi(eph, date, &loc, lang),
            };
            ctx.emit(&t, |t| println!("Tithi: {} ({})  {}", t.name, t.number, t.paksha))
        }
        Commands::TithiApprox { date } => {
            let t = approximate_tithi(parse_local(&date)?);
            ctx.emit(&t, |t| println!("Tithi (approximate): {} ({})", t.name, t.number))
        }
        Commands::ShivVaas { date, at } => {
            let date = parse_local(&date)?;
            let at = parse_optional(at.as_deref())?;
            let s = accurate_shiv_vaas(eph, date, &loc, lang, at);
            ctx.emit(&s, print_accurate_shiv_vaas)
        }
        Commands::ShivVaasDay { date } => {
            let s = shiv_vaas_for_date(parse_local(&date)?, lang);
            ctx.emit(&s, print_shiv_vaas)
        }
        Commands::Nakshatra { date } => {
            let n = nakshatra_for_date(parse_local(&date)?, lang);
            ctx.emit(&n, |n| println!("Nakshatra: {} ({})", n.name, n.number))
        }
        Commands::Yoga { date } => {
            let y = yoga_for_date(parse_local(&date)?, lang);
            ctx.emit(&y, |y| println!("Yoga: {y}"))
        }
        Commands::SunTimes { date } => {
            let s = sun_times(parse_local(&date)?, &loc);
            ctx.emit(&s, |s| {
                println!("Sunrise: {}", s.sunrise);
                println!("Sunset:  {}", s.sunset);
            })
        }
        Commands::MoonTimes { date } => {
            let m = moon_times(parse_local(&date)?);
            ctx.emit(&m, |m| {
                println!("Moonrise: {}", m.moonrise);
                println!("Moonset:  {}", m.moonset);
            })
        }
        Commands::Panchang { date, at } => {
            let date = parse_local(&date)?;
            let at = parse_optional(at.as_deref())?;
            let p = accurate_panchang(eph, date, Some(&loc), lang, at);
            ctx.emit(&p, |p| {
                println!(
                    "Panchang for {} at {:.4} N, {:.4} E\n",
                    date.date(),
                    loc.latitude_deg,
                    loc.longitude_deg
                );
                print_panchang(p);
            })
        }
        Commands::PujaTime { date } => {
            let p = puja_time(parse_local(&date)?, lang);
            ctx.emit(&p, |p| println!("{}: {}", p.time, p.significance))
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_date_forms() {
        assert_eq!(parse_local("2024-01-15").unwrap().to_string(), "2024-01-15 00:00:00");
        assert_eq!(
            parse_local("2024-01-15T07:14").unwrap().to_string(),
            "2024-01-15 07:14:00"
        );
        assert_eq!(
            parse_local("2024-01-15T07:14:30").unwrap().to_string(),
            "2024-01-15 07:14:30"
        );
        assert_eq!(
            parse_local("2024-01-15 19:05").unwrap().to_string(),
            "2024-01-15 19:05:00"
        );
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(matches!(parse_local("2024-13-01"), Err(CliError::Date(_))));
        assert!(matches!(parse_local("15/01/2024"), Err(CliError::Date(_))));
        assert!(parse_optional(None).unwrap().is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vaas", "panchang", "2024-01-15", "--lang", "english", "--lat", "-33.87", "--lon",
            "151.21", "--json",
        ])
        .unwrap();
        let ctx = Context::from_cli(&cli).unwrap();
        assert_eq!(ctx.language, Language::English);
        assert!((ctx.location.latitude_deg + 33.87).abs() < 1e-9);
        assert!(ctx.json);
        assert!(matches!(cli.command, Commands::Panchang { at: None, .. }));
    }

    #[test]
    fn context_rejects_bad_values() {
        let bad_lang = Cli::try_parse_from(["vaas", "yoga", "2024-01-15", "--lang", "tamil"]);
        assert_eq!(
            bad_lang.err().map(|e| e.kind()),
            Some(ErrorKind::ValueValidation)
        );

        let bad_lat = Cli::try_parse_from(["vaas", "yoga", "2024-01-15", "--lat", "95"]).unwrap();
        assert!(matches!(Context::from_cli(&bad_lat), Err(CliError::Location(_))));

        let bad_offset = Cli::try_parse_from([
            "vaas",
            "yoga",
            "2024-01-15",
            "--utc-offset-minutes",
            "2000",
        ])
        .unwrap();
        assert!(matches!(Context::from_cli(&bad_offset), Err(CliError::Offset(_))));
    }
}
