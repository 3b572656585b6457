use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Args, Parser, Subcommand};
use kundali_ephem::AnalyticEphemeris;
use kundali_search::{
    BirthAttributes, BoundaryTime, Chart, CurrentDasha, DashaTimeline, DivisionalChart,
    EngineConfig, Kundali, KundaliEngine, Panchang, PanchangElement,
};
use kundali_vedic_base::{AttributeTable, BirthMoment, NAVAMSHA};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kundali", about = "Sidereal birth chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Local birth date, time and place.
#[derive(Args, Clone)]
struct BirthArgs {
    /// Local birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Local birth time (HH:MM, 24-hour)
    #[arg(long)]
    time: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// UTC offset in hours, e.g. 5.5
    #[arg(long, allow_hyphen_values = true)]
    tz: f64,
    /// Engine configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Attribute table file (JSON); the built-in table when omitted
    #[arg(long)]
    table: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// D1 chart: ascendant, nine grahas and houses
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Divisional chart (D1..D300)
    Divisional {
        #[command(flatten)]
        birth: BirthArgs,
        /// Division count, 1-300
        #[arg(long, default_value_t = NAVAMSHA)]
        divisor: u16,
    },
    /// D1 positions with houses counted from the Moon
    MoonChart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Vimshottari periods, or the running ones with --as-of
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Local date (YYYY-MM-DD) or date and time (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Panchang at birth with end times
    Panchang {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Avakhada attributes of the natal Moon
    Avakhada {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Everything above in one record
    Kundali {
        #[command(flatten)]
        birth: BirthArgs,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{s}': {e}"))
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("invalid time '{s}': {e}"))
}

fn parse_as_of(s: &str) -> Result<NaiveDateTime, String> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(dt);
    }
    parse_date(s).map(|d| d.and_time(NaiveTime::default()))
}

fn birth_moment(args: &BirthArgs) -> Result<BirthMoment, String> {
    use chrono::{Datelike, Timelike};
    let date = parse_date(&args.date)?;
    let time = parse_time(&args.time)?;
    BirthMoment::new(
        date.year(),
        date.month(),
        date.day(),
        time.hour(),
        time.minute(),
        args.lat,
        args.lon,
        args.tz,
    )
    .map_err(|e| e.to_string())
}

fn build_engine(args: &BirthArgs) -> KundaliEngine<AnalyticEphemeris> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path).unwrap_or_else(|e| fail(e)),
        None => EngineConfig::default(),
    };
    let table = match &args.table {
        Some(path) => AttributeTable::load(path),
        None => AttributeTable::standard(),
    }
    .unwrap_or_else(|e| fail(e));
    debug!(
        ayanamsha = config.ayanamsha.name(),
        ascendant = config.ascendant.name(),
        "engine configured"
    );
    KundaliEngine::new(AnalyticEphemeris::new(), Arc::new(table), config)
        .unwrap_or_else(|e| fail(e))
}

fn prepare(args: &BirthArgs) -> (KundaliEngine<AnalyticEphemeris>, BirthMoment) {
    let birth = birth_moment(args).unwrap_or_else(|e| fail(e));
    (build_engine(args), birth)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn print_chart(chart: &Chart) {
    println!("{} (ayanamsha {:.4}°)", chart.variant.name(), chart.ayanamsha_deg);
    println!(
        "  {:<10} {:>9}  {:<10} {:<14} {:>4} {:>5}  R",
        "Point", "Longitude", "Sign", "Nakshatra", "Pada", "House"
    );
    for p in &chart.planets {
        println!(
            "  {:<10} {:>9.4}  {:<10} {:<14} {:>4} {:>5}  {}",
            p.name,
            p.sidereal_longitude,
            p.sign_name,
            p.nakshatra_name,
            p.pada,
            p.house,
            if p.is_retrograde { "R" } else { "" }
        );
    }
    print_houses(chart.houses.iter().map(|h| (h.number, &h.sign_name, &h.occupants)));
}

fn print_divisional(chart: &DivisionalChart) {
    println!("{}", chart.variant.name());
    for p in &chart.planets {
        println!(
            "  {:<10} {:<10} house {:>2}{}",
            p.name,
            p.sign_name,
            p.house,
            if p.is_retrograde { "  R" } else { "" }
        );
    }
    print_houses(chart.houses.iter().map(|h| (h.number, &h.sign_name, &h.occupants)));
}

fn print_houses<'a>(houses: impl Iterator<Item = (u8, &'a String, &'a Vec<&'static str>)>) {
    println!("  Houses:");
    for (number, sign, occupants) in houses {
        println!("    {number:>2} {sign:<10} {}", occupants.join(", "));
    }
}

fn print_timeline(timeline: &DashaTimeline) {
    let b = &timeline.balance;
    println!(
        "Birth balance: {} {:.4} years ({:.2}% of the nakshatra elapsed)",
        b.lord.english_name(),
        b.balance_years,
        b.elapsed_fraction * 100.0
    );
    for m in &timeline.mahadashas {
        let p = &m.period;
        println!(
            "  {:<8} {:>10.4} - {:>10.4}  ({:.4} y)",
            p.lord.english_name(),
            p.start_year,
            p.end_year,
            p.duration_years
        );
        for a in &m.antardashas {
            println!(
                "      {:<8} {:>10.4} - {:>10.4}",
                a.lord.english_name(),
                a.start_year,
                a.end_year
            );
        }
    }
}

fn print_current(current: Option<&CurrentDasha>) {
    let Some(c) = current else {
        println!("No period runs at that date");
        return;
    };
    let m = &c.mahadasha;
    println!(
        "Mahadasha: {} ({:.4} - {:.4})",
        m.lord.english_name(),
        m.start_year,
        m.end_year
    );
    if let Some(a) = &c.antardasha {
        println!(
            "Antardasha: {} ({:.4} - {:.4})",
            a.lord.english_name(),
            a.start_year,
            a.end_year
        );
    }
}

fn boundary_text(b: &BoundaryTime) -> String {
    match b {
        BoundaryTime::At { local, .. } => local.format("%Y-%m-%d %H:%M:%S").to_string(),
        BoundaryTime::Undetermined => "undetermined".to_string(),
    }
}

fn print_element(e: &PanchangElement) {
    println!(
        "  {:<10} {:<16} (sunrise: {:<16}) ends {}",
        e.kind.name(),
        e.name_at_birth,
        e.name_at_sunrise,
        boundary_text(&e.end_time)
    );
}

fn print_panchang(p: &Panchang) {
    println!("Ayanamsha: {:.4}°", p.ayanamsha_deg);
    println!("Sunrise:   {}", p.sunrise.local.format("%Y-%m-%d %H:%M:%S"));
    println!("Sunset:    {}", p.sunset.local.format("%Y-%m-%d %H:%M:%S"));
    println!("Vaar:      {} (lord {})", p.vaar_name, p.vaar_lord.english_name());
    println!("Paksha:    {}", p.paksha.name());
    println!("Prahar:    {}", p.prahar);
    println!("Month:     {}", p.solar_month_name);
    for e in [&p.tithi, &p.nakshatra, &p.yoga, &p.karana] {
        print_element(e);
    }
    println!("  Nakshatra entered {}", boundary_text(&p.nakshatra_entry));
}

fn print_attributes(a: &BirthAttributes) {
    let v = &a.avakhada;
    println!("Ascendant:  {} (lord {})", a.ascendant_sign, a.ascendant_lord.english_name());
    println!("Moon sign:  {} (lord {})", v.sign, v.sign_lord.english_name());
    println!(
        "Nakshatra:  {} pada {} (lord {})",
        v.nakshatra,
        v.pada,
        v.nakshatra_lord.english_name()
    );
    println!("Varna:      {}", v.varna);
    println!("Vashya:     {}", v.vashya);
    println!("Tatva:      {}", v.tatva);
    println!("Yoni:       {}", v.yoni);
    println!("Gana:       {}", v.gana);
    println!("Nadi:       {}", v.nadi);
    println!("Yunja:      {}", v.yunja.name());
    println!("Naamakshar: {}", v.naamakshar);
    println!("Paya:       {}", v.paya);
}

fn print_kundali(k: &Kundali) {
    print_chart(&k.chart);
    println!();
    print_divisional(&k.navamsha);
    println!();
    print_chart(&k.moon_chart);
    println!();
    print_timeline(&k.dasha);
    println!();
    print_panchang(&k.panchang);
    println!();
    print_attributes(&k.attributes);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chart { birth } => {
            let (engine, moment) = prepare(&birth);
            let chart = engine.compute_chart(&moment).unwrap_or_else(|e| fail(e));
            if birth.json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Divisional { birth, divisor } => {
            let (engine, moment) = prepare(&birth);
            let chart = engine
                .compute_divisional_chart(&moment, divisor)
                .unwrap_or_else(|e| fail(e));
            if birth.json {
                print_json(&chart);
            } else {
                print_divisional(&chart);
            }
        }

        Commands::MoonChart { birth } => {
            let (engine, moment) = prepare(&birth);
            let chart = engine.compute_moon_chart(&moment).unwrap_or_else(|e| fail(e));
            if birth.json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Dasha { birth, as_of } => {
            let (engine, moment) = prepare(&birth);
            match as_of {
                Some(s) => {
                    let as_of = parse_as_of(&s).unwrap_or_else(|e| fail(e));
                    let current = engine
                        .current_period(&moment, as_of)
                        .unwrap_or_else(|e| fail(e));
                    if birth.json {
                        print_json(&current);
                    } else {
                        print_current(current.as_ref());
                    }
                }
                None => {
                    let timeline = engine.compute_periods(&moment).unwrap_or_else(|e| fail(e));
                    if birth.json {
                        print_json(&timeline);
                    } else {
                        print_timeline(&timeline);
                    }
                }
            }
        }

        Commands::Panchang { birth } => {
            let (engine, moment) = prepare(&birth);
            let panchang = engine.compute_panchang(&moment).unwrap_or_else(|e| fail(e));
            if birth.json {
                print_json(&panchang);
            } else {
                print_panchang(&panchang);
            }
        }

        Commands::Avakhada { birth } => {
            let (engine, moment) = prepare(&birth);
            let attrs = engine.compute_attributes(&moment).unwrap_or_else(|e| fail(e));
            if birth.json {
                print_json(&attrs);
            } else {
                print_attributes(&attrs);
            }
        }

        Commands::Kundali { birth } => {
            let (engine, moment) = prepare(&birth);
            let kundali = engine.compute_kundali(&moment).unwrap_or_else(|e| fail(e));
            if birth.json {
                print_json(&kundali);
            } else {
                print_kundali(&kundali);
            }
        }
    }
}
