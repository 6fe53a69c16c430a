use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use scheduleflow::{Course, Generator, Schedule, TimeUnit, load_courses};
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tabled::Tabled;
use tabled::settings::{Alignment, Style};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
struct Args {
    /// Path to the JSON course file
    #[arg(short, long, value_name = "FILE", default_value = "data/courses.json")]
    courses: PathBuf,

    /// Keep at most this many candidates after each course is merged
    #[arg(short, long, value_name = "N")]
    limit: Option<usize>,

    /// Print every schedule as JSON and exit
    #[arg(long)]
    json: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Units")]
    units: usize,
    #[tabled(rename = "Courses")]
    courses: String,
    #[tabled(rename = "First start")]
    first_start: String,
    #[tabled(rename = "Last end")]
    last_end: String,
}

impl ScheduleRow {
    fn new(index: usize, schedule: &Schedule) -> ScheduleRow {
        let courses: Vec<String> = schedule.courses().iter().map(|c| c.to_string()).collect();
        let first_start = schedule.sorted().first().map(|u| u.start_time().to_string());
        let last_end = schedule.units().iter().map(TimeUnit::end_time).max();
        ScheduleRow {
            index,
            units: schedule.len(),
            courses: courses.join(", "),
            first_start: first_start.unwrap_or_else(|| "-".to_string()),
            last_end: last_end.map_or_else(|| "-".to_string(), |t| t.to_string()),
        }
    }
}

#[derive(Tabled)]
struct UnitRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Course")]
    course: String,
    #[tabled(rename = "Days")]
    days: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
}

impl From<&TimeUnit> for UnitRow {
    fn from(unit: &TimeUnit) -> Self {
        UnitRow {
            kind: unit.kind(),
            course: unit.course().to_string(),
            days: unit.days().to_string(),
            start: unit.start_time().to_string(),
            end: unit.end_time().to_string(),
        }
    }
}

#[derive(Tabled)]
struct CourseRow {
    #[tabled(rename = "Course")]
    course: String,
    #[tabled(rename = "Sections")]
    sections: usize,
    #[tabled(rename = "Labs")]
    labs: usize,
}

impl From<&Course> for CourseRow {
    fn from(course: &Course) -> Self {
        CourseRow {
            course: course.key().to_string(),
            sections: course.sections.len(),
            labs: course.sections.iter().map(|s| s.labs.len()).sum(),
        }
    }
}

fn paginate(content: &str) -> std::io::Result<()> {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    pager.wait()?;
    Ok(())
}

fn print_table<R: Tabled>(rows: Vec<R>) {
    let long = rows.len() > 20;
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    if long {
        if let Err(e) = paginate(&table.to_string()) {
            eprintln!("{} {}", "Pager unavailable:".yellow(), e);
            println!("{}", table);
        }
    } else {
        println!("{}", table);
    }
}

fn show(schedules: &[Schedule], parts: &[&str]) {
    let Some(index) = parts.get(1).and_then(|s| s.parse::<usize>().ok()) else {
        println!("Usage: show <n> [t]");
        return;
    };
    let Some(schedule) = schedules.get(index) else {
        println!("{}", format!("No schedule #{}.", index).red());
        return;
    };
    let rows: Vec<UnitRow> = match parts.get(2) {
        Some(&"t") => schedule.sorted().into_iter().map(UnitRow::from).collect(),
        _ => schedule.units().iter().map(UnitRow::from).collect(),
    };
    print_table(rows);
}

fn export(schedules: &[Schedule], parts: &[&str]) {
    let Some(path) = parts.get(1) else {
        println!("Usage: export <file>");
        return;
    };
    let written = serde_json::to_string_pretty(schedules)
        .map_err(std::io::Error::other)
        .and_then(|json| std::fs::write(path, json));
    match written {
        Ok(()) => println!("{}", format!("Wrote {} schedules to {}.", schedules.len(), path).green()),
        Err(e) => println!("{} {}", "Export failed:".red(), e),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();
    let courses = load_courses(&args.courses)?;
    info!(path = %args.courses.display(), courses = courses.len(), "loaded courses");

    let generator = match args.limit {
        Some(limit) => Generator::new().with_limit(limit),
        None => Generator::new(),
    };
    let schedules = generator.generate(&courses)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedules)?);
        return Ok(());
    }

    println!(
        "Loaded {} courses from {}. {} schedules generated.",
        courses.len(),
        args.courses.display(),
        schedules.len()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "show".to_string(),
            "courses".to_string(),
            "export".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        if schedules.is_empty() {
                            println!("{}", "No schedule could be generated.".yellow());
                        } else {
                            let rows = schedules
                                .iter()
                                .enumerate()
                                .map(|(i, s)| ScheduleRow::new(i, s))
                                .collect::<Vec<_>>();
                            print_table(rows);
                        }
                    },
                    "show" => show(&schedules, &parts),
                    "courses" => print_table(courses.iter().map(CourseRow::from).collect()),
                    "export" => export(&schedules, &parts),
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                  - List generated schedules");
                        println!("  show <n> [t]        - Show the units of schedule <n>, t = ordered by time");
                        println!("  courses             - List loaded courses");
                        println!("  export <file>       - Write all schedules to <file> as JSON");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Exit\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
