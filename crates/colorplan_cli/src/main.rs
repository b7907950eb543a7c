//! Command-line front end over a fresh planner session.
//!
//! # Responsibility
//! - Print today's agenda, view windows, stats and calendar grids.
//! - Resolve configuration and logging the same way UI hosts do.
//!
//! Every invocation starts from the seeded sample day; nothing is saved.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colorplan_core::{
    core_version, init_logging_from_config, Appointment, CalendarCell, Planner, PlannerConfig,
    PriorityFilter, ViewType,
};
use log::info;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "colorplan", about = "Colour-coded appointment planner")]
struct Cli {
    /// Only show one priority (all|high|medium|low|personal|work).
    #[arg(long, global = true, default_value = "all")]
    priority: PriorityFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Today's agenda followed by its stats.
    Today,
    /// Appointments inside the day/week/month window around a date.
    View {
        #[arg(long, default_value = "week")]
        view: ViewType,
        /// YYYY-MM-DD, defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Counts over today's agenda.
    Stats,
    /// Calendar grid with per-day previews.
    Calendar {
        #[arg(long, default_value = "month")]
        view: ViewType,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Core library version.
    Version,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = PlannerConfig::from_env()?;
    init_logging_from_config(&config)?;

    let today = Local::now().date_naive();
    let mut planner = Planner::new(&config, today);
    planner.set_filter_priority(cli.priority);
    info!(
        "event=cli_command module=cli status=start filter={}",
        cli.priority
    );

    match cli.command {
        Commands::Today => {
            println!("Today, {}", today.format("%A %-d %B %Y"));
            print_list(&planner.today_appointments(today));
            print_stats(&planner, today);
        }
        Commands::View { view, date } => {
            planner.set_view_type(view);
            planner.select_date(date.unwrap_or(today));
            let range = planner.date_range();
            println!("{} view: {} .. {}", view.label(), range.start, range.end);
            print_list(&planner.view_appointments());
        }
        Commands::Stats => print_stats(&planner, today),
        Commands::Calendar { view, date } => {
            planner.set_view_type(view);
            planner.select_date(date.unwrap_or(today));
            print_calendar(&planner.calendar_cells(today), view);
        }
        Commands::Version => println!("colorplan_core version={}", core_version()),
    }

    Ok(())
}

fn print_list(appointments: &[&Appointment]) {
    if appointments.is_empty() {
        println!("  (no appointments)");
        return;
    }
    for apt in appointments {
        println!("  {}", describe(apt));
    }
}

fn describe(apt: &Appointment) -> String {
    let span = match apt.end_time {
        Some(end) => format!("{}-{}", apt.time, end),
        None => format!("{}      ", apt.time),
    };
    let mut line = format!(
        "{} {} {} {}",
        apt.date,
        span,
        apt.priority.style().icon,
        apt.title
    );
    if let Some(label) = apt.recurrence.label() {
        line.push_str(&format!(" [{label}]"));
    }
    if apt.reminder {
        line.push_str(" [reminder]");
    }
    if apt.completed {
        line.push_str(" [done]");
    }
    line
}

fn print_stats(planner: &Planner, today: NaiveDate) {
    let stats = planner.stats(today);
    println!(
        "total={} completed={} upcoming={} high_priority={}",
        stats.total, stats.completed, stats.upcoming, stats.high_priority
    );
}

fn print_calendar(cells: &[CalendarCell<'_>], view: ViewType) {
    for cell in cells {
        let mut marks = String::new();
        if cell.is_today {
            marks.push('*');
        }
        if cell.is_selected {
            marks.push('>');
        }
        if view == ViewType::Month && !cell.in_selected_month {
            marks.push('~');
        }
        println!("{:<3}{} {}", marks, cell.date, cell.date.format("%a"));
        for apt in &cell.preview {
            println!("       {} {} {}", apt.time, apt.priority.style().icon, apt.title);
        }
        if cell.overflow > 0 {
            println!("       +{} more", cell.overflow);
        }
    }
}
