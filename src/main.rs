// Activity Calendar
// Command-line entry point: fetch activities and print one month

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use activity_calendar::services::api::ApiClient;
use activity_calendar::services::calendar::{CalendarController, CalendarView};
use activity_calendar::services::month_grid::GridOptions;
use activity_calendar::services::settings::SettingsService;
use activity_calendar::ui::{DetailView, Labels, MonthTextRenderer};
use activity_calendar::utils::date::parse_year_month;

#[derive(Parser, Debug)]
#[command(
    name = "activity-calendar",
    version,
    about = "Monthly activity calendar backed by an activity service"
)]
struct Cli {
    /// Month to show, as YYYY-MM (defaults to the current month)
    #[arg(long)]
    month: Option<String>,

    /// Months to move from the shown month, e.g. -1 or 2
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    offset: i32,

    /// Base URL of the activity service, overriding the settings file
    #[arg(long = "api-url")]
    api_url: Option<String>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the details of one activity of the shown month instead of the grid
    #[arg(long)]
    details: Option<i64>,

    /// Create an activity on this day (YYYY-MM-DD); needs `can_edit`
    #[arg(long = "new-on", requires = "title")]
    new_on: Option<NaiveDate>,

    /// Title of the activity created with --new-on
    #[arg(long)]
    title: Option<String>,

    /// Start and end time (HH:MM) of the activity created with --new-on
    #[arg(long, num_args = 2, value_names = ["START", "END"], conflicts_with = "all_day")]
    times: Option<Vec<String>>,

    /// Make the activity created with --new-on an all-day one
    #[arg(long = "all-day")]
    all_day: bool,

    /// Width of one day column
    #[arg(long, default_value_t = 16)]
    width: usize,

    /// Never color occurrences
    #[arg(long = "no-color")]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("Starting Activity Calendar");

    let settings_service = match &cli.config {
        Some(path) => SettingsService::new(path.clone()),
        None => SettingsService::default_location()?,
    };
    let mut settings = settings_service.load()?;
    if let Some(url) = &cli.api_url {
        settings.api_base_url = url.clone();
    }

    let client = ApiClient::from_settings(&settings)
        .context("Failed to create the activity service client")?;

    let base = match cli.month.as_deref() {
        Some(value) => {
            let (year, month0) = parse_year_month(value)
                .ok_or_else(|| anyhow!("Invalid month '{}', expected YYYY-MM", value))?;
            CalendarView::new(year, month0)?
        }
        None => CalendarView::containing(cli.new_on.unwrap_or_else(|| Local::now().date_naive())),
    };
    let view = base.shifted(cli.offset);

    let options = GridOptions::from(&settings);
    let mut controller = CalendarController::new(client, options, view);
    let grid = controller.refresh()?;
    let labels = Labels::default();

    if let Some(day) = cli.new_on {
        let mut draft = grid.quick_create(day, settings.can_edit).ok_or_else(|| {
            if settings.can_edit {
                anyhow!("{} is not a day of {}", day, view)
            } else {
                anyhow!("Creating activities needs can_edit = true in {}", settings_service.path().display())
            }
        })?;
        draft = draft.title(cli.title.clone().unwrap_or_default()).all_day(cli.all_day);
        if let Some([start, end]) = cli.times.as_deref() {
            draft = draft.times(start.clone(), end.clone());
        }

        let id = controller
            .source()
            .create_activity(&draft)
            .context("Failed to create the activity")?;
        match id {
            Some(id) => println!("Created activity {} on {}", id, day),
            None => println!("Created activity on {}", day),
        }
        return Ok(());
    }

    if let Some(id) = cli.details {
        let details = grid
            .details(id)
            .ok_or_else(|| anyhow!("No activity with id {} in {}", id, view))?;
        let detail_view = DetailView::new(&details, &labels, &settings.date_format);
        println!("{}", detail_view.to_text(&labels));
        return Ok(());
    }

    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let text = MonthTextRenderer::new(&labels, settings.first_day_of_week)
        .cell_width(cli.width)
        .with_color(use_color)
        .render(grid);
    print!("{}", text);

    Ok(())
}
