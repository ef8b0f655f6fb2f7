mod report;
mod scrape;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use scrape::{Platform, PlatformReport};
use vacancy_scraper::{HeadHunterConfig, Result, SuperJobConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// List of job-providers to query, all of them when omitted
    #[clap(long, value_enum)]
    site: Vec<Target>,

    /// Programming languages to search for, in report order
    #[clap(long, short)]
    language: Vec<String>,

    /// Only count HeadHunter vacancies published within this many days
    #[clap(long)]
    period: Option<u32>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    #[value(name = "headhunter")]
    HeadHunter,
    #[value(name = "superjob")]
    SuperJob,
}

impl Target {
    pub fn name(&self) -> &'static str {
        match self {
            Target::HeadHunter => "HeadHunter",
            Target::SuperJob => "SuperJob",
        }
    }
}

const DEFAULT_LANGUAGES: [&str; 9] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "Go",
    "C",
];

fn platforms(args: &Cli) -> Result<Vec<Platform>> {
    let requested = if args.site.is_empty() {
        vec![Target::HeadHunter, Target::SuperJob]
    } else {
        args.site.clone()
    };
    let mut targets = Vec::with_capacity(requested.len());
    for target in requested {
        if !targets.contains(&target) {
            targets.push(target);
        }
    }
    targets
        .into_iter()
        .map(|target| match target {
            Target::HeadHunter => {
                let mut config = HeadHunterConfig::default();
                if let Some(period) = args.period {
                    config.period = period;
                }
                Platform::headhunter(config)
            }
            Target::SuperJob => SuperJobConfig::from_env().map(Platform::superjob),
        })
        .collect()
}

async fn run(args: Cli) -> Result<()> {
    // every credential is resolved before the first request goes out
    let mut reports = platforms(&args)?
        .into_iter()
        .map(PlatformReport::new)
        .collect::<Vec<_>>();
    let languages = if args.language.is_empty() {
        DEFAULT_LANGUAGES.into_iter().map(String::from).collect()
    } else {
        args.language
    };

    for language in &languages {
        log::info!("Processing vacancies for programming language: {}", language);
        for report in reports.iter_mut() {
            report.add_language(language).await?;
        }
    }

    let tables = reports
        .iter()
        .map(|report| report.table().render())
        .collect::<Vec<_>>();
    println!("{}", tables.join("\n\n"));
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
