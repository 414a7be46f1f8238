use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use career_matcher::catalog::{colleges_for, roadmap_with_milestone, Catalog, DOCTOR_SPECIALTIES};
use career_matcher::classifier::CareerClassifier;
use career_matcher::config::{Config, EmbedderKind};
use career_matcher::dashboard::run_dashboard;
use career_matcher::taxonomy::{self, ScienceFocus, Stream, Taxonomy};
use career_matcher::utils::percent;
use career_matcher::{PersonalInfo, Recommender, ResumeWriter, ScoredCareer, UserProfile};

#[derive(Parser)]
#[command(name = "career-matcher")]
#[command(about = "Career recommendations and resumes for students")]
#[command(version)]
struct Cli {
    /// Increase output verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Career detail override file (defaults to <model dir>/career_details.json)
    #[arg(long, global = true)]
    details: Option<PathBuf>,

    /// Directory for model caches and artifacts
    #[arg(long, global = true)]
    model_dir: Option<PathBuf>,

    /// Use the offline hashing embedder instead of all-MiniLM-L6-v2
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank careers for a student profile
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a Typst resume and compile it to PDF
    Resume {
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        personal: PersonalArgs,
        /// Where the .typ, .pdf and resumes.csv files go
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Browse recommendations in the terminal
    Dashboard {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Directory holding resumes.csv
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Show the detail record, roadmap and colleges for one career
    Details {
        career: String,
        /// Stream used for the entrance exam milestone
        #[arg(long)]
        stream: Option<Stream>,
        #[arg(long)]
        focus: Option<ScienceFocus>,
    },
    /// List the fields offered to a stream
    Fields {
        #[arg(long)]
        stream: Stream,
        #[arg(long)]
        focus: Option<ScienceFocus>,
    },
    /// List the roles under a field
    Roles { field: String },
    /// List Science pathways, optionally for one focus
    Pathways {
        #[arg(long)]
        focus: Option<ScienceFocus>,
    },
    /// Train the text classifier and save it
    Train {
        /// Output path (defaults to <model dir>/career_model.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Predict a career label from free text with the trained classifier
    Classify {
        text: String,
        /// Number of labels to show
        #[arg(long, default_value_t = 3)]
        top: usize,
    },
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long)]
    stream: Stream,
    #[arg(long, default_value = "")]
    field: String,
    #[arg(long, default_value = "")]
    role: String,
    #[arg(long, default_value = "")]
    hobby: String,
    #[arg(long, default_value = "")]
    free_time: String,
    #[arg(long, default_value = "")]
    subject: String,
    /// Free text about interests and goals
    #[arg(long, default_value = "")]
    text: String,
    /// Medical or Non-Medical, Science only
    #[arg(long)]
    focus: Option<ScienceFocus>,
}

impl ProfileArgs {
    fn into_profile(self) -> UserProfile {
        UserProfile {
            stream: self.stream,
            field: self.field,
            role: self.role,
            hobby: self.hobby,
            free_time: self.free_time,
            subject: self.subject,
            free_text: self.text,
            focus: self.focus,
        }
    }
}

#[derive(Args)]
struct PersonalArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    linkedin: Option<String>,
}

impl PersonalArgs {
    fn into_info(self) -> PersonalInfo {
        let defaults = PersonalInfo::default();
        PersonalInfo {
            name: self.name.unwrap_or(defaults.name),
            email: self.email.unwrap_or(defaults.email),
            phone: self.phone.unwrap_or(defaults.phone),
            location: self.location.unwrap_or(defaults.location),
            linkedin: self.linkedin.unwrap_or(defaults.linkedin),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env().context("Failed to read configuration")?;
    if let Some(dir) = cli.model_dir {
        config.details_path = dir.join("career_details.json");
        config.classifier_path = dir.join("career_model.json");
        config.model_dir = dir;
    }
    if let Some(path) = cli.details {
        config.details_path = path;
    }
    if cli.offline {
        config.embedder = EmbedderKind::Hashing;
    }
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Recommend { profile, json } => {
            let profile = profile.into_profile();
            let recommender = build_recommender(&config)?;
            let recs = recommender.recommend(&profile)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&recs)?);
            } else {
                print_recommendations(&recommender, &profile, &recs);
            }
        }
        Commands::Resume {
            profile,
            personal,
            output_dir,
        } => {
            let profile = profile.into_profile();
            let info = personal.into_info();
            let recommender = build_recommender(&config)?;
            let recs = recommender.recommend(&profile)?;

            let writer = ResumeWriter::new(output_dir.unwrap_or(config.output_dir), config.typst_bin);
            match writer.generate(&profile, &info, &recs) {
                Ok(output) => {
                    println!("Resume written to {}", output.pdf_path.display());
                    println!("Typst source: {}", output.typ_path.display());
                }
                Err(e) => {
                    error!("Resume generation failed: {}", e);
                    return Err(e).context("Could not produce the resume PDF");
                }
            }
        }
        Commands::Dashboard { profile, output_dir } => {
            let profile = profile.into_profile();
            let recommender = build_recommender(&config)?;
            let recs = recommender.recommend(&profile)?;
            let writer = ResumeWriter::new(output_dir.unwrap_or(config.output_dir), config.typst_bin);
            run_dashboard(&recommender, &profile, &recs, &writer.log_path())?;
        }
        Commands::Details { career, stream, focus } => {
            let taxonomy = Taxonomy::build();
            let catalog = Catalog::load(&config.details_path, &taxonomy);
            print_details(&taxonomy, &catalog, &career, stream, focus);
        }
        Commands::Fields { stream, focus } => {
            for field in taxonomy::fields_for(stream, focus) {
                println!("{field}");
            }
        }
        Commands::Roles { field } => {
            let roles = taxonomy::roles_for(&field);
            if roles.is_empty() {
                println!("No roles listed for '{field}'.");
            }
            for role in roles {
                println!("{role}");
            }
        }
        Commands::Pathways { focus } => {
            for pathway in taxonomy::pathways(focus) {
                println!("{} ({}, entrance: {})", pathway.label, pathway.duration, pathway.entrance);
                for career in pathway.careers {
                    println!("  - {career}");
                }
            }
        }
        Commands::Train { out } => {
            let path = out.unwrap_or(config.classifier_path);
            let classifier = CareerClassifier::train_default()?;
            classifier.save(&path)?;
            println!(
                "Trained on {} labels, saved to {}",
                classifier.labels().len(),
                path.display()
            );
        }
        Commands::Classify { text, top } => {
            let classifier = match CareerClassifier::load(&config.classifier_path) {
                Ok(classifier) => classifier,
                Err(e) => {
                    info!("No saved classifier ({}), training the built-in one", e);
                    CareerClassifier::train_default()?
                }
            };
            for prediction in classifier.rank(&text).into_iter().take(top.max(1)) {
                println!("{:>8.3}  {}", prediction.decision, prediction.label);
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` when set, otherwise the level picked by the `-v` count.
fn log_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    })
}

fn build_recommender(config: &Config) -> Result<Recommender> {
    if config.embedder == EmbedderKind::MiniLm {
        eprintln!("Loading sentence embedding model...");
    }
    Recommender::from_config(config).context("Failed to initialize the recommender")
}

fn print_recommendations(recommender: &Recommender, profile: &UserProfile, recs: &[ScoredCareer]) {
    println!("Top careers for the {} stream:\n", profile.stream);
    for (rank, rec) in recs.iter().enumerate() {
        let detail = recommender.detail(&rec.career);
        println!("{}. {} ({})", rank + 1, rec.career, percent(rec.score));
        if !detail.salary.is_empty() {
            println!("   Salary: {}", detail.salary);
        }
        if !detail.market.is_empty() {
            println!("   Market: {}", detail.market);
        }
    }
}

fn print_details(
    taxonomy: &Taxonomy,
    catalog: &Catalog,
    career: &str,
    stream: Option<Stream>,
    focus: Option<ScienceFocus>,
) {
    let detail = catalog.detail(career, taxonomy);
    println!("{career}\n");
    println!("{}\n", detail.description);
    print_list("Education", &detail.education);
    print_list("Skills", &detail.skills);
    println!("Salary: {}", detail.salary);
    println!("Market: {}\n", detail.market);
    print_list("Pros", &detail.pros);
    print_list("Cons", &detail.cons);

    let roadmap = match stream {
        Some(stream) => {
            let focus = if stream == Stream::Science { focus } else { None };
            roadmap_with_milestone(&detail.roadmap, stream, focus)
        }
        None => detail.roadmap.clone(),
    };
    println!("Roadmap:");
    for (i, step) in roadmap.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if !detail.paths.is_empty() {
        println!("\nPaths:");
        for path in &detail.paths {
            println!("  - {}: {}", path.title, path.description);
        }
    }
    if career == "Doctor" {
        println!("\nSpecialties:");
        for (name, about) in DOCTOR_SPECIALTIES {
            println!("  - {name}: {about}");
            if let Some(steps) = detail.sub_specialty_steps.get(*name) {
                for step in steps {
                    println!("      {step}");
                }
            }
        }
    }

    let colleges = colleges_for(career, taxonomy);
    if colleges.is_empty() {
        println!("\nNo college list for this career yet.");
    } else {
        println!("\nColleges:");
        for college in colleges {
            println!("  - {} ({}): {}", college.name, college.exam, college.highlights);
        }
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_overrides_verbosity() {
        std::env::set_var("RUST_LOG", "career_matcher=debug");
        assert_eq!(log_filter(0).to_string(), "career_matcher=debug");
        assert_eq!(log_filter(3).to_string(), "career_matcher=debug");

        std::env::remove_var("RUST_LOG");
        assert_eq!(log_filter(0).to_string(), "warn");
        assert_eq!(log_filter(2).to_string(), "debug");
    }
}
