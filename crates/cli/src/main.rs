use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use data_loader::{load_catalog, MovieId};
use engine::{Recommendation, Recommender, RequestOptions};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// CineMatch - Content-Based Movie Recommendation Engine
#[derive(Parser)]
#[command(name = "cine-match")]
#[command(about = "Movie recommendations from tf-idf text similarity", long_about = None)]
struct Cli {
    /// Path to the movie catalog CSV (title,year,genres,overview)
    #[arg(short, long, default_value = "data/movies.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a reference movie
    Recommend {
        /// Reference movie title (first match by catalog order)
        #[arg(long, required_unless_present = "movie_id", conflicts_with = "movie_id")]
        title: Option<String>,

        /// Reference movie id (unambiguous alternative to --title)
        #[arg(long)]
        movie_id: Option<MovieId>,

        #[command(flatten)]
        request: RequestArgs,
    },

    /// Rank the whole catalog against a free-text query
    Search {
        /// Describe what you feel like watching
        #[arg(long)]
        query: String,

        #[command(flatten)]
        request: RequestArgs,
    },

    /// List the distinct genre tags in the catalog
    Genres,

    /// Run a concurrent-read benchmark against one shared engine
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

/// Options shared by the recommend and search subcommands
#[derive(Args)]
struct RequestArgs {
    /// Number of recommendations to return
    #[arg(long, default_value = "10")]
    top_k: usize,

    /// Keep only movies with this genre tag (repeatable)
    #[arg(long = "genre")]
    genres: Vec<String>,

    /// Earliest release year to keep (inclusive)
    #[arg(long)]
    year_from: Option<u16>,

    /// Latest release year to keep (inclusive)
    #[arg(long)]
    year_to: Option<u16>,

    /// Print results as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl RequestArgs {
    fn to_options(&self) -> RequestOptions {
        let allowed_genres = if self.genres.is_empty() {
            None
        } else {
            Some(self.genres.iter().cloned().collect::<HashSet<String>>())
        };
        // A single-sided range is open on the missing side
        let year_range = match (self.year_from, self.year_to) {
            (None, None) => None,
            (from, to) => Some((from.unwrap_or(0), to.unwrap_or(u16::MAX))),
        };
        RequestOptions {
            top_k: self.top_k,
            allowed_genres,
            year_range,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the catalog and build the model up front so every subcommand
    // runs against a warm engine
    println!("Loading movie catalog from {}...", cli.data.display());
    let start = Instant::now();
    let catalog = Arc::new(
        load_catalog(&cli.data).context("Failed to load movie catalog")?,
    );
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    let start = Instant::now();
    let recommender = Arc::new(Recommender::new(catalog).context("Failed to create engine")?);
    recommender.warm();
    println!("{} Built similarity model in {:?}", "✓".green(), start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            title,
            movie_id,
            request,
        } => handle_recommend(recommender, title, movie_id, request)?,
        Commands::Search { query, request } => handle_search(recommender, query, request)?,
        Commands::Genres => handle_genres(recommender)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(recommender, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    recommender: Arc<Recommender>,
    title: Option<String>,
    movie_id: Option<MovieId>,
    request: RequestArgs,
) -> Result<()> {
    let options = request.to_options();

    let (header, recommendations) = match (title, movie_id) {
        (Some(title), _) => {
            let recs = recommender.recommend_by_title(&title, &options)?;
            (format!("Because you liked {title}"), recs)
        }
        (None, Some(id)) => {
            let reference = recommender
                .catalog()
                .index_of_id(id)
                .and_then(|index| recommender.catalog().get(index))
                .map(|m| m.title.clone())
                .unwrap_or_else(|| format!("movie {id}"));
            let recs = recommender.recommend_by_id(id, &options)?;
            (format!("Because you liked {reference}"), recs)
        }
        (None, None) => unreachable!("clap enforces one of --title/--movie-id"),
    };

    print_recommendations(&header, &recommendations, request.json)
}

/// Handle the 'search' command
fn handle_search(
    recommender: Arc<Recommender>,
    query: String,
    request: RequestArgs,
) -> Result<()> {
    let options = request.to_options();
    let recommendations = recommender.search(&query, &options)?;
    print_recommendations("Top matches", &recommendations, request.json)
}

/// Handle the 'genres' command
fn handle_genres(recommender: Arc<Recommender>) -> Result<()> {
    println!("{}", "Genres in catalog:".bold().blue());
    for genre in recommender.catalog().distinct_genres() {
        println!("{}{}", "• ".green(), genre);
    }
    Ok(())
}

/// Handle the 'benchmark' command
///
/// Fires `requests` recommendation requests at one shared engine, up to
/// `concurrent` at a time, and reports latency percentiles. All tasks
/// read the same snapshot; nothing is rebuilt per request.
async fn handle_benchmark(
    recommender: Arc<Recommender>,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    let catalog_len = recommender.catalog().len() as u32;
    let semaphore = Arc::new(tokio::sync::Semaphore::new(concurrent.max(1)));

    // Random reference movies, resolved up front
    let movie_ids: Vec<MovieId> = (0..requests)
        .map(|_| rand::random::<u32>() % catalog_len)
        .collect();

    let options = RequestOptions::default();
    let start = Instant::now();
    let mut handles = vec![];
    for movie_id in movie_ids {
        let recommender = recommender.clone();
        let semaphore = semaphore.clone();
        let options = options.clone();
        let handle = tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await?;
            let request_start = Instant::now();
            recommender.recommend_by_id(movie_id, &options)?;
            Ok::<_, anyhow::Error>(request_start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }

    let total_time = start.elapsed();
    let avg_latency = timings.iter().sum::<std::time::Duration>() / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Format and print a recommendation table (or JSON with --json)
fn print_recommendations(header: &str, recommendations: &[Recommendation], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recommendations)?);
        return Ok(());
    }

    println!("{}", header.bold().blue());
    if recommendations.is_empty() {
        println!("(no movies matched)");
        return Ok(());
    }
    for (rank, rec) in recommendations.iter().enumerate() {
        let genres = rec.genres.join(", ");
        println!(
            "{}. {} ({}) [{}] - similarity {:.3}",
            (rank + 1).to_string().green(),
            rec.title,
            rec.year,
            genres,
            rec.similarity
        );
    }
    Ok(())
}
