//! Integration tests for the pipeline.
//!
//! These tests verify that filtering and ranking work together over a
//! realistic catalog fixture.

use data_loader::{Movie, MovieCatalog};
use pipeline::filters::*;
use pipeline::{FilterPipeline, rank};
use similarity::Scored;
use std::collections::HashSet;

fn create_test_catalog() -> MovieCatalog {
    let movie = |id, title: &str, year, genres: &[&str]| Movie {
        id,
        title: title.to_string(),
        year,
        genres: genres.iter().map(|g| g.to_string()).collect(),
        overview: String::new(),
    };

    MovieCatalog::from_movies(vec![
        movie(0, "Quiet Grief", 2000, &["Drama"]),
        movie(1, "Quiet Grief Again", 2001, &["Drama"]),
        movie(2, "Loud Chases", 2010, &["Action"]),
        movie(3, "Quiet Chases", 2005, &["Drama", "Action"]),
        movie(4, "Silent Era Piece", 1925, &["Drama"]),
    ])
}

fn candidates() -> Vec<Scored> {
    vec![
        Scored { index: 0, score: 1.0 },
        Scored { index: 1, score: 0.92 },
        Scored { index: 2, score: 0.1 },
        Scored { index: 3, score: 0.55 },
        Scored { index: 4, score: 0.4 },
    ]
}

#[test]
fn test_full_pipeline_filters_and_ranks() {
    let catalog = create_test_catalog();

    let pipeline = FilterPipeline::new()
        .add_filter(ExcludeMovieFilter::new(0))
        .add_filter(GenreFilter::new(["Drama"]))
        .add_filter(YearRangeFilter::new(1990, 2010));

    let filtered = pipeline.apply(candidates(), &catalog).unwrap();
    let top = rank(filtered, 10);

    // Movie 0 excluded as the reference, movie 2 by genre, movie 4 by year
    let indices: Vec<usize> = top.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![1, 3]);
}

#[test]
fn test_filtering_is_narrowing() {
    let catalog = create_test_catalog();

    let unfiltered = FilterPipeline::new()
        .apply(candidates(), &catalog)
        .unwrap();
    let filtered = FilterPipeline::new()
        .add_filter(GenreFilter::new(["Drama"]))
        .apply(candidates(), &catalog)
        .unwrap();

    let unfiltered_set: HashSet<usize> = unfiltered.iter().map(|s| s.index).collect();
    let filtered_set: HashSet<usize> = filtered.iter().map(|s| s.index).collect();
    assert!(filtered_set.is_subset(&unfiltered_set));
    assert!(filtered_set.len() < unfiltered_set.len());
}

#[test]
fn test_filters_preserve_input_order() {
    let catalog = create_test_catalog();

    let filtered = FilterPipeline::new()
        .add_filter(GenreFilter::new(["Drama"]))
        .apply(candidates(), &catalog)
        .unwrap();

    let indices: Vec<usize> = filtered.iter().map(|s| s.index).collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(indices, sorted, "filters must not reorder candidates");
}

#[test]
fn test_rank_after_empty_filter_result() {
    let catalog = create_test_catalog();

    let filtered = FilterPipeline::new()
        .add_filter(YearRangeFilter::new(1950, 1960))
        .apply(candidates(), &catalog)
        .unwrap();

    assert!(rank(filtered, 10).is_empty());
}
