//! Mock search response synthesis.
//!
//! Produces randomly populated [`MovieRecord`]s with a fixed shape: three
//! poster URLs, three to five backdrops and three to eight offers per record.
//! The query is cosmetic; it never influences which seed title is picked.

use std::sync::LazyLock;

use rand::seq::IndexedRandom;
use rand::Rng;
use regex::Regex;

use crate::movie::{MovieKind, MovieRecord, Offer};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of records the generator endpoint asks for.
pub const DEFAULT_RESULT_COUNT: i64 = 8;

/// Probability that a record is a series rather than a film.
pub const SHOW_PROBABILITY: f64 = 0.25;

/// Poster sizes, smallest first. Every record carries one URL per size.
pub const POSTER_SIZES: [&str; 3] = ["s166", "s332", "s592"];

const BACKDROP_SIZE: &str = "s1920";
const BACKDROP_COUNT: std::ops::RangeInclusive<usize> = 3..=5;
const OFFER_COUNT: std::ops::RangeInclusive<usize> = 3..=8;
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1950..=2024;

const IMAGE_BASE_URL: &str = "https://images.justwatch.com";
const SITE_BASE_URL: &str = "https://www.justwatch.com/us";

const SEED_TITLES: &[&str] = &[
    "The Matrix",
    "Inception",
    "Interstellar",
    "The Lord of the Rings",
    "Blade Runner",
    "Spirited Away",
    "Arrival",
    "Mad Max: Fury Road",
    "The Grand Budapest Hotel",
    "Parasite",
];

/// Provider name and the base URL offers link to.
const PROVIDERS: &[(&str, &str)] = &[
    ("Netflix", "https://www.netflix.com/title"),
    ("Amazon Prime Video", "https://www.primevideo.com/detail"),
    ("Disney Plus", "https://www.disneyplus.com/movies"),
    ("Apple TV", "https://tv.apple.com/movie"),
    ("Max", "https://play.max.com/movie"),
    ("Hulu", "https://www.hulu.com/movie"),
    ("Mubi", "https://mubi.com/films"),
];

const OFFER_TYPES: &[&str] = &["FLATRATE", "RENT", "BUY", "FREE", "ADS"];

static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("valid regex"));

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Synthesize `count` records using the thread-local RNG.
///
/// A non-positive `count` yields an empty vector.
pub fn synthesize(query: &str, count: i64) -> Vec<MovieRecord> {
    synthesize_with(&mut rand::rng(), query, count)
}

/// Synthesize `count` records drawing from `rng`.
///
/// Records are returned in generation order.
pub fn synthesize_with<R: Rng + ?Sized>(rng: &mut R, query: &str, count: i64) -> Vec<MovieRecord> {
    let Ok(count) = usize::try_from(count) else {
        return Vec::new();
    };

    (0..count).map(|_| synthesize_record(rng, query)).collect()
}

/// Lower-case `title` and collapse every run of non-alphanumerics into `-`.
///
/// ```
/// use reelmock_core::synth::slugify;
/// assert_eq!(slugify("Mad Max: Fury Road"), "mad-max-fury-road");
/// assert_eq!(slugify("  !!  "), "");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

// ---------------------------------------------------------------------------
// Record construction
// ---------------------------------------------------------------------------

fn synthesize_record<R: Rng + ?Sized>(rng: &mut R, query: &str) -> MovieRecord {
    let seed = SEED_TITLES.choose(rng).copied().unwrap_or("Untitled");
    let title = compose_title(seed, query);
    let slug = slugify(&title);

    let kind = if rng.random_bool(SHOW_PROBABILITY) {
        MovieKind::Show
    } else {
        MovieKind::Movie
    };

    let id = format!("{}{}", kind.id_prefix(), rng.random_range(10_000..1_000_000u32));
    let url = format!("{SITE_BASE_URL}/{}/{slug}", kind.url_segment());

    let photo_url = POSTER_SIZES
        .iter()
        .map(|size| image_url(rng, "poster", size, &slug))
        .collect();

    let backdrop_count = rng.random_range(BACKDROP_COUNT);
    let backdrops = (0..backdrop_count)
        .map(|_| image_url(rng, "backdrop", BACKDROP_SIZE, &slug))
        .collect();

    let tomatometer = rng
        .random_bool(0.7)
        .then(|| rng.random_range(0..=100u8));

    let is_certified_fresh = match rng.random_range(0..3u8) {
        0 => None,
        1 => Some(true),
        _ => Some(false),
    };

    let offer_count = rng.random_range(OFFER_COUNT);
    let offers = (0..offer_count).map(|_| synthesize_offer(rng, &slug)).collect();

    MovieRecord {
        id,
        kind,
        url,
        title,
        year: rng.random_range(YEAR_RANGE),
        runtime: rng.random_range(kind.runtime_range()),
        photo_url,
        backdrops,
        tmdb_id: rng.random_range(1..1_000_000u32),
        imdb_id: format!("tt{:07}", rng.random_range(0..10_000_000u32)),
        // Three decimals, still strictly below 1.0.
        rating: (rng.random::<f64>() * 1000.0).floor() / 1000.0,
        tomatometer,
        is_certified_fresh,
        offers,
    }
}

fn compose_title(seed: &str, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        seed.to_string()
    } else {
        format!("{seed} ({query})")
    }
}

fn image_url<R: Rng + ?Sized>(rng: &mut R, kind: &str, size: &str, slug: &str) -> String {
    let image_id = rng.random_range(100_000_000..1_000_000_000u32);
    format!("{IMAGE_BASE_URL}/{kind}/{image_id}/{size}/{slug}.jpg")
}

fn synthesize_offer<R: Rng + ?Sized>(rng: &mut R, slug: &str) -> Offer {
    let (name, base_url) = PROVIDERS
        .choose(rng)
        .copied()
        .unwrap_or(("Netflix", "https://www.netflix.com/title"));
    let offer_type = OFFER_TYPES.choose(rng).copied().unwrap_or("FLATRATE");

    Offer {
        offer_type: offer_type.to_string(),
        name: name.to_string(),
        url: format!("{base_url}/{slug}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
