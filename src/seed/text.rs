use rand::seq::SliceRandom;
use rand::Rng;

const NOUNS: &[&str] = &[
    "river", "garden", "engine", "lantern", "harbor", "meadow", "signal", "compass", "orchard",
    "library", "canyon", "workshop", "window", "kettle", "comet", "bridge", "market", "forest",
];

const ADJECTIVES: &[&str] = &[
    "quiet", "bright", "rusty", "gentle", "curious", "hidden", "restless", "golden", "tiny",
    "ancient", "sunny", "clever", "stormy", "patient", "crooked", "silver",
];

const VERBS: &[&str] = &[
    "found", "painted", "fixed", "watched", "visited", "built", "followed", "sketched", "heard",
    "planted", "cleaned", "measured", "borrowed", "explored",
];

const OPENERS: &[&str] = &[
    "Today I", "Yesterday we", "This morning I", "Last week my friend", "Somehow I", "We finally",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Linus", "Margaret", "Alan", "Barbara", "Dennis", "Frances", "Ken", "Radia",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, words: &'a [&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or("thing")
}

/// A short sentence for post and comment bodies
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} a {} {} near the {} {}.",
        pick(rng, OPENERS),
        pick(rng, VERBS),
        pick(rng, ADJECTIVES),
        pick(rng, NOUNS),
        pick(rng, ADJECTIVES),
        pick(rng, NOUNS),
    )
}

/// A few sentences joined into a paragraph
pub fn paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.gen_range(1..=3);
    (0..count)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Username stem; callers append a unique suffix
pub fn username_stem<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}_{}", pick(rng, ADJECTIVES), pick(rng, NOUNS))
}

pub fn display_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} the {}", pick(rng, FIRST_NAMES), pick(rng, ADJECTIVES))
}

pub fn password<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&rand::distributions::Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}
