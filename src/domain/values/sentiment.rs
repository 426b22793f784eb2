//! Lexicon-based sentiment scoring.
//!
//! An abridged AFINN-style valence lexicon with single-token negation: a
//! negator immediately before a scored word flips that word's sign and is
//! recorded in the report. `comparative` normalizes the total score by the
//! token count.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentReport {
    pub score: i64,
    pub comparative: f64,
    pub tokens: Vec<String>,
    pub words: Vec<String>,
    pub negations: Vec<String>,
}

const NEGATORS: &[&str] = &[
    "ain't", "aint", "can't", "cannot", "cant", "couldn't", "couldnt", "didn't", "didnt",
    "doesn't", "doesnt", "don't", "dont", "isn't", "isnt", "neither", "never", "no", "none",
    "nor", "not", "wasn't", "wasnt", "won't", "wont", "wouldn't", "wouldnt",
];

/// Valence lexicon, sorted by word for binary search.
const LEXICON: &[(&str, i64)] = &[
    ("abandon", -2),
    ("abandoned", -2),
    ("ability", 2),
    ("accident", -2),
    ("ache", -2),
    ("admit", -1),
    ("agree", 1),
    ("alive", 1),
    ("amazing", 4),
    ("ambitious", 2),
    ("anger", -3),
    ("angry", -3),
    ("annoy", -2),
    ("anxiety", -2),
    ("anxious", -2),
    ("approval", 2),
    ("arrest", -2),
    ("attack", -1),
    ("avoid", -1),
    ("awesome", 4),
    ("awful", -3),
    ("bad", -3),
    ("ban", -2),
    ("bankrupt", -3),
    ("beautiful", 3),
    ("benefit", 2),
    ("best", 3),
    ("better", 2),
    ("big", 1),
    ("blame", -2),
    ("block", -1),
    ("boost", 1),
    ("boring", -3),
    ("breakthrough", 3),
    ("bright", 1),
    ("brilliant", 4),
    ("broken", -1),
    ("calm", 2),
    ("cancel", -1),
    ("capable", 1),
    ("careless", -2),
    ("casualty", -2),
    ("celebrate", 3),
    ("challenge", -1),
    ("chance", 2),
    ("chaos", -2),
    ("chaotic", -2),
    ("charming", 3),
    ("cheat", -3),
    ("cheerful", 2),
    ("clash", -2),
    ("clean", 2),
    ("clever", 2),
    ("collapse", -2),
    ("comfort", 2),
    ("complain", -2),
    ("confidence", 2),
    ("confident", 2),
    ("conflict", -2),
    ("confused", -2),
    ("cool", 1),
    ("crash", -2),
    ("crazy", -2),
    ("crisis", -3),
    ("critical", -2),
    ("cruel", -3),
    ("cut", -1),
    ("cutting", -2),
    ("damage", -3),
    ("danger", -2),
    ("dead", -3),
    ("deadlock", -2),
    ("death", -2),
    ("debt", -2),
    ("defeated", -2),
    ("delay", -1),
    ("delight", 3),
    ("delighted", 3),
    ("demand", -1),
    ("denied", -2),
    ("depressed", -2),
    ("despair", -3),
    ("destroy", -3),
    ("difficult", -1),
    ("disappointed", -2),
    ("disaster", -2),
    ("distrust", -3),
    ("doubt", -1),
    ("dream", 1),
    ("easy", 1),
    ("embarrass", -2),
    ("encourage", 2),
    ("enjoy", 2),
    ("enthusiastic", 3),
    ("escape", -1),
    ("evil", -3),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("fail", -2),
    ("failure", -2),
    ("fake", -3),
    ("fantastic", 4),
    ("fear", -2),
    ("fine", 2),
    ("fire", -2),
    ("fraud", -4),
    ("free", 1),
    ("fresh", 1),
    ("fun", 4),
    ("funny", 4),
    ("gain", 2),
    ("generous", 2),
    ("gift", 2),
    ("glad", 3),
    ("good", 3),
    ("great", 3),
    ("greed", -3),
    ("greedy", -2),
    ("growth", 2),
    ("guilty", -3),
    ("happy", 3),
    ("hard", -1),
    ("harm", -2),
    ("hate", -3),
    ("hell", -4),
    ("help", 2),
    ("helpless", -2),
    ("honest", 2),
    ("hope", 2),
    ("hopeful", 2),
    ("hopeless", -2),
    ("horrible", -3),
    ("hostile", -2),
    ("hurt", -2),
    ("ignore", -1),
    ("ignored", -2),
    ("improve", 2),
    ("increase", 1),
    ("interesting", 2),
    ("jeopardy", -2),
    ("joy", 3),
    ("kill", -3),
    ("lack", -2),
    ("lawsuit", -2),
    ("lazy", -1),
    ("leak", -1),
    ("limited", -1),
    ("litigation", -1),
    ("lose", -3),
    ("loss", -3),
    ("lost", -3),
    ("love", 3),
    ("loved", 3),
    ("lucky", 3),
    ("mad", -3),
    ("masterpiece", 4),
    ("miracle", 4),
    ("miss", -2),
    ("mistake", -2),
    ("murder", -2),
    ("negative", -2),
    ("nervous", -2),
    ("nice", 3),
    ("opportunity", 2),
    ("optimistic", 2),
    ("outstanding", 5),
    ("pain", -2),
    ("panic", -3),
    ("peace", 2),
    ("perfect", 3),
    ("pessimistic", -2),
    ("pleased", 3),
    ("pleasure", 3),
    ("poor", -2),
    ("positive", 2),
    ("postpone", -1),
    ("powerful", 2),
    ("pretty", 1),
    ("problem", -2),
    ("progress", 2),
    ("promise", 1),
    ("protect", 1),
    ("proud", 2),
    ("punished", -2),
    ("recession", -2),
    ("reject", -1),
    ("resign", -1),
    ("rich", 2),
    ("risk", -2),
    ("risky", -2),
    ("sad", -2),
    ("safe", 1),
    ("satisfied", 2),
    ("scandal", -3),
    ("scare", -2),
    ("scared", -2),
    ("secure", 2),
    ("severe", -2),
    ("shame", -2),
    ("shock", -2),
    ("shortage", -2),
    ("sick", -2),
    ("smart", 1),
    ("smile", 2),
    ("sorry", -1),
    ("steal", -2),
    ("stolen", -2),
    ("stop", -1),
    ("strength", 2),
    ("strong", 2),
    ("struggle", -2),
    ("stupid", -2),
    ("success", 2),
    ("successful", 3),
    ("suffer", -2),
    ("super", 3),
    ("support", 2),
    ("suspicious", -2),
    ("terrible", -3),
    ("terrific", 4),
    ("threat", -2),
    ("thrilled", 5),
    ("tragedy", -2),
    ("trouble", -2),
    ("trust", 1),
    ("ugly", -3),
    ("uncertain", -1),
    ("unemployment", -2),
    ("unhappy", -2),
    ("unstable", -2),
    ("upset", -2),
    ("useful", 2),
    ("useless", -2),
    ("violence", -3),
    ("vulnerable", -2),
    ("war", -2),
    ("warning", -3),
    ("weak", -2),
    ("weakness", -2),
    ("welcome", 2),
    ("win", 4),
    ("winner", 4),
    ("winning", 4),
    ("wonderful", 4),
    ("worried", -3),
    ("worry", -3),
    ("worse", -3),
    ("worst", -3),
    ("wrong", -2),
];

fn valence(word: &str) -> Option<i64> {
    LEXICON
        .binary_search_by(|(entry, _)| entry.cmp(&word))
        .ok()
        .map(|i| LEXICON[i].1)
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token)
}

/// Lowercased word tokens. Punctuation splits; apostrophes inside a word
/// survive so contracted negators keep their spelling.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Score a piece of text. Total function; unknown words contribute nothing.
pub fn analyze(text: &str) -> SentimentReport {
    let tokens = tokenize(text);
    let mut score = 0i64;
    let mut words = Vec::new();
    let mut negations = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let Some(value) = valence(token) else {
            continue;
        };
        let negated = i > 0 && is_negator(&tokens[i - 1]);
        if negated {
            negations.push(tokens[i - 1].clone());
        }
        score += if negated { -value } else { value };
        words.push(token.clone());
    }

    let comparative = if tokens.is_empty() {
        0.0
    } else {
        score as f64 / tokens.len() as f64
    };

    SentimentReport {
        score,
        comparative,
        tokens,
        words,
        negations,
    }
}
