//! TF-IDF vector space and cosine similarity.
//!
//! Terms are lowercased Unicode words of two or more word characters.
//! Weights use raw term counts and smoothed IDF,
//! `ln((1 + n) / (1 + df)) + 1`, and every document vector is L2-normalised.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static TERM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

fn terms(document: &str) -> Vec<String> {
    let lower = document.to_lowercase();
    TERM_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Dense TF-IDF vectors for one set of documents sharing a vocabulary.
#[derive(Debug, Clone)]
pub struct TfidfSpace {
    vocabulary: Vec<String>,
    vectors: Vec<Vec<f64>>,
}

impl TfidfSpace {
    /// Build the vocabulary and weights over `documents`.
    ///
    /// Returns `None` when the documents share no indexable term at all
    /// (empty input, punctuation only, single-character words only).
    #[must_use]
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Option<Self> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut vocabulary: Vec<String> = Vec::new();
        let mut counts: Vec<HashMap<usize, u32>> = Vec::with_capacity(documents.len());

        for document in documents {
            let mut doc_counts: HashMap<usize, u32> = HashMap::new();
            for term in terms(document.as_ref()) {
                let id = *index.entry(term.clone()).or_insert_with(|| {
                    vocabulary.push(term);
                    vocabulary.len() - 1
                });
                *doc_counts.entry(id).or_insert(0) += 1;
            }
            counts.push(doc_counts);
        }

        if vocabulary.is_empty() {
            return None;
        }

        let mut document_frequency = vec![0_u32; vocabulary.len()];
        for doc_counts in &counts {
            for &id in doc_counts.keys() {
                document_frequency[id] += 1;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + f64::from(df))).ln() + 1.0)
            .collect();

        let vectors = counts
            .iter()
            .map(|doc_counts| {
                let mut vector = vec![0.0; vocabulary.len()];
                for (&id, &tf) in doc_counts {
                    vector[id] = f64::from(tf) * idf[id];
                }
                normalize(&mut vector);
                vector
            })
            .collect();

        Some(Self {
            vocabulary,
            vectors,
        })
    }

    /// Weight vector of one document, or `None` past the end of the space.
    #[must_use]
    pub fn vector(&self, document: usize) -> Option<&[f64]> {
        self.vectors.get(document).map(Vec::as_slice)
    }

    /// Weight vectors of every document, in fit order.
    #[must_use]
    pub fn vectors(&self) -> &[Vec<f64>] {
        &self.vectors
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Number of documents in the space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Element-wise arithmetic mean of the vectors at `documents`.
    ///
    /// Indices past the end are ignored. Returns a zero vector when nothing is selected.
    #[must_use]
    pub fn mean_vector(&self, documents: std::ops::Range<usize>) -> Vec<f64> {
        let mut mean = vec![0.0; self.vocabulary.len()];
        let mut count = 0_usize;
        for vector in documents.filter_map(|d| self.vectors.get(d)) {
            for (acc, w) in mean.iter_mut().zip(vector) {
                *acc += w;
            }
            count += 1;
        }
        if count == 0 {
            return mean;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = count as f64;
        for w in &mut mean {
            *w /= count;
        }
        mean
    }
}

fn normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in vector.iter_mut() {
            *w /= norm;
        }
    }
}

/// Cosine similarity of two equal-length vectors, clamped to `[0.0, 1.0]`.
///
/// A zero vector on either side has similarity `0.0`.
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Similarity of every query to every reference in one joint TF-IDF space.
///
/// `result[q][r]` is the cosine similarity of `queries[q]` and
/// `references[r]`. Returns `None` when the joint vocabulary is empty.
#[must_use]
pub fn similarity_matrix<S: AsRef<str>>(references: &[S], queries: &[S]) -> Option<Vec<Vec<f64>>> {
    let documents: Vec<&str> = references
        .iter()
        .chain(queries)
        .map(|d| d.as_ref())
        .collect();
    let space = TfidfSpace::fit(&documents)?;
    let (reference_vectors, query_vectors) = space.vectors().split_at(references.len());

    let matrix = query_vectors
        .iter()
        .map(|query| {
            reference_vectors
                .iter()
                .map(|reference| cosine_similarity(query, reference))
                .collect()
        })
        .collect();
    Some(matrix)
}
