use crate::config::{ClassifierParams, TrainingExample};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const MAX_TREE_DEPTH: usize = 16;

/// Character n-gram count vectorizer with a deterministic vocabulary.
/// Vocabulary order is the sorted n-gram order, so identical training data
/// always yields identical feature indices.
pub struct NgramVectorizer {
    min_n: usize,
    max_n: usize,
    vocabulary: BTreeMap<String, usize>,
}

impl NgramVectorizer {
    pub fn fit(texts: &[&str], min_n: usize, max_n: usize) -> Self {
        let mut grams = std::collections::BTreeSet::new();
        for text in texts {
            grams.extend(Self::char_ngrams(text, min_n, max_n));
        }
        let vocabulary = grams
            .into_iter()
            .enumerate()
            .map(|(index, gram)| (gram, index))
            .collect();
        Self {
            min_n,
            max_n,
            vocabulary,
        }
    }

    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut counts = vec![0.0; self.vocabulary.len()];
        for gram in Self::char_ngrams(text, self.min_n, self.max_n) {
            if let Some(&index) = self.vocabulary.get(&gram) {
                counts[index] += 1.0;
            }
        }
        counts
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn char_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut grams = Vec::new();
        for n in min_n..=max_n {
            if chars.len() < n {
                continue;
            }
            for window in chars.windows(n) {
                grams.push(window.iter().collect());
            }
        }
        grams
    }
}

enum TreeNode {
    Leaf {
        phishing_fraction: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

struct DecisionTree {
    root: TreeNode,
}

impl DecisionTree {
    /// Grow a CART on a bootstrap sample. At each node a random subset of
    /// sqrt(n_features) candidate features is searched for the gini-optimal
    /// midpoint split.
    fn fit(x: &[Vec<f64>], y: &[bool], rows: Vec<usize>, rng: &mut StdRng) -> Self {
        let n_features = x.first().map(|r| r.len()).unwrap_or(0);
        let mtry = ((n_features as f64).sqrt().ceil() as usize).max(1);
        Self {
            root: Self::grow(x, y, rows, n_features, mtry, rng, 0),
        }
    }

    fn grow(
        x: &[Vec<f64>],
        y: &[bool],
        rows: Vec<usize>,
        n_features: usize,
        mtry: usize,
        rng: &mut StdRng,
        depth: usize,
    ) -> TreeNode {
        let positives = rows.iter().filter(|&&r| y[r]).count();
        let fraction = positives as f64 / rows.len() as f64;

        if positives == 0 || positives == rows.len() || depth >= MAX_TREE_DEPTH || n_features == 0 {
            return TreeNode::Leaf {
                phishing_fraction: fraction,
            };
        }

        let mut best: Option<(usize, f64, f64)> = None;
        for _ in 0..mtry {
            let feature = rng.gen_range(0..n_features);
            let mut values: Vec<f64> = rows.iter().map(|&r| x[r][feature]).collect();
            values.sort_by(|a, b| a.total_cmp(b));
            values.dedup();
            for pair in values.windows(2) {
                let threshold = (pair[0] + pair[1]) / 2.0;
                let impurity = Self::split_gini(x, y, &rows, feature, threshold);
                let improves = match best {
                    Some((_, _, current)) => impurity < current,
                    None => true,
                };
                if improves {
                    best = Some((feature, threshold, impurity));
                }
            }
        }

        let (feature, threshold, _) = match best {
            Some(split) => split,
            // Every sampled feature was constant across the sample
            None => {
                return TreeNode::Leaf {
                    phishing_fraction: fraction,
                }
            }
        };

        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) =
            rows.into_iter().partition(|&r| x[r][feature] <= threshold);
        if left_rows.is_empty() || right_rows.is_empty() {
            return TreeNode::Leaf {
                phishing_fraction: fraction,
            };
        }

        TreeNode::Split {
            feature,
            threshold,
            left: Box::new(Self::grow(
                x,
                y,
                left_rows,
                n_features,
                mtry,
                rng,
                depth + 1,
            )),
            right: Box::new(Self::grow(
                x,
                y,
                right_rows,
                n_features,
                mtry,
                rng,
                depth + 1,
            )),
        }
    }

    /// Weighted gini impurity of the two-way partition at `threshold`.
    fn split_gini(x: &[Vec<f64>], y: &[bool], rows: &[usize], feature: usize, threshold: f64) -> f64 {
        let mut left = (0usize, 0usize);
        let mut right = (0usize, 0usize);
        for &r in rows {
            let side = if x[r][feature] <= threshold {
                &mut left
            } else {
                &mut right
            };
            side.0 += 1;
            if y[r] {
                side.1 += 1;
            }
        }

        let gini = |total: usize, positive: usize| -> f64 {
            if total == 0 {
                return 0.0;
            }
            let p = positive as f64 / total as f64;
            2.0 * p * (1.0 - p)
        };

        let total = rows.len() as f64;
        (left.0 as f64 / total) * gini(left.0, left.1)
            + (right.0 as f64 / total) * gini(right.0, right.1)
    }

    fn predict(&self, features: &[f64]) -> f64 {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Leaf { phishing_fraction } => return *phishing_fraction,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

/// Bagged ensemble of CARTs. Tree construction consumes the seeded RNG in a
/// fixed order, so a given (training set, seed) pair always produces the
/// same forest.
pub struct RandomForestClassifier {
    trees: Vec<DecisionTree>,
}

impl RandomForestClassifier {
    pub fn fit(x: &[Vec<f64>], y: &[bool], n_trees: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let n_rows = x.len();
        let mut trees = Vec::with_capacity(n_trees);
        for _ in 0..n_trees {
            let bootstrap: Vec<usize> = (0..n_rows).map(|_| rng.gen_range(0..n_rows)).collect();
            trees.push(DecisionTree::fit(x, y, bootstrap, &mut rng));
        }
        Self { trees }
    }

    /// Mean phishing fraction across all trees, in [0, 1].
    pub fn predict_proba(&self, features: &[f64]) -> f64 {
        let sum: f64 = self.trees.iter().map(|t| t.predict(features)).sum();
        sum / self.trees.len() as f64
    }
}

/// Trained text classifier over character n-grams of the raw input.
///
/// Built once from the configured labeled set and immutable afterwards;
/// shared references can predict concurrently. Prediction deliberately runs
/// on the raw, un-normalized input string.
pub struct UrlClassifier {
    vectorizer: NgramVectorizer,
    forest: RandomForestClassifier,
}

impl UrlClassifier {
    pub fn train(examples: &[TrainingExample], params: &ClassifierParams) -> Self {
        let texts: Vec<&str> = examples.iter().map(|e| e.text.as_str()).collect();
        let labels: Vec<bool> = examples.iter().map(|e| e.phishing).collect();

        let vectorizer = NgramVectorizer::fit(&texts, params.min_ngram, params.max_ngram);
        let matrix: Vec<Vec<f64>> = texts.iter().map(|t| vectorizer.transform(t)).collect();
        let forest = RandomForestClassifier::fit(&matrix, &labels, params.trees, params.seed);

        log::debug!(
            "classifier trained: {} examples, {} ngram features, {} trees",
            examples.len(),
            vectorizer.vocabulary_size(),
            params.trees
        );

        Self { vectorizer, forest }
    }

    /// Estimated probability that `raw_input` is phishing.
    pub fn predict(&self, raw_input: &str) -> f64 {
        self.forest.predict_proba(&self.vectorizer.transform(raw_input))
    }
}
