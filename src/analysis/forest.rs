//! Bagged decision-tree ensemble
//!
//! CART trees split on a single feature at a time using Gini impurity, with
//! thresholds placed halfway between neighbouring distinct values. Each tree
//! sees a bootstrap resample of the training set and a random subset of
//! features at every node. All randomness comes from one seeded RNG, so a
//! given seed always produces the same forest.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::features::{FeatureVector, FEATURE_COUNT};
use super::tier::Tier;
use super::training_data::Archetype;
use crate::config::ForestSettings;
use crate::error::{BudgetError, BudgetResult};

const CLASS_COUNT: usize = Tier::ALL.len();

/// A node in a fitted decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Leaf {
        tier: Tier,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn predict(&self, features: &FeatureVector) -> Tier {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { tier } => return *tier,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features.get(*feature) <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    /// Depth of the subtree rooted here (a lone leaf has depth 0)
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            Node::Leaf { .. } => Ok(()),
            Node::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if *feature >= FEATURE_COUNT {
                    return Err(format!("split on unknown feature {}", feature));
                }
                if !threshold.is_finite() {
                    return Err("split threshold is not finite".into());
                }
                left.validate()?;
                right.validate()
            }
        }
    }
}

/// A single fitted classification tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    /// Route a feature vector to a leaf
    pub fn predict(&self, features: &FeatureVector) -> Tier {
        self.root.predict(features)
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

/// An ensemble of decision trees voting by majority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Fit a forest to labeled examples
    pub fn fit(data: &[Archetype], settings: &ForestSettings) -> BudgetResult<Self> {
        settings.validate()?;
        if data.is_empty() {
            return Err(BudgetError::Validation(
                "Cannot fit a forest without training data".into(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(settings.seed);
        let builder = TreeBuilder {
            data,
            settings,
            max_features: max_features(),
        };

        let trees = (0..settings.n_trees)
            .map(|_| {
                let sample: Vec<usize> = (0..data.len())
                    .map(|_| rng.gen_range(0..data.len()))
                    .collect();
                DecisionTree {
                    root: builder.build(sample, 0, &mut rng),
                }
            })
            .collect::<Vec<_>>();

        debug!(
            trees = trees.len(),
            max_depth = trees.iter().map(DecisionTree::depth).max().unwrap_or(0),
            "Fitted decision forest"
        );

        Ok(Self { trees })
    }

    /// Count the votes each tier receives
    pub fn votes(&self, features: &FeatureVector) -> [usize; CLASS_COUNT] {
        let mut votes = [0; CLASS_COUNT];
        for tree in &self.trees {
            votes[usize::from(tree.predict(features).label())] += 1;
        }
        votes
    }

    /// Majority vote across all trees
    ///
    /// Ties go to the lower tier.
    pub fn predict(&self, features: &FeatureVector) -> Tier {
        majority(&self.votes(features))
    }

    /// Number of trees in the ensemble
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    /// Check that a deserialized forest is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest has no trees".into());
        }
        self.trees.iter().try_for_each(|t| t.root.validate())
    }
}

/// Candidate features examined per split: floor(sqrt(n_features))
fn max_features() -> usize {
    ((FEATURE_COUNT as f64).sqrt() as usize).max(1)
}

fn majority(counts: &[usize; CLASS_COUNT]) -> Tier {
    let mut best = 0;
    for (label, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = label;
        }
    }
    Tier::ALL[best]
}

fn gini(counts: &[usize; CLASS_COUNT], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

struct TreeBuilder<'a> {
    data: &'a [Archetype],
    settings: &'a ForestSettings,
    max_features: usize,
}

impl TreeBuilder<'_> {
    fn class_counts(&self, indices: &[usize]) -> [usize; CLASS_COUNT] {
        let mut counts = [0; CLASS_COUNT];
        for &i in indices {
            counts[usize::from(self.data[i].tier.label())] += 1;
        }
        counts
    }

    fn build(&self, indices: Vec<usize>, depth: usize, rng: &mut StdRng) -> Node {
        let counts = self.class_counts(&indices);
        let leaf = Node::Leaf {
            tier: majority(&counts),
        };

        let pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
        if pure
            || depth >= self.settings.max_depth
            || indices.len() < self.settings.min_samples_split
        {
            return leaf;
        }

        let sampled: Vec<usize> = index::sample(rng, FEATURE_COUNT, self.max_features).into_vec();
        let best = self.best_split(&indices, &sampled).or_else(|| {
            // None of the sampled features separates these rows
            let all: Vec<usize> = (0..FEATURE_COUNT).collect();
            self.best_split(&indices, &all)
        });

        let Some(split) = best else {
            return leaf;
        };

        let (left, right): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| self.data[i].features.get(split.feature) <= split.threshold);

        Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left: Box::new(self.build(left, depth + 1, rng)),
            right: Box::new(self.build(right, depth + 1, rng)),
        }
    }

    fn best_split(&self, indices: &[usize], features: &[usize]) -> Option<SplitCandidate> {
        let mut best: Option<SplitCandidate> = None;

        for &feature in features {
            let mut sorted = indices.to_vec();
            sorted.sort_by(|&a, &b| {
                self.data[a]
                    .features
                    .get(feature)
                    .total_cmp(&self.data[b].features.get(feature))
            });

            let total = sorted.len();
            let mut left = [0; CLASS_COUNT];
            let mut right = self.class_counts(&sorted);

            for pos in 1..total {
                let moved = usize::from(self.data[sorted[pos - 1]].tier.label());
                left[moved] += 1;
                right[moved] -= 1;

                let lo = self.data[sorted[pos - 1]].features.get(feature);
                let hi = self.data[sorted[pos]].features.get(feature);
                if lo == hi {
                    continue;
                }

                let impurity = (pos as f64 * gini(&left, pos)
                    + (total - pos) as f64 * gini(&right, total - pos))
                    / total as f64;

                if best.as_ref().map_or(true, |b| impurity < b.impurity) {
                    let mid = (lo + hi) / 2.0;
                    best = Some(SplitCandidate {
                        feature,
                        threshold: if mid >= hi { lo } else { mid },
                        impurity,
                    });
                }
            }
        }

        best
    }
}
