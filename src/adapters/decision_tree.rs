use crate::domain::model::FeatureVector;
use crate::domain::ports::Classifier;
use crate::utils::error::{NutriError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One node of the serialized tree. Children are referenced by index into
/// the flat node array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: i64,
    },
}

/// Pre-trained binary decision tree, deserialized from a JSON artifact.
/// The root is node 0; a split goes left when the feature value is at or
/// below the threshold. Structural validation at construction guarantees
/// every walk reaches a leaf: child indices must be in range and strictly
/// descending (greater than the parent index).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTree")]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

#[derive(Deserialize)]
struct RawTree {
    nodes: Vec<TreeNode>,
}

impl TryFrom<RawTree> for DecisionTree {
    type Error = NutriError;

    fn try_from(raw: RawTree) -> Result<Self> {
        DecisionTree::new(raw.nodes)
    }
}

impl DecisionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Result<Self> {
        validate(&nodes)?;
        Ok(Self { nodes })
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path).await.map_err(|e| NutriError::ModelLoad {
            message: format!("{}: {}", path.display(), e),
        })?;

        let tree: DecisionTree = serde_json::from_slice(&raw)?;
        tracing::debug!(
            "Loaded decision tree with {} nodes from {}",
            tree.nodes.len(),
            path.display()
        );
        Ok(tree)
    }
}

fn validate(nodes: &[TreeNode]) -> Result<()> {
    if nodes.is_empty() {
        return Err(NutriError::ModelLoad {
            message: "decision tree has no nodes".to_string(),
        });
    }

    for (idx, node) in nodes.iter().enumerate() {
        if let TreeNode::Split {
            feature,
            left,
            right,
            ..
        } = node
        {
            if *feature >= FeatureVector::LEN {
                return Err(NutriError::ModelLoad {
                    message: format!(
                        "node {}: feature index {} out of range (arity {})",
                        idx,
                        feature,
                        FeatureVector::LEN
                    ),
                });
            }
            for (side, child) in [("left", *left), ("right", *right)] {
                if child >= nodes.len() {
                    return Err(NutriError::ModelLoad {
                        message: format!("node {}: {} child {} out of range", idx, side, child),
                    });
                }
                if child <= idx {
                    return Err(NutriError::ModelLoad {
                        message: format!(
                            "node {}: {} child {} does not descend",
                            idx, side, child
                        ),
                    });
                }
            }
        }
    }

    Ok(())
}

impl Classifier for DecisionTree {
    fn predict(&self, features: &FeatureVector) -> Result<i64> {
        let bits = features.as_bits();
        let mut node = 0;

        // Children strictly descend, so this walk always hits a leaf.
        loop {
            match &self.nodes[node] {
                TreeNode::Leaf { class } => return Ok(*class),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if f64::from(bits[*feature]) <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}
