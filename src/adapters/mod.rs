// Adapters layer: concrete implementations for the two external
// collaborators (catalog CSV, classifier artifact).

pub mod csv_catalog;
pub mod decision_tree;

pub use csv_catalog::CsvCatalog;
pub use decision_tree::{DecisionTree, TreeNode};
