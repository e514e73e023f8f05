use crate::domain::model::{Catalog, FeatureVector};
use crate::utils::error::Result;

/// Supplies the in-memory ingredient catalog. Implementations own the
/// source format; the core only sees the resulting `Catalog`.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Catalog>> + Send;
}

/// Pre-trained balance classifier. Returns the raw label; only the
/// evaluator decides which labels are in-domain.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<i64>;
}
