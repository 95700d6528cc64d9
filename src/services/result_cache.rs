use crate::contracts::condition::ConditionList;
use crate::contracts::status_query_variables::StatusQueryVariables;
use crate::services::base::upsert_repository::UpsertRepository;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Addresses the cached result of one status query: the query identity and its variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub query: String,
    pub variables: StatusQueryVariables,
}

/// The result data of a status query: field name to condition list.
pub type CacheEntry = BTreeMap<String, ConditionList>;

/// Results of status queries that background watches keep up to date.
/// An upsert replaces the entry as a whole: the last write wins.
pub type ResultCache =
    dyn UpsertRepository<CacheKey, CacheEntry, ReadError = anyhow::Error, Error = anyhow::Error>;

/// The cache slot a watch writes to: a query result and the field holding the conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheTarget {
    pub key: CacheKey,
    pub field: String,
}

impl CacheKey {
    pub fn new(query: impl Into<String>, variables: StatusQueryVariables) -> Self {
        CacheKey {
            query: query.into(),
            variables,
        }
    }
}

impl CacheTarget {
    pub fn new(key: CacheKey, field: impl Into<String>) -> Self {
        CacheTarget {
            key,
            field: field.into(),
        }
    }
}

impl Display for CacheTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let variables = &self.key.variables;
        write!(
            f,
            "{}.{} (namespace: {}, environment: {}, path: {})",
            self.key.query,
            self.field,
            variables.namespace,
            variables.environment_name.as_deref().unwrap_or_default(),
            variables.flux_resource_path.as_deref().unwrap_or_default()
        )
    }
}
