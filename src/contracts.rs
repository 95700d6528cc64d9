pub mod condition;
pub mod flux_resource_document;
pub mod flux_resource_kind;
pub mod resource_identity;
pub mod resource_summary;
pub mod status_query_variables;
