//! # Planner Module Schemas
//!
//! One schema per [`PlannerModule`]. Each module's form produces a document
//! of the matching shape; the final blueprint nests the four module
//! documents under `modules`.

use blueprint_core::PlannerModule;
use blueprint_schema::SchemaNode;

/// Blueprint and module version strings: `v1.0`, `v12.3`.
pub const VERSION_PATTERN: &str = r"^v[0-9]+\.[0-9]+$";

/// RFC 3339 timestamp with seconds precision and an explicit offset.
pub const ISO_TIMESTAMP_PATTERN: &str =
    r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]+)?(Z|[+-][0-9]{2}:[0-9]{2})$";

const PRIORITIES: [&str; 4] = ["LOW", "MEDIUM", "HIGH", "CRITICAL"];
const SOURCE_TYPES: [&str; 6] = ["API", "FTP", "DATABASE", "FILE", "STREAM", "MANUAL"];
const ARCHITECTURES: [&str; 3] = ["BATCH", "STREAMING", "HYBRID"];
const COMPONENT_ROLES: [&str; 5] = ["INGEST", "TRANSFORM", "STORE", "SERVE", "MONITOR"];
const CLASSIFICATIONS: [&str; 4] = ["UNCLASSIFIED", "CUI", "SECRET", "TOP_SECRET"];
const PII_HANDLING: [&str; 4] = ["NONE", "MASKED", "ENCRYPTED", "TOKENIZED"];

/// Minutes in a week; the longest refresh interval a source may declare.
const MAX_REFRESH_MINUTES: f64 = 10_080.0;

/// Ten years.
const MAX_RETENTION_DAYS: f64 = 3_650.0;

/// The schema a module's document must satisfy.
pub fn schema_for(module: PlannerModule) -> SchemaNode {
    match module {
        PlannerModule::CommanderIntent => commander_intent(),
        PlannerModule::DataSources => data_sources(),
        PlannerModule::SolutionDesign => solution_design(),
        PlannerModule::Security => security(),
        PlannerModule::FinalBlueprint => final_blueprint(),
    }
}

fn non_empty_string() -> SchemaNode {
    SchemaNode::string().min_length(1).into()
}

fn string_list() -> SchemaNode {
    SchemaNode::array().items(non_empty_string()).into()
}

fn commander_intent() -> SchemaNode {
    SchemaNode::object()
        .required_property("mission_name", SchemaNode::string().min_length(1).max_length(120))
        .required_property("objective", SchemaNode::string().min_length(10))
        .required_property("end_state", non_empty_string())
        .property("priority", SchemaNode::string().allowed(PRIORITIES))
        .property("key_tasks", SchemaNode::array().items(non_empty_string()).min_items(1))
        .property("constraints", string_list())
        .property("version", SchemaNode::string().pattern(VERSION_PATTERN))
        .property("notes", SchemaNode::documented("Free-form planner notes"))
        .into()
}

fn data_sources() -> SchemaNode {
    let url_connection = SchemaNode::object()
        .required_property("url", SchemaNode::string().pattern("^https?://"))
        .property("auth", SchemaNode::string().allowed(["NONE", "BASIC", "TOKEN", "OAUTH2"]));

    let host_connection = SchemaNode::object()
        .required_property("host", non_empty_string())
        .required_property("port", SchemaNode::number().minimum(1.0).maximum(65_535.0));

    let field = SchemaNode::object()
        .required_property("name", non_empty_string())
        .required_property("type", non_empty_string())
        .property("description", SchemaNode::string());

    let source = SchemaNode::object()
        .required_property("name", non_empty_string())
        .required_property("source_type", SchemaNode::string().allowed(SOURCE_TYPES))
        .property("description", SchemaNode::string())
        .property("connection", SchemaNode::one_of([url_connection, host_connection]))
        .property(
            "refresh_interval_minutes",
            SchemaNode::number().minimum(0.0).maximum(MAX_REFRESH_MINUTES),
        )
        .property("contains_pii", SchemaNode::boolean())
        .property("fields", SchemaNode::array().items(field));

    SchemaNode::object()
        .required_property("data_sources", SchemaNode::array().items(source).min_items(1))
        .into()
}

fn solution_design() -> SchemaNode {
    let component = SchemaNode::object()
        .required_property("name", non_empty_string())
        .required_property("role", SchemaNode::string().allowed(COMPONENT_ROLES))
        .property("technology", SchemaNode::string())
        .property("depends_on", string_list());

    SchemaNode::object()
        .required_property("architecture", SchemaNode::string().allowed(ARCHITECTURES))
        .required_property("components", SchemaNode::array().items(component).min_items(1))
        .property("estimated_monthly_cost", SchemaNode::number().minimum(0.0))
        .property("notes", SchemaNode::string())
        .into()
}

fn security() -> SchemaNode {
    SchemaNode::object()
        .required_property("classification", SchemaNode::string().allowed(CLASSIFICATIONS))
        .required_property("encryption_at_rest", SchemaNode::boolean())
        .required_property("encryption_in_transit", SchemaNode::boolean())
        .property("access_roles", string_list())
        .property(
            "retention_days",
            SchemaNode::number().minimum(1.0).maximum(MAX_RETENTION_DAYS),
        )
        .property("pii_handling", SchemaNode::string().allowed(PII_HANDLING))
        .into()
}

fn final_blueprint() -> SchemaNode {
    let modules = SchemaNode::object()
        .required_property(
            PlannerModule::CommanderIntent.as_str(),
            commander_intent(),
        )
        .property(PlannerModule::DataSources.as_str(), data_sources())
        .property(PlannerModule::SolutionDesign.as_str(), solution_design())
        .property(PlannerModule::Security.as_str(), security());

    SchemaNode::object()
        .required_property("blueprint_version", SchemaNode::string().pattern(VERSION_PATTERN))
        .required_property("generated_at", SchemaNode::string().pattern(ISO_TIMESTAMP_PATTERN))
        .required_property("modules", modules)
        .property("title", non_empty_string())
        .into()
}
