// Constants shared between the example command handlers

/// Name of the schema all example entities live in.
pub const DEFAULT_SCHEMA: &str = "warren_example";

/// The example entities and the dimensionality of their feature vectors.
pub const ENTITIES: [(&str, u32); 3] = [("scalablecolor", 64), ("cedd", 144), ("jhist", 576)];

// Column layout shared by all example entities
/// Name of the string identifier column.
pub const ID_COLUMN: &str = "id";
/// Name of the feature vector column.
pub const FEATURE_COLUMN: &str = "feature";

// Field offsets in the tab-separated sample files
/// Offset of the row identifier field.
pub const TSV_ID_FIELD: usize = 0;
/// Offset of the space-separated feature vector field.
pub const TSV_FEATURE_FIELD: usize = 3;

/// Number of rows fetched by the plain select example.
pub const SELECT_LIMIT: u64 = 3;

/// Number of neighbours fetched by the kNN example.
pub const DEFAULT_K: u32 = 10;

/// Row identifiers looked up by the filtered select example. One matches
/// a row in each of the three sample files.
pub const LOOKUP_IDS: [&str; 3] = [
    "fca0132f519e71d13fb82b86964872",
    "0b414f0e6e82cd0aefae3d2bd791b2",
    "0f412c5bd41f9b91d8635bb1a886a36",
];

/// Default directory holding the tab-separated sample files.
pub const DEFAULT_DATA_DIR: &str = "data";
