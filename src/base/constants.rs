//! Constants shared by the extractor and the renaming-table loader.

/// Method name used for code outside any method (field initializers, class headers).
pub const OUTSIDE_METHOD: &str = "(outside-method)";

/// Method name used for static and instance initializer blocks.
pub const CLASS_INITIALIZER: &str = "{}";

/// First index handed out to declarations inside injected code regions.
pub const DEFAULT_INJECTED_INDEX_BASE: u32 = 100;

/// Comment opener that can carry a region marker.
pub const LINE_COMMENT_PREFIX: &str = "//";

/// Region marker command opening an injected region (case-insensitive).
pub const REGION_START: &str = "start";

/// Region marker command closing an injected region (case-insensitive).
pub const REGION_END: &str = "end";

/// Field delimiter of range map records.
pub const RECORD_DELIMITER: char = '\t';

/// Leading marker of every range map record.
pub const RECORD_MARKER: &str = "@";

/// Index written for a variable whose declaration index was never recorded.
pub const MISSING_INDEX: i64 = -1;

// Renaming-table record kinds
pub const SRG_CLASS: &str = "CL:";
pub const SRG_FIELD: &str = "FD:";
pub const SRG_METHOD: &str = "MD:";
pub const SRG_PARAMETERS: &str = "PA:";

/// Hierarchical separator in renaming-table paths.
pub const SRG_PATH_SEPARATOR: char = '/';
