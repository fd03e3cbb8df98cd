/// The parsed components of a GitHub pull request page URL.
/// Extracted by parse_pr_url() in fetch/mod.rs.
#[derive(Debug, Clone)]
pub struct PrUrl {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

/// Size metrics for a pull request, read from the GitHub REST API.
///
/// Both counts must be present as non-negative integers in the API
/// response; a body where either is missing or non-numeric is a fetch
/// failure, never a metrics value with holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrMetrics {
    /// Number of commits on the PR branch
    pub commits: u64,
    /// Number of files touched by the PR
    pub changed_files: u64,
}
