//! Compiled-in bureau content tree.

use super::node::Directory;
use super::VirtualFileTree;

pub const BRIEF: &str = "Review all directories. Agent credentials are hidden in plain sight.";
pub const CANDIDATES_LOG: &str = "Candidates screened: 72\nQualified this cycle: 3";
pub const CREDENTIALS: &str =
    "Agent Credentials:\nID: DCIB-17-ALPHA\nPassphrase: NIGHTFALL-SIGNAL";
pub const PROFILE: &str = "export ROLE=candidate\nexport CLEARANCE=none";

/// `/home/recruit` with the screening brief, records and the secure folder.
pub fn bureau_tree() -> VirtualFileTree {
    let recruit = Directory::new()
        .with_file(".profile", PROFILE)
        .with_file("brief.txt", BRIEF)
        .with_dir(
            "records",
            Directory::new().with_file("candidates.log", CANDIDATES_LOG),
        )
        .with_dir(
            "secure",
            Directory::new().with_file("credentials.txt", CREDENTIALS),
        );

    VirtualFileTree::new(Directory::new().with_dir("home", Directory::new().with_dir("recruit", recruit)))
}
