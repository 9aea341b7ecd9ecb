use dcib_terminal::{CommandInterpreter, Directory, SessionSettings, VirtualFileTree};
use std::sync::Arc;

pub const CREDENTIALS: &str = "Agent Credentials:\nID: DCIB-17-ALPHA\nPassphrase: NIGHTFALL-SIGNAL";

/// root -> home -> recruit -> {brief.txt, secure -> credentials.txt}
pub fn scenario_tree() -> VirtualFileTree {
    let recruit = Directory::new()
        .with_file("brief.txt", "Review all directories.")
        .with_dir(
            "secure",
            Directory::new().with_file("credentials.txt", CREDENTIALS),
        );
    VirtualFileTree::new(Directory::new().with_dir("home", Directory::new().with_dir("recruit", recruit)))
}

/// Scenario tree plus hidden entries, a nested hidden directory and an
/// empty directory.
pub fn hidden_tree() -> VirtualFileTree {
    let recruit = Directory::new()
        .with_file(".profile", "export ROLE=candidate")
        .with_file("brief.txt", "Review all directories.")
        .with_dir(
            ".vault",
            Directory::new()
                .with_file("key.txt", "k")
                .with_file(".seal", "s"),
        )
        .with_dir("empty", Directory::new())
        .with_dir(
            "secure",
            Directory::new().with_file("credentials.txt", CREDENTIALS),
        );
    VirtualFileTree::new(Directory::new().with_dir("home", Directory::new().with_dir("recruit", recruit)))
}

pub fn interpreter_for(tree: VirtualFileTree) -> CommandInterpreter {
    CommandInterpreter::new(Arc::new(tree), &SessionSettings::default()).unwrap()
}
