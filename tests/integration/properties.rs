use crate::integration::support::{hidden_tree, interpreter_for};
use dcib_terminal::TreePath;
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        Just("".to_string()),
        Just("~".to_string()),
        Just("home".to_string()),
        Just("recruit".to_string()),
        Just("secure".to_string()),
        Just(".vault".to_string()),
        Just("empty".to_string()),
        Just("brief.txt".to_string()),
        "[a-z.~]{1,6}",
    ]
}

fn raw_path() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(token(), 0..8)).prop_map(|(absolute, tokens)| {
        let joined = tokens.join("/");
        if absolute {
            format!("/{}", joined)
        } else {
            joined
        }
    })
}

fn command_line() -> impl Strategy<Value = String> {
    let verbs = prop_oneof![
        Just("cd"),
        Just("ls"),
        Just("ls -a"),
        Just("cat"),
        Just("pwd"),
        Just("clear"),
        Just("rm"),
    ];
    (verbs, raw_path()).prop_map(|(verb, path)| format!("{} {}", verb, path))
}

proptest! {
    #[test]
    fn resolution_is_total_and_normalized(raw in ".*", current in raw_path()) {
        let home = TreePath::parse_absolute("/home/recruit");
        let current = TreePath::parse_absolute(&current);
        let resolved = TreePath::resolve(&raw, &current, &home);
        for segment in resolved.segments() {
            prop_assert!(!segment.is_empty());
            prop_assert!(segment != "." && segment != "..");
        }
    }

    #[test]
    fn dotdot_at_root_is_noop(dots in 1usize..6) {
        let raw = vec![".."; dots].join("/");
        let root = TreePath::root();
        let home = TreePath::parse_absolute("/home/recruit");
        prop_assert_eq!(TreePath::resolve(&raw, &root, &home), root);
    }

    #[test]
    fn current_location_is_always_a_directory(lines in prop::collection::vec(command_line(), 0..24)) {
        let mut terminal = interpreter_for(hidden_tree());
        for line in &lines {
            terminal.evaluate(line);
            prop_assert!(terminal.tree().is_directory(terminal.session().current()));
        }
    }

    #[test]
    fn cd_is_idempotent(target in raw_path()) {
        let mut terminal = interpreter_for(hidden_tree());
        let line = format!("cd /{}", target.trim_start_matches('/'));
        terminal.evaluate(&line);
        let once = terminal.session().current().clone();
        let second = terminal.evaluate(&line);
        prop_assert!(!second.session_mutated);
        prop_assert_eq!(terminal.session().current(), &once);
    }

    #[test]
    fn ls_all_is_superset(lines in prop::collection::vec(command_line(), 0..12)) {
        let mut terminal = interpreter_for(hidden_tree());
        for line in &lines {
            terminal.evaluate(line);
        }
        let plain = terminal.evaluate("ls").output_lines.join("");
        let all = terminal.evaluate("ls -a").output_lines.join("");
        let all_names: Vec<&str> = all.split("  ").collect();
        for name in plain.split("  ").filter(|name| !name.is_empty()) {
            prop_assert!(!name.starts_with('.'));
            prop_assert!(all_names.contains(&name));
        }
    }

    #[test]
    fn cd_then_parent_round_trips(lines in prop::collection::vec(command_line(), 0..12), child in token()) {
        let mut terminal = interpreter_for(hidden_tree());
        for line in &lines {
            terminal.evaluate(line);
        }
        let start = terminal.session().current().clone();
        let simple_child = !child.is_empty() && child != "." && child != ".." && !child.starts_with('~');
        if simple_child && !start.is_root() {
            let evaluation = terminal.evaluate(&format!("cd {}", child));
            if evaluation.session_mutated {
                terminal.evaluate("cd ..");
                prop_assert_eq!(terminal.session().current(), &start);
            }
        }
    }
}
