use crate::integration::support::{hidden_tree, interpreter_for, scenario_tree, CREDENTIALS};

#[test]
fn pwd_at_start_is_home() {
    let mut terminal = interpreter_for(scenario_tree());
    assert_eq!(terminal.evaluate("pwd").output_lines, vec!["/home/recruit"]);
}

#[test]
fn ls_at_start_lists_in_insertion_order() {
    let mut terminal = interpreter_for(scenario_tree());
    assert_eq!(terminal.evaluate("ls").output_lines, vec!["brief.txt  secure"]);
}

#[test]
fn cd_then_pwd_then_cat() {
    let mut terminal = interpreter_for(scenario_tree());
    terminal.evaluate("cd secure");
    assert_eq!(terminal.evaluate("pwd").output_lines, vec!["/home/recruit/secure"]);
    assert_eq!(
        terminal.evaluate("cat credentials.txt").output_lines,
        vec![CREDENTIALS]
    );
}

#[test]
fn cat_missing_file_keeps_location() {
    let mut terminal = interpreter_for(scenario_tree());
    let evaluation = terminal.evaluate("cat missing.txt");
    assert_eq!(evaluation.output_lines, vec!["cat: missing.txt: No such file"]);
    assert!(!evaluation.session_mutated);
    assert_eq!(terminal.session().current().to_string(), "/home/recruit");
}

#[test]
fn disallowed_command_has_no_effect() {
    let mut terminal = interpreter_for(scenario_tree());
    let evaluation = terminal.evaluate("rm brief.txt");
    assert_eq!(evaluation.output_lines, vec!["Command not allowed: rm"]);
    assert!(!evaluation.session_mutated);
    assert_eq!(terminal.evaluate("ls").output_lines, vec!["brief.txt  secure"]);
}

#[test]
fn shell_syntax_is_never_interpreted() {
    let mut terminal = interpreter_for(scenario_tree());
    for line in ["ls | grep x", "echo $HOME", "./run.sh", "cat brief.txt; rm brief.txt"] {
        let evaluation = terminal.evaluate(line);
        assert_eq!(evaluation.output_lines.len(), 1, "line {line:?}");
        assert!(!evaluation.session_mutated);
    }
    assert_eq!(
        terminal.evaluate("ls | grep x").output_lines,
        vec!["ls: unsupported option: |"]
    );
    assert_eq!(
        terminal.evaluate("echo $HOME").output_lines,
        vec!["Command not allowed: echo"]
    );
}

#[test]
fn cd_ignores_arguments_after_the_target() {
    let mut terminal = interpreter_for(scenario_tree());
    let evaluation = terminal.evaluate("cd secure && pwd");
    assert!(evaluation.output_lines.is_empty());
    assert!(evaluation.session_mutated);
    assert_eq!(terminal.session().current().to_string(), "/home/recruit/secure");
}

#[test]
fn empty_directory_prints_empty_line() {
    let mut terminal = interpreter_for(hidden_tree());
    terminal.evaluate("cd empty");
    assert_eq!(terminal.evaluate("ls").output_lines, vec![""]);
    assert_eq!(terminal.evaluate("ls -a").output_lines, vec![""]);
}

#[test]
fn hidden_directory_contents_filtered_per_directory() {
    let mut terminal = interpreter_for(hidden_tree());
    assert_eq!(
        terminal.evaluate("ls").output_lines,
        vec!["brief.txt  empty  secure"]
    );
    assert_eq!(
        terminal.evaluate("ls -a").output_lines,
        vec![".profile  brief.txt  .vault  empty  secure"]
    );

    let evaluation = terminal.evaluate("cd .vault");
    assert!(evaluation.session_mutated);
    assert_eq!(terminal.prompt(), "recruit@dcib:~/.vault$");
    assert_eq!(terminal.evaluate("ls").output_lines, vec!["key.txt"]);
    assert_eq!(terminal.evaluate("ls -a").output_lines, vec!["key.txt  .seal"]);
}

#[test]
fn navigation_through_absolute_and_home_paths() {
    let mut terminal = interpreter_for(scenario_tree());
    terminal.evaluate("cd /");
    assert_eq!(terminal.evaluate("pwd").output_lines, vec!["/"]);
    assert_eq!(terminal.evaluate("ls").output_lines, vec!["home"]);

    terminal.evaluate("cd ~/secure/../secure/.");
    assert_eq!(terminal.evaluate("pwd").output_lines, vec!["/home/recruit/secure"]);

    terminal.evaluate("cd ../../..");
    assert_eq!(terminal.evaluate("pwd").output_lines, vec!["/"]);
    terminal.evaluate("cd ..");
    assert_eq!(terminal.evaluate("pwd").output_lines, vec!["/"]);
}

#[test]
fn cd_into_file_is_rejected() {
    let mut terminal = interpreter_for(scenario_tree());
    let evaluation = terminal.evaluate("cd brief.txt");
    assert_eq!(evaluation.output_lines, vec!["cd: no such directory: brief.txt"]);
    assert!(!evaluation.session_mutated);
}

#[test]
fn echo_line_tracks_location() {
    let mut terminal = interpreter_for(scenario_tree());
    assert_eq!(terminal.evaluate("cd secure").echoed_prompt, "recruit@dcib:~$ cd secure");
    assert_eq!(terminal.evaluate("pwd").echoed_prompt, "recruit@dcib:~/secure$ pwd");
    terminal.evaluate("cd /home");
    assert_eq!(terminal.evaluate("").echoed_prompt, "recruit@dcib:/home$ ");
}
